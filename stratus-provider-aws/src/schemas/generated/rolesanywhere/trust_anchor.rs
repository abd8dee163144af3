//! trust_anchor schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::RolesAnywhere::TrustAnchor
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::{enum_type, tags_type};
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Source property type
fn source_type() -> AttributeType {
    AttributeType::Struct {
        name: "Source".to_string(),
        fields: vec![
            AttributeSchema::new("source_data", source_data_type())
                .with_description("The data field of the trust anchor depending on its type.")
                .with_provider_name("SourceData"),
            AttributeSchema::new("source_type", enum_type(&["AWS_ACM_PCA", "CERTIFICATE_BUNDLE", "SELF_SIGNED_REPOSITORY"]))
                .with_description("The type of the TrustAnchor. .. epigraph:: `AWS_ACM_PCA` is not an allowed value in your region.")
                .with_provider_name("SourceType"),
        ],
    }
}

/// SourceData property type
fn source_data_type() -> AttributeType {
    AttributeType::Struct {
        name: "SourceData".to_string(),
        fields: vec![
            AttributeSchema::new("acm_pca_arn", AttributeType::String)
                .with_description("The root certificate of the AWS Private Certificate Authority specified by this ARN is used in trust validation for temporary credential requests. Inc...")
                .with_provider_name("AcmPcaArn"),
            AttributeSchema::new("x509_certificate_data", AttributeType::String)
                .with_description("The PEM-encoded data for the certificate anchor. Included for trust anchors of type `CERTIFICATE_BUNDLE` .")
                .with_provider_name("X509CertificateData"),
        ],
    }
}

/// Returns the schema for rolesanywhere.trust_anchor (AWS::RolesAnywhere::TrustAnchor)
pub fn rolesanywhere_trust_anchor_schema() -> ResourceSchema {
    ResourceSchema::new("rolesanywhere.trust_anchor", "AWS::RolesAnywhere::TrustAnchor")
        .with_description("Creates a trust anchor to establish trust between IAM Roles Anywhere and your certificate authority (CA).")
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .with_description("Indicates whether the trust anchor is enabled.")
                .with_provider_name("Enabled"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the trust anchor.")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("source", source_type())
                .required()
                .with_description("The trust anchor type and its related certificate data.")
                .with_provider_name("Source"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("The tags to attach to the trust anchor.")
                .with_provider_name("Tags"),
        )
        .return_attribute("TrustAnchorArn")
        .return_attribute("TrustAnchorId")
}
