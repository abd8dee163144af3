//! crl schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::RolesAnywhere::CRL
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::tags_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for rolesanywhere.crl (AWS::RolesAnywhere::CRL)
pub fn rolesanywhere_crl_schema() -> ResourceSchema {
    ResourceSchema::new("rolesanywhere.crl", "AWS::RolesAnywhere::CRL")
        .with_description("Imports the certificate revocation list (CRL).")
        .attribute(
            AttributeSchema::new("crl_data", AttributeType::String)
                .required()
                .with_description("The x509 v3 specified certificate revocation list (CRL).")
                .with_provider_name("CrlData"),
        )
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .with_description("Specifies whether the certificate revocation list (CRL) is enabled.")
                .with_provider_name("Enabled"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the certificate revocation list (CRL).")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("A list of tags to attach to the certificate revocation list (CRL).")
                .with_provider_name("Tags"),
        )
        .attribute(
            AttributeSchema::new("trust_anchor_arn", AttributeType::String)
                .with_description("The ARN of the TrustAnchor the certificate revocation list (CRL) will provide revocation for.")
                .with_provider_name("TrustAnchorArn"),
        )
        .return_attribute("CrlId")
}
