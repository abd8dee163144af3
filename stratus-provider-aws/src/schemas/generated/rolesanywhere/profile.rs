//! profile schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::RolesAnywhere::Profile
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::tags_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for rolesanywhere.profile (AWS::RolesAnywhere::Profile)
pub fn rolesanywhere_profile_schema() -> ResourceSchema {
    ResourceSchema::new("rolesanywhere.profile", "AWS::RolesAnywhere::Profile")
        .with_description("Creates a *profile* , a list of the roles that Roles Anywhere service is trusted to assume.")
        .attribute(
            AttributeSchema::new("duration_seconds", AttributeType::Number)
                .with_description("Sets the maximum number of seconds that vended temporary credentials through `CreateSession <https://docs.aws.amazon.com/rolesanywhere/latest/userguid...")
                .with_provider_name("DurationSeconds"),
        )
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .with_description("Indicates whether the profile is enabled.")
                .with_provider_name("Enabled"),
        )
        .attribute(
            AttributeSchema::new("managed_policy_arns", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("A list of managed policy ARNs that apply to the vended session credentials.")
                .with_provider_name("ManagedPolicyArns"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the profile.")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("require_instance_properties", AttributeType::Bool)
                .with_description("Specifies whether instance properties are required in temporary credential requests with this profile.")
                .with_provider_name("RequireInstanceProperties"),
        )
        .attribute(
            AttributeSchema::new("role_arns", AttributeType::List(Box::new(AttributeType::String)))
                .required()
                .with_description("A list of IAM role ARNs. During `CreateSession` , if a matching role ARN is provided, the properties in this profile will be applied to the intersecti...")
                .with_provider_name("RoleArns"),
        )
        .attribute(
            AttributeSchema::new("session_policy", AttributeType::String)
                .with_description("A session policy that applies to the trust boundary of the vended session credentials.")
                .with_provider_name("SessionPolicy"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("The tags to attach to the profile.")
                .with_provider_name("Tags"),
        )
        .return_attribute("ProfileArn")
        .return_attribute("ProfileId")
}
