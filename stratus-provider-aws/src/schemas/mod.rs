//! AWS CloudFormation resource schema definitions

pub mod generated;

use stratus_core::schema::ResourceSchema;

/// Returns all AWS CloudFormation schemas
/// Auto-generated from CloudFormation schemas
pub fn all_schemas() -> Vec<ResourceSchema> {
    generated::schemas()
}
