//! AWS::FMS resource schemas

pub mod notification_channel;
pub mod policy;
pub mod resource_set;

pub use notification_channel::fms_notification_channel_schema;
pub use policy::fms_policy_schema;
pub use resource_set::fms_resource_set_schema;

use stratus_core::schema::ResourceSchema;

/// Returns all fms schemas
pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        fms_notification_channel_schema(),
        fms_policy_schema(),
        fms_resource_set_schema(),
    ]
}
