//! AWS::Neptune resource schemas

pub mod db_cluster;
pub mod db_cluster_parameter_group;
pub mod db_instance;
pub mod db_parameter_group;
pub mod db_subnet_group;
pub mod event_subscription;

pub use db_cluster::neptune_db_cluster_schema;
pub use db_cluster_parameter_group::neptune_db_cluster_parameter_group_schema;
pub use db_instance::neptune_db_instance_schema;
pub use db_parameter_group::neptune_db_parameter_group_schema;
pub use db_subnet_group::neptune_db_subnet_group_schema;
pub use event_subscription::neptune_event_subscription_schema;

use stratus_core::schema::ResourceSchema;

/// Returns all neptune schemas
pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        neptune_db_cluster_schema(),
        neptune_db_cluster_parameter_group_schema(),
        neptune_db_instance_schema(),
        neptune_db_parameter_group_schema(),
        neptune_db_subnet_group_schema(),
        neptune_event_subscription_schema(),
    ]
}
