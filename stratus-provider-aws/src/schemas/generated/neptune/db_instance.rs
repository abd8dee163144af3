//! db_instance schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::Neptune::DBInstance
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::tags_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for neptune.db_instance (AWS::Neptune::DBInstance)
pub fn neptune_db_instance_schema() -> ResourceSchema {
    ResourceSchema::new("neptune.db_instance", "AWS::Neptune::DBInstance")
        .with_description("The `AWS::Neptune::DBInstance` type creates an Amazon Neptune DB instance.")
        .attribute(
            AttributeSchema::new("allow_major_version_upgrade", AttributeType::Bool)
                .with_description("Indicates that major version upgrades are allowed. Changing this parameter doesn't result in an outage and the change is asynchronously applied as soo...")
                .with_provider_name("AllowMajorVersionUpgrade"),
        )
        .attribute(
            AttributeSchema::new("auto_minor_version_upgrade", AttributeType::Bool)
                .with_description("Indicates that minor version patches are applied automatically. When updating this property, some interruptions may occur.")
                .with_provider_name("AutoMinorVersionUpgrade"),
        )
        .attribute(
            AttributeSchema::new("availability_zone", AttributeType::String)
                .with_description("Specifies the name of the Availability Zone the DB instance is located in.")
                .with_provider_name("AvailabilityZone"),
        )
        .attribute(
            AttributeSchema::new("db_cluster_identifier", AttributeType::String)
                .with_description("If the DB instance is a member of a DB cluster, contains the name of the DB cluster that the DB instance is a member of.")
                .with_provider_name("DBClusterIdentifier"),
        )
        .attribute(
            AttributeSchema::new("db_instance_class", AttributeType::String)
                .required()
                .with_description("Contains the name of the compute and memory capacity class of the DB instance. If you update this property, some interruptions may occur.")
                .with_provider_name("DBInstanceClass"),
        )
        .attribute(
            AttributeSchema::new("db_instance_identifier", AttributeType::String)
                .with_description("Contains a user-supplied database identifier. This identifier is the unique key that identifies a DB instance.")
                .with_provider_name("DBInstanceIdentifier"),
        )
        .attribute(
            AttributeSchema::new("db_parameter_group_name", AttributeType::String)
                .with_description("The name of an existing DB parameter group or a reference to an AWS::Neptune::DBParameterGroup resource created in the template. If any of the data me...")
                .with_provider_name("DBParameterGroupName"),
        )
        .attribute(
            AttributeSchema::new("db_snapshot_identifier", AttributeType::String)
                .with_description("This parameter is not supported. `AWS::Neptune::DBInstance` does not support restoring from snapshots. `AWS::Neptune::DBCluster` does support restorin...")
                .with_provider_name("DBSnapshotIdentifier"),
        )
        .attribute(
            AttributeSchema::new("db_subnet_group_name", AttributeType::String)
                .with_description("A DB subnet group to associate with the DB instance. If you update this value, the new subnet group must be a subnet group in a new virtual private cl...")
                .with_provider_name("DBSubnetGroupName"),
        )
        .attribute(
            AttributeSchema::new("preferred_maintenance_window", AttributeType::String)
                .with_description("Specifies the weekly time range during which system maintenance can occur, in Universal Coordinated Time (UTC).")
                .with_provider_name("PreferredMaintenanceWindow"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("An arbitrary set of tags (key-value pairs) for this DB instance.")
                .with_provider_name("Tags"),
        )
        .return_attribute("Endpoint")
        .return_attribute("Id")
        .return_attribute("Port")
}
