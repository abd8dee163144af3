//! db_cluster schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::Neptune::DBCluster
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::tags_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// DBClusterRole property type
fn db_cluster_role_type() -> AttributeType {
    AttributeType::Struct {
        name: "DBClusterRole".to_string(),
        fields: vec![
            AttributeSchema::new("feature_name", AttributeType::String)
                .with_description("The name of the feature associated with the Amazon Identity and Access Management (IAM) role. For the list of supported feature names, see `DescribeDB...")
                .with_provider_name("FeatureName"),
            AttributeSchema::new("role_arn", AttributeType::String)
                .required()
                .with_description("The Amazon Resource Name (ARN) of the IAM role that is associated with the DB cluster.")
                .with_provider_name("RoleArn"),
        ],
    }
}

/// ServerlessScalingConfiguration property type
fn serverless_scaling_configuration_type() -> AttributeType {
    AttributeType::Struct {
        name: "ServerlessScalingConfiguration".to_string(),
        fields: vec![
            AttributeSchema::new("max_capacity", AttributeType::Number)
                .required()
                .with_description("The maximum number of Neptune capacity units (NCUs) for a DB instance in a Neptune Serverless cluster. You can specify NCU values in half-step increme...")
                .with_provider_name("MaxCapacity"),
            AttributeSchema::new("min_capacity", AttributeType::Number)
                .required()
                .with_description("The minimum number of Neptune capacity units (NCUs) for a DB instance in a Neptune Serverless cluster. You can specify NCU values in half-step increme...")
                .with_provider_name("MinCapacity"),
        ],
    }
}

/// Returns the schema for neptune.db_cluster (AWS::Neptune::DBCluster)
pub fn neptune_db_cluster_schema() -> ResourceSchema {
    ResourceSchema::new("neptune.db_cluster", "AWS::Neptune::DBCluster")
        .with_description("The `AWS::Neptune::DBCluster` resource creates an Amazon Neptune DB cluster. Neptune is a fully managed graph database.")
        .attribute(
            AttributeSchema::new("associated_roles", AttributeType::List(Box::new(db_cluster_role_type())))
                .with_description("Provides a list of the Amazon Identity and Access Management (IAM) roles that are associated with the DB cluster. IAM roles that are associated with a...")
                .with_provider_name("AssociatedRoles"),
        )
        .attribute(
            AttributeSchema::new("availability_zones", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Provides the list of EC2 Availability Zones that instances in the DB cluster can be created in.")
                .with_provider_name("AvailabilityZones"),
        )
        .attribute(
            AttributeSchema::new("backup_retention_period", AttributeType::Int)
                .with_description("Specifies the number of days for which automatic DB snapshots are retained. An update may require some interruption. See `ModifyDBInstance <https://do...")
                .with_provider_name("BackupRetentionPeriod"),
        )
        .attribute(
            AttributeSchema::new("copy_tags_to_snapshot", AttributeType::Bool)
                .with_description("*If set to `true` , tags are copied to any snapshot of the DB cluster that is created.*.")
                .with_provider_name("CopyTagsToSnapshot"),
        )
        .attribute(
            AttributeSchema::new("db_cluster_identifier", AttributeType::String)
                .with_description("Contains a user-supplied DB cluster identifier. This identifier is the unique key that identifies a DB cluster.")
                .with_provider_name("DBClusterIdentifier"),
        )
        .attribute(
            AttributeSchema::new("db_cluster_parameter_group_name", AttributeType::String)
                .with_description("Provides the name of the DB cluster parameter group. An update may require some interruption. See `ModifyDBInstance <https://docs.aws.amazon.com/neptu...")
                .with_provider_name("DBClusterParameterGroupName"),
        )
        .attribute(
            AttributeSchema::new("db_instance_parameter_group_name", AttributeType::String)
                .with_description("The name of the DB parameter group to apply to all instances of the DB cluster. Used only in case of a major engine version upgrade request Note that...")
                .with_provider_name("DBInstanceParameterGroupName"),
        )
        .attribute(
            AttributeSchema::new("db_port", AttributeType::Int)
                .with_description("The port number on which the DB instances in the DB cluster accept connections. If not specified, the default port used is `8182` . .. epigraph:: The...")
                .with_provider_name("DBPort"),
        )
        .attribute(
            AttributeSchema::new("db_subnet_group_name", AttributeType::String)
                .with_description("Specifies information on the subnet group associated with the DB cluster, including the name, description, and subnets in the subnet group.")
                .with_provider_name("DBSubnetGroupName"),
        )
        .attribute(
            AttributeSchema::new("deletion_protection", AttributeType::Bool)
                .with_description("Indicates whether or not the DB cluster has deletion protection enabled. The database can't be deleted when deletion protection is enabled.")
                .with_provider_name("DeletionProtection"),
        )
        .attribute(
            AttributeSchema::new("enable_cloudwatch_logs_exports", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Specifies a list of log types that are enabled for export to CloudWatch Logs.")
                .with_provider_name("EnableCloudwatchLogsExports"),
        )
        .attribute(
            AttributeSchema::new("engine_version", AttributeType::String)
                .with_description("Indicates the database engine version.")
                .with_provider_name("EngineVersion"),
        )
        .attribute(
            AttributeSchema::new("iam_auth_enabled", AttributeType::Bool)
                .with_description("True if mapping of Amazon Identity and Access Management (IAM) accounts to database accounts is enabled, and otherwise false.")
                .with_provider_name("IamAuthEnabled"),
        )
        .attribute(
            AttributeSchema::new("kms_key_id", AttributeType::String)
                .with_description("If `StorageEncrypted` is true, the Amazon KMS key identifier for the encrypted DB cluster.")
                .with_provider_name("KmsKeyId"),
        )
        .attribute(
            AttributeSchema::new("preferred_backup_window", AttributeType::String)
                .with_description("Specifies the daily time range during which automated backups are created if automated backups are enabled, as determined by the `BackupRetentionPerio...")
                .with_provider_name("PreferredBackupWindow"),
        )
        .attribute(
            AttributeSchema::new("preferred_maintenance_window", AttributeType::String)
                .with_description("Specifies the weekly time range during which system maintenance can occur, in Universal Coordinated Time (UTC).")
                .with_provider_name("PreferredMaintenanceWindow"),
        )
        .attribute(
            AttributeSchema::new("restore_to_time", AttributeType::String)
                .with_description("Creates a new DB cluster from a DB snapshot or DB cluster snapshot. If a DB snapshot is specified, the target DB cluster is created from the source DB...")
                .with_provider_name("RestoreToTime"),
        )
        .attribute(
            AttributeSchema::new("restore_type", AttributeType::String)
                .with_description("Creates a new DB cluster from a DB snapshot or DB cluster snapshot. If a DB snapshot is specified, the target DB cluster is created from the source DB...")
                .with_provider_name("RestoreType"),
        )
        .attribute(
            AttributeSchema::new("serverless_scaling_configuration", serverless_scaling_configuration_type())
                .with_description("Contains the scaling configuration of an Neptune Serverless DB cluster.")
                .with_provider_name("ServerlessScalingConfiguration"),
        )
        .attribute(
            AttributeSchema::new("snapshot_identifier", AttributeType::String)
                .with_description("Specifies the identifier for a DB cluster snapshot. Must match the identifier of an existing snapshot. After you restore a DB cluster using a `Snapsho...")
                .with_provider_name("SnapshotIdentifier"),
        )
        .attribute(
            AttributeSchema::new("source_db_cluster_identifier", AttributeType::String)
                .with_description("Creates a new DB cluster from a DB snapshot or DB cluster snapshot. If a DB snapshot is specified, the target DB cluster is created from the source DB...")
                .with_provider_name("SourceDBClusterIdentifier"),
        )
        .attribute(
            AttributeSchema::new("storage_encrypted", AttributeType::Bool)
                .with_description("Indicates whether the DB cluster is encrypted. If you specify the `DBClusterIdentifier` , `DBSnapshotIdentifier` , or `SourceDBInstanceIdentifier` pro...")
                .with_provider_name("StorageEncrypted"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("The tags assigned to this cluster.")
                .with_provider_name("Tags"),
        )
        .attribute(
            AttributeSchema::new("use_latest_restorable_time", AttributeType::Bool)
                .with_description("Creates a new DB cluster from a DB snapshot or DB cluster snapshot. If a DB snapshot is specified, the target DB cluster is created from the source DB...")
                .with_provider_name("UseLatestRestorableTime"),
        )
        .attribute(
            AttributeSchema::new("vpc_security_group_ids", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Provides a list of VPC security groups that the DB cluster belongs to.")
                .with_provider_name("VpcSecurityGroupIds"),
        )
        .return_attribute("ClusterResourceId")
        .return_attribute("Endpoint")
        .return_attribute("Port")
        .return_attribute("ReadEndpoint")
}
