//! db_subnet_group schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::Neptune::DBSubnetGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::tags_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for neptune.db_subnet_group (AWS::Neptune::DBSubnetGroup)
pub fn neptune_db_subnet_group_schema() -> ResourceSchema {
    ResourceSchema::new("neptune.db_subnet_group", "AWS::Neptune::DBSubnetGroup")
        .with_description("The `AWS::Neptune::DBSubnetGroup` type creates an Amazon Neptune DB subnet group.")
        .attribute(
            AttributeSchema::new("db_subnet_group_description", AttributeType::String)
                .required()
                .with_description("Provides the description of the DB subnet group.")
                .with_provider_name("DBSubnetGroupDescription"),
        )
        .attribute(
            AttributeSchema::new("db_subnet_group_name", AttributeType::String)
                .with_description("The name of the DB subnet group.")
                .with_provider_name("DBSubnetGroupName"),
        )
        .attribute(
            AttributeSchema::new("subnet_ids", AttributeType::List(Box::new(AttributeType::String)))
                .required()
                .with_description("The Amazon EC2 subnet IDs for the DB subnet group.")
                .with_provider_name("SubnetIds"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("The tags that you want to attach to the DB subnet group.")
                .with_provider_name("Tags"),
        )
        .return_attribute("Id")
}
