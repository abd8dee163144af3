//! db_cluster_parameter_group schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::Neptune::DBClusterParameterGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::tags_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for neptune.db_cluster_parameter_group (AWS::Neptune::DBClusterParameterGroup)
pub fn neptune_db_cluster_parameter_group_schema() -> ResourceSchema {
    ResourceSchema::new("neptune.db_cluster_parameter_group", "AWS::Neptune::DBClusterParameterGroup")
        .with_description("The `AWS::Neptune::DBClusterParameterGroup` resource creates a new Amazon Neptune DB cluster parameter group.")
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .required()
                .with_description("Provides the customer-specified description for this DB cluster parameter group.")
                .with_provider_name("Description"),
        )
        .attribute(
            AttributeSchema::new("family", AttributeType::String)
                .required()
                .with_description("Must be `neptune1` for engine versions prior to `1.2.0.0 <https://docs.aws.amazon.com/neptune/latest/userguide/engine-releases-1.2.0.0.html>`_ , or `n...")
                .with_provider_name("Family"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .with_description("Provides the name of the DB cluster parameter group.")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("parameters", AttributeType::Json)
                .required()
                .with_description("The parameters to set for this DB cluster parameter group. The parameters are expressed as a JSON object consisting of key-value pairs. If you update...")
                .with_provider_name("Parameters"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("The tags that you want to attach to this parameter group.")
                .with_provider_name("Tags"),
        )
        .return_attribute("Id")
}
