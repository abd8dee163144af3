//! resource_set schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::FMS::ResourceSet
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::tags_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for fms.resource_set (AWS::FMS::ResourceSet)
pub fn fms_resource_set_schema() -> ResourceSchema {
    ResourceSchema::new("fms.resource_set", "AWS::FMS::ResourceSet")
        .with_description("A set of resources to include in a policy.")
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("A description of the resource set.")
                .with_provider_name("Description"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The descriptive name of the resource set. You can't change the name of a resource set after you create it.")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("resource_type_list", AttributeType::List(Box::new(AttributeType::String)))
                .required()
                .with_description("Determines the resources that can be associated to the resource set. Depending on your setting for max results and the number of resource sets, a sing...")
                .with_provider_name("ResourceTypeList"),
        )
        .attribute(
            AttributeSchema::new("resources", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The resources included in the resource set.")
                .with_provider_name("Resources"),
        )
        .attribute(
            AttributeSchema::new("tags", tags_type())
                .with_description("A collection of key:value pairs associated with a resource set. The key:value pair can be anything you define. Typically, the tag key represents a cat...")
                .with_provider_name("Tags"),
        )
        .return_attribute("Id")
}
