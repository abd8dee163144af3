//! event_subscription schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::Neptune::EventSubscription
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for neptune.event_subscription (AWS::Neptune::EventSubscription)
pub fn neptune_event_subscription_schema() -> ResourceSchema {
    ResourceSchema::new("neptune.event_subscription", "AWS::Neptune::EventSubscription")
        .with_description("Creates an event notification subscription.")
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool)
                .with_description("A Boolean value indicating if the subscription is enabled. True indicates the subscription is enabled.")
                .with_provider_name("Enabled"),
        )
        .attribute(
            AttributeSchema::new("event_categories", AttributeType::List(Box::new(AttributeType::String)))
                .with_provider_name("EventCategories"),
        )
        .attribute(
            AttributeSchema::new("sns_topic_arn", AttributeType::String)
                .with_description("The topic ARN of the event notification subscription.")
                .with_provider_name("SnsTopicArn"),
        )
        .attribute(
            AttributeSchema::new("source_ids", AttributeType::List(Box::new(AttributeType::String)))
                .with_provider_name("SourceIds"),
        )
        .attribute(
            AttributeSchema::new("source_type", AttributeType::String)
                .with_description("The source type for the event notification subscription.")
                .with_provider_name("SourceType"),
        )
        .return_attribute("Id")
}
