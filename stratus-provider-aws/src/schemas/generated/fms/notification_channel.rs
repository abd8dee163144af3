//! notification_channel schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::FMS::NotificationChannel
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema for fms.notification_channel (AWS::FMS::NotificationChannel)
pub fn fms_notification_channel_schema() -> ResourceSchema {
    ResourceSchema::new("fms.notification_channel", "AWS::FMS::NotificationChannel")
        .with_description("Designates the IAM role and Amazon Simple Notification Service (SNS) topic to use to record SNS logs.")
        .attribute(
            AttributeSchema::new("sns_role_name", AttributeType::String)
                .required()
                .with_description("The Amazon Resource Name (ARN) of the IAM role that allows Amazon SNS to record AWS Firewall Manager activity.")
                .with_provider_name("SnsRoleName"),
        )
        .attribute(
            AttributeSchema::new("sns_topic_arn", AttributeType::String)
                .required()
                .with_description("The Amazon Resource Name (ARN) of the SNS topic that collects notifications from AWS Firewall Manager .")
                .with_provider_name("SnsTopicArn"),
        )
}
