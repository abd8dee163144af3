//! web_acl schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::WAF::WebACL
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::enum_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// ActivatedRule property type
fn activated_rule_type() -> AttributeType {
    AttributeType::Struct {
        name: "ActivatedRule".to_string(),
        fields: vec![
            AttributeSchema::new("action", waf_action_type())
                .with_description("Specifies the action that Amazon CloudFront or AWS WAF takes when a web request matches the conditions in the `Rule` . Valid values for `Action` inclu...")
                .with_provider_name("Action"),
            AttributeSchema::new("priority", AttributeType::Int)
                .required()
                .with_description("Specifies the order in which the `Rules` in a `WebACL` are evaluated. Rules with a lower value for `Priority` are evaluated before `Rules` with a high...")
                .with_provider_name("Priority"),
            AttributeSchema::new("rule_id", AttributeType::String)
                .required()
                .with_description("The `RuleId` for a `Rule` . You use `RuleId` to get more information about a `Rule` , update a `Rule` , insert a `Rule` into a `WebACL` or delete")
                .with_provider_name("RuleId"),
        ],
    }
}

/// WafAction property type
fn waf_action_type() -> AttributeType {
    AttributeType::Struct {
        name: "WafAction".to_string(),
        fields: vec![
            AttributeSchema::new("type", enum_type(&["ALLOW", "BLOCK", "COUNT"]))
                .required()
                .with_description("Specifies how you want AWS WAF to respond to requests that match the settings in a `Rule` . Valid settings include the following: - `ALLOW` : AWS WAF...")
                .with_provider_name("Type"),
        ],
    }
}

/// Returns the schema for waf.web_acl (AWS::WAF::WebACL)
pub fn waf_web_acl_schema() -> ResourceSchema {
    ResourceSchema::new("waf.web_acl", "AWS::WAF::WebACL")
        .with_description("The rules that identify the requests to allow, block, or count, and the default action (AWS WAF Classic).")
        .attribute(
            AttributeSchema::new("default_action", waf_action_type())
                .required()
                .with_description("The action to perform if none of the `Rules` contained in the `WebACL` match. The action is specified by the `WafAction` object.")
                .with_provider_name("DefaultAction"),
        )
        .attribute(
            AttributeSchema::new("metric_name", AttributeType::String)
                .required()
                .with_description("The name of the metrics for this `WebACL` . The name can contain only alphanumeric characters (A-Z, a-z, 0-9), with maximum length 128 and minimum len...")
                .with_provider_name("MetricName"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("A friendly name or description of the `WebACL` . You can't change the name of a `WebACL` after you create it.")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("rules", AttributeType::List(Box::new(activated_rule_type())))
                .with_description("An array that contains the action for each `Rule` in a `WebACL` , the priority of the `Rule` , and the ID of the `Rule` .")
                .with_provider_name("Rules"),
        )
        .return_attribute("Id")
}
