//! rule schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::WAF::Rule
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::enum_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Predicate property type
fn predicate_type() -> AttributeType {
    AttributeType::Struct {
        name: "Predicate".to_string(),
        fields: vec![
            AttributeSchema::new("data_id", AttributeType::String)
                .required()
                .with_description("A unique identifier for a predicate in a `Rule` , such as `ByteMatchSetId` or `IPSetId` . The ID is returned by the corresponding `Create` or `List` c")
                .with_provider_name("DataId"),
            AttributeSchema::new("negated", AttributeType::Bool)
                .required()
                .with_description("Set `Negated` to `False` if you want AWS WAF to allow, block, or count requests based on the settings in the specified `ByteMatchSet` , `IPSet` , `Sql...")
                .with_provider_name("Negated"),
            AttributeSchema::new("type", enum_type(&["ByteMatch", "GeoMatch", "IPMatch", "RegexMatch", "SizeConstraint", "SqlInjectionMatch", "XssMatch"]))
                .required()
                .with_description("The type of predicate in a `Rule` , such as `ByteMatch` or `IPSet` .")
                .with_provider_name("Type"),
        ],
    }
}

/// Returns the schema for waf.rule (AWS::WAF::Rule)
pub fn waf_rule_schema() -> ResourceSchema {
    ResourceSchema::new("waf.rule", "AWS::WAF::Rule")
        .with_description("A combination of predicates that identify the web requests to allow, block, or count (AWS WAF Classic).")
        .attribute(
            AttributeSchema::new("metric_name", AttributeType::String)
                .required()
                .with_description("The name of the metrics for this `Rule` . The name can contain only alphanumeric characters (A-Z, a-z, 0-9), with maximum length 128 and minimum lengt...")
                .with_provider_name("MetricName"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The friendly name or description for the `Rule` . You can't change the name of a `Rule` after you create it.")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("predicates", AttributeType::List(Box::new(predicate_type())))
                .with_description("The `Predicates` object contains one `Predicate` element for each `ByteMatchSet` , `IPSet` , or `SqlInjectionMatchSet` object that you want to include")
                .with_provider_name("Predicates"),
        )
        .return_attribute("Id")
}
