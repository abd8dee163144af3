//! size_constraint_set schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::WAF::SizeConstraintSet
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::enum_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// FieldToMatch property type
fn field_to_match_type() -> AttributeType {
    AttributeType::Struct {
        name: "FieldToMatch".to_string(),
        fields: vec![
            AttributeSchema::new("data", AttributeType::String)
                .with_description("When the value of `Type` is `HEADER` , enter the name of the header that you want AWS WAF to search, for example, `User-Agent` or `Referer` . The name...")
                .with_provider_name("Data"),
            AttributeSchema::new("type", enum_type(&["URI", "QUERY_STRING", "HEADER", "METHOD", "BODY", "SINGLE_QUERY_ARG", "ALL_QUERY_ARGS"]))
                .required()
                .with_description("The part of the web request that you want AWS WAF to search for a specified string. Parts of a request that you can search include the following: - `H...")
                .with_provider_name("Type"),
        ],
    }
}

/// SizeConstraint property type
fn size_constraint_type() -> AttributeType {
    AttributeType::Struct {
        name: "SizeConstraint".to_string(),
        fields: vec![
            AttributeSchema::new("comparison_operator", enum_type(&["EQ", "NE", "LE", "LT", "GE", "GT"]))
                .required()
                .with_description("The type of comparison you want AWS WAF to perform. AWS WAF uses this in combination with the provided `Size` and `FieldToMatch` to build an expressio...")
                .with_provider_name("ComparisonOperator"),
            AttributeSchema::new("field_to_match", field_to_match_type())
                .required()
                .with_description("The part of a web request that you want to inspect, such as a specified header or a query string.")
                .with_provider_name("FieldToMatch"),
            AttributeSchema::new("size", AttributeType::Int)
                .required()
                .with_description("The size in bytes that you want AWS WAF to compare against the size of the specified `FieldToMatch` . AWS WAF uses this in combination with `Compariso...")
                .with_provider_name("Size"),
            AttributeSchema::new("text_transformation", enum_type(&["NONE", "COMPRESS_WHITE_SPACE", "HTML_ENTITY_DECODE", "LOWERCASE", "CMD_LINE", "URL_DECODE"]))
                .required()
                .with_description("Text transformations eliminate some of the unusual formatting that attackers use in web requests in an effort to bypass AWS WAF . If you specify a tra...")
                .with_provider_name("TextTransformation"),
        ],
    }
}

/// Returns the schema for waf.size_constraint_set (AWS::WAF::SizeConstraintSet)
pub fn waf_size_constraint_set_schema() -> ResourceSchema {
    ResourceSchema::new("waf.size_constraint_set", "AWS::WAF::SizeConstraintSet")
        .with_description("Size constraints on parts of a web request that AWS WAF Classic inspects.")
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name, if any, of the `SizeConstraintSet` .")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("size_constraints", AttributeType::List(Box::new(size_constraint_type())))
                .required()
                .with_description("The size constraint and the part of the web request to check.")
                .with_provider_name("SizeConstraints"),
        )
        .return_attribute("Id")
}
