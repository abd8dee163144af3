//! xss_match_set schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::WAF::XssMatchSet
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

/// XssMatchTuple property type
fn xss_match_tuple_type() -> AttributeType {
    AttributeType::Struct {
        name: "XssMatchTuple".to_string(),
        fields: vec![
            AttributeSchema::new("field_to_match", field_to_match_type())
                .required()
                .with_description("The part of a web request that you want to inspect, such as a specified header or a query string.")
                .with_provider_name("FieldToMatch"),
            AttributeSchema::new("text_transformation", enum_type(&["NONE", "COMPRESS_WHITE_SPACE", "HTML_ENTITY_DECODE", "LOWERCASE", "CMD_LINE", "URL_DECODE"]))
                .required()
                .with_description("Text transformations eliminate some of the unusual formatting that attackers use in web requests in an effort to bypass AWS WAF . If you specify a tra...")
                .with_provider_name("TextTransformation"),
        ],
    }
}

/// Returns the schema for waf.xss_match_set (AWS::WAF::XssMatchSet)
pub fn waf_xss_match_set_schema() -> ResourceSchema {
    ResourceSchema::new("waf.xss_match_set", "AWS::WAF::XssMatchSet")
        .with_description("Parts of web requests that AWS WAF Classic inspects for cross-site scripting attacks.")
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name, if any, of the `XssMatchSet` .")
                .with_provider_name("Name"),
        )
        .attribute(
            AttributeSchema::new("xss_match_tuples", AttributeType::List(Box::new(xss_match_tuple_type())))
                .required()
                .with_description("Specifies the parts of web requests that you want to inspect for cross-site scripting attacks.")
                .with_provider_name("XssMatchTuples"),
        )
        .return_attribute("Id")
}
