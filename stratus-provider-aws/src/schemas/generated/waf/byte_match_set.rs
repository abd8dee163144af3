//! byte_match_set schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::WAF::ByteMatchSet
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::enum_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// ByteMatchTuple property type
fn byte_match_tuple_type() -> AttributeType {
    AttributeType::Struct {
        name: "ByteMatchTuple".to_string(),
        fields: vec![
            AttributeSchema::new("field_to_match", field_to_match_type())
                .required()
                .with_description("The part of a web request that you want to inspect, such as a specified header or a query string.")
                .with_provider_name("FieldToMatch"),
            AttributeSchema::new("positional_constraint", enum_type(&["EXACTLY", "STARTS_WITH", "ENDS_WITH", "CONTAINS", "CONTAINS_WORD"]))
                .required()
                .with_description("Within the portion of a web request that you want to search (for example, in the query string, if any), specify where you want AWS WAF to search. Vali...")
                .with_provider_name("PositionalConstraint"),
            AttributeSchema::new("target_string", AttributeType::String)
                .with_description("The value that you want AWS WAF to search for. AWS WAF searches for the specified string in the part of web requests that you specified in `FieldToMat...")
                .with_provider_name("TargetString"),
            AttributeSchema::new("target_string_base64", AttributeType::String)
                .with_description("The base64-encoded value that AWS WAF searches for. AWS CloudFormation sends this value to AWS WAF without encoding it. You must specify this property...")
                .with_provider_name("TargetStringBase64"),
            AttributeSchema::new("text_transformation", enum_type(&["NONE", "COMPRESS_WHITE_SPACE", "HTML_ENTITY_DECODE", "LOWERCASE", "CMD_LINE", "URL_DECODE"]))
                .required()
                .with_description("Text transformations eliminate some of the unusual formatting that attackers use in web requests in an effort to bypass AWS WAF . If you specify a tra...")
                .with_provider_name("TextTransformation"),
        ],
    }
}

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

/// Returns the schema for waf.byte_match_set (AWS::WAF::ByteMatchSet)
pub fn waf_byte_match_set_schema() -> ResourceSchema {
    ResourceSchema::new("waf.byte_match_set", "AWS::WAF::ByteMatchSet")
        .with_description("Byte match conditions identifying the part of a web request to inspect and the string to look for (AWS WAF Classic).")
        .attribute(
            AttributeSchema::new("byte_match_tuples", AttributeType::List(Box::new(byte_match_tuple_type())))
                .with_description("Specifies the bytes (typically a string that corresponds with ASCII characters) that you want AWS WAF to search for in web requests, the location in r...")
                .with_provider_name("ByteMatchTuples"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the `ByteMatchSet` . You can't change `Name` after you create a `ByteMatchSet` .")
                .with_provider_name("Name"),
        )
        .return_attribute("Id")
}
