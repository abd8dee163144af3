//! ip_set schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: AWS::WAF::IPSet
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use crate::schemas::generated::enum_type;
use stratus_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

/// IPSetDescriptor property type
fn ip_set_descriptor_type() -> AttributeType {
    AttributeType::Struct {
        name: "IPSetDescriptor".to_string(),
        fields: vec![
            AttributeSchema::new("type", enum_type(&["IPV4", "IPV6"]))
                .required()
                .with_description("Specify `IPV4` or `IPV6` .")
                .with_provider_name("Type"),
            AttributeSchema::new("value", types::cidr())
                .required()
                .with_description("Specify an IPv4 address by using CIDR notation. For example:. - To configure AWS WAF to allow, block, or count requests that originated from the IP ad...")
                .with_provider_name("Value"),
        ],
    }
}

/// Returns the schema for waf.ip_set (AWS::WAF::IPSet)
pub fn waf_ip_set_schema() -> ResourceSchema {
    ResourceSchema::new("waf.ip_set", "AWS::WAF::IPSet")
        .with_description("IP addresses, in CIDR notation, that web requests originate from (AWS WAF Classic).")
        .attribute(
            AttributeSchema::new("ip_set_descriptors", AttributeType::List(Box::new(ip_set_descriptor_type())))
                .with_description("The IP address type ( `IPV4` or `IPV6` ) and the IP address range (in CIDR notation) that web requests originate from. If the `WebACL` is associated w...")
                .with_provider_name("IPSetDescriptors"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the `IPSet` . You can't change the name of an `IPSet` after you create it.")
                .with_provider_name("Name"),
        )
        .return_attribute("Id")
}
