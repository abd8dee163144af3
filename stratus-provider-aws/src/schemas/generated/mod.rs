//! Auto-generated AWS CloudFormation resource schemas
//!
//! DO NOT EDIT MANUALLY - regenerate each module with:
//!   stratus-codegen --type-name <AWS::Service::Resource> --file <schema.json> -o <module.rs>

use stratus_core::schema::{AttributeType, types};

pub mod fms;
pub mod neptune;
pub mod rolesanywhere;
pub mod waf;

/// Tags type for AWS resources (map in Stratus, Key/Value list in CloudFormation)
pub fn tags_type() -> AttributeType {
    types::tags()
}

/// Enum type accepting the given CloudFormation values
pub fn enum_type(values: &[&str]) -> AttributeType {
    AttributeType::Enum(values.iter().map(|v| v.to_string()).collect())
}

/// Returns all generated schemas
pub fn schemas() -> Vec<stratus_core::schema::ResourceSchema> {
    let mut schemas = Vec::new();
    schemas.extend(fms::schemas());
    schemas.extend(rolesanywhere::schemas());
    schemas.extend(waf::schemas());
    schemas.extend(neptune::schemas());
    schemas
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use stratus_core::schema::AttributeSchema;

    fn walk<'a>(attr_type: &'a AttributeType, out: &mut Vec<&'a AttributeSchema>) {
        match attr_type {
            AttributeType::List(inner) | AttributeType::Map(inner) => walk(inner, out),
            AttributeType::Struct { fields, .. } => {
                for field in fields {
                    out.push(field);
                    walk(&field.attr_type, out);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn type_names_are_unique() {
        let schemas = schemas();
        assert_eq!(schemas.len(), 19);

        let types: HashSet<_> = schemas.iter().map(|s| s.resource_type.clone()).collect();
        let cfn_types: HashSet<_> = schemas.iter().map(|s| s.cfn_type.clone()).collect();
        assert_eq!(types.len(), schemas.len());
        assert_eq!(cfn_types.len(), schemas.len());
    }

    #[test]
    fn type_names_follow_namespace() {
        for schema in schemas() {
            let (namespace, _) = schema.resource_type.split_once('.').unwrap();
            let service = schema.cfn_type.split("::").nth(1).unwrap();
            assert_eq!(namespace, service.to_lowercase(), "{}", schema.cfn_type);
        }
    }

    #[test]
    fn every_attribute_has_a_wire_name() {
        for schema in schemas() {
            let mut attrs: Vec<&AttributeSchema> = schema.attributes.values().collect();
            let top_level: Vec<_> = attrs.clone();
            for attr in top_level {
                walk(&attr.attr_type, &mut attrs);
            }
            for attr in attrs {
                assert!(
                    attr.provider_name.is_some(),
                    "{}.{} has no provider name",
                    schema.resource_type,
                    attr.name
                );
            }
        }
    }

    #[test]
    fn tagged_resources_use_tag_map() {
        for schema in schemas() {
            if let Some(tags) = schema.attributes.get("tags") {
                assert!(matches!(tags.attr_type, AttributeType::Map(_)));
                assert_eq!(tags.provider_key(), "Tags");
            }
        }
    }

    #[test]
    fn enum_type_values() {
        let t = enum_type(&["ALLOW", "BLOCK"]);
        assert_eq!(t.type_name(), "Enum(ALLOW | BLOCK)");
    }
}
