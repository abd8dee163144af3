//! Stack - The scope resources are declared in, and template synthesis
//!
//! A stack owns its resources in declaration order. Synthesis checks that every
//! reference resolves and that dependencies form no cycle before rendering
//! the CloudFormation template.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::config::SynthConfig;
use crate::resource::{Resource, Value};
use crate::schema::{ResourceSchema, TypeError};

/// Maximum length of a CloudFormation logical id
pub const MAX_LOGICAL_ID_LEN: usize = 255;

/// Stack error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StackError {
    #[error("Invalid logical id '{0}': must be 1-255 ASCII alphanumeric characters")]
    InvalidLogicalId(String),

    #[error("Duplicate logical id '{0}'")]
    DuplicateLogicalId(String),

    #[error("Invalid properties for {logical_id}: {}", format_errors(errors))]
    Validation {
        logical_id: String,
        errors: Vec<TypeError>,
    },

    #[error("{from} references '{to}', which is not in the stack")]
    DanglingReference { from: String, to: String },

    #[error("{logical_id} ({resource_type}) has no attribute '{attribute}'")]
    UnknownReturnAttribute {
        logical_id: String,
        resource_type: String,
        attribute: String,
    },

    #[error("Circular dependency: {}", .0.join(" -> "))]
    CircularDependency(Vec<String>),

    #[error("Failed to serialize template: {0}")]
    Serialization(String),
}

fn format_errors(errors: &[TypeError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check a CloudFormation logical id
pub fn is_valid_logical_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_LOGICAL_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// A set of resources synthesized into one template
#[derive(Debug, Clone, Default)]
pub struct Stack {
    pub description: Option<String>,
    resources: Vec<Resource>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Construct a resource in this stack
    pub fn add_resource(
        &mut self,
        schema: Arc<ResourceSchema>,
        logical_id: &str,
        props: HashMap<String, Value>,
    ) -> Result<&mut Resource, StackError> {
        self.check_new_id(logical_id)?;
        let resource =
            Resource::new(schema, logical_id, props).map_err(|errors| StackError::Validation {
                logical_id: logical_id.to_string(),
                errors,
            })?;
        Ok(self.push(resource))
    }

    /// Insert an already constructed resource
    pub fn add(&mut self, resource: Resource) -> Result<&mut Resource, StackError> {
        self.check_new_id(resource.logical_id())?;
        Ok(self.push(resource))
    }

    fn check_new_id(&self, logical_id: &str) -> Result<(), StackError> {
        if !is_valid_logical_id(logical_id) {
            return Err(StackError::InvalidLogicalId(logical_id.to_string()));
        }
        if self.resource(logical_id).is_some() {
            return Err(StackError::DuplicateLogicalId(logical_id.to_string()));
        }
        Ok(())
    }

    fn push(&mut self, resource: Resource) -> &mut Resource {
        log::debug!("Added {} to stack", resource.id);
        self.resources.push(resource);
        let last = self.resources.len() - 1;
        &mut self.resources[last]
    }

    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.logical_id() == logical_id)
    }

    pub fn resource_mut(&mut self, logical_id: &str) -> Option<&mut Resource> {
        self.resources
            .iter_mut()
            .find(|r| r.logical_id() == logical_id)
    }

    /// Resources in declaration order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Check that every reference resolves and that there are no dependency cycles
    pub fn validate_references(&self) -> Result<(), StackError> {
        for resource in &self.resources {
            for dep in resource.dependencies() {
                if self.resource(&dep).is_none() {
                    return Err(StackError::DanglingReference {
                        from: resource.logical_id().to_string(),
                        to: dep,
                    });
                }
            }

            let mut get_atts = Vec::new();
            for value in resource.attributes().values() {
                collect_get_atts(value, &mut get_atts);
            }
            get_atts.sort();
            for (target, attribute) in get_atts {
                if let Some(target) = self.resource(&target)
                    && !target.schema().returns(&attribute)
                {
                    return Err(StackError::UnknownReturnAttribute {
                        logical_id: target.logical_id().to_string(),
                        resource_type: target.cfn_type().to_string(),
                        attribute,
                    });
                }
            }
        }

        self.dependency_order().map(|_| ())
    }

    /// Resources ordered so that dependencies come before their dependents.
    /// Independent resources keep their declaration order.
    pub fn dependency_order(&self) -> Result<Vec<&Resource>, StackError> {
        let by_id: HashMap<&str, &Resource> = self
            .resources
            .iter()
            .map(|r| (r.logical_id(), r))
            .collect();

        let mut sorted = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut path: Vec<String> = Vec::new();

        fn visit<'a>(
            resource: &'a Resource,
            by_id: &HashMap<&str, &'a Resource>,
            visited: &mut HashSet<String>,
            path: &mut Vec<String>,
            sorted: &mut Vec<&'a Resource>,
        ) -> Result<(), StackError> {
            let id = resource.logical_id();
            if visited.contains(id) {
                return Ok(());
            }
            if let Some(start) = path.iter().position(|p| p == id) {
                let mut cycle = path[start..].to_vec();
                cycle.push(id.to_string());
                return Err(StackError::CircularDependency(cycle));
            }

            path.push(id.to_string());
            // Visit dependencies first
            for dep in resource.dependencies() {
                if let Some(dep_resource) = by_id.get(dep.as_str()) {
                    visit(dep_resource, by_id, visited, path, sorted)?;
                }
            }
            path.pop();

            visited.insert(id.to_string());
            sorted.push(resource);
            Ok(())
        }

        for resource in &self.resources {
            visit(resource, &by_id, &mut visited, &mut path, &mut sorted)?;
        }

        Ok(sorted)
    }

    /// Render the CloudFormation template
    pub fn synthesize(&self, config: &SynthConfig) -> Result<serde_json::Value, StackError> {
        self.validate_references()?;

        let mut resources = serde_json::Map::new();
        for resource in self.dependency_order()? {
            resources.insert(
                resource.logical_id().to_string(),
                resource.to_cloudformation(),
            );
        }

        let mut template = serde_json::Map::new();
        if let Some(version) = &config.format_version {
            template.insert("AWSTemplateFormatVersion".to_string(), json!(version));
        }
        if let Some(description) = &self.description {
            template.insert("Description".to_string(), json!(description));
        }
        template.insert(
            "Resources".to_string(),
            serde_json::Value::Object(resources),
        );

        log::debug!("Synthesized template with {} resources", self.resources.len());
        Ok(serde_json::Value::Object(template))
    }

    /// Render the template as a JSON string
    pub fn to_template_string(&self, config: &SynthConfig) -> Result<String, StackError> {
        let template = self.synthesize(config)?;
        if !config.pretty {
            return serde_json::to_string(&template)
                .map_err(|e| StackError::Serialization(e.to_string()));
        }

        let indent = config.indent_string();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        template
            .serialize(&mut serializer)
            .map_err(|e| StackError::Serialization(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| StackError::Serialization(e.to_string()))
    }
}

fn collect_get_atts(value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::GetAtt(id, attr) => out.push((id.clone(), attr.clone())),
        Value::List(items) => {
            for item in items {
                collect_get_atts(item, out);
            }
        }
        Value::Map(map) => {
            for v in map.values() {
                collect_get_atts(v, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType};

    fn ip_set_schema() -> Arc<ResourceSchema> {
        Arc::new(
            ResourceSchema::new("waf.ip_set", "AWS::WAF::IPSet")
                .attribute(
                    AttributeSchema::new("name", AttributeType::String)
                        .required()
                        .with_provider_name("Name"),
                )
                .return_attribute("Id"),
        )
    }

    fn rule_schema() -> Arc<ResourceSchema> {
        Arc::new(
            ResourceSchema::new("waf.rule", "AWS::WAF::Rule")
                .attribute(
                    AttributeSchema::new("name", AttributeType::String)
                        .required()
                        .with_provider_name("Name"),
                )
                .attribute(
                    AttributeSchema::new("metric_name", AttributeType::String)
                        .with_provider_name("MetricName"),
                )
                .return_attribute("Id"),
        )
    }

    fn props(entries: &[(&str, Value)]) -> HashMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn logical_ids_are_checked() {
        let mut stack = Stack::new();
        let name = props(&[("name", Value::from("a"))]);

        assert!(matches!(
            stack.add_resource(ip_set_schema(), "my-set", name.clone()),
            Err(StackError::InvalidLogicalId(_))
        ));
        assert!(matches!(
            stack.add_resource(ip_set_schema(), "", name.clone()),
            Err(StackError::InvalidLogicalId(_))
        ));
        assert!(matches!(
            stack.add_resource(ip_set_schema(), &"A".repeat(256), name.clone()),
            Err(StackError::InvalidLogicalId(_))
        ));

        stack
            .add_resource(ip_set_schema(), "Set", name.clone())
            .unwrap();
        assert_eq!(
            stack.add_resource(ip_set_schema(), "Set", name).unwrap_err(),
            StackError::DuplicateLogicalId("Set".to_string())
        );
        assert_eq!(stack.resources().len(), 1);
    }

    #[test]
    fn add_resource_reports_validation_errors() {
        let mut stack = Stack::new();
        let err = stack
            .add_resource(ip_set_schema(), "Set", HashMap::new())
            .unwrap_err();
        assert!(matches!(err, StackError::Validation { ref logical_id, .. } if logical_id == "Set"));
        assert!(stack.is_empty());
    }

    #[test]
    fn dangling_reference() {
        let mut stack = Stack::new();
        stack
            .add_resource(
                rule_schema(),
                "Rule",
                props(&[
                    ("name", Value::from("r")),
                    ("metric_name", Value::Ref("Missing".to_string())),
                ]),
            )
            .unwrap();
        assert_eq!(
            stack.validate_references(),
            Err(StackError::DanglingReference {
                from: "Rule".to_string(),
                to: "Missing".to_string()
            })
        );
    }

    #[test]
    fn unknown_return_attribute() {
        let mut stack = Stack::new();
        stack
            .add_resource(ip_set_schema(), "Set", props(&[("name", Value::from("s"))]))
            .unwrap();
        stack
            .add_resource(
                rule_schema(),
                "Rule",
                props(&[(
                    "name",
                    Value::GetAtt("Set".to_string(), "Arn".to_string()),
                )]),
            )
            .unwrap();
        assert!(matches!(
            stack.validate_references(),
            Err(StackError::UnknownReturnAttribute { ref attribute, .. }) if attribute == "Arn"
        ));
    }

    #[test]
    fn circular_dependency() {
        let mut stack = Stack::new();
        stack
            .add_resource(
                rule_schema(),
                "A",
                props(&[("name", Value::Ref("B".to_string()))]),
            )
            .unwrap();
        stack
            .add_resource(
                rule_schema(),
                "B",
                props(&[("name", Value::GetAtt("A".to_string(), "Id".to_string()))]),
            )
            .unwrap();
        assert_eq!(
            stack.validate_references(),
            Err(StackError::CircularDependency(vec![
                "A".to_string(),
                "B".to_string(),
                "A".to_string()
            ]))
        );
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let mut stack = Stack::new();
        let rule = stack
            .add_resource(rule_schema(), "Rule", props(&[("name", Value::from("r"))]))
            .unwrap();
        rule.add_dependency("Rule");
        assert!(matches!(
            stack.validate_references(),
            Err(StackError::CircularDependency(_))
        ));
    }

    #[test]
    fn dependency_order_puts_dependencies_first() {
        let mut stack = Stack::new();
        stack
            .add_resource(
                rule_schema(),
                "Rule",
                props(&[
                    ("name", Value::from("r")),
                    ("metric_name", Value::Ref("Set".to_string())),
                ]),
            )
            .unwrap();
        stack
            .add_resource(ip_set_schema(), "Other", props(&[("name", Value::from("o"))]))
            .unwrap();
        stack
            .add_resource(ip_set_schema(), "Set", props(&[("name", Value::from("s"))]))
            .unwrap();

        let order: Vec<&str> = stack
            .dependency_order()
            .unwrap()
            .iter()
            .map(|r| r.logical_id())
            .collect();
        assert_eq!(order, vec!["Set", "Rule", "Other"]);
    }

    #[test]
    fn synthesize_template() {
        let mut stack = Stack::new().with_description("WAF rules");
        stack
            .add_resource(ip_set_schema(), "Set", props(&[("name", Value::from("s"))]))
            .unwrap();
        stack
            .add_resource(
                rule_schema(),
                "Rule",
                props(&[
                    ("name", Value::from("r")),
                    ("metric_name", Value::Ref("Set".to_string())),
                ]),
            )
            .unwrap();

        let template = stack.synthesize(&SynthConfig::default()).unwrap();
        assert_eq!(
            template,
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Description": "WAF rules",
                "Resources": {
                    "Set": {
                        "Type": "AWS::WAF::IPSet",
                        "Properties": { "Name": "s" }
                    },
                    "Rule": {
                        "Type": "AWS::WAF::Rule",
                        "Properties": { "Name": "r", "MetricName": { "Ref": "Set" } }
                    }
                }
            })
        );
    }

    #[test]
    fn template_string_formatting() {
        let mut stack = Stack::new();
        stack
            .add_resource(ip_set_schema(), "Set", props(&[("name", Value::from("s"))]))
            .unwrap();

        let compact = stack
            .to_template_string(&SynthConfig {
                format_version: None,
                pretty: false,
                indent_size: 2,
            })
            .unwrap();
        assert!(!compact.contains('\n'));
        assert!(!compact.contains("AWSTemplateFormatVersion"));
        let parsed: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(parsed["Resources"]["Set"]["Properties"]["Name"], json!("s"));

        let pretty = stack
            .to_template_string(&SynthConfig {
                indent_size: 4,
                ..Default::default()
            })
            .unwrap();
        assert!(pretty.contains("\n    \"Resources\": {"));
    }
}
