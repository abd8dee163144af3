//! Manifest - JSON stack description files
//!
//! ```json
//! {
//!   "description": "Edge protection",
//!   "resources": {
//!     "BlockList": { "type": "waf.ip_set", "properties": { "name": "blocked" } },
//!     "Rule": {
//!       "type": "AWS::WAF::Rule",
//!       "properties": {
//!         "name": "block", "metric_name": "Block",
//!         "predicates": [ { "data_id": { "Ref": "BlockList" }, "negated": false, "type": "IPMatch" } ]
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::registry::SchemaRegistry;
use crate::resource::{DeletionPolicy, UpdateReplacePolicy, Value};
use crate::stack::{Stack, StackError};

/// Manifest error
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid manifest:\n  {}", errors.join("\n  "))]
    Invalid { errors: Vec<String> },

    #[error(transparent)]
    Stack(#[from] StackError),
}

/// A stack description
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceEntry>,
}

/// One resource in a manifest, keyed by logical id
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceEntry {
    /// Stratus type ("waf.rule") or CloudFormation type ("AWS::WAF::Rule")
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub deletion_policy: Option<String>,
    #[serde(default)]
    pub update_replace_policy: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Build a stack, reporting every invalid resource before failing
    pub fn into_stack(self, registry: &SchemaRegistry) -> Result<Stack, ManifestError> {
        let mut stack = Stack::new();
        stack.description = self.description;
        let mut errors = Vec::new();

        for (logical_id, entry) in self.resources {
            if let Err(messages) = add_entry(&mut stack, registry, &logical_id, entry) {
                errors.extend(
                    messages
                        .into_iter()
                        .map(|m| format!("{}: {}", logical_id, m)),
                );
            }
        }

        if !errors.is_empty() {
            return Err(ManifestError::Invalid { errors });
        }

        stack.validate_references()?;
        log::debug!("Loaded {} resources from manifest", stack.resources().len());
        Ok(stack)
    }
}

fn add_entry(
    stack: &mut Stack,
    registry: &SchemaRegistry,
    logical_id: &str,
    entry: ResourceEntry,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let schema = registry.get(&entry.resource_type);
    if schema.is_none() {
        errors.push(format!("unknown resource type '{}'", entry.resource_type));
    }

    let mut props = HashMap::new();
    for (key, json) in &entry.properties {
        match json_to_value(json) {
            Ok(Some(value)) => {
                props.insert(key.clone(), value);
            }
            Ok(None) => {}
            Err(e) => errors.push(format!("property '{}': {}", key, e)),
        }
    }

    let deletion_policy = parse_option::<DeletionPolicy>(entry.deletion_policy, &mut errors);
    let update_replace_policy =
        parse_option::<UpdateReplacePolicy>(entry.update_replace_policy, &mut errors);

    let Some(schema) = schema else {
        return Err(errors);
    };

    match stack.add_resource(schema, logical_id, props) {
        Ok(resource) => {
            for dep in entry.depends_on {
                resource.add_dependency(dep);
            }
            resource.options.deletion_policy = deletion_policy;
            resource.options.update_replace_policy = update_replace_policy;
            resource.options.condition = entry.condition;
            resource.options.metadata = entry.metadata;
        }
        Err(StackError::Validation {
            errors: type_errors,
            ..
        }) => errors.extend(type_errors.iter().map(|e| e.to_string())),
        Err(e) => errors.push(e.to_string()),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn parse_option<T>(value: Option<String>, errors: &mut Vec<String>) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(parsed)) => Some(parsed),
        Some(Err(e)) => {
            errors.push(e.to_string());
            None
        }
        None => None,
    }
}

/// Convert manifest JSON into a Value. `null` means absent.
pub fn json_to_value(json: &serde_json::Value) -> Result<Option<Value>, String> {
    let value = match json {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().ok_or_else(|| format!("invalid number {}", n))?),
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match json_to_value(item)? {
                    Some(v) => values.push(v),
                    None => return Err("null is not allowed in a list".to_string()),
                }
            }
            Value::List(values)
        }
        serde_json::Value::Object(map) => {
            if let Some(intrinsic) = intrinsic_to_value(map)? {
                return Ok(Some(intrinsic));
            }
            let mut values = HashMap::new();
            for (k, v) in map {
                if let Some(v) = json_to_value(v)? {
                    values.insert(k.clone(), v);
                }
            }
            Value::Map(values)
        }
    };
    Ok(Some(value))
}

fn intrinsic_to_value(
    map: &serde_json::Map<String, serde_json::Value>,
) -> Result<Option<Value>, String> {
    if map.len() != 1 {
        return Ok(None);
    }

    if let Some(target) = map.get("Ref") {
        return match target.as_str() {
            Some(id) => Ok(Some(Value::Ref(id.to_string()))),
            None => Err("Ref target must be a string".to_string()),
        };
    }

    if let Some(args) = map.get("Fn::GetAtt") {
        let pair = match args {
            serde_json::Value::String(s) => s.split_once('.'),
            serde_json::Value::Array(items) if items.len() == 2 => {
                match (items[0].as_str(), items[1].as_str()) {
                    (Some(id), Some(attr)) => Some((id, attr)),
                    _ => None,
                }
            }
            _ => None,
        };
        return match pair {
            Some((id, attr)) => Ok(Some(Value::GetAtt(id.to_string(), attr.to_string()))),
            None => Err(
                "Fn::GetAtt expects [\"LogicalId\", \"Attribute\"] or \"LogicalId.Attribute\""
                    .to_string(),
            ),
        };
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType, ResourceSchema};
    use serde_json::json;
    use std::io::Write;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new(vec![
            ResourceSchema::new("sns.topic", "AWS::SNS::Topic").return_attribute("TopicArn"),
            ResourceSchema::new("fms.notification_channel", "AWS::FMS::NotificationChannel")
                .attribute(
                    AttributeSchema::new("sns_role_name", AttributeType::String)
                        .required()
                        .with_provider_name("SnsRoleName"),
                )
                .attribute(
                    AttributeSchema::new("sns_topic_arn", AttributeType::String)
                        .required()
                        .with_provider_name("SnsTopicArn"),
                ),
        ])
    }

    #[test]
    fn json_to_value_intrinsics() {
        assert_eq!(
            json_to_value(&json!({ "Ref": "Topic" })).unwrap(),
            Some(Value::Ref("Topic".to_string()))
        );
        assert_eq!(
            json_to_value(&json!({ "Fn::GetAtt": ["Topic", "TopicArn"] })).unwrap(),
            Some(Value::GetAtt("Topic".to_string(), "TopicArn".to_string()))
        );
        assert_eq!(
            json_to_value(&json!({ "Fn::GetAtt": "Topic.TopicArn" })).unwrap(),
            Some(Value::GetAtt("Topic".to_string(), "TopicArn".to_string()))
        );
        assert!(json_to_value(&json!({ "Fn::GetAtt": ["Topic"] })).is_err());
        assert!(json_to_value(&json!({ "Ref": 1 })).is_err());
    }

    #[test]
    fn json_to_value_scalars() {
        assert_eq!(json_to_value(&json!(null)).unwrap(), None);
        assert_eq!(json_to_value(&json!(3)).unwrap(), Some(Value::Int(3)));
        assert_eq!(json_to_value(&json!(1.5)).unwrap(), Some(Value::Float(1.5)));
        assert!(json_to_value(&json!([1, null])).is_err());

        let Some(Value::Map(map)) = json_to_value(&json!({ "a": 1, "b": null })).unwrap() else {
            panic!("expected map");
        };
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn into_stack_builds_resources() {
        let manifest = Manifest::from_json(
            r#"{
                "description": "Firewall notifications",
                "resources": {
                    "Topic": { "type": "sns.topic" },
                    "Channel": {
                        "type": "AWS::FMS::NotificationChannel",
                        "properties": {
                            "SnsRoleName": "fms-role",
                            "sns_topic_arn": { "Fn::GetAtt": ["Topic", "TopicArn"] }
                        },
                        "deletion_policy": "Retain",
                        "condition": "IsProd"
                    }
                }
            }"#,
        )
        .unwrap();

        let stack = manifest.into_stack(&registry()).unwrap();
        assert_eq!(stack.description.as_deref(), Some("Firewall notifications"));

        let channel = stack.resource("Channel").unwrap();
        assert_eq!(channel.get("sns_role_name"), Some(&Value::from("fms-role")));
        assert_eq!(channel.options.deletion_policy, Some(DeletionPolicy::Retain));
        assert_eq!(channel.options.condition.as_deref(), Some("IsProd"));
    }

    #[test]
    fn into_stack_collects_all_errors() {
        let manifest = Manifest::from_json(
            r#"{
                "resources": {
                    "Channel": {
                        "type": "fms.notification_channel",
                        "properties": { "sns_role_name": 1 },
                        "deletion_policy": "Keep"
                    },
                    "Unknown": { "type": "fms.missing" }
                }
            }"#,
        )
        .unwrap();

        let Err(ManifestError::Invalid { errors }) = manifest.into_stack(&registry()) else {
            panic!("expected invalid manifest");
        };
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|e| e.starts_with("Channel: ") || e.starts_with("Unknown: ")));
        assert!(errors.iter().any(|e| e.contains("unknown resource type 'fms.missing'")));
    }

    #[test]
    fn into_stack_checks_references() {
        let manifest = Manifest::from_json(
            r#"{
                "resources": {
                    "Channel": {
                        "type": "fms.notification_channel",
                        "properties": { "sns_role_name": "r", "sns_topic_arn": { "Ref": "Topic" } }
                    }
                }
            }"#,
        )
        .unwrap();

        assert!(matches!(
            manifest.into_stack(&registry()),
            Err(ManifestError::Stack(StackError::DanglingReference { .. }))
        ));
    }

    #[test]
    fn unknown_manifest_fields_are_rejected() {
        let result = Manifest::from_json(r#"{ "resources": {}, "outputs": {} }"#);
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn from_file_reads_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "resources": {{ "Topic": {{ "type": "sns.topic" }} }} }}"#).unwrap();

        let manifest = Manifest::from_file(file.path()).unwrap();
        assert_eq!(manifest.resources.len(), 1);
        assert_eq!(manifest.resources["Topic"].resource_type, "sns.topic");

        let missing = Manifest::from_file(Path::new("/nonexistent/stack.json"));
        assert!(matches!(missing, Err(ManifestError::Io { .. })));
    }
}
