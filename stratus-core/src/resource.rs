//! Resource - Constructed CloudFormation resources and their attribute values

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::json;

use crate::case::to_lower_camel_case;
use crate::schema::{ResourceSchema, TypeError, duplicate_keys};

/// Unique identifier for a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    /// Resource type (e.g., "waf.ip_set", "neptune.db_cluster")
    pub resource_type: String,
    /// Logical id of the resource within its stack
    pub name: String,
}

impl ResourceId {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource_type, self.name)
    }
}

/// Attribute value of a resource
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    /// Reference to another resource in the same stack (`{"Ref": logical_id}`)
    Ref(String),
    /// Attribute of another resource (`{"Fn::GetAtt": [logical_id, attribute]}`)
    GetAtt(String, String),
}

impl Value {
    /// Returns true for values resolved by CloudFormation at deploy time
    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Ref(_) | Value::GetAtt(_, _))
    }

    /// Collect the logical ids this value refers to, including nested values
    pub fn collect_references(&self, refs: &mut BTreeSet<String>) {
        match self {
            Value::Ref(id) | Value::GetAtt(id, _) => {
                refs.insert(id.clone());
            }
            Value::List(items) => {
                for item in items {
                    item.collect_references(refs);
                }
            }
            Value::Map(map) => {
                for value in map.values() {
                    value.collect_references(refs);
                }
            }
            _ => {}
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// What CloudFormation does with the physical resource when it is removed from the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    Snapshot,
    RetainExceptOnCreate,
}

impl fmt::Display for DeletionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionPolicy::Delete => f.write_str("Delete"),
            DeletionPolicy::Retain => f.write_str("Retain"),
            DeletionPolicy::Snapshot => f.write_str("Snapshot"),
            DeletionPolicy::RetainExceptOnCreate => f.write_str("RetainExceptOnCreate"),
        }
    }
}

impl FromStr for DeletionPolicy {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Delete" => Ok(DeletionPolicy::Delete),
            "Retain" => Ok(DeletionPolicy::Retain),
            "Snapshot" => Ok(DeletionPolicy::Snapshot),
            "RetainExceptOnCreate" => Ok(DeletionPolicy::RetainExceptOnCreate),
            _ => Err(TypeError::InvalidEnumVariant {
                value: s.to_string(),
                expected: ["Delete", "Retain", "Snapshot", "RetainExceptOnCreate"]
                    .map(String::from)
                    .to_vec(),
            }),
        }
    }
}

/// What CloudFormation does with the old physical resource when an update replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateReplacePolicy {
    Delete,
    Retain,
    Snapshot,
}

impl fmt::Display for UpdateReplacePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateReplacePolicy::Delete => f.write_str("Delete"),
            UpdateReplacePolicy::Retain => f.write_str("Retain"),
            UpdateReplacePolicy::Snapshot => f.write_str("Snapshot"),
        }
    }
}

impl FromStr for UpdateReplacePolicy {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Delete" => Ok(UpdateReplacePolicy::Delete),
            "Retain" => Ok(UpdateReplacePolicy::Retain),
            "Snapshot" => Ok(UpdateReplacePolicy::Snapshot),
            _ => Err(TypeError::InvalidEnumVariant {
                value: s.to_string(),
                expected: ["Delete", "Retain", "Snapshot"].map(String::from).to_vec(),
            }),
        }
    }
}

/// Resource-level template attributes that sit next to `Properties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceOptions {
    /// Logical ids this resource explicitly depends on
    pub depends_on: Vec<String>,
    pub deletion_policy: Option<DeletionPolicy>,
    pub update_replace_policy: Option<UpdateReplacePolicy>,
    /// Name of a template condition guarding this resource
    pub condition: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Tree inspector view of a resource (`aws:cdk:cloudformation:*` keys)
pub type Inspection = BTreeMap<String, serde_json::Value>;

pub const INSPECT_TYPE_KEY: &str = "aws:cdk:cloudformation:type";
pub const INSPECT_PROPS_KEY: &str = "aws:cdk:cloudformation:props";

/// A resource constructed from a schema and validated props
#[derive(Debug, Clone)]
pub struct Resource {
    pub id: ResourceId,
    pub options: ResourceOptions,
    schema: Arc<ResourceSchema>,
    attributes: HashMap<String, Value>,
}

impl Resource {
    /// Construct a resource, validating `props` against the schema.
    ///
    /// Property keys may use either the schema name (`sns_role_name`) or the
    /// CloudFormation spelling (`SnsRoleName`). All problems are reported at once.
    pub fn new(
        schema: Arc<ResourceSchema>,
        logical_id: impl Into<String>,
        props: HashMap<String, Value>,
    ) -> Result<Self, Vec<TypeError>> {
        let mut by_name: BTreeMap<String, Vec<(String, Value)>> = BTreeMap::new();
        for (key, value) in props {
            let name = schema
                .attribute_named(&key)
                .map_or_else(|| key.clone(), |attr| attr.name.clone());
            by_name.entry(name).or_default().push((key, value));
        }

        let mut errors = Vec::new();
        let mut attributes = HashMap::new();
        for (name, mut entries) in by_name {
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            if entries.len() > 1 {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                errors.push(duplicate_keys(&name, &keys));
            }
            // The attribute is still present, so it is not also reported missing
            if let Some((_, value)) = entries.into_iter().next() {
                attributes.insert(name, value);
            }
        }

        if let Err(found) = schema.validate(&attributes) {
            errors.extend(found);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let id = ResourceId::new(schema.resource_type.clone(), logical_id);
        log::debug!(
            "Constructed {} ({}) with {} properties",
            id,
            schema.cfn_type,
            attributes.len()
        );

        Ok(Self {
            id,
            options: ResourceOptions::default(),
            schema,
            attributes,
        })
    }

    pub fn logical_id(&self) -> &str {
        &self.id.name
    }

    /// CloudFormation type name (e.g., "AWS::FMS::Policy")
    pub fn cfn_type(&self) -> &str {
        &self.schema.cfn_type
    }

    pub fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Current value of an attribute, if set
    pub fn get(&self, name: &str) -> Option<&Value> {
        let attr = self.schema.attribute_named(name)?;
        self.attributes.get(&attr.name)
    }

    /// Replace an attribute value. The value must fit the attribute's type;
    /// on error the resource is left unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), TypeError> {
        let attr = self
            .schema
            .attribute_named(name)
            .ok_or_else(|| TypeError::UnknownAttribute {
                name: name.to_string(),
            })?;
        let value = value.into();
        attr.validate_value(&value)?;
        self.attributes.insert(attr.name.clone(), value);
        Ok(())
    }

    /// Remove an optional attribute, returning its previous value
    pub fn unset(&mut self, name: &str) -> Result<Option<Value>, TypeError> {
        let attr = self
            .schema
            .attribute_named(name)
            .ok_or_else(|| TypeError::UnknownAttribute {
                name: name.to_string(),
            })?;
        if attr.required {
            return Err(TypeError::MissingRequired {
                name: attr.name.clone(),
            });
        }
        Ok(self.attributes.remove(&attr.name))
    }

    /// `Ref` to this resource
    pub fn reference(&self) -> Value {
        Value::Ref(self.id.name.clone())
    }

    /// `Fn::GetAtt` for one of the attributes this resource type returns
    pub fn get_att(&self, attribute: &str) -> Result<Value, TypeError> {
        if self.schema.returns(attribute) {
            Ok(Value::GetAtt(self.id.name.clone(), attribute.to_string()))
        } else {
            Err(TypeError::UnknownAttribute {
                name: format!("{}.{}", self.schema.cfn_type, attribute),
            })
        }
    }

    /// Add an explicit dependency on another logical id
    pub fn add_dependency(&mut self, logical_id: impl Into<String>) {
        let logical_id = logical_id.into();
        if !self.options.depends_on.contains(&logical_id) {
            self.options.depends_on.push(logical_id);
        }
    }

    /// Logical ids referenced by this resource's properties or `DependsOn`
    pub fn dependencies(&self) -> BTreeSet<String> {
        let mut deps = BTreeSet::new();
        for value in self.attributes.values() {
            value.collect_references(&mut deps);
        }
        deps.extend(self.options.depends_on.iter().cloned());
        deps
    }

    /// Properties in CloudFormation wire format
    pub fn render_properties(&self) -> serde_json::Map<String, serde_json::Value> {
        self.schema.render_properties(&self.attributes)
    }

    /// The resource's entry in the template `Resources` section
    pub fn to_cloudformation(&self) -> serde_json::Value {
        let mut entry = serde_json::Map::new();
        entry.insert("Type".to_string(), json!(self.schema.cfn_type));

        let properties = self.render_properties();
        if !properties.is_empty() {
            entry.insert(
                "Properties".to_string(),
                serde_json::Value::Object(properties),
            );
        }
        if !self.options.depends_on.is_empty() {
            entry.insert("DependsOn".to_string(), json!(self.options.depends_on));
        }
        if let Some(policy) = self.options.deletion_policy {
            entry.insert("DeletionPolicy".to_string(), json!(policy.to_string()));
        }
        if let Some(policy) = self.options.update_replace_policy {
            entry.insert("UpdateReplacePolicy".to_string(), json!(policy.to_string()));
        }
        if let Some(condition) = &self.options.condition {
            entry.insert("Condition".to_string(), json!(condition));
        }
        if let Some(metadata) = &self.options.metadata {
            entry.insert("Metadata".to_string(), metadata.clone());
        }

        serde_json::Value::Object(entry)
    }

    /// Tree inspector view: the type name and the props keyed the way they were declared
    pub fn inspect(&self) -> Inspection {
        let props = self
            .schema
            .render_properties_with(&self.attributes, |attr| to_lower_camel_case(&attr.name));

        let mut inspection = Inspection::new();
        inspection.insert(INSPECT_TYPE_KEY.to_string(), json!(self.schema.cfn_type));
        inspection.insert(
            INSPECT_PROPS_KEY.to_string(),
            serde_json::Value::Object(props),
        );
        inspection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType};

    fn channel_schema() -> Arc<ResourceSchema> {
        Arc::new(
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
        )
    }

    fn policy_schema() -> Arc<ResourceSchema> {
        Arc::new(
            ResourceSchema::new("fms.policy", "AWS::FMS::Policy")
                .attribute(
                    AttributeSchema::new("policy_name", AttributeType::String)
                        .required()
                        .with_provider_name("PolicyName"),
                )
                .attribute(
                    AttributeSchema::new("policy_description", AttributeType::String)
                        .with_provider_name("PolicyDescription"),
                )
                .return_attribute("Arn")
                .return_attribute("Id"),
        )
    }

    fn channel_props() -> HashMap<String, Value> {
        HashMap::from([
            ("sns_role_name".to_string(), Value::from("role")),
            ("sns_topic_arn".to_string(), Value::from("arn:aws:sns:us-east-1:1:t")),
        ])
    }

    #[test]
    fn new_validates_required_props() {
        let errors = Resource::new(channel_schema(), "Channel", HashMap::new()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .iter()
                .all(|e| matches!(e, TypeError::MissingRequired { .. }))
        );
    }

    #[test]
    fn new_accepts_cloudformation_spelling() {
        let props = HashMap::from([
            ("SnsRoleName".to_string(), Value::from("role")),
            ("sns_topic_arn".to_string(), Value::from("topic")),
        ]);
        let resource = Resource::new(channel_schema(), "Channel", props).unwrap();
        assert_eq!(resource.get("sns_role_name"), Some(&Value::from("role")));
        assert_eq!(resource.get("SnsRoleName"), Some(&Value::from("role")));
    }

    #[test]
    fn new_rejects_property_given_in_both_spellings() {
        let props = HashMap::from([
            ("sns_role_name".to_string(), Value::from("role-a")),
            ("SnsRoleName".to_string(), Value::from("role-b")),
            ("sns_topic_arn".to_string(), Value::from("topic")),
        ]);
        let errors = Resource::new(channel_schema(), "Channel", props).unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::ValidationFailed {
                message: "'sns_role_name' is given more than once (as 'SnsRoleName', 'sns_role_name')"
                    .to_string()
            }]
        );
    }

    #[test]
    fn duplicate_spelling_is_reported_with_other_errors() {
        let props = HashMap::from([
            ("sns_role_name".to_string(), Value::from("role")),
            ("SnsRoleName".to_string(), Value::from("role")),
        ]);
        let errors = Resource::new(channel_schema(), "Channel", props).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], TypeError::ValidationFailed { .. }));
        assert_eq!(
            errors[1],
            TypeError::MissingRequired {
                name: "sns_topic_arn".to_string()
            }
        );
    }

    #[test]
    fn set_asserts_type() {
        let mut resource = Resource::new(channel_schema(), "Channel", channel_props()).unwrap();
        assert!(resource.set("sns_role_name", 42).is_err());
        assert_eq!(resource.get("sns_role_name"), Some(&Value::from("role")));

        resource.set("sns_role_name", "other-role").unwrap();
        assert_eq!(resource.get("sns_role_name"), Some(&Value::from("other-role")));
    }

    #[test]
    fn set_rejects_unknown_attribute() {
        let mut resource = Resource::new(channel_schema(), "Channel", channel_props()).unwrap();
        assert!(matches!(
            resource.set("sns_topic", "x"),
            Err(TypeError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn unset_only_removes_optional_attributes() {
        let props = HashMap::from([
            ("policy_name".to_string(), Value::from("p")),
            ("policy_description".to_string(), Value::from("d")),
        ]);
        let mut resource = Resource::new(policy_schema(), "Policy", props).unwrap();

        assert_eq!(
            resource.unset("policy_description").unwrap(),
            Some(Value::from("d"))
        );
        assert!(resource.get("policy_description").is_none());
        assert!(matches!(
            resource.unset("policy_name"),
            Err(TypeError::MissingRequired { .. })
        ));
    }

    #[test]
    fn render_properties_uses_wire_names() {
        let resource = Resource::new(channel_schema(), "Channel", channel_props()).unwrap();
        let rendered = resource.render_properties();
        assert_eq!(rendered["SnsRoleName"], json!("role"));
        assert_eq!(rendered["SnsTopicArn"], json!("arn:aws:sns:us-east-1:1:t"));
        assert_eq!(rendered.len(), 2);
    }

    #[test]
    fn render_omits_absent_optionals() {
        let props = HashMap::from([("policy_name".to_string(), Value::from("p"))]);
        let resource = Resource::new(policy_schema(), "Policy", props).unwrap();
        let entry = resource.to_cloudformation();
        assert_eq!(
            entry,
            json!({
                "Type": "AWS::FMS::Policy",
                "Properties": { "PolicyName": "p" }
            })
        );
    }

    #[test]
    fn get_att_checks_return_attributes() {
        let props = HashMap::from([("policy_name".to_string(), Value::from("p"))]);
        let resource = Resource::new(policy_schema(), "Policy", props).unwrap();
        assert_eq!(
            resource.get_att("Arn").unwrap(),
            Value::GetAtt("Policy".to_string(), "Arn".to_string())
        );
        assert!(resource.get_att("Endpoint").is_err());
        assert_eq!(resource.reference(), Value::Ref("Policy".to_string()));
    }

    #[test]
    fn to_cloudformation_includes_options() {
        let mut resource = Resource::new(channel_schema(), "Channel", channel_props()).unwrap();
        resource.add_dependency("Topic");
        resource.add_dependency("Topic");
        resource.options.deletion_policy = Some(DeletionPolicy::Retain);
        resource.options.update_replace_policy = Some(UpdateReplacePolicy::Snapshot);
        resource.options.condition = Some("IsProd".to_string());

        let entry = resource.to_cloudformation();
        assert_eq!(entry["DependsOn"], json!(["Topic"]));
        assert_eq!(entry["DeletionPolicy"], json!("Retain"));
        assert_eq!(entry["UpdateReplacePolicy"], json!("Snapshot"));
        assert_eq!(entry["Condition"], json!("IsProd"));
    }

    #[test]
    fn dependencies_include_refs_and_depends_on() {
        let mut props = channel_props();
        props.insert(
            "sns_topic_arn".to_string(),
            Value::GetAtt("Topic".to_string(), "Arn".to_string()),
        );
        let mut resource = Resource::new(channel_schema(), "Channel", props).unwrap();
        resource.add_dependency("Role");

        let deps: Vec<String> = resource.dependencies().into_iter().collect();
        assert_eq!(deps, vec!["Role".to_string(), "Topic".to_string()]);
    }

    #[test]
    fn inspect_uses_camel_case_props() {
        let resource = Resource::new(channel_schema(), "Channel", channel_props()).unwrap();
        let inspection = resource.inspect();
        assert_eq!(
            inspection[INSPECT_TYPE_KEY],
            json!("AWS::FMS::NotificationChannel")
        );
        assert_eq!(inspection[INSPECT_PROPS_KEY]["snsRoleName"], json!("role"));
    }

    #[test]
    fn parse_policies() {
        assert_eq!(
            "RetainExceptOnCreate".parse::<DeletionPolicy>().unwrap(),
            DeletionPolicy::RetainExceptOnCreate
        );
        assert!("retain".parse::<DeletionPolicy>().is_err());
        assert!(
            "RetainExceptOnCreate"
                .parse::<UpdateReplacePolicy>()
                .is_err()
        );
    }
}
