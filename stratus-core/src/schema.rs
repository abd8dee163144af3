//! Schema - Define type schemas for resources
//!
//! Each CloudFormation resource type gets a schema describing its properties,
//! which drives validation at construction/set time and rendering into
//! CloudFormation wire format.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::net::IpAddr;

use serde_json::json;

use crate::case::to_pascal_case;
use crate::resource::Value;

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    /// String
    String,
    /// Integer
    Int,
    /// Integer or floating point number
    Number,
    /// Boolean
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// Custom type (with validation function)
    Custom {
        name: String,
        base: Box<AttributeType>,
        validate: fn(&Value) -> Result<(), String>,
    },
    /// List
    List(Box<AttributeType>),
    /// Map
    Map(Box<AttributeType>),
    /// Nested property type with its own fields (e.g., `FieldToMatch`)
    Struct {
        name: String,
        fields: Vec<AttributeSchema>,
    },
    /// Free-form JSON
    Json,
}

impl AttributeType {
    /// Check if a value conforms to this type
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        self.validate_in(value, None)
    }

    /// Like `validate`, with `owner` the type name enum values may be qualified
    /// with ("FieldToMatch.URI")
    fn validate_in(&self, value: &Value, owner: Option<&str>) -> Result<(), TypeError> {
        match (self, value) {
            // Intrinsics resolve at deploy time, so they fit any type
            (_, Value::Ref(_) | Value::GetAtt(_, _)) => Ok(()),
            (AttributeType::Json, _) => Ok(()),

            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Int(_)) => Ok(()),
            (AttributeType::Number, Value::Int(_)) => Ok(()),
            (AttributeType::Number, Value::Float(n)) => {
                if n.is_finite() {
                    Ok(())
                } else {
                    Err(TypeError::ValidationFailed {
                        message: format!("Number must be finite, got {}", n),
                    })
                }
            }
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::Enum(variants), Value::String(s)) => {
                let variant = normalize_enum_value(s, owner);
                if variants.iter().any(|v| v == variant) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumVariant {
                        value: s.clone(),
                        expected: variants.clone(),
                    })
                }
            }

            (AttributeType::Custom { base, validate, .. }, v) => {
                base.validate_in(v, owner)?;
                validate(v).map_err(|message| TypeError::ValidationFailed { message })
            }

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate_in(item, owner).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                for (k, v) in sorted_entries(map) {
                    inner.validate_in(v, owner).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Struct { name, fields }, Value::Map(map)) => {
                validate_fields(name, fields, map)
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name(),
            }),
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Number => "Number".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::Custom { name, .. } => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Struct { name, .. } => name.clone(),
            AttributeType::Json => "Json".to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn validate_fields(
    struct_name: &str,
    fields: &[AttributeSchema],
    map: &HashMap<String, Value>,
) -> Result<(), TypeError> {
    for field in fields {
        let mut keys: Vec<&str> = map
            .keys()
            .filter(|k| field.matches(k))
            .map(String::as_str)
            .collect();
        if keys.is_empty() && field.required {
            return Err(TypeError::MissingRequired {
                name: field.name.clone(),
            });
        }
        if keys.len() > 1 {
            keys.sort_unstable();
            return Err(duplicate_keys(&field.name, &keys));
        }
    }

    for (key, value) in sorted_entries(map) {
        let field = find_field(fields, key).ok_or_else(|| TypeError::UnknownAttribute {
            name: key.clone(),
        })?;
        field
            .attr_type
            .validate_in(value, Some(struct_name))
            .map_err(|e| TypeError::FieldError {
                field: field.name.clone(),
                inner: Box::new(e),
            })?;
    }
    Ok(())
}

fn find_field<'a>(fields: &'a [AttributeSchema], key: &str) -> Option<&'a AttributeSchema> {
    fields.iter().find(|f| f.matches(key))
}

/// Error for an attribute given under more than one spelling
pub(crate) fn duplicate_keys(name: &str, keys: &[&str]) -> TypeError {
    TypeError::ValidationFailed {
        message: format!(
            "'{}' is given more than once (as {})",
            name,
            keys.iter()
                .map(|k| format!("'{}'", k))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn sorted_entries(map: &HashMap<String, Value>) -> BTreeMap<&String, &Value> {
    map.iter().collect()
}

/// Strip the `owner.` prefix from an enum value ("FieldToMatch.URI" -> "URI").
/// Any other prefix is kept, so the value fails enum validation.
pub fn normalize_enum_value<'a>(s: &'a str, owner: Option<&str>) -> &'a str {
    owner
        .and_then(|o| s.strip_prefix(o))
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(s)
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },

    #[error("Field '{field}': {inner}")]
    FieldError { field: String, inner: Box<TypeError> },
}

impl Value {
    fn type_name(&self) -> String {
        match self {
            Value::String(_) => "String".to_string(),
            Value::Int(_) => "Int".to_string(),
            Value::Float(_) => "Float".to_string(),
            Value::Bool(_) => "Bool".to_string(),
            Value::List(_) => "List".to_string(),
            Value::Map(_) => "Map".to_string(),
            Value::Ref(id) => format!("Ref({})", id),
            Value::GetAtt(id, attr) => format!("GetAtt({}.{})", id, attr),
        }
    }
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub description: Option<String>,
    /// CloudFormation property name (e.g., "SnsRoleName")
    pub provider_name: Option<String>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            description: None,
            provider_name: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    /// Key used in the CloudFormation template
    pub fn provider_key(&self) -> String {
        self.provider_name
            .clone()
            .unwrap_or_else(|| to_pascal_case(&self.name))
    }

    /// True if `key` is this attribute's name or its CloudFormation spelling
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.provider_name.as_deref() == Some(key)
    }

    /// Check a value for this attribute. Top-level enum values may be
    /// qualified with the attribute's CloudFormation name.
    pub fn validate_value(&self, value: &Value) -> Result<(), TypeError> {
        self.attr_type.validate_in(value, Some(self.provider_key().as_str()))
    }
}

/// Chooses the output key for an attribute when rendering
pub type KeyFn = fn(&AttributeSchema) -> String;

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    /// Stratus type name (e.g., "waf.ip_set")
    pub resource_type: String,
    /// CloudFormation type name (e.g., "AWS::WAF::IPSet")
    pub cfn_type: String,
    pub attributes: HashMap<String, AttributeSchema>,
    /// Attributes available through `Fn::GetAtt`
    pub return_attributes: Vec<String>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>, cfn_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            cfn_type: cfn_type.into(),
            attributes: HashMap::new(),
            return_attributes: Vec::new(),
            description: None,
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn return_attribute(mut self, name: impl Into<String>) -> Self {
        self.return_attributes.push(name.into());
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Look up an attribute by name or by its CloudFormation spelling
    pub fn attribute_named(&self, key: &str) -> Option<&AttributeSchema> {
        self.attributes
            .get(key)
            .or_else(|| self.attributes.values().find(|a| a.matches(key)))
    }

    /// Attributes sorted by name
    pub fn sorted_attributes(&self) -> Vec<&AttributeSchema> {
        let mut attrs: Vec<_> = self.attributes.values().collect();
        attrs.sort_by(|a, b| a.name.cmp(&b.name));
        attrs
    }

    pub fn returns(&self, attribute: &str) -> bool {
        self.return_attributes.iter().any(|a| a == attribute)
    }

    pub fn has_tags(&self) -> bool {
        self.attributes.contains_key("tags")
    }

    /// Validate resource attributes
    pub fn validate(&self, attributes: &HashMap<String, Value>) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        // Check required attributes
        for schema in self.sorted_attributes() {
            if schema.required && !attributes.contains_key(&schema.name) {
                errors.push(TypeError::MissingRequired {
                    name: schema.name.clone(),
                });
            }
        }

        // Type check each attribute
        for (name, value) in sorted_entries(attributes) {
            match self.attributes.get(name) {
                Some(schema) => {
                    if let Err(e) = schema.validate_value(value) {
                        errors.push(TypeError::FieldError {
                            field: name.clone(),
                            inner: Box::new(e),
                        });
                    }
                }
                None => errors.push(TypeError::UnknownAttribute { name: name.clone() }),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render validated attributes with CloudFormation property names.
    /// Absent optional attributes are simply not present in the output.
    pub fn render_properties(
        &self,
        attributes: &HashMap<String, Value>,
    ) -> serde_json::Map<String, serde_json::Value> {
        self.render_properties_with(attributes, AttributeSchema::provider_key)
    }

    /// Render attributes choosing each output key with `key`
    pub fn render_properties_with(
        &self,
        attributes: &HashMap<String, Value>,
        key: KeyFn,
    ) -> serde_json::Map<String, serde_json::Value> {
        let mut rendered = serde_json::Map::new();
        for (name, value) in attributes {
            let Some(schema) = self.attribute_named(name) else {
                log::warn!(
                    "Skipping unknown attribute '{}' on {}",
                    name,
                    self.resource_type
                );
                continue;
            };
            let json = match value {
                Value::Map(tags) if schema.name == "tags" => render_tags(tags),
                _ => render_value(
                    &schema.attr_type,
                    value,
                    key,
                    Some(schema.provider_key().as_str()),
                ),
            };
            rendered.insert(key(schema), json);
        }
        rendered
    }
}

/// Tags are a map in Stratus and a Key/Value list in CloudFormation
fn render_tags(tags: &HashMap<String, Value>) -> serde_json::Value {
    let list: Vec<serde_json::Value> = sorted_entries(tags)
        .into_iter()
        .map(|(k, v)| json!({ "Key": k, "Value": value_to_json(v) }))
        .collect();
    serde_json::Value::Array(list)
}

fn render_value(
    attr_type: &AttributeType,
    value: &Value,
    key: KeyFn,
    owner: Option<&str>,
) -> serde_json::Value {
    match (attr_type, value) {
        (_, Value::Ref(_) | Value::GetAtt(_, _)) => value_to_json(value),
        (AttributeType::Enum(_), Value::String(s)) => json!(normalize_enum_value(s, owner)),
        (AttributeType::Custom { base, .. }, v) => render_value(base, v, key, owner),
        (AttributeType::List(inner), Value::List(items)) => serde_json::Value::Array(
            items
                .iter()
                .map(|item| render_value(inner, item, key, owner))
                .collect(),
        ),
        (AttributeType::Map(inner), Value::Map(map)) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), render_value(inner, v, key, owner)))
                .collect(),
        ),
        (AttributeType::Struct { name, fields }, Value::Map(map)) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                match find_field(fields, k) {
                    Some(field) => {
                        object.insert(key(field), render_value(&field.attr_type, v, key, Some(name.as_str())));
                    }
                    None => log::warn!("Skipping unknown field '{}' of {}", k, name),
                }
            }
            serde_json::Value::Object(object)
        }
        (_, v) => value_to_json(v),
    }
}

/// Convert a Value to JSON without schema information
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => json!(s),
        Value::Int(i) => json!(i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bool(b) => json!(b),
        Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
        Value::Ref(id) => json!({ "Ref": id }),
        Value::GetAtt(id, attr) => json!({ "Fn::GetAtt": [id, attr] }),
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    /// Tags type for AWS resources (rendered as a Key/Value list)
    pub fn tags() -> AttributeType {
        AttributeType::Map(Box::new(AttributeType::String))
    }

    /// IPv4 or IPv6 CIDR block type (e.g., "192.0.2.44/32", "2001:db8::/32")
    pub fn cidr() -> AttributeType {
        AttributeType::Custom {
            name: "Cidr".to_string(),
            base: Box::new(AttributeType::String),
            validate: |value| {
                if let Value::String(s) = value {
                    validate_cidr(s)
                } else {
                    Err("Expected string".to_string())
                }
            },
        }
    }
}

/// Validate CIDR block format (e.g., "10.0.0.0/16" or "2001:db8::/32")
pub fn validate_cidr(cidr: &str) -> Result<(), String> {
    let (ip, prefix) = cidr
        .split_once('/')
        .ok_or_else(|| format!("Invalid CIDR format '{}': expected IP/prefix", cidr))?;

    let ip: IpAddr = ip
        .parse()
        .map_err(|_| format!("Invalid IP address '{}'", ip))?;

    let max_prefix = match ip {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };

    match prefix.parse::<u8>() {
        Ok(p) if p <= max_prefix => Ok(()),
        Ok(p) => Err(format!(
            "Invalid prefix length '{}': must be 0-{}",
            p, max_prefix
        )),
        Err(_) => Err(format!(
            "Invalid prefix length '{}': must be a number",
            prefix
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_to_match() -> AttributeType {
        AttributeType::Struct {
            name: "FieldToMatch".to_string(),
            fields: vec![
                AttributeSchema::new(
                    "type",
                    AttributeType::Enum(vec!["URI".to_string(), "HEADER".to_string()]),
                )
                .required()
                .with_provider_name("Type"),
                AttributeSchema::new("data", AttributeType::String).with_provider_name("Data"),
            ],
        }
    }

    fn map(entries: &[(&str, Value)]) -> Value {
        Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn validate_string_type() {
        let t = AttributeType::String;
        assert!(t.validate(&Value::String("hello".to_string())).is_ok());
        assert!(t.validate(&Value::Int(42)).is_err());
    }

    #[test]
    fn validate_number_type() {
        let t = AttributeType::Number;
        assert!(t.validate(&Value::Int(2)).is_ok());
        assert!(t.validate(&Value::Float(2.5)).is_ok());
        assert!(t.validate(&Value::Float(f64::NAN)).is_err());
        assert!(t.validate(&Value::String("2".to_string())).is_err());
        assert!(AttributeType::Int.validate(&Value::Float(2.5)).is_err());
    }

    #[test]
    fn validate_enum_type() {
        let t = AttributeType::Enum(vec!["a".to_string(), "b".to_string()]);
        assert!(t.validate(&Value::String("a".to_string())).is_ok());
        assert!(t.validate(&Value::String("c".to_string())).is_err());
        // No owning type to qualify with
        assert!(t.validate(&Value::String("Type.a".to_string())).is_err());
    }

    #[test]
    fn enum_prefix_must_name_owning_type() {
        let t = field_to_match();
        assert!(t.validate(&map(&[("type", Value::from("FieldToMatch.URI"))])).is_ok());
        assert!(t.validate(&map(&[("type", Value::from("Bogus.URI"))])).is_err());
        assert!(t.validate(&map(&[("type", Value::from("A.FieldToMatch.URI"))])).is_err());

        assert_eq!(normalize_enum_value("FieldToMatch.URI", Some("FieldToMatch")), "URI");
        assert_eq!(normalize_enum_value("Bogus.URI", Some("FieldToMatch")), "Bogus.URI");
        assert_eq!(normalize_enum_value("FieldToMatchX.URI", Some("FieldToMatch")), "FieldToMatchX.URI");
        assert_eq!(normalize_enum_value("URI", None), "URI");
    }

    #[test]
    fn top_level_enum_accepts_attribute_prefix() {
        let attr = AttributeSchema::new(
            "comparison_operator",
            AttributeType::Enum(vec!["EQ".to_string(), "GT".to_string()]),
        )
        .with_provider_name("ComparisonOperator");
        assert!(attr.validate_value(&Value::from("GT")).is_ok());
        assert!(attr.validate_value(&Value::from("ComparisonOperator.GT")).is_ok());
        assert!(attr.validate_value(&Value::from("Operator.GT")).is_err());
    }

    #[test]
    fn struct_field_given_twice_is_rejected() {
        let t = field_to_match();
        assert_eq!(
            t.validate(&map(&[("type", Value::from("URI")), ("Type", Value::from("HEADER"))])),
            Err(TypeError::ValidationFailed {
                message: "'type' is given more than once (as 'Type', 'type')".to_string()
            })
        );
        assert!(
            t.validate(&map(&[
                ("type", Value::from("URI")),
                ("data", Value::from("a")),
                ("Data", Value::from("b"))
            ]))
            .is_err()
        );
    }

    #[test]
    fn intrinsics_fit_any_type() {
        let reference = Value::Ref("Other".to_string());
        let get_att = Value::GetAtt("Other".to_string(), "Port".to_string());
        assert!(AttributeType::Bool.validate(&reference).is_ok());
        assert!(AttributeType::Int.validate(&get_att).is_ok());
        assert!(field_to_match().validate(&reference).is_ok());
    }

    #[test]
    fn validate_struct_fields() {
        let t = field_to_match();
        assert!(t.validate(&map(&[("type", Value::from("URI"))])).is_ok());
        assert!(
            t.validate(&map(&[
                ("Type", Value::from("HEADER")),
                ("Data", Value::from("User-Agent"))
            ]))
            .is_ok()
        );

        assert_eq!(
            t.validate(&map(&[("data", Value::from("x"))])),
            Err(TypeError::MissingRequired {
                name: "type".to_string()
            })
        );
        assert!(matches!(
            t.validate(&map(&[("type", Value::from("URI")), ("extra", Value::from(1))])),
            Err(TypeError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            t.validate(&map(&[("type", Value::from("BODY"))])),
            Err(TypeError::FieldError { .. })
        ));
        assert!(t.validate(&Value::from("URI")).is_err());
    }

    #[test]
    fn validate_resource_schema() {
        let schema = ResourceSchema::new("waf.ip_set", "AWS::WAF::IPSet")
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new("count", AttributeType::Int))
            .attribute(AttributeSchema::new("enabled", AttributeType::Bool));

        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::String("my-resource".to_string()));
        attrs.insert("count".to_string(), Value::Int(5));
        attrs.insert("enabled".to_string(), Value::Bool(true));

        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn missing_required_attribute() {
        let schema = ResourceSchema::new("waf.rule", "AWS::WAF::Rule")
            .attribute(AttributeSchema::new("name", AttributeType::String).required());

        let attrs = HashMap::new();
        let result = schema.validate(&attrs);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_attributes_are_rejected() {
        let schema = ResourceSchema::new("waf.rule", "AWS::WAF::Rule")
            .attribute(AttributeSchema::new("name", AttributeType::String).required());

        let attrs = HashMap::from([
            ("name".to_string(), Value::from("r")),
            ("nmae".to_string(), Value::from("r")),
        ]);
        let errors = schema.validate(&attrs).unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::UnknownAttribute {
                name: "nmae".to_string()
            }]
        );
    }

    #[test]
    fn validation_collects_all_errors() {
        let schema = ResourceSchema::new("waf.rule", "AWS::WAF::Rule")
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new("metric_name", AttributeType::String).required())
            .attribute(AttributeSchema::new("enabled", AttributeType::Bool));

        let attrs = HashMap::from([("enabled".to_string(), Value::from("yes"))]);
        let errors = schema.validate(&attrs).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn render_nested_struct_list() {
        let schema = ResourceSchema::new("waf.xss_match_set", "AWS::WAF::XssMatchSet").attribute(
            AttributeSchema::new(
                "xss_match_tuples",
                AttributeType::List(Box::new(AttributeType::Struct {
                    name: "XssMatchTuple".to_string(),
                    fields: vec![
                        AttributeSchema::new("field_to_match", field_to_match())
                            .required()
                            .with_provider_name("FieldToMatch"),
                    ],
                })),
            )
            .required()
            .with_provider_name("XssMatchTuples"),
        );

        let attrs = HashMap::from([(
            "xss_match_tuples".to_string(),
            Value::List(vec![map(&[(
                "field_to_match",
                map(&[("type", Value::from("FieldToMatch.URI"))]),
            )])]),
        )]);
        assert!(schema.validate(&attrs).is_ok());

        let rendered = schema.render_properties(&attrs);
        assert_eq!(
            serde_json::Value::Object(rendered),
            json!({ "XssMatchTuples": [ { "FieldToMatch": { "Type": "URI" } } ] })
        );
    }

    #[test]
    fn render_tags_as_key_value_list() {
        let schema = ResourceSchema::new("fms.resource_set", "AWS::FMS::ResourceSet")
            .attribute(AttributeSchema::new("tags", types::tags()).with_provider_name("Tags"));
        assert!(schema.has_tags());

        let attrs = HashMap::from([(
            "tags".to_string(),
            map(&[("team", Value::from("net")), ("env", Value::from("prod"))]),
        )]);
        let rendered = schema.render_properties(&attrs);
        assert_eq!(
            rendered["Tags"],
            json!([
                { "Key": "env", "Value": "prod" },
                { "Key": "team", "Value": "net" }
            ])
        );
    }

    #[test]
    fn render_intrinsics() {
        assert_eq!(
            value_to_json(&Value::Ref("Topic".to_string())),
            json!({ "Ref": "Topic" })
        );
        assert_eq!(
            value_to_json(&Value::GetAtt("Cluster".to_string(), "Port".to_string())),
            json!({ "Fn::GetAtt": ["Cluster", "Port"] })
        );
    }

    #[test]
    fn provider_key_falls_back_to_pascal_case() {
        let attr = AttributeSchema::new("metric_name", AttributeType::String);
        assert_eq!(attr.provider_key(), "MetricName");
        let attr = attr.with_provider_name("Metric");
        assert_eq!(attr.provider_key(), "Metric");
    }

    #[test]
    fn validate_cidr_type() {
        let t = types::cidr();

        assert!(t.validate(&Value::String("10.0.0.0/16".to_string())).is_ok());
        assert!(t.validate(&Value::String("192.0.2.44/32".to_string())).is_ok());
        assert!(t.validate(&Value::String("0.0.0.0/0".to_string())).is_ok());
        assert!(t.validate(&Value::String("2001:db8::/32".to_string())).is_ok());

        assert!(t.validate(&Value::String("10.0.0.0".to_string())).is_err()); // no prefix
        assert!(t.validate(&Value::String("10.0.0.0/33".to_string())).is_err()); // prefix too large
        assert!(t.validate(&Value::String("10.0.0.256/16".to_string())).is_err()); // octet > 255
        assert!(t.validate(&Value::String("2001:db8::/129".to_string())).is_err());
        assert!(t.validate(&Value::String("invalid".to_string())).is_err());
        assert!(t.validate(&Value::Int(42)).is_err()); // wrong type
    }
}
