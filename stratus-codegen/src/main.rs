//! CloudFormation Schema to Stratus Schema Code Generator
//!
//! This tool generates Rust schema modules for stratus-provider-aws
//! from AWS CloudFormation resource type schemas.
//!
//! Usage:
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type \
//!     --type RESOURCE --type-name AWS::WAF::IPSet --query 'Schema' --output text | \
//!     stratus-codegen --type-name AWS::WAF::IPSet
//!
//!   # Generate from file
//!   stratus-codegen --file schema.json --type-name AWS::WAF::IPSet -o ip_set.rs

use anyhow::{Context, Result};
use clap::Parser;
use heck::ToSnakeCase;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "stratus-codegen")]
#[command(about = "Generate Stratus schema code from CloudFormation schemas")]
struct Args {
    /// CloudFormation type name (e.g., AWS::WAF::IPSet)
    #[arg(long)]
    type_name: String,

    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

/// CloudFormation Resource Schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfnSchema {
    type_name: String,
    description: Option<String>,
    properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    read_only_properties: Vec<String>,
    #[serde(default)]
    definitions: BTreeMap<String, CfnProperty>,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    fn as_str(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(v) => v.first().map(|s| s.as_str()),
        }
    }
}

/// A property or a definition. Definitions with `properties` become struct types.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfnProperty {
    #[serde(rename = "type")]
    prop_type: Option<TypeValue>,
    description: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<String>>,
    items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    ref_path: Option<String>,
    properties: Option<BTreeMap<String, CfnProperty>>,
    #[serde(default)]
    required: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Read schema JSON
    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    // Parse schema
    let schema: CfnSchema =
        serde_json::from_str(&schema_json).context("Failed to parse CloudFormation schema")?;
    if schema.type_name != args.type_name {
        log::warn!(
            "Schema describes {}, generating as {}",
            schema.type_name,
            args.type_name
        );
    }

    // Generate code
    let code = generate_schema_code(&schema, &args.type_name)?;

    // Output
    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!("Generated: {}", output_path);
    } else {
        print!("{}", code);
    }

    Ok(())
}

/// Split "AWS::WAF::IPSet" into ("waf", "ip_set")
fn parse_type_name(type_name: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = type_name.split("::").collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        anyhow::bail!("Invalid type name format: {}", type_name);
    }
    Ok((parts[1].to_lowercase(), parts[2].to_snake_case()))
}

/// Escape and shorten a description for a Rust string literal
fn description_literal(desc: &str, limit: usize) -> String {
    let mut text = desc.replace('\n', " ").replace("``", "`");
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    let text = text.trim();
    let truncated = match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    };
    escape_literal(&truncated)
}

/// Escape text for a Rust string literal
fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// "/properties/Endpoint/Address" -> "Endpoint.Address"
fn return_attribute_name(path: &str) -> String {
    path.trim_start_matches("/properties/").replace('/', ".")
}

fn definition_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

#[derive(Default)]
struct Generator {
    needs_enum_type: bool,
    needs_tags_type: bool,
    needs_types: bool,
    /// Struct definitions referenced so far
    structs: BTreeSet<String>,
}

impl Generator {
    fn attr_type(&mut self, prop: &CfnProperty, prop_name: &str, schema: &CfnSchema) -> String {
        // Tags property is special - it's a Map in Stratus
        if prop_name == "Tags" {
            self.needs_tags_type = true;
            return "tags_type()".to_string();
        }

        // Handle $ref
        if let Some(ref_path) = &prop.ref_path {
            let name = definition_name(ref_path);
            return match schema.definitions.get(name) {
                Some(def) if def.properties.is_some() => {
                    self.structs.insert(name.to_string());
                    format!("{}_type()", name.to_snake_case())
                }
                Some(def) => self.attr_type(def, prop_name, schema),
                None => {
                    log::warn!("Unresolved $ref {} on {}, using String", ref_path, prop_name);
                    "AttributeType::String".to_string()
                }
            };
        }

        // Handle explicit enum
        if let Some(values) = &prop.enum_values {
            self.needs_enum_type = true;
            let values = values
                .iter()
                .map(|v| format!("\"{}\"", escape_literal(v)))
                .collect::<Vec<_>>()
                .join(", ");
            return format!("enum_type(&[{}])", values);
        }

        match prop.prop_type.as_ref().and_then(|t| t.as_str()) {
            Some("string") => {
                // CIDR type - only for properties that are actually CIDRs
                if prop_name.to_lowercase().contains("cidr") {
                    self.needs_types = true;
                    return "types::cidr()".to_string();
                }
                "AttributeType::String".to_string()
            }
            Some("boolean") => "AttributeType::Bool".to_string(),
            Some("integer") => "AttributeType::Int".to_string(),
            Some("number") => "AttributeType::Number".to_string(),
            Some("array") => {
                let item_type = match &prop.items {
                    Some(items) => self.attr_type(items, prop_name, schema),
                    None => "AttributeType::String".to_string(),
                };
                format!("AttributeType::List(Box::new({}))", item_type)
            }
            Some("object") => "AttributeType::Json".to_string(),
            _ => "AttributeType::String".to_string(),
        }
    }

    /// One `AttributeSchema` builder expression
    fn attribute_code(
        &mut self,
        prop_name: &str,
        prop: &CfnProperty,
        required: bool,
        indent: &str,
        schema: &CfnSchema,
    ) -> String {
        let attr_type = self.attr_type(prop, prop_name, schema);
        let mut code = format!(
            "{}AttributeSchema::new(\"{}\", {})",
            indent,
            prop_name.to_snake_case(),
            attr_type
        );
        if required {
            code.push_str(&format!("\n{}    .required()", indent));
        }
        if let Some(desc) = &prop.description {
            code.push_str(&format!(
                "\n{}    .with_description(\"{}\")",
                indent,
                description_literal(desc, 150)
            ));
        }
        // Add provider_name mapping (CloudFormation property name)
        code.push_str(&format!(
            "\n{}    .with_provider_name(\"{}\")",
            indent, prop_name
        ));
        code
    }

    fn struct_code(&mut self, name: &str, def: &CfnProperty, schema: &CfnSchema) -> String {
        let required: HashSet<&str> = def.required.iter().map(String::as_str).collect();
        let fields: Vec<String> = def
            .properties
            .iter()
            .flatten()
            .map(|(prop_name, prop)| {
                self.attribute_code(
                    prop_name,
                    prop,
                    required.contains(prop_name.as_str()),
                    "            ",
                    schema,
                )
            })
            .collect();

        format!(
            r#"/// {name} property type
fn {fn_name}_type() -> AttributeType {{
    AttributeType::Struct {{
        name: "{name}".to_string(),
        fields: vec![
{fields},
        ],
    }}
}}
"#,
            name = name,
            fn_name = name.to_snake_case(),
            fields = fields.join(",\n")
        )
    }
}

fn generate_schema_code(schema: &CfnSchema, type_name: &str) -> Result<String> {
    let (service, resource) = parse_type_name(type_name)?;
    let stratus_type = format!("{}.{}", service, resource);
    let fn_name = format!("{}_{}_schema", service, resource);

    // Build read-only properties set
    let read_only: Vec<String> = schema
        .read_only_properties
        .iter()
        .map(|p| return_attribute_name(p))
        .collect();
    let required: HashSet<&str> = schema.required.iter().map(String::as_str).collect();

    let mut generator = Generator::default();

    // Generate the schema function
    let mut schema_fn = format!(
        "/// Returns the schema for {} ({})\npub fn {}() -> ResourceSchema {{\n    ResourceSchema::new(\"{}\", \"{}\")\n",
        stratus_type, type_name, fn_name, stratus_type, type_name
    );
    if let Some(desc) = &schema.description {
        schema_fn.push_str(&format!(
            "        .with_description(\"{}\")\n",
            description_literal(desc, 200)
        ));
    }
    for (prop_name, prop) in &schema.properties {
        // Read-only properties are returned through Fn::GetAtt, not set
        if read_only.contains(prop_name) {
            continue;
        }
        let attr = generator.attribute_code(
            prop_name,
            prop,
            required.contains(prop_name.as_str()),
            "            ",
            schema,
        );
        schema_fn.push_str(&format!("        .attribute(\n{},\n        )\n", attr));
    }
    let mut returns = read_only.clone();
    returns.sort();
    for attr in &returns {
        schema_fn.push_str(&format!("        .return_attribute(\"{}\")\n", attr));
    }
    schema_fn.push_str("}\n");

    // Generate struct types, including those only referenced from other structs
    let mut emitted: BTreeMap<String, String> = BTreeMap::new();
    loop {
        let pending: Vec<String> = generator
            .structs
            .iter()
            .filter(|name| !emitted.contains_key(*name))
            .cloned()
            .collect();
        if pending.is_empty() {
            break;
        }
        for name in pending {
            let code = match schema.definitions.get(&name) {
                Some(def) => generator.struct_code(&name, def, schema),
                None => String::new(),
            };
            log::debug!("Generated struct type {}", name);
            emitted.insert(name, code);
        }
    }

    // Header with conditional imports
    let mut code = format!(
        r#"//! {} schema definition for AWS CloudFormation
//!
//! Auto-generated from CloudFormation schema: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

"#,
        resource, type_name
    );
    let helpers: Vec<&str> = [
        ("enum_type", generator.needs_enum_type),
        ("tags_type", generator.needs_tags_type),
    ]
    .into_iter()
    .filter(|(_, needed)| *needed)
    .map(|(name, _)| name)
    .collect();
    match helpers.as_slice() {
        [] => {}
        [one] => code.push_str(&format!("use crate::schemas::generated::{};\n", one)),
        many => code.push_str(&format!(
            "use crate::schemas::generated::{{{}}};\n",
            many.join(", ")
        )),
    }
    let types_import = if generator.needs_types { ", types" } else { "" };
    code.push_str(&format!(
        "use stratus_core::schema::{{AttributeSchema, AttributeType, ResourceSchema{}}};\n\n",
        types_import
    ));

    for struct_code in emitted.values() {
        code.push_str(struct_code);
        code.push('\n');
    }
    code.push_str(&schema_fn);

    Ok(code)
}
