//! Registry - Look up resource schemas by type name

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::ResourceSchema;

/// Resource schemas indexed by Stratus type name and CloudFormation type name
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<ResourceSchema>>,
    cfn_types: HashMap<String, String>,
}

impl SchemaRegistry {
    pub fn new(schemas: impl IntoIterator<Item = ResourceSchema>) -> Self {
        let mut registry = Self::default();
        for schema in schemas {
            registry.register(schema);
        }
        registry
    }

    /// Add a schema, replacing any previous schema with the same type name
    pub fn register(&mut self, schema: ResourceSchema) {
        self.cfn_types
            .insert(schema.cfn_type.clone(), schema.resource_type.clone());
        self.schemas
            .insert(schema.resource_type.clone(), Arc::new(schema));
    }

    /// Find a schema by Stratus type ("waf.ip_set") or CloudFormation type ("AWS::WAF::IPSet")
    pub fn get(&self, name: &str) -> Option<Arc<ResourceSchema>> {
        if let Some(schema) = self.schemas.get(name) {
            return Some(Arc::clone(schema));
        }
        self.cfn_types
            .get(name)
            .and_then(|resource_type| self.schemas.get(resource_type))
            .map(Arc::clone)
    }

    /// Stratus type names, sorted
    pub fn resource_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        types.sort();
        types
    }

    /// Schemas sorted by Stratus type name
    pub fn iter(&self) -> impl Iterator<Item = &ResourceSchema> {
        self.resource_types()
            .into_iter()
            .filter_map(move |name| self.schemas.get(name).map(Arc::as_ref))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
