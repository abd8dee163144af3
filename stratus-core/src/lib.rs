//! Stratus Core
//!
//! Typed CloudFormation resource definitions: schema-checked construction,
//! property access, and template synthesis

pub mod case;
pub mod config;
pub mod manifest;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod stack;

pub use config::SynthConfig;
pub use manifest::{Manifest, ManifestError};
pub use registry::SchemaRegistry;
pub use resource::{Resource, Value};
pub use schema::{AttributeSchema, AttributeType, ResourceSchema, TypeError};
pub use stack::{Stack, StackError};
