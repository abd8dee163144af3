//! Stratus AWS Provider
//!
//! CloudFormation resource schemas for AWS Firewall Manager, IAM Roles
//! Anywhere, AWS WAF Classic and Amazon Neptune.
//!
//! ## Module Structure
//!
//! - `schemas` - Auto-generated resource schemas, one module per resource type

pub mod schemas;

pub use schemas::all_schemas;

use stratus_core::registry::SchemaRegistry;

/// Registry containing every resource type this provider defines
pub fn registry() -> SchemaRegistry {
    SchemaRegistry::new(all_schemas())
}
