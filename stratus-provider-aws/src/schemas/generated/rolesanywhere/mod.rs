//! AWS::RolesAnywhere resource schemas

pub mod crl;
pub mod profile;
pub mod trust_anchor;

pub use crl::rolesanywhere_crl_schema;
pub use profile::rolesanywhere_profile_schema;
pub use trust_anchor::rolesanywhere_trust_anchor_schema;

use stratus_core::schema::ResourceSchema;

/// Returns all rolesanywhere schemas
pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        rolesanywhere_crl_schema(),
        rolesanywhere_profile_schema(),
        rolesanywhere_trust_anchor_schema(),
    ]
}
