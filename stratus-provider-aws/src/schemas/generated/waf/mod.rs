//! AWS::WAF resource schemas

pub mod byte_match_set;
pub mod ip_set;
pub mod rule;
pub mod size_constraint_set;
pub mod sql_injection_match_set;
pub mod web_acl;
pub mod xss_match_set;

pub use byte_match_set::waf_byte_match_set_schema;
pub use ip_set::waf_ip_set_schema;
pub use rule::waf_rule_schema;
pub use size_constraint_set::waf_size_constraint_set_schema;
pub use sql_injection_match_set::waf_sql_injection_match_set_schema;
pub use web_acl::waf_web_acl_schema;
pub use xss_match_set::waf_xss_match_set_schema;

use stratus_core::schema::ResourceSchema;

/// Returns all waf schemas
pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        waf_byte_match_set_schema(),
        waf_ip_set_schema(),
        waf_rule_schema(),
        waf_size_constraint_set_schema(),
        waf_sql_injection_match_set_schema(),
        waf_web_acl_schema(),
        waf_xss_match_set_schema(),
    ]
}
