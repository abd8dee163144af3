//! Name conversion between Stratus attribute names and CloudFormation spellings

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// "sns_role_name" -> "SnsRoleName"
pub fn to_pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// "sns_role_name" -> "snsRoleName"
pub fn to_lower_camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}
