//! Naming conventions and helpers for gormgen model generation.
//!
//! This crate turns database identifiers (table and column names) into the Go
//! identifiers and file names the model generator emits. It has no
//! dependencies and can be used by any other gormgen crate.

// ============================================================================
// Identifier Naming
// ============================================================================

/// Words Go spells fully upper-case when they appear as a name segment.
const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UID", "UI",
    "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
];

/// Convert a column or table name into an exported Go identifier.
///
/// Segments are split on `_`, `-` and spaces; segments matching a common
/// initialism are emitted upper-case, the rest are capitalized. A name that
/// would start with a digit gets a leading underscore.
///
/// # Examples
/// ```
/// use gormgen_naming::to_go_identifier;
///
/// assert_eq!(to_go_identifier("user_id"), "UserID");
/// assert_eq!(to_go_identifier("avatar_url"), "AvatarURL");
/// assert_eq!(to_go_identifier("createdAt"), "CreatedAt");
/// ```
pub fn to_go_identifier(name: &str) -> String {
    let mut result = String::new();
    for segment in name.split(['_', '-', ' ']).filter(|s| !s.is_empty()) {
        let upper = segment.to_ascii_uppercase();
        if COMMON_INITIALISMS.contains(&upper.as_str()) {
            result.push_str(&upper);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                result.push(first.to_ascii_uppercase());
                result.push_str(chars.as_str());
            }
        }
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Singularize a (snake_case) table name.
///
/// Only the last segment is touched, so `order_items` becomes `order_item`.
///
/// # Examples
/// ```
/// use gormgen_naming::singularize;
///
/// assert_eq!(singularize("users"), "user");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("boxes"), "box");
/// assert_eq!(singularize("status"), "status");
/// ```
pub fn singularize(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with("ies") && name.len() > 3 {
        format!("{}y", &name[..name.len() - 3])
    } else if ["sses", "xes", "ches", "shes", "zes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        name[..name.len() - 2].to_string()
    } else if lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        name[..name.len() - 1].to_string()
    } else {
        name.to_string()
    }
}

/// Build the Go struct name for a table: singular, exported, initialism-aware.
///
/// # Examples
/// ```
/// use gormgen_naming::build_model_name;
///
/// assert_eq!(build_model_name("users"), "User");
/// assert_eq!(build_model_name("api_keys"), "APIKey");
/// ```
pub fn build_model_name(table: &str) -> String {
    to_go_identifier(&singularize(table))
}

// ============================================================================
// Generated Artifact Naming
// ============================================================================

/// File name of the generated model for a table.
/// Format: {table}.gen.go
pub fn build_model_file_name(table: &str) -> String {
    format!("{}.gen.go", table.replace(' ', "_"))
}

/// Name of the constant holding a model's table name.
/// Format: TableName{Model}
pub fn build_table_name_const(model: &str) -> String {
    format!("TableName{}", model)
}
