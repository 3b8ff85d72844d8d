#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::ColumnName;

/// Read-only view of one database column, as reported by a schema source.
///
/// Type mapping functions only ever see a column through this trait, so any
/// introspection backend can feed the resolver without converting first.
pub trait ColumnType {
    /// Column name exactly as stored in the database.
    fn name(&self) -> &str;

    /// Declared type family, e.g. `int`, `varchar`, `decimal`.
    fn database_type_name(&self) -> &str;

    /// Full raw column type, e.g. `tinyint(1)` or `bigint unsigned`.
    fn column_type(&self) -> Option<&str>;

    /// Nullability, or `None` when the source cannot tell.
    fn nullable(&self) -> Option<bool>;

    /// True only when nullability is known and the column is nullable.
    fn is_nullable(&self) -> bool {
        self.nullable() == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ColumnDef {
    pub name: ColumnName,
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub primary_key: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_increment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ColumnDef {
    /// Column with a declared type family and known nullability.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: Some(nullable),
            ..Default::default()
        }
    }

    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = Some(column_type.into());
        self
    }

    pub fn with_primary_key(mut self, auto_increment: bool) -> Self {
        self.primary_key = true;
        self.auto_increment = auto_increment;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ColumnType for ColumnDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn database_type_name(&self) -> &str {
        &self.data_type
    }

    fn column_type(&self) -> Option<&str> {
        self.column_type.as_deref()
    }

    fn nullable(&self) -> Option<bool> {
        self.nullable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(true), true)]
    #[case(Some(false), false)]
    #[case(None, false)]
    fn test_is_nullable_requires_known_true(
        #[case] nullable: Option<bool>,
        #[case] expected: bool,
    ) {
        let col = ColumnDef {
            name: "name".into(),
            data_type: "varchar".into(),
            nullable,
            ..Default::default()
        };
        assert_eq!(col.is_nullable(), expected);
    }

    #[test]
    fn test_builder_methods() {
        let col = ColumnDef::new("id", "bigint", false)
            .with_column_type("bigint unsigned")
            .with_primary_key(true)
            .with_default("0")
            .with_comment("row id");

        assert_eq!(ColumnType::name(&col), "id");
        assert_eq!(col.database_type_name(), "bigint");
        assert_eq!(ColumnType::column_type(&col), Some("bigint unsigned"));
        assert_eq!(ColumnType::nullable(&col), Some(false));
        assert!(col.primary_key);
        assert!(col.auto_increment);
        assert_eq!(col.default.as_deref(), Some("0"));
        assert_eq!(col.comment.as_deref(), Some("row id"));
    }

    #[test]
    fn test_deserialize_minimal_column() {
        let col: ColumnDef =
            serde_json::from_str(r#"{"name":"flag","data_type":"tinyint"}"#).unwrap();
        assert_eq!(col.name, "flag");
        assert_eq!(col.nullable, None);
        assert!(!col.primary_key);
        assert_eq!(ColumnType::column_type(&col), None);
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let col = ColumnDef::new("email", "varchar", false);
        let json = serde_json::to_string(&col).unwrap();
        assert_eq!(
            json,
            r#"{"name":"email","data_type":"varchar","nullable":false}"#
        );
    }
}
