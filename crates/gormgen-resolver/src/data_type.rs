//! SQL type family to Go type mapping.

use std::fmt;
use std::sync::Arc;

use gormgen_core::ColumnType;

use crate::table::{MappingTable, Overrides};

/// Column names treated as soft-delete markers.
pub const SOFT_DELETE_COLUMNS: [&str; 3] = ["deleted_at", "deletedAt", "DeletedAt"];

/// Returns true when the column name is one of the soft-delete spellings (case-sensitive).
pub fn is_soft_delete_column(name: &str) -> bool {
    SOFT_DELETE_COLUMNS.contains(&name)
}

type MapColumn = dyn Fn(&dyn ColumnType) -> String + Send + Sync;

/// Function mapping one column to the Go type emitted for it.
#[derive(Clone)]
pub struct DataTypeFn(Arc<MapColumn>);

impl DataTypeFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&dyn ColumnType) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Mapping that ignores the column and always yields `go_type`.
    pub fn fixed(go_type: impl Into<String>) -> Self {
        let go_type = go_type.into();
        Self::new(move |_| go_type.clone())
    }

    pub fn call(&self, column: &dyn ColumnType) -> String {
        (self.0)(column)
    }
}

impl fmt::Debug for DataTypeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DataTypeFn(..)")
    }
}

pub type TypeMappingTable = MappingTable<DataTypeFn>;
pub type TypeOverrides = Overrides<DataTypeFn>;

impl MappingTable<DataTypeFn> {
    /// Resolve the Go type for a column of the given declared type family.
    ///
    /// The family is lower-cased before lookup. `None` means the family is not
    /// mapped and the engine should fall back to its own inference.
    pub fn resolve(&self, declared: &str, column: &dyn ColumnType) -> Option<String> {
        self.get(&declared.to_lowercase()).map(|f| f.call(column))
    }
}

fn optional(column: &dyn ColumnType, base: &str) -> String {
    if column.is_nullable() {
        format!("*{}", base)
    } else {
        base.to_string()
    }
}

fn time_type(column: &dyn ColumnType) -> String {
    if is_soft_delete_column(column.name()) {
        return "gorm.DeletedAt".to_string();
    }
    optional(column, "time.Time")
}

fn tinyint_type(column: &dyn ColumnType) -> String {
    // MySQL stores booleans as tinyint(1)
    if column
        .column_type()
        .is_some_and(|raw| raw.starts_with("tinyint(1)"))
    {
        return "bool".to_string();
    }
    optional(column, "int8")
}

fn soft_delete_int_type(column: &dyn ColumnType, base: &str) -> String {
    if is_soft_delete_column(column.name()) {
        return "soft_delete.DeletedAt".to_string();
    }
    optional(column, base)
}

fn int_type(column: &dyn ColumnType) -> String {
    soft_delete_int_type(column, "int")
}

fn bigint_type(column: &dyn ColumnType) -> String {
    soft_delete_int_type(column, "int64")
}

fn string_type(column: &dyn ColumnType) -> String {
    optional(column, "string")
}

/// Default data type mapping, built fresh on every call.
///
/// | family | Go type |
/// |---|---|
/// | decimal | `decimal.Decimal` (nullability ignored) |
/// | datetime, timestamp | `gorm.DeletedAt` for soft-delete names, else `[*]time.Time` |
/// | tinyint | `bool` for `tinyint(1)`, else `[*]int8` |
/// | smallint / mediumint | `[*]int16` / `[*]int32` |
/// | int / bigint | `soft_delete.DeletedAt` for soft-delete names, else `[*]int` / `[*]int64` |
/// | varchar, char, json | `[*]string` |
pub fn default_data_type_map() -> TypeMappingTable {
    let mut table = TypeMappingTable::new();
    table.insert("decimal", DataTypeFn::fixed("decimal.Decimal"));
    table.insert("datetime", DataTypeFn::new(time_type));
    table.insert("timestamp", DataTypeFn::new(time_type));
    table.insert("tinyint", DataTypeFn::new(tinyint_type));
    table.insert("smallint", DataTypeFn::new(|c| optional(c, "int16")));
    table.insert("mediumint", DataTypeFn::new(|c| optional(c, "int32")));
    table.insert("int", DataTypeFn::new(int_type));
    table.insert("bigint", DataTypeFn::new(bigint_type));
    table.insert("varchar", DataTypeFn::new(string_type));
    table.insert("char", DataTypeFn::new(string_type));
    table.insert("json", DataTypeFn::new(string_type));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use gormgen_core::ColumnDef;
    use rstest::rstest;

    fn col(name: &str, data_type: &str, nullable: bool) -> ColumnDef {
        ColumnDef::new(name, data_type, nullable)
    }

    fn resolve(column: &ColumnDef) -> Option<String> {
        default_data_type_map().resolve(&column.data_type, column)
    }

    #[rstest]
    #[case("decimal", false, "decimal.Decimal")]
    #[case("decimal", true, "decimal.Decimal")]
    #[case("datetime", false, "time.Time")]
    #[case("datetime", true, "*time.Time")]
    #[case("timestamp", false, "time.Time")]
    #[case("timestamp", true, "*time.Time")]
    #[case("tinyint", false, "int8")]
    #[case("tinyint", true, "*int8")]
    #[case("smallint", false, "int16")]
    #[case("smallint", true, "*int16")]
    #[case("mediumint", false, "int32")]
    #[case("mediumint", true, "*int32")]
    #[case("int", false, "int")]
    #[case("int", true, "*int")]
    #[case("bigint", false, "int64")]
    #[case("bigint", true, "*int64")]
    #[case("varchar", false, "string")]
    #[case("varchar", true, "*string")]
    #[case("char", false, "string")]
    #[case("char", true, "*string")]
    #[case("json", false, "string")]
    #[case("json", true, "*string")]
    fn test_default_families(
        #[case] data_type: &str,
        #[case] nullable: bool,
        #[case] expected: &str,
    ) {
        let column = col("value", data_type, nullable);
        assert_eq!(resolve(&column).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("deleted_at")]
    #[case("deletedAt")]
    #[case("DeletedAt")]
    fn test_soft_delete_names(#[case] name: &str) {
        for nullable in [false, true] {
            for family in ["datetime", "timestamp"] {
                let column = col(name, family, nullable);
                assert_eq!(resolve(&column).as_deref(), Some("gorm.DeletedAt"));
            }
            for family in ["int", "bigint"] {
                let column = col(name, family, nullable);
                assert_eq!(resolve(&column).as_deref(), Some("soft_delete.DeletedAt"));
            }
        }
    }

    #[rstest]
    #[case("Deleted_At")]
    #[case("deleted")]
    #[case("DELETED_AT")]
    fn test_soft_delete_match_is_case_sensitive(#[case] name: &str) {
        let column = col(name, "int", false);
        assert_eq!(resolve(&column).as_deref(), Some("int"));
        let column = col(name, "datetime", true);
        assert_eq!(resolve(&column).as_deref(), Some("*time.Time"));
    }

    #[test]
    fn test_tinyint_one_is_bool_even_when_nullable() {
        let column = col("active", "tinyint", true).with_column_type("tinyint(1)");
        assert_eq!(resolve(&column).as_deref(), Some("bool"));

        let column = col("active", "tinyint", false).with_column_type("tinyint(1) unsigned");
        assert_eq!(resolve(&column).as_deref(), Some("bool"));
    }

    #[test]
    fn test_tinyint_wider_display_is_int8() {
        let column = col("level", "tinyint", true).with_column_type("tinyint(4)");
        assert_eq!(resolve(&column).as_deref(), Some("*int8"));
    }

    #[test]
    fn test_unknown_nullability_is_not_nullable() {
        let column = ColumnDef {
            name: "title".into(),
            data_type: "varchar".into(),
            nullable: None,
            ..Default::default()
        };
        assert_eq!(resolve(&column).as_deref(), Some("string"));
    }

    #[test]
    fn test_declared_type_is_lowercased() {
        let table = default_data_type_map();
        let column = col("amount", "DECIMAL", false);
        assert_eq!(
            table.resolve("DECIMAL", &column).as_deref(),
            Some("decimal.Decimal")
        );
    }

    #[rstest]
    #[case("float")]
    #[case("text")]
    #[case("blob")]
    #[case("")]
    fn test_unrecognized_family_defers(#[case] family: &str) {
        let column = col("x", family, false);
        assert_eq!(resolve(&column), None);
    }

    #[test]
    fn test_merge_removes_and_overrides() {
        let mut table = default_data_type_map();
        let overrides: TypeOverrides = [
            ("decimal".to_string(), None),
            (
                "json".to_string(),
                Some(DataTypeFn::fixed("datatypes.JSON")),
            ),
        ]
        .into_iter()
        .collect();
        table.merge(overrides);

        let amount = col("amount", "decimal", false);
        assert_eq!(table.resolve("decimal", &amount), None);
        let payload = col("payload", "json", true);
        assert_eq!(
            table.resolve("json", &payload).as_deref(),
            Some("datatypes.JSON")
        );
        let name = col("name", "varchar", false);
        assert_eq!(table.resolve("varchar", &name).as_deref(), Some("string"));
    }

    #[test]
    fn test_default_map_is_fresh_per_call() {
        let mut first = default_data_type_map();
        first.remove("int");
        assert!(default_data_type_map().contains_key("int"));
        assert_eq!(default_data_type_map().len(), 11);
    }
}
