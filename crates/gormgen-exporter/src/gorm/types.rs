use std::collections::BTreeSet;

use gormgen_core::ColumnType;

/// Go type inferred for a column whose type family has no mapping.
pub fn default_go_type(column: &dyn ColumnType) -> String {
    let family = column.database_type_name().to_lowercase();
    let base = match family.as_str() {
        // Boolean
        "bool" | "boolean" | "bit" => "bool",

        // Integer types
        "tinyint" => "int8",
        "smallint" | "int2" | "smallserial" => "int16",
        "mediumint" | "int" | "integer" | "int4" | "serial" => "int32",
        "bigint" | "int8" | "bigserial" => "int64",

        // Floating point and exact numerics
        "float" | "real" | "float4" => "float32",
        "double" | "double precision" | "float8" | "numeric" | "decimal" => "float64",

        // Date/time types
        "date" | "datetime" | "timestamp" | "timestamptz" | "time" => "time.Time",

        // Binary types
        "binary" | "varbinary" | "blob" | "tinyblob" | "mediumblob" | "longblob" | "bytea" => {
            "[]byte"
        }

        // Default fallback
        _ => "string",
    };

    let unsigned = column
        .column_type()
        .is_some_and(|raw| raw.to_lowercase().contains("unsigned"));
    let base = if unsigned && base.starts_with("int") {
        format!("u{}", base)
    } else {
        base.to_string()
    };

    // Slices already have a nil zero value
    if column.is_nullable() && !base.starts_with("[]") {
        format!("*{}", base)
    } else {
        base
    }
}

/// Import path for a Go package qualifier used in a field type.
fn import_path(qualifier: &str) -> Option<&'static str> {
    match qualifier {
        "time" => Some("time"),
        "json" => Some("encoding/json"),
        "sql" => Some("database/sql"),
        "decimal" => Some("github.com/shopspring/decimal"),
        "gorm" => Some("gorm.io/gorm"),
        "soft_delete" => Some("gorm.io/plugin/soft_delete"),
        "datatypes" => Some("gorm.io/datatypes"),
        _ => None,
    }
}

/// Package qualifier of a Go type, e.g. `time` for `*time.Time`.
pub fn qualifier(go_type: &str) -> Option<&str> {
    let bare = go_type.trim_start_matches(['*', '[', ']']);
    bare.split_once('.').map(|(pkg, _)| pkg)
}

/// Imports needed by a set of Go types, split into standard library and third-party.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Imports {
    pub std: BTreeSet<&'static str>,
    pub external: BTreeSet<&'static str>,
    pub unknown: BTreeSet<String>,
}

impl Imports {
    pub fn add_type(&mut self, go_type: &str) {
        let Some(pkg) = qualifier(go_type) else {
            return;
        };
        match import_path(pkg) {
            Some(path) if path.contains('.') => {
                self.external.insert(path);
            }
            Some(path) => {
                self.std.insert(path);
            }
            None => {
                self.unknown.insert(pkg.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.std.is_empty() && self.external.is_empty()
    }

    /// Render a Go import block, standard library group first.
    pub fn render(&self) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut lines = vec!["import (".to_string()];
        for path in &self.std {
            lines.push(format!("\t\"{}\"", path));
        }
        if !self.std.is_empty() && !self.external.is_empty() {
            lines.push(String::new());
        }
        for path in &self.external {
            lines.push(format!("\t\"{}\"", path));
        }
        lines.push(")".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gormgen_core::ColumnDef;
    use rstest::rstest;

    #[rstest]
    #[case("float", false, "float32")]
    #[case("double", true, "*float64")]
    #[case("text", false, "string")]
    #[case("longtext", true, "*string")]
    #[case("blob", true, "[]byte")]
    #[case("date", true, "*time.Time")]
    #[case("BOOLEAN", false, "bool")]
    #[case("integer", false, "int32")]
    #[case("enum", false, "string")]
    fn test_default_go_type(#[case] family: &str, #[case] nullable: bool, #[case] expected: &str) {
        let col = ColumnDef::new("c", family, nullable);
        assert_eq!(default_go_type(&col), expected);
    }

    #[test]
    fn test_default_go_type_unsigned() {
        let col = ColumnDef::new("c", "bigint", false).with_column_type("bigint unsigned");
        assert_eq!(default_go_type(&col), "uint64");
        let col = ColumnDef::new("c", "float", false).with_column_type("float unsigned");
        assert_eq!(default_go_type(&col), "float32");
    }

    #[rstest]
    #[case("*time.Time", Some("time"))]
    #[case("decimal.Decimal", Some("decimal"))]
    #[case("[]datatypes.JSON", Some("datatypes"))]
    #[case("int64", None)]
    #[case("*string", None)]
    fn test_qualifier(#[case] go_type: &str, #[case] expected: Option<&str>) {
        assert_eq!(qualifier(go_type), expected);
    }

    #[test]
    fn test_imports_render_grouped() {
        let mut imports = Imports::default();
        for ty in [
            "*time.Time",
            "decimal.Decimal",
            "gorm.DeletedAt",
            "time.Time",
            "int64",
            "custom.Type",
        ] {
            imports.add_type(ty);
        }

        assert_eq!(
            imports.render(),
            vec![
                "import (",
                "\t\"time\"",
                "",
                "\t\"github.com/shopspring/decimal\"",
                "\t\"gorm.io/gorm\"",
                ")",
            ]
        );
        assert!(imports.unknown.contains("custom"));
    }

    #[test]
    fn test_imports_empty_renders_nothing() {
        let mut imports = Imports::default();
        imports.add_type("string");
        assert!(imports.render().is_empty());
    }
}
