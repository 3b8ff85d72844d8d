use gormgen_config::GeneratorConfig;
use gormgen_resolver::{JsonTagStrategy, TypeMappingTable};

/// Per-model field option applied on top of the resolver tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOpt {
    /// Leave the column out of the generated struct.
    FieldIgnore { column: String },
    /// Use `name` as the Go field name.
    FieldRename { column: String, name: String },
    /// Use `go_type` instead of the resolved type.
    FieldType { column: String, go_type: String },
    /// Use `tag` as the full JSON tag instead of the resolved one.
    FieldJsonTag { column: String, tag: String },
}

impl ModelOpt {
    pub fn field_ignore(column: impl Into<String>) -> Self {
        ModelOpt::FieldIgnore {
            column: column.into(),
        }
    }

    pub fn field_rename(column: impl Into<String>, name: impl Into<String>) -> Self {
        ModelOpt::FieldRename {
            column: column.into(),
            name: name.into(),
        }
    }

    pub fn field_type(column: impl Into<String>, go_type: impl Into<String>) -> Self {
        ModelOpt::FieldType {
            column: column.into(),
            go_type: go_type.into(),
        }
    }

    pub fn field_json_tag(column: impl Into<String>, tag: impl Into<String>) -> Self {
        ModelOpt::FieldJsonTag {
            column: column.into(),
            tag: tag.into(),
        }
    }

    /// Column this option targets.
    pub fn column(&self) -> &str {
        match self {
            ModelOpt::FieldIgnore { column }
            | ModelOpt::FieldRename { column, .. }
            | ModelOpt::FieldType { column, .. }
            | ModelOpt::FieldJsonTag { column, .. } => column,
        }
    }
}

/// Reference to a model by the table it is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelRef(String);

impl ModelRef {
    pub fn new(table: impl Into<String>) -> Self {
        Self(table.into())
    }

    pub fn table(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ModelRef {
    fn from(table: &str) -> Self {
        Self::new(table)
    }
}

impl From<String> for ModelRef {
    fn from(table: String) -> Self {
        Self(table)
    }
}

/// Annotated query interface applied to one or more models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInterface {
    pub name: String,
    /// Interface source with SQL-annotated methods.
    pub source: String,
}

impl QueryInterface {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Code generation engine driven by the generator wrapper.
///
/// The wrapper configures the engine once, registers the resolver callbacks,
/// queues models and interfaces, then calls [`GenerationEngine::execute`].
pub trait GenerationEngine {
    type Error: std::error::Error + Send + Sync + 'static;

    fn configure(&mut self, config: &GeneratorConfig);

    fn with_data_type_map(&mut self, table: TypeMappingTable);

    fn with_json_tag_name_strategy(&mut self, strategy: JsonTagStrategy);

    fn generate_model(&mut self, table_name: &str, opts: &[ModelOpt]) -> Result<(), Self::Error>;

    fn apply_basic(&mut self, models: &[ModelRef]) -> Result<(), Self::Error>;

    fn apply_interface(
        &mut self,
        interface: &QueryInterface,
        models: &[ModelRef],
    ) -> Result<(), Self::Error>;

    fn execute(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_opt_column() {
        assert_eq!(ModelOpt::field_ignore("a").column(), "a");
        assert_eq!(ModelOpt::field_rename("b", "B").column(), "b");
        assert_eq!(ModelOpt::field_type("c", "int").column(), "c");
        assert_eq!(ModelOpt::field_json_tag("d", "-").column(), "d");
    }

    #[test]
    fn test_model_ref_conversions() {
        let a: ModelRef = "users".into();
        let b: ModelRef = String::from("users").into();
        assert_eq!(a, b);
        assert_eq!(a.table(), "users");
        assert!(ModelRef::new("").is_empty());
    }
}
