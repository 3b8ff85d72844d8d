use std::collections::HashMap;

use gormgen_core::TableDef;

/// Provides table definitions to the engine.
pub trait SchemaSource {
    fn table(&self, name: &str) -> Option<TableDef>;
}

/// In-memory schema, keyed by table name.
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    tables: HashMap<String, TableDef>,
}

impl StaticSchema {
    pub fn new(tables: impl IntoIterator<Item = TableDef>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }

    pub fn insert(&mut self, table: TableDef) {
        self.tables.insert(table.name.clone(), table);
    }
}

impl SchemaSource for StaticSchema {
    fn table(&self, name: &str) -> Option<TableDef> {
        self.tables.get(name).cloned()
    }
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    fn table(&self, name: &str) -> Option<TableDef> {
        (**self).table(name)
    }
}
