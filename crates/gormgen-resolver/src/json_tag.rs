//! JSON tag rewriting rules keyed by column name.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::table::{MappingTable, Overrides};

/// Rewrite rule for the JSON tag of one column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct JsonTag {
    /// Name used instead of the column name. Empty means no replacement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<String>,
    /// Modifiers appended after the name, e.g. `omitzero`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub append: Vec<String>,
    /// Extra struct tag keys emitted after the json tag, e.g. `time_format`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<(String, String)>,
}

impl JsonTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(mut self, name: impl Into<String>) -> Self {
        self.replace = Some(name.into());
        self
    }

    pub fn append(mut self, modifier: impl Into<String>) -> Self {
        self.append.push(modifier.into());
        self
    }

    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add.push((key.into(), value.into()));
        self
    }

    /// Render the tag for `column`.
    ///
    /// Order is fixed: name (or replacement), then `,modifier` for each append,
    /// then `" key:"value` for each added attribute. The emitter wraps the
    /// result in `json:"..."`, so each added attribute closes the json tag and
    /// opens a sibling struct tag key.
    pub fn render(&self, column: &str) -> String {
        let mut tag = match self.replace.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => column.to_string(),
        };
        for modifier in &self.append {
            tag.push(',');
            tag.push_str(modifier);
        }
        for (key, value) in &self.add {
            tag.push_str(&format!("\" {}:\"{}", key, value));
        }
        tag
    }
}

pub type JsonTagTable = MappingTable<JsonTag>;
pub type JsonTagOverrides = Overrides<JsonTag>;

impl MappingTable<JsonTag> {
    /// Resolve the JSON tag for a column; unmapped columns pass through unchanged.
    pub fn resolve(&self, column: &str) -> String {
        match self.get(column) {
            Some(rule) => rule.render(column),
            None => column.to_string(),
        }
    }
}

/// Default JSON tag rules, built fresh on every call.
///
/// `created_at` and `updated_at` get `omitzero` and a `time_format:"sql_datetime"` key.
pub fn default_json_tag_name() -> JsonTagTable {
    let timestamp = JsonTag::new()
        .append("omitzero")
        .add("time_format", "sql_datetime");

    let mut table = JsonTagTable::new();
    table.insert("created_at", timestamp.clone());
    table.insert("updated_at", timestamp);
    table
}

/// Column name to tag callback registered with the generation engine.
#[derive(Clone)]
pub struct JsonTagStrategy(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl JsonTagStrategy {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Strategy backed by a frozen tag table.
    pub fn from_table(table: JsonTagTable) -> Self {
        Self::new(move |column| table.resolve(column))
    }

    pub fn call(&self, column: &str) -> String {
        (self.0)(column)
    }
}

impl fmt::Debug for JsonTagStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonTagStrategy(..)")
    }
}
