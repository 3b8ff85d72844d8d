//! Type and tag resolution for generated Go models.
//!
//! Two lookup tables drive field emission: the data type table maps a column's
//! declared SQL type family to a Go type, and the JSON tag table rewrites the
//! tag attached to a field. Both share the same merge/override semantics and
//! never fail; unknown keys fall back to the engine's defaults.

pub mod data_type;
pub mod json_tag;
pub mod table;

pub use data_type::{
    DataTypeFn, SOFT_DELETE_COLUMNS, TypeMappingTable, TypeOverrides, default_data_type_map,
    is_soft_delete_column,
};
pub use json_tag::{
    JsonTag, JsonTagOverrides, JsonTagStrategy, JsonTagTable, default_json_tag_name,
};
pub use table::{MappingTable, Overrides, apply_overrides};
