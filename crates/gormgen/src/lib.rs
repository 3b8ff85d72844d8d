//! Drive a GORM-style Go model generator with convenient defaults.
//!
//! [`Generator`] accumulates options into a frozen [`GeneratorConfig`], registers
//! the data type and JSON tag tables with a [`GenerationEngine`], and forwards
//! queued models and interfaces to it on [`Generator::execute`].
//!
//! ```no_run
//! use gormgen::{Generator, GoModelEngine, StaticSchema, with_out_path};
//!
//! let schema = StaticSchema::default();
//! let mut generator = Generator::new(GoModelEngine::new(schema), [with_out_path("./dal/query")]);
//! generator.set_generate_model("users", []);
//! generator.execute().unwrap();
//! ```

pub mod generator;
pub mod option;

pub use generator::Generator;
pub use option::{
    GeneratorOption, GeneratorSettings, with_data_type_map, with_json_tag_name, with_mode,
    with_model_pkg_path, with_out_path, with_replace_data_type_map, with_replace_json_tag_name,
};

pub use gormgen_config::{GenerateMode, GeneratorConfig};
pub use gormgen_core::{ColumnDef, ColumnType, TableDef};
pub use gormgen_exporter::{
    ExportError, GenerationEngine, GoModelEngine, ModelOpt, ModelRef, QueryInterface, SchemaSource,
    StaticSchema,
};
pub use gormgen_resolver::{
    DataTypeFn, JsonTag, JsonTagOverrides, JsonTagStrategy, JsonTagTable, TypeMappingTable,
    TypeOverrides, default_data_type_map, default_json_tag_name,
};
