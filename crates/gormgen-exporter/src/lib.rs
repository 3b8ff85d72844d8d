//! Generation engine interface and a built-in engine that renders GORM model
//! structs from table definitions.

pub mod engine;
pub mod error;
pub mod gorm;
pub mod schema;

pub use engine::{GenerationEngine, ModelOpt, ModelRef, QueryInterface};
pub use error::ExportError;
pub use gorm::{GoModelEngine, ModelRenderer};
pub use schema::{SchemaSource, StaticSchema};
