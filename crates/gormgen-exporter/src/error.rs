use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("table not found: {0}")]
    TableNotFound(String),
    #[error("unsupported by this engine: {0}")]
    Unsupported(String),
    #[error("table `{table}`: column `{column}` maps to invalid Go field name `{field}`")]
    InvalidFieldName {
        table: String,
        column: String,
        field: String,
    },
    #[error("table `{table}`: columns `{first}` and `{second}` both map to field `{field}`")]
    DuplicateField {
        table: String,
        field: String,
        first: String,
        second: String,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
