pub mod schema;

pub use schema::{ColumnDef, ColumnName, ColumnType, TableDef, TableName};
