pub mod column;
pub mod table;

pub use column::{ColumnDef, ColumnType};
pub use table::TableDef;

pub type TableName = String;
pub type ColumnName = String;
