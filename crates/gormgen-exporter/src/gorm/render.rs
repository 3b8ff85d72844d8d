use std::collections::HashMap;

use gormgen_core::{ColumnDef, ColumnType, TableDef};
use gormgen_naming::{build_model_name, build_table_name_const, to_go_identifier};
use gormgen_resolver::{JsonTagStrategy, TypeMappingTable};
use tracing::warn;

use crate::engine::ModelOpt;
use crate::error::ExportError;
use crate::gorm::types::{Imports, default_go_type};

/// One rendered struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub go_type: String,
    pub gorm_tag: String,
    pub json_tag: String,
    pub comment: Option<String>,
}

/// Renders Go model structs from table definitions using the resolver tables.
#[derive(Debug, Clone, Copy)]
pub struct ModelRenderer<'a> {
    pub package: &'a str,
    pub data_types: Option<&'a TypeMappingTable>,
    pub json_tags: Option<&'a JsonTagStrategy>,
}

impl<'a> ModelRenderer<'a> {
    pub fn new(package: &'a str) -> Self {
        Self {
            package,
            data_types: None,
            json_tags: None,
        }
    }

    pub fn with_data_types(mut self, table: Option<&'a TypeMappingTable>) -> Self {
        self.data_types = table;
        self
    }

    pub fn with_json_tags(mut self, strategy: Option<&'a JsonTagStrategy>) -> Self {
        self.json_tags = strategy;
        self
    }

    /// Resolve the Go type of a column: data type table first, then the built-in inference.
    pub fn go_type(&self, column: &ColumnDef) -> String {
        self.data_types
            .and_then(|table| table.resolve(column.database_type_name(), column))
            .unwrap_or_else(|| default_go_type(column))
    }

    pub fn json_tag(&self, column: &str) -> String {
        match self.json_tags {
            Some(strategy) => strategy.call(column),
            None => column.to_string(),
        }
    }

    /// Build the struct fields for a table, honoring per-model options.
    ///
    /// Fails when a field name is not a Go identifier or when two columns end
    /// up with the same field name.
    pub fn fields(&self, table: &TableDef, opts: &[ModelOpt]) -> Result<Vec<Field>, ExportError> {
        for opt in opts {
            if table.column(opt.column()).is_none() {
                warn!(
                    table = %table.name,
                    column = opt.column(),
                    "model option targets unknown column"
                );
            }
        }

        let mut fields = Vec::with_capacity(table.columns.len());
        let mut owners: HashMap<String, &str> = HashMap::new();
        for col in &table.columns {
            if is_ignored(opts, &col.name) {
                continue;
            }
            let field = self.field(col, opts);
            if !is_go_identifier(&field.name) {
                return Err(ExportError::InvalidFieldName {
                    table: table.name.clone(),
                    column: col.name.clone(),
                    field: field.name,
                });
            }
            if let Some(first) = owners.insert(field.name.clone(), &col.name) {
                return Err(ExportError::DuplicateField {
                    table: table.name.clone(),
                    field: field.name,
                    first: first.to_string(),
                    second: col.name.clone(),
                });
            }
            fields.push(field);
        }
        Ok(fields)
    }

    fn field(&self, col: &ColumnDef, opts: &[ModelOpt]) -> Field {
        let mut field = Field {
            name: to_go_identifier(&col.name),
            go_type: self.go_type(col),
            gorm_tag: gorm_tag(col),
            json_tag: self.json_tag(&col.name),
            comment: col.comment.as_ref().map(|c| c.replace('\n', " ")),
        };
        for opt in opts.iter().filter(|o| o.column() == col.name) {
            match opt {
                ModelOpt::FieldRename { name, .. } => field.name = name.clone(),
                ModelOpt::FieldType { go_type, .. } => field.go_type = go_type.clone(),
                ModelOpt::FieldJsonTag { tag, .. } => field.json_tag = tag.clone(),
                ModelOpt::FieldIgnore { .. } => {}
            }
        }
        field
    }

    /// Render a complete Go source file for a table's model.
    pub fn render_model(
        &self,
        table: &TableDef,
        options: &[ModelOpt],
    ) -> Result<String, ExportError> {
        let fields = self.fields(table, options)?;
        let model = build_model_name(&table.name);
        let table_const = build_table_name_const(&model);

        let mut imports = Imports::default();
        for field in &fields {
            imports.add_type(&field.go_type);
        }
        for pkg in &imports.unknown {
            warn!(table = %table.name, package = %pkg, "no import known for package qualifier");
        }

        let mut lines: Vec<String> = Vec::new();
        lines.push("// Code generated by gormgen. DO NOT EDIT.".into());
        lines.push("".into());
        lines.push(format!("package {}", self.package));
        lines.push("".into());

        let import_lines = imports.render();
        if !import_lines.is_empty() {
            lines.extend(import_lines);
            lines.push("".into());
        }

        lines.push(format!("const {} = \"{}\"", table_const, table.name));
        lines.push("".into());

        match table.comment.as_deref() {
            Some(comment) => lines.push(format!("// {} {}", model, comment.replace('\n', " "))),
            None => lines.push(format!("// {} mapped from table <{}>", model, table.name)),
        }
        lines.push(format!("type {} struct {{", model));

        let name_width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
        let type_width = fields.iter().map(|f| f.go_type.len()).max().unwrap_or(0);
        for field in &fields {
            let mut line = format!(
                "\t{:<nw$} {:<tw$} `gorm:\"{}\" json:\"{}\"`",
                field.name,
                field.go_type,
                field.gorm_tag,
                field.json_tag,
                nw = name_width,
                tw = type_width,
            );
            if let Some(comment) = &field.comment {
                line.push_str(&format!(" // {}", comment));
            }
            lines.push(line);
        }
        lines.push("}".into());
        lines.push("".into());

        lines.push(format!("// TableName {}'s table name", model));
        lines.push(format!("func (*{}) TableName() string {{", model));
        lines.push(format!("\treturn {}", table_const));
        lines.push("}".into());
        lines.push("".into());

        Ok(lines.join("\n"))
    }
}

fn is_ignored(opts: &[ModelOpt], column: &str) -> bool {
    opts.iter().any(|opt| match opt {
        ModelOpt::FieldIgnore { column: ignored } => ignored == column,
        _ => false,
    })
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Escape a value for use inside a backquoted struct tag.
///
/// Backquotes cannot appear in a Go raw string, so they become single quotes.
fn tag_value(value: &str) -> String {
    value
        .replace('\n', " ")
        .replace('`', "'")
        .replace('"', "\\\"")
}

/// Build the `gorm:"..."` tag value for a column.
pub fn gorm_tag(col: &ColumnDef) -> String {
    let mut parts = vec![format!("column:{}", tag_value(&col.name))];
    if let Some(raw) = &col.column_type {
        parts.push(format!("type:{}", tag_value(raw)));
    }
    if col.primary_key {
        parts.push("primaryKey".into());
    }
    if col.auto_increment {
        parts.push("autoIncrement:true".into());
    }
    if col.nullable == Some(false) && !col.primary_key {
        parts.push("not null".into());
    }
    if let Some(default) = &col.default {
        parts.push(format!("default:{}", tag_value(default)));
    }
    if let Some(comment) = &col.comment {
        parts.push(format!("comment:{}", tag_value(comment)));
    }
    parts.join(";")
}
