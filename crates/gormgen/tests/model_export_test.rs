use std::fs;

use gormgen::{
    ColumnDef, ExportError, Generator, GoModelEngine, JsonTag, JsonTagOverrides, ModelOpt,
    QueryInterface, StaticSchema, TableDef, with_model_pkg_path, with_out_path,
    with_replace_json_tag_name,
};
use tempfile::tempdir;

fn schema() -> StaticSchema {
    StaticSchema::new([
        TableDef::new(
            "users",
            vec![
                ColumnDef::new("id", "bigint", false)
                    .with_column_type("bigint unsigned")
                    .with_primary_key(true),
                ColumnDef::new("email", "varchar", false).with_column_type("varchar(191)"),
                ColumnDef::new("password", "char", false).with_column_type("char(60)"),
                ColumnDef::new("is_verified", "tinyint", true).with_column_type("tinyint(1)"),
                ColumnDef::new("balance", "decimal", true).with_column_type("decimal(12,2)"),
                ColumnDef::new("created_at", "datetime", false),
                ColumnDef::new("updated_at", "datetime", true),
                ColumnDef::new("deleted_at", "datetime", true),
            ],
        ),
        TableDef::new(
            "order_items",
            vec![
                ColumnDef::new("id", "int", false).with_primary_key(true),
                ColumnDef::new("quantity", "smallint", false),
                ColumnDef::new("note", "text", true),
                ColumnDef::new("deleted_at", "bigint", false),
            ],
        ),
    ])
}

#[test]
fn test_generate_models_end_to_end() {
    let dir = tempdir().unwrap();
    let overrides: JsonTagOverrides = [
        ("password".to_string(), Some(JsonTag::new().replace("-"))),
        ("updated_at".to_string(), None),
    ]
    .into_iter()
    .collect();

    let mut generator = Generator::new(
        GoModelEngine::new(schema()),
        [
            with_out_path(dir.path().join("dal").join("query")),
            with_model_pkg_path("entity"),
            with_replace_json_tag_name(Some(overrides)),
        ],
    );
    let opts = [ModelOpt::field_rename("email", "EmailAddress")];
    generator.set_generate_model("users", opts);
    generator.set_apply_basic(["order_items"]);
    generator.execute().unwrap();

    let entity_dir = dir.path().join("dal").join("entity");
    assert_eq!(generator.engine().written_files().len(), 2);

    let users = fs::read_to_string(entity_dir.join("users.gen.go")).unwrap();
    assert!(users.contains("package entity\n"));
    let imports = "\t\"time\"\n\n\t\"github.com/shopspring/decimal\"\n\t\"gorm.io/gorm\"\n";
    assert!(users.contains(imports));
    assert!(users.contains("const TableNameUser = \"users\""));
    let id_tag = "gorm:\"column:id;type:bigint unsigned;primaryKey;autoIncrement:true\"";
    assert!(users.contains(&format!("{} json:\"id\"`", id_tag)));
    assert!(users.contains("EmailAddress string"));
    assert!(users.contains("json:\"-\""));
    assert!(users.contains("IsVerified   bool"));
    assert!(users.contains("Balance      decimal.Decimal"));
    assert!(users.contains("json:\"created_at,omitzero\" time_format:\"sql_datetime\"`"));
    assert!(users.contains("UpdatedAt    *time.Time"));
    assert!(users.contains("json:\"updated_at\"`"));
    assert!(users.contains("DeletedAt    gorm.DeletedAt"));

    let items = fs::read_to_string(entity_dir.join("order_items.gen.go")).unwrap();
    assert!(items.contains("type OrderItem struct {"));
    assert!(items.contains("Quantity  int16"));
    assert!(items.contains("Note      *string"));
    assert!(items.contains("DeletedAt soft_delete.DeletedAt"));
    assert!(items.contains("\"gorm.io/plugin/soft_delete\""));
    assert!(!items.contains("\"time\""));
}

#[test]
fn test_interfaces_are_rejected_by_model_engine() {
    let dir = tempdir().unwrap();
    let mut generator = Generator::new(
        GoModelEngine::new(schema()),
        [with_out_path(dir.path().join("query"))],
    );
    generator.set_generate_model("users", []);
    generator.set_apply_interface(QueryInterface::new("Querier", ""), ["users"]);

    let err = generator.execute().unwrap_err();
    assert!(matches!(err, ExportError::Unsupported(_)));
    assert!(generator.engine().written_files().is_empty());
}
