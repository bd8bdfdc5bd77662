#![cfg(feature = "serde")]

use std::collections::BTreeMap;

use serde::Deserialize;
use sqlitejs::prelude::*;

#[derive(Debug, Deserialize)]
struct TableConfig {
    context: ParseContext,
    columns: BTreeMap<String, DataType>,
}

const TABLE: &str = r#"
[context]
timezone = "+02:00"

[columns.id]
type = "INTEGER"
unsigned = true

[columns.price]
type = "DOUBLE"
length = 10
decimals = 2

[columns.sku]
type = "CHAR"
length = 12
binary = true

[columns.notes]
type = "TEXT"
length = 500

[columns.status]
type = "ENUM"
values = ["draft", "published"]

[columns.weight]
type = "FLOAT"
key = "FLOAT4"
length = 6
"#;

#[test]
fn test_columns_from_toml() {
    let config: TableConfig = toml::from_str(TABLE).unwrap();
    assert_eq!(config.context, ParseContext::new("+02:00"));

    let rendered: BTreeMap<String, String> = config
        .columns
        .into_iter()
        .map(|(name, mut data_type)| (name, data_type.to_sql()))
        .collect();

    assert_eq!(rendered["id"], "INTEGER UNSIGNED");
    assert_eq!(rendered["price"], "DOUBLE PRECISION(10,2)");
    assert_eq!(rendered["sku"], "CHAR BINARY(12)");
    assert_eq!(rendered["notes"], "TEXT");
    assert_eq!(rendered["status"], "TEXT");
    assert_eq!(rendered["weight"], "FLOAT4(6)");
}

#[test]
fn test_context_defaults_to_utc() {
    let context: ParseContext = serde_json::from_str("{}").unwrap();
    assert_eq!(context, ParseContext::utc());

    let date = sqlitejs::sqlite::parse_date("2020-01-01 00:00:00", &context).unwrap();
    assert_eq!(date.to_rfc3339(), "2020-01-01T00:00:00+00:00");
}

#[test]
fn test_descriptor_json_round_trip() {
    let original = DataType::new(
        AbstractType::Blob,
        TypeOptions::new().size(BlobSize::Long),
    );
    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, r#"{"type":"BLOB","size":"long","unsigned":false,"zerofill":false,"binary":false}"#);

    let mut decoded: DataType = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.to_sql(), "LONGBLOB");
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = serde_json::from_str::<DataType>(r#"{"type":"JSONB"}"#).unwrap_err();
    assert!(err.to_string().contains("JSONB"), "{err}");
}
