use crate::domain::model::{ConvertedItem, Record};
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

/// Convert one record into the attribute map PutItem accepts.
///
/// DynamoDB numbers are decimal text, so floats are rendered from their
/// shortest round-trip string form: `0.1` is stored as `"0.1"`, never as the
/// binary64 expansion `0.10000000000000001`. Top-level `null` fields are
/// dropped; every other kind is encoded recursively.
pub fn convert_record(record: &Record) -> ConvertedItem {
    let mut item = ConvertedItem::new();

    for (key, value) in &record.data {
        // 跳過 null 欄位
        if value.is_null() {
            continue;
        }
        item.insert(key.clone(), convert_value(value));
    }

    item
}

fn convert_value(value: &Value) -> AttributeValue {
    match value {
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), convert_value(v)))
                .collect(),
        ),
        Value::Array(items) => AttributeValue::L(items.iter().map(convert_value).collect()),
        // Nested nulls stay as NULL attributes; only top-level nulls are dropped.
        Value::Null => AttributeValue::Null(true),
    }
}
