use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One capture event as read from the input JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }

    /// Identifier used in per-item progress lines. Falls back to the record's
    /// position in the input array when `capture_id` is absent or not a string.
    pub fn display_id(&self, index: usize) -> String {
        self.data
            .get("capture_id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index))
    }
}

/// A record after float→decimal conversion and null-field removal, ready for PutItem.
pub type ConvertedItem = HashMap<String, AttributeValue>;

/// Running tally of the ingestion loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub success: usize,
    pub errors: usize,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.success + self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_from(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => Record::new(map.into_iter().collect()),
            _ => panic!("test records must be JSON objects"),
        }
    }

    #[test]
    fn display_id_uses_capture_id_when_present() {
        let record = record_from(json!({"capture_id": "cap-001", "score": 0.5}));
        assert_eq!(record.display_id(7), "cap-001");
    }

    #[test]
    fn display_id_falls_back_to_index() {
        let record = record_from(json!({"score": 0.5}));
        assert_eq!(record.display_id(3), "#3");
    }

    #[test]
    fn display_id_ignores_non_string_capture_id() {
        let record = record_from(json!({"capture_id": 42}));
        assert_eq!(record.display_id(0), "#0");
    }

    #[test]
    fn report_total_is_sum_of_counters() {
        let report = IngestReport {
            success: 4,
            errors: 2,
        };
        assert_eq!(report.total(), 6);
    }
}
