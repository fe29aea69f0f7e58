use crate::core::convert::convert_record;
use crate::core::{CaptureStore, ConfigProvider, IngestReport, Pipeline, Record, Storage};
use crate::utils::error::{IngestError, Result};

pub struct CapturePipeline<S: Storage, T: CaptureStore, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) store: T,
    pub(crate) config: C,
}

impl<S: Storage, T: CaptureStore, C: ConfigProvider> CapturePipeline<S, T, C> {
    pub fn new(storage: S, store: T, config: C) -> Self {
        Self {
            storage,
            store,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, T: CaptureStore, C: ConfigProvider> Pipeline for CapturePipeline<S, T, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading capture records from: {}", self.config.data_file());
        let raw = self.storage.read_file(self.config.data_file()).await?;
        let json_data: serde_json::Value = serde_json::from_slice(&raw)?;

        // 輸入必須是 JSON 物件陣列
        let serde_json::Value::Array(items) = json_data else {
            return Err(IngestError::ProcessingError {
                message: format!(
                    "Expected a JSON array of records in '{}'",
                    self.config.data_file()
                ),
            });
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                serde_json::Value::Object(obj) => {
                    records.push(Record::new(obj.into_iter().collect()));
                }
                other => {
                    return Err(IngestError::ProcessingError {
                        message: format!("Expected a JSON object record, found: {}", other),
                    });
                }
            }
        }

        Ok(records)
    }

    async fn ingest(&self, records: Vec<Record>) -> Result<IngestReport> {
        println!(
            "\n🚀 Inserting {} items into table '{}'...\n",
            records.len(),
            self.config.table_name()
        );

        let mut report = IngestReport::default();

        // 逐筆寫入；單筆失敗只計數，不中斷
        for (index, record) in records.iter().enumerate() {
            let label = record.display_id(index);
            let item = convert_record(record);

            match self.store.put_capture(item).await {
                Ok(()) => {
                    println!("✅ Inserted: {}", label);
                    report.success += 1;
                }
                Err(e) => {
                    println!("❌ Error inserting {}: {}", label, e);
                    tracing::warn!("Put failed for {}: {}", label, e);
                    report.errors += 1;
                }
            }
        }

        Ok(report)
    }
}
