use crate::domain::model::{ConvertedItem, IngestReport, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn table_name(&self) -> &str;
    fn region(&self) -> &str;
    fn data_file(&self) -> &str;
}

/// The key-value table the captures are written to. `put_capture` is an
/// unconditional upsert: an existing item under the same key is replaced.
#[async_trait]
pub trait CaptureStore: Send + Sync {
    async fn table_exists(&self) -> Result<()>;
    async fn put_capture(&self, item: ConvertedItem) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn ingest(&self, records: Vec<Record>) -> Result<IngestReport>;
}
