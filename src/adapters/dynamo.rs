use crate::domain::model::ConvertedItem;
use crate::domain::ports::CaptureStore;
use crate::utils::error::{IngestError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client as DynamodbClient;

/// DynamoDB-backed capture store, bound to a single table.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamodbClient,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: DynamodbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Resolve AWS credentials from the environment and build a client pinned
    /// to the configured region.
    pub async fn connect(region: &str, table_name: &str) -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let config = aws_sdk_dynamodb::config::Builder::from(&config)
            .region(Region::new(region.to_string()))
            .build();
        let client = DynamodbClient::from_conf(config);

        Self::new(client, table_name.to_string())
    }
}

#[async_trait]
impl CaptureStore for DynamoStore {
    async fn table_exists(&self) -> Result<()> {
        tracing::debug!("Probing table: {}", self.table_name);
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| IngestError::StoreError {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn put_capture(&self, item: ConvertedItem) -> Result<()> {
        let mut request = self.client.put_item().table_name(&self.table_name);
        for (key, value) in item {
            request = request.item(key, value);
        }

        request.send().await.map_err(|e| IngestError::StoreError {
            message: DisplayErrorContext(&e).to_string(),
        })?;

        Ok(())
    }
}
