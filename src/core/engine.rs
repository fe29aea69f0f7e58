use crate::core::{IngestReport, Pipeline};
use crate::utils::error::Result;

pub struct IngestEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> IngestEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the whole pipeline: load the records, then write them one by one.
    /// Per-item failures are tallied inside `ingest`; only pre-loop conditions
    /// (unreadable file, invalid JSON) surface as errors here.
    pub async fn run(&self) -> Result<IngestReport> {
        println!("Loading capture records...");
        let records = self.pipeline.extract().await?;
        println!("📦 Loaded {} items", records.len());

        let report = self.pipeline.ingest(records).await?;

        tracing::info!(
            "Ingest finished: {} succeeded, {} failed",
            report.success,
            report.errors
        );

        Ok(report)
    }
}
