pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::dynamo::DynamoStore;
pub use config::{cli::LocalStorage, CliConfig};
pub use crate::core::{convert::convert_record, engine::IngestEngine, pipeline::CapturePipeline};
pub use utils::error::{IngestError, Result};
