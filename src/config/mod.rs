pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::validation::{
    validate_aws_region, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "us-east-2";
pub const DEFAULT_DATA_FILE: &str = "dynamodb-mock-data.json";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "capture-ingest")]
#[command(about = "Insert capture records from a JSON file into a DynamoDB table")]
pub struct CliConfig {
    /// DynamoDB table name
    #[arg(long)]
    pub table_name: String,

    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Path to the JSON data file
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_non_empty_string("table_name", &self.table_name)?;
        validate_aws_region("region", &self.region)?;
        validate_path("data_file", &self.data_file)?;
        Ok(())
    }
}
