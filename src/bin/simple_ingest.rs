use capture_ingest::config::{DEFAULT_DATA_FILE, DEFAULT_REGION};
use capture_ingest::utils::logger;
use capture_ingest::{CapturePipeline, CliConfig, DynamoStore, IngestEngine, LocalStorage};
use clap::Parser;

/// Bare-bones variant: one positional argument, fixed region and data file,
/// no table probe. Writes start immediately.
#[derive(Parser)]
#[command(name = "simple-ingest")]
#[command(about = "Insert capture records into DynamoDB - requires table name as argument")]
struct Args {
    /// DynamoDB table name (e.g. ivvm-captures)
    table_name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(false);

    let store = DynamoStore::connect(DEFAULT_REGION, &args.table_name).await;

    let config = CliConfig {
        table_name: args.table_name,
        region: DEFAULT_REGION.to_string(),
        data_file: DEFAULT_DATA_FILE.to_string(),
        verbose: false,
    };

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CapturePipeline::new(storage, store, config);

    match IngestEngine::new(pipeline).run().await {
        Ok(report) => {
            println!(
                "\n📊 Done! Success: {}, Errors: {}",
                report.success, report.errors
            );
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
