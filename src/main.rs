use capture_ingest::domain::ports::CaptureStore;
use capture_ingest::utils::{logger, validation::Validate};
use capture_ingest::{CapturePipeline, CliConfig, DynamoStore, IngestEngine, LocalStorage};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting capture-ingest CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // 建立 DynamoDB 客戶端並確認資料表存在
    let store = DynamoStore::connect(&config.region, &config.table_name).await;

    if let Err(e) = store.table_exists().await {
        eprintln!("❌ Error accessing table: {}", e);
        eprintln!("💡 Make sure the table exists and you have proper permissions.");
        std::process::exit(1);
    }
    println!("✅ Table '{}' found", config.table_name);

    // 建立存儲和管道
    let data_file = config.data_file.clone();
    let storage = LocalStorage::new(".".to_string());
    let pipeline = CapturePipeline::new(storage, store, config);

    let engine = IngestEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("📁 Data file processed: {}", data_file);
            println!("\n📊 Summary:");
            println!("   ✅ Successfully inserted: {}", report.success);
            println!("   ❌ Errors: {}", report.errors);
            println!("   📝 Total: {}", report.total());
        }
        Err(e) => {
            tracing::error!("❌ Ingest process failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
