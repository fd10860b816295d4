use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use langdetect_api::api::{self, request_log::RequestLog, AppContext};
use langdetect_api::models::config::Config;
use langdetect_api::services::language_detection_service::LanguageDetectionService;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    let log_level = LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Info);
    SimpleLogger::new().with_level(log_level).init()?;

    info!("Loaded {} configuration", config.environment);

    let ctx = Arc::new(AppContext {
        detection_service: LanguageDetectionService::with_default_classifier(),
        request_log: RequestLog::open(&config.log_file_path)?,
        started_at: Instant::now(),
        environment: config.environment.clone(),
    });

    api::serve(&config, ctx).await
}
