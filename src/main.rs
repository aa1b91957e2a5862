use anyhow::Result;
use shortener_portal::api::config::AppConfig;
use shortener_portal::api::start_server;
use shortener_portal::utils::logger::init_logger;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logger
    let _ = init_logger("logs");

    // Load and validate configuration before accepting any traffic
    let config = AppConfig::from_env()?;

    // Start server
    start_server(config).await?;

    Ok(())
}
