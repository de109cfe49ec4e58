use tracing::info;

use anonboard::{logging, Config, Database, Result, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        logging::init_console_only(&config.logging.level);
    }

    info!("Anonboard - Anonymous Message Board");
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = run(&config).await {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<()> {
    let db = Database::open(&config.database.path).await?;
    let server = WebServer::new(&config.server, db)?;
    server.run().await
}
