//! Web server for Anonboard.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::board::BoardStore;
use crate::config::ServerConfig;
use crate::{BoardError, Database, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server over an open database.
    pub fn new(config: &ServerConfig, db: Database) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| BoardError::Config(format!("invalid server address: {e}")))?;

        let app_state = Arc::new(AppState::new(BoardStore::new(db)));

        Ok(Self {
            addr,
            app_state,
            cors_origins: config.cors_origins.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> Result<()> {
        let router = create_router(self.app_state, &self.cors_origins);
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("Web API listening on {}", self.addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_parses_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec![],
        };
        let db = Database::open_in_memory().await.unwrap();
        let server = WebServer::new(&config, db).unwrap();
        assert_eq!(server.addr().port(), 0);
    }

    #[tokio::test]
    async fn test_new_rejects_bad_address() {
        let config = ServerConfig {
            host: "not an address".to_string(),
            port: 0,
            cors_origins: vec![],
        };
        let db = Database::open_in_memory().await.unwrap();
        assert!(WebServer::new(&config, db).is_err());
    }
}
