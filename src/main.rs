mod audio;
mod config;
mod error;
mod gateway;
mod routes;
mod state;
mod translate;
mod tts;
mod utils;

#[cfg(test)]
mod testing;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kannada_translator=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config();

    // Generated audio lives here and is served under /static
    std::fs::create_dir_all(&config.system_config.static_dir)?;
    info!("Audio directory: {}", config.system_config.static_dir);

    let app_state = AppState::new(config.clone())?;
    let app = routes::build_app(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("English to Kannada Translator");
    info!("Server running at: http://{}", addr);
    info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the first config file found, falling back to defaults
fn load_config() -> Config {
    for path in Config::search_paths() {
        match Config::load(&path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path);
                return config;
            }
            Err(e) if std::path::Path::new(&path).exists() => {
                warn!("Failed to load config from {}: {}", path, e);
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    warn!("No configuration file found, using defaults");
    Config::default()
}
