//! 2048 terminal client binary.
//!
//! ```bash
//! # Reproducible run with a shorter level-up pause
//! TWENTY48_SEED=42 TWENTY48_LEVEL_UP_DELAY_MS=500 cargo run -p twenty48-client
//! ```

use anyhow::Result;
use twenty48_client::{App, ClientConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    let _log_guard = logging::setup_logging(&config.resolved_log_dir())?;
    tracing::info!(seed = ?config.seed, "Starting 2048 client");

    App::from_config(&config).run().await
}
