//! Campus web server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p campus-web
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use campus_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Config comes first: APP_ENV picks the log format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.web.address(),
        "Starting campus web server"
    );

    if let Err(e) = campus_web::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
