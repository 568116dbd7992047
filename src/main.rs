use anyhow::Context;
use clap::Parser;
use finance_relay::api::{bind_listener, build_app};
use finance_relay::core::storage::{ConfigOverrides, ConfigStorage};
use finance_relay::logger::init_logger;
use finance_relay::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; command line and environment values take precedence
    #[arg(short, long, env = "RELAY_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigStorage::load(args.config.as_deref(), args.overrides)
        .context("Failed to load configuration")?;

    let _log_guard = init_logger(config.log_dir.as_deref())
        .context("Failed to initialize logging")?;
    tracing::debug!("Loaded configuration: {:?}", config);

    if config.request_timeout.is_none() {
        tracing::info!("No upstream request timeout configured");
    }

    let state = AppState::new(&config).context("Failed to init upstream client")?;
    let app = build_app(Arc::new(state));

    let listener = bind_listener(&config)
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.bind_address, config.port))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
