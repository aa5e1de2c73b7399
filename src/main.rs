use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod binding;
mod cli;
mod config;
mod editor;
mod error;
mod navigation;
mod tui;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "listpad=info");
    }

    let config = Config::from_env()?;
    config.validate()?;

    // The TUI owns the terminal, so logs go to a file only
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(config.log_dir_str(), &config.log_file);
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();

    info!(seed_items = cli.items.len(), "Launching TUI interface");

    match tui::run_tui(cli.items).await {
        Ok(_) => info!("TUI exited successfully"),
        Err(e) => {
            error!("TUI failed: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
