use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

mod app;
mod constants;
mod handlers;
mod localize;
mod rendering;
mod state;
mod subscriptions;
mod widgets;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    #[cfg(feature = "systemd")]
    match tracing_journald::layer() {
        Ok(journald) => {
            tracing_subscriber::registry()
                .with(journald)
                .with(tracing_subscriber::fmt::layer())
                .with(env_filter)
                .init();
        }
        // Not running under systemd
        Err(_) => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer())
                .with(env_filter)
                .init();
        }
    }

    #[cfg(not(feature = "systemd"))]
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    localize::localize();

    tracing::info!("cosmic-copilot {}", constants::VERSION);

    app::run()?;
    Ok(())
}
