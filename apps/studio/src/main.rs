//! Pupstyle Studio entry point.

mod app;
mod config;
mod message;
mod platform;
mod subscriptions;
mod theme;
mod views;

use tracing_subscriber::EnvFilter;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting Pupstyle Studio"
    );

    let studio_config = match config::StudioConfig::load() {
        Ok(c) => {
            tracing::info!(api_base_url = %c.api_base_url, "configuration loaded");
            c
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            config::StudioConfig::default()
                .with_api_override(std::env::var(config::API_URL_ENV).ok())
        }
    };

    let client = match pupstyle_generation::Client::new(&studio_config.api_base_url) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };
    if studio_config.api_base_url.is_empty() {
        tracing::warn!("api_base_url is empty, generation requests will fail");
    }

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(960.0, 820.0));

    let flags = app::Flags {
        config: studio_config,
        client,
    };
    cosmic::app::run::<app::Studio>(settings, flags)
}
