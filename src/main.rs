use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wikibot::bot::Bot;
use wikibot::config::{Config, Source};
use wikibot::io::{Library, Wikipedia};
use wikibot::ui;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the conversation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;

    let bot = match &config.source {
        Source::Library { root, pattern } => {
            let library = Library::open(root, pattern)?;
            Bot::new(library, config.limits)
        }
        Source::Wikipedia {
            api_url,
            timeout_ms,
            retries,
        } => {
            tracing::info!(%api_url, "Using Wikipedia");
            Bot::new(Wikipedia::new(api_url, *timeout_ms, *retries)?, config.limits)
        }
    };

    ui::run_stdio(&bot, &config.user)
}
