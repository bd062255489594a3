use crate::constants::{
    DEFAULT_API_URL, DEFAULT_LIBRARY_PATTERN, DEFAULT_LIMIT, DEFAULT_RETRIES, DEFAULT_TIMEOUT_MS,
    DEFAULT_USER, HARD_LIMIT, MAX_LIMIT, MIN_LIMIT,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wikibot")]
#[command(
    about = "Read long articles one message-sized part at a time: search, page with next/previous, \
                   jump by section or part."
)]
pub struct Cli {
    /// Serve documents from this directory instead of Wikipedia.
    #[arg(short = 'l', long = "library")]
    pub library: Option<PathBuf>,

    /// Glob selecting document files inside --library.
    #[arg(short = 'p', long = "pattern", default_value = DEFAULT_LIBRARY_PATTERN)]
    pub pattern: String,

    /// MediaWiki API endpoint used when no --library is given.
    #[arg(long = "api-url", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// HTTP timeout for document fetches, in milliseconds.
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Extra attempts after a failed fetch.
    #[arg(long = "retries", default_value_t = DEFAULT_RETRIES)]
    pub retries: usize,

    /// Smallest chunk limit a user may set.
    #[arg(long = "min-limit", default_value_t = MIN_LIMIT)]
    pub min_limit: usize,

    /// Largest chunk limit a user may set.
    #[arg(long = "max-limit", default_value_t = MAX_LIMIT)]
    pub max_limit: usize,

    /// Chunk limit for newly loaded articles.
    #[arg(short = 'c', long = "default-limit", default_value_t = DEFAULT_LIMIT)]
    pub default_limit: usize,

    /// Truncate any response longer than this many characters. 0 disables.
    #[arg(long = "hard-limit", default_value_t = HARD_LIMIT)]
    pub hard_limit: usize,

    /// User id for this interactive session.
    #[arg(short = 'u', long = "user", default_value = DEFAULT_USER)]
    pub user: String,
}
