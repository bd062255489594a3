// Centralized magic numbers & default values

/// Smallest allowed chunk limit, in characters, before postscripts.
pub const MIN_LIMIT: usize = 100;
/// Largest allowed chunk limit, in characters, before postscripts.
pub const MAX_LIMIT: usize = 10_000;
pub const DEFAULT_LIMIT: usize = 2_000;
/// Hard ceiling on any outgoing message; leaves room for postscripts above MAX_LIMIT.
pub const HARD_LIMIT: usize = 10_100;

pub const DEFAULT_USER: &str = "local";
pub const ENABLE_PHRASE: &str = "wikibot enable";

pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "wikibot/0.1 (text pager)";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_RETRIES: usize = 1;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 350;

pub const DEFAULT_LIBRARY_PATTERN: &str = "*.txt";
