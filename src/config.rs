use crate::cli::Cli;
use crate::constants::{DEFAULT_LIMIT, HARD_LIMIT, MAX_LIMIT, MIN_LIMIT};
use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Chunk-size tunables plus the outgoing message ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min: usize,
    pub max: usize,
    pub default: usize,
    /// Responses longer than this are cut short. `None` disables the check.
    pub hard_ceiling: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min: MIN_LIMIT,
            max: MAX_LIMIT,
            default: DEFAULT_LIMIT,
            hard_ceiling: Some(HARD_LIMIT),
        }
    }
}

/// Outcome of fitting a requested limit into `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamped {
    Within(usize),
    Max(usize),
    Min(usize),
}

impl Clamped {
    pub fn value(self) -> usize {
        match self {
            Clamped::Within(v) | Clamped::Max(v) | Clamped::Min(v) => v,
        }
    }
}

impl Limits {
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            bail!("minimum limit must be positive");
        }
        if self.min > self.max {
            bail!("minimum limit {} exceeds maximum {}", self.min, self.max);
        }
        if !(self.min..=self.max).contains(&self.default) {
            bail!(
                "default limit {} is outside [{}, {}]",
                self.default,
                self.min,
                self.max
            );
        }
        if let Some(ceiling) = self.hard_ceiling
            && ceiling < 4
        {
            bail!("hard limit {ceiling} is too small to hold a message");
        }
        Ok(())
    }

    pub fn clamp(
        &self,
        requested: i64,
    ) -> Clamped {
        match usize::try_from(requested) {
            Ok(v) if v > self.max => Clamped::Max(self.max),
            Ok(v) if v >= self.min => Clamped::Within(v),
            _ => Clamped::Min(self.min),
        }
    }
}

/// Where documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Library { root: PathBuf, pattern: String },
    Wikipedia {
        api_url: String,
        timeout_ms: u64,
        retries: usize,
    },
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub limits: Limits,
    pub user: String,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Self::from_args(Cli::parse())
    }

    pub fn from_args(cli: Cli) -> Result<Self> {
        let limits = Limits {
            min: cli.min_limit,
            max: cli.max_limit,
            default: cli.default_limit,
            hard_ceiling: (cli.hard_limit > 0).then_some(cli.hard_limit),
        };
        limits.validate()?;

        let source = match cli.library {
            Some(root) => Source::Library {
                root,
                pattern: cli.pattern,
            },
            None => Source::Wikipedia {
                api_url: cli.api_url,
                timeout_ms: cli.timeout_ms,
                retries: cli.retries,
            },
        };
        if cli.user.trim().is_empty() {
            bail!("user id must not be empty");
        }
        Ok(Config {
            source,
            limits,
            user: cli.user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_reports_which_bound_was_hit() {
        let limits = Limits::default();
        assert_eq!(limits.clamp(15_000), Clamped::Max(10_000));
        assert_eq!(limits.clamp(50), Clamped::Min(100));
        assert_eq!(limits.clamp(-7), Clamped::Min(100));
        assert_eq!(limits.clamp(3_000), Clamped::Within(3_000));
        assert_eq!(limits.clamp(100).value(), 100);
    }

    #[test]
    fn default_outside_bounds_is_rejected() {
        let cli = Cli::parse_from(["wikibot", "--default-limit", "50"]);
        let err = Config::from_args(cli).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn library_flag_selects_local_source() {
        let cli = Cli::parse_from(["wikibot", "--library", "docs", "--hard-limit", "0"]);
        let config = Config::from_args(cli).unwrap();
        assert_eq!(
            config.source,
            Source::Library {
                root: PathBuf::from("docs"),
                pattern: "*.txt".into()
            }
        );
        assert_eq!(config.limits.hard_ceiling, None);
        assert_eq!(config.user, "local");
    }
}
