use crate::commands::{Command, parse_number, split_command};
use crate::config::{Clamped, Limits};
use crate::constants::ENABLE_PHRASE;
use crate::document::{Style, stylize};
use crate::io::{DocumentProvider, FetchError};
use crate::session::{Session, SessionStore, Slot};
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};

const GENERIC_FAILURE: &str = "Something went wrong on my end :'^( Please try that again.";
const NOT_FOUND: &str = "Page does not exist! :-(";
const UNREACHABLE: &str = "The article source won't talk to me :'^(";
const MALFORMED: &str = "I can't even tell what the article source sent me =^(";

fn bold(text: &str) -> String {
    stylize(text, Style::BoldSans)
}

fn bold_italic(text: &str) -> String {
    stylize(text, Style::BoldItalicSans)
}

/// Cut `text` to at most `ceiling` characters, marking the cut with `...`.
pub fn clamp_to_ceiling(
    text: String,
    ceiling: Option<usize>,
) -> String {
    match ceiling {
        Some(max) if text.chars().count() > max => {
            let mut cut: String = text.chars().take(max.saturating_sub(3)).collect();
            cut.push_str("...");
            cut
        }
        _ => text,
    }
}

/// Command dispatcher: maps one line of user input to one response.
pub struct Bot {
    store: SessionStore,
    provider: Box<dyn DocumentProvider>,
    limits: Limits,
    enabled: AtomicBool,
}

impl Bot {
    pub fn new(
        provider: impl DocumentProvider + 'static,
        limits: Limits,
    ) -> Self {
        Bot {
            store: SessionStore::new(),
            provider: Box::new(provider),
            limits,
            enabled: AtomicBool::new(true),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Respond to one line from `user`. `None` means stay silent, which only
    /// happens while the bot is disabled.
    pub fn dispatch(
        &self,
        raw: &str,
        user: &str,
    ) -> Option<String> {
        let msg = raw.trim();
        if msg.eq_ignore_ascii_case(ENABLE_PHRASE) {
            return Some(self.enable());
        }
        if !self.is_enabled() {
            return None;
        }

        let _span = tracing::debug_span!("dispatch", user).entered();
        let response = match self.store.with_user(user, |slot| self.respond(msg, slot)) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::error!("command {msg:?} failed: {e:#}");
                GENERIC_FAILURE.to_string()
            }
        };
        Some(clamp_to_ceiling(response, self.limits.hard_ceiling))
    }

    fn respond(
        &self,
        msg: &str,
        slot: &mut Slot,
    ) -> Result<String> {
        // Bare numbers pick a link on listings and a section everywhere else
        if let Some(num) = parse_number(msg) {
            let listing = slot.as_ref().is_some_and(|s| s.disambig && !s.links.is_empty());
            return if listing {
                self.open_link(num, slot)
            } else {
                self.section(msg, slot)
            };
        }

        let (token, arg) = split_command(msg);
        let Some(cmd) = Command::lookup(&token.to_lowercase()) else {
            return Ok(format!(
                "Command not found! Type {} for a list of commands.",
                bold("help")
            ));
        };
        tracing::debug!(command = cmd.name(), "running command");
        self.run(cmd, arg, slot)
    }

    fn run(
        &self,
        cmd: Command,
        arg: &str,
        slot: &mut Slot,
    ) -> Result<String> {
        match cmd {
            Command::Search => Ok(self.search(arg, slot)),
            Command::Toc => Ok(self.toc(slot)),
            Command::Next => self.with_session(slot, Session::next),
            Command::Previous => self.with_session(slot, Session::previous),
            Command::Section => self.section(arg, slot),
            Command::Part => self.with_session(slot, |s| s.goto_part(arg)),
            Command::All => self.with_session(slot, |s| {
                s.load_all();
                s.render()
            }),
            Command::Limit => Ok(self.limit(arg, slot)),
            Command::Clear => Ok(Self::clear(slot)),
            Command::Disable => Ok(self.disable()),
            Command::Help => Ok(self.help(arg)),
            Command::Ping => Ok("pong!".to_string()),
        }
    }

    fn with_session(
        &self,
        slot: &mut Slot,
        f: impl FnOnce(&mut Session) -> Result<String>,
    ) -> Result<String> {
        match slot.as_mut() {
            Some(session) => f(session),
            None => Ok(self.no_article()),
        }
    }

    fn no_article(&self) -> String {
        let or_alias = Command::Search
            .alias()
            .map(|alias| format!(" or {}", bold_italic(alias)))
            .unwrap_or_default();
        format!(
            "No article loaded! Use {}{or_alias} to find an article first.",
            bold_italic("search")
        )
    }

    fn search(
        &self,
        title: &str,
        slot: &mut Slot,
    ) -> String {
        let title = title.trim();
        if title.is_empty() {
            return self.help("search");
        }

        let doc = match self.provider.fetch(title) {
            Ok(doc) => doc,
            Err(FetchError::NotFound) => return NOT_FOUND.to_string(),
            Err(e @ FetchError::Unreachable(_)) => {
                tracing::warn!("search for {title:?}: {e}");
                return UNREACHABLE.to_string();
            }
            Err(e @ FetchError::Malformed(_)) => {
                tracing::warn!("search for {title:?}: {e}");
                return MALFORMED.to_string();
            }
        };

        let session = Session::from_document(&doc, self.limits.default);
        tracing::info!(
            title = %doc.title,
            sections = session.section_count(),
            disambiguation = session.disambig,
            "Loaded article"
        );

        let mut out = session.title.clone();
        if doc.was_redirected {
            out.push_str(&format!("\n(Redirected from {title})\n\n"));
        } else {
            out.push('\n');
        }
        out.push_str(&session.short_toc());
        if session.disambig && !session.links.is_empty() {
            out.push_str(&format!(
                "\n\n{}",
                stylize(
                    &format!(
                        "This page lists {} other articles. Send a link number to open one.",
                        session.links.len()
                    ),
                    Style::ItalicSans
                )
            ));
        }
        *slot = Some(session);
        out
    }

    /// Open link `num` (1-based, clamped) of the loaded listing as a new search.
    fn open_link(
        &self,
        num: i64,
        slot: &mut Slot,
    ) -> Result<String> {
        let Some(session) = slot.as_ref() else {
            return Ok(self.no_article());
        };
        let total = session.links.len();
        let mut index = usize::try_from(num.max(1)).unwrap_or(usize::MAX);
        let mut message = String::new();
        if index > total {
            index = total;
            message = format!(
                "{}\n\n",
                stylize(
                    &format!("Link number too large, opening link {index} instead"),
                    Style::ItalicSans
                )
            );
        }
        let title = session.links[index - 1].clone();
        Ok(message + &self.search(&title, slot))
    }

    fn toc(
        &self,
        slot: &mut Slot,
    ) -> String {
        match slot.as_ref() {
            Some(session) => format!("{}\n{}", session.title, session.highlighted_toc()),
            None => self.no_article(),
        }
    }

    fn section(
        &self,
        arg: &str,
        slot: &mut Slot,
    ) -> Result<String> {
        self.with_session(slot, |s| s.goto_section(arg))
    }

    fn limit(
        &self,
        arg: &str,
        slot: &mut Slot,
    ) -> String {
        let Some(session) = slot.as_mut() else {
            return self.no_article();
        };
        let arg = arg.trim();
        if arg.is_empty() {
            return format!(
                "Current character limit is {}. Use {}{} to modify.",
                session.limit,
                bold("limit "),
                bold_italic("value")
            );
        }

        let requested = match parse_number(arg) {
            Some(num) => num,
            None if "default".starts_with(&arg.to_lowercase()) => {
                i64::try_from(self.limits.default).unwrap_or(i64::MAX)
            }
            None => {
                return format!(
                    "Please enter an actual number, like this:\n{}",
                    Command::Limit.examples().unwrap_or_default()
                );
            }
        };

        let clamped = self.limits.clamp(requested);
        let message = match clamped {
            Clamped::Max(v) => format!("Maximum upper limit is {v}, updating to this value"),
            Clamped::Min(v) => format!("Minimum lower limit is {v}, updating to this value"),
            Clamped::Within(v) => format!("New character limit set to {v}"),
        };
        session.limit = clamped.value();
        message + ". Change will take effect when a new section or article is loaded"
    }

    fn clear(slot: &mut Slot) -> String {
        match slot.take() {
            Some(_) => "Article cache cleared ;^)".to_string(),
            None => "No article loaded!".to_string(),
        }
    }

    fn disable(&self) -> String {
        self.enabled.store(false, Ordering::SeqCst);
        tracing::info!("Disabled");
        format!("Wikibot disabled. Type {} to re-enable.", bold(ENABLE_PHRASE))
    }

    fn enable(&self) -> String {
        self.enabled.store(true, Ordering::SeqCst);
        tracing::info!("Enabled");
        "Wikibot now enabled".to_string()
    }

    fn help(
        &self,
        arg: &str,
    ) -> String {
        let arg = arg.trim().to_lowercase();
        let wanted = if arg.is_empty() {
            None
        } else {
            Command::lookup(&arg)
        };

        if let Some(cmd) = wanted {
            let mut response = cmd
                .usage(&self.limits)
                .unwrap_or_else(|| "This command takes no arguments".to_string());
            if let Some(examples) = cmd.examples() {
                response.push_str("\n\nExample(s):\n");
                response.push_str(examples);
            }
            return response;
        }

        let mut response = if arg.is_empty() {
            format!(
                "Type {} {} to see specific command usage.",
                bold("help"),
                bold_italic("command")
            )
        } else {
            "Command not found!".to_string()
        };
        response.push_str("\n\n");
        response.push_str(&bold("COMMAND LIST"));
        for cmd in Command::ALL {
            response.push('\n');
            response.push_str(&bold(cmd.name()));
            if let Some(alias) = cmd.alias() {
                let alias = if alias.is_empty() {
                    "\u{201C}\u{201D}".to_string()
                } else {
                    bold(alias)
                };
                response.push_str(&format!(" (or {alias})"));
            }
            response.push_str(" - ");
            response.push_str(cmd.description());
        }
        response
    }
}
