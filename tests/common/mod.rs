#![allow(dead_code)]

use std::collections::HashMap;
use wikibot::bot::Bot;
use wikibot::config::Limits;
use wikibot::document::Document;
use wikibot::io::{DocumentProvider, FetchError};

/// In-memory provider keyed by lowercase title.
#[derive(Default)]
pub struct StaticProvider {
    docs: HashMap<String, Document>,
    failures: HashMap<String, FetchError>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        doc: Document,
    ) -> Self {
        self.docs.insert(doc.title.to_lowercase(), doc);
        self
    }

    pub fn failing(
        mut self,
        title: &str,
        error: FetchError,
    ) -> Self {
        self.failures.insert(title.to_lowercase(), error);
        self
    }
}

impl DocumentProvider for StaticProvider {
    fn fetch(
        &self,
        title: &str,
    ) -> Result<Document, FetchError> {
        let key = title.trim().to_lowercase();
        if let Some(error) = self.failures.get(&key) {
            return Err(error.clone());
        }
        self.docs.get(&key).cloned().ok_or(FetchError::NotFound)
    }
}

pub const HISTORY_EXTRACT: &str = "Intro text==History==History text==See also==ignored";

pub fn mauna_kea() -> Document {
    Document::new(
        "Mauna Kea",
        "Mauna Kea is a dormant volcano on the island of Hawaii.\n\
         == Geology ==\n\
         The volcano is built from basalt lava flows.\n\
         === Glaciation ===\n\
         Ice covered the summit during the last glacial period.\n\
         == Observatories ==\n\
         The summit hosts thirteen telescopes.\n\
         == See also ==\n\
         Mauna Loa",
    )
}

pub fn springfield() -> Document {
    Document::new(
        "Springfield",
        "Springfield may refer to:\n\
         Springfield, Illinois, the state capital\n\
         Springfield, Massachusetts\n\
         == Other ==\n\
         Springfield (song), a song",
    )
    .disambiguation()
}

pub fn library() -> StaticProvider {
    StaticProvider::new()
        .with(mauna_kea())
        .with(springfield())
        .with(Document::new("History", HISTORY_EXTRACT))
        .with(Document::new("Springfield, Illinois", "Capital city.\n== Government ==\nCouncil."))
        .with(Document::new("Springfield, Massachusetts", "A city in Massachusetts."))
        .with(Document::new("Springfield (song)", "A song."))
        .failing("Offline", FetchError::Unreachable("connection refused".into()))
}

pub fn bot() -> Bot {
    Bot::new(library(), Limits::default())
}

pub fn bot_with_limits(limits: Limits) -> Bot {
    Bot::new(library(), limits)
}

/// Dispatch as the default test user, failing the test on silence.
pub fn say(
    bot: &Bot,
    msg: &str,
) -> String {
    bot.dispatch(msg, "tester")
        .unwrap_or_else(|| panic!("no response to {msg:?}"))
}
