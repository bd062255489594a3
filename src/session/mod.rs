pub mod navigation;

use crate::document::disambig::extract_links;
use crate::document::segment::segment;
use crate::document::{Document, Style, stylize};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

pub use navigation::SessionFault;

/// Which text the loaded chunks were cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// `sections[section_num]` alone.
    Section,
    /// Every section from `first` on, flattened with section marks.
    All { first: usize },
}

/// The chunk window currently being paged through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub chunks: Vec<String>,
    pub chunk_num: usize,
    pub view: View,
}

impl Cursor {
    pub fn last_index(&self) -> usize {
        self.chunks.len().saturating_sub(1)
    }
}

/// One user's navigation over one loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Styled display title.
    pub title: String,
    pub toc: Vec<String>,
    pub sections: Vec<String>,
    pub section_num: usize,
    /// `None` until the first navigation command.
    pub cursor: Option<Cursor>,
    pub limit: usize,
    pub disambig: bool,
    /// Page names of a disambiguation listing; `links[i]` is label `i + 1`.
    pub links: Vec<String>,
}

impl Session {
    /// Segment a fetched document into a fresh session positioned at the
    /// introduction with no chunks loaded.
    pub fn from_document(
        doc: &Document,
        limit: usize,
    ) -> Self {
        let (text, links) = if doc.is_disambiguation {
            extract_links(&doc.extract, &doc.title)
        } else {
            (doc.extract.clone(), Vec::new())
        };
        let (toc, sections) = segment(&text);
        Session {
            title: stylize(&doc.title, Style::BoldSerif),
            toc,
            sections,
            section_num: 0,
            cursor: None,
            limit,
            disambig: doc.is_disambiguation,
            links,
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Numbered table of contents.
    pub fn short_toc(&self) -> String {
        self.toc
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{i}. {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Numbered table of contents with the current section in bold.
    pub fn highlighted_toc(&self) -> String {
        self.toc
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let line = format!("{i}. {name}");
                if i == self.section_num {
                    stylize(&line, Style::BoldSans)
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What a command handler sees for its user: absent until a document loads.
pub type Slot = Option<Session>;

/// Keyed session storage with one lock per user.
///
/// Commands for the same user are serialized on that user's slot; commands
/// for different users only contend for the short map lookup.
#[derive(Default)]
pub struct SessionStore {
    slots: Mutex<HashMap<String, Arc<Mutex<Slot>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(
        &self,
        user: &str,
    ) -> Arc<Mutex<Slot>> {
        self.slots.lock().entry(user.to_string()).or_default().clone()
    }

    /// Run `f` with exclusive access to `user`'s slot. A slot left empty is
    /// dropped from the map afterwards.
    pub fn with_user<R>(
        &self,
        user: &str,
        f: impl FnOnce(&mut Slot) -> R,
    ) -> R {
        let slot = self.slot(user);
        let result = {
            let mut guard = slot.lock();
            f(&mut guard)
        };
        self.prune(user, slot);
        result
    }

    fn prune(
        &self,
        user: &str,
        slot: Arc<Mutex<Slot>>,
    ) {
        let mut slots = self.slots.lock();
        // Only the map and `slot` hold it, so no other caller is waiting on it
        if Arc::strong_count(&slot) == 2 && slot.lock().is_none() {
            slots.remove(user);
        }
    }

    pub fn contains(
        &self,
        user: &str,
    ) -> bool {
        self.snapshot(user).is_some()
    }

    /// Copy of `user`'s session, if one is loaded.
    pub fn snapshot(
        &self,
        user: &str,
    ) -> Option<Session> {
        let slot = self.slots.lock().get(user).cloned()?;
        let guard = slot.lock();
        guard.clone()
    }

    /// Number of users with a loaded document.
    pub fn active_sessions(&self) -> usize {
        let slots: Vec<_> = self.slots.lock().values().cloned().collect();
        slots.iter().filter(|s| s.lock().is_some()).count()
    }
}
