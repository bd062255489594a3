// Local directory of plain-text documents, one file per title.
use crate::document::Document;
use crate::io::provider::{DocumentProvider, FetchError};
use anyhow::{Context, Result};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use globset::Glob;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

const DISAMBIGUATION_SUFFIX: &str = "(disambiguation)";
const DISAMBIGUATION_LEAD: &str = "may refer to:";

#[derive(Debug, Clone)]
struct Entry {
    title: String,
    path: PathBuf,
}

/// Documents indexed from a directory tree. The file stem is the title.
#[derive(Debug)]
pub struct Library {
    entries: Vec<Entry>,
}

fn normalize(title: &str) -> String {
    title.trim().replace('_', " ").to_lowercase()
}

impl Library {
    /// Index every file under `root` whose name matches `pattern`,
    /// honouring .gitignore and hidden-file filters.
    pub fn open(
        root: &Path,
        pattern: &str,
    ) -> Result<Self> {
        let root = dunce::canonicalize(root)
            .with_context(|| format!("library directory {} is not accessible", root.display()))?;
        let matcher = Glob::new(pattern)
            .with_context(|| format!("invalid document pattern: {pattern}"))?
            .compile_matcher();

        let mut entries = Vec::new();
        for entry_result in WalkBuilder::new(&root).standard_filters(true).build() {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Could not process entry in {:?}: {:?}", root, e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            let matches = path.file_name().is_some_and(|name| matcher.is_match(name));
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };
            if matches {
                entries.push(Entry {
                    title: stem,
                    path: path.to_path_buf(),
                });
            }
        }
        entries.sort_by(|a, b| a.title.cmp(&b.title));
        tracing::info!(root = %root.display(), documents = entries.len(), "Indexed library");
        let library = Library { entries };
        tracing::debug!(titles = ?library.titles().collect::<Vec<_>>(), "Library titles");
        Ok(library)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    /// Exact (case-insensitive) title match first, then the best fuzzy
    /// match, which counts as a redirect.
    fn resolve(
        &self,
        title: &str,
    ) -> Option<(&Entry, bool)> {
        let wanted = normalize(title);
        if let Some(entry) = self.entries.iter().find(|e| normalize(&e.title) == wanted) {
            return Some((entry, false));
        }
        let matcher = SkimMatcherV2::default();
        self.entries
            .iter()
            .filter_map(|e| matcher.fuzzy_match(&e.title, title.trim()).map(|score| (score, e)))
            .max_by_key(|(score, _)| *score)
            .map(|(_, e)| (e, true))
    }
}

fn looks_like_disambiguation(
    title: &str,
    extract: &str,
) -> bool {
    title.to_lowercase().ends_with(DISAMBIGUATION_SUFFIX)
        || extract
            .lines()
            .find(|l| !l.trim().is_empty())
            .is_some_and(|l| l.trim_end().ends_with(DISAMBIGUATION_LEAD))
}

impl DocumentProvider for Library {
    fn fetch(
        &self,
        title: &str,
    ) -> Result<Document, FetchError> {
        let (entry, redirected) = self.resolve(title).ok_or(FetchError::NotFound)?;
        let bytes = fs::read(&entry.path)
            .map_err(|e| FetchError::Unreachable(format!("{}: {e}", entry.path.display())))?;
        let extract = String::from_utf8(bytes).map_err(|_| {
            FetchError::Malformed(format!("{} is not valid UTF-8", entry.path.display()))
        })?;

        let mut doc = Document::new(entry.title.clone(), extract);
        if looks_like_disambiguation(&doc.title, &doc.extract) {
            doc = doc.disambiguation();
        }
        if redirected {
            doc = doc.redirected();
        }
        Ok(doc)
    }
}
