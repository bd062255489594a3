// Position changes over (section_num, chunk_num) and chunk rendering.
use super::{Cursor, Session, View};
use crate::commands::parse_number;
use crate::document::chunker::{chunk, count_section_marks, join_sections};
use crate::document::{Style, stylize};
use anyhow::Result;

const END_OF_ARTICLE: &str = "\n\n[END OF ARTICLE]";

/// Broken navigation invariants. These are programming errors, not user
/// mistakes, and are reported separately from normal responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFault {
    NoChunks,
    ChunkOutOfRange { chunk_num: usize, len: usize },
}

impl std::fmt::Display for SessionFault {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SessionFault::NoChunks => write!(f, "no chunks loaded for the current section"),
            SessionFault::ChunkOutOfRange { chunk_num, len } => {
                write!(f, "chunk {chunk_num} out of range for {len} chunks")
            }
        }
    }
}

impl std::error::Error for SessionFault {}

fn notice(text: &str) -> String {
    format!("{}\n\n", stylize(text, Style::ItalicSans))
}

impl Session {
    /// Cut `sections[number]` into chunks and move to its first chunk.
    pub fn load_section(
        &mut self,
        number: usize,
    ) {
        let number = number.min(self.section_count().saturating_sub(1));
        self.cursor = Some(Cursor {
            chunks: chunk(&self.sections[number], self.limit),
            chunk_num: 0,
            view: View::Section,
        });
        self.section_num = number;
    }

    /// Flatten the document into one chunk stream. Disambiguation listings
    /// skip their introduction.
    pub fn load_all(&mut self) {
        let first = if self.disambig && self.section_count() > 1 {
            1
        } else {
            0
        };
        let text = join_sections(&self.sections[first..]);
        self.cursor = Some(Cursor {
            chunks: chunk(&text, self.limit),
            chunk_num: 0,
            view: View::All { first },
        });
        self.section_num = first;
    }

    /// Text of the current chunk, plus the end marker on the last chunk of
    /// the last section.
    pub fn render(&mut self) -> Result<String> {
        let last_section = self.section_count().saturating_sub(1);
        let cursor = self.cursor.as_ref().ok_or(SessionFault::NoChunks)?;
        let mut text = cursor
            .chunks
            .get(cursor.chunk_num)
            .ok_or(SessionFault::ChunkOutOfRange {
                chunk_num: cursor.chunk_num,
                len: cursor.chunks.len(),
            })?
            .clone();

        if let View::All { first } = cursor.view {
            let crossed: usize = cursor.chunks[..=cursor.chunk_num]
                .iter()
                .map(|c| count_section_marks(c))
                .sum();
            self.section_num = (first + crossed).min(last_section);
        }

        if self.section_num >= last_section && cursor.chunk_num >= cursor.last_index() {
            text.push_str(&stylize(END_OF_ARTICLE, Style::BoldSans));
        }
        Ok(text)
    }

    pub fn next(&mut self) -> Result<String> {
        let total = self.section_count();
        let at_end = self
            .cursor
            .as_ref()
            .map(|c| c.chunk_num >= c.last_index());
        match at_end {
            None => self.load_section(0),
            Some(true) => self.load_section((self.section_num + 1) % total),
            Some(false) => {
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.chunk_num += 1;
                }
            }
        }
        self.render()
    }

    pub fn previous(&mut self) -> Result<String> {
        let total = self.section_count();
        match self.cursor.as_mut() {
            Some(cursor) if cursor.chunk_num > 0 => cursor.chunk_num -= 1,
            _ => {
                self.load_section((self.section_num + total - 1) % total);
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.chunk_num = cursor.last_index();
                }
            }
        }
        self.render()
    }

    /// Jump to a section by number (clamped), name prefix, `?` or `all`.
    pub fn goto_section(
        &mut self,
        arg: &str,
    ) -> Result<String> {
        let arg = arg.trim();
        if arg == "?" {
            return Ok(format!(
                "Currently in Section {}\n\n{}",
                self.section_num,
                self.highlighted_toc()
            ));
        }
        if arg.eq_ignore_ascii_case("all") {
            self.load_all();
            return self.render();
        }

        if let Some(num) = parse_number(arg) {
            let last = self.section_count() - 1;
            let mut num = usize::try_from(num.max(0)).unwrap_or(usize::MAX);
            let mut message = String::new();
            if num > last {
                num = last;
                message = notice(&format!(
                    "Section number too large, jumping to Section {num} instead"
                ));
            }
            self.load_section(num);
            return Ok(message + &self.render()?);
        }

        let wanted = arg.to_lowercase();
        match self
            .toc
            .iter()
            .position(|name| name.to_lowercase().starts_with(&wanted))
        {
            Some(i) => {
                self.load_section(i);
                self.render()
            }
            None => Ok(format!("Section not found!\n\n{}", self.short_toc())),
        }
    }

    /// Jump within the loaded chunks: 1-based number (clamped) or one of the
    /// keywords next/previous/first/last, matched by prefix.
    pub fn goto_part(
        &mut self,
        arg: &str,
    ) -> Result<String> {
        let arg = arg.trim().to_lowercase();
        if "next".starts_with(&arg) {
            return self.next();
        }
        if "previous".starts_with(&arg) {
            return self.previous();
        }

        if self.cursor.is_none() {
            self.load_section(self.section_num);
        }
        let cursor = self.cursor.as_mut().ok_or(SessionFault::NoChunks)?;

        if "first".starts_with(&arg) {
            cursor.chunk_num = 0;
            return self.render();
        }
        if "last".starts_with(&arg) {
            cursor.chunk_num = cursor.last_index();
            return self.render();
        }

        if let Some(num) = parse_number(&arg) {
            let total = cursor.chunks.len();
            let mut num = usize::try_from(num.max(1)).unwrap_or(usize::MAX);
            let mut message = String::new();
            if num > total {
                num = total;
                message = notice(&format!("Part number too large, jumping to part {num} instead"));
            }
            cursor.chunk_num = num - 1;
            return Ok(message + &self.render()?);
        }

        Ok("Part not found! Use numbers or the keywords next/previous/first/last".to_string())
    }

    /// Current position, mostly for callers that want to inspect state.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.as_ref().map(|c| (self.section_num, c.chunk_num))
    }
}
