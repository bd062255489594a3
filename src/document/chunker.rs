// Word-safe chunk builder: character-bounded, never splits inside a word

/// Invisible marker placed at every section boundary in "view all" text.
pub const SECTION_MARK: char = '\u{1}';
/// Separator used when flattening every section into one stream.
pub const SECTION_BREAK: &str = "\n\n\n\u{1}";

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into the fewest contiguous pieces of at most `limit` chars
/// each, cutting only at word boundaries. A word longer than `limit` becomes
/// its own oversized piece. Concatenating the pieces yields `text` exactly.
pub fn split_word_safe(
    text: &str,
    limit: usize,
) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let total = chars.len();
    let limit = limit.max(1);
    let is_boundary = |i: usize| {
        i == 0 || i == total || is_word_char(chars[i - 1].1) != is_word_char(chars[i].1)
    };
    let byte_at = |i: usize| if i == total { text.len() } else { chars[i].0 };

    let mut pieces = Vec::new();
    let mut start = 0usize;
    while start < total {
        let max_end = (start + limit).min(total);
        let end = (start + 1..=max_end)
            .rev()
            .find(|&e| is_boundary(e))
            .or_else(|| (max_end + 1..=total).find(|&e| is_boundary(e)))
            .unwrap_or(total);
        pieces.push(&text[byte_at(start)..byte_at(end)]);
        start = end;
    }
    pieces
}

/// Trailing position marker, e.g. `" (2/5)"`.
pub fn postscript(
    index: usize,
    total: usize,
) -> String {
    format!(" ({}/{})", index + 1, total)
}

/// Split a section into numbered chunks. Always returns at least one chunk.
pub fn chunk(
    text: &str,
    limit: usize,
) -> Vec<String> {
    let mut pieces = split_word_safe(text, limit);
    if pieces.is_empty() {
        pieces.push("");
    }
    let total = pieces.len();
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| format!("{}{}", piece.trim_end(), postscript(i, total)))
        .collect()
}

/// Flatten sections into one text with a marker at every boundary.
pub fn join_sections(sections: &[String]) -> String {
    sections.join(SECTION_BREAK)
}

/// Number of section boundaries crossed inside `text`.
pub fn count_section_marks(text: &str) -> usize {
    text.matches(SECTION_MARK).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(chunk("hello world", 100), vec!["hello world (1/1)"]);
    }

    #[test]
    fn splits_before_limit_at_word_boundary() {
        let pieces = split_word_safe("alpha beta gamma", 8);
        assert_eq!(pieces, vec!["alpha ", "beta ", "gamma"]);
        assert_eq!(
            chunk("alpha beta gamma", 8),
            vec!["alpha (1/3)", "beta (2/3)", "gamma (3/3)"]
        );
    }

    #[test]
    fn oversized_word_stands_alone() {
        let pieces = split_word_safe("a supercalifragilistic b", 5);
        assert_eq!(pieces, vec!["a ", "supercalifragilistic", " b"]);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let text = "ééééé ééééé";
        let pieces = split_word_safe(text, 6);
        assert_eq!(pieces, vec!["ééééé ", "ééééé"]);
    }

    #[test]
    fn empty_text_yields_single_empty_chunk() {
        assert_eq!(chunk("", 100), vec![" (1/1)"]);
    }

    #[test]
    fn marks_count_section_breaks() {
        let joined = join_sections(&["a".into(), "b".into(), "c".into()]);
        assert_eq!(count_section_marks(&joined), 2);
        assert!(joined.starts_with("a\n\n\n\u{1}b"));
    }
}
