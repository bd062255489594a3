// Numbered link menu for disambiguation listings.
use crate::document::segment::split_on_marker;

const TITLE_SUFFIX: &str = "(disambiguation)";
const QUOTES: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Byte offset of the `==` that opens a "See also" header, if any.
fn see_also_offset(text: &str) -> Option<usize> {
    split_on_marker(text, "==")
        .into_iter()
        .enumerate()
        .skip(1)
        .step_by(2)
        .find(|(_, title)| title.trim().contains("See also"))
        .map(|(_, title)| title.as_ptr() as usize - text.as_ptr() as usize - 2)
}

/// Drop quotes around the ends of `head`, plus the closing quote of a
/// leading quoted title (`"Springfield" (song)`).
fn unquote(head: &str) -> String {
    let head = head.trim();
    let inner = head.trim_start_matches(&QUOTES[..]);
    let mut name = inner.to_string();
    if inner.len() < head.len()
        && let Some(at) = inner.find(&QUOTES[..])
    {
        let width = inner[at..].chars().next().map_or(0, char::len_utf8);
        name = format!("{}{}", &inner[..at], &inner[at + width..]);
    }
    name.trim_end_matches(&QUOTES[..]).trim().to_string()
}

fn is_candidate(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('=')
}

/// Page name for one candidate line: everything up to the first comma,
/// unquoted. Names equal to the listing's own title borrow the next
/// comma clause ("Springfield, Ohio").
fn page_name(
    line: &str,
    title: &str,
) -> String {
    let mut clauses = line.split(',');
    let head = clauses.next().unwrap_or_default().trim();
    let name = unquote(head);
    let title = title.trim().trim_end_matches(TITLE_SUFFIX).trim_end();
    if name.to_lowercase() == title.to_lowercase()
        && let Some(clause) = clauses.next().map(str::trim).filter(|c| !c.is_empty())
    {
        return format!("{name}, {clause}");
    }
    name
}

/// Number every link line of a disambiguation extract.
///
/// Returns the rewritten text (each candidate line prefixed with `"{n}. "`)
/// and the page names in label order: `links[i]` belongs to label `i + 1`.
/// The first line is the listing's lead-in and never a candidate; header
/// lines are left alone so the result still segments normally.
pub fn extract_links(
    extract: &str,
    title: &str,
) -> (String, Vec<String>) {
    let body = match see_also_offset(extract) {
        Some(end) => &extract[..end],
        None => extract,
    };

    let mut links = Vec::new();
    let mut lines = Vec::new();
    for (i, line) in body.split('\n').enumerate() {
        if i == 0 || !is_candidate(line) {
            lines.push(line.to_string());
            continue;
        }
        let name = page_name(line, title);
        if name.is_empty() {
            lines.push(line.to_string());
            continue;
        }
        links.push(name);
        lines.push(format!("{}. {}", links.len(), line.trim_start()));
    }
    (lines.join("\n"), links)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRINGFIELD: &str = "Springfield may refer to:\n\n\
        == Places ==\n\
        Springfield, Illinois, the state capital\n\
        Springfield, Ohio\n\
        Springfield Township, in several states\n\
        == Other uses ==\n\
        \"Springfield\" (song), by Rick Springfield\n\
        == See also ==\n\
        Springfield Armory";

    #[test]
    fn numbers_links_in_order() {
        let (text, links) = extract_links(SPRINGFIELD, "Springfield");
        assert_eq!(
            links,
            vec![
                "Springfield, Illinois",
                "Springfield, Ohio",
                "Springfield Township",
                "Springfield (song)",
            ]
        );
        assert!(text.contains("\n1. Springfield, Illinois, the state capital\n"));
        assert!(text.contains("\n3. Springfield Township, in several states\n"));
        assert!(text.starts_with("Springfield may refer to:"));
    }

    #[test]
    fn truncates_at_see_also() {
        let (text, links) = extract_links(SPRINGFIELD, "Springfield");
        assert!(!text.contains("See also"));
        assert!(!text.contains("Armory"));
        assert!(!links.iter().any(|l| l.contains("Armory")));
    }

    #[test]
    fn headers_stay_unnumbered() {
        let (text, _) = extract_links(SPRINGFIELD, "Springfield");
        assert!(text.contains("\n== Places ==\n"));
        assert!(text.contains("\n== Other uses ==\n"));
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let (_, links) = extract_links("Mercury may refer to:\nMERCURY, a planet", "Mercury");
        assert_eq!(links, vec!["MERCURY, a planet"]);
    }

    #[test]
    fn quotes_are_stripped_from_names() {
        let (_, links) = extract_links("X may refer to:\n\u{201C}Heroes\u{201D}, a song", "X");
        assert_eq!(links, vec!["Heroes"]);
    }

    #[test]
    fn leading_quoted_title_loses_both_quotes() {
        let (_, links) = extract_links(
            "X may refer to:\n\u{201C}Heroes\u{201D} (song), a single\nO'Brien, a name",
            "X",
        );
        assert_eq!(links, vec!["Heroes (song)", "O'Brien"]);
    }

    #[test]
    fn disambiguation_suffix_is_ignored_for_title_match() {
        let (_, links) = extract_links("Lima may refer to:\nLima, Peru", "Lima (disambiguation)");
        assert_eq!(links, vec!["Lima, Peru"]);
    }

    #[test]
    fn no_candidates_yields_no_links() {
        let (text, links) = extract_links("Only a lead line", "Only");
        assert_eq!(text, "Only a lead line");
        assert!(links.is_empty());
    }
}
