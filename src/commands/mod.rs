// Closed command vocabulary, aliases, help metadata and input tokenizing.
use crate::config::Limits;
use crate::document::{Style, stylize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Search,
    Toc,
    Next,
    Previous,
    Section,
    Part,
    All,
    Limit,
    Clear,
    Disable,
    Help,
    Ping,
}

/// Short forms. Only the first alias of a command is shown in help text.
pub const ALIASES: [(&str, Command); 6] = [
    ("get", Command::Search),
    ("", Command::Next),
    ("prev", Command::Previous),
    ("sect", Command::Section),
    ("lim", Command::Limit),
    ("stop", Command::Disable),
];

fn usage_line(
    cmd: &str,
    arg: &str,
) -> String {
    format!(
        "{}{}",
        stylize(&format!("{cmd} "), Style::BoldSans),
        stylize(arg, Style::BoldItalicSans)
    )
}

impl Command {
    /// Help-list order.
    pub const ALL: [Command; 12] = [
        Command::Search,
        Command::Toc,
        Command::Next,
        Command::Previous,
        Command::Section,
        Command::Part,
        Command::All,
        Command::Limit,
        Command::Clear,
        Command::Disable,
        Command::Help,
        Command::Ping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Search => "search",
            Command::Toc => "toc",
            Command::Next => "next",
            Command::Previous => "previous",
            Command::Section => "section",
            Command::Part => "part",
            Command::All => "all",
            Command::Limit => "limit",
            Command::Clear => "clear",
            Command::Disable => "disable",
            Command::Help => "help",
            Command::Ping => "ping",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Search => "Search for an article by title",
            Command::Toc => "Print the table of contents",
            Command::Next => "Get the next part of the article",
            Command::Previous => "Get the previous part of the article",
            Command::Section => "Jump to a specified section (by name or number)",
            Command::Part => "Jump to a specified part of a section",
            Command::All => "Get entire article text, rather than split by sections",
            Command::Limit => "Set character limit for response messages",
            Command::Clear => "Clear out the cache for your article",
            Command::Disable => "Disable wikibot",
            Command::Help => "Print the help text",
            Command::Ping => "Ping bot to check connection",
        }
    }

    /// Styled usage text, for commands that take arguments.
    pub fn usage(
        self,
        limits: &Limits,
    ) -> Option<String> {
        let text = match self {
            Command::Search => format!(
                "{}\n{}",
                usage_line("search", "article title"),
                usage_line("get", "article title")
            ),
            Command::Next => format!(
                "Simply type \"next\" or use {} to send a blank text",
                stylize("return + send", Style::ItalicSans)
            ),
            Command::Section => format!(
                "{}\n{}\n\nAlternatively just type the section number itself.",
                usage_line("section", "name／number"),
                usage_line("sect", "name／number")
            ),
            Command::Part => format!(
                "{}\n\nAlternatively use keywords next/previous/first/last",
                usage_line("part", "number")
            ),
            Command::Limit => format!(
                "{}\n{}\n\nSet to {} by default, maximum is {}",
                usage_line("limit", "value"),
                usage_line("lim", "value"),
                limits.default,
                limits.max
            ),
            Command::Help => usage_line("help", "command"),
            _ => return None,
        };
        Some(text)
    }

    pub fn examples(self) -> Option<&'static str> {
        match self {
            Command::Search => Some("search Pishpek\nget mauna kea"),
            Command::Section => Some("section 3\nsect history\n4\nsect?"),
            Command::Part => Some("part 3\npart last"),
            Command::Limit => Some("limit 3000\nlim 1500\nlim default"),
            Command::Help => Some("help search"),
            _ => None,
        }
    }

    /// First alias of this command, if any.
    pub fn alias(self) -> Option<&'static str> {
        ALIASES
            .iter()
            .find(|(_, cmd)| *cmd == self)
            .map(|(alias, _)| *alias)
    }

    /// Resolve a lower-cased token through the alias table, then by name.
    pub fn lookup(token: &str) -> Option<Command> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, cmd)| *cmd)
            .or_else(|| Command::ALL.into_iter().find(|c| c.name() == token))
    }
}

/// Split input into a command token (maximal leading ASCII alphanumeric run)
/// and its argument. The character that ended the token stays in the
/// argument, which is then left-trimmed.
pub fn split_command(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(input.len());
    let (token, rest) = input.split_at(end);
    (token, rest.trim_start())
}

/// Lenient number parsing: integers, or finite decimals truncated toward
/// zero.
pub fn parse_number(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Some(n);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f.trunc() as i64),
        _ => None,
    }
}
