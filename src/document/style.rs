// Flat Unicode "rich text": maps ASCII alphanumerics into the
// Mathematical Alphanumeric Symbols block.

/// Named text styles understood by [`stylize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    BoldSans,
    ItalicSans,
    BoldItalicSans,
    BoldSerif,
    ItalicSerif,
    BoldItalicSerif,
    DoubleStruck,
}

/// Code-point offsets for one style: digits, uppercase, lowercase, plus
/// letters that live outside the contiguous block.
struct Offsets {
    digit: u32,
    upper: u32,
    lower: u32,
    exceptions: &'static [(char, char)],
}

const ITALIC_SERIF_EXCEPTIONS: &[(char, char)] = &[('h', '\u{210E}')];

const DOUBLE_STRUCK_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{2102}'),
    ('H', '\u{210D}'),
    ('N', '\u{2115}'),
    ('P', '\u{2119}'),
    ('Q', '\u{211A}'),
    ('R', '\u{211D}'),
    ('Z', '\u{2124}'),
];

/// Returned by [`Style::from_name`] for names outside the style table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle {
    pub name: String,
}

impl std::fmt::Display for UnknownStyle {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "unknown text style: {:?}", self.name)
    }
}

impl std::error::Error for UnknownStyle {}

impl Style {
    pub const ALL: [Style; 7] = [
        Style::BoldSans,
        Style::ItalicSans,
        Style::BoldItalicSans,
        Style::BoldSerif,
        Style::ItalicSerif,
        Style::BoldItalicSerif,
        Style::DoubleStruck,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::BoldSans => "bold sans",
            Style::ItalicSans => "italic sans",
            Style::BoldItalicSans => "bold italic sans",
            Style::BoldSerif => "bold serif",
            Style::ItalicSerif => "italic serif",
            Style::BoldItalicSerif => "bold italic serif",
            Style::DoubleStruck => "doublestruck",
        }
    }

    /// Look a style up by its display name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Style, UnknownStyle> {
        let wanted = name.trim();
        Style::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStyle {
                name: name.to_string(),
            })
    }

    // Italic styles have no italic digits; an offset of 0 keeps them plain.
    fn offsets(self) -> Offsets {
        match self {
            Style::BoldSans => Offsets {
                digit: 120_764,
                upper: 120_211,
                lower: 120_205,
                exceptions: &[],
            },
            Style::ItalicSans => Offsets {
                digit: 0,
                upper: 120_263,
                lower: 120_257,
                exceptions: &[],
            },
            Style::BoldItalicSans => Offsets {
                digit: 120_764,
                upper: 120_315,
                lower: 120_309,
                exceptions: &[],
            },
            Style::BoldSerif => Offsets {
                digit: 120_734,
                upper: 119_743,
                lower: 119_737,
                exceptions: &[],
            },
            Style::ItalicSerif => Offsets {
                digit: 0,
                upper: 119_795,
                lower: 119_789,
                exceptions: ITALIC_SERIF_EXCEPTIONS,
            },
            Style::BoldItalicSerif => Offsets {
                digit: 120_734,
                upper: 119_847,
                lower: 119_841,
                exceptions: &[],
            },
            Style::DoubleStruck => Offsets {
                digit: 120_744,
                upper: 120_055,
                lower: 120_049,
                exceptions: DOUBLE_STRUCK_EXCEPTIONS,
            },
        }
    }
}

/// Render `text` in `style`. Anything outside `0-9A-Za-z` passes through.
pub fn stylize(
    text: &str,
    style: Style,
) -> String {
    let offsets = style.offsets();
    text.chars().map(|c| stylize_char(c, &offsets)).collect()
}

/// Name-based variant of [`stylize`]; unknown names are rejected.
pub fn stylize_named(
    text: &str,
    style_name: &str,
) -> Result<String, UnknownStyle> {
    Style::from_name(style_name).map(|style| stylize(text, style))
}

fn stylize_char(
    c: char,
    offsets: &Offsets,
) -> char {
    if let Some((_, replacement)) = offsets.exceptions.iter().find(|(from, _)| *from == c) {
        return *replacement;
    }
    let shift = match c {
        '0'..='9' => offsets.digit,
        'A'..='Z' => offsets.upper,
        'a'..='z' => offsets.lower,
        _ => return c,
    };
    char::from_u32(c as u32 + shift).unwrap_or(c)
}
