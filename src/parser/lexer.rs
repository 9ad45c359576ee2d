//! Line classifier for portfolio documents using logos
//!
//! Only the leading marker of a line matters: the lexer is run once per
//! trimmed line and the remainder after the marker is handed back verbatim.

use logos::Logos;

/// Leading marker of a trimmed line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    #[token("# ")]
    Title,
    #[token("## ")]
    Section,
    #[token("### ")]
    Item,
    #[token("- ")]
    #[token("* ")]
    Bullet,
}

/// A classified line, borrowing its text from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// `# Name`
    Title(&'a str),
    /// `## Heading`, carrying the whole line for keyword matching
    Section(&'a str),
    /// `### Heading`
    Item(&'a str),
    /// `- entry` or `* entry`, carrying the whole line and the remainder
    Bullet { line: &'a str, content: &'a str },
    Text(&'a str),
}

/// Classify a single line. Surrounding whitespace is trimmed first.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }

    let mut lex = Marker::lexer(line);
    let marker = match lex.next() {
        Some(Ok(marker)) => marker,
        _ => return Line::Text(line),
    };
    let rest = &line[lex.span().end..];

    match marker {
        Marker::Title => Line::Title(rest),
        Marker::Section => Line::Section(line),
        Marker::Item => Line::Item(rest),
        Marker::Bullet => Line::Bullet {
            line,
            content: rest,
        },
    }
}

/// Classify every line of a document
pub fn lex(input: &str) -> impl Iterator<Item = Line<'_>> + '_ {
    input.lines().map(classify)
}
