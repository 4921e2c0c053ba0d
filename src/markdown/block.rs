//! Line classification.
//!
//! Every input line maps to exactly one [`Line`] kind, independent of what
//! came before it. The renderer decides what the kind means for the block
//! that is currently open.

use regex::Regex;
use std::sync::LazyLock;

use super::table::{is_table_row, split_cells};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(.*)$").expect("HEADING: hardcoded regex is valid"));

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.\s+(.*)$").expect("ORDERED_ITEM: hardcoded regex is valid")
});

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").expect("UNORDERED_ITEM: hardcoded regex is valid"));

/// Deepest heading level emitted.
const MAX_HEADING_LEVEL: usize = 3;

/// A single classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    TableRow(Vec<String>),
    Heading { level: usize, text: &'a str },
    OrderedItem { number: u64, text: &'a str },
    UnorderedItem(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a raw line.
    ///
    /// The line is trimmed first. Kinds are checked in priority order:
    /// blank, table row, heading, ordered item, unordered item, text.
    pub(crate) fn classify(raw: &'a str) -> Self {
        let line = trim(raw);

        if line.is_empty() {
            return Self::Blank;
        }

        if is_table_row(line) {
            return Self::TableRow(split_cells(line));
        }

        if let Some(caps) = HEADING.captures(line) {
            let marks = caps.get(1).map_or(0, |m| m.as_str().len());
            let text = caps.get(2).map_or("", |m| m.as_str());
            return Self::Heading {
                level: marks.min(MAX_HEADING_LEVEL),
                text,
            };
        }

        if let Some(caps) = ORDERED_ITEM.captures(line) {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            return Self::OrderedItem {
                number: parse_number(digits),
                text,
            };
        }

        if let Some(caps) = UNORDERED_ITEM.captures(line) {
            return Self::UnorderedItem(caps.get(1).map_or("", |m| m.as_str()));
        }

        Self::Text(line)
    }
}

/// Trims whitespace and byte order marks from both ends.
fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Parses an ASCII digit run, saturating on overflow.
fn parse_number(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}
