//! Pipe tables with an optional alignment row.

use maud::{Markup, PreEscaped, html};
use regex::Regex;
use std::sync::LazyLock;

use super::inline::render_inline;

static SEPARATOR_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-{3,}:?$").expect("SEPARATOR_CELL: hardcoded regex is valid"));

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
    /// No explicit alignment; the cell carries no style attribute.
    #[default]
    Unaligned,
}

impl Alignment {
    /// Parses one cell of a separator row (`:---`, `---:`, `:---:`, `---`).
    pub fn from_separator(cell: &str) -> Self {
        let token = cell.trim();
        match (token.starts_with(':'), token.ends_with(':')) {
            (true, true) => Self::Center,
            (false, true) => Self::Right,
            (true, false) => Self::Left,
            (false, false) => Self::Unaligned,
        }
    }

    /// Inline style attribute value, if the column is aligned.
    pub fn style(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("text-align:left"),
            Self::Right => Some("text-align:right"),
            Self::Center => Some("text-align:center"),
            Self::Unaligned => None,
        }
    }
}

/// Returns true for a trimmed line shaped like `|...|`.
pub(crate) fn is_table_row(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// Splits a table row into trimmed cells.
///
/// Strips one leading and one trailing pipe, then splits on the remaining
/// pipes. `||` therefore yields a single empty cell.
pub(crate) fn split_cells(line: &str) -> Vec<String> {
    let mut inner = line.trim();
    if let Some(stripped) = inner.strip_prefix('|') {
        inner = stripped;
    }
    if let Some(stripped) = inner.strip_suffix('|') {
        inner = stripped;
    }
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Returns true when every cell is a dash run with optional edge colons.
///
/// Whitespace inside a cell is ignored, so `: --- :` still counts.
pub(crate) fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().all(|cell| {
        let compact: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
        SEPARATOR_CELL.is_match(&compact)
    })
}

/// Table being accumulated line by line.
///
/// The header fixes the row width: every data row is padded with empty
/// cells or truncated to match it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Table {
    header: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
    awaiting_separator: bool,
}

impl Table {
    /// Opens a table whose header is the given row.
    pub(crate) fn new(header: Vec<String>) -> Self {
        Self {
            header,
            alignments: Vec::new(),
            rows: Vec::new(),
            awaiting_separator: true,
        }
    }

    /// Feeds the next row of the table.
    ///
    /// The row right after the header is consumed as alignment when it is a
    /// valid separator row. Otherwise it becomes the first data row and the
    /// table carries no alignment.
    pub(crate) fn push_row(&mut self, cells: Vec<String>) {
        if self.awaiting_separator {
            self.awaiting_separator = false;
            if is_separator_row(&cells) {
                self.alignments = cells.iter().map(|c| Alignment::from_separator(c)).collect();
                return;
            }
        }

        let row = self.normalise(cells);
        self.rows.push(row);
    }

    fn normalise(&self, mut row: Vec<String>) -> Vec<String> {
        row.resize(self.header.len(), String::new());
        row
    }

    fn alignment(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// Renders the table inside its scroll wrapper.
    pub(crate) fn to_markup(&self) -> Markup {
        html! {
            div class="markdown-table-wrapper" {
                table class="markdown-table" {
                    @if !self.header.is_empty() {
                        thead {
                            tr {
                                @for (index, cell) in self.header.iter().enumerate() {
                                    th style=[self.alignment(index).style()] {
                                        (PreEscaped(render_inline(cell)))
                                    }
                                }
                            }
                        }
                    }
                    @if !self.rows.is_empty() {
                        tbody {
                            @for row in &self.rows {
                                tr {
                                    @for (index, cell) in row.iter().enumerate() {
                                        td style=[self.alignment(index).style()] {
                                            (PreEscaped(render_inline(cell)))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
