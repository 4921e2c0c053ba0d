//! Block level rendering state machine.

use maud::{Markup, PreEscaped, html};
use tracing::debug;

use super::block::Line;
use super::inline::render_inline;
use super::table::Table;

/// Renders markdown text to an HTML fragment.
///
/// Empty input yields an empty string. Rendering never fails: anything
/// that is not a recognised block ends up as paragraph text.
///
/// # Examples
///
/// ```
/// use stylx_stats::render;
///
/// assert_eq!(render("# Title"), "<h1>Title</h1>");
/// assert_eq!(
///     render("3. three\n4. four"),
///     "<ol start=\"3\"><li>three</li><li>four</li></ol>"
/// );
/// ```
pub fn render(markdown: &str) -> String {
    let mut state = RenderState::default();
    let mut line_count = 0usize;

    for line in markdown.lines() {
        state.advance(line);
        line_count += 1;
    }

    let fragments = state.finish();
    debug!(lines = line_count, fragments = fragments.len(), "Rendered markdown");
    fragments.concat()
}

/// Renders optional markdown text; absent input yields an empty string.
pub fn render_opt(markdown: Option<&str>) -> String {
    markdown.map(render).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered { start: u64 },
    Unordered,
}

impl ListKind {
    /// True when an item of `other` kind continues a list of this kind.
    fn continues_with(self, other: ListKind) -> bool {
        matches!(
            (self, other),
            (Self::Ordered { .. }, Self::Ordered { .. }) | (Self::Unordered, Self::Unordered)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct List {
    kind: ListKind,
    items: Vec<String>,
}

impl List {
    fn to_markup(&self) -> Markup {
        match self.kind {
            ListKind::Ordered { start } => {
                let start_attr = (start > 1).then_some(start);
                html! {
                    ol start=[start_attr] {
                        @for item in &self.items {
                            li { (PreEscaped(item)) }
                        }
                    }
                }
            }
            ListKind::Unordered => html! {
                ul {
                    @for item in &self.items {
                        li { (PreEscaped(item)) }
                    }
                }
            },
        }
    }
}

/// The block currently accumulating lines.
///
/// Plain text arriving while a list is open does not close the list. It is
/// held in `pending` and comes out as a paragraph ahead of the list, either
/// when the next item of the same kind arrives or when the list is flushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum OpenBlock {
    #[default]
    Idle,
    Paragraph(Vec<String>),
    List { list: List, pending: Vec<String> },
    Table(Table),
}

impl OpenBlock {
    /// Finalizes the block into its fragments, paragraph first.
    fn into_fragments(self) -> Vec<Markup> {
        match self {
            Self::Idle => Vec::new(),
            Self::Paragraph(lines) => paragraph(&lines).into_iter().collect(),
            Self::List { list, pending } => paragraph(&pending)
                .into_iter()
                .chain(std::iter::once(list.to_markup()))
                .collect(),
            Self::Table(table) => vec![table.to_markup()],
        }
    }
}

/// Accumulator for one render call.
#[derive(Debug, Default)]
struct RenderState {
    fragments: Vec<String>,
    open: OpenBlock,
}

impl RenderState {
    /// Classifies one line and advances the state.
    fn advance(&mut self, raw: &str) {
        match Line::classify(raw) {
            Line::Blank => self.flush(),
            Line::TableRow(cells) => {
                if let OpenBlock::Table(table) = &mut self.open {
                    table.push_row(cells);
                    return;
                }
                self.flush();
                self.open = OpenBlock::Table(Table::new(cells));
            }
            Line::Heading { level, text } => {
                self.flush();
                self.emit(heading(level, text));
            }
            Line::OrderedItem { number, text } => {
                self.push_item(ListKind::Ordered { start: number }, render_inline(text));
            }
            Line::UnorderedItem(text) => {
                self.push_item(ListKind::Unordered, render_inline(text));
            }
            Line::Text(text) => {
                if let OpenBlock::Paragraph(lines) | OpenBlock::List { pending: lines, .. } =
                    &mut self.open
                {
                    lines.push(text.to_string());
                    return;
                }
                self.flush();
                self.open = OpenBlock::Paragraph(vec![text.to_string()]);
            }
        }
    }

    /// Appends a list item, continuing the open list when the kind matches.
    ///
    /// Only the first item of a new ordered list sets its start number.
    fn push_item(&mut self, kind: ListKind, item: String) {
        if let OpenBlock::List { list, pending } = &mut self.open
            && list.kind.continues_with(kind)
        {
            let held = std::mem::take(pending);
            list.items.push(item);
            if let Some(markup) = paragraph(&held) {
                self.emit(markup);
            }
            return;
        }

        self.flush();
        self.open = OpenBlock::List {
            list: List {
                kind,
                items: vec![item],
            },
            pending: Vec::new(),
        };
    }

    /// Closes the open block, emitting its markup.
    fn flush(&mut self) {
        let fragments = std::mem::take(&mut self.open).into_fragments();
        for markup in fragments {
            self.emit(markup);
        }
    }

    fn emit(&mut self, markup: Markup) {
        self.fragments.push(markup.into_string());
    }

    /// Flushes whatever is still open and returns the fragments in order.
    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.fragments
    }
}

/// Joins buffered lines into one paragraph; nothing for an empty buffer.
fn paragraph(lines: &[String]) -> Option<Markup> {
    if lines.is_empty() {
        return None;
    }
    Some(html! {
        p { (PreEscaped(render_inline(&lines.join(" ")))) }
    })
}

fn heading(level: usize, text: &str) -> Markup {
    let inner = PreEscaped(render_inline(text));
    match level {
        1 => html! { h1 { (inner) } },
        2 => html! { h2 { (inner) } },
        _ => html! { h3 { (inner) } },
    }
}
