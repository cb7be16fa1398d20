//! Framed text tables with multi-line cells.
//!
//! ```text
//! +------+--------+
//! | 车次 |  站点  |
//! +------+--------+
//! | G101 | 北京南 |
//! |      |  上海  |
//! +------+--------+
//! ```
//!
//! Widths are measured on the plain text; color is applied per line after
//! padding so escape codes never affect the layout.

use super::style::{Color, Palette, display_width};

/// One table cell. Each line is colored independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    lines: Vec<(String, Option<Color>)>,
}

impl Cell {
    /// A single plain line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            lines: vec![(text.into(), None)],
        }
    }

    /// A single colored line.
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            lines: vec![(text.into(), Some(color))],
        }
    }

    /// Append another line below the existing ones.
    pub fn with_line(mut self, text: impl Into<String>, color: Option<Color>) -> Self {
        self.lines.push((text.into(), color));
        self
    }

    fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|(text, _)| display_width(text))
            .max()
            .unwrap_or(0)
    }

    fn height(&self) -> usize {
        self.lines.len().max(1)
    }
}

/// A table with a fixed header and any number of rows.
#[derive(Debug, Clone)]
pub struct TextTable {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TextTable {
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Lay out the table as text, one line per `\n`.
    pub fn render(&self, palette: &Palette) -> String {
        let widths = self.column_widths();
        let rule = horizontal_rule(&widths);

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');

        let header: Vec<Cell> = self.header.iter().map(|h| Cell::plain(h.as_str())).collect();
        push_row(&mut out, &header, &widths, palette);
        out.push_str(&rule);
        out.push('\n');

        for row in &self.rows {
            push_row(&mut out, row, &widths, palette);
        }
        if !self.rows.is_empty() {
            out.push_str(&rule);
            out.push('\n');
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let body = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(Cell::width)
                    .max()
                    .unwrap_or(0);
                display_width(h).max(body)
            })
            .collect()
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let mut rule = String::from("+");
    for w in widths {
        rule.push_str(&"-".repeat(w + 2));
        rule.push('+');
    }
    rule
}

fn push_row(out: &mut String, row: &[Cell], widths: &[usize], palette: &Palette) {
    let height = row.iter().map(Cell::height).max().unwrap_or(1);

    for line in 0..height {
        out.push('|');
        for (i, &width) in widths.iter().enumerate() {
            let (text, color) = row
                .get(i)
                .and_then(|cell| cell.lines.get(line))
                .map(|(text, color)| (text.as_str(), *color))
                .unwrap_or(("", None));

            let padding = width.saturating_sub(display_width(text));
            let left = padding / 2;
            let right = padding - left;

            out.push(' ');
            out.push_str(&" ".repeat(left));
            match color {
                Some(color) => out.push_str(&palette.paint(text, color)),
                None => out.push_str(text),
            }
            out.push_str(&" ".repeat(right));
            out.push_str(" |");
        }
        out.push('\n');
    }
}
