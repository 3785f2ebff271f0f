//! Plain-text table: the terminal counterpart of a dashboard `<table>`.
//!
//! Columns are left-aligned, padded by display width and separated by two
//! spaces. Lines never carry trailing whitespace.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const EMPTY_MARKER: &str = "(no rows)";

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub show_header: bool,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            header: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            show_header: true,
        }
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Append a row. Short rows are padded with empty cells, long rows are
    /// cut to the header length.
    pub fn push(&mut self, mut row: Vec<String>) {
        row.resize(self.header.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = if self.show_header {
            self.header.iter().map(|h| h.width()).collect()
        } else {
            vec![0; self.header.len()]
        };
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let widths = self.column_widths();

        if self.show_header {
            write_line(out, &self.header, &widths)?;
        }
        if self.rows.is_empty() {
            writeln!(out, "{EMPTY_MARKER}")?;
        }
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }

    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_line(out: &mut impl Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.width());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    writeln!(out, "{}", line.trim_end())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
