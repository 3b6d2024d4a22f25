//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    wrap_last: Option<usize>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            wrap_last: None,
        }
    }

    /// Wrap the last column at `width` terminal columns; longer cells spill
    /// onto continuation lines.
    pub fn wrap_last_column(mut self, width: usize) -> Self {
        self.wrap_last = Some(width.max(1));
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let cols = self.headers.len();

        // Expand wrapped cells into physical lines.
        let mut lines: Vec<Vec<String>> = Vec::new();
        for row in &self.rows {
            match self.wrap_last {
                Some(width) if cols > 0 => {
                    let last = row.last().map(String::as_str).unwrap_or("");
                    let wrapped = textwrap::wrap(last, width);
                    if wrapped.len() <= 1 {
                        lines.push(row.clone());
                    } else {
                        for (i, piece) in wrapped.iter().enumerate() {
                            let mut physical = if i == 0 {
                                row[..cols - 1].to_vec()
                            } else {
                                vec![String::new(); cols - 1]
                            };
                            physical.push(piece.to_string());
                            lines.push(physical);
                        }
                    }
                }
                _ => lines.push(row.clone()),
            }
        }

        // Column widths from header and content.
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();
        for line in &lines {
            for (i, cell) in line.iter().enumerate().take(cols) {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad_right(h, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for line in &lines {
            for (i, cell) in line.iter().enumerate().take(cols) {
                out.push_str(&pad_right(cell, widths[i]));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
