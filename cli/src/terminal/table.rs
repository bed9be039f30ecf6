//! The result table.
//!
//! ```text
//! +-------------+---------+-------------------+
//! | IP Address  | Status  | Hostname          |
//! +-------------+---------+-------------------+
//! | 192.168.1.1 | Failed  | No hostname found |
//! +-------------+---------+-------------------+
//! ```
//!
//! Column widths are measured on plain text. Status coloring is applied
//! after padding so it never shifts the borders.

use colored::*;
use unicode_width::UnicodeWidthStr;

use hosthunter_common::network::record::{AddressRecord, Status};

use crate::terminal::{colors, print};

pub const HEADERS: [&str; 3] = ["IP Address", "Status", "Hostname"];

pub struct Table<'a> {
    records: &'a [AddressRecord],
    widths: [usize; 3],
}

impl<'a> Table<'a> {
    pub fn new(records: &'a [AddressRecord]) -> Self {
        let mut widths: [usize; 3] = HEADERS.map(|header| header.width());
        for record in records {
            for (width, value) in widths.iter_mut().zip(record.columns()) {
                *width = (*width).max(value.width());
            }
        }
        Self { records, widths }
    }

    fn separator(&self) -> String {
        let cells: Vec<String> = self.widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", cells.join("+"))
    }

    fn row(&self, cells: [&str; 3], status: Option<Status>) -> String {
        let [ip, state, hostname] = cells;
        let state: String = pad(state, self.widths[1]);
        let state: String = match status {
            Some(status) => state.color(colors::status(status)).to_string(),
            None => state,
        };
        format!(
            "| {} | {} | {} |",
            pad(ip, self.widths[0]),
            state,
            pad(hostname, self.widths[2])
        )
    }

    /// Every line of the table, top border to bottom border.
    ///
    /// With `paint` unset the output is plain text.
    pub fn lines(&self, paint: bool) -> Vec<String> {
        let separator = self.separator();
        let mut lines: Vec<String> = vec![separator.clone(), self.row(HEADERS, None), separator.clone()];

        for record in self.records {
            let status = paint.then(|| record.status());
            lines.push(self.row(record.columns(), status));
            lines.push(separator.clone());
        }

        lines
    }
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(fill))
}

pub fn print_table(records: &[AddressRecord]) {
    for line in Table::new(records).lines(true) {
        print::print(&line);
    }
}
