use std::time::Duration;

use crate::terminal::{banner, colors};
use colored::*;
use hosthunter_common::network::record::Tally;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Console output that is part of the report. Goes to stdout, logs go to stderr.
pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn banner() {
    banner::show();

    let text_content: String = format!("⟦ HOSTHUNTER v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn summary(tally: Tally, total_time: Duration, q_level: u8) {
    let resolved: ColoredString = format!("{} resolved", tally.resolved).bold().color(colors::SUCCESS);
    let failed: ColoredString = format!("{} failed", tally.failed).bold().color(colors::FAILED);
    let invalid: ColoredString = format!("{} invalid", tally.invalid).bold().color(colors::INVALID);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Lookup complete: {resolved}, {failed}, {invalid} in {total_time}");

    match q_level {
        0 => {
            fat_separator();
            centerln(&output);
        }
        _ => print(&output),
    }
}
