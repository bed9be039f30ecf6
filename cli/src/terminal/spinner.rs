use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use hosthunter_common::network::candidate::Candidate;

pub(crate) static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// Starts the lookup spinner. At quiet level 1 and above it stays hidden.
pub fn start_lookup_spinner(q_level: u8) -> &'static ProgressBar {
    SPINNER.get_or_init(|| init_spinner(q_level))
}

fn init_spinner(q_level: u8) -> ProgressBar {
    if q_level > 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn report_lookup_progress(idx: usize, total: usize, candidate: &Candidate) {
    if let Some(pb) = SPINNER.get() {
        pb.set_message(format!(
            "Resolving {} ({}/{})",
            candidate.raw().bold(),
            (idx + 1).to_string().green().bold(),
            total
        ));
    }
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Log sink that keeps log lines from tearing through an active spinner.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match SPINNER.get() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| std::io::stderr().write_all(buf))?,
            _ => std::io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}
