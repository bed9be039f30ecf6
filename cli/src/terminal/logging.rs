use colored::*;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::spinner::SpinnerWriter;

/// One line per event: a level marker followed by the event's fields.
///
/// ```text
/// [+] Results saved to output.csv
/// [?] no PTR record for 10.0.0.1 addr=10.0.0.1
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HunterFormatter {
    color: bool,
}

impl HunterFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn marker(&self, level: &Level) -> String {
        let symbol = symbol(level);
        if !self.color {
            return symbol.to_string();
        }

        let painted: ColoredString = match *level {
            Level::TRACE => symbol.dimmed(),
            Level::DEBUG => symbol.blue(),
            Level::INFO => symbol.green().bold(),
            Level::WARN => symbol.yellow().bold(),
            Level::ERROR => symbol.red().bold(),
        };
        painted.to_string()
    }
}

fn symbol(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

impl<S, N> FormatEvent<S, N> for HunterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", self.marker(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber. Logs go to stderr, around the spinner.
pub fn init_logging(level: LevelFilter, color: bool) {
    let filter: EnvFilter = EnvFilter::default().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_ansi(color)
        .event_format(HunterFormatter::new(color))
        .with_env_filter(filter)
        .with_writer(|| SpinnerWriter)
        .try_init()
        .ok();
}
