use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use tracing::{info, info_span};

use hosthunter_common::config::Config;
use hosthunter_common::input::{self, RunInput};
use hosthunter_common::network::candidate::{self, Candidate};
use hosthunter_common::network::record::{AddressRecord, Tally};
use hosthunter_core::lookup;
use hosthunter_core::resolver::{HostnameResolver, SystemResolver};

use crate::commands::CommandLine;
use crate::export::{ExportFormat, Exporter};
use crate::mprint;
use crate::terminal::{print, spinner, table};

/// Runs a full pass: read input, validate, look up, report.
///
/// Every fatal condition returns before the first lookup, so an aborted run
/// prints no table and writes no file.
pub fn run(cmd: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let run_input: RunInput = input::resolve(
        cmd.input.as_deref(),
        cmd.input_file.as_deref(),
        cmd.output.clone(),
    )?;

    let candidates: Vec<Candidate> = candidate::validate(&run_input.addresses)?;

    print::header("resolving hostnames", cfg.quiet);
    info!("Looking up {} addresses", candidates.len());

    let start_time: Instant = Instant::now();
    let records: Vec<AddressRecord> = resolve_all(&candidates, &SystemResolver, cfg);

    if cfg.quiet == 0 {
        mprint!();
    }
    print::header("lookup results", cfg.quiet);
    table::print_table(&records);

    if let Some(path) = &run_input.output {
        save(path, ExportFormat::resolve(cmd.format, path), &records)?;
    }

    if cfg.show_summary() {
        print::summary(Tally::of(&records), start_time.elapsed(), cfg.quiet);
    }

    Ok(())
}

fn resolve_all<R>(candidates: &[Candidate], resolver: &R, cfg: &Config) -> Vec<AddressRecord>
where
    R: HostnameResolver + ?Sized,
{
    let span = info_span!("lookup", total = candidates.len());
    let _guard = span.enter();

    let total: usize = candidates.len();
    spinner::start_lookup_spinner(cfg.quiet);

    let records = lookup::perform_lookups(
        candidates,
        resolver,
        Some(Box::new(move |idx: usize, candidate: &Candidate| {
            spinner::report_lookup_progress(idx, total, candidate)
        })),
    );

    spinner::finish();
    records
}

fn save(path: &Path, format: ExportFormat, records: &[AddressRecord]) -> anyhow::Result<()> {
    Exporter::export(path, format, records)
        .with_context(|| format!("failed to write results to {}", path.display()))?;
    info!("Results saved to {}", path.display());
    Ok(())
}
