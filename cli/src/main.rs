mod commands;
mod export;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, lookup};
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = match CommandLine::try_parse_args() {
        Ok(commands) => commands,
        Err(e) => {
            // Nowhere left to report it if clap cannot write its own message.
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if commands.no_color {
        colored::control::set_override(false);
    }

    logging::init_logging(commands.log_level(), !commands.no_color);

    let cfg = commands.config();
    if cfg.show_banner() {
        print::banner();
    }

    match lookup::run(&commands, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
