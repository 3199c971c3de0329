// External crates
use clap::{CommandFactory, Parser};
use tracing::{debug, info_span};

// Internal imports
use tom_config::TomConfig;
use tom_core::error::TomError;
use tom_core::{tom_error, tom_error_hint};

// Local modules
mod cli;
mod commands;

use cli::Args;
use commands::execute_command;

fn main() {
    // Tests expect clean output, so logging stays off in test mode
    let log_guard = if std::env::var("TOM_TEST_MODE").is_err() {
        tom_logging::init_subscriber()
    } else {
        None
    };

    let code = run(Args::parse());

    // Flush the file sink before exiting; `exit` skips destructors.
    drop(log_guard);
    std::process::exit(code);
}

fn run(args: Args) -> i32 {
    let Some(command) = args.command else {
        if let Err(e) = Args::command().print_help() {
            tom_error!("{}", e);
            return 1;
        }
        println!();
        return 0;
    };

    let config = match TomConfig::resolve() {
        Ok(config) => config,
        Err(e) => {
            tom_error!("❌ {}", e);
            return e.exit_code();
        }
    };

    let _span = info_span!("command", name = command.name()).entered();
    match execute_command(command, &config) {
        Ok(()) => 0,
        Err(TomError::ChildExited { program, code }) => {
            // The child already reported its own failure.
            debug!(program = %program, code, "relaying child exit status");
            code
        }
        Err(e) => {
            tom_error!("❌ {}", e);
            if matches!(e, TomError::Compose { .. }) {
                tom_error_hint!("Fix the YAML syntax of that file, then run the command again");
            }
            e.exit_code()
        }
    }
}
