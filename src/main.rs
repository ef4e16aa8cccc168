mod cli;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use recycle_lib::utils;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    if cli.check {
        let available = recycle_lib::is_available();
        output::print_availability(available);
        return if available {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let mut total = 0u64;
    for path in &cli.paths {
        let shown = utils::display_path(path);
        if path.symlink_metadata().is_err() {
            output::print_missing(&shown);
            continue;
        }
        let size = utils::entry_size(path);
        total += size;
        output::print_entry(&shown, &utils::format_size(size));
    }
    output::print_separator();

    let options = cli.options();
    debug!(?options, count = cli.paths.len(), "recycling");

    match recycle_lib::recycle(&cli.paths, cli.confirm, &options) {
        Ok(()) => {
            output::print_recycled(cli.paths.len(), &utils::format_size(total));
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::print_failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
