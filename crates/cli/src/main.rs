use clap::Parser;
use html_reencode_cli::args::Args;
use html_reencode_cli::config::Config;
use html_reencode_cli::{execute, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let quiet = args.output.quiet;

    if let Err(e) = logging::init(args.output.verbose) {
        eprintln!("Warning: {e}");
    }

    let result = Config::try_from(args).and_then(|config| execute(&config, quiet));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
