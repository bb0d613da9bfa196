use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as ClapParser;
use figura_cli::io;
use figura_cli::io::cli::Cli;
use figura_cli::words;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;
    let config = io::read_config(args.config_file.as_deref())?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    words::run(stdin.lock(), &mut stdout, &config.words)
}
