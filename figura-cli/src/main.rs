use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as ClapParser;
use figura_cli::io;
use figura_cli::io::cli::Cli;
use figura_cli::prompt;

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

    let mut shapes = prompt::demo_shapes()?;

    eprintln!("Enter the pivot point (x y) and the scale factor:");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    prompt::run(stdin.lock(), &mut stdout, &mut shapes, config.report)
}
