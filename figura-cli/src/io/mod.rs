use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};

use crate::EPOCH;
use crate::config::FiguraConfig;

pub mod cli;

/// Reads the JSON config at `path`, or falls back to the defaults when no path is given.
pub fn read_config(path: Option<&Path>) -> Result<FiguraConfig> {
    let config = match path {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FiguraConfig::default()
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    info!("[MAIN] Using config: {config:?}");
    Ok(config)
}

/// Logs to stderr, stdout is reserved for the program's own output.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!("[{}] [{:0>2}:{:0>2}:{:0>2}]", record.level(), hours, min, sec);

            out.finish(format_args!("{prefix:<19}{message}"))
        })
        // blanket level filter
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] logger initialized at level {level_filter}");
    Ok(())
}
