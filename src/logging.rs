//! `env_logger` setup.
//!
//! While the game owns the terminal, records on stderr would corrupt the
//! screen, so the default filter is `warn` (only problems, read after
//! exit). With a log file configured everything down to `info` goes there.
//! `RUST_LOG` overrides the filter in both cases.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let mut builder = match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let mut b = Builder::from_env(Env::default().default_filter_or("info"));
            b.target(Target::Pipe(Box::new(file)));
            b
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder
        .try_init()
        .context("a logger is already installed")?;
    Ok(())
}
