///
/// # Pastelink Trends
///
/// This module handles the trends subcommand
///
/// # Usage
///
/// ```bash
/// pastelink trends --config=config.toml
/// ```
///
use anyhow::{Context, Result};

mod cmdline;

use super::config::Config;
use super::utils::{connect, print_pastes};
pub(crate) use cmdline::Opt;

/// Entry point for the trends subcommand
///
/// Opt is the command line options
pub(crate) fn main(_opt: Opt, config: Config) -> Result<()> {
    let client = connect(&config)?;

    let pastes = client
        .trending()
        .context("Could not list the trending pastes")?;
    print_pastes(&pastes);

    Ok(())
}
