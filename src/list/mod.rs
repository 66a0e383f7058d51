///
/// # Pastelink List
///
/// This module handles the list subcommand
///
/// One paste is printed per line as tab separated key, url, creation time, hits and title.
///
/// # Usage
///
/// ```bash
/// pastelink list --config=config.toml --limit=10
/// ```
///
use anyhow::{Context, Result};

mod cmdline;

use super::config::Config;
use super::utils::{connect, find_user_key, print_pastes};
pub(crate) use cmdline::Opt;

/// Entry point for the list subcommand
///
/// Opt is the command line options
pub(crate) fn main(opt: Opt, config: Config) -> Result<()> {
    let client = connect(&config)?;
    let user_key = find_user_key(&config, &client)?;

    let pastes = client
        .list_pastes(&user_key, opt.limit)
        .context("Could not list the pastes")?;
    print_pastes(&pastes);

    Ok(())
}
