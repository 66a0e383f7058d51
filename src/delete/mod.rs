///
/// # Pastelink Delete
///
/// This module handles the delete subcommand
///
/// # Usage
///
/// ```bash
/// pastelink delete --config=config.toml UIFdu235s
/// ```
///
use anyhow::{Context, Result};
use log::*;

mod cmdline;

use super::config::Config;
use super::utils::{connect, find_user_key};
pub(crate) use cmdline::Opt;

/// Entry point for the delete subcommand
///
/// Opt is the command line options
pub(crate) fn main(opt: Opt, config: Config) -> Result<()> {
    let client = connect(&config)?;
    let user_key = find_user_key(&config, &client)?;

    client
        .delete_paste(&user_key, &opt.paste_key)
        .with_context(|| format!("Could not delete {}", opt.paste_key))?;
    info!("Deleted {}", opt.paste_key);

    Ok(())
}
