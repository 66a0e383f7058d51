///
/// # Pastelink Raw
///
/// This module handles the raw subcommand
///
/// Private pastes are read through the account of the config. With `--public` the paste is
/// read from its public url instead.
///
/// # Usage
///
/// ```bash
/// pastelink raw --config=config.toml UIFdu235s
/// ```
///
use anyhow::{Context, Result};
use std::io::Write;

mod cmdline;

use super::config::Config;
use super::utils::{connect, find_user_key};
pub(crate) use cmdline::Opt;

/// Entry point for the raw subcommand
///
/// Opt is the command line options
pub(crate) fn main(opt: Opt, config: Config) -> Result<()> {
    let client = connect(&config)?;

    let data = if opt.public {
        client.public_paste(&opt.paste_key)
    } else {
        let user_key = find_user_key(&config, &client)?;
        client.user_paste(&user_key, &opt.paste_key)
    }
    .with_context(|| format!("Could not fetch {}", opt.paste_key))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(&data)?;
    out.flush()?;

    Ok(())
}
