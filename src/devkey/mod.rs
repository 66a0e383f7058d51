///
/// # Pastelink Devkey
///
/// This module handles the devkey subcommand
///
/// The subcommand logs in to the website with the account name and password and prints the
/// dev key shown on the API page of the account. It is the only subcommand that works without
/// a dev key in the config.
///
/// # Usage
///
/// ```bash
/// pastelink devkey --username=wiz_kitty --password=****
/// ```
///
use anyhow::{anyhow, Context, Result};

mod cmdline;

use super::config::Config;
pub(crate) use cmdline::Opt;

/// Entry point for the devkey subcommand
///
/// Opt is the command line options
pub(crate) fn main(opt: Opt, config: Config) -> Result<()> {
    let username = opt
        .username
        .or(config.username)
        .ok_or_else(|| anyhow!("No username given on the command line or in the config"))?;
    let password = opt
        .password
        .or(config.password)
        .ok_or_else(|| anyhow!("No password given on the command line or in the config"))?;

    let key = pastelink_core::devkey::get_dev_key(&username, &password, None)
        .with_context(|| format!("Could not read the dev key of {}", username))?;
    println!("{}", key.as_str());

    Ok(())
}
