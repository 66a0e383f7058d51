///
/// # Pastelink Userkey
///
/// This module handles the userkey subcommand
///
/// The key can be stored as `user_key` in the config to skip the login on later calls.
///
/// # Usage
///
/// ```bash
/// pastelink userkey --config=config.toml
/// ```
///
use anyhow::{anyhow, Context, Result};

mod cmdline;

use super::config::Config;
use super::utils::connect;
pub(crate) use cmdline::Opt;

/// Entry point for the userkey subcommand
///
/// Opt is the command line options
pub(crate) fn main(_opt: Opt, config: Config) -> Result<()> {
    let (username, password) = config
        .login()
        .ok_or_else(|| anyhow!("username and password must be set in the config file"))?;
    let client = connect(&config)?;

    let key = client
        .user_key(username, password)
        .with_context(|| format!("Failed to log in as {}", username))?;
    println!("{}", key.as_str());

    Ok(())
}
