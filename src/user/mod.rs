///
/// # Pastelink User
///
/// This module handles the user subcommand
///
/// # Usage
///
/// ```bash
/// pastelink user --config=config.toml
/// ```
///
use anyhow::{Context, Result};
use pastelink_core::pb::model::AccountType;

mod cmdline;

use super::config::Config;
use super::utils::{connect, find_user_key};
pub(crate) use cmdline::Opt;

/// Entry point for the user subcommand
///
/// Opt is the command line options
pub(crate) fn main(_opt: Opt, config: Config) -> Result<()> {
    let client = connect(&config)?;
    let user_key = find_user_key(&config, &client)?;

    let user = client
        .user_details(&user_key)
        .context("Could not fetch the account details")?;

    let expiration = user.expiration.map(|e| e.to_string()).unwrap_or_default();
    let account_type = match user.account_type {
        AccountType::Normal => "normal",
        AccountType::Pro => "pro",
    };
    println!("name:        {}", user.name);
    println!("account:     {}", account_type);
    println!("email:       {}", user.email);
    println!("website:     {}", user.website);
    println!("location:    {}", user.location);
    println!("avatar:      {}", user.avatar_url);
    println!("format:      {}", user.format_code);
    println!("expiration:  {}", expiration);
    println!("access mode: {:?}", user.access_mode);

    Ok(())
}
