///
/// # Pastelink Paste
///
/// This module handles the paste subcommand
///
/// The paste is created on behalf of the account of the config when a user key or a login is
/// configured, otherwise it is anonymous.
///
/// # Usage
///
/// ```bash
/// pastelink paste --config=config.toml --title=notes --access=unlisted notes.txt
/// ```
///
use anyhow::{Context, Result};
use log::*;
use pastelink_core::pb::model::Paste;
use std::io::Read;
use std::path::Path;

mod cmdline;

use super::config::Config;
use super::utils::{connect, find_user_key};
pub(crate) use cmdline::Opt;

fn read_content(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))
    }
}

/// Entry point for the paste subcommand
///
/// Opt is the command line options
pub(crate) fn main(opt: Opt, config: Config) -> Result<()> {
    let client = connect(&config)?;

    let mut paste = Paste::new(read_content(&opt.file)?).access_mode(opt.access);
    paste.title = opt.title;
    paste.format = opt.format;
    paste.expire_at = opt.expire;
    if !opt.anonymous && (config.user_key.is_some() || config.login().is_some()) {
        paste.user_key = Some(find_user_key(&config, &client)?);
    } else {
        info!("Creating an anonymous paste");
    }

    let url = client
        .create_paste(&paste)
        .context("Could not create the paste")?;
    println!("{}", url);

    Ok(())
}
