#![warn(missing_docs)]
//!
//! # Pastelink
//!
//! Pastelink is a small command line client for the pastebin.com API.
//!
//! It contains sub commands to create, list, read and delete pastes and to
//! obtain the keys needed for that.
//!
use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::*;

mod cmdline;
mod config;
mod delete;
mod devkey;
mod list;
mod paste;
mod raw;
mod trends;
mod user;
mod userkey;
mod utils;

use cmdline::{Command, Opt};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!(
        "Pastelink {} {}",
        env!("PASTELINK_VERSION"),
        env!("PASTELINK_PROFILE")
    );

    let opt = Opt::parse();
    let config = config::load(opt.config.as_deref())?;

    match opt.cmd {
        Command::DevKey(opts) => devkey::main(opts, config)?,
        Command::UserKey(opts) => userkey::main(opts, config)?,
        Command::Paste(opts) => paste::main(opts, config)?,
        Command::List(opts) => list::main(opts, config)?,
        Command::Trends(opts) => trends::main(opts, config)?,
        Command::Delete(opts) => delete::main(opts, config)?,
        Command::User(opts) => user::main(opts, config)?,
        Command::Raw(opts) => raw::main(opts, config)?,
    }

    Ok(())
}
