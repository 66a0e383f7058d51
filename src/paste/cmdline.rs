use clap::Parser;
use pastelink_core::pb::model::{AccessMode, Expiration};
use std::path::PathBuf;

/// The paste command creates a new paste and prints its url
#[derive(Parser, Debug)]
pub struct Opt {
    /// Title of the paste
    #[arg(short, long)]
    pub title: Option<String>,
    /// Highlight format code such as `rust`
    #[arg(short, long)]
    pub format: Option<String>,
    /// One of public, unlisted or private
    #[arg(short, long, default_value = "public")]
    pub access: AccessMode,
    /// Expiration code: N, 10M, 1H, 1D, 1W, 2W, 1M, 6M or 1Y
    #[arg(short, long)]
    pub expire: Option<Expiration>,
    /// Do not attach the paste to the account of the config
    #[arg(long)]
    pub anonymous: bool,
    /// File to upload, `-` reads stdin
    pub file: PathBuf,
}
