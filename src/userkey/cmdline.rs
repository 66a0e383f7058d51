use clap::Parser;

/// The userkey command prints a user key for the username and password of the config
#[derive(Parser, Debug)]
pub struct Opt {}
