use clap::Parser;

/// The user command prints the settings of the account of the config
#[derive(Parser, Debug)]
pub struct Opt {}
