use clap::Parser;

/// The trends command prints the trending pastes
#[derive(Parser, Debug)]
pub struct Opt {}
