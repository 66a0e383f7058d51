use clap::Parser;

/// The list command prints the pastes of the account of the config
#[derive(Parser, Debug)]
pub struct Opt {
    /// Number of pastes to list, between 1 and 1000
    #[arg(short, long, default_value_t = 50)]
    pub limit: i64,
}
