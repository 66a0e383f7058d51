use clap::Parser;

/// The devkey command logs in to the website and prints the dev key of the account
#[derive(Parser, Debug)]
pub struct Opt {
    /// Account name, defaults to the username of the config
    #[arg(short, long)]
    pub username: Option<String>,
    /// Account password, defaults to the password of the config
    #[arg(short, long)]
    pub password: Option<String>,
}
