use clap::Parser;

/// The raw command writes the content of a paste to stdout
#[derive(Parser, Debug)]
pub struct Opt {
    /// Fetch a public or unlisted paste without logging in
    #[arg(long)]
    pub public: bool,
    /// Key of the paste, the last part of its url
    pub paste_key: String,
}
