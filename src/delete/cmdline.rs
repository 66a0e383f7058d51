use clap::Parser;

/// The delete command removes a paste of the account of the config
#[derive(Parser, Debug)]
pub struct Opt {
    /// Key of the paste, the last part of its url
    pub paste_key: String,
}
