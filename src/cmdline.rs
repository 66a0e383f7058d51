use clap::{crate_authors, crate_version, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// A command line client for the pastebin.com API
///
/// Pastelink is free software released under the GNU AGPL v3.
#[derive(Parser, Debug)]
#[command(name = "pastelink", arg_required_else_help = true, version = crate_version!(), author = crate_authors!("\n"))]
pub struct Opt {
    /// Path to the config file
    #[arg(short, long, global = true, value_parser = PathBuf::from_str)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "devkey")]
    DevKey(super::devkey::Opt),
    #[command(name = "userkey")]
    UserKey(super::userkey::Opt),
    Paste(super::paste::Opt),
    List(super::list::Opt),
    Trends(super::trends::Opt),
    Delete(super::delete::Opt),
    User(super::user::Opt),
    Raw(super::raw::Opt),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_list() {
        let opt = Opt::parse_from(["pastelink", "-c", "conf.toml", "list", "--limit", "10"]);
        assert_eq!(opt.config, Some(PathBuf::from("conf.toml")));
        assert_matches!(opt.cmd, Command::List(ref list) if list.limit == 10);
    }

    #[test]
    fn test_parse_paste() {
        let opt = Opt::parse_from([
            "pastelink",
            "paste",
            "--title",
            "notes",
            "--access",
            "unlisted",
            "--expire",
            "1W",
            "notes.txt",
        ]);
        assert_eq!(opt.config, None);
        assert_matches!(opt.cmd, Command::Paste(_));
    }

    #[test]
    fn test_reject_unknown_access() {
        let result = Opt::try_parse_from(["pastelink", "paste", "--access", "secret", "-"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_names() {
        assert_matches!(
            Opt::parse_from(["pastelink", "devkey", "-u", "wiz"]).cmd,
            Command::DevKey(_)
        );
        assert_matches!(
            Opt::parse_from(["pastelink", "raw", "--public", "UIFdu235s"]).cmd,
            Command::Raw(_)
        );
    }
}
