//! Contains code that is not specific to any of the subcommands
//!
use log::*;

use super::config::Config;
use anyhow::{anyhow, Context, Result};
use pastelink_core::{pb::model::PasteInfo, pb_protocol::PbClient, Credential};

pub(crate) fn connect(config: &Config) -> Result<PbClient> {
    let client = PbClient::with_config(config.dev_key()?, &config.client)
        .context("Failed to set up the HTTP client")?;
    debug!("Using {}", client.endpoints().post);
    Ok(client)
}

/// The user key from the config, or one requested with the configured login
pub(crate) fn find_user_key(config: &Config, client: &PbClient) -> Result<Credential> {
    if let Some(user_key) = config.user_key() {
        return Ok(user_key);
    }
    let (username, password) = config.login().ok_or_else(|| {
        anyhow!("Either user_key or username and password must be set in the config file")
    })?;
    info!("Requesting a user key for {}", username);
    client
        .user_key(username, password)
        .with_context(|| format!("Failed to log in as {}", username))
}

pub(crate) fn print_pastes(pastes: &[PasteInfo]) {
    for paste in pastes {
        let created = paste
            .create_at()
            .map(|at| at.to_string())
            .unwrap_or_default();
        println!(
            "{}\t{}\t{}\t{}\t{}",
            paste.key, paste.url, created, paste.hits, paste.title
        );
    }
}
