use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use pastelink_core::{pb_protocol::ClientConfig, Credential};
use regex::Regex;
use serde::Deserialize;
use std::{fs, path::Path};
use validator::{Validate, ValidationError};
use validator_derive::Validate;

lazy_static! {
    static ref RE_API_KEY: Regex = Regex::new(r"^[0-9A-Za-z]{32}$").unwrap();
}

#[derive(Debug, Deserialize, Validate, Clone, Default)]
pub(crate) struct Config {
    #[validate(regex(path = "RE_API_KEY", message = "Invalid dev key", code = "dev_key"))]
    pub(crate) dev_key: Option<String>,

    #[validate(regex(path = "RE_API_KEY", message = "Invalid user key", code = "user_key"))]
    pub(crate) user_key: Option<String>,

    #[validate(custom = "validate_username")]
    #[serde(alias = "user_name")]
    pub(crate) username: Option<String>,

    #[serde(alias = "user_password")]
    pub(crate) password: Option<String>,

    #[serde(default)]
    pub(crate) client: ClientConfig,
}

impl Config {
    pub(crate) fn dev_key(&self) -> Result<Credential> {
        self.dev_key
            .as_deref()
            .map(Credential::from)
            .ok_or_else(|| anyhow!("A dev_key must be set in the config file"))
    }

    pub(crate) fn user_key(&self) -> Option<Credential> {
        self.user_key.as_deref().map(Credential::from)
    }

    pub(crate) fn login(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}

fn validate_username(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("username cannot be empty"));
    }
    Ok(())
}

/// Reads and validates the config file, an empty config is used when no path is given
pub(crate) fn load(path: Option<&Path>) -> Result<Config> {
    let conf_path = match path {
        Some(conf_path) => conf_path,
        None => return Ok(Config::default()),
    };
    let config: Config = toml::from_str(
        &fs::read_to_string(conf_path)
            .with_context(|| format!("Failed to read {:?}", conf_path))?,
    )
    .with_context(|| format!("Failed to parse the {:?} config file", conf_path))?;

    config
        .validate()
        .with_context(|| format!("Failed to validate the {:?} config file", conf_path))?;

    Ok(config)
}
