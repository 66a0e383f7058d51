//! Transport configuration of the client
//!
//! Nothing here is global. A [`ClientConfig`] is handed to
//! [`PbClient::with_config`](super::PbClient::with_config) and its defaults point at the public
//! service.
use super::Result;
use log::*;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Urls of the API endpoints
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Endpoint of the `api_option` actions
    #[serde(default = "default_post")]
    pub post: String,
    /// Endpoint returning a user key for an account
    #[serde(default = "default_login")]
    pub login: String,
    /// Endpoint returning the content of a paste owned by a user
    #[serde(default = "default_raw")]
    pub raw: String,
    /// Prefix of the public raw content, the paste key is appended
    #[serde(default = "default_public_raw")]
    pub public_raw: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            post: default_post(),
            login: default_login(),
            raw: default_raw(),
            public_raw: default_public_raw(),
        }
    }
}

impl Endpoints {
    /// The endpoints of a service hosted at `base`, such as `http://127.0.0.1:8080`
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            post: format!("{}/api/api_post.php", base),
            login: format!("{}/api/api_login.php", base),
            raw: format!("{}/api/api_raw.php", base),
            public_raw: format!("{}/raw/", base),
        }
    }

    /// Url of the public raw content of `paste_key`
    pub fn public_raw_url(&self, paste_key: &str) -> String {
        format!("{}{}", self.public_raw, paste_key)
    }
}

fn default_post() -> String {
    "https://pastebin.com/api/api_post.php".to_string()
}

fn default_login() -> String {
    "https://pastebin.com/api/api_login.php".to_string()
}

fn default_raw() -> String {
    "https://pastebin.com/api/api_raw.php".to_string()
}

fn default_public_raw() -> String {
    "https://pastebin.com/raw/".to_string()
}

/// Everything needed to build the client apart from the dev key
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Where requests are sent
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Sent as the `User-Agent` header when set
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Deadline of a whole request in seconds. There is no deadline when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Builds the blocking transport described by this config
    pub fn build_transport(&self) -> Result<Client> {
        let mut builder = Client::builder().timeout(self.timeout_secs.map(Duration::from_secs));
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        debug!(
            "Building transport with timeout {:?} and user agent {:?}",
            self.timeout_secs, self.user_agent
        );
        Ok(builder.build()?)
    }
}
