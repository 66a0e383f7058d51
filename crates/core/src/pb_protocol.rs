use crate::pb::{model::Credential, ser::Form};
use log::*;
use reqwest::blocking::Client;

mod body;
mod config;
mod delete;
mod errors;
mod list;
mod paste;
mod raw;
mod trends;
mod userdetails;
mod userkey;

pub(crate) use body::Body;
pub use config::{ClientConfig, Endpoints};
pub use errors::Error;
pub use list::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Result type of the library
pub type Result<T> = std::result::Result<T, Error>;

///
/// This is the primary struct of this library when talking to the API
///
/// All state is fixed at construction, the client can be shared between threads and every call
/// is a single blocking round trip. Nothing is retried.
///
pub struct PbClient {
    transport: Client,
    dev_key: Credential,
    endpoints: Endpoints,
}

impl PbClient {
    ///
    /// Create a client for the public service
    ///
    /// # Parameters
    ///
    /// * `dev_key` - The application dev key sent with every request
    ///
    pub fn new(dev_key: Credential) -> Result<Self> {
        Self::with_config(dev_key, &ClientConfig::default())
    }

    ///
    /// Create a client from an explicit configuration
    ///
    /// # Parameters
    ///
    /// * `dev_key` - The application dev key sent with every request
    ///
    /// * `config` - Endpoints and transport settings
    ///
    pub fn with_config(dev_key: Credential, config: &ClientConfig) -> Result<Self> {
        let transport = config.build_transport()?;
        Ok(Self::with_transport(
            dev_key,
            transport,
            config.endpoints.clone(),
        ))
    }

    /// Create a client over a transport configured by the caller
    pub fn with_transport(dev_key: Credential, transport: Client, endpoints: Endpoints) -> Self {
        Self {
            transport,
            dev_key,
            endpoints,
        }
    }

    /// The endpoints this client talks to
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn send_form(&self, url: &str, mut form: Form) -> Result<Body> {
        form.push(("api_dev_key", self.dev_key.as_str().to_string()));
        trace!(
            "POST {} with fields {:?}",
            url,
            form.iter().map(|(k, _)| *k).collect::<Vec<_>>()
        );
        let response = self.transport.post(url).form(&form).send()?;
        debug!("{} answered {}", url, response.status());
        Ok(Body::new(response))
    }

    /// Sends an `api_option` action
    fn post(&self, option: &'static str, mut form: Form) -> Result<Body> {
        form.push(("api_option", option.to_string()));
        self.send_form(&self.endpoints.post, form)
    }

    fn raw(&self, form: Form) -> Result<Body> {
        self.send_form(&self.endpoints.raw, form)
    }

    fn login(&self, form: Form) -> Result<Body> {
        self.send_form(&self.endpoints.login, form)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use env_logger::Env;
    use httpmock::MockServer;

    pub(crate) const DEV_KEY: &str = "0123456789abcdef0123456789abcdef";
    pub(crate) const USER_KEY: &str = "fedcba9876543210fedcba9876543210";

    pub(crate) fn init() {
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .is_test(true)
            .try_init();
    }

    pub(crate) fn client_for(server: &MockServer) -> PbClient {
        let config = ClientConfig {
            endpoints: Endpoints::with_base(&server.base_url()),
            timeout_secs: Some(10),
            ..Default::default()
        };
        PbClient::with_config(Credential::new(DEV_KEY), &config).unwrap()
    }

    pub(crate) fn user_key() -> Credential {
        Credential::new(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devkey::Session;
    use httpmock::prelude::*;
    use std::sync::Arc;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_between_threads() {
        assert_send_sync::<PbClient>();
        assert_send_sync::<Session>();
        assert_send_sync::<ClientConfig>();
    }

    #[test]
    fn test_concurrent_calls() {
        testing::init();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .form_urlencoded_tuple("api_option", "trends");
            then.status(200).body("");
        });

        let client = Arc::new(testing::client_for(&server));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let client = client.clone();
                std::thread::spawn(move || client.trending().map(|pastes| pastes.len()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 0);
        }
        mock.assert_hits(4);
    }
}
