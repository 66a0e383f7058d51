//! Recovers the dev key of an account from the website
//!
//! The API itself has no way to look up a dev key. The website shows it on the account's API
//! page once logged in, so this module submits the login form, carries the session cookies over
//! to the API page and scrapes the key out of its markup.
//!
//! Everything that depends on the markup of the site lives here. The API client never calls into
//! this module.
use crate::{
    pb::model::Credential,
    pb_protocol::{Body, Error, Result},
};
use lazy_static::lazy_static;
use log::*;
use regex::bytes::Regex;
use reqwest::{
    blocking::Client,
    cookie::{CookieStore, Jar},
    header::COOKIE,
};
use std::sync::Arc;

const DEV_KEY_PREFIX: &str = r#"<div class="code_box">"#;
const DEV_KEY_SUFFIX: &str = "</div>";

lazy_static! {
    static ref RE_DEV_KEY: Regex = Regex::new(&format!(
        "{}([0-9a-f]{{32}}){}",
        regex::escape(DEV_KEY_PREFIX),
        regex::escape(DEV_KEY_SUFFIX)
    ))
    .unwrap();
}

/// A client together with the cookie jar it stores its cookies in
///
/// The login redirects before it answers. Cookies set on the way are only kept in the jar, so
/// the jar is read back when the account page is requested.
pub struct Session {
    client: Client,
    jar: Arc<Jar>,
}

impl Session {
    /// A client with a new, empty cookie jar
    pub fn new() -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder().cookie_provider(jar.clone()).build()?;
        Ok(Self { client, jar })
    }

    /// Uses a client configured by the caller
    ///
    /// `jar` should be the cookie provider of `client`. Cookies the client keeps elsewhere are
    /// not sent to the account page.
    pub fn with_client(client: Client, jar: Arc<Jar>) -> Self {
        Self { client, jar }
    }

    /// The client of this session
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The cookie jar of this session
    pub fn jar(&self) -> &Jar {
        &self.jar
    }
}

/// The two pages of the website involved in the login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// Target of the login form
    pub login: String,
    /// The page that shows the dev key of the logged in account
    pub api_page: String,
}

impl Default for Site {
    fn default() -> Self {
        Self::with_base("https://pastebin.com")
    }
}

impl Site {
    /// The pages of a site hosted at `base`
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            login: format!("{}/login.php", base),
            api_page: format!("{}/api", base),
        }
    }

    ///
    /// Log in as `account` and read the dev key from the API page
    ///
    /// # Parameters
    ///
    /// * `account` - Name of the account
    ///
    /// * `password` - Its password
    ///
    /// * `session` - The session to log in with. When `None` a new session with an empty
    ///   cookie jar is used
    ///
    /// # Returns
    ///
    /// returns the dev key or [`Error::CredentialNotFound`] when the page does not show one
    ///
    pub fn dev_key(
        &self,
        account: &str,
        password: &str,
        session: Option<&Session>,
    ) -> Result<Credential> {
        let fresh;
        let session = match session {
            Some(session) => session,
            None => {
                fresh = Session::new()?;
                &fresh
            }
        };
        let client = session.client();

        debug!("Logging in to {} as {}", self.login, account);
        let form = [
            ("user_name", account),
            ("user_password", password),
            ("submit_hidden", "submit_hidden"),
        ];
        let response = client.post(&self.login).form(&form).send()?;
        let status = response.status();
        // Only the cookies of the last hop when the login redirected
        let captured = response
            .cookies()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect::<Vec<_>>();
        Body::new(response).read_all()?;
        if status.as_u16() >= 400 {
            return Err(Error::HttpStatus {
                status: status.to_string(),
            });
        }

        debug!("Fetching {}", self.api_page);
        let url = client.get(&self.api_page).build()?.url().clone();
        let stored = session.jar.cookies(&url);
        let cookies = merge_cookies(stored.as_ref().and_then(|v| v.to_str().ok()), &captured);
        let mut request = client.get(url);
        if !cookies.is_empty() {
            request = request.header(COOKIE, cookies);
        }
        let page = Body::new(request.send()?).read_all()?;
        scrape_dev_key(&page)
    }
}

// One `Cookie` header value, a captured cookie replaces a stored one of the same name
fn merge_cookies(stored: Option<&str>, captured: &[(String, String)]) -> String {
    let mut cookies: Vec<(String, String)> = Vec::new();
    let pairs = stored
        .into_iter()
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            Some((name.to_string(), value.to_string()))
        })
        .chain(captured.iter().cloned());
    for (name, value) in pairs {
        match cookies.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => cookies.push((name, value)),
        }
    }
    cookies
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Log in to the public site as `account` and read its dev key
///
/// See [`Site::dev_key`]
pub fn get_dev_key(account: &str, password: &str, session: Option<&Session>) -> Result<Credential> {
    Site::default().dev_key(account, password, session)
}

/// Finds the first dev key in the markup of the API page
pub fn scrape_dev_key(page: &[u8]) -> Result<Credential> {
    let captures = RE_DEV_KEY
        .captures(page)
        .ok_or(Error::CredentialNotFound)?;
    // The pattern only matches ascii hex digits
    let key = String::from_utf8_lossy(&captures[1]).into_owned();
    trace!("Found a dev key on the account page");
    Ok(Credential::new(key))
}
