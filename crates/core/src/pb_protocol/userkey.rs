use super::{PbClient, Result};
use crate::pb::{model::Credential, reply::Reply};
use log::*;

impl PbClient {
    /// Exchange account name and password for a user key
    ///
    /// The user key narrows listing, deletion and raw access to that account
    pub fn user_key(&self, account: &str, password: &str) -> Result<Credential> {
        debug!("Requesting user key for {}", account);
        let form = vec![
            ("api_user_name", account.to_string()),
            ("api_user_password", password.to_string()),
        ];
        let data = self.login(form)?.read_all()?;
        let key = Reply::classify_trimmed(&data).into_result()?;
        Ok(Credential::new(key))
    }
}
