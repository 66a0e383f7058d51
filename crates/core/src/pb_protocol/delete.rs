use super::{PbClient, Result};
use crate::pb::{model::Credential, reply::Reply};
use log::*;

impl PbClient {
    /// Delete a paste owned by the account of `user_key`
    pub fn delete_paste(&self, user_key: &Credential, paste_key: &str) -> Result<()> {
        debug!("Deleting paste {}", paste_key);
        let form = vec![
            ("api_user_key", user_key.as_str().to_string()),
            ("api_paste_key", paste_key.to_string()),
        ];
        let data = self.post("delete", form)?.read_all()?;
        Reply::classify(&data).into_result()?;
        Ok(())
    }
}
