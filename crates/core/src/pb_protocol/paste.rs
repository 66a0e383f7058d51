use super::{PbClient, Result};
use crate::pb::{model::Paste, reply::Reply};
use log::*;

impl PbClient {
    /// Create a new paste
    ///
    /// # Returns
    ///
    /// returns the url of the new paste
    pub fn create_paste(&self, paste: &Paste) -> Result<String> {
        debug!(
            "Creating {} byte paste with access mode {}",
            paste.content.len(),
            paste.access_mode
        );
        let data = self.post("paste", paste.to_form())?.read_all()?;
        Ok(Reply::classify_trimmed(&data).into_result()?)
    }
}
