use super::{PbClient, Result};
use crate::pb::model::Credential;
use log::*;

impl PbClient {
    /// Fetch the content of a paste owned by the account of `user_key`
    ///
    /// Works for private pastes. The bytes are returned as received
    pub fn user_paste(&self, user_key: &Credential, paste_key: &str) -> Result<Vec<u8>> {
        let form = vec![
            ("api_user_key", user_key.as_str().to_string()),
            ("api_paste_key", paste_key.to_string()),
            ("api_option", "show_paste".to_string()),
        ];
        self.raw(form)?.read_all()
    }

    /// Fetch the content of a public or unlisted paste
    ///
    /// No key is sent so private pastes cannot be read this way
    pub fn public_paste(&self, paste_key: &str) -> Result<Vec<u8>> {
        let url = self.endpoints.public_raw_url(paste_key);
        debug!("GET {}", url);
        let response = self.transport.get(&url).send()?;
        debug!("{} answered {}", url, response.status());
        super::Body::new(response).read_all()
    }
}

#[cfg(test)]
mod tests {
    use crate::pb_protocol::testing::*;
    use httpmock::prelude::*;

    #[test]
    fn test_user_paste() {
        init();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/api_raw.php")
                .form_urlencoded_tuple("api_dev_key", DEV_KEY)
                .form_urlencoded_tuple("api_user_key", USER_KEY)
                .form_urlencoded_tuple("api_paste_key", "secret1")
                .form_urlencoded_tuple("api_option", "show_paste");
            then.status(200).body("line one\nline two\n");
        });

        let data = client_for(&server)
            .user_paste(&user_key(), "secret1")
            .unwrap();
        assert_eq!(data, b"line one\nline two\n".to_vec());
        mock.assert();
    }

    #[test]
    fn test_public_paste() {
        init();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/raw/UIFdu235s");
            then.status(200).body("  verbatim  ");
        });

        let data = client_for(&server).public_paste("UIFdu235s").unwrap();
        assert_eq!(data, b"  verbatim  ".to_vec());
        mock.assert();
    }
}
