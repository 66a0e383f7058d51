use super::{PbClient, Result};
use crate::pb::{
    de::XmlStream,
    model::{Credential, PasteInfo},
};
use log::*;

/// Used when the requested limit is below one
pub const DEFAULT_LIST_LIMIT: i64 = 50;
/// The largest limit the service accepts
pub const MAX_LIST_LIMIT: i64 = 1000;

pub(super) fn clamp_limit(limit: i64) -> i64 {
    if limit < 1 {
        DEFAULT_LIST_LIMIT
    } else if limit > MAX_LIST_LIMIT {
        MAX_LIST_LIMIT
    } else {
        limit
    }
}

impl PbClient {
    /// List the pastes of an account
    ///
    /// A `limit` below one lists [`DEFAULT_LIST_LIMIT`] pastes and a limit above
    /// [`MAX_LIST_LIMIT`] is lowered to it.
    ///
    /// If the reply cannot be decoded the records decoded so far are discarded and only the
    /// error is returned.
    pub fn list_pastes(&self, user_key: &Credential, limit: i64) -> Result<Vec<PasteInfo>> {
        let limit = clamp_limit(limit);
        debug!("Listing up to {} pastes", limit);
        let form = vec![
            ("api_user_key", user_key.as_str().to_string()),
            ("api_results_limit", limit.to_string()),
        ];
        let body = self.post("list", form)?;
        let pastes = XmlStream::<_, PasteInfo>::new(body)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Listed {} pastes", pastes.len());
        Ok(pastes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pb::model::AccessMode;
    use crate::pb_protocol::{testing::*, Error};
    use assert_matches::assert_matches;
    use httpmock::prelude::*;
    use indoc::indoc;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(0), 50);
        assert_eq!(clamp_limit(-3), 50);
        assert_eq!(clamp_limit(1), 1);
        assert_eq!(clamp_limit(10), 10);
        assert_eq!(clamp_limit(1000), 1000);
        assert_eq!(clamp_limit(5000), 1000);
    }

    fn list_with_limit(requested: i64, sent: &str) {
        init();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .form_urlencoded_tuple("api_option", "list")
                .form_urlencoded_tuple("api_results_limit", sent);
            then.status(200).body("");
        });

        let pastes = client_for(&server)
            .list_pastes(&user_key(), requested)
            .unwrap();
        assert!(pastes.is_empty());
        mock.assert();
    }

    #[test]
    fn test_zero_limit_sends_default() {
        list_with_limit(0, "50");
    }

    #[test]
    fn test_large_limit_sends_max() {
        list_with_limit(5000, "1000");
    }

    #[test]
    fn test_limit_passes_through() {
        list_with_limit(10, "10");
    }

    #[test]
    fn test_list_pastes() {
        init();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .form_urlencoded_tuple("api_dev_key", DEV_KEY)
                .form_urlencoded_tuple("api_user_key", USER_KEY)
                .form_urlencoded_tuple("api_option", "list");
            then.status(200).body(indoc! {"
                <paste>
                    <paste_key>0b42rwhf</paste_key>
                    <paste_date>1297953260</paste_date>
                    <paste_private>0</paste_private>
                </paste>
                <paste>
                    <paste_key>0C343n0d</paste_key>
                    <paste_date>1297694343</paste_date>
                    <paste_private>2</paste_private>
                </paste>
            "});
        });

        let pastes = client_for(&server).list_pastes(&user_key(), 2).unwrap();
        assert_eq!(pastes.len(), 2);
        assert_eq!(pastes[0].key, "0b42rwhf");
        assert_eq!(pastes[1].key, "0C343n0d");
        assert_eq!(pastes[1].access_mode, AccessMode::Private);
        mock.assert();
    }

    #[test]
    fn test_list_decode_error_discards_records() {
        init();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/api_post.php");
            then.status(200)
                .body("<paste><paste_key>a</paste_key></paste><paste><paste_key>");
        });

        let result = client_for(&server).list_pastes(&user_key(), 5);
        assert_matches!(result, Err(Error::Decode(_)));
    }

    #[test]
    fn test_no_pastes_reply() {
        init();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/api_post.php");
            then.status(200).body("No pastes found.");
        });

        let pastes = client_for(&server).list_pastes(&user_key(), 5).unwrap();
        assert!(pastes.is_empty());
    }
}
