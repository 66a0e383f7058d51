use super::{Error, PbClient, Result};
use crate::pb::{
    de::{decode_one, XmlRecord},
    model::{Credential, UserInfo},
};

impl PbClient {
    /// Fetch the settings and profile of the account of `user_key`
    ///
    /// The reply is a single `<user>` document
    pub fn user_details(&self, user_key: &Credential) -> Result<UserInfo> {
        let form = vec![("api_user_key", user_key.as_str().to_string())];
        let data = self.post("userdetails", form)?.read_all()?;
        decode_one::<UserInfo, _>(data.as_slice())?
            .ok_or(Error::MissingRecord(UserInfo::ROOT))
    }
}

#[cfg(test)]
mod tests {
    use crate::pb::model::*;
    use crate::pb_protocol::{testing::*, Error};
    use assert_matches::assert_matches;
    use httpmock::prelude::*;

    #[test]
    fn test_user_details() {
        init();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .form_urlencoded_tuple("api_option", "userdetails")
                .form_urlencoded_tuple("api_user_key", USER_KEY);
            then.status(200).body(
                "<user><user_name>wiz_kitty</user_name><user_expiration>1D</user_expiration>\
                 <user_private>2</user_private><user_account_type>0</user_account_type></user>",
            );
        });

        let user = client_for(&server).user_details(&user_key()).unwrap();
        assert_eq!(user.name, "wiz_kitty");
        assert_eq!(user.expiration, Some(Expiration::In1Day));
        assert_eq!(user.access_mode, AccessMode::Private);
        assert_eq!(user.account_type, AccountType::Normal);
        mock.assert();
    }

    #[test]
    fn test_user_details_empty() {
        init();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/api_post.php");
            then.status(200).body("");
        });

        assert_matches!(
            client_for(&server).user_details(&user_key()),
            Err(Error::MissingRecord("user"))
        );
    }

    #[test]
    fn test_user_details_error_text_has_no_record() {
        init();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/api_post.php");
            then.status(200).body("Bad API request, invalid api_user_key");
        });

        assert_matches!(
            client_for(&server).user_details(&user_key()),
            Err(Error::MissingRecord("user"))
        );
    }
}
