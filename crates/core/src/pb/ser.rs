//! Form encoding of outgoing requests
//!
//! The field names are fixed by the service
use super::model::Paste;

/// The fields of a form-urlencoded request in the order they are sent
pub type Form = Vec<(&'static str, String)>;

impl Paste {
    /// Encodes the paste into the fields of an `api_option=paste` request
    ///
    /// Optional values that are unset are left out of the form entirely
    pub fn to_form(&self) -> Form {
        let mut form: Form = vec![
            ("api_paste_code", self.content.clone()),
            ("api_paste_private", self.access_mode.to_string()),
        ];
        if let Some(title) = self.title.as_ref().filter(|t| !t.is_empty()) {
            form.push(("api_paste_name", title.clone()));
        }
        if let Some(expire_at) = self.expire_at {
            form.push(("api_paste_expire_date", expire_at.code().to_string()));
        }
        if let Some(format) = self.format.as_ref().filter(|f| !f.is_empty()) {
            form.push(("api_paste_format", format.clone()));
        }
        if let Some(user_key) = self.user_key.as_ref().filter(|k| !k.as_str().is_empty()) {
            form.push(("api_user_key", user_key.as_str().to_string()));
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pb::model::*;

    fn field<'a>(form: &'a Form, name: &str) -> Option<&'a str> {
        form.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_anonymous_paste_form() {
        let form = Paste::new("hello").to_form();
        assert_eq!(field(&form, "api_paste_code"), Some("hello"));
        assert_eq!(field(&form, "api_paste_private"), Some("0"));
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn test_full_paste_form() {
        let form = Paste::new("body")
            .title("notes")
            .format("text")
            .access_mode(AccessMode::Private)
            .expire_at(Expiration::In10Min)
            .user_key(Credential::new("userkey"))
            .to_form();
        assert_eq!(field(&form, "api_paste_private"), Some("2"));
        assert_eq!(field(&form, "api_paste_name"), Some("notes"));
        assert_eq!(field(&form, "api_paste_expire_date"), Some("10M"));
        assert_eq!(field(&form, "api_paste_format"), Some("text"));
        assert_eq!(field(&form, "api_user_key"), Some("userkey"));
    }

    #[test]
    fn test_empty_optionals_are_omitted() {
        let mut paste = Paste::new("body");
        paste.title = Some(String::new());
        paste.user_key = Some(Credential::new(""));
        let form = paste.to_form();
        assert_eq!(field(&form, "api_paste_name"), None);
        assert_eq!(field(&form, "api_user_key"), None);
    }
}
