//! Classification of plain text replies
//!
//! The action endpoints answer with plain text. A reply that starts with
//! [`BAD_REQUEST_PREFIX`] is an error, anything else is the payload itself.
use err_derive::Error;

/// Every error reply of the service starts with exactly this
pub const BAD_REQUEST_PREFIX: &str = "Bad API request, ";

/// An error reported by the service, holding the complete reply text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(display = "{}", _0)]
pub struct RemoteError(pub String);

/// A classified reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The payload of a successful call
    Payload(String),
    /// The service rejected the call
    Failure(RemoteError),
}

impl Reply {
    /// Tags the body as payload or error
    ///
    /// Invalid utf8 is replaced rather than rejected since the payload is either a url, a key
    /// or an error message
    pub fn classify(body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body).into_owned();
        if text.starts_with(BAD_REQUEST_PREFIX) {
            Reply::Failure(RemoteError(text))
        } else {
            Reply::Payload(text)
        }
    }

    /// Same as [`Reply::classify`] after stripping leading and trailing whitespace
    pub fn classify_trimmed(body: &[u8]) -> Self {
        Self::classify(String::from_utf8_lossy(body).trim().as_bytes())
    }

    /// Converts to a plain result
    pub fn into_result(self) -> Result<String, RemoteError> {
        match self {
            Reply::Payload(payload) => Ok(payload),
            Reply::Failure(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_payload() {
        let reply = Reply::classify(b"https://pastebin.com/UIFdu235s");
        assert_eq!(
            reply.into_result(),
            Ok("https://pastebin.com/UIFdu235s".to_string())
        );
    }

    #[test]
    fn test_failure_keeps_full_text() {
        let body = b"Bad API request, invalid api_dev_key";
        assert_matches!(
            Reply::classify(body),
            Reply::Failure(RemoteError(ref text)) if text == "Bad API request, invalid api_dev_key"
        );
    }

    #[test]
    fn test_prefix_is_exact() {
        // No trailing space after the comma
        assert_matches!(Reply::classify(b"Bad API request,x"), Reply::Payload(_));
        assert_matches!(Reply::classify(b"bad API request, x"), Reply::Payload(_));
        assert_matches!(Reply::classify(b" Bad API request, x"), Reply::Payload(_));
    }

    #[test]
    fn test_trimmed() {
        assert_matches!(
            Reply::classify_trimmed(b"\n Bad API request, invalid login\r\n"),
            Reply::Failure(RemoteError(ref text)) if text == "Bad API request, invalid login"
        );
        assert_eq!(
            Reply::classify_trimmed(b"  4a2f6d\n").into_result(),
            Ok("4a2f6d".to_string())
        );
    }

    #[test]
    fn test_empty_body_is_payload() {
        assert_eq!(Reply::classify(b""), Reply::Payload(String::new()));
    }
}
