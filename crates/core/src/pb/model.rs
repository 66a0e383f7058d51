//! Value types exchanged with the service
//!
//! Outgoing requests are built from [`Paste`]. Listings decode into [`PasteInfo`] and the
//! account details into [`UserInfo`].
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use time::{Duration, OffsetDateTime};

/// Who can see a paste or a user profile
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum AccessMode {
    /// Listed and visible to everyone
    Public = 0,
    /// Visible to anyone holding the link
    Unlisted = 1,
    /// Only visible to the owner
    Private = 2,
}

impl Default for AccessMode {
    fn default() -> Self {
        AccessMode::Public
    }
}

impl AccessMode {
    /// The numeric value used on the wire
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AccessMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccessMode::Public),
            1 => Ok(AccessMode::Unlisted),
            2 => Ok(AccessMode::Private),
            n => Err(n),
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for AccessMode {
    type Err = String;

    /// Accepts the decimal wire value or the lowercase mode name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" | "public" => Ok(AccessMode::Public),
            "1" | "unlisted" => Ok(AccessMode::Unlisted),
            "2" | "private" => Ok(AccessMode::Private),
            other => Err(format!("Unknown access mode: {}", other)),
        }
    }
}

/// How long a new paste lives
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Expiration {
    /// Never expires
    Never,
    /// 10 minutes
    In10Min,
    /// 1 hour
    In1Hour,
    /// 1 day
    In1Day,
    /// 1 week
    In1Week,
    /// 2 weeks
    In2Weeks,
    /// 1 month
    In1Month,
    /// 6 months
    In6Months,
    /// 1 year
    In1Year,
}

impl Expiration {
    /// The code sent to and received from the service
    pub fn code(self) -> &'static str {
        match self {
            Expiration::Never => "N",
            Expiration::In10Min => "10M",
            Expiration::In1Hour => "1H",
            Expiration::In1Day => "1D",
            Expiration::In1Week => "1W",
            Expiration::In2Weeks => "2W",
            Expiration::In1Month => "1M",
            Expiration::In6Months => "6M",
            Expiration::In1Year => "1Y",
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Expiration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" => Ok(Expiration::Never),
            "10M" => Ok(Expiration::In10Min),
            "1H" => Ok(Expiration::In1Hour),
            "1D" => Ok(Expiration::In1Day),
            "1W" => Ok(Expiration::In1Week),
            "2W" => Ok(Expiration::In2Weeks),
            "1M" => Ok(Expiration::In1Month),
            "6M" => Ok(Expiration::In6Months),
            "1Y" => Ok(Expiration::In1Year),
            other => Err(format!("Unknown expiration code: {}", other)),
        }
    }
}

/// An opaque secret handed out by the service
///
/// Used both for the application wide dev key and the per account user key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key obtained elsewhere
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self(key.into())
    }

    /// The raw key as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Credential {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for Credential {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"******").finish()
    }
}

/// A paste about to be created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paste {
    /// Optional name shown above the paste
    pub title: Option<String>,
    /// The text to store
    pub content: String,
    /// Visibility of the new paste
    pub access_mode: AccessMode,
    /// Short code of the syntax highlighting such as `rust`
    pub format: Option<String>,
    /// Lifetime of the paste, the account default is used when omitted
    pub expire_at: Option<Expiration>,
    /// Owner of the paste, the paste is anonymous without it
    pub user_key: Option<Credential>,
}

impl Paste {
    /// A public, anonymous paste of `content`
    pub fn new<T: Into<String>>(content: T) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Sets the title
    pub fn title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the highlight format code
    pub fn format<T: Into<String>>(mut self, format: T) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the visibility
    pub fn access_mode(mut self, access_mode: AccessMode) -> Self {
        self.access_mode = access_mode;
        self
    }

    /// Sets the expiration
    pub fn expire_at(mut self, expire_at: Expiration) -> Self {
        self.expire_at = Some(expire_at);
        self
    }

    /// Creates the paste on behalf of this account
    pub fn user_key(mut self, user_key: Credential) -> Self {
        self.user_key = Some(user_key);
        self
    }
}

/// A paste as reported by the listing endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteInfo {
    /// The paste key, the last part of its url
    pub key: String,
    /// Creation time as reported by the service
    pub create_ts: i64,
    /// Title, empty when untitled
    pub title: String,
    /// Size in bytes
    pub size: i64,
    /// Expiry time as reported by the service, zero when it never expires
    pub expire_ts: i64,
    /// Visibility
    pub access_mode: AccessMode,
    /// Long name of the highlight format such as `JavaScript`
    pub format: String,
    /// Short code of the highlight format such as `javascript`
    pub format_code: String,
    /// Full url of the paste
    pub url: String,
    /// Number of views
    pub hits: i64,
}

impl PasteInfo {
    /// Converts [`PasteInfo::create_ts`]
    pub fn create_at(&self) -> Option<OffsetDateTime> {
        from_timestamp_ms(self.create_ts)
    }

    /// Converts [`PasteInfo::expire_ts`]
    pub fn expire_at(&self) -> Option<OffsetDateTime> {
        from_timestamp_ms(self.expire_ts)
    }
}

/// Splits the timestamp into `ts / 1000` seconds and `ts % 1000` milliseconds
///
/// Returns `None` when the result cannot be represented
pub fn from_timestamp_ms(ts: i64) -> Option<OffsetDateTime> {
    let secs = OffsetDateTime::from_unix_timestamp(ts / 1000).ok()?;
    secs.checked_add(Duration::milliseconds(ts % 1000))
}

/// Kind of account
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AccountType {
    /// A free account
    Normal,
    /// A paid account
    Pro,
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Normal
    }
}

impl TryFrom<u8> for AccountType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountType::Normal),
            1 => Ok(AccountType::Pro),
            n => Err(n),
        }
    }
}

/// Settings and profile of an account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    /// Account name
    pub name: String,
    /// Default highlight format code for new pastes
    pub format_code: String,
    /// Default expiration for new pastes
    pub expiration: Option<Expiration>,
    /// Url of the avatar image
    pub avatar_url: String,
    /// Default visibility for new pastes
    pub access_mode: AccessMode,
    /// Website listed on the profile
    pub website: String,
    /// Email address of the account
    pub email: String,
    /// Location listed on the profile
    pub location: String,
    /// Free or paid
    pub account_type: AccountType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_mode_round_trip() {
        for mode in &[
            AccessMode::Public,
            AccessMode::Unlisted,
            AccessMode::Private,
        ] {
            let wire = mode.to_string();
            assert_eq!(wire.parse::<AccessMode>(), Ok(*mode));
            assert_eq!(AccessMode::try_from(mode.value()), Ok(*mode));
        }
        assert_eq!(AccessMode::try_from(3), Err(3));
        assert!("3".parse::<AccessMode>().is_err());
    }

    #[test]
    fn test_access_mode_names() {
        assert_eq!("unlisted".parse::<AccessMode>(), Ok(AccessMode::Unlisted));
        assert_eq!(AccessMode::Private.to_string(), "2");
    }

    #[test]
    fn test_expiration_codes() {
        assert_eq!(Expiration::Never.code(), "N");
        assert_eq!(Expiration::In2Weeks.to_string(), "2W");
        assert_eq!("6M".parse::<Expiration>(), Ok(Expiration::In6Months));
        assert!("".parse::<Expiration>().is_err());
    }

    #[test]
    fn test_timestamp_split() {
        let info = PasteInfo {
            create_ts: 1297953260,
            ..Default::default()
        };
        let at = info.create_at().unwrap();
        assert_eq!(at.unix_timestamp(), 1297953);
        assert_eq!(at.millisecond(), 260);
    }

    #[test]
    fn test_zero_timestamp_is_epoch() {
        let info = PasteInfo::default();
        assert_eq!(info.expire_at(), Some(OffsetDateTime::UNIX_EPOCH));
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let key = Credential::new("deadbeefdeadbeefdeadbeefdeadbeef");
        let printed = format!("{:?}", key);
        assert!(!printed.contains("deadbeef"));
        assert_eq!(key.as_str(), "deadbeefdeadbeefdeadbeefdeadbeef");
    }

    #[test]
    fn test_paste_builder() {
        let paste = Paste::new("fn main() {}")
            .title("hello")
            .format("rust")
            .access_mode(AccessMode::Unlisted)
            .expire_at(Expiration::In1Day);
        assert_eq!(paste.title.as_deref(), Some("hello"));
        assert_eq!(paste.access_mode, AccessMode::Unlisted);
        assert_eq!(paste.user_key, None);
    }
}
