//! Wire formats of the pastebin API
//!
//! Requests are plain `application/x-www-form-urlencoded` forms whose field names are fixed by
//! the service. Replies come in three shapes:
//!
//! - plain text that is either the payload or an error message, see [`reply`]
//! - zero or more `<paste>` documents written back to back, see [`de::XmlStream`]
//! - a single `<user>` document, see [`de::decode_one`]
//!

/// Contains the values that are sent and received
pub mod model;

/// Contains code related to the decoding of the XML replies
pub mod de;
/// Contains code related to the form encoding of requests
pub mod ser;
/// Contains the classification of plain text replies
pub mod reply;
