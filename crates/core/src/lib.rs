#![warn(missing_docs)]
//! # Pastelink-Core
//!
//! Pastelink-Core is a rust library for the HTTP API of pastebin.com
//!
//! Most calls are in the [`pb_protocol`] module
//!
//! A client is created from the dev key of the application
//!
//! ```no_run
//! use pastelink_core::{pb_protocol::PbClient, Credential};
//! let client = PbClient::new(Credential::new("dev_key")).unwrap();
//! ```
//!
//! After that pastes can be created with
//!
//! ```no_run
//! # use pastelink_core::{pb_protocol::PbClient, Credential};
//! # let client = PbClient::new(Credential::new("dev_key")).unwrap();
//! use pastelink_core::pb::model::{AccessMode, Paste};
//! let url = client.create_paste(&Paste::new("hello").access_mode(AccessMode::Unlisted));
//! ```
//!
//! Calls on behalf of an account need a user key from [`pb_protocol::PbClient::user_key`].
//! A lost dev key can be recovered from the website with [`devkey::get_dev_key`].
//!

/// Contains the formats and values of the wire protocol
pub mod pb;
/// Contains the client for the API
pub mod pb_protocol;
/// Contains the dev key recovery through the website
pub mod devkey;

/// This is the top level error structure of the library
///
/// Most calls will either return their `Ok(result)` or this `Err(Error)`
pub use pb_protocol::Error;

pub use pb::model::Credential;
pub use pb_protocol::Result;
