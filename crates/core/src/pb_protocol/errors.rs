use err_derive::Error;

/// This is the primary error type of the library
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the request could not be sent or the reply could not be received
    ///
    /// The error of the transport is kept as is, this includes a connection that fails while
    /// a plain text reply is read
    #[error(display = "Transport error")]
    Transport(#[error(source)] reqwest::Error),

    /// Raised when reading the body of a reply fails for a reason other than the transport
    ///
    /// Failures while an XML reply is decoded are reported through [`Error::Decode`] instead
    #[error(display = "I/O error")]
    Io(#[error(source)] std::io::Error),

    /// Raised when the login form answers with a status of 400 or above
    #[error(display = "HTTP error: {}", status)]
    HttpStatus {
        /// Status code and reason such as `403 Forbidden`
        status: String,
    },

    /// Raised when the account page does not contain a dev key
    #[error(display = "No dev key found on the account page")]
    CredentialNotFound,

    /// Error raised during decoding of an XML reply
    #[error(display = "Decoding error")]
    Decode(#[error(source)] crate::pb::de::Error),

    /// Raised when the service answers with a `Bad API request, ` message
    #[error(display = "Remote API error")]
    RemoteApi(#[error(source)] crate::pb::reply::RemoteError),

    /// Raised when a reply that should hold exactly one record holds none
    #[error(display = "Reply did not contain a <{}> record", _0)]
    MissingRecord(&'static str),
}
