//! Scoped ownership of a reply body
//!
//! The connection of a reply is only reused once its body has been read to the end. A [`Body`]
//! drains whatever is left when it is dropped so that every path, including early returns on
//! errors, hands a clean connection back to the pool.
use super::{Error, Result};
use log::*;
use reqwest::blocking::Response;
use std::io::{self, Read};

pub(crate) struct Body<R: Read = Response> {
    source: R,
}

impl Body {
    pub(crate) fn new(response: Response) -> Self {
        trace!("Reading reply of {}", response.url());
        Self::with_source(response)
    }
}

impl<R: Read> Body<R> {
    pub(crate) fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Reads the whole body
    ///
    /// A failure of the connection part way is reported as [`Error::Transport`], any other
    /// read failure as [`Error::Io`]
    pub(crate) fn read_all(mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.read_to_end(&mut data).map_err(read_error)?;
        Ok(data)
    }
}

// The reader of a reply wraps the transport error in an io::Error
fn read_error(e: io::Error) -> Error {
    let from_transport = e
        .get_ref()
        .map_or(false, |inner| inner.is::<reqwest::Error>());
    if !from_transport {
        return Error::Io(e);
    }
    let kind = e.kind();
    match e.into_inner().map(|inner| inner.downcast::<reqwest::Error>()) {
        Some(Ok(inner)) => Error::Transport(*inner),
        Some(Err(inner)) => Error::Io(io::Error::new(kind, inner)),
        None => Error::Io(kind.into()),
    }
}

impl<R: Read> Read for Body<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.source.read(buf)
    }
}

impl<R: Read> Drop for Body<R> {
    fn drop(&mut self) {
        match io::copy(&mut self.source, &mut io::sink()) {
            Ok(0) => {}
            Ok(n) => trace!("Discarded {} unread bytes", n),
            Err(e) => debug!("Failed to drain reply: {}", e),
        }
    }
}
