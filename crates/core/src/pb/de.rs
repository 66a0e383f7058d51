//! Decoding of the XML replies
//!
//! The listing endpoints answer with zero or more `<paste>` documents written back to back with
//! no enclosing element. [`XmlStream`] reads such a body one record at a time. The reader is
//! given the body wrapped in a synthetic envelope element so that the end of the envelope marks
//! the end of input rather than an error.
//!
//! Text, comments and processing instructions between documents are skipped. A byte order mark
//! and an XML declaration at the start of the body are dropped before the envelope is added.
use super::model::*;
use err_derive::Error;
use log::*;
use std::convert::TryFrom;
use std::io::{self, Chain, Cursor, Read};
use std::marker::PhantomData;
use std::str::FromStr;
use xml::reader::{EventReader, ParserConfig, XmlEvent};

const ENVELOPE: &str = "pastelink-stream";
const ENVELOPE_OPEN: &[u8] = b"<pastelink-stream>";
const ENVELOPE_CLOSE: &[u8] = b"</pastelink-stream>";
const BOM: &[u8] = b"\xEF\xBB\xBF";
const DECLARATION_START: &[u8] = b"<?xml";
const DECLARATION_END: &[u8] = b"?>";

/// Errors raised while decoding a reply
#[derive(Debug, Error)]
pub enum Error {
    /// The body is not well formed XML
    #[error(display = "XML error")]
    Xml(#[error(source)] xml::reader::Error),

    /// A document with a different root element was found
    #[error(display = "Expected <{}> but found <{}>", expected, found)]
    UnexpectedElement {
        /// The root element of the records being decoded
        expected: &'static str,
        /// The element that was found
        found: String,
    },

    /// The body ended inside a document
    #[error(display = "Unterminated <{}>", _0)]
    Unterminated(&'static str),

    /// A field could not be converted to its type
    #[error(display = "Invalid value {:?} for <{}>", value, field)]
    InvalidValue {
        /// Name of the element
        field: String,
        /// Its text content
        value: String,
    },
}

/// A record that is decoded from a flat XML document
///
/// Each child element of [`XmlRecord::ROOT`] is handed to [`XmlRecord::set_field`] with its
/// text content. Unknown children should be ignored.
pub trait XmlRecord: Default {
    /// Name of the root element of one document
    const ROOT: &'static str;

    /// Stores the text of the child element `field`
    fn set_field(&mut self, field: &str, text: &str) -> Result<(), Error>;
}

/// Reads `R` without its leading byte order mark and XML declaration
///
/// The prolog is only looked at on the first read.
struct Prolog<R> {
    inner: R,
    head: Option<Cursor<Vec<u8>>>,
    started: bool,
}

impl<R: Read> Prolog<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            head: None,
            started: false,
        }
    }

    // Reads one more byte into `head`, false at the end of input
    fn pull(&mut self, head: &mut Vec<u8>) -> io::Result<bool> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    head.push(byte[0]);
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    // Returns the bytes read past the prolog
    fn strip(&mut self) -> io::Result<Vec<u8>> {
        let mut head = Vec::new();
        while head.len() < BOM.len() && self.pull(&mut head)? {}
        if head.starts_with(BOM) {
            head.drain(..BOM.len());
        }

        // `<?xml` followed by whitespace, `<?xml-stylesheet` is an ordinary instruction
        let mut start = 0;
        loop {
            while head.len() <= start && self.pull(&mut head)? {}
            match head.get(start) {
                Some(b) if b.is_ascii_whitespace() => start += 1,
                _ => break,
            }
        }
        let needed = start + DECLARATION_START.len() + 1;
        while head.len() < needed && self.pull(&mut head)? {}
        let is_declaration = head[start..].starts_with(DECLARATION_START)
            && head.get(needed - 1).map_or(false, |b| b.is_ascii_whitespace());
        if !is_declaration {
            return Ok(head);
        }

        loop {
            let body = &head[start + DECLARATION_START.len()..];
            if let Some(at) = body
                .windows(DECLARATION_END.len())
                .position(|w| w == DECLARATION_END)
            {
                let end = start + DECLARATION_START.len() + at + DECLARATION_END.len();
                trace!("Dropping {:?}", String::from_utf8_lossy(&head[start..end]));
                head.drain(..end);
                return Ok(head);
            }
            if !self.pull(&mut head)? {
                // Left to the parser to report
                return Ok(head);
            }
        }
    }
}

impl<R: Read> Read for Prolog<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.started {
            self.started = true;
            let head = self.strip()?;
            self.head = Some(Cursor::new(head));
        }
        if let Some(head) = self.head.as_mut() {
            let n = head.read(buf)?;
            if n > 0 {
                return Ok(n);
            }
            self.head = None;
        }
        self.inner.read(buf)
    }
}

type Enveloped<R> = Chain<Chain<&'static [u8], Prolog<R>>, &'static [u8]>;

/// Lazily decodes concatenated documents from `R`
///
/// Yields the records in document order. Once an error is yielded the stream ends, records
/// already yielded are not affected. The stream cannot be restarted.
pub struct XmlStream<R: Read, T> {
    events: EventReader<Enveloped<R>>,
    opened: bool,
    done: bool,
    _record: PhantomData<fn() -> T>,
}

impl<R: Read, T: XmlRecord> XmlStream<R, T> {
    /// Starts decoding `reader`. Nothing is read until the first call to `next`
    pub fn new(reader: R) -> Self {
        let enveloped = ENVELOPE_OPEN
            .chain(Prolog::new(reader))
            .chain(ENVELOPE_CLOSE);
        let config = ParserConfig::new()
            .cdata_to_characters(true)
            .ignore_comments(true);
        Self {
            events: EventReader::new_with_config(enveloped, config),
            opened: false,
            done: false,
            _record: PhantomData,
        }
    }

    fn next_record(&mut self) -> Result<Option<T>, Error> {
        loop {
            match self.events.next()? {
                XmlEvent::StartElement { name, .. } => {
                    if !self.opened && name.local_name == ENVELOPE {
                        self.opened = true;
                        continue;
                    }
                    if name.local_name != T::ROOT {
                        return Err(Error::UnexpectedElement {
                            expected: T::ROOT,
                            found: name.local_name,
                        });
                    }
                    return self.read_record().map(Some);
                }
                XmlEvent::Characters(text) | XmlEvent::CData(text) => {
                    trace!("Skipping text between <{}> records: {:?}", T::ROOT, text);
                }
                // Only the envelope closes at this level
                XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(None),
                _ => {}
            }
        }
    }

    // Called just after the root start element was consumed
    fn read_record(&mut self) -> Result<T, Error> {
        let mut record = T::default();
        let mut field: Option<(String, String)> = None;
        let mut depth = 0usize;
        loop {
            match self.events.next()? {
                XmlEvent::StartElement { name, .. } => {
                    depth += 1;
                    if depth == 1 {
                        field = Some((name.local_name, String::new()));
                    }
                }
                XmlEvent::Characters(text)
                | XmlEvent::CData(text)
                | XmlEvent::Whitespace(text) => {
                    if let Some((_, value)) = field.as_mut() {
                        value.push_str(&text);
                    }
                }
                XmlEvent::EndElement { .. } => {
                    if depth == 0 {
                        return Ok(record);
                    }
                    if depth == 1 {
                        if let Some((name, value)) = field.take() {
                            trace!("<{}><{}>{}", T::ROOT, name, value);
                            record.set_field(&name, &value)?;
                        }
                    }
                    depth -= 1;
                }
                XmlEvent::EndDocument => {
                    return Err(Error::Unterminated(T::ROOT));
                }
                _ => {}
            }
        }
    }
}

impl<R: Read, T: XmlRecord> Iterator for XmlStream<R, T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                debug!("Stopped decoding <{}> records: {}", T::ROOT, e);
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Decodes the first document of a body that holds a single record
pub fn decode_one<T: XmlRecord, R: Read>(reader: R) -> Result<Option<T>, Error> {
    XmlStream::<R, T>::new(reader).next().transpose()
}

fn invalid(field: &str, value: &str) -> Error {
    Error::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

// Empty numbers decode as zero
fn number<N: FromStr + Default>(field: &str, text: &str) -> Result<N, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(N::default());
    }
    trimmed.parse().map_err(|_| invalid(field, text))
}

fn access_mode(field: &str, text: &str) -> Result<AccessMode, Error> {
    AccessMode::try_from(number::<u8>(field, text)?).map_err(|_| invalid(field, text))
}

impl XmlRecord for PasteInfo {
    const ROOT: &'static str = "paste";

    fn set_field(&mut self, field: &str, text: &str) -> Result<(), Error> {
        match field {
            "paste_key" => self.key = text.to_string(),
            "paste_date" => self.create_ts = number(field, text)?,
            "paste_title" => self.title = text.to_string(),
            "paste_size" => self.size = number(field, text)?,
            "paste_expire_date" => self.expire_ts = number(field, text)?,
            "paste_private" => self.access_mode = access_mode(field, text)?,
            "paste_format_long" => self.format = text.to_string(),
            "paste_format_short" => self.format_code = text.to_string(),
            "paste_url" => self.url = text.to_string(),
            "paste_hits" => self.hits = number(field, text)?,
            _ => trace!("Ignoring <{}> in <paste>", field),
        }
        Ok(())
    }
}

impl XmlRecord for UserInfo {
    const ROOT: &'static str = "user";

    fn set_field(&mut self, field: &str, text: &str) -> Result<(), Error> {
        match field {
            "user_name" => self.name = text.to_string(),
            "user_format_short" => self.format_code = text.to_string(),
            "user_expiration" => {
                self.expiration = match text.trim() {
                    "" => None,
                    code => Some(code.parse().map_err(|_| invalid(field, text))?),
                }
            }
            "user_avatar_url" => self.avatar_url = text.to_string(),
            "user_private" => self.access_mode = access_mode(field, text)?,
            "user_website" => self.website = text.to_string(),
            "user_email" => self.email = text.to_string(),
            "user_location" => self.location = text.to_string(),
            "user_account_type" => {
                self.account_type = AccountType::try_from(number::<u8>(field, text)?)
                    .map_err(|_| invalid(field, text))?
            }
            _ => trace!("Ignoring <{}> in <user>", field),
        }
        Ok(())
    }
}
