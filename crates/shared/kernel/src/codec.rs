//! JSON transport codec for the domain contracts.
//!
//! Absent optional fields are omitted on encode and decode back to `None`, so a
//! decode/encode pass never invents values. A document is either one object or an
//! array of objects.

use central_domain::config::CodecConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Errors raised while moving contracts to and from their wire form.
#[central_derive::central_error]
pub enum CodecError {
    /// Malformed JSON or a value that does not fit the target shape.
    #[error("Malformed document{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Input contained nothing but whitespace.
    #[error("Empty document{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },
}

impl CodecError {
    /// One-based line and column of a decode failure, when known.
    #[must_use]
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Json { source, .. } if source.line() > 0 => {
                Some((source.line(), source.column()))
            }
            _ => None,
        }
    }
}

/// Encoder/decoder with the output style fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    pretty: bool,
}

impl Codec {
    #[must_use]
    pub const fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    #[must_use]
    pub const fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.pretty)
    }

    #[must_use]
    pub const fn is_pretty(self) -> bool {
        self.pretty
    }

    /// Decodes exactly one value.
    ///
    /// # Errors
    /// Returns [`CodecError::Empty`] for blank input and [`CodecError::Json`] when the
    /// text is not valid JSON for `T`.
    pub fn decode<T: DeserializeOwned>(&self, raw: &str) -> Result<T, CodecError> {
        if raw.trim().is_empty() {
            return Err(CodecError::Empty { context: None });
        }
        trace!(bytes = raw.len(), "Decoding value");
        Ok(serde_json::from_str(raw)?)
    }

    /// Decodes a document holding either a single object or an array of objects.
    ///
    /// # Errors
    /// Same as [`Codec::decode`]; the context names which form was being read.
    pub fn decode_document<T: DeserializeOwned>(&self, raw: &str) -> Result<Vec<T>, CodecError> {
        let items = match raw.trim_start().as_bytes().first() {
            None => return Err(CodecError::Empty { context: None }),
            Some(b'[') => self.decode::<Vec<T>>(raw).context("Reading array document")?,
            Some(_) => vec![self.decode::<T>(raw).context("Reading single-object document")?],
        };
        debug!(count = items.len(), "Decoded document");
        Ok(items)
    }

    /// Encodes a value, honoring the configured pretty-printing.
    ///
    /// # Errors
    /// Returns [`CodecError::Json`] if `T`'s `Serialize` implementation fails.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        let out = encoded.context("Encoding document")?;
        trace!(bytes = out.len(), pretty = self.pretty, "Encoded value");
        Ok(out)
    }
}
