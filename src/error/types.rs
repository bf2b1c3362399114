//! Error type definitions for binding environments

use std::io;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type EnvResult<T> = Result<T, EnvError>;

/// Typed error enum for environment mutation and the wire codec.
///
/// `Lookup` is a broken caller precondition. Everything else comes from
/// encoding or decoding a chain; a decode that fails never yields a
/// partially built chain.
#[derive(Debug, Error)]
pub enum EnvError {
    /// `replace` or `lookup` on a name bound nowhere in the chain.
    #[error("Cannot find the name {name} in the environment {env}")]
    Lookup { name: String, env: String },

    /// Failure of the input stream, including truncated input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure of the output stream while encoding.
    #[error("Encode error: write failed: {0}")]
    Write(#[source] io::Error),

    #[error("Decode error: invalid value tag {tag:#04x}")]
    InvalidTag { tag: u8 },

    #[error("Decode error: string is not valid UTF-8")]
    InvalidUtf8,

    #[error("Decode error: value nesting exceeds depth {limit}")]
    NestingTooDeep { limit: usize },

    #[error("Decode error: collection of {len} elements exceeds limit {limit}")]
    CollectionTooLarge { len: usize, limit: usize },

    #[error("Decode error: chain exceeds {limit} frames")]
    TooManyFrames { limit: usize },

    #[error("Decode error: {count} trailing bytes after chain")]
    TrailingBytes { count: usize },

    #[error("Encode error: name of {len} bytes exceeds the 65535 byte limit")]
    NameTooLong { len: usize },

    #[error("Encode error: cannot serialize {kind}")]
    Unserializable { kind: &'static str },
}

impl EnvError {
    /// True for errors raised while reading a stream. Output failures
    /// surface as `Write` and are not counted.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            EnvError::Io(_)
                | EnvError::InvalidTag { .. }
                | EnvError::InvalidUtf8
                | EnvError::NestingTooDeep { .. }
                | EnvError::CollectionTooLarge { .. }
                | EnvError::TooManyFrames { .. }
                | EnvError::TrailingBytes { .. }
        )
    }
}
