//! Builder methods for constructing EnvError instances

use super::types::EnvError;

impl EnvError {
    pub fn lookup(name: impl Into<String>, env: impl Into<String>) -> Self {
        EnvError::Lookup {
            name: name.into(),
            env: env.into(),
        }
    }

    // Decode errors
    pub fn invalid_tag(tag: u8) -> Self {
        EnvError::InvalidTag { tag }
    }

    pub fn invalid_utf8() -> Self {
        EnvError::InvalidUtf8
    }

    pub fn nesting_too_deep(limit: usize) -> Self {
        EnvError::NestingTooDeep { limit }
    }

    pub fn collection_too_large(len: usize, limit: usize) -> Self {
        EnvError::CollectionTooLarge { len, limit }
    }

    pub fn too_many_frames(limit: usize) -> Self {
        EnvError::TooManyFrames { limit }
    }

    pub fn trailing_bytes(count: usize) -> Self {
        EnvError::TrailingBytes { count }
    }

    // Encode errors
    pub fn write(source: std::io::Error) -> Self {
        EnvError::Write(source)
    }

    pub fn name_too_long(len: usize) -> Self {
        EnvError::NameTooLong { len }
    }

    pub fn unserializable(kind: &'static str) -> Self {
        EnvError::Unserializable { kind }
    }
}
