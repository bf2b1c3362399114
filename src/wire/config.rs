//! Wire codec configuration
//!
//! Limits applied while decoding untrusted streams.

/// Deepest tuple/bag nesting the encoder writes, and the default decode
/// limit. A value nested deeper is not transmittable.
pub const MAX_VALUE_DEPTH: usize = 64;

/// Decoding limits for environments and values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireConfig {
    /// Maximum number of frames in one chain (default: unlimited)
    pub max_frames: usize,
    /// Maximum tuple/bag nesting depth (default: 64)
    pub max_value_depth: usize,
    /// Maximum element count of one tuple or bag (default: 16 Mi)
    pub max_collection_len: usize,
}

impl WireConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self {
            max_frames: usize::MAX,
            max_value_depth: MAX_VALUE_DEPTH,
            max_collection_len: 16 * 1024 * 1024,
        }
    }

    pub fn with_max_frames(mut self, frames: usize) -> Self {
        self.max_frames = frames;
        self
    }

    pub fn with_max_value_depth(mut self, depth: usize) -> Self {
        self.max_value_depth = depth;
        self
    }

    pub fn with_max_collection_len(mut self, len: usize) -> Self {
        self.max_collection_len = len;
        self
    }
}

impl Default for WireConfig {
    fn default() -> Self {
        Self::new()
    }
}
