//! PackedEnv for shipping environments across threads and workers
//!
//! `Env` shares frames through `Rc` and cannot leave its thread. A
//! `PackedEnv` owns the wire image of a chain instead, so it is `Send` and
//! `Sync`, and unpacking it on the receiving side rebuilds the chain
//! against that side's interner. Closures do not survive the trip; their
//! frames come back as the sentinel placeholder.

use super::Env;
use crate::error::EnvResult;
use crate::symbol::Canonicalize;
use crate::wire::WireConfig;

/// Owned wire image of a binding chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedEnv {
    bytes: Vec<u8>,
}

impl PackedEnv {
    pub fn pack(env: &Env) -> EnvResult<Self> {
        Ok(PackedEnv {
            bytes: env.to_bytes()?,
        })
    }

    /// Wrap bytes received from elsewhere. Validation happens on unpack.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        PackedEnv { bytes }
    }

    pub fn unpack(&self, symbols: &mut impl Canonicalize) -> EnvResult<Env> {
        self.unpack_with(symbols, &WireConfig::default())
    }

    pub fn unpack_with(
        &self,
        symbols: &mut impl Canonicalize,
        config: &WireConfig,
    ) -> EnvResult<Env> {
        Env::from_bytes(&self.bytes, symbols, config)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
