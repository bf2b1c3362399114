//! Wire encoding of binding chains
//!
//! Layout:
//!
//! ```text
//! chain  := record*                   frames, head first
//! record := name value more
//! name   := u16 byte length, UTF-8    "" for a substituted frame
//! value  := tagged value              sentinel byte 1 for a substituted frame
//! more   := u8                        nonzero if another record follows
//! ```
//!
//! A frame whose value is absent or not transmittable is written as the
//! empty name and the sentinel. There is no overall length; the reader
//! stops at the first zero `more` byte. The empty chain is the empty
//! image: a reader that hits end of input before the first record yields
//! an empty chain, so an empty chain is only self-delimiting at the end of
//! a stream.

use super::{Env, Frame};
use crate::error::{EnvError, EnvResult};
use crate::symbol::{Canonicalize, Name};
use crate::value::Value;
use crate::wire::{self, WireConfig};
use std::io::{Read, Write};
use tracing::{debug, trace};

pub const END_OF_CHAIN: u8 = 0;
pub const MORE_FRAMES: u8 = 1;

impl Env {
    /// Write this chain to `out`, head first.
    ///
    /// Walks the chain with a cursor, so depth is bounded only by memory.
    /// The empty chain writes nothing.
    pub fn encode(&self, out: &mut impl Write) -> EnvResult<()> {
        let Some(mut frame) = self.head.as_deref() else {
            trace!(target: "bindenv::env::encode", frames = 0usize, "encoded environment");
            return Ok(());
        };

        let mut frames = 0usize;
        let mut substituted = 0usize;
        loop {
            if !write_record(out, frame)? {
                substituted += 1;
            }
            frames += 1;
            match frame.next.head.as_deref() {
                Some(next) => {
                    wire::write_u8(out, MORE_FRAMES)?;
                    frame = next;
                }
                None => {
                    wire::write_u8(out, END_OF_CHAIN)?;
                    break;
                }
            }
        }

        trace!(target: "bindenv::env::encode", frames, substituted, "encoded environment");
        Ok(())
    }

    /// Read a chain written by [`Env::encode`].
    ///
    /// Every name, the empty placeholder included, goes through `symbols`.
    /// Frames are collected first and linked only once the whole chain has
    /// been read, so an error never leaves a partial chain behind. End of
    /// input before the first record decodes as the empty chain.
    pub fn decode(
        input: &mut impl Read,
        symbols: &mut impl Canonicalize,
        config: &WireConfig,
    ) -> EnvResult<Env> {
        let Some(mut raw) = wire::read_name_or_eof(input)? else {
            trace!(target: "bindenv::env::decode", frames = 0usize, "decoded environment");
            return Ok(Env::empty());
        };

        let mut pending: Vec<(Name, Value)> = Vec::new();
        loop {
            if pending.len() >= config.max_frames {
                return Err(EnvError::too_many_frames(config.max_frames));
            }
            let name = symbols.canonicalize(&raw);
            let value = Value::read(input, config)?;
            pending.push((name, value));
            if wire::read_u8(input)? == END_OF_CHAIN {
                break;
            }
            raw = wire::read_name(input)?;
        }

        let frames = pending.len();
        let env = pending
            .into_iter()
            .rev()
            .fold(Env::empty(), |tail, (name, value)| Env::cons(name, value, tail));

        trace!(target: "bindenv::env::decode", frames, "decoded environment");
        Ok(env)
    }

    /// Encode into a fresh buffer.
    pub fn to_bytes(&self) -> EnvResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decode a buffer that holds exactly one chain.
    pub fn from_bytes(
        bytes: &[u8],
        symbols: &mut impl Canonicalize,
        config: &WireConfig,
    ) -> EnvResult<Env> {
        let mut input = bytes;
        let env = Env::decode(&mut input, symbols, config)?;
        if !input.is_empty() {
            return Err(EnvError::trailing_bytes(input.len()));
        }
        Ok(env)
    }
}

/// Write one record minus its continuation byte. Returns false if the
/// sentinel was written in place of the frame's binding.
fn write_record(out: &mut impl Write, frame: &Frame) -> EnvResult<bool> {
    let value = frame.value.borrow();
    match value.as_ref().filter(|v| v.is_transmittable()) {
        Some(v) => {
            wire::write_name(out, &frame.name)?;
            v.write(out)?;
            Ok(true)
        }
        None => {
            let kind = value.as_ref().map_or("absent", |v| v.kind());
            debug!(
                target: "bindenv::env::encode",
                name = %frame.name,
                kind,
                "substituting sentinel"
            );
            wire::write_name(out, "")?;
            Value::SENTINEL.write(out)?;
            Ok(false)
        }
    }
}
