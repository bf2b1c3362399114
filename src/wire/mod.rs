//! Primitive stream helpers shared by the value and environment codecs.
//!
//! All multi-byte integers are big-endian. Names use a `u16` byte length
//! prefix; value strings use a `u32` one.
//!
//! Strings are standard UTF-8, not the modified UTF-8 of Java's
//! `DataOutput::writeUTF`. The two agree for text in the Basic
//! Multilingual Plane without NUL. They differ for U+0000, which modified
//! UTF-8 writes as `C0 80`, and for characters above U+FFFF, which it
//! writes as two three-byte surrogates. Peers exchanging such names must
//! use this encoding on both ends.

mod config;

pub use config::{WireConfig, MAX_VALUE_DEPTH};

use crate::error::{EnvError, EnvResult};
use std::io::{Read, Write};

/// Upper bound on speculative pre-allocation driven by a length read
/// from the stream.
pub(crate) const PREALLOC_LIMIT: usize = 1024;

pub fn write_u8(out: &mut impl Write, byte: u8) -> EnvResult<()> {
    out.write_all(&[byte]).map_err(EnvError::write)?;
    Ok(())
}

pub fn read_u8(input: &mut impl Read) -> EnvResult<u8> {
    let mut buf = [0u8; 1];
    input.read_exact(&mut buf)?;
    Ok(buf[0])
}

macro_rules! be_int {
    ($write:ident, $read:ident, $ty:ty) => {
        pub fn $write(out: &mut impl Write, n: $ty) -> EnvResult<()> {
            out.write_all(&n.to_be_bytes())
                .map_err(EnvError::write)?;
            Ok(())
        }

        pub fn $read(input: &mut impl Read) -> EnvResult<$ty> {
            let mut buf = [0u8; std::mem::size_of::<$ty>()];
            input.read_exact(&mut buf)?;
            Ok(<$ty>::from_be_bytes(buf))
        }
    };
}

be_int!(write_u16, read_u16, u16);
be_int!(write_u32, read_u32, u32);
be_int!(write_i16, read_i16, i16);
be_int!(write_i32, read_i32, i32);
be_int!(write_i64, read_i64, i64);
be_int!(write_u64, read_u64, u64);

/// Write a name as a `u16` length followed by its UTF-8 bytes.
pub fn write_name(out: &mut impl Write, name: &str) -> EnvResult<()> {
    let len = u16::try_from(name.len()).map_err(|_| EnvError::name_too_long(name.len()))?;
    write_u16(out, len)?;
    out.write_all(name.as_bytes()).map_err(EnvError::write)?;
    Ok(())
}

pub fn read_name(input: &mut impl Read) -> EnvResult<String> {
    let len = read_u16(input)? as usize;
    read_utf8(input, len)
}

/// Read a name, or `None` if the stream ends before its first byte.
/// A stream that ends anywhere later is truncated and fails.
pub fn read_name_or_eof(input: &mut impl Read) -> EnvResult<Option<String>> {
    let mut first = [0u8; 1];
    loop {
        match input.read(&mut first) {
            Ok(0) => return Ok(None),
            Ok(_) => break,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    let len = u16::from_be_bytes([first[0], read_u8(input)?]) as usize;
    read_utf8(input, len).map(Some)
}

/// Write a value string as a `u32` length followed by its UTF-8 bytes.
pub fn write_long_str(out: &mut impl Write, s: &str) -> EnvResult<()> {
    let len = u32::try_from(s.len()).map_err(|_| EnvError::unserializable("string over 4 GiB"))?;
    write_u32(out, len)?;
    out.write_all(s.as_bytes()).map_err(EnvError::write)?;
    Ok(())
}

pub fn read_long_str(input: &mut impl Read) -> EnvResult<String> {
    let len = read_u32(input)? as usize;
    read_utf8(input, len)
}

fn read_utf8(input: &mut impl Read, len: usize) -> EnvResult<String> {
    let mut bytes = Vec::with_capacity(len.min(PREALLOC_LIMIT * 64));
    let read = input.by_ref().take(len as u64).read_to_end(&mut bytes)?;
    if read != len {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    String::from_utf8(bytes).map_err(|_| EnvError::invalid_utf8())
}
