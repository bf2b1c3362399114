//! Binary codec for values
//!
//! Every value starts with a one-byte type tag followed by a big-endian
//! payload:
//!
//! | tag  | kind   | payload                               |
//! |------|--------|---------------------------------------|
//! | 0x00 | unit   | none                                  |
//! | 0x01 | bool   | 1 byte, nonzero is true               |
//! | 0x02 | byte   | 1 byte                                |
//! | 0x03 | short  | i16                                   |
//! | 0x04 | int    | i32                                   |
//! | 0x05 | long   | i64                                   |
//! | 0x06 | float  | IEEE 754 bits as u32                  |
//! | 0x07 | double | IEEE 754 bits as u64                  |
//! | 0x08 | string | u32 byte length, UTF-8 bytes          |
//! | 0x09 | tuple  | u32 element count, elements           |
//! | 0x0A | bag    | u32 element count, elements           |
//!
//! Closures have no tag. Collections nest at most
//! [`MAX_VALUE_DEPTH`](crate::wire::MAX_VALUE_DEPTH) deep on the wire.

use super::Value;
use crate::error::{EnvError, EnvResult};
use crate::wire::{self, WireConfig, MAX_VALUE_DEPTH, PREALLOC_LIMIT};
use std::io::{Read, Write};
use std::rc::Rc;

pub const TAG_UNIT: u8 = 0x00;
pub const TAG_BOOL: u8 = 0x01;
pub const TAG_BYTE: u8 = 0x02;
pub const TAG_SHORT: u8 = 0x03;
pub const TAG_INT: u8 = 0x04;
pub const TAG_LONG: u8 = 0x05;
pub const TAG_FLOAT: u8 = 0x06;
pub const TAG_DOUBLE: u8 = 0x07;
pub const TAG_STRING: u8 = 0x08;
pub const TAG_TUPLE: u8 = 0x09;
pub const TAG_BAG: u8 = 0x0A;

impl Value {
    /// Write this value to `out`.
    ///
    /// Fails with `Unserializable` if the value is, or contains, a closure,
    /// or nests more than `MAX_VALUE_DEPTH` collections. Nothing is written
    /// for an over-deep value. Bytes already written for an enclosing
    /// collection are not rolled back when a closure turns up, so callers
    /// should check `is_transmittable` first when the stream must stay
    /// well formed.
    pub fn write(&self, out: &mut impl Write) -> EnvResult<()> {
        if self.nesting_depth() > MAX_VALUE_DEPTH {
            return Err(EnvError::unserializable("value nested past the depth limit"));
        }
        write_value(out, self)
    }

    /// Read one value from `input`, dispatching on its type tag.
    pub fn read(input: &mut impl Read, config: &WireConfig) -> EnvResult<Value> {
        read_value(input, config, 0)
    }

    /// Encode into a fresh buffer.
    pub fn to_bytes(&self) -> EnvResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(buf)
    }
}

fn write_value(out: &mut impl Write, value: &Value) -> EnvResult<()> {
    match value {
        Value::Unit => wire::write_u8(out, TAG_UNIT),
        Value::Bool(b) => {
            wire::write_u8(out, TAG_BOOL)?;
            wire::write_u8(out, u8::from(*b))
        }
        Value::Byte(n) => {
            wire::write_u8(out, TAG_BYTE)?;
            wire::write_u8(out, *n)
        }
        Value::Short(n) => {
            wire::write_u8(out, TAG_SHORT)?;
            wire::write_i16(out, *n)
        }
        Value::Int(n) => {
            wire::write_u8(out, TAG_INT)?;
            wire::write_i32(out, *n)
        }
        Value::Long(n) => {
            wire::write_u8(out, TAG_LONG)?;
            wire::write_i64(out, *n)
        }
        Value::Float(n) => {
            wire::write_u8(out, TAG_FLOAT)?;
            wire::write_u32(out, n.to_bits())
        }
        Value::Double(n) => {
            wire::write_u8(out, TAG_DOUBLE)?;
            wire::write_u64(out, n.to_bits())
        }
        Value::Str(s) => {
            wire::write_u8(out, TAG_STRING)?;
            wire::write_long_str(out, s)
        }
        Value::Tuple(elems) => write_collection(out, TAG_TUPLE, elems),
        Value::Bag(elems) => write_collection(out, TAG_BAG, elems),
        Value::Closure(_) => Err(EnvError::unserializable("closure")),
    }
}

fn write_collection(out: &mut impl Write, tag: u8, elems: &[Value]) -> EnvResult<()> {
    let len = u32::try_from(elems.len())
        .map_err(|_| EnvError::unserializable("collection over u32::MAX elements"))?;
    wire::write_u8(out, tag)?;
    wire::write_u32(out, len)?;
    for elem in elems {
        write_value(out, elem)?;
    }
    Ok(())
}

fn read_value(input: &mut impl Read, config: &WireConfig, depth: usize) -> EnvResult<Value> {
    let tag = wire::read_u8(input)?;
    let value = match tag {
        TAG_UNIT => Value::Unit,
        TAG_BOOL => Value::Bool(wire::read_u8(input)? != 0),
        TAG_BYTE => Value::Byte(wire::read_u8(input)?),
        TAG_SHORT => Value::Short(wire::read_i16(input)?),
        TAG_INT => Value::Int(wire::read_i32(input)?),
        TAG_LONG => Value::Long(wire::read_i64(input)?),
        TAG_FLOAT => Value::Float(f32::from_bits(wire::read_u32(input)?)),
        TAG_DOUBLE => Value::Double(f64::from_bits(wire::read_u64(input)?)),
        TAG_STRING => Value::Str(Rc::from(wire::read_long_str(input)?)),
        TAG_TUPLE => Value::Tuple(read_collection(input, config, depth)?),
        TAG_BAG => Value::Bag(read_collection(input, config, depth)?),
        other => return Err(EnvError::invalid_tag(other)),
    };
    Ok(value)
}

fn read_collection(
    input: &mut impl Read,
    config: &WireConfig,
    depth: usize,
) -> EnvResult<Rc<[Value]>> {
    if depth >= config.max_value_depth {
        return Err(EnvError::nesting_too_deep(config.max_value_depth));
    }
    let len = wire::read_u32(input)? as usize;
    if len > config.max_collection_len {
        return Err(EnvError::collection_too_large(
            len,
            config.max_collection_len,
        ));
    }
    let mut elems = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    for _ in 0..len {
        elems.push(read_value(input, config, depth + 1)?);
    }
    Ok(elems.into())
}
