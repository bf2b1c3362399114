//! Value representation
//!
//! Scalars are stored inline; strings and collections are reference
//! counted so cloning a value out of an environment never deep-copies it.

use super::closure::Closure;
use crate::wire::MAX_VALUE_DEPTH;
use std::rc::Rc;

/// Core value type.
#[derive(Debug, Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    /// Small unsigned integer. `Byte(1)` doubles as the wire sentinel.
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(Rc<str>),
    /// Fixed-arity product
    Tuple(Rc<[Value]>),
    /// Unordered collection, kept in insertion order
    Bag(Rc<[Value]>),
    Closure(Rc<Closure>),
}

impl Value {
    /// Placeholder written in place of values that cannot be transmitted.
    pub const SENTINEL: Value = Value::Byte(1);

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn sentinel() -> Value {
        Value::SENTINEL
    }

    pub fn byte(n: u8) -> Value {
        Value::Byte(n)
    }

    pub fn int(n: i32) -> Value {
        Value::Int(n)
    }

    pub fn long(n: i64) -> Value {
        Value::Long(n)
    }

    pub fn double(f: f64) -> Value {
        Value::Double(f)
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::Str(s.into())
    }

    pub fn tuple(elems: impl Into<Rc<[Value]>>) -> Value {
        Value::Tuple(elems.into())
    }

    pub fn bag(elems: impl Into<Rc<[Value]>>) -> Value {
        Value::Bag(elems.into())
    }

    pub fn closure(closure: Closure) -> Value {
        Value::Closure(Rc::new(closure))
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    #[inline]
    pub fn is_closure(&self) -> bool {
        matches!(self, Value::Closure(_))
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Value::Byte(1))
    }

    /// True if the value can be written to the wire: it contains no
    /// closure at any depth and nests at most [`MAX_VALUE_DEPTH`]
    /// collections.
    pub fn is_transmittable(&self) -> bool {
        let mut pending: Vec<(&Value, usize)> = vec![(self, 0)];
        while let Some((v, depth)) = pending.pop() {
            match v {
                Value::Closure(_) => return false,
                Value::Tuple(elems) | Value::Bag(elems) => {
                    if depth >= MAX_VALUE_DEPTH {
                        return false;
                    }
                    pending.extend(elems.iter().map(|e| (e, depth + 1)));
                }
                _ => {}
            }
        }
        true
    }

    /// Number of nested tuple or bag layers. Zero for a scalar.
    pub fn nesting_depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Value, usize)> = vec![(self, 0)];
        while let Some((v, depth)) = pending.pop() {
            if let Value::Tuple(elems) | Value::Bag(elems) = v {
                deepest = deepest.max(depth + 1);
                pending.extend(elems.iter().map(|e| (e, depth + 1)));
            }
        }
        deepest
    }

    /// Short kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::Bag(_) => "bag",
            Value::Closure(_) => "closure",
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Byte(n) => Some(i64::from(*n)),
            Value::Short(n) => Some(i64::from(*n)),
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&Rc<Closure>> {
        match self {
            Value::Closure(c) => Some(c),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            // Bitwise, so a decoded NaN equals the NaN that was written
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Bag(a), Value::Bag(b)) => a == b,
            // Closures are compared by identity
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}
