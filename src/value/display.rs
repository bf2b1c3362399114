//! Display implementation for values
//!
//! Diagnostic text only; the wire format lives in `codec`.

use crate::value::Value;
use std::fmt;

fn fmt_elems(f: &mut fmt::Formatter<'_>, elems: &[Value]) -> fmt::Result {
    for (i, v) in elems.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Byte(n) => write!(f, "{}", n),
            Value::Short(n) => write!(f, "{}", n),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Tuple(elems) => {
                write!(f, "(")?;
                fmt_elems(f, elems)?;
                write!(f, ")")
            }
            Value::Bag(elems) => {
                write!(f, "{{")?;
                fmt_elems(f, elems)?;
                write!(f, "}}")
            }
            Value::Closure(c) => write!(f, "<closure/{}>", c.arity()),
        }
    }
}
