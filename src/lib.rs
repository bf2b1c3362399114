//! # bindenv - Binding environments for in-memory evaluation
//!
//! An [`Env`] is the set of name to value bindings visible at one point of
//! evaluation: a singly-linked chain of frames, most recent first. Nested
//! scopes share their outer chain, so an in-place [`Env::replace`] is seen
//! by every scope that reaches the frame.
//!
//! Chains travel between evaluation contexts through a compact,
//! self-terminating binary encoding. Closures never go on the wire; their
//! frames are written as a placeholder (empty name, sentinel byte `1`).
//!
//! ## Quick Start
//!
//! ```
//! use bindenv::{Env, SymbolTable, Value, WireConfig};
//!
//! let mut symbols = SymbolTable::new();
//! let env = Env::empty()
//!     .bind(symbols.canonicalize("y"), Value::int(2))
//!     .bind(symbols.canonicalize("x"), Value::int(1));
//!
//! env.replace("y", Value::int(20)).unwrap();
//! assert_eq!(env.to_string(), "[ x: 1 y: 20 ]");
//!
//! let bytes = env.to_bytes().unwrap();
//! let copy = Env::from_bytes(&bytes, &mut symbols, &WireConfig::default()).unwrap();
//! assert_eq!(copy.to_string(), env.to_string());
//! ```

pub mod env;
pub mod error;
pub mod symbol;
pub mod value;
pub mod wire;

pub use env::{Env, PackedEnv};
pub use error::{EnvError, EnvResult};
pub use symbol::{intern, Canonicalize, GlobalSymbols, Name, SymbolTable};
pub use value::{Closure, Value};
pub use wire::WireConfig;
