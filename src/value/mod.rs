//! Runtime values bound in environments
//!
//! `Value` is a tagged sum over the runtime's value kinds. Each kind knows
//! how to write itself to a stream and how to be read back by dispatching
//! on a leading type tag. Closures are the one kind that never goes on the
//! wire.

pub mod closure;
pub mod codec;
pub mod display;
pub mod repr;

pub use closure::Closure;
pub use repr::Value;
