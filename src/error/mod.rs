//! Unified error system for binding environments

mod builders;
mod types;

pub use types::{EnvError, EnvResult};
