//! Closure type for the runtime
//!
//! A closure captures its environment and code for later execution. The
//! captured environment can reach arbitrary state, including the closure
//! itself, which is why closures are never written to the wire.

use crate::env::Env;
use crate::symbol::Name;
use std::fmt;
use std::rc::Rc;

/// Closure with captured environment
#[derive(Clone)]
pub struct Closure {
    /// Parameter names, in call order
    pub params: Rc<[Name]>,
    /// Opaque compiled body
    pub code: Rc<[u8]>,
    /// Captured environment, shared with the defining scope
    pub env: Env,
}

impl Closure {
    pub fn new(params: Vec<Name>, code: Vec<u8>, env: Env) -> Self {
        Closure {
            params: params.into(),
            code: code.into(),
            env,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured env may contain this closure; never recurse into it.
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("code_len", &self.code.len())
            .field("env_len", &self.env.len())
            .finish()
    }
}
