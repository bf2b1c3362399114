// Shared helpers for integration tests

#![allow(dead_code)]

use bindenv::{Env, SymbolTable, Value, WireConfig};

/// Flatten a chain into owned `(name, value)` pairs, head first.
pub fn pairs(env: &Env) -> Vec<(String, Option<Value>)> {
    env.iter().map(|(n, v)| (n.to_string(), v)).collect()
}

/// Build a chain whose head is the first element of `bindings`.
pub fn chain(symbols: &mut SymbolTable, bindings: &[(&str, Option<Value>)]) -> Env {
    bindings
        .iter()
        .rev()
        .fold(Env::empty(), |tail, (name, value)| {
            Env::cons(symbols.canonicalize(name), value.clone(), tail)
        })
}

/// Encode and decode through a fresh table.
pub fn roundtrip(env: &Env) -> Env {
    let bytes = env.to_bytes().expect("encode should succeed");
    Env::from_bytes(&bytes, &mut SymbolTable::new(), &WireConfig::default())
        .expect("decode should succeed")
}
