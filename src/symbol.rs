//! Name interning for binding environments.
//!
//! Every name that enters a chain through the decoder passes through a
//! [`Canonicalize`] implementation, so equal names share one allocation and
//! compare in O(1) on the common path.

use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::rc::Rc;

/// A canonical binding name.
pub type Name = Rc<str>;

/// The canonicalization step the decoder needs from an interner.
///
/// Implementations must be idempotent: canonicalizing an already
/// canonical name returns the same instance.
pub trait Canonicalize {
    fn canonicalize(&mut self, name: &str) -> Name;
}

/// Symbol interning table
///
/// Uses `Rc<str>` for names so the table and every chain that binds the
/// name share a single allocation.
#[derive(Debug, Default)]
pub struct SymbolTable {
    names: FxHashSet<Rc<str>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            names: FxHashSet::default(),
        }
    }

    /// Intern a name, returning the shared instance
    pub fn canonicalize(&mut self, name: &str) -> Name {
        if let Some(existing) = self.names.get(name) {
            return existing.clone();
        }

        let shared: Rc<str> = Rc::from(name);
        self.names.insert(shared.clone());
        shared
    }

    /// Check if a name has been interned
    pub fn get(&self, name: &str) -> Option<Name> {
        self.names.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Canonicalize for SymbolTable {
    fn canonicalize(&mut self, name: &str) -> Name {
        SymbolTable::canonicalize(self, name)
    }
}

thread_local! {
    static GLOBAL_SYMBOLS: RefCell<SymbolTable> = RefCell::new(SymbolTable::new());
}

/// Intern a name in the thread-local global table.
///
/// Names interned here live for the lifetime of the thread.
pub fn intern(name: &str) -> Name {
    GLOBAL_SYMBOLS.with(|table| table.borrow_mut().canonicalize(name))
}

/// Handle to the thread-local global table, for decoders that have no
/// table of their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalSymbols;

impl Canonicalize for GlobalSymbols {
    fn canonicalize(&mut self, name: &str) -> Name {
        intern(name)
    }
}
