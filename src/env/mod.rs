//! Binding environments
//!
//! An environment is a singly-linked chain of frames, each binding one
//! name to one value. New scopes prepend frames; nothing ever unlinks one.
//! Frames are shared, not copied: cloning an `Env` clones a pointer to its
//! head, so a `replace` through any handle is seen by every scope that
//! reaches the same frame.
//!
//! `Env` is `!Send`. Code that needs a chain on another thread or worker
//! ships the wire image instead (see [`PackedEnv`]). A chain has a single
//! writer; a tail reused as the head of two independently mutated chains
//! leaks `replace` effects between them.

pub mod codec;
pub mod send;

pub use send::PackedEnv;

use crate::error::{EnvError, EnvResult};
use crate::symbol::Name;
use crate::value::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{trace, warn};

/// One binding plus the rest of the chain
struct Frame {
    name: Name,
    /// `None` is an absent value
    value: RefCell<Option<Value>>,
    next: Env,
}

/// Handle to a binding chain. The empty chain has no frames.
#[derive(Clone, Default)]
pub struct Env {
    head: Option<Rc<Frame>>,
}

impl Env {
    pub fn empty() -> Self {
        Env { head: None }
    }

    /// Prepend a frame binding `name` to `value` in front of `tail`.
    pub fn cons(name: Name, value: impl Into<Option<Value>>, tail: Env) -> Self {
        Env {
            head: Some(Rc::new(Frame {
                name,
                value: RefCell::new(value.into()),
                next: tail,
            })),
        }
    }

    /// Open a nested scope: a new chain whose tail is this one.
    pub fn bind(&self, name: Name, value: impl Into<Option<Value>>) -> Self {
        Env::cons(name, value, self.clone())
    }

    /// Overwrite the value of the nearest frame bound to `name`.
    ///
    /// Frames further out with the same name are left alone. If no frame
    /// matches, nothing is mutated and a `Lookup` error is returned; that
    /// means the caller bound the name nowhere, which is a bug upstream.
    pub fn replace(&self, name: &str, value: impl Into<Option<Value>>) -> EnvResult<()> {
        match self.find(name) {
            Some(frame) => {
                *frame.value.borrow_mut() = value.into();
                trace!(target: "bindenv::env::replace", name, "replaced binding");
                Ok(())
            }
            None => {
                warn!(target: "bindenv::env::replace", name, "name not bound");
                Err(EnvError::lookup(name, self.to_string()))
            }
        }
    }

    /// Value of the nearest frame bound to `name`; `Ok(None)` if that
    /// frame's value is absent.
    pub fn lookup(&self, name: &str) -> EnvResult<Option<Value>> {
        self.find(name)
            .map(|frame| frame.value.borrow().clone())
            .ok_or_else(|| EnvError::lookup(name, self.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of frames. Walks the chain.
    pub fn len(&self) -> usize {
        self.frames().count()
    }

    /// Bindings from the head outward, shadowed ones included.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            frames: self.frames(),
        }
    }

    /// True if both handles point at the same head frame.
    pub fn ptr_eq(&self, other: &Env) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn frames(&self) -> Frames<'_> {
        Frames {
            next: self.head.as_deref(),
        }
    }

    fn find(&self, name: &str) -> Option<&Frame> {
        self.frames().find(|frame| &*frame.name == name)
    }
}

impl Drop for Env {
    // Unlink uniquely owned frames one at a time so long chains do not
    // drop recursively.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

struct Frames<'a> {
    next: Option<&'a Frame>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a Frame;

    fn next(&mut self) -> Option<&'a Frame> {
        let frame = self.next?;
        self.next = frame.next.head.as_deref();
        Some(frame)
    }
}

/// Iterator over `(name, value)` pairs, head first.
pub struct Iter<'a> {
    frames: Frames<'a>,
}

impl Iterator for Iter<'_> {
    type Item = (Name, Option<Value>);

    fn next(&mut self) -> Option<Self::Item> {
        self.frames
            .next()
            .map(|frame| (frame.name.clone(), frame.value.borrow().clone()))
    }
}

impl<'a> IntoIterator for &'a Env {
    type Item = (Name, Option<Value>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Diagnostic listing: `[ x: 1 y: null ]`. Not a serialization format.
impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for frame in self.frames() {
            match &*frame.value.borrow() {
                Some(v) => write!(f, " {}: {}", frame.name, v)?,
                None => write!(f, " {}: null", frame.name)?,
            }
        }
        write!(f, " ]")
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
