//! String interner for identifier deduplication.
//!
//! Identifiers are interned into a pool and passed around as `Atom`
//! handles (a `u32` index). Comparisons become integer comparisons
//! instead of string comparisons, and member-name keyed maps hash a
//! single word.

use dashmap::DashMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with `==` in O(1).
/// To get the actual string back, use `Interner::resolve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Single-threaded string interner.
///
/// One instance per front-end session; index 0 is reserved for the
/// empty string so that `Atom::NONE` always resolves.
pub struct Interner {
    map: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut interner = Interner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        let empty: Arc<str> = Arc::from("");
        interner.strings.push(empty.clone());
        interner.map.insert(empty, Atom::NONE);
        interner
    }

    /// Intern a string, returning its `Atom` handle.
    /// If the string was already interned, returns the existing atom.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Resolve an `Atom` back to its string value.
    /// Returns the empty string for out-of-bounds atoms (error recovery).
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.strings
            .get(atom.0 as usize)
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    /// Try to resolve an `Atom`, returning `None` if invalid.
    #[inline]
    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        self.strings.get(atom.0 as usize).map(|s| s.as_ref())
    }

    /// Number of interned strings (including the reserved empty string).
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the interner holds only the reserved empty string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}

impl Default for Interner {
    fn default() -> Self {
        Interner::new()
    }
}

/// Thread-safe interner for pipelines that bind files in parallel.
///
/// Lookup goes through a lock-free map; the reverse table is only
/// locked on insertion and on `resolve`.
pub struct SharedInterner {
    map: DashMap<Arc<str>, Atom>,
    strings: RwLock<Vec<Arc<str>>>,
}

impl SharedInterner {
    /// Create a new shared interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let interner = SharedInterner {
            map: DashMap::new(),
            strings: RwLock::new(Vec::with_capacity(256)),
        };
        let empty: Arc<str> = Arc::from("");
        if let Ok(mut strings) = interner.strings.write() {
            strings.push(empty.clone());
        }
        interner.map.insert(empty, Atom::NONE);
        interner
    }

    /// Intern a string, returning its `Atom` handle.
    pub fn intern(&self, s: &str) -> Atom {
        if let Some(atom) = self.map.get(s) {
            return *atom;
        }
        let mut strings = match self.strings.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Re-check under the write lock; another thread may have won.
        if let Some(atom) = self.map.get(s) {
            return *atom;
        }
        let atom = Atom(strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Resolve an `Atom` back to its string value.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        let strings = match self.strings.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        strings
            .get(atom.0 as usize)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        SharedInterner::new()
    }
}
