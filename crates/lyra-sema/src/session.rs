//! Session-scoped memoization of member scopes.
//!
//! One `ScopeSession` lives for one compilation session. Entries are
//! only ever added, never removed or mutated; a (symbol, key) slot is
//! built lazily and at most once. The session is single-threaded by
//! construction (`Rc` + `RefCell`); pipelines that analyze in parallel
//! run one session per thread rather than sharing one.

use crate::diagnostics::SemaResult;
use crate::scope::MemberScope;
use crate::symbols::SymbolId;
use crate::types::ClassType;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Which scope variant is requested for a symbol.
///
/// A closed key variant rather than open-ended subclassing: equality
/// is the discriminant plus, for substitution keys, structural
/// equality of the concrete type including its argument list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Canonical use-site scope, generics left as declared parameters.
    UseSite,
    /// Scope wrapped with the substitution for one concrete
    /// instantiation.
    Substitution(ClassType),
}

/// Two-level memoization table: symbol, then scope key.
pub struct ScopeSession {
    scopes: RefCell<FxHashMap<SymbolId, FxHashMap<ScopeKey, Rc<dyn MemberScope>>>>,
}

impl ScopeSession {
    pub fn new() -> Self {
        ScopeSession {
            scopes: RefCell::new(FxHashMap::default()),
        }
    }

    /// Compute-if-absent over the (symbol, key) slot.
    ///
    /// The builder may re-enter the session for other slots, so the
    /// borrow is released while it runs. Should a re-entrant call have
    /// populated this slot in the meantime, the first stored scope
    /// wins and the later one is dropped; callers therefore always
    /// observe a single scope instance per slot.
    pub fn get_or_build(
        &self,
        symbol: SymbolId,
        key: ScopeKey,
        build: impl FnOnce() -> SemaResult<Rc<dyn MemberScope>>,
    ) -> SemaResult<Rc<dyn MemberScope>> {
        {
            let scopes = self.scopes.borrow();
            if let Some(existing) = scopes.get(&symbol).and_then(|slots| slots.get(&key)) {
                trace!(?symbol, ?key, "scope cache hit");
                return Ok(existing.clone());
            }
        }
        trace!(?symbol, ?key, "scope cache miss");
        let built = build()?;
        let mut scopes = self.scopes.borrow_mut();
        let slots = scopes.entry(symbol).or_default();
        Ok(slots.entry(key).or_insert(built).clone())
    }

    /// Number of scopes stored so far, over all symbols.
    pub fn scope_count(&self) -> usize {
        self.scopes.borrow().values().map(|slots| slots.len()).sum()
    }
}

impl Default for ScopeSession {
    fn default() -> Self {
        ScopeSession::new()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
