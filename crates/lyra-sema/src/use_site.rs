//! Use-site member scope construction.
//!
//! A use-site scope combines a class's declared members with the
//! scopes inherited from its direct supertypes, each wrapped with the
//! substitution implied by the supertype reference's type arguments.
//! Transitive visibility falls out of the recursion: a supertype's own
//! use-site scope already contains its inherited members.

use crate::diagnostics::{SemaError, SemaResult};
use crate::overrides::{OverrideChecker, StandardOverrideChecker};
use crate::scope::{DeclaredMemberScope, EmptyMemberScope, MemberScope, SupertypeScope, UseSiteScope};
use crate::session::{ScopeKey, ScopeSession};
use crate::substitution::wrap_substitution_scope_if_needed;
use crate::supertypes::{expand_to_class_type, lookup_super_types};
use crate::symbols::{ClassLikeDecl, ClassifierDef, SymbolId, SymbolStore};
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Builds use-site member scopes against one store and one session.
pub struct UseSiteScopeBuilder<'a> {
    store: &'a dyn SymbolStore,
    session: &'a ScopeSession,
    checker: Rc<dyn OverrideChecker>,
    /// Symbols whose default scope is being built further up the call
    /// stack. Re-entry means a cyclic hierarchy; the inner request
    /// degrades to the declared members instead of recursing forever.
    in_progress: RefCell<FxHashSet<SymbolId>>,
}

impl<'a> UseSiteScopeBuilder<'a> {
    pub fn new(store: &'a dyn SymbolStore, session: &'a ScopeSession) -> Self {
        Self::with_checker(store, session, Rc::new(StandardOverrideChecker))
    }

    pub fn with_checker(
        store: &'a dyn SymbolStore,
        session: &'a ScopeSession,
        checker: Rc<dyn OverrideChecker>,
    ) -> Self {
        UseSiteScopeBuilder {
            store,
            session,
            checker,
            in_progress: RefCell::new(FxHashSet::default()),
        }
    }

    /// Use-site member scope of `symbol`.
    pub fn build(&self, symbol: SymbolId) -> SemaResult<Rc<dyn MemberScope>> {
        match self.store.classifier(symbol) {
            Some(ClassifierDef::ClassLike(decl)) => {
                if decl.is_local {
                    // Local declarations are not identity-addressable, so
                    // their scope is rebuilt per request instead of going
                    // through the symbol-keyed cache.
                    return self.build_default(symbol, decl);
                }
                if let Some(scope) = self.store.use_site_scope(symbol, self.session) {
                    return Ok(scope);
                }
                self.session
                    .get_or_build(symbol, ScopeKey::UseSite, || {
                        self.build_default(symbol, decl)
                    })
            }
            Some(ClassifierDef::TypeAlias(alias)) => {
                let Some(expansion) = expand_to_class_type(&alias.expansion, self.store) else {
                    // Aliases of unresolved or erroneous types expose no
                    // members.
                    return Ok(Rc::new(EmptyMemberScope));
                };
                let target_scope = self.build(expansion.symbol)?;
                wrap_substitution_scope_if_needed(&expansion, target_scope, self.store, self.session)
            }
            Some(ClassifierDef::TypeParam(_)) | None => {
                Err(SemaError::BrokenClassifierInvariant { symbol })
            }
        }
    }

    fn build_default(
        &self,
        symbol: SymbolId,
        decl: &ClassLikeDecl,
    ) -> SemaResult<Rc<dyn MemberScope>> {
        if !self.in_progress.borrow_mut().insert(symbol) {
            debug!(
                ?symbol,
                "cyclic hierarchy reached its own scope; degrading to declared members"
            );
            // The session's first-wins insert stores this degraded scope
            // under (symbol, UseSite) before the outer build finishes,
            // so on a cyclic hierarchy every request for the symbol
            // observes the same declared-members-only scope.
            return Ok(Rc::new(DeclaredMemberScope::new(decl)));
        }
        let result = self.build_default_inner(symbol, decl);
        self.in_progress.borrow_mut().remove(&symbol);
        result
    }

    fn build_default_inner(
        &self,
        symbol: SymbolId,
        decl: &ClassLikeDecl,
    ) -> SemaResult<Rc<dyn MemberScope>> {
        debug!(?symbol, "building use-site member scope");
        let declared: Rc<dyn MemberScope> = Rc::new(DeclaredMemberScope::new(decl));

        // Direct supertypes only; transitive visibility comes from the
        // recursive scope builds below, not from flattening the list.
        let direct_supers = lookup_super_types(symbol, self.store, true, false)?;
        let mut inherited: Vec<Rc<dyn MemberScope>> = Vec::with_capacity(direct_supers.len());
        for super_type in &direct_supers {
            match self.store.classifier(super_type.symbol) {
                Some(ClassifierDef::ClassLike(_)) => {}
                // References that no longer resolve to a class
                // contribute nothing.
                _ => continue,
            }
            let super_scope = self.build(super_type.symbol)?;
            inherited.push(wrap_substitution_scope_if_needed(
                super_type,
                super_scope,
                self.store,
                self.session,
            )?);
        }

        let merged: Rc<dyn MemberScope> =
            Rc::new(SupertypeScope::new(inherited, self.checker.clone()));
        Ok(Rc::new(UseSiteScope::new(
            declared,
            merged,
            self.checker.clone(),
        )))
    }
}
