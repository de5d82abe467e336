//! Member scopes: lookup structures answering "what members named X
//! are visible here".
//!
//! Scopes are built once (see `ScopeSession`) and shared behind `Rc`;
//! consumers borrow them and receive cloned member values from
//! lookups. Composition, not mutation: a use-site scope layers the
//! declared scope over a merged view of the inherited ones.

use crate::overrides::{OverrideChecker, related};
use crate::symbols::{ClassLikeDecl, Member};
use indexmap::{IndexMap, IndexSet};
use lyra_common::interner::Atom;
use std::rc::Rc;

/// Opaque member-lookup structure.
pub trait MemberScope {
    /// All members named `name` visible in this scope, highest
    /// precedence first.
    fn lookup(&self, name: Atom) -> Vec<Member>;

    /// Names with at least one visible member, in deterministic order.
    fn member_names(&self) -> Vec<Atom>;
}

impl std::fmt::Debug for dyn MemberScope + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberScope").finish_non_exhaustive()
    }
}

/// Scope over the members declared directly in one declaration.
pub struct DeclaredMemberScope {
    members: IndexMap<Atom, Vec<Member>>,
}

impl DeclaredMemberScope {
    pub fn new(decl: &ClassLikeDecl) -> Self {
        let mut members: IndexMap<Atom, Vec<Member>> = IndexMap::new();
        for member in &decl.members {
            members.entry(member.name).or_default().push(member.clone());
        }
        DeclaredMemberScope { members }
    }
}

impl MemberScope for DeclaredMemberScope {
    fn lookup(&self, name: Atom) -> Vec<Member> {
        self.members.get(&name).cloned().unwrap_or_default()
    }

    fn member_names(&self) -> Vec<Atom> {
        self.members.keys().copied().collect()
    }
}

/// Scope with no members; stands in for the scope of an unresolvable
/// or cyclic target.
pub struct EmptyMemberScope;

impl MemberScope for EmptyMemberScope {
    fn lookup(&self, _name: Atom) -> Vec<Member> {
        Vec::new()
    }

    fn member_names(&self) -> Vec<Atom> {
        Vec::new()
    }
}

/// Merged view over the scopes of a class's direct supertypes.
///
/// Supertypes are consulted in declaration order; when two inherited
/// members compete for the same slot, the earlier supertype wins.
pub struct SupertypeScope {
    scopes: Vec<Rc<dyn MemberScope>>,
    checker: Rc<dyn OverrideChecker>,
}

impl SupertypeScope {
    pub fn new(scopes: Vec<Rc<dyn MemberScope>>, checker: Rc<dyn OverrideChecker>) -> Self {
        SupertypeScope { scopes, checker }
    }
}

impl MemberScope for SupertypeScope {
    fn lookup(&self, name: Atom) -> Vec<Member> {
        let mut kept: Vec<Member> = Vec::new();
        for scope in &self.scopes {
            for candidate in scope.lookup(name) {
                let taken = kept
                    .iter()
                    .any(|existing| related(&*self.checker, existing, &candidate));
                if !taken {
                    kept.push(candidate);
                }
            }
        }
        kept
    }

    fn member_names(&self) -> Vec<Atom> {
        let mut names: IndexSet<Atom> = IndexSet::new();
        for scope in &self.scopes {
            names.extend(scope.member_names());
        }
        names.into_iter().collect()
    }
}

/// The use-site view of a class: declared members first, inherited
/// members behind them unless a declared member overrides them.
pub struct UseSiteScope {
    declared: Rc<dyn MemberScope>,
    inherited: Rc<dyn MemberScope>,
    checker: Rc<dyn OverrideChecker>,
}

impl UseSiteScope {
    pub fn new(
        declared: Rc<dyn MemberScope>,
        inherited: Rc<dyn MemberScope>,
        checker: Rc<dyn OverrideChecker>,
    ) -> Self {
        UseSiteScope {
            declared,
            inherited,
            checker,
        }
    }
}

impl MemberScope for UseSiteScope {
    fn lookup(&self, name: Atom) -> Vec<Member> {
        let mut result = self.declared.lookup(name);
        let declared_count = result.len();
        for candidate in self.inherited.lookup(name) {
            let overridden = result[..declared_count]
                .iter()
                .any(|declared| related(&*self.checker, declared, &candidate));
            if !overridden {
                result.push(candidate);
            }
        }
        result
    }

    fn member_names(&self) -> Vec<Atom> {
        let mut names: IndexSet<Atom> = IndexSet::new();
        names.extend(self.declared.member_names());
        names.extend(self.inherited.member_names());
        names.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;
