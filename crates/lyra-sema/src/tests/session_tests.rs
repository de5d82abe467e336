use super::*;
use crate::scope::EmptyMemberScope;
use crate::types::{ClassType, Ty, TypeProjection};
use std::cell::Cell;

fn empty_scope() -> Rc<dyn MemberScope> {
    Rc::new(EmptyMemberScope)
}

#[test]
fn test_builder_runs_once_per_slot() {
    let session = ScopeSession::new();
    let calls = Cell::new(0);
    let symbol = SymbolId(1);

    let first = session
        .get_or_build(symbol, ScopeKey::UseSite, || {
            calls.set(calls.get() + 1);
            Ok(empty_scope())
        })
        .unwrap();
    let second = session
        .get_or_build(symbol, ScopeKey::UseSite, || {
            calls.set(calls.get() + 1);
            Ok(empty_scope())
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
    // The second request returns the identical instance, not a
    // value-equal rebuild.
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn test_distinct_keys_get_distinct_scopes() {
    let session = ScopeSession::new();
    let symbol = SymbolId(1);
    let instantiation = ClassType::with_args(
        symbol,
        vec![TypeProjection::Type(Ty::class(SymbolId(2)))],
    );

    let use_site = session
        .get_or_build(symbol, ScopeKey::UseSite, || Ok(empty_scope()))
        .unwrap();
    let substituted = session
        .get_or_build(symbol, ScopeKey::Substitution(instantiation.clone()), || {
            Ok(empty_scope())
        })
        .unwrap();
    let substituted_again = session
        .get_or_build(symbol, ScopeKey::Substitution(instantiation), || {
            Ok(empty_scope())
        })
        .unwrap();

    assert!(!Rc::ptr_eq(&use_site, &substituted));
    assert!(Rc::ptr_eq(&substituted, &substituted_again));
    assert_eq!(session.scope_count(), 2);
}

#[test]
fn test_substitution_keys_compare_structurally() {
    let session = ScopeSession::new();
    let symbol = SymbolId(1);
    let int_args = ClassType::with_args(symbol, vec![TypeProjection::Type(Ty::class(SymbolId(2)))]);
    let star_args = ClassType::with_args(symbol, vec![TypeProjection::Star]);

    let with_int = session
        .get_or_build(symbol, ScopeKey::Substitution(int_args), || Ok(empty_scope()))
        .unwrap();
    let with_star = session
        .get_or_build(symbol, ScopeKey::Substitution(star_args), || Ok(empty_scope()))
        .unwrap();

    // Same symbol, different argument lists: different slots.
    assert!(!Rc::ptr_eq(&with_int, &with_star));
}

#[test]
fn test_failed_build_is_not_cached() {
    let session = ScopeSession::new();
    let symbol = SymbolId(3);

    let failed: SemaResult<Rc<dyn MemberScope>> =
        session.get_or_build(symbol, ScopeKey::UseSite, || {
            Err(crate::diagnostics::SemaError::BrokenClassifierInvariant { symbol })
        });
    assert!(failed.is_err());
    assert_eq!(session.scope_count(), 0);

    // A later successful build still runs.
    let ok = session.get_or_build(symbol, ScopeKey::UseSite, || Ok(empty_scope()));
    assert!(ok.is_ok());
    assert_eq!(session.scope_count(), 1);
}

#[test]
fn test_reentrant_build_for_other_slots() {
    let session = ScopeSession::new();
    let outer = SymbolId(1);
    let inner = SymbolId(2);

    // Building one slot may build another slot first, the way the
    // use-site builder recurses into supertype scopes.
    let outer_scope = session
        .get_or_build(outer, ScopeKey::UseSite, || {
            session.get_or_build(inner, ScopeKey::UseSite, || Ok(empty_scope()))
        })
        .unwrap();
    let inner_scope = session
        .get_or_build(inner, ScopeKey::UseSite, || Ok(empty_scope()))
        .unwrap();

    assert!(Rc::ptr_eq(&outer_scope, &inner_scope));
    assert_eq!(session.scope_count(), 2);
}
