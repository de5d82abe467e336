use super::*;
use crate::overrides::StandardOverrideChecker;
use crate::symbols::{ClassKind, SymbolId};
use crate::types::Ty;

fn checker() -> Rc<dyn OverrideChecker> {
    Rc::new(StandardOverrideChecker)
}

fn decl_with_members(members: Vec<Member>) -> ClassLikeDecl {
    let mut decl = ClassLikeDecl::new(Atom(100), ClassKind::Class);
    decl.members = members;
    decl
}

#[test]
fn test_declared_scope_groups_by_name() {
    let name = Atom(1);
    let other = Atom(2);
    let owner = SymbolId(1);
    let scope = DeclaredMemberScope::new(&decl_with_members(vec![
        Member::function(name, vec![], Ty::class(SymbolId(9)), owner),
        Member::function(name, vec![Ty::class(SymbolId(9))], Ty::class(SymbolId(9)), owner),
        Member::property(other, Ty::class(SymbolId(9)), owner),
    ]));

    assert_eq!(scope.lookup(name).len(), 2);
    assert_eq!(scope.lookup(other).len(), 1);
    assert!(scope.lookup(Atom(3)).is_empty());
    assert_eq!(scope.member_names(), vec![name, other]);
}

#[test]
fn test_empty_scope_has_nothing() {
    let scope = EmptyMemberScope;
    assert!(scope.lookup(Atom(1)).is_empty());
    assert!(scope.member_names().is_empty());
}

#[test]
fn test_supertype_merge_earlier_scope_wins() {
    let name = Atom(1);
    let return_ty = Ty::class(SymbolId(9));
    let first = Rc::new(DeclaredMemberScope::new(&decl_with_members(vec![
        Member::function(name, vec![], return_ty.clone(), SymbolId(1)),
    ])));
    let second = Rc::new(DeclaredMemberScope::new(&decl_with_members(vec![
        Member::function(name, vec![], return_ty.clone(), SymbolId(2)),
    ])));

    let merged = SupertypeScope::new(vec![first, second], checker());
    let found = merged.lookup(name);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].owner, SymbolId(1));
}

#[test]
fn test_supertype_merge_keeps_unrelated_members() {
    let name = Atom(1);
    let return_ty = Ty::class(SymbolId(9));
    // Same name, different parameter lists: overloads, both visible.
    let first = Rc::new(DeclaredMemberScope::new(&decl_with_members(vec![
        Member::function(name, vec![], return_ty.clone(), SymbolId(1)),
    ])));
    let second = Rc::new(DeclaredMemberScope::new(&decl_with_members(vec![
        Member::function(name, vec![return_ty.clone()], return_ty.clone(), SymbolId(2)),
    ])));

    let merged = SupertypeScope::new(vec![first, second], checker());
    assert_eq!(merged.lookup(name).len(), 2);
}

#[test]
fn test_use_site_declared_wins_over_inherited() {
    let name = Atom(1);
    let return_ty = Ty::class(SymbolId(9));
    let declared: Rc<dyn MemberScope> = Rc::new(DeclaredMemberScope::new(&decl_with_members(
        vec![Member::function(name, vec![], return_ty.clone(), SymbolId(2))],
    )));
    let inherited: Rc<dyn MemberScope> = Rc::new(DeclaredMemberScope::new(&decl_with_members(
        vec![Member::function(name, vec![], return_ty.clone(), SymbolId(1))],
    )));

    let scope = UseSiteScope::new(declared, inherited, checker());
    let found = scope.lookup(name);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].owner, SymbolId(2));
}

#[test]
fn test_use_site_falls_back_to_inherited() {
    let inherited_name = Atom(1);
    let declared_name = Atom(2);
    let ty = Ty::class(SymbolId(9));
    let declared: Rc<dyn MemberScope> = Rc::new(DeclaredMemberScope::new(&decl_with_members(
        vec![Member::property(declared_name, ty.clone(), SymbolId(2))],
    )));
    let inherited: Rc<dyn MemberScope> = Rc::new(DeclaredMemberScope::new(&decl_with_members(
        vec![Member::property(inherited_name, ty.clone(), SymbolId(1))],
    )));

    let scope = UseSiteScope::new(declared, inherited, checker());
    assert_eq!(scope.lookup(inherited_name).len(), 1);
    assert_eq!(scope.lookup(declared_name).len(), 1);
    assert_eq!(scope.member_names(), vec![declared_name, inherited_name]);
}
