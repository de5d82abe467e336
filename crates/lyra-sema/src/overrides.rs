//! Override-relationship contract used when merging member scopes.
//!
//! The full signature-matching algorithm lives outside this layer;
//! scope merging only depends on the `OverrideChecker` contract. The
//! standard checker provided here matches on name, member kind and the
//! structural parameter list, which is enough for scope construction
//! and for exercising the layer stand-alone.

use crate::symbols::{Member, MemberKind};

/// How `a` relates to `b` for member-scope merging.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverrideRelation {
    /// `a` overrides `b`: a lookup that sees `a` must not also see `b`.
    Overrides,
    /// `a` is overridden by `b`.
    OverriddenBy,
    /// The two members are independent; both stay visible.
    Unrelated,
}

pub trait OverrideChecker {
    fn relationship(&self, a: &Member, b: &Member) -> OverrideRelation;
}

/// Returns true when either direction of the relationship connects the
/// two members, i.e. they compete for the same slot in a merged scope.
pub(crate) fn related(checker: &dyn OverrideChecker, a: &Member, b: &Member) -> bool {
    checker.relationship(a, b) != OverrideRelation::Unrelated
        || checker.relationship(b, a) != OverrideRelation::Unrelated
}

/// Structural checker: functions override functions with the same name
/// and parameter types, properties override properties with the same
/// name. Nested classes never override anything.
pub struct StandardOverrideChecker;

impl OverrideChecker for StandardOverrideChecker {
    fn relationship(&self, a: &Member, b: &Member) -> OverrideRelation {
        if a.name != b.name {
            return OverrideRelation::Unrelated;
        }
        match (&a.kind, &b.kind) {
            (
                MemberKind::Function { params: params_a, .. },
                MemberKind::Function { params: params_b, .. },
            ) => {
                if params_a == params_b {
                    OverrideRelation::Overrides
                } else {
                    OverrideRelation::Unrelated
                }
            }
            (MemberKind::Property { .. }, MemberKind::Property { .. }) => {
                OverrideRelation::Overrides
            }
            _ => OverrideRelation::Unrelated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolId;
    use crate::types::Ty;
    use lyra_common::interner::Atom;

    #[test]
    fn test_function_override_same_params() {
        let checker = StandardOverrideChecker;
        let a = Member::function(Atom(1), vec![], Ty::class(SymbolId(9)), SymbolId(1));
        let b = Member::function(Atom(1), vec![], Ty::Param(SymbolId(5)), SymbolId(2));
        assert_eq!(checker.relationship(&a, &b), OverrideRelation::Overrides);
    }

    #[test]
    fn test_function_overload_unrelated() {
        let checker = StandardOverrideChecker;
        let a = Member::function(
            Atom(1),
            vec![Ty::class(SymbolId(3))],
            Ty::class(SymbolId(9)),
            SymbolId(1),
        );
        let b = Member::function(Atom(1), vec![], Ty::class(SymbolId(9)), SymbolId(2));
        assert_eq!(checker.relationship(&a, &b), OverrideRelation::Unrelated);
    }

    #[test]
    fn test_property_shadows_property() {
        let checker = StandardOverrideChecker;
        let a = Member::property(Atom(2), Ty::class(SymbolId(3)), SymbolId(1));
        let b = Member::property(Atom(2), Ty::Param(SymbolId(4)), SymbolId(2));
        assert_eq!(checker.relationship(&a, &b), OverrideRelation::Overrides);
    }

    #[test]
    fn test_cross_kind_unrelated() {
        let checker = StandardOverrideChecker;
        let a = Member::property(Atom(2), Ty::class(SymbolId(3)), SymbolId(1));
        let b = Member::function(Atom(2), vec![], Ty::class(SymbolId(3)), SymbolId(2));
        assert_eq!(checker.relationship(&a, &b), OverrideRelation::Unrelated);
        assert!(related(&checker, &a, &a));
        assert!(!related(&checker, &a, &b));
    }
}
