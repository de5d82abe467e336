//! Generic substitution: mapping type parameters to the concrete
//! arguments supplied at a usage site, and the scope wrapper that
//! applies the mapping to inherited member signatures.

use crate::diagnostics::SemaResult;
use crate::scope::MemberScope;
use crate::session::{ScopeKey, ScopeSession};
use crate::symbols::{ClassifierDef, Member, MemberKind, SymbolId, SymbolStore};
use crate::types::{ClassLikeType, ClassType, Ty, TypeProjection};
use lyra_common::interner::Atom;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Mapping from type-parameter symbols to concrete types.
#[derive(Clone, Debug, Default)]
pub struct Substitution {
    map: FxHashMap<SymbolId, Ty>,
}

impl Substitution {
    /// Pairwise zip of a declaration's type parameters with a usage's
    /// type arguments. Star projections contribute no mapping, so the
    /// parameter stays unsubstituted downstream; excess parameters or
    /// arguments are ignored.
    pub fn zip(params: &[SymbolId], args: &[TypeProjection]) -> Self {
        let mut map = FxHashMap::default();
        for (param, arg) in params.iter().zip(args) {
            if let TypeProjection::Type(ty) = arg {
                map.insert(*param, ty.clone());
            }
        }
        Substitution { map }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Replace mapped type parameters, recursing through class-type
    /// arguments. Unmapped parameters and the error sentinel come back
    /// unchanged.
    pub fn apply(&self, ty: &Ty) -> Ty {
        match ty {
            Ty::Param(symbol) => self.map.get(symbol).cloned().unwrap_or_else(|| ty.clone()),
            Ty::ClassLike(ClassLikeType::Error) => ty.clone(),
            Ty::ClassLike(ClassLikeType::Class(class_type)) => {
                Ty::ClassLike(ClassLikeType::Class(self.apply_class(class_type)))
            }
        }
    }

    pub fn apply_class(&self, class_type: &ClassType) -> ClassType {
        ClassType {
            symbol: class_type.symbol,
            args: class_type
                .args
                .iter()
                .map(|arg| match arg {
                    TypeProjection::Star => TypeProjection::Star,
                    TypeProjection::Type(ty) => TypeProjection::Type(self.apply(ty)),
                })
                .collect(),
        }
    }

    pub fn apply_member(&self, member: &Member) -> Member {
        let kind = match &member.kind {
            MemberKind::Function { params, return_ty } => MemberKind::Function {
                params: params.iter().map(|param| self.apply(param)).collect(),
                return_ty: self.apply(return_ty),
            },
            MemberKind::Property { ty } => MemberKind::Property { ty: self.apply(ty) },
            MemberKind::NestedClass { symbol } => MemberKind::NestedClass { symbol: *symbol },
        };
        Member {
            name: member.name,
            kind,
            owner: member.owner,
        }
    }
}

/// Scope whose member signatures reflect a substitution over a base
/// scope. Substitution happens lazily at lookup time; per-name results
/// are memoized.
pub struct SubstitutionScope {
    base: Rc<dyn MemberScope>,
    substitution: Substitution,
    by_name: RefCell<FxHashMap<Atom, Vec<Member>>>,
}

impl SubstitutionScope {
    pub fn new(base: Rc<dyn MemberScope>, substitution: Substitution) -> Self {
        SubstitutionScope {
            base,
            substitution,
            by_name: RefCell::new(FxHashMap::default()),
        }
    }
}

impl MemberScope for SubstitutionScope {
    fn lookup(&self, name: Atom) -> Vec<Member> {
        if let Some(hit) = self.by_name.borrow().get(&name) {
            return hit.clone();
        }
        let substituted: Vec<Member> = self
            .base
            .lookup(name)
            .iter()
            .map(|member| self.substitution.apply_member(member))
            .collect();
        self.by_name.borrow_mut().insert(name, substituted.clone());
        substituted
    }

    fn member_names(&self) -> Vec<Atom> {
        self.base.member_names()
    }
}

/// Wrap `base_scope` with the substitution implied by `base_type`'s
/// arguments, or return it untouched when there are none.
///
/// The wrapped scope is memoized per concrete instantiation: two
/// requests for the same `base_type` against the same declaring symbol
/// return the identical scope instance.
pub fn wrap_substitution_scope_if_needed(
    base_type: &ClassType,
    base_scope: Rc<dyn MemberScope>,
    store: &dyn SymbolStore,
    session: &ScopeSession,
) -> SemaResult<Rc<dyn MemberScope>> {
    if base_type.args.is_empty() {
        return Ok(base_scope);
    }
    session.get_or_build(
        base_type.symbol,
        ScopeKey::Substitution(base_type.clone()),
        || {
            let type_params: &[SymbolId] = match store.classifier(base_type.symbol) {
                Some(ClassifierDef::ClassLike(decl)) => &decl.type_params,
                Some(ClassifierDef::TypeAlias(decl)) => &decl.type_params,
                _ => &[],
            };
            let substitution = Substitution::zip(type_params, &base_type.args);
            Ok(Rc::new(SubstitutionScope::new(base_scope, substitution)) as Rc<dyn MemberScope>)
        },
    )
}

#[cfg(test)]
#[path = "tests/substitution_tests.rs"]
mod tests;
