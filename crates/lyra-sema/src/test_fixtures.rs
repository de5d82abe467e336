//! Shared fixtures for unit tests: a classifier table plus an
//! interner, with shorthand for declaring small hierarchies.

use crate::symbols::{
    ClassKind, ClassLikeDecl, ClassifierDef, ClassifierTable, Member, SymbolId, TypeAliasDecl,
    TypeParamDecl,
};
use crate::types::{ClassLikeType, ClassType, TypeProjection};
use lyra_common::interner::{Atom, Interner};

pub(crate) struct Fixture {
    pub interner: Interner,
    pub table: ClassifierTable,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            interner: Interner::new(),
            table: ClassifierTable::new(),
        }
    }

    pub fn atom(&mut self, name: &str) -> Atom {
        self.interner.intern(name)
    }

    /// A plain class with no supertypes and no members.
    pub fn class(&mut self, name: &str) -> SymbolId {
        self.class_with(name, ClassKind::Class, Vec::new())
    }

    pub fn class_with(
        &mut self,
        name: &str,
        kind: ClassKind,
        supertypes: Vec<ClassLikeType>,
    ) -> SymbolId {
        let name = self.atom(name);
        let mut decl = ClassLikeDecl::new(name, kind);
        decl.supertypes = supertypes;
        self.table.register(ClassifierDef::ClassLike(decl))
    }

    /// Reserve an identity, then define a class against it. Used for
    /// self-referential hierarchies.
    pub fn define_class(
        &mut self,
        symbol: SymbolId,
        name: &str,
        kind: ClassKind,
        supertypes: Vec<ClassLikeType>,
        members: Vec<Member>,
    ) {
        let name = self.atom(name);
        let mut decl = ClassLikeDecl::new(name, kind);
        decl.supertypes = supertypes;
        decl.members = members;
        self.table.define(symbol, ClassifierDef::ClassLike(decl));
    }

    pub fn type_param(&mut self, name: &str) -> SymbolId {
        let name = self.atom(name);
        self.table
            .register(ClassifierDef::TypeParam(TypeParamDecl { name }))
    }

    pub fn alias(
        &mut self,
        name: &str,
        type_params: Vec<SymbolId>,
        expansion: ClassLikeType,
    ) -> SymbolId {
        let name = self.atom(name);
        let mut decl = TypeAliasDecl::new(name, expansion);
        decl.type_params = type_params;
        self.table.register(ClassifierDef::TypeAlias(decl))
    }
}

/// Reference to `symbol` with no type arguments.
pub(crate) fn class_ref(symbol: SymbolId) -> ClassLikeType {
    ClassLikeType::Class(ClassType::new(symbol))
}

/// Reference to `symbol` with the given type arguments.
pub(crate) fn class_ref_with(symbol: SymbolId, args: Vec<TypeProjection>) -> ClassLikeType {
    ClassLikeType::Class(ClassType::with_args(symbol, args))
}
