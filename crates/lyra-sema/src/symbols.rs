//! Classifier symbols and the declaration model consumed by scope
//! resolution.
//!
//! Declarations are produced elsewhere (declaration resolution) and
//! live for the whole session; this module only defines their shape
//! and the `SymbolStore` boundary through which they are looked up.

use crate::scope::MemberScope;
use crate::session::ScopeSession;
use crate::types::{ClassLikeType, Ty};
use lyra_common::interner::Atom;
use lyra_common::span::Span;
use std::rc::Rc;

/// Identity of a classifier declaration.
///
/// Stable for the session's lifetime; the declaration itself is owned
/// by the symbol store and only referenced through this handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Sentinel value for an invalid symbol.
    pub const INVALID: Self = Self(0);

    /// First valid symbol id.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this symbol id is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

/// Kind of a class-like declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    /// Named or anonymous object declaration (a singleton class).
    Object,
    Annotation,
}

impl ClassKind {
    /// True for kinds that participate in the class-superclass chain.
    /// Interfaces and annotations are excluded from class-only walks.
    pub fn is_class_based(self) -> bool {
        matches!(self, ClassKind::Class | ClassKind::Object)
    }
}

/// A member declared directly inside a class-like declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: Atom,
    pub kind: MemberKind,
    /// Symbol of the declaration the member was declared in.
    pub owner: SymbolId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Function { params: Vec<Ty>, return_ty: Ty },
    Property { ty: Ty },
    NestedClass { symbol: SymbolId },
}

impl Member {
    pub fn function(name: Atom, params: Vec<Ty>, return_ty: Ty, owner: SymbolId) -> Self {
        Member {
            name,
            kind: MemberKind::Function { params, return_ty },
            owner,
        }
    }

    pub fn property(name: Atom, ty: Ty, owner: SymbolId) -> Self {
        Member {
            name,
            kind: MemberKind::Property { ty },
            owner,
        }
    }

    pub fn nested_class(name: Atom, symbol: SymbolId, owner: SymbolId) -> Self {
        Member {
            name,
            kind: MemberKind::NestedClass { symbol },
            owner,
        }
    }
}

/// A class, interface, object or annotation declaration.
#[derive(Clone, Debug)]
pub struct ClassLikeDecl {
    pub name: Atom,
    pub kind: ClassKind,
    /// Declared inside executable code. Local classes cannot be
    /// re-resolved by identity lookup, so their use-site scope is
    /// always rebuilt instead of going through the symbol-keyed cache.
    pub is_local: bool,
    /// Symbols of the declaration's own type parameters, in order.
    pub type_params: Vec<SymbolId>,
    /// Declared supertype references, unexpanded: entries may point at
    /// type aliases or be the error sentinel.
    pub supertypes: Vec<ClassLikeType>,
    pub members: Vec<Member>,
    pub span: Span,
}

impl ClassLikeDecl {
    pub fn new(name: Atom, kind: ClassKind) -> Self {
        ClassLikeDecl {
            name,
            kind,
            is_local: false,
            type_params: Vec::new(),
            supertypes: Vec::new(),
            members: Vec::new(),
            span: Span::SYNTHETIC,
        }
    }
}

/// A type-alias declaration. The expansion may itself reference
/// another alias, forming a chain that is followed iteratively.
#[derive(Clone, Debug)]
pub struct TypeAliasDecl {
    pub name: Atom,
    pub type_params: Vec<SymbolId>,
    pub expansion: ClassLikeType,
    pub span: Span,
}

impl TypeAliasDecl {
    pub fn new(name: Atom, expansion: ClassLikeType) -> Self {
        TypeAliasDecl {
            name,
            type_params: Vec::new(),
            expansion,
            span: Span::SYNTHETIC,
        }
    }
}

/// A type-parameter declaration.
///
/// Type parameters are classifiers in the declaration model, but they
/// must never reach supertype collection or scope building; doing so
/// is an internal invariant failure, not malformed user code.
#[derive(Clone, Debug)]
pub struct TypeParamDecl {
    pub name: Atom,
}

/// Tagged union over the classifier declaration variants.
#[derive(Clone, Debug)]
pub enum ClassifierDef {
    ClassLike(ClassLikeDecl),
    TypeAlias(TypeAliasDecl),
    TypeParam(TypeParamDecl),
}

impl ClassifierDef {
    pub fn name(&self) -> Atom {
        match self {
            ClassifierDef::ClassLike(decl) => decl.name,
            ClassifierDef::TypeAlias(decl) => decl.name,
            ClassifierDef::TypeParam(decl) => decl.name,
        }
    }

    pub fn as_class_like(&self) -> Option<&ClassLikeDecl> {
        match self {
            ClassifierDef::ClassLike(decl) => Some(decl),
            _ => None,
        }
    }
}

/// Boundary to the symbol store owning the declarations.
///
/// Scope resolution consumes this interface; it never owns
/// declarations itself.
pub trait SymbolStore {
    /// Resolve a symbol identity to its declaration. Unresolvable
    /// identities return `None` and are skipped by traversal.
    fn classifier(&self, symbol: SymbolId) -> Option<&ClassifierDef>;

    /// Scope-building path owned by the store itself, for stores that
    /// apply additional session-wide invariants when building scopes
    /// for globally addressable classes. The default store owns no
    /// such path and defers to the builder's default path.
    fn use_site_scope(
        &self,
        _symbol: SymbolId,
        _session: &ScopeSession,
    ) -> Option<Rc<dyn MemberScope>> {
        None
    }
}

/// Arena-backed classifier table; the provided `SymbolStore`
/// implementation.
///
/// Ids are indices offset by one so that 0 stays the invalid sentinel.
pub struct ClassifierTable {
    defs: Vec<Option<ClassifierDef>>,
}

impl ClassifierTable {
    pub fn new() -> Self {
        ClassifierTable { defs: Vec::new() }
    }

    /// Reserve an identity before its declaration exists. Needed for
    /// self-referential and mutually-referential declarations.
    pub fn reserve(&mut self) -> SymbolId {
        self.defs.push(None);
        SymbolId(self.defs.len() as u32)
    }

    /// Attach a declaration to a previously reserved identity.
    pub fn define(&mut self, symbol: SymbolId, def: ClassifierDef) {
        if let Some(slot) = self
            .defs
            .get_mut(symbol.0.wrapping_sub(1) as usize)
            .filter(|_| symbol.is_valid())
        {
            *slot = Some(def);
        }
    }

    /// Reserve and define in one step.
    pub fn register(&mut self, def: ClassifierDef) -> SymbolId {
        let symbol = self.reserve();
        self.define(symbol, def);
        symbol
    }

    pub fn get(&self, symbol: SymbolId) -> Option<&ClassifierDef> {
        if !symbol.is_valid() {
            return None;
        }
        self.defs.get((symbol.0 - 1) as usize)?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl SymbolStore for ClassifierTable {
    fn classifier(&self, symbol: SymbolId) -> Option<&ClassifierDef> {
        self.get(symbol)
    }
}
