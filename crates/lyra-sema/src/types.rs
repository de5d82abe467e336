//! Concrete class-like types: a classifier symbol plus its type
//! arguments at one usage site.
//!
//! The `Error` variant is a sentinel for unresolved or invalid
//! references. Traversal and substitution skip it; it never causes a
//! failure on its own.

use crate::symbols::SymbolId;

/// A type as it appears in member signatures and type arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    ClassLike(ClassLikeType),
    /// An unsubstituted reference to a type parameter.
    Param(SymbolId),
}

impl Ty {
    /// A non-generic reference to a classifier.
    pub fn class(symbol: SymbolId) -> Self {
        Ty::ClassLike(ClassLikeType::Class(ClassType::new(symbol)))
    }

    pub fn error() -> Self {
        Ty::ClassLike(ClassLikeType::Error)
    }
}

/// A usage of a class-like classifier, or the error sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassLikeType {
    Class(ClassType),
    Error,
}

impl ClassLikeType {
    pub fn is_error(&self) -> bool {
        matches!(self, ClassLikeType::Error)
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            ClassLikeType::Class(class_type) => Some(class_type),
            ClassLikeType::Error => None,
        }
    }
}

/// Declaring symbol plus ordered type-argument projections.
///
/// Equality and hashing are structural, including the argument list;
/// substitution-scope memoization relies on this.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassType {
    pub symbol: SymbolId,
    pub args: Vec<TypeProjection>,
}

impl ClassType {
    pub fn new(symbol: SymbolId) -> Self {
        ClassType {
            symbol,
            args: Vec::new(),
        }
    }

    pub fn with_args(symbol: SymbolId, args: Vec<TypeProjection>) -> Self {
        ClassType { symbol, args }
    }
}

/// One type-argument position: a genuine type, or the non-type star
/// projection. Star contributes no substitution mapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeProjection {
    Star,
    Type(Ty),
}

impl TypeProjection {
    pub fn ty(&self) -> Option<&Ty> {
        match self {
            TypeProjection::Type(ty) => Some(ty),
            TypeProjection::Star => None,
        }
    }
}
