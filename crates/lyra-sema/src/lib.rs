//! Supertype resolution and member-scope construction.
//!
//! This crate computes, for any class-like declaration, the complete
//! set of visible members reachable through its inheritance hierarchy:
//!
//! - **Supertype collection**: walks declared supertype references,
//!   expanding type-alias chains, with a visited set as the cycle
//!   guard.
//! - **Scope session**: session-scoped memoization, one scope per
//!   (symbol, key) for the session's lifetime.
//! - **Substitution wrapping**: inherited scopes reflect the concrete
//!   type arguments supplied by the supertype reference.
//! - **Use-site scope building**: declared members layered over the
//!   merged inherited scopes, with override-aware deduplication.
//!
//! Parsing, declaration construction and downstream lowering are
//! external; the boundary is the `SymbolStore` trait and the exported
//! `lookup_super_types` / `UseSiteScopeBuilder` operations.

pub mod diagnostics;
pub mod overrides;
pub mod scope;
pub mod session;
pub mod substitution;
pub mod supertypes;
pub mod symbols;
pub mod types;
pub mod use_site;

pub use diagnostics::{SemaError, SemaResult};
pub use overrides::{OverrideChecker, OverrideRelation, StandardOverrideChecker};
pub use scope::{DeclaredMemberScope, EmptyMemberScope, MemberScope, SupertypeScope, UseSiteScope};
pub use session::{ScopeKey, ScopeSession};
pub use substitution::{Substitution, SubstitutionScope, wrap_substitution_scope_if_needed};
pub use supertypes::lookup_super_types;
pub use symbols::{
    ClassKind, ClassLikeDecl, ClassifierDef, ClassifierTable, Member, MemberKind, SymbolId,
    SymbolStore, TypeAliasDecl, TypeParamDecl,
};
pub use types::{ClassLikeType, ClassType, Ty, TypeProjection};
pub use use_site::UseSiteScopeBuilder;

#[cfg(test)]
pub(crate) mod test_fixtures;
