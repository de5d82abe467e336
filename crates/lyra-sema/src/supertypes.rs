//! Supertype collection: walking a classifier's declared supertype
//! references, expanding type-alias chains, into an ordered,
//! deduplicated list of concrete class-like types.
//!
//! The caller-visible entry point is `lookup_super_types`. The visited
//! set threaded through the collector is the sole cycle guard: a
//! hierarchy that (illegitimately) reaches a symbol twice terminates
//! with a partial list instead of recursing forever.

use crate::diagnostics::{SemaError, SemaResult};
use crate::substitution::Substitution;
use crate::symbols::{ClassifierDef, SymbolId, SymbolStore};
use crate::types::{ClassLikeType, ClassType};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

/// Supertypes of `symbol` in declaration order. With `deep`, the
/// transitive closure in first-encountered order, each distinct
/// ancestor type listed once at its first position. Dedup is over the
/// whole type: two instantiations of the same generic ancestor are
/// both reported. With `include_interfaces` unset, only class-based
/// ancestors survive (interfaces and annotations are filtered out).
pub fn lookup_super_types(
    symbol: SymbolId,
    store: &dyn SymbolStore,
    include_interfaces: bool,
    deep: bool,
) -> SemaResult<Vec<ClassType>> {
    let mut collector = SupertypeCollector {
        store,
        include_interfaces,
        deep,
        visited: FxHashSet::default(),
        emitted: FxHashSet::default(),
        out: Vec::new(),
    };
    collector.collect(symbol)?;
    Ok(collector.out)
}

struct SupertypeCollector<'a> {
    store: &'a dyn SymbolStore,
    include_interfaces: bool,
    deep: bool,
    /// Symbols whose supertype lists have been walked. The sole cycle
    /// guard: re-reaching a symbol terminates instead of recursing.
    visited: FxHashSet<SymbolId>,
    /// Types already present in the output, so each ancestor type is
    /// listed once, at its first-encountered position. Keyed on the
    /// whole type, not the symbol: `Comparable<Int>` and
    /// `Comparable<String>` are distinct ancestors.
    emitted: FxHashSet<ClassType>,
    out: Vec<ClassType>,
}

impl SupertypeCollector<'_> {
    fn collect(&mut self, symbol: SymbolId) -> SemaResult<()> {
        if !self.visited.insert(symbol) {
            // Already walked: a repeated ancestor in a deep closure, or
            // a cyclic hierarchy. Either way, stop here.
            return Ok(());
        }
        match self.store.classifier(symbol) {
            Some(ClassifierDef::ClassLike(decl)) => {
                let direct: SmallVec<[ClassType; 4]> = decl
                    .supertypes
                    .iter()
                    .filter_map(|super_ref| expand_to_class_type(super_ref, self.store))
                    .filter(|candidate| {
                        self.include_interfaces || is_class_based(candidate, self.store)
                    })
                    .collect();
                debug!(?symbol, count = direct.len(), "collected direct supertypes");
                for super_type in &direct {
                    if self.emitted.insert(super_type.clone()) {
                        self.out.push(super_type.clone());
                    }
                }
                if self.deep {
                    for super_type in &direct {
                        self.collect(super_type.symbol)?;
                    }
                }
                Ok(())
            }
            Some(ClassifierDef::TypeAlias(decl)) => {
                // The alias itself contributes no members or supertypes;
                // it is transparent for hierarchy purposes.
                let Some(expansion) = expand_to_class_type(&decl.expansion, self.store) else {
                    return Ok(());
                };
                self.collect(expansion.symbol)
            }
            Some(ClassifierDef::TypeParam(_)) => {
                Err(SemaError::BrokenClassifierInvariant { symbol })
            }
            // Unresolvable identities contribute nothing.
            None => Ok(()),
        }
    }
}

/// Expand a supertype reference through type-alias chains until a
/// non-alias class-like type is reached. Alias type arguments are
/// substituted onto the alias's own parameters at each hop, so an
/// alias may rename or reorder parameters relative to its target.
///
/// Error types, unresolvable references and cyclic alias chains all
/// expand to `None` and are excluded by the caller.
pub(crate) fn expand_to_class_type(
    reference: &ClassLikeType,
    store: &dyn SymbolStore,
) -> Option<ClassType> {
    let mut current = reference.as_class()?.clone();
    let mut seen: FxHashSet<SymbolId> = FxHashSet::default();
    loop {
        match store.classifier(current.symbol) {
            Some(ClassifierDef::TypeAlias(alias)) => {
                if !seen.insert(current.symbol) {
                    // Cyclic alias chain; nothing concrete to expand to.
                    return None;
                }
                let target = alias.expansion.as_class()?;
                let substitution = Substitution::zip(&alias.type_params, &current.args);
                current = substitution.apply_class(target);
            }
            Some(ClassifierDef::ClassLike(_)) => return Some(current),
            _ => return None,
        }
    }
}

fn is_class_based(candidate: &ClassType, store: &dyn SymbolStore) -> bool {
    match store.classifier(candidate.symbol) {
        Some(ClassifierDef::ClassLike(decl)) => decl.kind.is_class_based(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/supertypes_tests.rs"]
mod tests;
