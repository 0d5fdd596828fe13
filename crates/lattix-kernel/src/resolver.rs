//! A memoizing resolver bound to one oracle.
//!
//! Resolution is pure in its oracle and arguments, so results are cached per
//! argument list. The cache sits behind an `RwLock`; a `Resolver` can be
//! shared across threads whenever its oracle can.

use crate::convert::Convertibility;
use crate::system::{Resolution, minimum_system};
use crate::tag::{NonEmpty, TagList, TypeTag};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

pub struct Resolver<C> {
    oracle: C,
    cache: RwLock<HashMap<Vec<TypeTag>, Resolution>>,
}

impl<C: Convertibility> Resolver<C> {
    pub fn new(oracle: C) -> Self {
        Self {
            oracle,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn oracle(&self) -> &C {
        &self.oracle
    }

    /// Resolve `tags`, consulting the cache first.
    pub fn minimum_system(&self, tags: &[TypeTag]) -> Resolution {
        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(tags)
        {
            tracing::trace!(arity = tags.len(), "resolution cache hit");
            return hit.clone();
        }

        let resolution = minimum_system(&self.oracle, tags);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tags.to_vec(), resolution.clone());
        resolution
    }

    /// The minimum of `tags`, or `None` when they are unrelated.
    pub fn minimum_type(&self, tags: &[TypeTag]) -> Option<TypeTag> {
        self.minimum_system(tags).into_minimum()
    }

    /// Resolve a type-level list of tag types, e.g. `Tuple![Omp, Cpp]`.
    pub fn minimum_system_of<L: TagList>(&self) -> Resolution {
        self.minimum_system(&L::tags())
    }

    /// The minimum of a non-empty type-level list of tag types.
    pub fn minimum_type_of<L: TagList + NonEmpty>(&self) -> Option<TypeTag> {
        self.minimum_type(&L::tags())
    }

    /// Number of cached argument lists.
    pub fn cached(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<C: Convertibility + std::fmt::Debug> std::fmt::Debug for Resolver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("oracle", &self.oracle)
            .field("cached", &self.cached())
            .finish()
    }
}
