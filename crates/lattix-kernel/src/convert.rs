//! The convertibility relation between tags.
//!
//! The resolver never inspects tags itself; every ordering decision goes
//! through a `Convertibility` oracle. The relation is directed and need not
//! be reflexive, symmetric or transitive: a tag may even fail to convert to
//! itself.
//!
//! `ConversionRegistry` is the concrete oracle: a set of declared systems
//! and directed conversion edges, in the same rows-of-worlds-and-morphisms
//! shape lattice files use.

use crate::tag::TypeTag;
use std::collections::{BTreeMap, BTreeSet};

/// Oracle deciding whether a value tagged `from` can always be used where
/// `to` is expected.
pub trait Convertibility {
    fn is_convertible(&self, from: &TypeTag, to: &TypeTag) -> bool;
}

impl<F> Convertibility for F
where
    F: Fn(&TypeTag, &TypeTag) -> bool,
{
    fn is_convertible(&self, from: &TypeTag, to: &TypeTag) -> bool {
        self(from, to)
    }
}

/// Declared systems and the directed conversions between them.
///
/// Nothing is implied: a system converts to itself only if that edge was
/// declared, and chains are not followed unless [`transitive_closure`]
/// has been applied.
///
/// [`transitive_closure`]: ConversionRegistry::transitive_closure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRegistry {
    systems: BTreeSet<TypeTag>,
    edges: BTreeMap<TypeTag, BTreeSet<TypeTag>>,
}

impl ConversionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a system with no conversions.
    pub fn with_system(mut self, tag: TypeTag) -> Self {
        self.insert_system(tag);
        self
    }

    /// Declare that `from` converts to `to`. Both become declared systems.
    pub fn with_conversion(mut self, from: TypeTag, to: TypeTag) -> Self {
        self.insert_conversion(from, to);
        self
    }

    /// Declare that `tag` converts to itself.
    pub fn with_reflexive(self, tag: TypeTag) -> Self {
        self.with_conversion(tag.clone(), tag)
    }

    /// Declare the conversion `A -> B` for Rust types that really convert.
    pub fn with_type_conversion<A, B>(self) -> Self
    where
        A: Into<B> + 'static,
        B: 'static,
    {
        self.with_conversion(TypeTag::of::<A>(), TypeTag::of::<B>())
    }

    pub fn insert_system(&mut self, tag: TypeTag) -> bool {
        self.systems.insert(tag)
    }

    pub fn insert_conversion(&mut self, from: TypeTag, to: TypeTag) {
        self.systems.insert(from.clone());
        self.systems.insert(to.clone());
        self.edges.entry(from).or_default().insert(to);
    }

    /// Close the relation under composition: if `a -> b` and `b -> c` then
    /// `a -> c`. Reflexive edges are not added.
    pub fn transitive_closure(mut self) -> Self {
        loop {
            let mut added = Vec::new();
            for (from, targets) in &self.edges {
                for mid in targets {
                    let Some(onward) = self.edges.get(mid) else {
                        continue;
                    };
                    for to in onward {
                        if to != from && !targets.contains(to) {
                            added.push((from.clone(), to.clone()));
                        }
                    }
                }
            }
            if added.is_empty() {
                return self;
            }
            for (from, to) in added {
                self.insert_conversion(from, to);
            }
        }
    }

    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.systems.contains(tag)
    }

    /// Declared systems in tag order: by name for declared tags, unspecified
    /// for Rust-type tags.
    pub fn systems(&self) -> impl Iterator<Item = &TypeTag> {
        self.systems.iter()
    }

    /// Declared conversions as `(from, to)` pairs in tag order (see
    /// [`systems`](Self::systems)).
    pub fn conversions(&self) -> impl Iterator<Item = (&TypeTag, &TypeTag)> {
        self.edges
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Convertibility for ConversionRegistry {
    fn is_convertible(&self, from: &TypeTag, to: &TypeTag) -> bool {
        self.edges
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeTag {
        TypeTag::named(name)
    }

    #[test]
    fn edges_are_directed() {
        let registry = ConversionRegistry::new().with_conversion(named("a"), named("b"));
        assert!(registry.is_convertible(&named("a"), &named("b")));
        assert!(!registry.is_convertible(&named("b"), &named("a")));
    }

    #[test]
    fn not_reflexive_unless_declared() {
        let registry = ConversionRegistry::new()
            .with_system(named("a"))
            .with_reflexive(named("b"));
        assert!(!registry.is_convertible(&named("a"), &named("a")));
        assert!(registry.is_convertible(&named("b"), &named("b")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn closure_follows_chains() {
        let registry = ConversionRegistry::new()
            .with_conversion(named("a"), named("b"))
            .with_conversion(named("b"), named("c"))
            .with_conversion(named("c"), named("d"));
        assert!(!registry.is_convertible(&named("a"), &named("d")));

        let closed = registry.transitive_closure();
        assert!(closed.is_convertible(&named("a"), &named("c")));
        assert!(closed.is_convertible(&named("a"), &named("d")));
        assert!(closed.is_convertible(&named("b"), &named("d")));
        assert!(!closed.is_convertible(&named("d"), &named("a")));
        assert_eq!(closed.conversions().count(), 6);
    }

    #[test]
    fn closure_skips_self_loops() {
        let closed = ConversionRegistry::new()
            .with_conversion(named("a"), named("b"))
            .with_conversion(named("b"), named("a"))
            .transitive_closure();
        assert!(!closed.is_convertible(&named("a"), &named("a")));
        assert!(!closed.is_convertible(&named("b"), &named("b")));
    }

    #[test]
    fn type_conversions_use_rust_types() {
        let registry = ConversionRegistry::new().with_type_conversion::<u8, u32>();
        assert!(registry.is_convertible(&TypeTag::of::<u8>(), &TypeTag::of::<u32>()));
        assert!(registry.contains(&TypeTag::of::<u32>()));
    }

    #[test]
    fn named_tags_list_in_name_order() {
        let registry = ConversionRegistry::new()
            .with_conversion(named("tbb"), named("cpp"))
            .with_system(named("omp"))
            .with_conversion(named("any"), named("tbb"));
        let systems: Vec<&str> = registry.systems().map(TypeTag::name).collect();
        assert_eq!(systems, ["any", "cpp", "omp", "tbb"]);
        let conversions: Vec<(&str, &str)> = registry
            .conversions()
            .map(|(from, to)| (from.name(), to.name()))
            .collect();
        assert_eq!(conversions, [("any", "tbb"), ("tbb", "cpp")]);
    }

    #[test]
    fn closures_are_oracles() {
        let oracle = |from: &TypeTag, to: &TypeTag| from.name() < to.name();
        assert!(oracle.is_convertible(&named("a"), &named("b")));
        assert!(!oracle.is_convertible(&named("b"), &named("a")));
    }
}
