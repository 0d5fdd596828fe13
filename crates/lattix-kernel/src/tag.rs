//! Type tags: opaque descriptors of execution contexts.
//!
//! A tag is either a Rust type (identified by its `TypeId`) or a declared
//! name (identified by the name itself, as lattice files produce). Tags
//! carry no runtime state; they only participate in the convertibility
//! relation.

use lattix_tuple::{Cons, Nil};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum TagKey {
    Type { id: TypeId, name: Arc<str> },
    Named(Arc<str>),
}

/// An opaque execution-context tag.
///
/// Equality and hashing follow identity: two tags for the same Rust type are
/// equal, two declared tags with the same name are equal, and a Rust-type
/// tag never equals a declared one.
///
/// Ordering sorts Rust-type tags before declared tags. Declared tags sort by
/// name; Rust-type tags sort by `TypeId`, which is not stable across
/// compilations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeTag {
    key: TagKey,
}

impl TypeTag {
    /// The tag for Rust type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            key: TagKey::Type {
                id: TypeId::of::<T>(),
                name: short_type_name(type_name::<T>()).into(),
            },
        }
    }

    /// A tag identified by name alone.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self {
            key: TagKey::Named(name.into()),
        }
    }

    /// Diagnostic name. For Rust types, the type name without module paths.
    pub fn name(&self) -> &str {
        match &self.key {
            TagKey::Type { name, .. } => name,
            TagKey::Named(name) => name,
        }
    }

    /// Whether this tag stands for a Rust type rather than a declared name.
    pub fn is_type(&self) -> bool {
        matches!(self.key, TagKey::Type { .. })
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Deserialized tags are always declared (named) tags.
impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::named(name))
    }
}

/// Strip module paths from every path segment of a type name.
///
/// `alloc::vec::Vec<core::option::Option<u8>>` becomes `Vec<Option<u8>>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(path_start);
            continue;
        }
        if !(c.is_alphanumeric() || c == '_') {
            path_start = out.len() + c.len_utf8();
        }
        out.push(c);
    }
    out
}

/// A type-level list of tag types, written as a cons tuple type.
///
/// `Tuple![Omp, Cpp]` lists the tags of `Omp` and `Cpp` in order.
pub trait TagList {
    fn push_tags(out: &mut Vec<TypeTag>);

    fn tags() -> Vec<TypeTag> {
        let mut out = Vec::new();
        Self::push_tags(&mut out);
        out
    }
}

impl TagList for Nil {
    fn push_tags(_: &mut Vec<TypeTag>) {}
}

impl<H: 'static, T: TagList> TagList for Cons<H, T> {
    fn push_tags(out: &mut Vec<TypeTag>) {
        out.push(TypeTag::of::<H>());
        T::push_tags(out);
    }
}

/// Marker for tag lists with at least one element.
pub trait NonEmpty {}

impl<H, T> NonEmpty for Cons<H, T> {}

/// Tags for a list of Rust types: `tags![Omp, Cpp]`.
#[macro_export]
macro_rules! tags {
    ($($ty:ty),* $(,)?) => {
        vec![$($crate::TypeTag::of::<$ty>()),*]
    };
}
