//! Pairwise and N-ary minimum-type resolution.
//!
//! The minimum of a set of tags is the most specific tag every other member
//! can be treated as. Between two tags the decision uses two independent
//! one-way convertibility checks:
//!
//! | a → b | b → a | minimum            |
//! |-------|-------|--------------------|
//! | yes   | no    | b                  |
//! | no    | yes   | a                  |
//! | yes   | yes   | a (left preferred) |
//! | no    | no    | none               |
//!
//! Identical tags resolve to themselves without consulting the oracle, so a
//! tag that cannot convert even to itself still has a minimum with itself.
//!
//! Longer lists fold from the right: `min(t0, min(t1, .., tn-1))`. The
//! remainder's result is checked before it is paired, so an undefined step
//! anywhere makes the whole result undefined instead of being paired as if
//! it were a tag.

use crate::convert::Convertibility;
use crate::tag::TypeTag;
use serde::{Deserialize, Serialize};

/// How two tags relate under a convertibility oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairRelation {
    /// The same tag on both sides. The oracle was not consulted.
    Identical,

    /// Only the right converts to the left: the left is the minimum.
    Left,

    /// Only the left converts to the right: the right is the minimum.
    Right,

    /// Both convert to each other. The left is the minimum.
    Mutual,

    /// Neither converts to the other. No minimum exists.
    Unrelated,
}

impl PairRelation {
    pub fn classify<C>(oracle: &C, a: &TypeTag, b: &TypeTag) -> Self
    where
        C: Convertibility + ?Sized,
    {
        if a == b {
            return Self::Identical;
        }
        match (oracle.is_convertible(a, b), oracle.is_convertible(b, a)) {
            (true, false) => Self::Right,
            (false, true) => Self::Left,
            (true, true) => Self::Mutual,
            (false, false) => Self::Unrelated,
        }
    }

    /// Which of `a` and `b` this relation selects, if either.
    pub fn select<'t>(self, a: &'t TypeTag, b: &'t TypeTag) -> Option<&'t TypeTag> {
        match self {
            Self::Identical | Self::Left | Self::Mutual => Some(a),
            Self::Right => Some(b),
            Self::Unrelated => None,
        }
    }

    pub fn is_defined(self) -> bool {
        self != Self::Unrelated
    }
}

/// The minimum of two tags, or `None` when they are unrelated.
pub fn primitive_minimum<C>(oracle: &C, a: &TypeTag, b: &TypeTag) -> Option<TypeTag>
where
    C: Convertibility + ?Sized,
{
    let relation = PairRelation::classify(oracle, a, b);
    tracing::trace!(left = %a, right = %b, ?relation, "pairwise minimum");
    relation.select(a, b).cloned()
}

/// The minimum of `head` followed by `rest`, or `None` when no single tag
/// is a minimum of the whole list.
///
/// Taking the first element separately makes the empty list
/// unrepresentable.
pub fn minimum_type<C>(oracle: &C, head: &TypeTag, rest: &[TypeTag]) -> Option<TypeTag>
where
    C: Convertibility + ?Sized,
{
    let Some((next, tail)) = rest.split_first() else {
        return Some(head.clone());
    };
    let remainder = minimum_type(oracle, next, tail)?;
    primitive_minimum(oracle, head, &remainder)
}
