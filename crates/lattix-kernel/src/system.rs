//! System resolution with an explicit failure value.
//!
//! `minimum_system` is total: when the tags have a minimum it is returned
//! unchanged, and when they do not the caller gets `Unrelated` carrying
//! exactly the tags it passed in, so the failure can be reported at the call
//! site in terms of the caller's own arguments.

use crate::convert::Convertibility;
use crate::minimum::minimum_type;
use crate::tag::TypeTag;
use serde::{Deserialize, Serialize};

/// The tags of an argument list that has no minimum, in argument order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("no minimum system among [{}]", join_names(.systems))]
pub struct UnrelatedSystems {
    pub systems: Vec<TypeTag>,
}

impl UnrelatedSystems {
    pub fn new(systems: Vec<TypeTag>) -> Self {
        Self { systems }
    }

    pub fn systems(&self) -> &[TypeTag] {
        &self.systems
    }
}

fn join_names(tags: &[TypeTag]) -> String {
    tags.iter()
        .map(TypeTag::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of system resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Resolution {
    /// Every argument converts to `system`.
    Minimum { system: TypeTag },

    /// No single argument is a minimum of the list.
    Unrelated(UnrelatedSystems),
}

impl Resolution {
    /// Whether a minimum exists.
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Minimum { .. })
    }

    pub fn minimum(&self) -> Option<&TypeTag> {
        match self {
            Self::Minimum { system } => Some(system),
            Self::Unrelated(_) => None,
        }
    }

    pub fn unrelated(&self) -> Option<&UnrelatedSystems> {
        match self {
            Self::Minimum { .. } => None,
            Self::Unrelated(unrelated) => Some(unrelated),
        }
    }

    pub fn into_minimum(self) -> Option<TypeTag> {
        self.into_result().ok()
    }

    /// The minimum, or the unrelated set as an error.
    pub fn into_result(self) -> Result<TypeTag, UnrelatedSystems> {
        match self {
            Self::Minimum { system } => Ok(system),
            Self::Unrelated(unrelated) => Err(unrelated),
        }
    }
}

/// Resolve `tags` to their minimum, or to the unrelated set.
///
/// An empty list has no minimum and resolves to an empty unrelated set.
pub fn minimum_system<C>(oracle: &C, tags: &[TypeTag]) -> Resolution
where
    C: Convertibility + ?Sized,
{
    let resolved = tags
        .split_first()
        .and_then(|(head, rest)| minimum_type(oracle, head, rest));
    match resolved {
        Some(system) => Resolution::Minimum { system },
        None => {
            let unrelated = UnrelatedSystems::new(tags.to_vec());
            tracing::debug!(%unrelated, "no minimum system");
            Resolution::Unrelated(unrelated)
        }
    }
}
