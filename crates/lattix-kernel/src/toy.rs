//! Toy backend lattice for resolution conformance testing.
//!
//! A small set of execution-context marker types with real `From`
//! conversions between them, shaped like the backends of a parallel
//! algorithms library:
//!
//! - **Cpp**: sequential host execution. Converts to the host-parallel
//!   backends, which can always take over sequential host work.
//! - **Omp**, **Tbb**: host-parallel backends. Unrelated to each other.
//! - **Cuda**: device backend. Unrelated to every host backend.
//! - **AnySystem**: converts to every other backend, so it never wins
//!   against one of them.
//! - **Sealed**: converts to nothing, not even itself. Only the identical-tag
//!   rule gives it a minimum.
//!
//! The relation is registered through `with_type_conversion`, so every edge
//! is backed by a `From` impl below.

use crate::convert::ConversionRegistry;
use crate::tag::TypeTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cpp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Omp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tbb;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cuda;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnySystem;

#[derive(Debug)]
pub struct Sealed;

impl From<Cpp> for Omp {
    fn from(_: Cpp) -> Self {
        Omp
    }
}

impl From<Cpp> for Tbb {
    fn from(_: Cpp) -> Self {
        Tbb
    }
}

macro_rules! from_any_system {
    ($($target:ident),+) => {
        $(
            impl From<AnySystem> for $target {
                fn from(_: AnySystem) -> Self {
                    $target
                }
            }
        )+
    };
}

from_any_system!(Cpp, Omp, Tbb, Cuda);

/// The backend lattice.
pub fn backends() -> ConversionRegistry {
    ConversionRegistry::new()
        .with_type_conversion::<Cpp, Omp>()
        .with_type_conversion::<Cpp, Tbb>()
        .with_type_conversion::<AnySystem, Cpp>()
        .with_type_conversion::<AnySystem, Omp>()
        .with_type_conversion::<AnySystem, Tbb>()
        .with_type_conversion::<AnySystem, Cuda>()
        .with_system(TypeTag::of::<Sealed>())
}

/// Look up a backend tag by its short type name (matching fixture files).
pub fn tag_by_name(name: &str) -> Option<TypeTag> {
    match name {
        "Cpp" => Some(TypeTag::of::<Cpp>()),
        "Omp" => Some(TypeTag::of::<Omp>()),
        "Tbb" => Some(TypeTag::of::<Tbb>()),
        "Cuda" => Some(TypeTag::of::<Cuda>()),
        "AnySystem" => Some(TypeTag::of::<AnySystem>()),
        "Sealed" => Some(TypeTag::of::<Sealed>()),
        _ => None,
    }
}

/// Get a toy world by name (matching fixture "world" field).
pub fn get_world(name: &str) -> Option<ConversionRegistry> {
    match name {
        "backends" => Some(backends()),
        "backends_closed" => Some(backends().transitive_closure()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Convertibility;

    #[test]
    fn names_match_tags() {
        for name in ["Cpp", "Omp", "Tbb", "Cuda", "AnySystem", "Sealed"] {
            assert_eq!(tag_by_name(name).unwrap().name(), name);
        }
        assert!(tag_by_name("Hip").is_none());
    }

    #[test]
    fn sealed_is_not_self_convertible() {
        let sealed = TypeTag::of::<Sealed>();
        assert!(backends().contains(&sealed));
        assert!(!backends().is_convertible(&sealed, &sealed));
    }

    #[test]
    fn closure_reaches_through_cpp() {
        let any = TypeTag::of::<AnySystem>();
        let omp = TypeTag::of::<Omp>();
        assert!(get_world("backends_closed").unwrap().is_convertible(&any, &omp));
    }
}
