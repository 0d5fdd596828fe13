//! # Lattix Kernel
//!
//! Minimum-system resolution: given the execution-context tags a generic
//! algorithm was called with, find the single most specific tag all of them
//! convert to, or report that none exists.
//!
//! The kernel is **backend-agnostic**: tags are opaque, and the only thing
//! it knows about them is a directed convertibility relation supplied by the
//! caller.
//!
//! ## Architecture
//!
//! ```text
//! TypeTag               ← Opaque context tag (Rust type or declared name)
//!     │
//! Convertibility        ← Directed relation oracle (ConversionRegistry)
//!     │
//! primitive_minimum     ← Pairwise decision, identical-tag bypass
//!     │
//! minimum_type          ← Right fold over n ≥ 1 tags, undefined propagates
//!     │
//! minimum_system        ← Total: Minimum { system } | Unrelated(tags)
//!     │
//! Resolver              ← Memoized resolution, typed tag lists
//! ```
//!
//! ```
//! use lattix_kernel::{Resolver, toy};
//! use lattix_tuple::Tuple;
//!
//! let resolver = Resolver::new(toy::backends());
//! let omp = resolver.minimum_system_of::<Tuple![toy::Cpp, toy::Omp]>();
//! assert_eq!(omp.minimum().map(|tag| tag.name()), Some("Omp"));
//!
//! let clash = resolver.minimum_system_of::<Tuple![toy::Omp, toy::Tbb]>();
//! assert_eq!(clash.unrelated().unwrap().to_string(), "no minimum system among [Omp, Tbb]");
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod minimum;
pub mod resolver;
pub mod system;
pub mod tag;
pub mod toy;

pub use config::{ConversionDecl, LatticeConfig, SystemDecl};
pub use convert::{ConversionRegistry, Convertibility};
pub use error::LatticeError;
pub use minimum::{PairRelation, minimum_type, primitive_minimum};
pub use resolver::Resolver;
pub use system::{Resolution, UnrelatedSystems, minimum_system};
pub use tag::{NonEmpty, TagList, TypeTag};
