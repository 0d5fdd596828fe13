//! Error types for lattice loading.
//!
//! Resolution itself never fails: a missing minimum is the `Unrelated`
//! resolution, not an error. Only reading lattice descriptions can.

/// Errors arising while loading or validating a lattice description.
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    /// The same system name was declared twice.
    #[error("duplicate system declaration: {0}")]
    DuplicateSystem(String),

    /// A conversion refers to a system that was never declared.
    #[error("conversion {from} -> {to} names undeclared system {missing}")]
    UnknownSystem {
        from: String,
        to: String,
        missing: String,
    },

    #[error("invalid lattice toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid lattice json: {0}")]
    Json(#[from] serde_json::Error),

    /// The lattice file extension is neither `.toml` nor `.json`.
    #[error("unsupported lattice format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
