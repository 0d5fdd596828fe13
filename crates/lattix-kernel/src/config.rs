//! Lattice descriptions loaded from TOML or JSON.
//!
//! A lattice file declares systems by name and the conversions between
//! them:
//!
//! ```toml
//! transitive = true
//!
//! [[systems]]
//! name = "cpp"
//!
//! [[systems]]
//! name = "omp"
//! reflexive = true
//!
//! [[conversions]]
//! from = "cpp"
//! to = "omp"
//! ```
//!
//! Every conversion endpoint must be declared. Declared systems become
//! named tags (`TypeTag::named`).

use crate::convert::ConversionRegistry;
use crate::error::LatticeError;
use crate::tag::TypeTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeConfig {
    /// Close the declared conversions under composition.
    #[serde(default)]
    pub transitive: bool,

    #[serde(default)]
    pub systems: Vec<SystemDecl>,

    #[serde(default)]
    pub conversions: Vec<ConversionDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemDecl {
    pub name: String,

    /// Whether the system converts to itself.
    #[serde(default)]
    pub reflexive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionDecl {
    pub from: String,
    pub to: String,
}

impl LatticeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, LatticeError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, LatticeError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a lattice file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, LatticeError> {
        let content = std::fs::read_to_string(path).map_err(|source| LatticeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(LatticeError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Validate the description and build its conversion registry.
    pub fn to_registry(&self) -> Result<ConversionRegistry, LatticeError> {
        let mut declared = BTreeSet::new();
        let mut registry = ConversionRegistry::new();

        for system in &self.systems {
            if !declared.insert(system.name.as_str()) {
                return Err(LatticeError::DuplicateSystem(system.name.clone()));
            }
            let tag = TypeTag::named(system.name.as_str());
            registry.insert_system(tag.clone());
            if system.reflexive {
                registry.insert_conversion(tag.clone(), tag);
            }
        }

        for conversion in &self.conversions {
            for endpoint in [&conversion.from, &conversion.to] {
                if !declared.contains(endpoint.as_str()) {
                    return Err(LatticeError::UnknownSystem {
                        from: conversion.from.clone(),
                        to: conversion.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            registry.insert_conversion(
                TypeTag::named(conversion.from.as_str()),
                TypeTag::named(conversion.to.as_str()),
            );
        }

        tracing::debug!(
            systems = registry.len(),
            conversions = self.conversions.len(),
            transitive = self.transitive,
            "built conversion registry"
        );

        if self.transitive {
            registry = registry.transitive_closure();
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Convertibility;

    const SAMPLE: &str = r#"
transitive = true

[[systems]]
name = "cpp"

[[systems]]
name = "omp"
reflexive = true

[[systems]]
name = "any"

[[conversions]]
from = "any"
to = "cpp"

[[conversions]]
from = "cpp"
to = "omp"
"#;

    fn named(name: &str) -> TypeTag {
        TypeTag::named(name)
    }

    #[test]
    fn toml_builds_registry() {
        let registry = LatticeConfig::from_toml_str(SAMPLE)
            .unwrap()
            .to_registry()
            .unwrap();
        assert_eq!(registry.len(), 3);
        assert!(registry.is_convertible(&named("cpp"), &named("omp")));
        assert!(registry.is_convertible(&named("omp"), &named("omp")));
        assert!(!registry.is_convertible(&named("cpp"), &named("cpp")));
        // Transitive: any -> cpp -> omp.
        assert!(registry.is_convertible(&named("any"), &named("omp")));
    }

    #[test]
    fn json_matches_toml() {
        let json = r#"{
            "transitive": true,
            "systems": [{"name": "cpp"}, {"name": "omp", "reflexive": true}, {"name": "any"}],
            "conversions": [{"from": "any", "to": "cpp"}, {"from": "cpp", "to": "omp"}]
        }"#;
        assert_eq!(
            LatticeConfig::from_json_str(json).unwrap(),
            LatticeConfig::from_toml_str(SAMPLE).unwrap()
        );
    }

    #[test]
    fn duplicate_system_is_rejected() {
        let config = LatticeConfig::from_toml_str(
            "[[systems]]\nname = \"cpp\"\n[[systems]]\nname = \"cpp\"\n",
        )
        .unwrap();
        let err = config.to_registry().unwrap_err();
        assert!(matches!(err, LatticeError::DuplicateSystem(name) if name == "cpp"));
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        let config = LatticeConfig::from_toml_str(
            "[[systems]]\nname = \"cpp\"\n[[conversions]]\nfrom = \"cpp\"\nto = \"cuda\"\n",
        )
        .unwrap();
        let err = config.to_registry().unwrap_err();
        assert_eq!(
            err.to_string(),
            "conversion cpp -> cuda names undeclared system cuda"
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = LatticeConfig::from_toml_str("[[systems]]\nname = \"cpp\"\ncolor = \"red\"\n")
            .unwrap_err();
        assert!(matches!(err, LatticeError::Toml(_)));
    }

    #[test]
    fn empty_description_is_empty_registry() {
        let registry = LatticeConfig::from_toml_str("").unwrap().to_registry().unwrap();
        assert!(registry.is_empty());
    }
}
