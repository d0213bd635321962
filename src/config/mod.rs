//! Domain configuration loading and management
//!
//! A domain is one listable resource type (restaurants, lodgings, ...). Its
//! configuration is the only domain-specific knowledge the core needs: the
//! ordered sort safelist and the filter shape table. Adding a new listable
//! domain means adding one configuration, not new logic.
//!
//! Configurations are process-wide constants: built once at startup, either
//! from the built-in tables ([`DomainRegistry::builtin`]) or from a YAML
//! file, and never re-derived per request.

pub mod domains;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, SiftResult, SortError};
use crate::core::field::FieldRule;
use crate::core::sort::{SortSpec, accepted_tokens};

pub use domains::ListDomain;

/// Configuration for one listable domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Domain name (e.g., "restaurants")
    pub name: String,

    /// Ordered, closed safelist of sortable field names
    pub sort_fields: Vec<String>,

    /// Recognized filter fields and their coercion rules, in declared order
    pub shape: IndexMap<String, FieldRule>,
}

impl DomainConfig {
    /// Build and validate a domain configuration
    pub fn new(
        name: &str,
        sort_fields: &[&str],
        shape: IndexMap<String, FieldRule>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            name: name.to_string(),
            sort_fields: sort_fields.iter().map(|s| s.to_string()).collect(),
            shape,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants a well-formed domain must hold
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sort_fields.is_empty() {
            return Err(ConfigError::EmptySortFields {
                domain: self.name.clone(),
            });
        }

        for (i, field) in self.sort_fields.iter().enumerate() {
            if self.sort_fields[..i].contains(field) {
                return Err(ConfigError::DuplicateSortField {
                    domain: self.name.clone(),
                    field: field.clone(),
                });
            }
        }

        for (field, rule) in &self.shape {
            if field == "sortBy" && *rule != FieldRule::SortBy {
                return Err(ConfigError::InvalidShapeRule {
                    domain: self.name.clone(),
                    field: field.clone(),
                    message: "the sortBy field must use the sort_by rule".to_string(),
                });
            }
            if let FieldRule::OneOf { values } = rule {
                if values.is_empty() {
                    return Err(ConfigError::InvalidShapeRule {
                        domain: self.name.clone(),
                        field: field.clone(),
                        message: "one_of requires at least one value".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate a raw sort string against this domain's safelist
    pub fn parse_sort(&self, raw: &str) -> Result<SortSpec, SortError> {
        SortSpec::parse("sortBy", raw, &self.sort_fields)
    }

    /// Every accepted sort token, in safelist order (documentation surface)
    pub fn sort_tokens(&self) -> Vec<String> {
        accepted_tokens(&self.sort_fields)
    }
}

/// Shape of a YAML configuration document
#[derive(Debug, Deserialize)]
struct RegistryFile {
    domains: Vec<DomainConfig>,
}

/// Immutable name-keyed table of domain configurations
#[derive(Debug, Clone, Default)]
pub struct DomainRegistry {
    domains: IndexMap<String, DomainConfig>,
}

impl DomainRegistry {
    /// Build a registry, validating every domain and rejecting duplicates
    pub fn new(configs: Vec<DomainConfig>) -> Result<Self, ConfigError> {
        let mut domains = IndexMap::new();
        for config in configs {
            config.validate()?;
            let name = config.name.clone();
            if domains.insert(name.clone(), config).is_some() {
                return Err(ConfigError::DuplicateDomain { name });
            }
        }
        Ok(Self { domains })
    }

    /// The seven built-in platform domains
    pub fn builtin() -> Self {
        Self::new(domains::all()).expect("builtin domain tables are valid")
    }

    /// Load a registry from a YAML string
    pub fn from_yaml_str(yaml: &str) -> SiftResult<Self> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;
        Ok(Self::new(file.domains)?)
    }

    /// Load a registry from a YAML file
    pub fn from_yaml_file(path: &str) -> SiftResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Look up a domain by name
    pub fn get(&self, name: &str) -> Option<&DomainConfig> {
        self.domains.get(name)
    }

    /// Look up a domain by name, failing with a config error
    pub fn require(&self, name: &str) -> Result<&DomainConfig, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::UnknownDomain {
            name: name.to_string(),
        })
    }

    /// Registered domain names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
