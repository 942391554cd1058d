//! Registry configuration
//!
//! Extra units can be declared in a `.toml` or `.json` file and loaded on top
//! of (or instead of) the SI catalog:
//!
//! ```toml
//! include_si = true
//!
//! [[units]]
//! symbol = "ft"
//! name = "foot"
//! dimension = "length"
//! scale = 0.3048
//!
//! [[units]]
//! symbol = "Sv"
//! name = "sievert"
//! dimension = { length = 2, time = -2 }
//!
//! [[prefixed]]
//! base = "ft"
//! prefixes = ["kilo"]
//!
//! [[prefer]]
//! symbol = "cm"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::UnitDescriptor;
use crate::dimension::Dimension;
use crate::error::{ConfigError, UnitError};
use crate::prefix::Prefix;
use crate::registry::{RegistryBuilder, UnitRegistry};

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Start from the SI catalog
    #[serde(default = "default_include_si")]
    pub include_si: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<UnitDefinition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixed: Vec<PrefixedDefinition>,

    /// Canonical unit overrides
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefer: Vec<PreferredUnit>,
}

fn default_include_si() -> bool {
    true
}

fn default_scale() -> f64 {
    1.0
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            include_si: default_include_si(),
            units: Vec::new(),
            prefixed: Vec::new(),
            prefer: Vec::new(),
        }
    }
}

/// One custom unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub symbol: String,
    pub name: String,
    pub dimension: DimensionSpec,

    #[serde(default = "default_scale")]
    pub scale: f64,

    #[serde(default)]
    pub offset: f64,

    /// Symbol of a registered unit of the same dimension that `scale` and
    /// `offset` are relative to. Defaults to the reference unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<String>,
}

/// Prefixed variants of an already registered unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixedDefinition {
    pub base: String,

    /// Needed only when `base` is registered for several dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionSpec>,

    /// Prefix names or symbols
    pub prefixes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferredUnit {
    pub symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionSpec>,
}

/// A dimension written either by name (`"absorbed dose"`) or as a table of
/// exponents (`{ length = 2, time = -2 }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionSpec {
    Named(String),
    Exponents(Dimension),
}

impl DimensionSpec {
    pub fn resolve(&self) -> Result<Dimension, ConfigError> {
        match self {
            DimensionSpec::Named(name) => {
                Dimension::from_name(name).ok_or_else(|| ConfigError::UnknownDimension(name.clone()))
            }
            DimensionSpec::Exponents(dimension) => Ok(*dimension),
        }
    }
}

impl From<Dimension> for DimensionSpec {
    fn from(dimension: Dimension) -> Self {
        match dimension.name() {
            Some(name) => DimensionSpec::Named(name.to_string()),
            None => DimensionSpec::Exponents(dimension),
        }
    }
}

impl RegistryConfig {
    /// Load from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::debug!(
            path = %path.display(),
            units = config.units.len(),
            prefixed = config.prefixed.len(),
            "loaded registry config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build a frozen registry: the SI catalog if requested, then custom
    /// units, prefixed units and canonical-unit preferences, in that order.
    pub fn build_registry(&self) -> Result<UnitRegistry, ConfigError> {
        let mut builder = UnitRegistry::builder();
        if self.include_si {
            crate::si::register_si(&mut builder)?;
        }
        self.apply(&mut builder)?;
        Ok(builder.build())
    }

    /// Register everything this config declares into `builder`
    pub fn apply(&self, builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
        for definition in &self.units {
            let unit = definition.to_descriptor(builder)?;
            builder.register(unit)?;
        }

        for definition in &self.prefixed {
            let dimension = locate(builder, &definition.base, definition.dimension.as_ref())?;
            for prefix in &definition.prefixes {
                let prefix =
                    Prefix::parse(prefix).ok_or_else(|| ConfigError::UnknownPrefix(prefix.clone()))?;
                builder.register_prefixed(&definition.base, dimension, prefix)?;
            }
        }

        for preferred in &self.prefer {
            let dimension = locate(builder, &preferred.symbol, preferred.dimension.as_ref())?;
            builder.prefer(&preferred.symbol, dimension)?;
        }
        Ok(())
    }
}

impl UnitDefinition {
    fn to_descriptor(&self, builder: &RegistryBuilder) -> Result<UnitDescriptor, ConfigError> {
        let dimension = self.dimension.resolve()?;
        let unit = match &self.relative_to {
            None => UnitDescriptor::new(
                self.symbol.clone(),
                self.name.clone(),
                dimension,
                self.scale,
                self.offset,
            )?,
            Some(symbol) => {
                let reference = builder.find(symbol, dimension).ok_or_else(|| {
                    UnitError::UnknownUnit {
                        symbol: symbol.clone(),
                    }
                })?;
                UnitDescriptor::affine(
                    self.symbol.clone(),
                    self.name.clone(),
                    reference,
                    self.scale,
                    self.offset,
                )?
            }
        };
        Ok(unit)
    }
}

/// Dimension of a registered symbol, taken from `spec` when given and from
/// the first unit registered under `symbol` otherwise
fn locate(
    builder: &RegistryBuilder,
    symbol: &str,
    spec: Option<&DimensionSpec>,
) -> Result<Dimension, ConfigError> {
    match spec {
        Some(spec) => spec.resolve(),
        None => Ok(builder.lookup(symbol)?.dimension()),
    }
}
