//! Region table: the static dataset of drawable map regions
//!
//! Each region carries a short identifier (the state abbreviation), a
//! display name, and an opaque SVG path geometry string. The table is
//! loaded once, validated, and never mutated afterwards. The bundled USA
//! dataset is embedded at compile time; callers can also supply their own
//! table from a TOML file.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// The bundled USA dataset (50 states, simplified geometry)
const BUILTIN_USA: &str = include_str!("../data/usa.toml");

/// Errors that can occur when loading a region table
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two regions share the same identifier
    #[error("duplicate region identifier: {id}")]
    DuplicateId { id: String },

    /// The dataset defines no regions at all
    #[error("dataset contains no regions")]
    Empty,
}

/// One drawable map region
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    /// Short identifier, unique across the table (e.g. "CA")
    pub id: String,
    /// Human-readable display name (e.g. "California")
    pub name: String,
    /// SVG path geometry. Opaque to this crate; passed through to the
    /// `d` attribute of the rendered shape.
    pub d: String,
}

/// TOML structure for deserializing datasets
#[derive(Deserialize)]
struct TomlDataset {
    regions: Vec<Region>,
}

/// An ordered, immutable collection of regions with by-id lookup
///
/// Iteration order is dataset order, so rendering is deterministic.
#[derive(Debug, Clone)]
pub struct RegionTable {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl RegionTable {
    /// The bundled USA dataset
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_USA).expect("builtin dataset should be valid")
    }

    /// Load a region table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a region table from a TOML string
    ///
    /// Expects `[[regions]]` entries with `id`, `name`, and `d` fields.
    pub fn from_toml_str(content: &str) -> Result<Self, DatasetError> {
        let parsed: TomlDataset = toml::from_str(content)?;
        Self::from_regions(parsed.regions)
    }

    /// Build a table from an explicit region list, validating uniqueness
    pub fn from_regions(regions: Vec<Region>) -> Result<Self, DatasetError> {
        if regions.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut index = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            if index.insert(region.id.clone(), i).is_some() {
                return Err(DatasetError::DuplicateId {
                    id: region.id.clone(),
                });
            }
        }

        Ok(Self { regions, index })
    }

    /// Look up a region by identifier
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.index.get(id).map(|&i| &self.regions[i])
    }

    /// Whether the table contains a region with this identifier
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of regions in the table
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the table is empty (never true for a validated table)
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate regions in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
