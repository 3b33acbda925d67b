//! Lookup of clickable areas by identifier.
//!
//! The registry is built once from the geographic feature source and is
//! immutable afterwards. Duplicate codes keep the first occurrence, matching
//! the backend's insert-or-ignore ingestion.

use std::collections::HashMap;

use geodata::{AreaFeature, GeodataError, parse_area_features};

use super::area::{Area, AreaId};

/// Immutable id -> area map backing selection lookups.
#[derive(Debug, Default)]
pub struct AreaRegistry {
    areas: HashMap<AreaId, Area>,
}

impl AreaRegistry {
    /// Build a registry from parsed feature records.
    ///
    /// Records whose code fails identifier validation are skipped; the
    /// parser already guarantees trimmed, non-empty values, so in practice
    /// nothing is lost.
    #[must_use]
    pub fn from_features(features: Vec<AreaFeature>) -> Self {
        let mut areas = HashMap::with_capacity(features.len());
        for feature in features {
            let Ok(id) = AreaId::new(&feature.code) else {
                continue;
            };
            areas
                .entry(id.clone())
                .or_insert_with(|| Area::new(id, feature.name));
        }
        Self { areas }
    }

    /// Build a registry straight from a GeoJSON feature collection.
    ///
    /// # Errors
    ///
    /// Propagates [`GeodataError`] when the payload cannot be decoded.
    pub fn from_geojson(raw: &str) -> Result<Self, GeodataError> {
        Ok(Self::from_features(parse_area_features(raw)?))
    }

    /// Look up an area by identifier.
    #[must_use]
    pub fn find(&self, id: &AreaId) -> Option<&Area> {
        self.areas.get(id)
    }

    /// Number of registered areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the registry holds no areas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
