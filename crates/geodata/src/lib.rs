//! GeoJSON feature-collection parsing for world map areas.
//!
//! The map data ships as a `countries.geojson`-style feature collection where
//! each feature carries an ISO 3166-1 alpha-3 code under
//! `properties["ISO3166-1-Alpha-3"]` and a human-readable label under
//! `properties["name"]`. Geometry is owned by the rendering layer and ignored
//! here; this crate only extracts the area identity records that both the
//! widget registry and the backend ingestion consume.

use serde::Deserialize;

/// Property key holding the ISO 3166-1 alpha-3 code.
pub const ISO_ALPHA3_PROPERTY: &str = "ISO3166-1-Alpha-3";

/// Property key holding the display label.
pub const NAME_PROPERTY: &str = "name";

/// Identity record extracted from one map feature.
///
/// ## Invariants
/// - `code` and `name` are trimmed and non-empty; features that cannot
///   satisfy this are skipped during parsing rather than surfaced as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaFeature {
    /// Stable area identifier (ISO 3166-1 alpha-3 code).
    pub code: String,
    /// Human-readable area label.
    pub name: String,
}

/// Failures raised while decoding a feature collection.
#[derive(Debug, thiserror::Error)]
pub enum GeodataError {
    /// The payload is not valid JSON or not a feature collection shape.
    #[error("invalid GeoJSON payload: {message}")]
    InvalidPayload {
        /// Decoder description of the failure.
        message: String,
    },
}

#[derive(Deserialize)]
struct FeatureCollectionDto {
    #[serde(default)]
    features: Vec<FeatureDto>,
}

#[derive(Deserialize)]
struct FeatureDto {
    #[serde(default)]
    properties: Option<PropertiesDto>,
}

#[derive(Deserialize, Default)]
struct PropertiesDto {
    #[serde(rename = "ISO3166-1-Alpha-3")]
    code: Option<String>,
    name: Option<String>,
}

/// Parse a feature collection into area identity records.
///
/// Features missing either property, or carrying a blank value, are skipped;
/// the original data set contains placeholder features for disputed
/// territories and those must not poison the whole load.
///
/// # Errors
///
/// Returns [`GeodataError::InvalidPayload`] when the payload is not
/// decodable JSON.
///
/// # Examples
/// ```
/// let raw = r#"{
///     "type": "FeatureCollection",
///     "features": [
///         { "properties": { "ISO3166-1-Alpha-3": "FRA", "name": "France" } }
///     ]
/// }"#;
/// let features = geodata::parse_area_features(raw).expect("valid payload");
/// assert_eq!(features[0].code, "FRA");
/// ```
pub fn parse_area_features(raw: &str) -> Result<Vec<AreaFeature>, GeodataError> {
    let collection: FeatureCollectionDto =
        serde_json::from_str(raw).map_err(|error| GeodataError::InvalidPayload {
            message: error.to_string(),
        })?;

    Ok(collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let properties = feature.properties?;
            let code = non_blank(properties.code)?;
            let name = non_blank(properties.name)?;
            Some(AreaFeature { code, name })
        })
        .collect())
}

fn non_blank(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_owned();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
