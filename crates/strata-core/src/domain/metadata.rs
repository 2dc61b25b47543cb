//! Passthrough value types for the capability surface.
//!
//! Server identity, contact details, dataset summaries, and per-layer
//! presentation defaults are owned by the deployment; the catalogue carries
//! them through unchanged. Everything here is a plain value object.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Main server metadata, reported verbatim in the capabilities document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub max_image_width: u32,
    pub max_image_height: u32,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            max_image_width: 1024,
            max_image_height: 1024,
        }
    }
}

/// Contact information for the server operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInfo {
    pub name: String,
    pub organisation: String,
    pub telephone: String,
    pub email: String,
}

/// What a dataset can produce. Only gridded data yields map features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    Grid,
    InSitu,
}

impl DatasetKind {
    pub fn supports_map_features(self) -> bool {
        matches!(self, Self::Grid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::InSitu => "in-situ",
        }
    }
}

/// Summary of one dataset available on the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRef {
    pub id: String,
    pub title: String,
    pub kind: DatasetKind,
}

impl DatasetRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: DatasetKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
        }
    }
}

/// Server-configured default presentation metadata for one layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerDefaults {
    pub title: String,
    pub description: String,
    /// Default palette name, for styles that use one.
    pub palette: Option<String>,
    /// Default colour scale range as (min, max).
    pub scale_range: Option<(f64, f64)>,
    pub log_scaling: bool,
}

impl LayerDefaults {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            palette: None,
            scale_range: None,
            log_scaling: false,
        }
    }
}

/// Spatio-temporal extraction window for one map request.
///
/// Interpreted entirely by the dataset provider; the catalogue only carries
/// it from the protocol layer to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotParams {
    /// Bounding box as (min_x, min_y, max_x, max_y) in `crs` units.
    pub bbox: (f64, f64, f64, f64),
    pub crs: String,
    pub width: u32,
    pub height: u32,
    /// Target elevation, when the variable has a vertical axis.
    pub target_z: Option<f64>,
    /// Target instant, when the variable has a temporal axis.
    pub target_t: Option<DateTime<Utc>>,
}

impl PlotParams {
    pub fn new(bbox: (f64, f64, f64, f64), crs: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            bbox,
            crs: crs.into(),
            width,
            height,
            target_z: None,
            target_t: None,
        }
    }
}

/// One extracted map feature: the gridded values for a member variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFeature {
    /// The member variable the values belong to.
    pub member: String,
    pub width: u32,
    pub height: u32,
    /// Row-major grid values; `None` marks a missing/fill cell.
    pub values: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_grid_datasets_support_features() {
        assert!(DatasetKind::Grid.supports_map_features());
        assert!(!DatasetKind::InSitu.supports_map_features());
    }

    #[test]
    fn server_info_defaults() {
        let info = ServerInfo::new("Strata WMS");
        assert_eq!(info.name, "Strata WMS");
        assert_eq!(info.max_image_width, 1024);
        assert!(info.keywords.is_empty());
    }

    #[test]
    fn metadata_serialises_for_capability_output() {
        let dataset = DatasetRef::new("ocean", "Ocean model", DatasetKind::Grid);
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["kind"], "grid");
        assert_eq!(json["id"], "ocean");
    }
}
