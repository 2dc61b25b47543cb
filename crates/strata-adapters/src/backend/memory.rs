//! In-memory catalogue backend.
//!
//! Holds a fixed registry of datasets and variable shapes, composes layer
//! names as `dataset/variable`, and synthesises map features from a smooth
//! gradient. Used by the CLI demo commands and by integration tests; a real
//! server supplies its own [`CatalogueBackend`] over live data readers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use strata_core::application::ports::CatalogueBackend;
use strata_core::domain::{
    ContactInfo, DatasetRef, DomainError, LayerDefaults, LayerId, MapFeature, PlotParams,
    ServerInfo, VariableShape,
};
use strata_core::error::CatalogueResult;

/// Separator between dataset and variable in a composed layer name.
const LAYER_SEPARATOR: char = '/';

/// Fixed-data [`CatalogueBackend`].
///
/// Populated up-front through the builder methods; immutable afterwards, so
/// it is freely shareable the same way the catalogue itself is.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    server: ServerInfo,
    contact: ContactInfo,
    last_update: DateTime<Utc>,
    allow_global_capabilities: bool,
    datasets: Vec<DatasetRef>,
    variables: BTreeMap<(String, String), VariableShape>,
}

impl MemoryBackend {
    pub fn new(server: ServerInfo) -> Self {
        Self {
            server,
            contact: ContactInfo::default(),
            last_update: Utc::now(),
            allow_global_capabilities: true,
            datasets: Vec::new(),
            variables: BTreeMap::new(),
        }
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_last_update(mut self, instant: DateTime<Utc>) -> Self {
        self.last_update = instant;
        self
    }

    pub fn with_global_capabilities(mut self, allowed: bool) -> Self {
        self.allow_global_capabilities = allowed;
        self
    }

    pub fn with_dataset(mut self, dataset: DatasetRef) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Register `shape` as variable `variable_id` of dataset `dataset_id`.
    ///
    /// The shape's own id may differ from `variable_id`; lookups go through
    /// the registry key, the shape id only feeds child-layer composition.
    pub fn with_variable(
        mut self,
        dataset_id: impl Into<String>,
        variable_id: impl Into<String>,
        shape: VariableShape,
    ) -> Self {
        self.variables
            .insert((dataset_id.into(), variable_id.into()), shape);
        self
    }

    fn unknown_layer(layer: &LayerId) -> DomainError {
        DomainError::LayerNotFound {
            layer: layer.to_string(),
        }
    }
}

impl CatalogueBackend for MemoryBackend {
    fn server_info(&self) -> ServerInfo {
        self.server.clone()
    }

    fn contact_info(&self) -> ContactInfo {
        self.contact.clone()
    }

    fn allows_global_capabilities(&self) -> bool {
        self.allow_global_capabilities
    }

    fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    fn datasets(&self) -> Vec<DatasetRef> {
        self.datasets.clone()
    }

    fn dataset(&self, dataset_id: &str) -> Option<DatasetRef> {
        self.datasets.iter().find(|d| d.id == dataset_id).cloned()
    }

    fn dataset_title(&self, dataset_id: &str) -> Option<String> {
        self.dataset(dataset_id).map(|d| d.title)
    }

    fn compose_layer(&self, dataset_id: &str, variable_id: &str) -> LayerId {
        LayerId::new(format!("{dataset_id}{LAYER_SEPARATOR}{variable_id}"))
    }

    fn decompose_layer(&self, layer: &LayerId) -> CatalogueResult<(String, String)> {
        layer
            .as_str()
            .split_once(LAYER_SEPARATOR)
            .filter(|(d, v)| !d.is_empty() && !v.is_empty())
            .map(|(d, v)| (d.to_owned(), v.to_owned()))
            .ok_or_else(|| Self::unknown_layer(layer).into())
    }

    fn variable_shape(&self, layer: &LayerId) -> CatalogueResult<VariableShape> {
        let key = self.decompose_layer(layer)?;
        self.variables
            .get(&key)
            .cloned()
            .ok_or_else(|| Self::unknown_layer(layer).into())
    }

    fn layer_defaults(&self, layer: &LayerId) -> CatalogueResult<LayerDefaults> {
        let key = self.decompose_layer(layer)?;
        if !self.variables.contains_key(&key) {
            return Err(Self::unknown_layer(layer).into());
        }
        let mut defaults = LayerDefaults::new(&key.1);
        defaults.palette = Some("default".to_owned());
        defaults.scale_range = Some((-50.0, 50.0));
        Ok(defaults)
    }

    fn read_map_feature(
        &self,
        dataset_id: &str,
        variable_id: &str,
        params: &PlotParams,
    ) -> CatalogueResult<MapFeature> {
        if !self
            .variables
            .contains_key(&(dataset_id.to_owned(), variable_id.to_owned()))
        {
            let layer = self.compose_layer(dataset_id, variable_id);
            return Err(Self::unknown_layer(&layer).into());
        }

        debug!(
            dataset = dataset_id,
            variable = variable_id,
            width = params.width,
            height = params.height,
            "synthesising map feature"
        );

        // Smooth diagonal gradient across the requested grid; enough for the
        // demo renderer to show something plausible.
        let (w, h) = (params.width as usize, params.height as usize);
        let mut values = Vec::with_capacity(w * h);
        for row in 0..h {
            for col in 0..w {
                let norm = (row + col) as f64 / (w + h).max(1) as f64;
                values.push(Some(norm * 100.0 - 50.0));
            }
        }

        Ok(MapFeature {
            member: variable_id.to_owned(),
            width: params.width,
            height: params.height,
            values,
        })
    }
}
