//! The catalogue facade: discovery output + backend port, composed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::application::ports::CatalogueBackend;
use crate::domain::{
    matcher, resolver, ContactInfo, DatasetRef, DomainError, LayerDefaults, LayerId, MapFeature,
    PlaceholderBinding, PlotParams, ServerInfo, StyleDescriptor, StyleSet, VariableShape,
};
use crate::error::CatalogueResult;

/// Read-only style catalogue for one server.
///
/// Holds the immutable descriptor table produced by discovery and the
/// deployment's [`CatalogueBackend`]. Every method is a pure lookup over
/// those two; the facade is freely shareable across request handlers.
pub struct StyleCatalogue {
    styles: StyleSet,
    backend: Arc<dyn CatalogueBackend>,
}

impl StyleCatalogue {
    /// Build a catalogue from an already-discovered style table.
    ///
    /// The table is injected rather than discovered here so tests can run
    /// against synthetic style sets; see `strata_adapters::discover` for the
    /// standard bundled+override discovery.
    pub fn new(styles: StyleSet, backend: Arc<dyn CatalogueBackend>) -> Self {
        debug!(styles = styles.len(), "catalogue constructed");
        Self { styles, backend }
    }

    /// The full descriptor table.
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// One descriptor by style name.
    pub fn style(&self, name: &str) -> Option<&StyleDescriptor> {
        self.styles.get(name)
    }

    /// All styles able to plot the variable `layer` names.
    ///
    /// # Errors
    ///
    /// [`DomainError::LayerNotFound`] (via the backend) when the identity
    /// maps to no variable.
    pub fn supported_styles(&self, layer: &LayerId) -> CatalogueResult<Vec<StyleDescriptor>> {
        let shape = self.backend.variable_shape(layer)?;
        let supported = matcher::supported_styles(&shape, &self.styles)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        debug!(layer = %layer, count = supported.len(), "matched supported styles");
        Ok(supported)
    }

    /// Bind every placeholder of `style_name` for `layer`.
    ///
    /// Returns the complete binding or fails with one of the typed lookup
    /// errors; a partial binding is never produced.
    pub fn bind_style_template(
        &self,
        layer: &LayerId,
        style_name: &str,
    ) -> CatalogueResult<PlaceholderBinding> {
        // Style membership first: an unknown style is reportable without
        // consulting the backend at all.
        if !self.styles.contains(style_name) {
            return Err(DomainError::StyleNotFound {
                style: style_name.to_owned(),
            }
            .into());
        }

        let (dataset_id, _) = self.backend.decompose_layer(layer)?;
        let shape = self.backend.variable_shape(layer)?;

        let binding = resolver::resolve(
            layer,
            style_name,
            &self.styles,
            &shape,
            &dataset_id,
            |dataset, variable| self.backend.compose_layer(dataset, variable),
        )?;
        Ok(binding)
    }

    /// Locate the dataset/variable pair behind `layer` and extract its map
    /// feature through the backend.
    ///
    /// # Errors
    ///
    /// - [`DomainError::LayerNotFound`] when the identity maps to nothing.
    /// - [`DomainError::UnsupportedDatasetKind`] when the dataset cannot
    ///   produce map features (only gridded data can).
    pub fn resolve_feature(
        &self,
        layer: &LayerId,
        params: &PlotParams,
    ) -> CatalogueResult<MapFeature> {
        let (dataset_id, variable_id) = self.backend.decompose_layer(layer)?;
        let dataset = self
            .backend
            .dataset(&dataset_id)
            .ok_or_else(|| DomainError::LayerNotFound {
                layer: layer.to_string(),
            })?;

        if !dataset.kind.supports_map_features() {
            return Err(DomainError::UnsupportedDatasetKind {
                dataset: dataset_id,
                kind: dataset.kind.as_str().to_owned(),
            }
            .into());
        }

        self.backend.read_map_feature(&dataset_id, &variable_id, params)
    }

    /// The metadata shape behind a layer identity.
    pub fn variable_shape(&self, layer: &LayerId) -> CatalogueResult<VariableShape> {
        self.backend.variable_shape(layer)
    }

    // ── Capability passthroughs ───────────────────────────────────────────

    pub fn server_info(&self) -> ServerInfo {
        self.backend.server_info()
    }

    pub fn contact_info(&self) -> ContactInfo {
        self.backend.contact_info()
    }

    pub fn allows_global_capabilities(&self) -> bool {
        self.backend.allows_global_capabilities()
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.backend.last_update()
    }

    pub fn datasets(&self) -> Vec<DatasetRef> {
        self.backend.datasets()
    }

    pub fn dataset_title(&self, dataset_id: &str) -> Option<String> {
        self.backend.dataset_title(dataset_id)
    }

    pub fn layer_defaults(&self, layer: &LayerId) -> CatalogueResult<LayerDefaults> {
        self.backend.layer_defaults(layer)
    }
}
