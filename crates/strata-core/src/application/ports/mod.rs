//! Application ports (traits) for external dependencies.
//!
//! The catalogue core never touches a data backend directly: everything a
//! deployment must supply is collected behind [`CatalogueBackend`], a driven
//! port implemented in `strata-adapters` (or by the embedding server).

use chrono::{DateTime, Utc};

use crate::domain::{
    ContactInfo, DatasetRef, LayerDefaults, LayerId, MapFeature, PlotParams, ServerInfo,
    VariableShape,
};
use crate::error::CatalogueResult;

/// The deployment-abstract capability set.
///
/// Implemented by:
/// - `strata_adapters::backend::MemoryBackend` (tests, demos)
/// - the embedding server's own configuration layer (production)
///
/// ## Contract notes
///
/// - The layer-name codec (`compose_layer`/`decompose_layer`) is the only
///   party that understands the structure of a [`LayerId`]; the core treats
///   layer identities as opaque tokens.
/// - `variable_shape` and `decompose_layer` fail with
///   [`crate::domain::DomainError::LayerNotFound`] for identities that map to
///   nothing; the facade propagates that verbatim.
/// - Implementations may block (these back onto real data readers); the
///   catalogue itself never blocks after construction.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogueBackend: Send + Sync {
    /// Main server metadata for the capabilities document.
    fn server_info(&self) -> ServerInfo;

    /// Contact information for the server operator.
    fn contact_info(&self) -> ContactInfo;

    /// Whether capabilities documents covering all datasets may be generated.
    fn allows_global_capabilities(&self) -> bool;

    /// Last time any data on this server was updated.
    fn last_update(&self) -> DateTime<Utc>;

    /// All datasets available on this server.
    fn datasets(&self) -> Vec<DatasetRef>;

    /// One dataset by id, or `None` when unknown.
    fn dataset(&self, dataset_id: &str) -> Option<DatasetRef>;

    /// Server-configured title for a dataset.
    fn dataset_title(&self, dataset_id: &str) -> Option<String>;

    /// Compose the protocol layer name for a dataset+variable pair.
    fn compose_layer(&self, dataset_id: &str, variable_id: &str) -> LayerId;

    /// Split a layer name back into (dataset id, variable id).
    fn decompose_layer(&self, layer: &LayerId) -> CatalogueResult<(String, String)>;

    /// The metadata shape of the variable a layer names.
    fn variable_shape(&self, layer: &LayerId) -> CatalogueResult<VariableShape>;

    /// Default presentation metadata for a layer.
    fn layer_defaults(&self, layer: &LayerId) -> CatalogueResult<LayerDefaults>;

    /// Extract the gridded map feature for one variable.
    fn read_map_feature(
        &self,
        dataset_id: &str,
        variable_id: &str,
        params: &PlotParams,
    ) -> CatalogueResult<MapFeature>;
}
