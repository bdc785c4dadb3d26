use std::sync::Arc;

use slotmap::SlotMap;
use tracing::debug;

use super::{Cell, CellId, Scene};
use crate::config::SnapConfig;
use crate::geometry::Polygon;

/// Collects polygons into the initial [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    cells: SlotMap<CellId, Cell>,
    order: Vec<CellId>,
    config: SnapConfig,
}

impl SceneBuilder {
    /// Creates an empty builder with the default [`SnapConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the snap configuration.
    #[must_use]
    pub fn with_config(mut self, config: SnapConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a polygon in display order and returns its cell id.
    pub fn add_polygon(&mut self, polygon: Polygon) -> CellId {
        let id = self.cells.insert(Cell::new(Arc::new(polygon)));
        self.order.push(id);
        id
    }

    /// Finishes the scene.
    #[must_use]
    pub fn build(self) -> Scene {
        debug!(cells = self.order.len(), "scene built");
        Scene::from_parts(self.cells, self.order, self.config)
    }
}
