pub mod builder;
pub mod cell;
pub mod presets;

pub use builder::SceneBuilder;
pub use cell::{Cell, CellId};

use std::sync::Arc;

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::config::SnapConfig;
use crate::math::Point2;

/// An immutable snapshot of cells and their markers.
///
/// Cloning is cheap: cell storage and display order sit behind `Arc` and are
/// shared between snapshots until an update actually moves a marker.
#[derive(Debug, Clone)]
pub struct Scene {
    cells: Arc<SlotMap<CellId, Cell>>,
    order: Arc<[CellId]>,
    config: SnapConfig,
}

/// The outcome of [`Scene::update`].
#[derive(Debug, Clone)]
pub struct SceneUpdate {
    /// The next snapshot.
    pub scene: Scene,
    /// Cells whose marker was replaced, in display order.
    pub moved: Vec<CellId>,
}

impl SceneUpdate {
    /// Returns `true` if any marker moved.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.moved.is_empty()
    }
}

impl Scene {
    pub(crate) fn from_parts(
        cells: SlotMap<CellId, Cell>,
        order: Vec<CellId>,
        config: SnapConfig,
    ) -> Self {
        Self {
            cells: Arc::new(cells),
            order: order.into(),
            config,
        }
    }

    /// Snaps every marker to the point on its polygon nearest to `pointer`.
    ///
    /// A marker is replaced only when it moves by more than the configured
    /// change tolerance along either axis. The result is a new snapshot;
    /// `self` is never modified. When nothing moves, the returned snapshot
    /// shares storage with `self` (see [`Scene::ptr_eq`]).
    #[must_use]
    pub fn update(&self, pointer: Point2) -> SceneUpdate {
        let tolerance = self.config.change_tolerance();
        let epsilon = self.config.degenerate_epsilon();

        let mut next: Option<SlotMap<CellId, Cell>> = None;
        let mut moved = Vec::new();

        for &id in self.order.iter() {
            let Some(cell) = self.cells.get(id) else {
                continue;
            };
            let snapped = cell.polygon().closest_point(&pointer, epsilon).point;
            if !exceeds_tolerance(cell.marker(), snapped, tolerance) {
                continue;
            }
            trace!(?id, x = snapped.x, y = snapped.y, "marker moved");
            let cells = next.get_or_insert_with(|| (*self.cells).clone());
            if let Some(slot) = cells.get_mut(id) {
                *slot = cell.with_marker(snapped);
            }
            moved.push(id);
        }

        debug!(
            pointer_x = pointer.x,
            pointer_y = pointer.y,
            moved = moved.len(),
            "scene update"
        );

        let scene = match next {
            Some(cells) => Self {
                cells: Arc::new(cells),
                order: Arc::clone(&self.order),
                config: self.config,
            },
            None => self.clone(),
        };
        SceneUpdate { scene, moved }
    }

    /// Returns the cell with the given id.
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Iterates cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.cells.get(id).map(|cell| (id, cell)))
    }

    /// Iterates marker positions in display order.
    pub fn markers(&self) -> impl Iterator<Item = Point2> + '_ {
        self.cells().map(|(_, cell)| cell.marker())
    }

    /// Returns the cell ids in display order.
    #[must_use]
    pub fn ids(&self) -> &[CellId] {
        &self.order
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the scene has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the snap configuration.
    #[must_use]
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Returns `true` if both snapshots share the same cell storage.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.cells, &b.cells)
    }
}

fn exceeds_tolerance(current: Point2, next: Point2, tolerance: f64) -> bool {
    (next.x - current.x).abs() > tolerance || (next.y - current.y).abs() > tolerance
}
