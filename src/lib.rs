pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;

pub use config::SnapConfig;
pub use error::{PolysnapError, Result};
pub use geometry::Polygon;
pub use scene::{Cell, CellId, Scene, SceneBuilder, SceneUpdate};
