// Sweeps a pointer across the demo canvas and logs where each marker snaps.
// Run with `RUST_LOG=debug` to also see per-update summaries from the scene.

use polysnap::math::Point2;
use polysnap::scene::presets::demo_scene;
use polysnap::tessellation::{frame, FrameStyle};
use tracing_subscriber::EnvFilter;

const CANVAS: f64 = 560.0;
const STEPS: u32 = 28;

fn main() -> polysnap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut scene = demo_scene()?;
    tracing::info!(cells = scene.len(), "demo scene ready");

    // Diagonal sweep, then back along the anti-diagonal.
    let path = (0..=STEPS)
        .map(|i| {
            let s = CANVAS * f64::from(i) / f64::from(STEPS);
            Point2::new(s, s)
        })
        .chain((0..=STEPS).map(|i| {
            let s = CANVAS * f64::from(i) / f64::from(STEPS);
            Point2::new(CANVAS - s, s)
        }));

    let mut redraws = 0_u32;
    for pointer in path {
        let update = scene.update(pointer);
        if update.is_changed() {
            redraws += 1;
            for (id, cell) in update.scene.cells() {
                let m = cell.marker();
                tracing::info!(?id, x = m.x, y = m.y, "marker");
            }
        }
        scene = update.scene;
    }

    let frames = frame(&scene, FrameStyle::default());
    let triangles: usize = frames.iter().map(|f| f.marker.indices.len()).sum();
    tracing::info!(redraws, frames = frames.len(), triangles, "sweep finished");
    Ok(())
}
