// demos/star_guide.rs
//! Headless walkthrough of the wooden-star build guide
//!
//! Builds the ten planks procedurally, steps through every instruction, and
//! prints what a render host would draw: per-part roles and the camera pose.
//! Run with `RUST_LOG=debug` to watch the engine's step and classification
//! logging.

use anyhow::Result;
use kerf::prelude::*;

/// A plank is just a box; only its bounds matter to the guide
fn plank(name: &str, length: f32) -> PartGeometry {
    let (w, h) = (0.08, 0.02);
    PartGeometry::new(
        name,
        vec![
            [0.0, 0.0, 0.0],
            [length, 0.0, 0.0],
            [length, w, 0.0],
            [0.0, w, 0.0],
            [0.0, 0.0, h],
            [length, 0.0, h],
            [length, w, h],
            [0.0, w, h],
        ],
    )
}

fn print_state(viewer: &Viewer) {
    let position = viewer.camera().position;
    println!(
        "step {}/{} | camera ({:.2}, {:.2}, {:.2})",
        viewer.display_number(),
        viewer.step_count(),
        position.x,
        position.y,
        position.z
    );
    for (id, role) in viewer.scene().parts.roles() {
        println!("  part {:>2}: {:?}", id, role);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut viewer = kerf::star_guide();
    viewer.set_celebration(|| println!("*** star complete, confetti time! ***"));

    let planks: Vec<PartGeometry> = (0..10)
        .map(|i| {
            let length = if i < 5 { 1.0 } else { 2.0 };
            plank(&format!("plank_{}", i), length)
        })
        .collect();
    viewer.set_parts(&planks);

    println!(
        "classified: {} short / {} long",
        viewer.groups().short().len(),
        viewer.groups().long().len()
    );
    print_state(&viewer);

    // walk the whole guide at 60 fps, letting each transition finish
    for _ in 0..viewer.step_count() {
        viewer.next();
        while viewer.is_animating() {
            viewer.update(1.0 / 60.0);
        }
        viewer.update(1.0 / 60.0);
        print_state(&viewer);
    }

    viewer.reset();
    while viewer.is_animating() {
        viewer.update(1.0 / 60.0);
    }
    println!("back at the overview");
    print_state(&viewer);

    Ok(())
}
