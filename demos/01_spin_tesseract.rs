//! 01 - Spin Tesseract
//!
//! The simplest Hypersolid example: spin a tesseract and read back the
//! vertex buffer a line renderer would draw.
//!
//! This example demonstrates:
//! - Building a shape from the built-in library
//! - Rotating in a plane that mixes a visible axis with w
//! - Listening for rotate events
//! - Flattening the projection into a GPU-ready line list
//!
//! Run with: `cargo run --example 01_spin_tesseract`

use std::f32::consts::PI;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use hypersolid_core::{HyperShape, LineVertex, RotationPlane, ShapeEvent, ShapeLibrary};

const FRAMES: u32 = 8;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let library = ShapeLibrary::builtin();
    let mut tesseract = match library.build("tesseract") {
        Ok(shape) => shape,
        Err(e) => {
            log::error!("Failed to build tesseract: {}", e);
            std::process::exit(1);
        }
    };

    let frames = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&frames);
    tesseract.on(ShapeEvent::Rotate, move |_: &HyperShape| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    // An eighth of a turn per frame: the inner and outer cubes swap places halfway through
    for frame in 0..FRAMES {
        tesseract.rotate(RotationPlane::XW, PI / 4.0);

        let line_list: Vec<LineVertex> = tesseract.project_vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&line_list);
        let first = line_list[0];
        log::info!(
            "frame {}: {} line vertices ({} bytes), first at ({:.2}, {:.2}, {:.2}) w={:.2}",
            frame,
            line_list.len(),
            bytes.len(),
            first.position[0],
            first.position[1],
            first.position[2],
            first.w_depth
        );
    }

    log::info!(
        "{} rotate events, xw angle back to {:.4}",
        frames.load(Ordering::Relaxed),
        tesseract.rotations().get(RotationPlane::XW)
    );
}
