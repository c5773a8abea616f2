//! Hypersolid - headless 4D wireframe driver
//!
//! Loads configuration, builds the configured shape, spins it for a number of
//! ticks and reports the resulting projection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use hypersolid::{AppConfig, Session};
use hypersolid_core::{HyperShape, RotationPlane, ShapeEvent};

fn main() {
    // Config comes first so its log level can seed the logger
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Hypersolid");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut session = match Session::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!(
        "Available shapes: {}",
        session.library().names().collect::<Vec<_>>().join(", ")
    );

    let rotations = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&rotations);
    session.shape_mut().on(ShapeEvent::Rotate, move |_: &HyperShape| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let mut segments = session.shape().project();
    for _ in 0..config.session.ticks {
        segments = session.tick();
    }

    log::info!(
        "Ran {} ticks ({} rotations) on '{}'",
        session.ticks(),
        rotations.load(Ordering::Relaxed),
        session.shape_name()
    );
    for plane in RotationPlane::ALL {
        log::debug!("  {}: {:.4} rad", plane, session.shape().rotations().get(plane));
    }

    if config.session.print_segments {
        for segment in &segments {
            let [ax, ay, az] = segment.start.position;
            let [bx, by, bz] = segment.end.position;
            println!(
                "{:>3}: ({:9.3}, {:9.3}, {:9.3}) -> ({:9.3}, {:9.3}, {:9.3})",
                segment.edge, ax, ay, az, bx, by, bz
            );
        }
    }
}
