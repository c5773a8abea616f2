//! Hypersolid - 4D wireframe viewer core
//!
//! Configuration and a headless viewing session on top of
//! `hypersolid_core`.

pub mod config;
pub mod session;

pub use config::AppConfig;
pub use session::Session;
