//! kronopendia: an interactive cosmic timeline engine.
//!
//! The visible window ("scope") spans years before present, from the origin
//! of the universe (13.8 billion years ago) to now. The crate keeps the
//! scope/zoom/pan arithmetic, landmark generation and label formatting in
//! pure code, and exposes everything a host needs to draw as backend-agnostic
//! render frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
