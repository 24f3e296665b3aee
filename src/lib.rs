//! First-person raycaster over a tile-grid map.
//!
//! * [`world`]    – the occupancy grid and the player pose.
//! * [`engine`]   – ray caster, projector, per-column pass and frame loop.
//! * [`sim`]      – held-key input and the player controller.
//! * [`renderer`] – column-drawing back-end (software frame-buffer).
//! * [`platform`] – window / keyboard / pacing collaborator.

pub mod config;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::{Config, ConfigError};
