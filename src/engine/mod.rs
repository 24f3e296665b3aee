//! Per-frame pipeline: ray caster → projector → column pass → frame loop.

mod caster;
pub mod columns;
mod engine;
mod projection;

pub use caster::{RayCaster, RayHit};
pub use columns::{cast_columns, par_cast_columns, ray_angle};
pub use engine::{Engine, LoopState};
pub use projection::{Column, Projector};
