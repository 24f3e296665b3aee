//! Window, keyboard and frame pacing.
//!
//! The frame loop only sees [`Platform`]; the real back-end is a `minifb`
//! window ([`MinifbPlatform`]), tests drive the loop with a scripted fake.

mod window;

pub use window::MinifbPlatform;

use crate::{renderer::Rgba, sim::InputCmd};

pub trait Platform {
    /// Sample discrete events and held keys for this frame.
    fn poll(&mut self) -> InputCmd;

    /// Show the finished frame and wait out the rest of the frame budget.
    fn present(&mut self, frame: &[Rgba], width: usize, height: usize) -> anyhow::Result<()>;
}
