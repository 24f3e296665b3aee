mod components;
mod controller;
mod tic;

pub use components::{Actions, InputCmd, Tuning};
pub use controller::{apply_input, propose_move, rotate};
pub use tic::{FrameReport, FrameStats, REPORT_EVERY, frame_budget};
