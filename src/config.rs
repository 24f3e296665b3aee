//! Runtime tunables.
//!
//! [`Config::default`] reproduces the reference hallway walker: 800×600,
//! 60° FOV, one ray per pixel column, 800-unit draw distance, 64-unit cells.
//! Every value is checked once by [`Config::validate`] before the frame loop
//! starts; nothing is re-checked per frame.

use std::f32::consts::PI;

/// Startup-time configuration problems.  All of them are fatal.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("screen must be at least 1×1 pixels, got {width}×{height}")]
    ScreenSize { width: usize, height: usize },

    #[error("field of view must be in (0, π) radians, got {0}")]
    Fov(f32),

    #[error("ray count must be in 1..={width}, got {rays}")]
    RayCount { rays: usize, width: usize },

    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("ray step {step} is too small to advance a ray to {max_depth}")]
    RayStep { step: f32, max_depth: f32 },

    #[error("target frame rate must be non-zero")]
    FrameRate,

    #[error("player spawn ({x}, {y}) is inside a wall or outside the map")]
    SpawnBlocked { x: f32, y: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub screen_width: usize,
    pub screen_height: usize,
    /// Total horizontal field of view, radians.
    pub fov: f32,
    /// Rays per frame; each ray covers `screen_width / ray_count` columns.
    pub ray_count: usize,
    /// Ray march limit in world units.
    pub max_depth: f32,
    /// Ray march increment in world units.
    pub ray_step: f32,
    /// World units per map cell.
    pub cell_size: f32,
    /// World units moved per frame while forward/backward is held.
    pub player_speed: f32,
    /// Radians turned per frame while a turn key is held.
    pub turn_speed: f32,
    pub target_fps: usize,
    /// Cast columns on the rayon pool instead of the loop thread.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            fov: PI / 3.0,
            ray_count: 800,
            max_depth: 800.0,
            ray_step: 1.0,
            cell_size: 64.0,
            player_speed: 3.0,
            turn_speed: 0.03,
            target_fps: 60,
            parallel: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        // cos(heading − ray) must stay positive across the whole sweep
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(ConfigError::Fov(self.fov));
        }
        if self.ray_count == 0 || self.ray_count > self.screen_width {
            return Err(ConfigError::RayCount {
                rays: self.ray_count,
                width: self.screen_width,
            });
        }
        for (name, value) in [
            ("max depth", self.max_depth),
            ("ray step", self.ray_step),
            ("cell size", self.cell_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        // below this, `t += step` rounds back to `t` before reaching max depth
        if self.ray_step < self.max_depth * f32::EPSILON * 16.0 {
            return Err(ConfigError::RayStep {
                step: self.ray_step,
                max_depth: self.max_depth,
            });
        }
        for (name, value) in [
            ("player speed", self.player_speed),
            ("turn speed", self.turn_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.target_fps == 0 {
            return Err(ConfigError::FrameRate);
        }
        Ok(())
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
