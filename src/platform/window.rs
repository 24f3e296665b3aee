use anyhow::Context;
use minifb::{Key, Window, WindowOptions};

use crate::{
    config::Config,
    platform::Platform,
    renderer::Rgba,
    sim::{Actions, InputCmd},
};

/// Key bindings: every action answers to WASD and the arrow keys.
const BINDINGS: [(Actions, [Key; 2]); 4] = [
    (Actions::FORWARD, [Key::W, Key::Up]),
    (Actions::BACKWARD, [Key::S, Key::Down]),
    (Actions::TURN_LEFT, [Key::A, Key::Left]),
    (Actions::TURN_RIGHT, [Key::D, Key::Right]),
];

pub struct MinifbPlatform {
    window: Window,
}

impl MinifbPlatform {
    pub fn new(title: &str, cfg: &Config) -> anyhow::Result<Self> {
        let mut window = Window::new(
            title,
            cfg.screen_width,
            cfg.screen_height,
            WindowOptions::default(),
        )
        .context("failed to open window")?;
        // minifb sleeps inside `update_with_buffer` to hold this rate
        window.set_target_fps(cfg.target_fps);
        Ok(Self { window })
    }
}

impl Platform for MinifbPlatform {
    fn poll(&mut self) -> InputCmd {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return InputCmd::quit();
        }
        let mut held = Actions::empty();
        for (action, keys) in BINDINGS {
            if keys.iter().any(|&k| self.window.is_key_down(k)) {
                held |= action;
            }
        }
        InputCmd::holding(held)
    }

    fn present(&mut self, frame: &[Rgba], width: usize, height: usize) -> anyhow::Result<()> {
        self.window
            .update_with_buffer(frame, width, height)
            .context("failed to present frame")
    }
}
