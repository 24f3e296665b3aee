use bitflags::bitflags;

bitflags! {
    /// Logical actions whose key is currently held.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Actions: u8 {
        const FORWARD    = 0x01;
        const BACKWARD   = 0x02;
        const TURN_LEFT  = 0x04;
        const TURN_RIGHT = 0x08;
    }
}

/// Input sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCmd {
    pub held: Actions,
    /// Window closed / Esc this frame.
    pub quit: bool,
}

impl InputCmd {
    pub fn holding(held: Actions) -> Self {
        Self { held, quit: false }
    }

    pub fn quit() -> Self {
        Self {
            held: Actions::empty(),
            quit: true,
        }
    }
}

/// Per-frame movement amounts (fixed step, not scaled by elapsed time).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// World units per frame.
    pub move_step: f32,
    /// Radians per frame.
    pub turn_step: f32,
}

impl From<&crate::config::Config> for Tuning {
    fn from(cfg: &crate::config::Config) -> Self {
        Self {
            move_step: cfg.player_speed,
            turn_step: cfg.turn_speed,
        }
    }
}
