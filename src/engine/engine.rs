use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::{
    config::{Config, ConfigError},
    engine::{
        columns::{cast_columns, par_cast_columns},
        projection::Column,
    },
    platform::Platform,
    renderer::{Renderer, RendererExt, Rgba},
    sim::{FrameStats, InputCmd, Tuning, apply_input},
    world::{GridMap, Pose},
};

/// The loop runs until the first quit signal and never restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns the simulation state and drives one frame at a time.
///
/// The pose is written in exactly one place ([`Engine::update`]); the
/// column pass works on a copy taken after that write.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    map: GridMap,
    pose: Pose,
    config: Config,
    tuning: Tuning,
    columns: Vec<Column>,
    state: LoopState,
}

impl<R: Renderer> Engine<R> {
    /// Validate everything up front; nothing is re-checked per frame.
    pub fn new(renderer: R, map: GridMap, spawn: Pose, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        if map.is_blocked(spawn.pos) {
            return Err(ConfigError::SpawnBlocked {
                x: spawn.pos.x,
                y: spawn.pos.y,
            });
        }

        Ok(Self {
            renderer,
            tuning: Tuning::from(&config),
            columns: vec![Column::default(); config.ray_count],
            map,
            pose: spawn,
            config,
            state: LoopState::Running,
        })
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Columns produced by the last [`Engine::render`].
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Consume one frame of input: quit, or commit the controller's pose.
    pub fn update(&mut self, input: &InputCmd) {
        if !self.is_running() {
            return;
        }
        if input.quit {
            self.stop();
            return;
        }
        self.pose = apply_input(&self.map, self.pose, input, self.tuning);
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            info!("quit requested; stopping");
            self.state = LoopState::Stopped;
        }
    }

    /// Cast every ray from the current pose, draw, and hand the frame to
    /// `submit`.
    pub fn render<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        let pose = self.pose;
        if self.config.parallel {
            par_cast_columns(&self.map, pose, &self.config, &mut self.columns);
        } else {
            cast_columns(&self.map, pose, &self.config, &mut self.columns);
        }

        self.renderer.draw_frame(
            self.config.screen_width,
            self.config.screen_height,
            &self.columns,
            submit,
        )
    }

    /// Poll → update → render → present, until the platform says quit.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> anyhow::Result<()> {
        let mut stats = FrameStats::default();
        let mut frame = 0u64;

        while self.is_running() {
            let t0 = Instant::now();

            let input = platform.poll();
            self.update(&input);
            if !self.is_running() {
                break;
            }

            debug!(
                "frame {frame}: pos ({:.1}, {:.1}) heading {:.3}",
                self.pose.pos.x,
                self.pose.pos.y,
                self.pose.heading_wrapped()
            );

            let work = self.render(|fb, w, h| {
                let work = t0.elapsed();
                platform.present(fb, w, h).map(|_| work)
            });
            let work = work.with_context(|| format!("frame {frame}"))?;

            if let Some(r) = stats.record(work) {
                info!("avg render: {:.2} ms  ({:.1} FPS)", r.avg_ms, r.fps);
            }
            frame += 1;
        }
        info!("stopped after {frame} frames");
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{renderer::Software, sim::Actions};
    use glam::Vec2;
    use std::collections::VecDeque;

    /// Replays a fixed input script, then quits.
    struct Scripted {
        inputs: VecDeque<InputCmd>,
        presented: usize,
        last_frame: Vec<Rgba>,
        fail_on: Option<usize>,
    }

    impl Scripted {
        fn new(inputs: impl IntoIterator<Item = InputCmd>) -> Self {
            Self {
                inputs: inputs.into_iter().collect(),
                presented: 0,
                last_frame: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl Platform for Scripted {
        fn poll(&mut self) -> InputCmd {
            self.inputs.pop_front().unwrap_or_else(InputCmd::quit)
        }

        fn present(&mut self, frame: &[Rgba], w: usize, h: usize) -> anyhow::Result<()> {
            assert_eq!(frame.len(), w * h);
            if self.fail_on == Some(self.presented) {
                anyhow::bail!("display lost");
            }
            self.presented += 1;
            self.last_frame = frame.to_vec();
            Ok(())
        }
    }

    fn small_config() -> Config {
        Config {
            screen_width: 80,
            screen_height: 60,
            ray_count: 80,
            ..Config::default()
        }
    }

    fn spawn() -> Pose {
        Pose::new(Vec2::new(96.0, 96.0), 0.0)
    }

    fn engine(cfg: Config) -> Engine<Software> {
        Engine::new(Software::default(), GridMap::hallway(), spawn(), cfg).unwrap()
    }

    #[test]
    fn rejects_invalid_config_and_spawn() {
        let bad = Config {
            fov: 0.0,
            ..small_config()
        };
        assert!(matches!(
            Engine::new(Software::default(), GridMap::hallway(), spawn(), bad),
            Err(ConfigError::Fov(_))
        ));

        let in_wall = Pose::new(Vec2::new(10.0, 10.0), 0.0);
        assert!(matches!(
            Engine::new(Software::default(), GridMap::hallway(), in_wall, small_config()),
            Err(ConfigError::SpawnBlocked { .. })
        ));
    }

    #[test]
    fn quit_is_the_only_transition() {
        let mut e = engine(small_config());
        assert_eq!(e.state(), LoopState::Running);
        e.update(&InputCmd::holding(Actions::FORWARD));
        assert_eq!(e.state(), LoopState::Running);
        e.update(&InputCmd::quit());
        assert_eq!(e.state(), LoopState::Stopped);
        // further input neither restarts nor moves
        let pose = e.pose();
        e.update(&InputCmd::holding(Actions::FORWARD));
        assert_eq!(e.state(), LoopState::Stopped);
        assert_eq!(e.pose(), pose);
    }

    #[test]
    fn quit_frame_does_not_move() {
        let mut e = engine(small_config());
        e.update(&InputCmd {
            held: Actions::FORWARD,
            quit: true,
        });
        assert_eq!(e.pose(), spawn());
    }

    #[test]
    fn run_replays_script_then_stops() {
        let mut e = engine(small_config());
        let fwd = InputCmd::holding(Actions::FORWARD);
        let mut platform = Scripted::new([fwd, fwd, InputCmd::default()]);

        e.run(&mut platform).unwrap();

        assert!(!e.is_running());
        assert_eq!(platform.presented, 3);
        assert_eq!(e.pose().pos, Vec2::new(102.0, 96.0));
        // a closed room: the centre row of every column is wall-grey
        let row = 30 * 80;
        assert!(platform.last_frame[row..row + 80].iter().all(|&p| p != 0));
        // straight ahead the east wall is 346 units off: 11 rows tall
        assert_eq!(e.columns()[40].height(), 11);
        assert_eq!(platform.last_frame[40], 0);
    }

    #[test]
    fn present_failure_is_propagated() {
        let mut e = engine(small_config());
        let mut platform = Scripted::new([InputCmd::default(); 5]);
        platform.fail_on = Some(2);
        let err = e.run(&mut platform).unwrap_err();
        assert!(format!("{err:#}").contains("display lost"));
        assert_eq!(platform.presented, 2);
    }

    #[test]
    fn render_uses_committed_pose() {
        let mut e = engine(small_config());
        let before = e.render(|fb, _, _| fb.to_vec());
        e.update(&InputCmd::holding(Actions::TURN_RIGHT));
        let after = e.render(|fb, _, _| fb.to_vec());
        assert_ne!(before, after);
    }

    #[test]
    fn parallel_render_matches_sequential() {
        let mut seq = engine(small_config());
        let mut par = engine(Config {
            parallel: true,
            ..small_config()
        });
        let a = seq.render(|fb, _, _| fb.to_vec());
        let b = par.render(|fb, _, _| fb.to_vec());
        assert_eq!(a, b);
        assert_eq!(seq.columns(), par.columns());
    }
}
