//! Per-column pass: one ray per column, each independent of the others.
//!
//! Every column only reads the map and the frame's frozen [`Pose`], so the
//! sequential and rayon versions must produce bit-identical output.

use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::{
    config::Config,
    engine::{caster::RayCaster, projection::Column, projection::Projector},
    world::{GridMap, Pose},
};

/// Absolute angle of ray `column` out of `rays` spread over `fov`.
///
/// Column 0 looks `fov/2` left of `heading`; the sweep is half-open so the
/// last ray stops one step short of the right edge.
#[inline]
pub fn ray_angle(heading: f32, column: usize, rays: usize, fov: f32) -> f32 {
    heading - fov * 0.5 + (column as f32 / rays as f32) * fov
}

/// Everything a column needs, bundled once per frame.
#[derive(Clone, Copy)]
struct ColumnJob<'a> {
    caster: RayCaster<'a>,
    projector: Projector,
    pose: Pose,
    rays: usize,
    fov: f32,
}

impl<'a> ColumnJob<'a> {
    fn new(map: &'a GridMap, pose: Pose, cfg: &Config) -> Self {
        Self {
            caster: RayCaster::new(map, cfg.max_depth, cfg.ray_step),
            projector: Projector::new(cfg.screen_height, map.cell_size(), cfg.max_depth),
            pose,
            rays: cfg.ray_count,
            fov: cfg.fov,
        }
    }

    #[inline]
    fn run(&self, column: usize) -> Column {
        let angle = ray_angle(self.pose.heading, column, self.rays, self.fov);
        let hit = self.caster.cast(self.pose.pos, self.pose.heading, angle);
        self.projector.project(hit.distance, hit.hit)
    }
}

/// Fill `out[i]` with ray `i`, on the calling thread.
pub fn cast_columns(map: &GridMap, pose: Pose, cfg: &Config, out: &mut [Column]) {
    debug_assert_eq!(out.len(), cfg.ray_count);
    let job = ColumnJob::new(map, pose, cfg);
    for (i, col) in out.iter_mut().enumerate() {
        *col = job.run(i);
    }
}

/// Same as [`cast_columns`], rays spread over the rayon pool.
pub fn par_cast_columns(map: &GridMap, pose: Pose, cfg: &Config, out: &mut [Column]) {
    debug_assert_eq!(out.len(), cfg.ray_count);
    let job = ColumnJob::new(map, pose, cfg);
    out.par_iter_mut()
        .enumerate()
        .for_each(|(i, col)| *col = job.run(i));
}

/// Screen pixel columns `[start, end)` covered by ray `i`.
#[inline]
pub fn ray_span(i: usize, rays: usize, screen_width: usize) -> (usize, usize) {
    (i * screen_width / rays, (i + 1) * screen_width / rays)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
