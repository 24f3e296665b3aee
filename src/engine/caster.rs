//! Fixed-step ray marcher.
//!
//! A sample point walks out from the eye along the ray in `step`-sized increments
//! until it lands in a wall cell, leaves the grid, or reaches `max_depth`.
//! The hit distance is the straight-line march length projected onto the
//! view axis (`× cos(heading − ray_angle)`), which keeps flat walls flat.
//!
//! The march is coarse on purpose: the distance quantum is `step` world
//! units, which at the reference settings (1 unit, 64-unit cells) is well
//! below a pixel for anything but the nearest walls.

use glam::Vec2;

use crate::world::{CellPos, GridMap};

/// Outcome of one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Fisheye-corrected distance on a hit, `max_depth` otherwise.
    pub distance: f32,
    pub hit: bool,
    /// Wall cell that stopped the ray.
    pub cell: Option<CellPos>,
}

impl RayHit {
    #[inline]
    fn miss(max_depth: f32) -> Self {
        Self {
            distance: max_depth,
            hit: false,
            cell: None,
        }
    }
}

/// Borrowing view of the map plus march limits.  Cheap to copy; one per
/// frame or one per worker is fine.
#[derive(Clone, Copy, Debug)]
pub struct RayCaster<'a> {
    map: &'a GridMap,
    max_depth: f32,
    step: f32,
}

impl<'a> RayCaster<'a> {
    pub fn new(map: &'a GridMap, max_depth: f32, step: f32) -> Self {
        debug_assert!(step > 0.0 && max_depth > 0.0);
        Self {
            map,
            max_depth,
            step,
        }
    }

    /// March from `origin` along `ray_angle`; correct for a viewer facing
    /// `heading`.
    pub fn cast(&self, origin: Vec2, heading: f32, ray_angle: f32) -> RayHit {
        let dir = Vec2::from_angle(ray_angle);
        let mut travelled = 0.0;

        loop {
            travelled += self.step;
            // a wall on the step that reaches the limit is already too far
            if travelled >= self.max_depth {
                return RayHit::miss(self.max_depth);
            }
            // origin + dir·t rather than summing steps: no drift on long rays
            let cell = self.map.world_to_cell(origin + dir * travelled);

            if !self.map.in_bounds(cell) {
                return RayHit::miss(self.max_depth);
            }
            if self.map.is_wall(cell.0, cell.1) {
                return RayHit {
                    distance: travelled * (heading - ray_angle).cos(),
                    hit: true,
                    cell: Some(cell),
                };
            }
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

    /// 7×3 corridor, walls all round, open cells 1..=5 on row 1.
    fn corridor() -> GridMap {
        GridMap::from_rows(
            &[
                [1u8, 1, 1, 1, 1, 1, 1],
                [1, 0, 0, 0, 0, 0, 1],
                [1, 1, 1, 1, 1, 1, 1],
            ],
            64.0,
        )
        .unwrap()
    }

    #[test]
    fn straight_ahead_hit_has_no_fisheye_adjustment() {
        let map = corridor();
        let caster = RayCaster::new(&map, 800.0, 1.0);
        // centre of cell 2; the face of wall cell 6 sits at x = 384
        let origin = Vec2::new(160.0, 96.0);
        let hit = caster.cast(origin, 0.0, 0.0);
        assert!(hit.hit);
        assert_eq!(hit.cell, Some((6, 1)));
        assert_eq!(hit.distance, 224.0);
    }

    #[test]
    fn hallway_centre_ray_hits_east_wall() {
        // spawn (1.5, 1.5) cells facing +X: row 1 is open up to the outer
        // wall at cell x = 7, i.e. world x = 448 → 448 − 96 = 352 units
        let map = GridMap::hallway();
        let caster = RayCaster::new(&map, 800.0, 1.0);
        let hit = caster.cast(Vec2::new(96.0, 96.0), 0.0, 0.0);
        assert!(hit.hit);
        assert_eq!(hit.cell, Some((7, 1)));
        assert_eq!(hit.distance, 352.0);
    }

    #[test]
    fn hallway_ray_south_hits_pillar_row() {
        // facing +Y from (96, 96) column x = 1 is open down to the outer wall
        // at y = 7 (448) → 352; x = 2 column hits the pillar at (2,2) = 128
        let map = GridMap::hallway();
        let caster = RayCaster::new(&map, 800.0, 1.0);

        let down = caster.cast(Vec2::new(96.0, 96.0), FRAC_PI_2, FRAC_PI_2);
        assert!(down.hit);
        assert_eq!(down.cell, Some((1, 7)));
        assert!((down.distance - 352.0).abs() < 1e-3);

        let pillar = caster.cast(Vec2::new(160.0, 96.0), FRAC_PI_2, FRAC_PI_2);
        assert_eq!(pillar.cell, Some((2, 2)));
        assert!((pillar.distance - 32.0).abs() < 1e-3);
    }

    #[test]
    fn off_axis_ray_is_corrected_by_cosine() {
        let map = corridor();
        let caster = RayCaster::new(&map, 800.0, 1.0);
        let origin = Vec2::new(96.0, 96.0);
        let ray = 0.2_f32;
        let straight = caster.cast(origin, ray, ray); // viewer looks down the ray
        let skewed = caster.cast(origin, 0.0, ray); // same ray, viewer at 0
        assert!(straight.hit && skewed.hit);
        assert_eq!(straight.cell, skewed.cell);
        assert!((skewed.distance - straight.distance * 0.2_f32.cos()).abs() < 1e-3);
    }

    #[test]
    fn miss_reports_max_depth() {
        // open 20×1 strip with no walls, ray along it: limited by depth
        let map = GridMap::from_rows(&[[0u8; 20]], 64.0).unwrap();
        let caster = RayCaster::new(&map, 100.0, 1.0);
        let hit = caster.cast(Vec2::new(10.0, 32.0), 0.0, 0.0);
        assert!(!hit.hit);
        assert_eq!(hit.distance, 100.0);
        assert_eq!(hit.cell, None);
    }

    #[test]
    fn wall_at_max_depth_is_a_miss() {
        // wall face at x = 128, 96 units from the origin
        let map = GridMap::from_rows(&[[0u8, 0, 1]], 64.0).unwrap();
        let origin = Vec2::new(32.0, 32.0);

        let at_limit = RayCaster::new(&map, 96.0, 1.0).cast(origin, 0.0, 0.0);
        assert!(!at_limit.hit);
        assert_eq!(at_limit.distance, 96.0);
        assert_eq!(at_limit.cell, None);

        // step overshoots a limit it does not divide: still a miss, never
        // a hit farther out than the limit
        let overshoot = RayCaster::new(&map, 95.5, 1.0).cast(origin, 0.0, 0.0);
        assert!(!overshoot.hit);
        assert_eq!(overshoot.distance, 95.5);

        let past_limit = RayCaster::new(&map, 90.0, 1.0).cast(origin, 0.0, 0.0);
        assert!(!past_limit.hit);
        assert_eq!(past_limit.distance, 90.0);
    }

    #[test]
    fn wall_just_inside_max_depth_is_a_hit() {
        let map = GridMap::from_rows(&[[0u8, 0, 1]], 64.0).unwrap();
        let hit = RayCaster::new(&map, 97.0, 1.0).cast(Vec2::new(32.0, 32.0), 0.0, 0.0);
        assert!(hit.hit);
        assert_eq!(hit.cell, Some((2, 0)));
        assert_eq!(hit.distance, 96.0);
    }

    #[test]
    fn leaving_the_grid_is_a_miss() {
        let map = GridMap::from_rows(&[[0u8; 3]], 64.0).unwrap();
        let caster = RayCaster::new(&map, 800.0, 1.0);
        for angle in [0.0, PI, FRAC_PI_2, -FRAC_PI_2] {
            let hit = caster.cast(Vec2::new(96.0, 32.0), angle, angle);
            assert!(!hit.hit, "angle {angle}");
            assert_eq!(hit.distance, 800.0);
        }
    }

    #[test]
    fn origin_inside_wall_stops_on_first_step() {
        let map = GridMap::hallway();
        let caster = RayCaster::new(&map, 800.0, 1.0);
        let hit = caster.cast(Vec2::new(32.0, 32.0), 0.0, 0.0);
        assert!(hit.hit);
        assert_eq!(hit.cell, Some((0, 0)));
        assert_eq!(hit.distance, 1.0);
    }

    #[test]
    fn fov_edge_rays_sample_normally() {
        let map = GridMap::hallway();
        let caster = RayCaster::new(&map, 800.0, 1.0);
        let origin = Vec2::new(96.0, 96.0);
        for ray in [-FRAC_PI_6, FRAC_PI_6] {
            let hit = caster.cast(origin, 0.0, ray);
            assert!(hit.hit);
            assert!(hit.distance > 0.0 && hit.distance < 800.0);
        }
    }
}
