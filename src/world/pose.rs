use glam::Vec2;

/// Player view-point in world space.
///
/// * `pos` is in world units (one cell = `GridMap::cell_size()` units).
/// * `heading` is in radians, 0 = +X, growing towards +Y.  It is never
///   wrapped; every consumer goes through `sin`/`cos`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vec2,
    pub heading: f32,
}

impl Pose {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self { pos, heading }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the player looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Heading folded into `[0, τ)`, for display only.
    #[inline]
    pub fn heading_wrapped(self) -> f32 {
        self.heading.rem_euclid(std::f32::consts::TAU)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
