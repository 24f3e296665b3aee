use crate::renderer::Rgba;

/// One screen column ready to draw: rows `top..bottom` get `colour()`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Column {
    pub top: i32,
    pub bottom: i32,
    /// Depth cue in `[0, 1]`; 1 = touching the wall.
    pub shade: f32,
    pub hit: bool,
}

impl Column {
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Grayscale `0x00RRGGBB`, each channel `⌊255·shade⌋`.
    #[inline]
    pub fn colour(&self) -> Rgba {
        let v = (255.0 * self.shade) as u32;
        (v << 16) | (v << 8) | v
    }
}

/// Distance → on-screen slice.
///
/// ```text
/// height = min(screen_h, round(cell_size · screen_h / distance))
/// shade  = clamp(1 − distance / max_depth, 0, 1)
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    screen_height: i32,
    /// `cell_size · screen_height`
    scale: f32,
    max_depth: f32,
}

impl Projector {
    pub fn new(screen_height: usize, cell_size: f32, max_depth: f32) -> Self {
        Self {
            screen_height: screen_height as i32,
            scale: cell_size * screen_height as f32,
            max_depth,
        }
    }

    pub fn project(&self, distance: f32, hit: bool) -> Column {
        if !hit {
            return Column::default();
        }

        let h = self.screen_height;
        let wall_h = if distance <= 0.0 {
            h
        } else {
            // f32 → i32 saturates, so a tiny distance cannot wrap negative
            ((self.scale / distance).round() as i32).min(h)
        };
        let top = (h - wall_h) / 2;

        Column {
            top,
            bottom: top + wall_h,
            shade: (1.0 - distance / self.max_depth).clamp(0.0, 1.0),
            hit: true,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
