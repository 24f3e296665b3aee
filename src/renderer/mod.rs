//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! The frame loop produces one [`Column`] per ray and hands them to a type
//! that implements [`Renderer`], which only has to know how to clear the
//! frame and draw a vertical line.
//!
//! A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//! stay short.

use crate::engine::Column;
use crate::engine::columns::ray_span;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Frame background.
pub const CLEAR: Rgba = 0x00_000000;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and fill
    /// it with `clear`.
    fn begin_frame(&mut self, width: usize, height: usize, clear: Rgba);

    /// Fill rows `y_top..y_bot` of column `x`.  Out-of-range parts are
    /// clipped.
    fn draw_vline(&mut self, x: usize, y_top: i32, y_bot: i32, colour: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` is run exactly once per frame; its result is
    /// handed back to the caller.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    /// Clear, draw every hit column across its ray span, submit.
    fn draw_frame<F, T>(&mut self, width: usize, height: usize, columns: &[Column], submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.begin_frame(width, height, CLEAR);
        let rays = columns.len();
        for (i, col) in columns.iter().enumerate().filter(|(_, c)| c.hit) {
            let (x0, x1) = ray_span(i, rays, width);
            let colour = col.colour();
            for x in x0..x1 {
                self.draw_vline(x, col.top, col.bottom, colour);
            }
        }
        self.end_frame(submit)
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::Software;
