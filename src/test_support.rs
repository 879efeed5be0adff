//! In-memory draw target for widget tests.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

/// Framebuffer that records every pixel and counts draw calls.
///
/// Pixels outside the buffer are dropped, like on the real panel.
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Rgb565>,
    draw_calls: usize,
    pixels_written: usize,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32, fill: Rgb565) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![fill; (width * height) as usize],
            draw_calls: 0,
            pixels_written: 0,
        }
    }

    /// Color at `point`, or `None` if it is off the buffer.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).map(|idx| self.pixels[idx])
    }

    /// Number of `draw_iter` / `fill_solid` calls since creation.
    pub fn draw_calls(&self) -> usize { self.draw_calls }

    /// Number of in-bounds pixels written since creation.
    pub fn pixels_written(&self) -> usize { self.pixels_written }

    /// Count pixels of `color` inside `area`.
    pub fn count_in(&self, area: &embedded_graphics::primitives::Rectangle, color: Rgb565) -> usize {
        area.points().filter(|p| self.pixel(*p) == Some(color)).count()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        (point.x >= 0 && point.x < w && point.y >= 0 && point.y < h).then(|| (point.y * w + point.x) as usize)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.draw_calls += 1;
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index(point) {
                self.pixels[idx] = color;
                self.pixels_written += 1;
            }
        }
        Ok(())
    }
}
