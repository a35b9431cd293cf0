//! Drawing surface abstraction
//!
//! The games emit primitives through the [`Canvas`] trait so the simulation
//! code never touches the panel driver. The hardware panel implements it
//! behind the `hardware` feature; [`PixelBuffer`] is the software
//! implementation used by tests.

use glam::IVec2;

/// An RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

/// Drawing primitives the panel driver exposes
///
/// Mirrors the subset of the rpi-rgb-led-matrix graphics API the games use:
/// pixels, lines, circle outlines and BDF text.
pub trait Canvas {
    /// Blank the whole surface
    fn clear(&mut self);

    /// Flood the whole surface with one color
    fn fill(&mut self, color: Rgb);

    /// Set a single pixel; coordinates outside the surface are ignored
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    /// Draw a straight line between two points, endpoints included
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb);

    /// Draw a circle outline
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb);

    /// Draw a text run with the surface's font, `(x, y)` at the baseline
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb);
}

/// In-memory frame buffer
///
/// Stores pixels row-major and records text runs verbatim instead of
/// rasterizing them. Line and circle drawing use the classic integer
/// algorithms (Bresenham, midpoint), matching what the panel library does.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
    texts: Vec<(IVec2, String, Rgb)>,
}

impl PixelBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width * height) as usize],
            texts: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the surface
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Text runs drawn since the last `clear`
    pub fn texts(&self) -> &[(IVec2, String, Rgb)] {
        &self.texts
    }

    /// Count of pixels that differ from black
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != Rgb::BLACK).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }
}

impl Canvas for PixelBuffer {
    fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
        self.texts.clear();
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        // Bresenham, all octants
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
        // Midpoint circle outline
        let r = radius as i32;
        let mut x = r;
        let mut y = 0;
        let mut err = 1 - r;

        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.set_pixel(px, py, color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb) {
        self.texts.push((IVec2::new(x, y), text.to_string(), color));
    }
}
