//! Drawing surface abstraction and the software framebuffer

use glam::Vec2;

use super::font::HudFont;
use crate::sim::Rect;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0RGB` pixel
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_pixel(pixel: u32) -> Self {
        Self {
            r: (pixel >> 16) as u8,
            g: (pixel >> 8) as u8,
            b: pixel as u8,
        }
    }

    /// Mix `over` onto `self` with opacity `alpha` (0 = self, 255 = over)
    pub fn blend(self, over: Color, alpha: u8) -> Self {
        let mix = |base: u8, top: u8| -> u8 {
            let a = alpha as u32;
            ((base as u32 * (255 - a) + top as u32 * a) / 255) as u8
        };
        Self {
            r: mix(self.r, over.r),
            g: mix(self.g, over.g),
            b: mix(self.b, over.b),
        }
    }
}

/// Colours used by the game
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
}

/// A 2D surface the render pass draws into
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Fill an axis-aligned rectangle, clipped to the surface
    fn fill_rect(&mut self, rect: &Rect, color: Color);

    /// Blend a colour over the whole surface with opacity `alpha`
    fn shade(&mut self, color: Color, alpha: u8);

    /// Draw a line of text whose top-centre sits at `anchor`.
    /// `size` is the nominal text height in pixels.
    fn text(&mut self, text: &str, size: u32, color: Color, anchor: Vec2);
}

/// CPU pixel buffer in `0RGB` format, row-major.
/// Text is skipped until a font is attached.
#[derive(Debug)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    font: Option<HudFont>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            font: None,
        }
    }

    pub fn with_font(mut self, font: HudFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| Color::from_pixel(self.pixels[y * self.width + x]))
    }

    /// Fill integer pixel span `[x0, x1) × [y0, y1)`, clipped
    fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let x0 = x0.clamp(0, self.width as i64) as usize;
        let x1 = x1.clamp(0, self.width as i64) as usize;
        let y0 = y0.clamp(0, self.height as i64) as usize;
        let y1 = y1.clamp(0, self.height as i64) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let pixel = color.to_pixel();
        for row in self.pixels[y0 * self.width..y1 * self.width].chunks_exact_mut(self.width) {
            row[x0..x1].fill(pixel);
        }
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.fill_span(
            rect.left().floor() as i64,
            rect.top().floor() as i64,
            rect.right().floor() as i64,
            rect.bottom().floor() as i64,
            color,
        );
    }

    fn shade(&mut self, color: Color, alpha: u8) {
        for pixel in &mut self.pixels {
            *pixel = Color::from_pixel(*pixel).blend(color, alpha).to_pixel();
        }
    }

    fn text(&mut self, text: &str, size: u32, color: Color, anchor: Vec2) {
        let Some(font) = &self.font else {
            return;
        };
        let origin_x = (anchor.x - font.text_width(text, size) / 2.0).floor() as i64;
        let origin_y = anchor.y.floor() as i64;
        let (width, height) = (self.width as i64, self.height as i64);
        let pixels = &mut self.pixels;

        font.draw(text, size, |x, y, coverage| {
            let (x, y) = (origin_x + x, origin_y + y);
            if x < 0 || y < 0 || x >= width || y >= height {
                return;
            }
            let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            let pixel = &mut pixels[(y * width + x) as usize];
            *pixel = Color::from_pixel(*pixel).blend(color, alpha).to_pixel();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colors::*;

    #[test]
    fn test_pixel_packing() {
        assert_eq!(YELLOW.to_pixel(), 0x00FF_FF00);
        assert_eq!(Color::from_pixel(0x0012_3456), Color::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_blend_half_black() {
        assert_eq!(WHITE.blend(BLACK, 128), Color::rgb(127, 127, 127));
        assert_eq!(WHITE.blend(BLACK, 0), WHITE);
        assert_eq!(WHITE.blend(CYAN, 255), CYAN);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = Framebuffer::new(20, 10);
        fb.fill_rect(&Rect::new(-5.0, 8.0, 10.0, 10.0), WHITE);
        assert_eq!(fb.pixel(0, 8), Some(WHITE));
        assert_eq!(fb.pixel(4, 9), Some(WHITE));
        assert_eq!(fb.pixel(5, 9), Some(BLACK));
        assert_eq!(fb.pixel(0, 7), Some(BLACK));
        assert_eq!(fb.pixel(20, 0), None);
    }

    #[test]
    fn test_fill_rect_fully_off_screen() {
        let mut fb = Framebuffer::new(20, 10);
        fb.fill_rect(&Rect::new(30.0, 2.0, 5.0, 5.0), WHITE);
        fb.fill_rect(&Rect::new(2.0, 5000.0, 5.0, 5.0), WHITE);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_text_is_centred_on_anchor() {
        let font = HudFont::embedded().expect("embedded font parses");
        let mut fb = Framebuffer::new(100, 60).with_font(font);
        fb.text("I", 40, WHITE, Vec2::new(50.0, 5.0));

        let lit: Vec<(usize, usize)> = (0..60)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) != Some(BLACK))
            .collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| (44..=56).contains(&x) && (5..=45).contains(&y)));
        let mean_x = lit.iter().map(|&(x, _)| x as f32).sum::<f32>() / lit.len() as f32;
        assert!((mean_x - 50.0).abs() < 3.0, "mean column {mean_x}");
    }

    #[test]
    fn test_text_without_font_draws_nothing() {
        let mut fb = Framebuffer::new(100, 60);
        fb.text("Score: 1", 24, WHITE, Vec2::new(50.0, 5.0));
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_text_clips_at_edges() {
        let font = HudFont::embedded().expect("embedded font parses");
        let mut fb = Framebuffer::new(40, 10).with_font(font);
        fb.text("Press Enter to Start", 36, WHITE, Vec2::new(20.0, -5.0));
        assert!(fb.pixels().iter().any(|&p| p != 0));
    }
}
