//! HUD text rasterization
//!
//! Glyph outlines come from an embedded DejaVu Sans and are rasterized with
//! `ab_glyph`. Text is laid out on a single line with kerning; the box top
//! is the font's ascent line and its height is the requested pixel size.

use std::fmt;

use ab_glyph::{Font, FontRef, Glyph, GlyphId, InvalidFont, PxScale, ScaleFont, point};

static FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// The font every HUD line is drawn with
pub struct HudFont {
    font: FontRef<'static>,
}

impl fmt::Debug for HudFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HudFont").finish_non_exhaustive()
    }
}

impl HudFont {
    /// Parse the font bundled into the binary
    pub fn embedded() -> Result<Self, InvalidFont> {
        Ok(Self {
            font: FontRef::try_from_slice(FONT_DATA)?,
        })
    }

    /// Position each glyph of `text` at `size` pixels; returns the glyphs and
    /// the total advance width
    fn layout(&self, text: &str, size: u32) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(PxScale::from(size as f32));
        let mut caret = point(0.0, scaled.ascent());
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scaled.scale(), caret));
            caret.x += scaled.h_advance(id);
            previous = Some(id);
        }

        (glyphs, caret.x)
    }

    /// Rendered width in pixels
    pub fn text_width(&self, text: &str, size: u32) -> f32 {
        self.layout(text, size).1
    }

    /// Rasterize `text` with its box's top-left at the origin. `plot` gets
    /// each covered pixel and its coverage in `0.0..=1.0`.
    pub fn draw(&self, text: &str, size: u32, mut plot: impl FnMut(i64, i64, f32)) {
        let (glyphs, _) = self.layout(text, size);
        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);
            outlined.draw(|x, y, coverage| plot(left + x as i64, top + y as i64, coverage));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> HudFont {
        HudFont::embedded().expect("embedded font parses")
    }

    #[test]
    fn test_text_width() {
        let font = font();
        assert_eq!(font.text_width("", 24), 0.0);
        let short = font.text_width("Level: 1", 24);
        assert!(short > 0.0);
        assert!(font.text_width("Level: 10", 24) > short);
        assert!(font.text_width("Level: 1", 48) > short);
    }

    #[test]
    fn test_hud_lines_fit_viewport() {
        let font = font();
        let banner = "Game Over! Press Enter to play again";
        assert!(font.text_width(banner, 30) < 800.0);
        assert!(font.text_width("Press Enter to Start", 36) < 800.0);
    }

    #[test]
    fn test_glyphs_stay_in_text_box() {
        let font = font();
        let text = "Score: 1234";
        let width = font.text_width(text, 24);
        let mut covered = 0;
        font.draw(text, 24, |x, y, coverage| {
            if coverage > 0.0 {
                covered += 1;
                assert!((0..=24).contains(&y), "row {y}");
                assert!(x >= -1 && (x as f32) <= width + 1.0, "column {x}");
            }
        });
        assert!(covered > 0);
    }

    #[test]
    fn test_spaces_draw_nothing() {
        let font = font();
        let mut covered = false;
        font.draw("   ", 24, |_, _, coverage| covered |= coverage > 0.0);
        assert!(!covered);
        assert!(font.text_width("   ", 24) > 0.0);
    }
}
