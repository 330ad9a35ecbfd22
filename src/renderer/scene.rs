//! Render pass: draws a `WorldState` onto a `Canvas`
//!
//! Pure read of the world. Draw order, back to front: background, stars,
//! obstacles, player, bullets, HUD, phase overlays.

use glam::Vec2;

use super::canvas::{Canvas, Color, colors};
use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::{GamePhase, StarColor, WorldState};

/// HUD text sizes (pixels)
const HUD_SIZE: u32 = 24;
const BANNER_SIZE: u32 = 30;
const MENU_SIZE: u32 = 36;
const FOOTER_SIZE: u32 = 20;

/// Opacity of the start menu's black overlay
const MENU_OVERLAY_ALPHA: u8 = 128;

/// Fill colour for a star
pub fn star_color(color: StarColor) -> Color {
    match color {
        StarColor::White => colors::WHITE,
        StarColor::Yellow => colors::YELLOW,
        StarColor::Magenta => colors::MAGENTA,
        StarColor::Cyan => colors::CYAN,
    }
}

fn centered(y: f32) -> Vec2 {
    Vec2::new(VIEWPORT_WIDTH / 2.0, y)
}

/// Draw one frame
pub fn render(state: &WorldState, canvas: &mut impl Canvas) {
    canvas.clear(colors::BLACK);

    for star in &state.stars {
        canvas.fill_rect(&star.rect, star_color(star.color));
    }

    for obstacle in &state.obstacles {
        canvas.fill_rect(&obstacle.top(), colors::WHITE);
        canvas.fill_rect(&obstacle.bottom(), colors::WHITE);
    }

    canvas.fill_rect(&state.player.rect, colors::WHITE);

    for bullet in &state.bullets {
        canvas.fill_rect(&bullet.rect, colors::WHITE);
    }

    draw_hud(state, canvas);

    match state.phase {
        GamePhase::StartMenu => {
            canvas.shade(colors::BLACK, MENU_OVERLAY_ALPHA);
            canvas.text(
                "Press Enter to Start",
                MENU_SIZE,
                colors::WHITE,
                centered(VIEWPORT_HEIGHT / 2.0),
            );
        }
        GamePhase::GameOver => {
            canvas.text(
                "Game Over! Press Enter to play again",
                BANNER_SIZE,
                colors::WHITE,
                centered(VIEWPORT_HEIGHT / 2.0),
            );
            draw_footer(canvas);
        }
        GamePhase::Playing => draw_footer(canvas),
    }
}

fn draw_hud(state: &WorldState, canvas: &mut impl Canvas) {
    let lines = [
        format!("Score: {}", state.score),
        format!("Highscore: {}", state.highscore),
        format!("Level: {}", state.level),
    ];
    for (i, line) in lines.iter().enumerate() {
        canvas.text(line, HUD_SIZE, colors::WHITE, centered(10.0 + 30.0 * i as f32));
    }
}

fn draw_footer(canvas: &mut impl Canvas) {
    canvas.text(
        "Press Esc to exit",
        FOOTER_SIZE,
        colors::WHITE,
        centered(VIEWPORT_HEIGHT - 50.0),
    );
}
