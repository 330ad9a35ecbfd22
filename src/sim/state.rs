//! World state and core simulation types
//!
//! One `WorldState` is created at startup, owned by the main loop and
//! mutated in place every frame. Replays reset it rather than recreate it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::scoring::LevelUpRule;
use super::starfield;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the confirm key
    StartMenu,
    /// Active gameplay
    Playing,
    /// Player hit an obstacle; waiting for the confirm key to replay
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::StartMenu => "start menu",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game over",
        }
    }
}

/// The player's box
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (units/frame, positive is down)
    pub vel_y: f32,
}

impl Player {
    /// Spawn point: centred at a quarter of the width, half the height
    pub fn spawn_center() -> Vec2 {
        Vec2::new(VIEWPORT_WIDTH / 4.0, VIEWPORT_HEIGHT / 2.0)
    }

    pub fn new() -> Self {
        Self {
            rect: Rect::from_center(Self::spawn_center(), Vec2::splat(PLAYER_SIZE)),
            vel_y: 0.0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A top/bottom obstacle pair separated by a fixed vertical gap
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    /// Left edge of both pieces
    pub x: f32,
    pub width: f32,
    /// Height of the top piece; the gap starts here
    pub gap_top: f32,
}

impl ObstaclePair {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            width: OBSTACLE_WIDTH,
            gap_top,
        }
    }

    /// Top piece, from the ceiling down to the gap
    pub fn top(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    /// Bottom piece, from the end of the gap to the floor.
    ///
    /// The height is floored at zero when the gap would reach past the floor.
    pub fn bottom(&self) -> Rect {
        let top = self.gap_top + OBSTACLE_GAP;
        Rect::new(self.x, top, self.width, (VIEWPORT_HEIGHT - top).max(0.0))
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Move both pieces horizontally by the same delta
    #[inline]
    pub fn translate_x(&mut self, dx: f32) {
        self.x += dx;
    }

    /// True if `rect` overlaps either solid piece (the gap never collides)
    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.top().intersects(rect) || self.bottom().intersects(rect)
    }
}

/// A player bullet
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    /// Bullet leaving the player's right edge, vertically centred on it
    pub fn fired_from(player: &Rect) -> Self {
        Self {
            rect: Rect::new(
                player.right(),
                player.center_y() - BULLET_HEIGHT / 2.0,
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ),
        }
    }
}

/// Star palette entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarColor {
    White,
    Yellow,
    Magenta,
    Cyan,
}

impl StarColor {
    pub const PALETTE: [StarColor; 4] = [
        StarColor::White,
        StarColor::Yellow,
        StarColor::Magenta,
        StarColor::Cyan,
    ];
}

/// A decorative starfield particle
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub rect: Rect,
    pub color: StarColor,
    /// Leftward speed (units/frame)
    pub speed: f32,
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<ObstaclePair>,
    pub bullets: Vec<Bullet>,
    pub stars: Vec<Star>,
    pub score: u64,
    /// Best score known to this process (loaded from disk, raised by runs)
    pub highscore: u64,
    pub level: u32,
    /// Leftward obstacle speed (units/frame)
    pub obstacle_speed: f32,
    /// Frames since the last obstacle spawn
    pub spawn_counter: u32,
    /// Frames until the next shot is accepted (accepted at <= 0)
    pub bullet_cooldown: i32,
    pub level_rule: LevelUpRule,
    pub(crate) rng: Pcg32,
}

impl WorldState {
    /// Create a fresh world in the start menu
    pub fn new(seed: u64, highscore: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| starfield::create_star(&mut rng))
            .collect();

        Self {
            seed,
            phase: GamePhase::StartMenu,
            player: Player::new(),
            obstacles: Vec::new(),
            bullets: Vec::new(),
            stars,
            score: 0,
            highscore,
            level: 1,
            obstacle_speed: INITIAL_OBSTACLE_SPEED,
            spawn_counter: 0,
            bullet_cooldown: 0,
            level_rule: LevelUpRule::default(),
            rng,
        }
    }

    /// Builder-style level rule selection
    pub fn with_level_rule(mut self, rule: LevelUpRule) -> Self {
        self.level_rule = rule;
        self
    }

    /// Reset the run for a replay.
    ///
    /// Bullets, stars, the spawn counter and the bullet cooldown carry over.
    pub fn reset_run(&mut self) {
        self.player = Player::new();
        self.obstacles.clear();
        self.score = 0;
        self.level = 1;
        self.obstacle_speed = INITIAL_OBSTACLE_SPEED;
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns true on a new record.
    pub fn record_highscore(&mut self) -> bool {
        if self.score > self.highscore {
            self.highscore = self.score;
            true
        } else {
            false
        }
    }
}
