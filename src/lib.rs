//! Tap Game - a single-screen gravity arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, spawning, collisions, scoring)
//! - `renderer`: Software rendering of the world into a pixel canvas
//! - `platform`: Native window and keyboard glue
//! - `highscores`: Single-integer high score file
//! - `settings`: JSON settings and level-up rule selection

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{LevelUpRule, Settings};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the fixed-step loop
    pub const TARGET_FPS: usize = 60;

    /// Viewport dimensions (logical pixels)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Player box and physics
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Velocity gained per frame (units/frame²)
    pub const GRAVITY: f32 = 0.25;
    /// Velocity set by a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -5.0;
    /// Horizontal displacement of a single step key press
    pub const PLAYER_STEP: f32 = 5.0;

    /// Obstacle pairs
    pub const OBSTACLE_GAP: f32 = 200.0;
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MIN_HEIGHT: u32 = 50;
    pub const OBSTACLE_MAX_HEIGHT: u32 = 200;
    /// Frames between two spawns
    pub const SPAWN_INTERVAL: u32 = 100;
    pub const INITIAL_OBSTACLE_SPEED: f32 = 3.0;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 7.0;
    /// Frames between two accepted shots
    pub const BULLET_COOLDOWN: i32 = 20;

    /// Starfield
    pub const STAR_COUNT: usize = 50;
    pub const STAR_MIN_SIZE: u32 = 1;
    pub const STAR_MAX_SIZE: u32 = 3;
    pub const STAR_MIN_SPEED: u32 = 1;
    pub const STAR_MAX_SPEED: u32 = 4;

    /// Scoring
    pub const KILL_SCORE: u64 = 10;
    pub const LEVEL_SCORE_STEP: u64 = 5000;
}
