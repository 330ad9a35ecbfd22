//! Per-frame simulation step
//!
//! One call to [`tick`] is one frame: drain the frame's key presses, then
//! (while playing) integrate physics, spawn, resolve collisions and score.

use super::collision;
use super::spawner;
use super::starfield;
use super::state::{Bullet, GamePhase, WorldState};
use crate::consts::*;

/// A discrete key-press event. Held keys do not repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start from the menu, or replay after a game over
    Confirm,
    Jump,
    Shoot,
    /// Teleport one step left
    StepLeft,
    /// Teleport one step right
    StepRight,
}

/// Input events collected for a single frame, in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn single(event: InputEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

/// Advance the world by one frame
pub fn tick(state: &mut WorldState, input: &TickInput) {
    for &event in &input.events {
        apply_event(state, event);
    }

    if state.phase == GamePhase::Playing {
        step_playing(state);
    }

    starfield::advance(&mut state.stars, &mut state.rng);
}

fn set_phase(state: &mut WorldState, phase: GamePhase) {
    log::info!("{} -> {}", state.phase.as_str(), phase.as_str());
    state.phase = phase;
}

/// Apply one key press according to the current phase
fn apply_event(state: &mut WorldState, event: InputEvent) {
    match (state.phase, event) {
        (GamePhase::StartMenu, InputEvent::Confirm) => set_phase(state, GamePhase::Playing),
        (GamePhase::GameOver, InputEvent::Confirm) => {
            state.reset_run();
            set_phase(state, GamePhase::Playing);
        }
        (GamePhase::Playing, InputEvent::Jump) => state.player.vel_y = JUMP_VELOCITY,
        (GamePhase::Playing, InputEvent::Shoot) => try_shoot(state),
        (GamePhase::Playing, InputEvent::StepLeft) => state.player.rect.translate_x(-PLAYER_STEP),
        (GamePhase::Playing, InputEvent::StepRight) => state.player.rect.translate_x(PLAYER_STEP),
        _ => {}
    }
}

/// Fire a bullet if the cooldown has run out
fn try_shoot(state: &mut WorldState) {
    if state.bullet_cooldown <= 0 {
        state.bullets.push(Bullet::fired_from(&state.player.rect));
        state.bullet_cooldown = BULLET_COOLDOWN;
    }
}

/// Drop bullets past the right edge, then move the rest
fn advance_bullets(bullets: &mut Vec<Bullet>) {
    bullets.retain(|bullet| bullet.rect.left() < VIEWPORT_WIDTH);
    for bullet in bullets.iter_mut() {
        bullet.rect.translate_x(BULLET_SPEED);
    }
}

fn step_playing(state: &mut WorldState) {
    let score_before = state.score;

    // Gravity (discrete Euler, no floor or ceiling)
    state.player.vel_y += GRAVITY;
    state.player.rect.pos.y += state.player.vel_y;

    if state.bullet_cooldown > 0 {
        state.bullet_cooldown -= 1;
    }

    advance_bullets(&mut state.bullets);

    spawner::spawn_tick(state);

    let speed = state.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.translate_x(-speed);
    }

    let hits = collision::resolve_bullet_hits(&mut state.bullets, &mut state.obstacles);
    state.score += hits as u64 * KILL_SCORE;

    let crashed = collision::player_hits_any(&state.player.rect, &state.obstacles);

    state.obstacles.retain(|obstacle| obstacle.right() > 0.0);

    // Passive score, counted on the crash frame too
    state.score += 1;

    let gained = state.level_rule.levels_gained(score_before, state.score);
    if gained > 0 {
        state.level += gained;
        state.obstacle_speed += gained as f32;
        log::debug!(
            "Level {} reached at score {} (speed {})",
            state.level,
            state.score,
            state.obstacle_speed
        );
    }

    if crashed {
        set_phase(state, GamePhase::GameOver);
        if state.record_highscore() {
            log::info!("New high score: {}", state.highscore);
        }
    }
}
