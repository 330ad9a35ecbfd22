//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One mutable `WorldState`, stepped once per frame by `tick`
//! - Seeded RNG only, so a seed and an input sequence replay exactly
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod scoring;
pub mod spawner;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{mark_bullet_hits, player_hits_any, resolve_bullet_hits, HitMarks};
pub use rect::Rect;
pub use scoring::LevelUpRule;
pub use state::{Bullet, GamePhase, ObstaclePair, Player, Star, StarColor, WorldState};
pub use tick::{InputEvent, TickInput, tick};
