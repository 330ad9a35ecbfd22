//! Collision detection between bullets, obstacles and the player
//!
//! Removal is two-pass: matches are marked while scanning, then the
//! collections are rebuilt without the marked entries. Nothing is removed
//! while it is being iterated.

use super::rect::Rect;
use super::state::{Bullet, ObstaclePair};

/// Bullet/obstacle matches found in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMarks {
    /// `spent_bullets[i]` is true if bullet `i` hit something
    pub spent_bullets: Vec<bool>,
    /// `destroyed[j]` is true if obstacle `j` was hit
    pub destroyed: Vec<bool>,
    /// Number of matched pairs
    pub hits: usize,
}

/// Match bullets to obstacles.
///
/// Bullets are scanned in order and each takes the first obstacle it overlaps
/// that no earlier bullet has claimed, so every bullet and every obstacle is
/// resolved at most once.
pub fn mark_bullet_hits(bullets: &[Bullet], obstacles: &[ObstaclePair]) -> HitMarks {
    let mut marks = HitMarks {
        spent_bullets: vec![false; bullets.len()],
        destroyed: vec![false; obstacles.len()],
        hits: 0,
    };

    for (bi, bullet) in bullets.iter().enumerate() {
        let target = obstacles
            .iter()
            .enumerate()
            .find(|(oi, obstacle)| !marks.destroyed[*oi] && obstacle.overlaps(&bullet.rect))
            .map(|(oi, _)| oi);

        if let Some(oi) = target {
            marks.destroyed[oi] = true;
            marks.spent_bullets[bi] = true;
            marks.hits += 1;
        }
    }

    marks
}

/// Keep the entries whose flag is false
fn filter_unmarked<T>(items: &mut Vec<T>, marked: &[bool]) {
    *items = std::mem::take(items)
        .into_iter()
        .zip(marked)
        .filter(|(_, gone)| !**gone)
        .map(|(item, _)| item)
        .collect();
}

/// Remove matched bullets and obstacles. Returns the number of hits.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, obstacles: &mut Vec<ObstaclePair>) -> usize {
    let marks = mark_bullet_hits(bullets, obstacles);
    if marks.hits > 0 {
        filter_unmarked(bullets, &marks.spent_bullets);
        filter_unmarked(obstacles, &marks.destroyed);
    }
    marks.hits
}

/// True if the player's box overlaps any obstacle piece
pub fn player_hits_any(player: &Rect, obstacles: &[ObstaclePair]) -> bool {
    obstacles.iter().any(|obstacle| obstacle.overlaps(player))
}
