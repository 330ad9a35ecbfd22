//! Periodic obstacle spawning

use rand::Rng;

use super::state::{ObstaclePair, WorldState};
use crate::consts::*;

/// Build a pair entering at the right edge with a random top height
pub fn random_pair(rng: &mut impl Rng) -> ObstaclePair {
    let gap_top = rng.random_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT) as f32;
    ObstaclePair::new(VIEWPORT_WIDTH, gap_top)
}

/// Count one active-play frame and spawn a pair every `SPAWN_INTERVAL` frames.
/// Returns true if a pair was spawned.
pub fn spawn_tick(state: &mut WorldState) -> bool {
    state.spawn_counter += 1;
    if state.spawn_counter < SPAWN_INTERVAL {
        return false;
    }

    state.spawn_counter = 0;
    let pair = random_pair(&mut state.rng);
    log::debug!(
        "Spawned obstacle pair (gap {:.0}..{:.0})",
        pair.gap_top,
        pair.gap_top + OBSTACLE_GAP
    );
    state.obstacles.push(pair);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_on_hundredth_frame() {
        let mut state = WorldState::new(5, 0);
        for _ in 0..SPAWN_INTERVAL - 1 {
            assert!(!spawn_tick(&mut state));
        }
        assert!(state.obstacles.is_empty());
        assert!(spawn_tick(&mut state));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn_counter, 0);

        let pair = &state.obstacles[0];
        assert_eq!(pair.x, VIEWPORT_WIDTH);
        assert!((50.0..=200.0).contains(&pair.gap_top));
        assert_eq!(pair.bottom().top() - pair.top().bottom(), OBSTACLE_GAP);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = WorldState::new(5, 0);
        let spawned = (0..1000).filter(|_| spawn_tick(&mut state)).count();
        assert_eq!(spawned, 10);
    }
}
