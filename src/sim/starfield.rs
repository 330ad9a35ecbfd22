//! Decorative scrolling starfield
//!
//! Stars never interact with gameplay. They drift left and are recycled at
//! the right edge once fully off-screen.

use rand::Rng;

use super::rect::Rect;
use super::state::{Star, StarColor};
use crate::consts::*;

fn random_speed(rng: &mut impl Rng) -> f32 {
    rng.random_range(STAR_MIN_SPEED..=STAR_MAX_SPEED) as f32
}

fn random_color(rng: &mut impl Rng) -> StarColor {
    StarColor::PALETTE[rng.random_range(0..StarColor::PALETTE.len())]
}

fn random_y(rng: &mut impl Rng) -> f32 {
    rng.random_range(0..VIEWPORT_HEIGHT as u32) as f32
}

/// Sample a star anywhere in the viewport
pub fn create_star(rng: &mut impl Rng) -> Star {
    let size = rng.random_range(STAR_MIN_SIZE..=STAR_MAX_SIZE) as f32;
    let x = rng.random_range(0..=VIEWPORT_WIDTH as u32) as f32;
    let y = random_y(rng);
    Star {
        rect: Rect::new(x, y, size, size),
        color: random_color(rng),
        speed: random_speed(rng),
    }
}

/// Move every star left by its speed, recycling the ones that left the screen
pub fn advance(stars: &mut [Star], rng: &mut impl Rng) {
    for star in stars.iter_mut() {
        star.rect.translate_x(-star.speed);
        if star.rect.right() < 0.0 {
            star.rect.pos.x = VIEWPORT_WIDTH;
            star.rect.pos.y = random_y(rng);
            star.speed = random_speed(rng);
            star.color = random_color(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_create_star_ranges() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..500 {
            let star = create_star(&mut rng);
            assert!((0.0..=VIEWPORT_WIDTH).contains(&star.rect.left()));
            assert!((0.0..VIEWPORT_HEIGHT).contains(&star.rect.top()));
            assert!((1.0..=3.0).contains(&star.rect.size.x));
            assert_eq!(star.rect.size.x, star.rect.size.y);
            assert!((1.0..=4.0).contains(&star.speed));
        }
    }

    #[test]
    fn test_star_moves_left_by_speed() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut stars = vec![Star {
            rect: Rect::new(100.0, 50.0, 2.0, 2.0),
            color: StarColor::Cyan,
            speed: 3.0,
        }];
        advance(&mut stars, &mut rng);
        assert_eq!(stars[0].rect.left(), 97.0);
        assert_eq!(stars[0].rect.top(), 50.0);
        assert_eq!(stars[0].color, StarColor::Cyan);
    }

    #[test]
    fn test_star_on_edge_is_not_recycled() {
        // Right edge lands exactly on zero: still considered on screen
        let mut rng = Pcg32::seed_from_u64(3);
        let mut stars = vec![Star {
            rect: Rect::new(1.0, 50.0, 2.0, 2.0),
            color: StarColor::White,
            speed: 3.0,
        }];
        advance(&mut stars, &mut rng);
        assert_eq!(stars[0].rect.left(), -2.0);
        assert_eq!(stars[0].rect.right(), 0.0);
    }

    proptest! {
        #[test]
        fn wrapped_star_lands_on_right_edge(seed in any::<u64>(), size in 1u32..=3, speed in 1u32..=4) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let size = size as f32;
            let mut stars = vec![Star {
                rect: Rect::new(-size, 10.0, size, size),
                color: StarColor::Yellow,
                speed: speed as f32,
            }];
            advance(&mut stars, &mut rng);
            let star = &stars[0];
            prop_assert_eq!(star.rect.left(), VIEWPORT_WIDTH);
            prop_assert!(star.rect.top() >= 0.0 && star.rect.top() < VIEWPORT_HEIGHT);
            prop_assert_eq!(star.rect.size.x, size);
            prop_assert!((1.0..=4.0).contains(&star.speed));
        }
    }
}
