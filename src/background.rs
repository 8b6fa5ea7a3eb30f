use macroquad::{color::Color, shapes::draw_circle, window::clear_background};
use ultraviolet::Vec2;

use crate::space::wrap;

const SKY: Color = Color::new(0.02, 0.02, 0.06, 1.0);

#[derive(Debug, Clone, PartialEq)]
struct Star {
    pos: Vec2,
    depth: f32, // 1.0 is the nearest layer
    radius: f32,
}

/// Parallax star field drifting right to left behind the simulation.
pub struct StarField {
    stars: Vec<Star>,
    size: Vec2,
    speed: f32,
}

impl StarField {
    pub fn new(count: usize, size: Vec2, speed: f32, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);

        let stars = (0..count)
            .map(|_| {
                let depth = 0.2 + 0.8 * rng.f32();

                Star {
                    pos: Vec2::new(rng.f32() * size.x, rng.f32() * size.y),
                    depth,
                    radius: 0.5 + depth,
                }
            })
            .collect();

        Self { stars, size, speed }
    }

    pub fn scroll(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.pos.x = wrap(star.pos.x - self.speed * star.depth * dt, self.size.x);
        }
    }

    pub fn render(&self) {
        clear_background(SKY);

        for star in &self.stars {
            let shade = 0.4 + 0.6 * star.depth;
            draw_circle(
                star.pos.x,
                star.pos.y,
                star.radius,
                Color::new(shade, shade, shade, 1.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> StarField {
        StarField::new(64, Vec2::new(800.0, 600.0), 12.0, seed)
    }

    #[test]
    fn same_seed_same_sky() {
        assert_eq!(field(3).stars, field(3).stars);
        assert_ne!(field(3).stars, field(4).stars);
    }

    #[test]
    fn stars_start_inside_field() {
        for star in &field(1).stars {
            assert!((0.0..800.0).contains(&star.pos.x));
            assert!((0.0..600.0).contains(&star.pos.y));
            assert!((0.2..=1.0).contains(&star.depth));
        }
    }

    #[test]
    fn nearer_stars_move_faster() {
        let mut sky = field(9);
        let before = sky.stars.clone();

        sky.scroll(0.5);

        for (old, new) in before.iter().zip(&sky.stars) {
            let moved = wrap(old.pos.x - new.pos.x, 800.0);
            assert!((moved - 12.0 * old.depth * 0.5).abs() < 1e-3);
            assert_eq!(old.pos.y, new.pos.y);
        }
    }

    #[test]
    fn scrolling_wraps_around() {
        let mut sky = field(2);

        for _ in 0..10_000 {
            sky.scroll(1.0 / 60.0);
        }

        assert!(sky.stars.iter().all(|s| (0.0..800.0).contains(&s.pos.x)));
    }
}
