use ultraviolet::DVec2;

use crate::config::Physics;

/// The rectangle `[0, width] x [0, height]` ships must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub size: DVec2,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
        }
    }

    pub fn center(&self) -> DVec2 {
        self.size * 0.5
    }

    /// Edges count as inside; only strictly passing one leaves the field.
    pub fn contains(&self, pos: DVec2) -> bool {
        !(pos.x < 0.0 || pos.x > self.size.x || pos.y < 0.0 || pos.y > self.size.y)
    }
}

impl From<&Physics> for Bounds {
    fn from(physics: &Physics) -> Self {
        Self::new(physics.width, physics.height)
    }
}

/// Wraps `x` into `[0, len)`.
pub fn wrap(x: f32, len: f32) -> f32 {
    let r = x.rem_euclid(len);

    // rem_euclid rounds up to `len` for tiny negative inputs
    if r < len {
        r
    } else {
        0.0
    }
}
