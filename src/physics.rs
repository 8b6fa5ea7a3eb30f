use core::ops::Deref;

use ultraviolet::DVec2;

use crate::config::Physics;
use crate::launch::launch_velocity;
use crate::space::Bounds;

pub trait Position {
    fn pos(&self) -> DVec2;
}

pub trait Affect {
    type Subject;

    /// Velocity change applied to `other` over one step.
    fn effect_on(&self, other: &Self::Subject, physics: &Physics) -> DVec2;
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointMass {
    pos: DVec2,
    mass: f64,
}

impl PointMass {
    pub fn new(pos: DVec2, mass: f64) -> Self {
        Self { pos, mass }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
}

impl Position for PointMass {
    fn pos(&self) -> DVec2 {
        self.pos
    }
}

/// The stationary gravity source. Nothing mutates it once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    body: PointMass,
}

impl Planet {
    pub fn new(x: f64, y: f64, mass: f64) -> Self {
        Self {
            body: PointMass::new(DVec2::new(x, y), mass),
        }
    }

    pub fn centered(physics: &Physics) -> Self {
        let center = Bounds::from(physics).center();
        Self::new(center.x, center.y, physics.planet_mass)
    }
}

impl Deref for Planet {
    type Target = PointMass;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

/// A launched point mass. Position and velocity only change through [`advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacecraft {
    body: PointMass,
    vel: DVec2,
}

impl Spacecraft {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, mass: f64) -> Self {
        Self {
            body: PointMass::new(DVec2::new(x, y), mass),
            vel: DVec2::new(vx, vy),
        }
    }

    pub fn launched(origin: DVec2, pointer: DVec2, physics: &Physics) -> Self {
        let vel = launch_velocity(origin, pointer, physics.vel_scale);
        Self::new(origin.x, origin.y, vel.x, vel.y, physics.ship_mass)
    }

    pub fn vel(&self) -> DVec2 {
        self.vel
    }
}

impl Deref for Spacecraft {
    type Target = PointMass;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Collided,
    OffBounds,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Active
    }
}

/// Inverse-square attraction between `ship` and `planet`.
///
/// Undefined (infinite) when the two centres coincide.
pub fn gravity_force(ship: &Spacecraft, planet: &Planet, physics: &Physics) -> f64 {
    let distance = (planet.pos() - ship.pos()).mag();
    physics.g * ship.mass() * planet.mass() / (distance * distance)
}

impl Affect for Planet {
    type Subject = Spacecraft;

    fn effect_on(&self, other: &Self::Subject, physics: &Physics) -> DVec2 {
        let d = self.pos() - other.pos();

        let acceleration = gravity_force(other, self, physics) / other.mass();
        let angle = d.y.atan2(d.x);

        DVec2::new(acceleration * angle.cos(), acceleration * angle.sin())
    }
}

/// Status of `ship` at its current position. A collision wins over leaving the bounds.
pub fn classify(ship: &Spacecraft, planet: &Planet, physics: &Physics) -> Status {
    if (ship.pos() - planet.pos()).mag() <= physics.planet_radius {
        Status::Collided
    } else if !Bounds::from(physics).contains(ship.pos()) {
        Status::OffBounds
    } else {
        Status::Active
    }
}

/// Move `ship` forward one frame under the planet's pull and report where it ended up.
///
/// Velocity is updated first and the new velocity moves the position. The caller must
/// not place a ship exactly on the planet's centre; the force is not defined there.
pub fn advance(ship: &mut Spacecraft, planet: &Planet, physics: &Physics) -> Status {
    let acc = planet.effect_on(ship, physics);

    ship.vel += acc;
    ship.body.pos += ship.vel;

    classify(ship, planet, physics)
}
