use ultraviolet::DVec2;

use crate::config::Physics;
use crate::physics::Spacecraft;

/// Initial velocity for a ship dragged from `origin` toward `pointer`.
pub fn launch_velocity(origin: DVec2, pointer: DVec2, vel_scale: f64) -> DVec2 {
    (pointer - origin) / vel_scale
}

/// Two-click launch: the first click picks where the ship starts, the second
/// where it is aimed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Launcher {
    #[default]
    Idle,
    Aiming {
        origin: DVec2,
    },
}

impl Launcher {
    pub fn click(&mut self, pos: DVec2, physics: &Physics) -> Option<Spacecraft> {
        match *self {
            Launcher::Idle => {
                *self = Launcher::Aiming { origin: pos };
                None
            }
            Launcher::Aiming { origin } => {
                *self = Launcher::Idle;
                Some(Spacecraft::launched(origin, pos, physics))
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = Launcher::Idle;
    }

    pub fn origin(&self) -> Option<DVec2> {
        match self {
            Launcher::Idle => None,
            Launcher::Aiming { origin } => Some(*origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Position;

    #[test]
    fn velocity_is_scaled_offset() {
        let vel = launch_velocity(DVec2::new(100.0, 100.0), DVec2::new(200.0, 150.0), 100.0);
        assert_eq!(vel, DVec2::new(1.0, 0.5));
    }

    #[test]
    fn pointer_behind_origin_launches_backwards() {
        let vel = launch_velocity(DVec2::new(300.0, 200.0), DVec2::new(250.0, 260.0), 100.0);
        assert_eq!(vel, DVec2::new(-0.5, 0.6));
    }

    #[test]
    fn first_click_only_aims() {
        let physics = Physics::default();
        let mut launcher = Launcher::default();

        assert!(launcher.click(DVec2::new(100.0, 100.0), &physics).is_none());
        assert_eq!(launcher.origin(), Some(DVec2::new(100.0, 100.0)));
    }

    #[test]
    fn second_click_launches_and_resets() {
        let physics = Physics::default();
        let mut launcher = Launcher::default();

        launcher.click(DVec2::new(100.0, 100.0), &physics);
        let ship = launcher.click(DVec2::new(200.0, 150.0), &physics).unwrap();

        assert_eq!(ship.pos(), DVec2::new(100.0, 100.0));
        assert_eq!(ship.vel(), DVec2::new(1.0, 0.5));
        assert_eq!(launcher, Launcher::Idle);
        assert!(launcher.origin().is_none());
    }

    #[test]
    fn cancel_drops_pending_origin() {
        let physics = Physics::default();
        let mut launcher = Launcher::default();

        launcher.click(DVec2::new(10.0, 10.0), &physics);
        launcher.cancel();

        assert!(launcher.click(DVec2::new(20.0, 20.0), &physics).is_none());
        assert_eq!(launcher.origin(), Some(DVec2::new(20.0, 20.0)));
    }
}
