//! Run-time settings.
//!
//! [`Physics`] holds the fixed constants the simulation core is built on. They are
//! never read from disk; a YAML file can only change the [`Visuals`] settings:
//!
//! ```yaml
//! visuals:
//!   fps: 60
//!   ship_size: 5.0
//!   stars: 180
//!   scroll_speed: 12.0
//!   seed: 7
//!   hud: true
//! ```
//!
//! Keys that are left out keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

/// Constants of the gravity model and the field it runs in.
#[derive(Debug, Clone, PartialEq)]
pub struct Physics {
    pub g: f64,             // gravitational constant, not physically scaled
    pub planet_mass: f64,
    pub ship_mass: f64,
    pub planet_radius: f64, // collision radius, also the drawn radius
    pub width: f64,
    pub height: f64,
    pub vel_scale: f64,     // pointer offset per unit of launch velocity
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            g: 5.0,
            planet_mass: 100.0,
            ship_mass: 5.0,
            planet_radius: 50.0,
            width: 800.0,
            height: 600.0,
            vel_scale: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Visuals {
    pub fps: u32,
    pub ship_size: f32,
    pub stars: usize,
    pub scroll_speed: f32, // pixels per second for the nearest star layer
    pub seed: u64,
    pub hud: bool,
}

impl Default for Visuals {
    fn default() -> Self {
        Self {
            fps: 60,
            ship_size: 5.0,
            stars: 180,
            scroll_speed: 12.0,
            seed: 7,
            hud: true,
        }
    }
}

impl Visuals {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.fps > 0, "fps must be positive");
        ensure!(
            self.scroll_speed.is_finite() && self.scroll_speed >= 0.0,
            "scroll_speed must be a non-negative number, got {}",
            self.scroll_speed
        );
        ensure!(
            self.ship_size.is_finite() && self.ship_size > 0.0,
            "ship_size must be positive, got {}",
            self.ship_size
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub physics: Physics,
    pub visuals: Visuals,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    visuals: Visuals,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(text)?;
        file.visuals.validate()?;

        Ok(Self {
            physics: Physics::default(),
            visuals: file.visuals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physics_defaults() {
        let p = Physics::default();

        assert_eq!(p.g, 5.0);
        assert_eq!(p.planet_mass, 100.0);
        assert_eq!(p.ship_mass, 5.0);
        assert_eq!(p.planet_radius, 50.0);
        assert_eq!((p.width, p.height), (800.0, 600.0));
        assert_eq!(p.vel_scale, 100.0);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::parse("visuals:\n  fps: 30\n  hud: false\n").unwrap();

        assert_eq!(config.visuals.fps, 30);
        assert!(!config.visuals.hud);
        assert_eq!(config.visuals.stars, Visuals::default().stars);
        assert_eq!(config.physics, Physics::default());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn physics_cannot_be_overridden() {
        assert!(Config::parse("physics:\n  g: 9.81\n").is_err());
        assert!(Config::parse("visuals:\n  g: 9.81\n").is_err());
    }

    #[test]
    fn rejects_zero_fps() {
        let err = Config::parse("visuals:\n  fps: 0\n").unwrap_err();
        assert!(err.to_string().contains("fps"));
    }

    #[test]
    fn rejects_negative_scroll() {
        assert!(Config::parse("visuals:\n  scroll_speed: -1.0\n").is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = Config::load(Path::new("/nonexistent/slingshot.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/slingshot.yaml"));
    }
}
