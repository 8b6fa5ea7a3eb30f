use crate::{
    background::StarField,
    config::{Config, Physics},
    launch::Launcher,
    physics::{advance, Planet, Position, Spacecraft, Status},
};

use itertools::{Either, Itertools};
use log::{debug, trace};
use macroquad::{color::*, input::*, shapes::*, text::draw_text, time::*};
use ultraviolet::{DVec2, Vec2};

const PLANET_BODY: Color = Color::new(0.80, 0.62, 0.42, 1.0);
const PLANET_BAND: Color = Color::new(0.62, 0.40, 0.26, 1.0);

/// Ships removed during one [`Simulation::step`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub collided: usize,
    pub off_bounds: usize,
}

impl StepReport {
    pub fn removed(&self) -> usize {
        self.collided + self.off_bounds
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub launched: usize,
    pub collided: usize,
    pub escaped: usize,
}

pub struct Simulation {
    config: Config,
    planet: Planet,
    ships: Vec<Spacecraft>,
    launcher: Launcher,
    stars: StarField,
    totals: Totals,
    fps: i32,
    logged: u32,
}

fn to_screen(v: DVec2) -> Vec2 {
    Vec2::new(v.x as f32, v.y as f32)
}

impl Simulation {
    pub fn init(config: Config) -> Self {
        let physics = &config.physics;
        let visuals = &config.visuals;

        let stars = StarField::new(
            visuals.stars,
            Vec2::new(physics.width as f32, physics.height as f32),
            visuals.scroll_speed,
            visuals.seed,
        );

        Self {
            planet: Planet::centered(physics),
            ships: Vec::new(),
            launcher: Launcher::default(),
            stars,
            totals: Totals::default(),
            fps: 0,
            logged: 0,
            config,
        }
    }

    pub fn physics(&self) -> &Physics {
        &self.config.physics
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn ships(&self) -> &[Spacecraft] {
        &self.ships
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn pending_launch(&self) -> Option<DVec2> {
        self.launcher.origin()
    }

    /// Feeds one click to the launcher, adding the ship if the click completed a launch.
    pub fn launch_at(&mut self, pos: DVec2) {
        let Some(ship) = self.launcher.click(pos, &self.config.physics) else {
            debug!("aiming from ({:.0}, {:.0})", pos.x, pos.y);
            return;
        };

        debug!(
            "launched ship at ({:.0}, {:.0}) with velocity ({:.3}, {:.3})",
            ship.pos().x,
            ship.pos().y,
            ship.vel().x,
            ship.vel().y
        );

        self.ships.push(ship);
        self.totals.launched += 1;
    }

    pub fn cancel_launch(&mut self) {
        if self.launcher.origin().is_some() {
            debug!("launch cancelled");
        }

        self.launcher.cancel();
    }

    /// Advances every live ship once, then drops the ones that crashed or left the field.
    pub fn step(&mut self) -> StepReport {
        let physics = &self.config.physics;
        let planet = &self.planet;

        let (ships, removed): (Vec<_>, Vec<_>) =
            self.ships.drain(..).partition_map(|mut ship| {
                let status = advance(&mut ship, planet, physics);

                if status.is_terminal() {
                    Either::Right((ship, status))
                } else {
                    Either::Left(ship)
                }
            });
        self.ships = ships;

        let mut report = StepReport::default();

        for (ship, status) in removed {
            debug!(
                "ship removed at ({:.1}, {:.1}): {:?}",
                ship.pos().x,
                ship.pos().y,
                status
            );

            if status == Status::Collided {
                report.collided += 1;
            } else {
                report.off_bounds += 1;
            }
        }

        self.totals.collided += report.collided;
        self.totals.escaped += report.off_bounds;

        trace!("{} ships active, {} removed", self.ships.len(), report.removed());

        report
    }

    pub fn handle_input(&mut self) {
        let (x, y) = mouse_position();
        let pos = DVec2::new(x as f64, y as f64);

        if is_mouse_button_pressed(MouseButton::Right) {
            self.cancel_launch();
        } else if is_mouse_button_pressed(MouseButton::Left)
            || is_mouse_button_pressed(MouseButton::Middle)
        {
            self.launch_at(pos);
        }
    }

    /// Scrolls the background and tracks the fps counter.
    pub fn update(&mut self) {
        self.stars.scroll(get_frame_time());

        // Update fps around 10 times per second
        let time = (10.0 * get_time()) as u32;

        if time > self.logged {
            self.logged = time;
            self.fps = get_fps();
        }
    }

    /// Background, pending launch and ships. Ships are drawn where they were before
    /// this frame's step.
    pub fn render_field(&self) {
        self.stars.render();

        if let Some(origin) = self.launcher.origin() {
            let origin = to_screen(origin);
            let (mx, my) = mouse_position();

            draw_line(origin.x, origin.y, mx, my, 1.0, WHITE);
            draw_circle(origin.x, origin.y, self.config.visuals.ship_size, RED);
        }

        for ship in &self.ships {
            let pos = to_screen(ship.pos());
            draw_circle(pos.x, pos.y, self.config.visuals.ship_size, RED);
        }
    }

    /// Planet and HUD, drawn over the ships.
    pub fn render_overlay(&self) {
        let center = to_screen(self.planet.pos());
        let r = self.config.physics.planet_radius as f32;

        draw_circle(center.x, center.y, r, PLANET_BODY);

        for (i, offset) in [-0.45f32, -0.1, 0.3].into_iter().enumerate() {
            let half = r * (1.0 - offset * offset).sqrt();
            let y = center.y + offset * r;
            let thickness = r * (0.12 + 0.04 * i as f32);

            draw_line(center.x - half, y, center.x + half, y, thickness, PLANET_BAND);
        }

        draw_poly_lines(center.x, center.y, 48, r, 0.0, 1.5, PLANET_BAND);

        if self.config.visuals.hud {
            let totals = self.totals;

            draw_text(&format!("{}", self.fps), 10.0, 16.0, 12.0, WHITE);
            draw_text(
                &format!(
                    "active {}  launched {}  crashed {}  escaped {}",
                    self.ships.len(),
                    totals.launched,
                    totals.collided,
                    totals.escaped
                ),
                10.0,
                30.0,
                12.0,
                WHITE,
            );
        }
    }
}
