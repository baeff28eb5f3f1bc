//! The scene simulation.
//!
//! [`Scene`] owns every piece of mutable state - there are no ambient
//! globals - and `tick` advances one frame in a fixed order: clock, planet
//! positions, debris rebuild, asteroid field, ship steering, laser. Body
//! positions are always current before any collision query runs.

use serde::{Deserialize, Serialize};

use crate::asteroids::AsteroidField;
use crate::clock::FrameClock;
use crate::collision::{apply_damage, query_any};
use crate::debris::DebrisRegistry;
use crate::input::FrameInput;
use crate::laser::{LaserShot, LASER_RADIUS};
use crate::planets::PlanetStates;
use crate::random::SeededRandom;
use crate::ship::{Steering, SHIP_RADIUS};

/// Configuration for a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Seed for the scene's random generator (asteroid jitter).
    pub seed: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { seed: 1 }
    }
}

/// The complete scene state - everything needed to simulate one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Clock reading of the most recent tick.
    pub time: f32,
    pub planets: PlanetStates,
    pub debris: DebrisRegistry,
    pub asteroids: AsteroidField,
    pub ship: Steering,
    pub laser: Option<LaserShot>,
    /// Whether the 2D mission overlay should be drawn this frame.
    pub show_overlay: bool,
    clock: FrameClock,
    rng: SeededRandom,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            time: 0.0,
            planets: PlanetStates::new(),
            debris: DebrisRegistry::new(),
            asteroids: AsteroidField::new(),
            ship: Steering::new(),
            laser: None,
            show_overlay: false,
            clock: FrameClock::new(),
            rng: SeededRandom::new(config.seed),
        }
    }

    /// Advance the scene by one frame.
    ///
    /// `now` is a monotonic clock reading in seconds; `input` is what the
    /// player did since the previous tick.
    pub fn tick(&mut self, now: f32, input: &FrameInput) {
        let dt = self.clock.advance(now);
        self.time = now;

        // World motion first: collision queries below must see this frame's
        // positions, never last frame's.
        self.planets.update(now);
        self.debris.rebuild(&self.planets, now);
        self.asteroids.update(now, &mut self.rng);

        // Ship translation is all-or-nothing: the tentative position either
        // probes clear and commits, or the ship holds still this frame.
        if let Some(tentative) = self.ship.tentative_move(input, dt) {
            if query_any(
                tentative,
                SHIP_RADIUS,
                &self.planets,
                &self.asteroids,
                &self.debris,
            )
            .is_none()
            {
                self.ship.commit_move(tentative);
            }
        }
        self.ship.steer(input.mouse_delta);

        // Laser flight: expiry wins over collision, and a collision both
        // damages the target and ends the shot.
        if let Some(mut shot) = self.laser.take() {
            if shot.expired(now) {
                log::debug!("laser expired at {:?}", shot.position);
            } else {
                shot.advance(dt);
                match query_any(
                    shot.position,
                    LASER_RADIUS,
                    &self.planets,
                    &self.asteroids,
                    &self.debris,
                ) {
                    Some(target) => {
                        apply_damage(target, &mut self.debris);
                        log::debug!("laser hit {:?}", target);
                    }
                    None => self.laser = Some(shot),
                }
            }
        }

        // Firing while a shot is in flight is a no-op; the moment the slot
        // frees up, a held fire key launches again.
        if input.fire && self.laser.is_none() {
            self.laser = Some(LaserShot::fired(
                self.ship.ship_position,
                self.ship.ship_forward,
                self.ship.orientation(),
                now,
            ));
            log::debug!("laser fired at {:?}", self.ship.ship_position);
        }

        self.show_overlay = input.overlay;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}
