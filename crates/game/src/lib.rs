//! Orbital Sweeper - Deterministic Scene Simulation
//!
//! This crate contains the full per-frame scene simulation: orbital motion
//! for the sun and planets, destructible orbital debris, the jittered
//! asteroid field, ship steering, and the laser projectile, plus the
//! sphere-sphere collision queries that tie them together.
//!
//! # Determinism Rules
//!
//! 1. No `rand::thread_rng()` - Use `SeededRandom` only
//! 2. Time comes in through `Scene::tick`, never from the system clock
//! 3. Fixed-size arrays indexed by `PlanetId` - no hashmaps, no string keys
//! 4. No async - Pure synchronous logic
//!
//! The renderer never reaches into this crate to mutate anything; it reads
//! positions, orientations, and visibility flags after each tick.

pub mod asteroids;
pub mod clock;
pub mod collision;
pub mod debris;
pub mod input;
pub mod laser;
pub mod physics;
pub mod planets;
pub mod random;
pub mod ship;
pub mod simulation;

pub use clock::FrameClock;
pub use collision::Target;
pub use input::FrameInput;
pub use laser::LaserShot;
pub use planets::PlanetId;
pub use random::SeededRandom;
pub use simulation::{Scene, SceneConfig};
