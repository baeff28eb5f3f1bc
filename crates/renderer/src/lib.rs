//! Orbital Sweeper Renderer
//!
//! Turns a ticked [`sweeper_game::Scene`] into a flat list of draw
//! instances - one world transform plus a texture-set id per visible
//! entity - and provides the chase camera matrices. The windowing layer
//! owns the actual GPU objects; nothing in here touches a graphics API.

pub mod camera;
pub mod scene;

pub use camera::ChaseCamera;
pub use scene::{assemble_frame, DrawInstance, TextureSet};
