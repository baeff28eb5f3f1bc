//! Per-frame draw-list assembly.
//!
//! Walks the ticked scene and emits one [`DrawInstance`] per visible
//! entity: a composed world transform plus a texture-set id telling the
//! windowing layer which material to bind. Suppressed debris slots and an
//! idle laser simply never show up in the list.

use glam::{Mat4, Vec3, Vec4};

use sweeper_game::debris::DebrisKind;
use sweeper_game::planets::{PlanetId, SUN_SCALE};
use sweeper_game::Scene;

/// Which texture/material set an instance is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSet {
    Sun,
    Planet(PlanetId),
    TrashInner,
    TrashOuter,
    Asteroid,
    Ship,
    Laser,
}

/// One drawable entity for this frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawInstance {
    pub transform: Mat4,
    pub texture: TextureSet,
}

/// Mesh-relative scale of the ship model.
const SHIP_SCALE: f32 = 0.25;
/// Scale of the laser bolt, stretched along its flight axis.
const LASER_SCALE: Vec3 = Vec3::new(0.05, 0.05, 0.4);
/// Spin rates shared by debris and asteroids, radians per second.
const SPIN_YAW_RATE: f32 = 2.0;
const SPIN_PITCH_RATE: f32 = 0.5;

/// The tumbling rotation applied to debris and asteroids.
fn tumble(t: f32) -> Mat4 {
    Mat4::from_rotation_y(SPIN_YAW_RATE * t) * Mat4::from_rotation_x(SPIN_PITCH_RATE * t)
}

/// Build the draw list for the current frame.
pub fn assemble_frame(scene: &Scene) -> Vec<DrawInstance> {
    let t = scene.time;
    let mut instances = Vec::with_capacity(70);

    instances.push(DrawInstance {
        transform: Mat4::from_scale(Vec3::splat(SUN_SCALE)),
        texture: TextureSet::Sun,
    });

    for id in PlanetId::ALL {
        instances.push(DrawInstance {
            transform: Mat4::from_translation(scene.planets.position(id))
                * Mat4::from_scale(Vec3::splat(id.spec().scale)),
            texture: TextureSet::Planet(id),
        });
    }

    for (planet, _slot, piece) in scene.debris.iter_live() {
        let scale = planet.spec().scale * piece.kind.scale_factor();
        let texture = match piece.kind {
            DebrisKind::Inner => TextureSet::TrashInner,
            DebrisKind::Outer => TextureSet::TrashOuter,
        };
        instances.push(DrawInstance {
            transform: Mat4::from_translation(piece.position)
                * tumble(t)
                * Mat4::from_scale(Vec3::splat(scale)),
            texture,
        });
    }

    for (_row, _col, position) in scene.asteroids.iter() {
        instances.push(DrawInstance {
            transform: Mat4::from_translation(position) * tumble(t),
            texture: TextureSet::Asteroid,
        });
    }

    instances.push(DrawInstance {
        transform: ship_transform(scene.ship.ship_position, scene.ship.ship_forward),
        texture: TextureSet::Ship,
    });

    if let Some(shot) = &scene.laser {
        instances.push(DrawInstance {
            transform: Mat4::from_translation(shot.position)
                * Mat4::from_quat(shot.rotation)
                * Mat4::from_scale(LASER_SCALE),
            texture: TextureSet::Laser,
        });
    }

    instances
}

/// Ship model transform: an orthonormal basis from the (blended, possibly
/// non-unit) forward vector, flipped half a turn so the model's nose points
/// along the flight direction.
fn ship_transform(position: Vec3, forward: Vec3) -> Mat4 {
    let dir = forward.normalize_or_zero();
    let side = dir.cross(Vec3::Y).normalize_or_zero();
    let up = side.cross(dir).normalize_or_zero();

    let basis = Mat4::from_cols(
        side.extend(0.0),
        up.extend(0.0),
        (-dir).extend(0.0),
        Vec4::W,
    );

    Mat4::from_translation(position)
        * basis
        * Mat4::from_rotation_y(std::f32::consts::PI)
        * Mat4::from_scale(Vec3::splat(SHIP_SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use sweeper_game::collision::{apply_damage, Target};
    use sweeper_game::{FrameInput, LaserShot, SceneConfig};

    fn ticked_scene() -> Scene {
        let mut scene = Scene::new(SceneConfig::default());
        scene.tick(1.0, &FrameInput::default());
        scene
    }

    #[test]
    fn full_scene_instance_count() {
        let scene = ticked_scene();
        let instances = assemble_frame(&scene);
        // 1 sun + 8 planets + 32 debris + 24 asteroids + 1 ship.
        assert_eq!(instances.len(), 66);
    }

    #[test]
    fn laser_appears_only_in_flight() {
        let mut scene = ticked_scene();
        assert!(!assemble_frame(&scene)
            .iter()
            .any(|i| i.texture == TextureSet::Laser));

        scene.laser = Some(LaserShot::fired(
            Vec3::new(0.0, 50.0, 0.0),
            Vec3::X,
            Quat::IDENTITY,
            1.0,
        ));
        assert!(assemble_frame(&scene)
            .iter()
            .any(|i| i.texture == TextureSet::Laser));
    }

    #[test]
    fn suppressed_debris_is_omitted() {
        let mut scene = ticked_scene();
        apply_damage(
            Target::Debris {
                planet: PlanetId::Saturn,
                slot: 2,
            },
            &mut scene.debris,
        );
        scene.tick(1.02, &FrameInput::default());

        let instances = assemble_frame(&scene);
        assert_eq!(instances.len(), 65);
    }

    #[test]
    fn planet_transform_places_the_planet() {
        let scene = ticked_scene();
        let instances = assemble_frame(&scene);
        let earth = instances
            .iter()
            .find(|i| i.texture == TextureSet::Planet(PlanetId::Earth))
            .unwrap();

        let origin = earth.transform.transform_point3(Vec3::ZERO);
        assert!((origin - scene.planets.position(PlanetId::Earth)).length() < 1e-4);
    }

    #[test]
    fn ship_basis_is_orthonormal() {
        let m = ship_transform(Vec3::new(5.0, 1.0, -3.0), Vec3::new(-0.8, 0.1, 0.1));
        // Scale is uniform, so the determinant is the cubed ship scale.
        let det = m.determinant();
        assert!((det - SHIP_SCALE.powi(3)).abs() < 1e-4, "det={det}");
    }
}
