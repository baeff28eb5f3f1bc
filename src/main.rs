//! Orbital Sweeper - Main Entry Point
//!
//! Fly a ship through the solar system and shoot down the orbital trash.

use glam::Vec3;
use sweeper_game::{FrameInput, Scene, SceneConfig};
use sweeper_renderer::{assemble_frame, ChaseCamera, TextureSet};
use three_d::*;

use sweeper_game::asteroids::{FIELD_COLS, FIELD_ROWS};
use sweeper_game::debris::SLOTS_PER_PLANET;
use sweeper_game::planets::PLANET_COUNT;

/// Input state tracking
struct InputState {
    forward: bool,
    backward: bool,
    fire: bool,
    overlay: bool,
    mouse_delta: (f32, f32),
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            forward: false,
            backward: false,
            fire: false,
            overlay: false,
            mouse_delta: (0.0, 0.0),
        }
    }
}

impl InputState {
    fn to_frame_input(&self) -> FrameInput {
        FrameInput {
            forward: self.forward,
            backward: self.backward,
            fire: self.fire,
            overlay: self.overlay,
            mouse_delta: self.mouse_delta,
        }
    }

    fn handle_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::W => self.forward = pressed,
            Key::S => self.backward = pressed,
            Key::Space => self.fire = pressed,
            Key::Tab => self.overlay = pressed,
            _ => {}
        }
    }

    fn handle_mouse_motion(&mut self, delta: (f32, f32)) {
        // Deltas accumulate; several motion events can land in one frame.
        self.mouse_delta.0 += delta.0;
        self.mouse_delta.1 += delta.1;
    }

    fn clear_mouse_delta(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }
}

/// Display colors per planet, indexed by `PlanetId`, Mercury through Neptune.
const PLANET_COLORS: [Srgba; PLANET_COUNT] = [
    Srgba::new(151, 151, 159, 255),
    Srgba::new(226, 189, 110, 255),
    Srgba::new(70, 120, 200, 255),
    Srgba::new(193, 92, 57, 255),
    Srgba::new(211, 156, 126, 255),
    Srgba::new(226, 191, 125, 255),
    Srgba::new(147, 205, 223, 255),
    Srgba::new(62, 84, 232, 255),
];

fn color_material(color: Srgba) -> ColorMaterial {
    ColorMaterial {
        color,
        ..Default::default()
    }
}

/// Convert a glam matrix into the renderer's column-major matrix type.
fn to_mat4(m: glam::Mat4) -> Mat4 {
    let c = m.to_cols_array();
    Mat4::new(
        c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8], c[9], c[10], c[11], c[12], c[13],
        c[14], c[15],
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("starting Orbital Sweeper");

    let window = Window::new(WindowSettings {
        title: "Orbital Sweeper".to_string(),
        max_size: Some((1920, 1080)),
        ..Default::default()
    })?;

    let context = window.gl();

    let mut scene = Scene::new(SceneConfig::default());
    let mut chase_camera = ChaseCamera::new(Vec3::new(20.0, 0.5, 1.5));

    let mut input_state = InputState::default();
    let mut mouse_captured = false;

    let sphere = CpuMesh::sphere(16);

    // One mesh object per drawable slot; transforms come from the draw list
    // each frame and unused slots are simply not rendered.
    let mut sun = Gm::new(
        Mesh::new(&context, &sphere),
        color_material(Srgba::new(253, 184, 19, 255)),
    );

    let mut planets: Vec<Gm<Mesh, ColorMaterial>> = PLANET_COLORS
        .iter()
        .map(|&color| Gm::new(Mesh::new(&context, &sphere), color_material(color)))
        .collect();

    let trash_slots = PLANET_COUNT * SLOTS_PER_PLANET;
    let mut trash_inner: Vec<Gm<Mesh, ColorMaterial>> = (0..trash_slots / 2)
        .map(|_| {
            Gm::new(
                Mesh::new(&context, &sphere),
                color_material(Srgba::new(170, 170, 170, 255)),
            )
        })
        .collect();
    let mut trash_outer: Vec<Gm<Mesh, ColorMaterial>> = (0..trash_slots / 2)
        .map(|_| {
            Gm::new(
                Mesh::new(&context, &sphere),
                color_material(Srgba::new(110, 100, 90, 255)),
            )
        })
        .collect();

    let mut asteroids: Vec<Gm<Mesh, ColorMaterial>> = (0..FIELD_ROWS * FIELD_COLS)
        .map(|_| {
            Gm::new(
                Mesh::new(&context, &sphere),
                color_material(Srgba::new(120, 110, 100, 255)),
            )
        })
        .collect();

    let mut ship = Gm::new(
        Mesh::new(&context, &CpuMesh::cube()),
        color_material(Srgba::new(200, 205, 215, 255)),
    );

    let mut laser = Gm::new(
        Mesh::new(&context, &CpuMesh::cube()),
        color_material(Srgba::new(255, 40, 40, 255)),
    );

    let mut overlay = Gm::new(
        Mesh::new(&context, &CpuMesh::square()),
        ColorMaterial {
            color: Srgba::new(20, 25, 60, 210),
            render_states: RenderStates {
                blend: Blend::TRANSPARENCY,
                ..Default::default()
            },
            ..Default::default()
        },
    );

    let ambient = AmbientLight::new(&context, 0.3, Srgba::WHITE);
    let light = PointLight::new(
        &context,
        2.0,
        Srgba::WHITE,
        vec3(0.0, 0.0, 0.0),
        Attenuation::default(),
    );

    window.render_loop(move |mut frame_input| {
        for event in frame_input.events.iter() {
            match event {
                Event::KeyPress { kind, handled, .. } if !*handled => {
                    input_state.handle_key(*kind, true);

                    if *kind == Key::Escape {
                        return FrameOutput {
                            exit: true,
                            ..Default::default()
                        };
                    }
                }
                Event::KeyRelease { kind, handled, .. } if !*handled => {
                    input_state.handle_key(*kind, false);
                }
                Event::MousePress { handled, .. } if !*handled => {
                    mouse_captured = true;
                }
                Event::MouseMotion { delta, .. } if mouse_captured => {
                    input_state.handle_mouse_motion(*delta);
                }
                _ => {}
            }
        }

        let now = (frame_input.accumulated_time / 1000.0) as f32;
        scene.tick(now, &input_state.to_frame_input());
        input_state.clear_mouse_delta();

        chase_camera.follow(scene.ship.camera_position, scene.ship.camera_forward);
        chase_camera.aspect = frame_input.viewport.aspect();

        let pos = chase_camera.position;
        let target = pos + chase_camera.forward;
        let camera = Camera::new_perspective(
            frame_input.viewport,
            vec3(pos.x, pos.y, pos.z),
            vec3(target.x, target.y, target.z),
            vec3(0.0, 1.0, 0.0),
            degrees(chase_camera.fov),
            chase_camera.near,
            chase_camera.far,
        );

        // Hand this frame's transforms to the mesh pools.
        let mut inner_used = 0;
        let mut outer_used = 0;
        let mut asteroid_used = 0;
        let mut laser_active = false;

        for instance in assemble_frame(&scene) {
            let transform = to_mat4(instance.transform);
            match instance.texture {
                TextureSet::Sun => sun.set_transformation(transform),
                TextureSet::Planet(id) => {
                    planets[id.index()].set_transformation(transform);
                }
                TextureSet::TrashInner => {
                    trash_inner[inner_used].set_transformation(transform);
                    inner_used += 1;
                }
                TextureSet::TrashOuter => {
                    trash_outer[outer_used].set_transformation(transform);
                    outer_used += 1;
                }
                TextureSet::Asteroid => {
                    asteroids[asteroid_used].set_transformation(transform);
                    asteroid_used += 1;
                }
                TextureSet::Ship => ship.set_transformation(transform),
                TextureSet::Laser => {
                    laser.set_transformation(transform);
                    laser_active = true;
                }
            }
        }

        let mut objects: Vec<&dyn Object> = vec![&sun, &ship];
        objects.extend(planets.iter().map(|p| p as &dyn Object));
        objects.extend(trash_inner[..inner_used].iter().map(|p| p as &dyn Object));
        objects.extend(trash_outer[..outer_used].iter().map(|p| p as &dyn Object));
        objects.extend(asteroids[..asteroid_used].iter().map(|p| p as &dyn Object));
        if laser_active {
            objects.push(&laser);
        }

        let screen = frame_input.screen();
        screen
            .clear(ClearState::color_and_depth(0.0, 0.0, 0.15, 1.0, 1.0))
            .render(&camera, &objects, &[&ambient, &light]);

        if scene.show_overlay {
            let camera_2d = Camera::new_2d(frame_input.viewport);
            let (w, h) = (
                frame_input.viewport.width as f32,
                frame_input.viewport.height as f32,
            );
            overlay.set_transformation(
                Mat4::from_translation(vec3(w / 2.0, h / 2.0, 0.0))
                    * Mat4::from_nonuniform_scale(w * 0.35, h * 0.35, 1.0),
            );
            screen.render(&camera_2d, &[&overlay], &[]);
        }

        FrameOutput::default()
    });

    Ok(())
}
