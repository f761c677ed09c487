mod input;

pub use input::*;

use crate::{
    gfx::{Camera, FrameStats, Mesh, Rasterizer, RenderError, RenderSettings, Renderer, Viewport},
    math::Vector3,
};

/// A render session: one mesh seen through one fly camera.
pub struct Engine {
    mesh: Mesh,
    camera: Camera,
    input: Input,
    flight: FlightSettings,
    renderer: Renderer,
}

impl Engine {
    pub fn new(
        mesh: Mesh,
        camera: Camera,
        settings: RenderSettings,
    ) -> Result<Engine, RenderError> {
        log::debug!("Starting session with {} triangles", mesh.len());
        Ok(Engine {
            mesh,
            camera,
            input: Input::default(),
            flight: FlightSettings::default(),
            renderer: Renderer::new(settings)?,
        })
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn input(&self) -> &Input {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    #[inline]
    pub fn flight(&self) -> &FlightSettings {
        &self.flight
    }

    #[inline]
    pub fn set_flight(&mut self, flight: FlightSettings) {
        self.flight = flight;
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// False once the input asked to quit.
    #[inline]
    pub fn running(&self) -> bool {
        !self.input.quit()
    }

    pub fn resize(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        self.renderer.set_viewport(viewport)
    }

    /// Apply this frame's input to the camera.
    ///
    /// Movement follows the look direction from the last rendered frame.
    pub fn update(&mut self, delta_time: f32) {
        let flight = self.flight;
        let motion = self.input.motion();
        let look = self.input.take_look() * (flight.look_sensitivity * delta_time);

        let turn = flight.turn_rate * delta_time;
        let mut yaw = look.x();
        let mut pitch = look.y();
        if motion.contains(Motion::TURN_LEFT) {
            yaw -= turn;
        }
        if motion.contains(Motion::TURN_RIGHT) {
            yaw += turn;
        }
        if motion.contains(Motion::LOOK_UP) {
            pitch -= turn;
        }
        if motion.contains(Motion::LOOK_DOWN) {
            pitch += turn;
        }
        self.camera.turn(yaw, pitch, flight.pitch_limit);

        // Screen x is mirrored, so the viewer's right is `up x forward` negated.
        let forward = self.camera.look_direction();
        let right = Vector3::new(-forward.z(), 0.0, forward.x());
        let step = flight.speed * delta_time;
        let mut velocity = Vector3::default();
        if motion.contains(Motion::FORWARD) {
            velocity += forward;
        }
        if motion.contains(Motion::BACKWARD) {
            velocity -= forward;
        }
        if motion.contains(Motion::RIGHT) {
            velocity += right;
        }
        if motion.contains(Motion::LEFT) {
            velocity -= right;
        }
        if motion.contains(Motion::UP) {
            velocity += Vector3::up();
        }
        if motion.contains(Motion::DOWN) {
            velocity -= Vector3::up();
        }
        self.camera.translate(velocity * step);
    }

    pub fn render<R: Rasterizer>(&mut self, rasterizer: &mut R) -> FrameStats {
        self.renderer.render(&self.mesh, &mut self.camera, rasterizer)
    }
}
