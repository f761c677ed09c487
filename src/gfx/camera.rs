use crate::math::{self, Matrix4, Vector3, Vector4};

/// First-person fly camera.
///
/// The look direction is derived from yaw and pitch whenever the view matrix is built, so it
/// lags one `view_matrix` call behind any `turn`.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    position: Vector3,
    look_direction: Vector3,
    yaw: f32,
    pitch: f32,
}

impl Camera {
    #[inline]
    pub fn new(position: Vector3) -> Camera {
        Camera {
            position,
            look_direction: Vector3::forward(),
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    #[inline]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    #[inline]
    pub fn translate(&mut self, delta: Vector3) {
        self.position += delta;
    }

    #[inline]
    pub fn look_direction(&self) -> Vector3 {
        self.look_direction
    }

    /// Rotation about world up, in `[0, TAU)`.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Rotation about the camera's right axis.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Add to yaw and pitch. Pitch is held within `±pitch_limit` so the camera never flips over
    /// the vertical.
    pub fn turn(&mut self, yaw: f32, pitch: f32, pitch_limit: f32) {
        self.yaw = math::normalize_angle(self.yaw + yaw);
        self.pitch = (self.pitch + pitch).max(-pitch_limit).min(pitch_limit);
    }

    /// Rotation of the canonical forward axis by pitch then yaw.
    #[inline]
    pub fn orientation(&self) -> Matrix4 {
        &Matrix4::rotate_right(self.pitch) * &Matrix4::rotate_up(self.yaw)
    }

    /// World-to-view transform. Refreshes the cached look direction.
    pub fn view_matrix(&mut self) -> Matrix4 {
        let forward = Vector4::new(0.0, 0.0, 1.0, 0.0);
        self.look_direction = (forward * &self.orientation()).narrowed();
        let target = self.position + self.look_direction;
        Matrix4::point_at(self.position, target, Vector3::up()).quick_inverse()
    }
}

impl Default for Camera {
    #[inline]
    fn default() -> Camera {
        Camera::new(Vector3::default())
    }
}
