use crate::{
    gfx::RenderError,
    math::{Matrix4, Plane, Vector3, Vector4},
};

/// Output size in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub fn new(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }

    /// Height over width. This is what the projection scales x by.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Normalised device coordinates to pixels. X is mirrored, so device `+x` lands on the
    /// left half of the screen.
    #[inline]
    pub fn to_screen(&self, vertex: Vector4) -> Vector4 {
        let mut vertex = vertex;
        vertex.set_x(-vertex.x());
        let mut vertex = vertex + Vector4::new(1.0, 1.0, 0.0, 0.0);
        vertex.set_x(vertex.x() * 0.5 * self.width as f32);
        vertex.set_y(vertex.y() * 0.5 * self.height as f32);
        vertex
    }

    /// Pixels back to the `[-1, 1]` device range handed to rasterizers. Z is dropped.
    #[inline]
    pub fn to_device(&self, vertex: Vector4) -> Vector3 {
        Vector3::new(
            vertex.x() / (self.width as f32 / 2.0) - 1.0,
            vertex.y() / (self.height as f32 / 2.0) - 1.0,
            0.0,
        )
    }

    /// The four pixel-space boundaries in clipping order: bottom, top, left, right.
    pub fn edges(&self) -> [Plane; 4] {
        let right = self.width as f32 - 1.0;
        let top = self.height as f32 - 1.0;
        [
            Plane::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
            Plane::new(Vector3::new(0.0, top, 0.0), Vector3::new(0.0, -1.0, 0.0)),
            Plane::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)),
            Plane::new(Vector3::new(right, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0)),
        ]
    }
}

impl Default for Viewport {
    #[inline]
    fn default() -> Viewport {
        Viewport {
            width: 800,
            height: 600,
        }
    }
}

impl From<(u32, u32)> for Viewport {
    #[inline]
    fn from(size: (u32, u32)) -> Viewport {
        Viewport::new(size.0, size.1)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerspectiveProjection {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveProjection {
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(RenderError::InvalidFieldOfView(self.fov_degrees));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(RenderError::InvalidProjection {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn matrix(&self, viewport: &Viewport) -> Matrix4 {
        Matrix4::perspective(
            self.fov_degrees,
            viewport.aspect_ratio(),
            self.near,
            self.far,
        )
    }

    /// The near boundary in view space.
    #[inline]
    pub fn near_plane(&self) -> Plane {
        Plane::new(Vector3::new(0.0, 0.0, self.near), Vector3::forward())
    }
}

impl Default for PerspectiveProjection {
    #[inline]
    fn default() -> PerspectiveProjection {
        PerspectiveProjection {
            fov_degrees: 90.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// A single directional light with a clamped Lambertian term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lighting {
    pub direction: Vector3,
    pub ambient: f32,
    pub max: f32,
}

impl Lighting {
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.ambient >= 0.0 && self.ambient <= self.max && self.max <= 1.0) {
            return Err(RenderError::InvalidLighting {
                ambient: self.ambient,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Flat intensity for a face with the given unit normal.
    #[inline]
    pub fn shade(&self, normal: Vector3) -> f32 {
        self.direction
            .normalized()
            .dot(normal)
            .max(self.ambient)
            .min(self.max)
    }
}

impl Default for Lighting {
    #[inline]
    fn default() -> Lighting {
        Lighting {
            direction: Vector3::new(0.0, 1.0, -0.5),
            ambient: 0.2,
            max: 0.85,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderSettings {
    pub viewport: Viewport,
    pub projection: PerspectiveProjection,
    pub lighting: Lighting,
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), RenderError> {
        self.viewport.validate()?;
        self.projection.validate()?;
        self.lighting.validate()
    }
}
