use std::{error::Error, fmt};

/// Rejected render configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderError {
    InvalidViewport { width: u32, height: u32 },
    InvalidProjection { near: f32, far: f32 },
    InvalidFieldOfView(f32),
    InvalidLighting { ambient: f32, max: f32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidViewport { width, height } => {
                write!(f, "Viewport must not be empty (got {}x{})", width, height)
            }
            RenderError::InvalidProjection { near, far } => write!(
                f,
                "Projection planes must satisfy far > near > 0 (got near {} far {})",
                near, far
            ),
            RenderError::InvalidFieldOfView(fov) => write!(
                f,
                "Field of view must be between 0 and 180 degrees (got {})",
                fov
            ),
            RenderError::InvalidLighting { ambient, max } => write!(
                f,
                "Lighting must satisfy 0 <= ambient <= max <= 1 (got ambient {} max {})",
                ambient, max
            ),
        }
    }
}

impl Error for RenderError {}
