mod camera;
mod canvas;
mod error;
mod mesh;
mod pipeline;
mod raster;
mod settings;

pub use camera::*;
pub use canvas::*;
pub use error::*;
pub use mesh::*;
pub use pipeline::*;
pub use raster::*;
pub use settings::*;
