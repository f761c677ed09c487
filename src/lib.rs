pub mod engine;
pub mod gfx;
pub mod math;
pub mod util;
