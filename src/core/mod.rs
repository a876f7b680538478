pub mod carousel;
pub mod constants;
pub mod geometry;
pub mod instances;
pub mod orbit;

pub use carousel::*;
pub use constants::*;
pub use geometry::*;
pub use instances::*;
pub use orbit::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
