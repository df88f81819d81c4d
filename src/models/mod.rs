pub mod image;
pub mod mood;

pub use image::*;
pub use mood::*;
