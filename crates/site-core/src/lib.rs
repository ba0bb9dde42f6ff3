pub mod catalog;
pub mod config;
pub mod constants;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod reveal;
pub mod slideshow;
pub mod surface;

pub use catalog::*;
pub use config::*;
pub use field::*;
pub use frame_loop::*;
pub use particle::*;
pub use reveal::*;
pub use slideshow::*;
pub use surface::*;
pub use glam::Vec2;
