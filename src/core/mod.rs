pub mod animation;
pub mod constants;
pub mod error;
pub mod field;
pub mod particle;
pub mod surface;

pub use animation::*;
pub use error::*;
pub use field::*;
pub use particle::*;
pub use surface::*;
