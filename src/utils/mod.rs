/// Group of useful computations
pub mod computations;
mod direction;
mod vector;

pub use computations::*;
pub use direction::Axis;
pub use vector::Vector2;
