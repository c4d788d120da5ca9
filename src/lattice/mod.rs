mod square;

pub use square::Square;

use crate::utils::Vector2;

pub trait Lattice {
    /// Up to `count` lattice sites, in fill order
    fn coords(&self, count: usize) -> Vec<Vector2>;
    fn cell_lengths(&self) -> [f64; 2];
}
