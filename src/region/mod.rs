pub mod rect;
pub use rect::Rect;

use crate::utils::Vector2;

pub trait Region {
    fn contains(&self, coord: &Vector2) -> bool;
    fn area(&self) -> f64;
}
