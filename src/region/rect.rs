use super::Region;
use crate::utils::{Axis, Vector2};

/// Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    xlo: f64,
    xhi: f64,
    ylo: f64,
    yhi: f64,
}
impl Rect {
    pub fn new(xlo: f64, xhi: f64, ylo: f64, yhi: f64) -> Self {
        Self { xlo, xhi, ylo, yhi }
    }
    /// Rectangle with its lower corner at the origin
    pub fn from_lengths(lx: f64, ly: f64) -> Self {
        Self::new(0.0, lx, 0.0, ly)
    }
    pub fn xlo(&self) -> f64 {
        self.xlo
    }
    pub fn xhi(&self) -> f64 {
        self.xhi
    }
    pub fn ylo(&self) -> f64 {
        self.ylo
    }
    pub fn yhi(&self) -> f64 {
        self.yhi
    }
    pub fn lx(&self) -> f64 {
        self.xhi - self.xlo
    }
    pub fn ly(&self) -> f64 {
        self.yhi - self.ylo
    }
    pub fn length(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.lx(),
            Axis::Y => self.ly(),
        }
    }
    pub fn get_bounds(&self, axis: Axis) -> [f64; 2] {
        match axis {
            Axis::X => [self.xlo, self.xhi],
            Axis::Y => [self.ylo, self.yhi],
        }
    }
}
impl Region for Rect {
    /// Half-open containment, `[lo, hi)` along each axis
    fn contains(&self, coord: &Vector2) -> bool {
        self.xlo <= coord.x && coord.x < self.xhi && self.ylo <= coord.y && coord.y < self.yhi
    }
    fn area(&self) -> f64 {
        self.lx() * self.ly()
    }
}
