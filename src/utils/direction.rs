/// Axes of the two-dimensional box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}
impl Axis {
    pub fn all() -> [Axis; 2] {
        [Axis::X, Axis::Y]
    }
}
