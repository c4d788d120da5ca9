use crate::{
    error::check_positive,
    region::{Rect, Region},
    utils::{Axis, Vector2},
    Error,
};

/// Simulation box, a rectangle with periodic boundaries along both axes.
///
/// The lower corner sits at the origin, so positions live in `[0, W) x [0, H)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    rect: Rect,
}
impl Container {
    // Creation

    /// Create a new periodic container of the given width and height
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        check_positive("Container width", width).map_err(Error::ContainerError)?;
        check_positive("Container height", height).map_err(Error::ContainerError)?;
        Ok(Self {
            rect: Rect::from_lengths(width, height),
        })
    }

    // Getters

    /// A reference to the rectangular box
    pub fn rect(&self) -> &Rect {
        &self.rect
    }
    pub fn width(&self) -> f64 {
        self.rect.lx()
    }
    pub fn height(&self) -> f64 {
        self.rect.ly()
    }
    pub fn area(&self) -> f64 {
        self.rect.area()
    }
    pub fn contains(&self, coord: &Vector2) -> bool {
        self.rect.contains(coord)
    }

    // Periodic images

    /// Shortest periodic image of a displacement vector.
    ///
    /// Each component is shifted by at most one box length, so the input is
    /// expected to be the difference of two wrapped positions.
    pub fn minimum_image(&self, mut r: Vector2) -> Vector2 {
        r.x = minimum_image_component(r.x, self.width());
        r.y = minimum_image_component(r.y, self.height());
        r
    }

    /// Wrap a position back into the box after a move of less than one box length
    pub fn wrap(&self, mut coord: Vector2) -> Vector2 {
        for axis in Axis::all() {
            let [lo, hi] = self.rect.get_bounds(axis);
            let length = hi - lo;
            let p = match axis {
                Axis::X => &mut coord.x,
                Axis::Y => &mut coord.y,
            };
            if *p < lo {
                *p += length;
            }
            // Also catches `-tiny + length` rounding up to exactly `hi`
            if *p >= hi {
                *p -= length;
            }
        }
        coord
    }
}

fn minimum_image_component(d: f64, length: f64) -> f64 {
    let half = 0.5 * length;
    if d > half {
        d - length
    } else if d < -half {
        d + length
    } else {
        d
    }
}
