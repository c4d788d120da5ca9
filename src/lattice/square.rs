use crate::{error::check_positive, utils::Vector2, Error};

use super::Lattice;

/// Square lattice sized to hold a given number of sites across a fixed width.
///
/// With `n = ceil(sqrt(count))` cells per side, the spacing is `width / n` and
/// sites sit at cell centres. The spacing never looks at the box height.
#[derive(Debug)]
pub struct Square {
    a: f64,
    sites_per_side: usize,
}
impl Square {
    pub fn new(a: f64, sites_per_side: usize) -> Result<Self, Error> {
        check_positive("Lattice constant", a).map_err(Error::InitializationError)?;
        Ok(Self { a, sites_per_side })
    }
    pub fn for_count(count: usize, width: f64) -> Result<Self, Error> {
        let sites_per_side = (count as f64).sqrt().ceil() as usize;
        if sites_per_side == 0 {
            return Err(Error::InitializationError(String::from(
                "Cannot build a lattice for zero sites",
            )));
        }
        Self::new(width / sites_per_side as f64, sites_per_side)
    }
    pub fn sites_per_side(&self) -> usize {
        self.sites_per_side
    }
    /// Extent of the occupied columns or rows, `sites_per_side * a`
    pub fn span(&self) -> f64 {
        self.a * self.sites_per_side as f64
    }
}
impl Lattice for Square {
    fn cell_lengths(&self) -> [f64; 2] {
        [self.a, self.a]
    }
    fn coords(&self, count: usize) -> Vec<Vector2> {
        let mut coords: Vec<Vector2> = Vec::with_capacity(count);
        // x index outer, y index inner
        'fill: for i in 0..self.sites_per_side {
            for j in 0..self.sites_per_side {
                if coords.len() >= count {
                    break 'fill;
                }
                coords.push(Vector2::new(
                    (i as f64 + 0.5) * self.a,
                    (j as f64 + 0.5) * self.a,
                ));
            }
        }
        coords
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::utils::min_pair_distance;

    #[test]
    fn sides_round_up() {
        assert_eq!(Square::for_count(9, 1.0).unwrap().sites_per_side(), 3);
        assert_eq!(Square::for_count(10, 1.0).unwrap().sites_per_side(), 4);
        assert_eq!(Square::for_count(1, 1.0).unwrap().sites_per_side(), 1);
        assert!(Square::for_count(0, 1.0).is_err());
    }

    #[test]
    fn fills_columns_first_and_stops_at_count() {
        let lattice = Square::for_count(5, 3.0).unwrap();
        let coords = lattice.coords(5);
        assert_eq!(coords.len(), 5);
        assert_eq!(coords[0], Vector2::new(0.5, 0.5));
        assert_eq!(coords[1], Vector2::new(0.5, 1.5));
        assert_eq!(coords[2], Vector2::new(0.5, 2.5));
        assert_eq!(coords[3], Vector2::new(1.5, 0.5));
        assert_eq!(coords[4], Vector2::new(1.5, 1.5));
    }

    #[test]
    fn spacing_is_width_over_side() {
        let lattice = Square::for_count(16, 2.0).unwrap();
        assert_eq!(lattice.cell_lengths(), [0.5, 0.5]);
        let coords = lattice.coords(16);
        assert_relative_eq!(min_pair_distance(&coords).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(lattice.span(), 2.0);
    }
}
