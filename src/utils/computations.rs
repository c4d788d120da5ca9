use super::Vector2;

pub fn distance_squared(coord1: &Vector2, coord2: &Vector2) -> f64 {
    (*coord1 - *coord2).norm2()
}

/// Smallest pairwise distance in a set of coordinates, ignoring periodic images.
///
/// ```rust
/// use ljbox::utils::{min_pair_distance, Vector2};
///
/// let coords = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(3.0, 0.0),
///     Vector2::new(3.0, 1.0),
/// ];
/// assert_eq!(min_pair_distance(&coords), Some(1.0));
/// assert_eq!(min_pair_distance(&coords[..1]), None);
/// ```
pub fn min_pair_distance(coords: &[Vector2]) -> Option<f64> {
    let mut min_dist_sq: Option<f64> = None;
    for (i, ci) in coords.iter().enumerate() {
        for cj in &coords[i + 1..] {
            let dist_sq = distance_squared(ci, cj);
            min_dist_sq = Some(match min_dist_sq {
                Some(d) => d.min(dist_sq),
                None => dist_sq,
            });
        }
    }
    min_dist_sq.map(f64::sqrt)
}
