pub mod ljcut;
pub mod none;

pub use ljcut::{LJCut, LJCutCoeff};
pub use none::NoInteraction;

use num_traits::Zero;

use crate::{utils::Vector2, Container};

/// Squared separations below this are clamped to it, so coincident
/// particles give large but finite forces.
pub const MIN_DISTANCE_SQ: f64 = 1e-10;

/// Pairwise forces and their virial for one configuration
#[derive(Clone, Debug)]
pub struct PairForces {
    pub forces: Vec<Vector2>,
    /// Sum of `F_ij . r_ij` over interacting pairs
    pub virial: f64,
    pub interacting_pairs: usize,
}

/// Trait for pairwise atomic potentials
pub trait PairPotential {
    /// Get the maximum distance for effective interaction
    fn cutoff_distance(&self) -> f64;

    fn cutoff_distance_sq(&self) -> f64 {
        self.cutoff_distance() * self.cutoff_distance()
    }

    /// Force magnitude divided by separation, `F(r) / r`, at squared separation `r2`.
    /// Positive values are repulsive.
    fn force_factor(&self, r2: f64) -> f64;

    /// Pair energy at squared separation `r2`, inside the cutoff
    fn pair_energy(&self, r2: f64) -> f64;

    /// Radius given to particles created for this potential
    fn particle_radius(&self) -> f64 {
        0.0
    }

    /// Compute the pairwise force on every particle, and the virial
    fn compute_forces(&self, positions: &[Vector2], container: &Container) -> PairForces {
        let mut forces = vec![Vector2::zero(); positions.len()];
        let mut virial = 0.0;
        let mut interacting_pairs = 0;
        visit_pairs(
            positions,
            container,
            self.cutoff_distance_sq(),
            |i, j, r, r2| {
                // r points from j to i, so a positive factor pushes i away from j
                let f = r * self.force_factor(r2);
                forces[i] += f;
                forces[j] -= f;
                virial += f.dot(&r);
                interacting_pairs += 1;
            },
        );
        PairForces {
            forces,
            virial,
            interacting_pairs,
        }
    }

    /// Total potential energy, using the same pairs and cutoff as `compute_forces`
    fn compute_potential_energy(&self, positions: &[Vector2], container: &Container) -> f64 {
        let mut energy = 0.0;
        visit_pairs(
            positions,
            container,
            self.cutoff_distance_sq(),
            |_, _, _, r2| energy += self.pair_energy(r2),
        );
        energy
    }
}

/// Visit every unordered pair `i < j` closer than the cutoff.
///
/// The callback receives the minimum-image displacement `r = pos_i - pos_j`
/// and its squared length, clamped below at [`MIN_DISTANCE_SQ`].
pub fn visit_pairs<F>(positions: &[Vector2], container: &Container, cutoff_sq: f64, mut visit: F)
where
    F: FnMut(usize, usize, Vector2, f64),
{
    let n = positions.len();
    for i in 0..n {
        for j in i + 1..n {
            let r = container.minimum_image(positions[i] - positions[j]);
            let r2 = r.norm2().max(MIN_DISTANCE_SQ);
            if r2 < cutoff_sq {
                visit(i, j, r, r2);
            }
        }
    }
}
