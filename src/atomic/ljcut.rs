use super::PairPotential;
use crate::{error::check_non_negative, Error};

/// Coefficients of a truncated and shifted 12-6 potential
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LJCutCoeff {
    sigma: f64,
    epsilon: f64,
    rcut: f64,
    sigma6: f64,
    rcut2: f64,
    shift: f64, // U(rcut), subtracted so the energy vanishes at the cutoff
}
impl LJCutCoeff {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Self {
        let sigma6 = sigma * sigma * sigma * sigma * sigma * sigma;
        let rcut2 = rcut * rcut;
        let shift = if rcut > 0.0 {
            let r2_inv = 1.0 / rcut2;
            let s6_r6 = sigma6 * r2_inv * r2_inv * r2_inv;
            4.0 * epsilon * (s6_r6 * s6_r6 - s6_r6)
        } else {
            0.0
        };
        Self {
            sigma,
            epsilon,
            rcut,
            sigma6,
            rcut2,
            shift,
        }
    }
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
    pub fn rcut(&self) -> f64 {
        self.rcut
    }
    pub fn shift(&self) -> f64 {
        self.shift
    }
}

/// Lennard-Jones 12-6 potential, cut at `rcut` and shifted to zero there
#[derive(Clone, Debug, PartialEq)]
pub struct LJCut {
    coeff: LJCutCoeff,
}
impl LJCut {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Result<Self, Error> {
        let mut lj = Self::default();
        lj.set_coeff(sigma, epsilon, rcut)?;
        Ok(lj)
    }
    /// Replace all three parameters; the energy shift is recomputed with them
    pub fn set_coeff(&mut self, sigma: f64, epsilon: f64, rcut: f64) -> Result<(), Error> {
        check_non_negative("sigma", sigma).map_err(Error::AtomicPotentialError)?;
        check_non_negative("epsilon", epsilon).map_err(Error::AtomicPotentialError)?;
        check_non_negative("rcut", rcut).map_err(Error::AtomicPotentialError)?;
        self.coeff = LJCutCoeff::new(sigma, epsilon, rcut);
        Ok(())
    }
    pub fn coeff(&self) -> &LJCutCoeff {
        &self.coeff
    }
    pub fn sigma(&self) -> f64 {
        self.coeff.sigma
    }
    pub fn epsilon(&self) -> f64 {
        self.coeff.epsilon
    }
    pub fn rcut(&self) -> f64 {
        self.coeff.rcut
    }
    pub fn shift(&self) -> f64 {
        self.coeff.shift
    }
}
impl Default for LJCut {
    /// All parameters zero: no particle ever falls inside the cutoff
    fn default() -> Self {
        Self {
            coeff: LJCutCoeff::new(0.0, 0.0, 0.0),
        }
    }
}

impl PairPotential for LJCut {
    fn cutoff_distance(&self) -> f64 {
        self.coeff.rcut
    }
    fn cutoff_distance_sq(&self) -> f64 {
        self.coeff.rcut2
    }
    // U(r) = 4 eps ((sig/r)^12 - (sig/r)^6) - U(rcut)
    // F(r) / r = -U'(r) / r = 24 eps / r^2 (2 (sig/r)^12 - (sig/r)^6)
    fn force_factor(&self, r2: f64) -> f64 {
        let r2_inv = 1.0 / r2;
        let r6_inv = r2_inv * r2_inv * r2_inv;
        let s6_r6 = self.coeff.sigma6 * r6_inv;
        24.0 * self.coeff.epsilon * r2_inv * (2.0 * s6_r6 * s6_r6 - s6_r6)
    }
    fn pair_energy(&self, r2: f64) -> f64 {
        let r2_inv = 1.0 / r2;
        let r6_inv = r2_inv * r2_inv * r2_inv;
        let s6_r6 = self.coeff.sigma6 * r6_inv;
        4.0 * self.coeff.epsilon * (s6_r6 * s6_r6 - s6_r6) - self.coeff.shift
    }
    fn particle_radius(&self) -> f64 {
        0.5 * self.coeff.sigma
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn energy_vanishes_at_cutoff() {
        for &(sigma, epsilon) in &[(1.0, 1.0), (0.1, 2.5), (0.37, 0.01), (3.0, 10.0)] {
            let lj = LJCut::new(sigma, epsilon, 2.5 * sigma).unwrap();
            let rc2 = lj.rcut() * lj.rcut();
            assert_abs_diff_eq!(lj.pair_energy(rc2), 0.0, epsilon = 1e-12 * epsilon.max(1.0));
        }
    }

    #[test]
    fn shift_matches_closed_form() {
        let lj = LJCut::new(1.0, 2.0, 2.0).unwrap();
        let sr6 = (1.0f64 / 2.0).powi(6);
        assert_relative_eq!(lj.shift(), 8.0 * (sr6 * sr6 - sr6), max_relative = 1e-12);
        assert_eq!(LJCut::new(1.0, 2.0, 0.0).unwrap().shift(), 0.0);
    }

    #[test]
    fn shift_follows_new_coefficients() {
        let mut lj = LJCut::new(1.0, 1.0, 2.5).unwrap();
        let before = lj.shift();
        lj.set_coeff(1.0, 3.0, 2.5).unwrap();
        assert_relative_eq!(lj.shift(), 3.0 * before, max_relative = 1e-12);
        lj.set_coeff(1.0, 3.0, 0.0).unwrap();
        assert_eq!(lj.shift(), 0.0);
    }

    #[test]
    fn minimum_and_zero_crossing() {
        let lj = LJCut::new(1.0, 1.0, 1e6).unwrap();
        // Force vanishes at r = 2^(1/6) sigma where the energy is -eps
        let rmin2 = 2.0f64.powf(1.0 / 3.0);
        assert_abs_diff_eq!(lj.force_factor(rmin2), 0.0, epsilon = 1e-12);
        assert_relative_eq!(lj.pair_energy(rmin2), -1.0, max_relative = 1e-9);
        // Repulsive inside sigma, attractive outside the minimum
        assert!(lj.force_factor(0.81) > 0.0);
        assert!(lj.force_factor(2.25) < 0.0);
    }

    #[test]
    fn force_is_minus_energy_gradient() {
        let lj = LJCut::new(1.0, 1.5, 3.0).unwrap();
        let r: f64 = 1.3;
        let h = 1e-6;
        let du_dr = (lj.pair_energy((r + h) * (r + h)) - lj.pair_energy((r - h) * (r - h))) / (2.0 * h);
        assert_relative_eq!(lj.force_factor(r * r) * r, -du_dr, max_relative = 1e-6);
    }

    #[test]
    fn rejects_negative_parameters() {
        assert!(LJCut::new(-1.0, 1.0, 2.5).is_err());
        assert!(LJCut::new(1.0, -1.0, 2.5).is_err());
        assert!(LJCut::new(1.0, 1.0, f64::INFINITY).is_err());
        let mut lj = LJCut::new(1.0, 1.0, 2.5).unwrap();
        assert!(lj.set_coeff(1.0, 1.0, -2.5).is_err());
        assert_eq!(lj.rcut(), 2.5);
        assert_eq!(LJCut::new(0.0, 0.0, 0.0).unwrap(), LJCut::default());
    }
}
