use super::PairPotential;

/// Non-interacting particles, an ideal gas
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInteraction {}
impl NoInteraction {
    pub fn new() -> Self {
        Self {}
    }
}
impl PairPotential for NoInteraction {
    fn cutoff_distance(&self) -> f64 {
        0.0
    }
    fn force_factor(&self, _r2: f64) -> f64 {
        0.0
    }
    fn pair_energy(&self, _r2: f64) -> f64 {
        0.0
    }
}
