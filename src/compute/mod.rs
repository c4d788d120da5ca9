use std::fmt::Display;

use crate::{ForceEvaluation, PairPotential, Simulation};

/// Scalar observables of a simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compute {
    KineticEnergy,
    PotentialEnergy,
    TotalEnergy,
    Pressure,
    /// Kinetic temperature in 2D with `k_B = 1`, `KE / N`
    Temperature,
}
impl Compute {
    /// Column name used in observable records
    pub fn name(&self) -> &'static str {
        match self {
            Compute::KineticEnergy => "E_kin",
            Compute::PotentialEnergy => "E_pot",
            Compute::TotalEnergy => "E_tot",
            Compute::Pressure => "pressure",
            Compute::Temperature => "temperature",
        }
    }

    /// Evaluate the observable. `evaluation` must come from the latest force
    /// pass on `sim`, it only matters for the pressure.
    pub fn compute<A>(&self, sim: &Simulation<A>, evaluation: &ForceEvaluation) -> f64
    where
        A: PairPotential,
    {
        match self {
            Compute::KineticEnergy => sim.kinetic_energy(),
            Compute::PotentialEnergy => sim.potential_energy(),
            Compute::TotalEnergy => sim.total_energy(),
            Compute::Pressure => sim.pressure(evaluation, sim.container().area()),
            Compute::Temperature => {
                let n = sim.particles().len();
                if n == 0 {
                    0.0
                } else {
                    sim.kinetic_energy() / n as f64
                }
            }
        }
    }
}
impl Display for Compute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}
