mod verlet;
pub use verlet::Verlet;

use crate::{PairPotential, Simulation};

/// Simulation integrator, split around the force evaluation of each step
pub trait Integrator<A>
where
    A: PairPotential,
{
    fn pre_force(_simulation: &mut Simulation<A>, _dt: f64) {}
    fn post_force(_simulation: &mut Simulation<A>, _dt: f64) {}
}
