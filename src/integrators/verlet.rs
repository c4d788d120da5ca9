use super::*;

/// Velocity-verlet integrator
pub struct Verlet {}

impl Verlet {
    /// Steps the positions forward a full timestep and the velocities by half,
    /// both with the acceleration from the latest force evaluation, then wraps
    /// the positions back into the container.
    fn drift_and_half_kick<A>(simulation: &mut Simulation<A>, dt: f64)
    where
        A: PairPotential,
    {
        let half_dt = 0.5 * dt;
        for particle in simulation.particles.iter_mut() {
            let acc = particle.acceleration;
            let moved = particle.position + particle.velocity * dt + acc * (half_dt * dt);
            particle.position = simulation.container.wrap(moved);
            particle.velocity += acc * half_dt;
        }
    }
    /// Steps the velocities by half a timestep with freshly computed accelerations
    fn half_kick<A>(simulation: &mut Simulation<A>, dt: f64)
    where
        A: PairPotential,
    {
        let half_dt = 0.5 * dt;
        for particle in simulation.particles.iter_mut() {
            particle.velocity += particle.acceleration * half_dt;
        }
    }
}

impl<A> Integrator<A> for Verlet
where
    A: PairPotential,
{
    fn pre_force(simulation: &mut Simulation<A>, dt: f64) {
        Verlet::drift_and_half_kick(simulation, dt);
    }
    fn post_force(simulation: &mut Simulation<A>, dt: f64) {
        Verlet::half_kick(simulation, dt);
    }
}
