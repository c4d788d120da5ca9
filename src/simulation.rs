use log::{debug, info, trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    compute::Compute,
    error::check_positive,
    integrators::{Integrator, Verlet},
    lattice::{Lattice, Square},
    output::{Observables, Output, Recorder},
    particles::Particles,
    utils::Vector2,
    Container, Error, LJCut, PairPotential,
};

/// Seed used by [`Simulation::initialize_grid`]
pub const DEFAULT_SEED: u64 = 45;

/// Result of one force evaluation.
///
/// The virial only describes the configuration the forces were computed for,
/// so pressure queries take it explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForceEvaluation {
    virial: f64,
    interacting_pairs: usize,
}
impl ForceEvaluation {
    /// Sum of `F_ij . r_ij` over pairs inside the cutoff
    pub fn virial(&self) -> f64 {
        self.virial
    }
    pub fn interacting_pairs(&self) -> usize {
        self.interacting_pairs
    }
}

/// Totals from [`Simulation::run`]
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub samples: usize,
    pub final_time: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
}

/// Particles in a periodic box, interacting through a pair potential
pub struct Simulation<A = LJCut>
where
    A: PairPotential,
{
    pub(crate) particles: Particles,
    pub(crate) container: Container,
    atomic_potential: A,
    forces_computed: bool,
}

impl Simulation<LJCut> {
    /// Create an empty Lennard-Jones simulation with all coefficients zero
    pub fn new(container: Container) -> Self {
        Self::with_potential(container, LJCut::default())
    }

    /// Set sigma, epsilon and the cutoff; later force and energy evaluations use them
    pub fn set_lj_parameters(&mut self, sigma: f64, epsilon: f64, rcut: f64) -> Result<(), Error> {
        self.atomic_potential.set_coeff(sigma, epsilon, rcut)
    }
}

impl<A> Simulation<A>
where
    A: PairPotential,
{
    pub fn with_potential(container: Container, atomic_potential: A) -> Self {
        Self {
            particles: Particles::new(),
            container,
            atomic_potential,
            forces_computed: false,
        }
    }

    // Getters
    pub fn container(&self) -> &Container {
        &self.container
    }
    pub fn atomic_potential(&self) -> &A {
        &self.atomic_potential
    }
    pub fn mut_atomic_potential(&mut self) -> &mut A {
        &mut self.atomic_potential
    }
    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    // Particle creation

    /// Place `num_particles` on a square grid, with seeded random velocities
    pub fn initialize_grid(&mut self, num_particles: usize, vmax: f64) -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        self.initialize_grid_with_rng(num_particles, vmax, &mut rng)
    }

    /// Replace all particles with `num_particles` placed at cell centres of a
    /// `ceil(sqrt(n))`-wide square grid spanning the container width. Mass is 1
    /// and velocity components are uniform in `[-vmax, vmax]`.
    pub fn initialize_grid_with_rng<R>(
        &mut self,
        num_particles: usize,
        vmax: f64,
        rng: &mut R,
    ) -> Result<(), Error>
    where
        R: Rng + ?Sized,
    {
        self.particles.clear();
        self.forces_computed = false;
        if num_particles == 0 {
            info!("Initialized 0 particles");
            return Ok(());
        }

        let lattice = Square::for_count(num_particles, self.container.width())?;
        let coords = lattice.coords(num_particles);
        if coords.iter().any(|c| !self.container.contains(c)) {
            warn!(
                "Grid spacing {} follows the box width, some of the {} rows lie beyond height {}",
                lattice.cell_lengths()[1],
                lattice.sites_per_side(),
                self.container.height()
            );
        }
        self.particles
            .add_particles(coords, 1.0, self.atomic_potential.particle_radius());
        self.particles.set_uniform_velocities(rng, vmax)?;

        info!(
            "Initialized {} particles on a {}x{} grid",
            self.particles.len(),
            lattice.sites_per_side(),
            lattice.sites_per_side()
        );
        Ok(())
    }

    /// Append particles at rest at the given coordinates
    pub fn add_particles(&mut self, coords: Vec<Vector2>, mass: f64) {
        let radius = self.atomic_potential.particle_radius();
        self.particles.add_particles(coords, mass, radius);
        self.forces_computed = false;
    }

    // Dynamics

    /// Negate every velocity. Stepping afterwards retraces the trajectory.
    pub fn reverse_velocities(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.velocity = -particle.velocity;
        }
    }

    /// Evaluate the pair forces at the current positions.
    ///
    /// Each particle's acceleration moves to its previous acceleration before
    /// the new one is stored.
    pub fn compute_forces(&mut self) -> ForceEvaluation {
        let positions = self.particles.positions();
        let pair_forces = self
            .atomic_potential
            .compute_forces(&positions, &self.container);
        for (particle, force) in self.particles.iter_mut().zip(pair_forces.forces) {
            particle.previous_acceleration = particle.acceleration;
            particle.acceleration = force / particle.mass;
        }
        self.forces_computed = true;
        trace!(
            "{} interacting pairs, virial {}",
            pair_forces.interacting_pairs,
            pair_forces.virial
        );
        ForceEvaluation {
            virial: pair_forces.virial,
            interacting_pairs: pair_forces.interacting_pairs,
        }
    }

    /// Advance one velocity-verlet step of length `dt`.
    ///
    /// Forces must have been computed since the particles were created.
    pub fn step(&mut self, dt: f64) -> Result<ForceEvaluation, Error> {
        if !self.forces_computed {
            return Err(Error::IntegratorError(String::from(
                "Forces should be computed before the first step",
            )));
        }
        Verlet::pre_force(self, dt);
        let evaluation = self.compute_forces();
        Verlet::post_force(self, dt);
        self.check_finite()?;
        Ok(evaluation)
    }

    /// Integrate `num_steps` steps, handing snapshots and observables to
    /// `recorder` on every sampled step.
    ///
    /// A snapshot is taken before a sampled step and its observables after it.
    pub fn run<R>(
        &mut self,
        dt: f64,
        num_steps: usize,
        output: &Output,
        recorder: &mut R,
    ) -> Result<RunSummary, Error>
    where
        R: Recorder,
    {
        check_positive("Timestep", dt).map_err(Error::IntegratorError)?;
        self.compute_forces();
        let initial_energy = self.total_energy();
        info!("Starting run of {} steps", num_steps);

        let mut time = 0.0;
        let mut samples = 0;
        for step in 0..num_steps {
            let sample = output.should_sample(step);
            if sample {
                recorder.record_snapshot(time, &self.particles)?;
            }

            let evaluation = self.step(dt)?;
            time += dt;

            if sample {
                let observables = Observables::sample(self, &evaluation, time);
                recorder.record_observables(&observables)?;
                samples += 1;
                debug!(
                    "t = {} T = {}",
                    time,
                    Compute::Temperature.compute(self, &evaluation)
                );
                if output.should_report(step) {
                    info!(
                        "Step {}/{} P: {:.3} Etot: {:.3}",
                        step, num_steps, observables.pressure, observables.total_energy
                    );
                }
            }
        }

        let final_energy = self.total_energy();
        info!(
            "Finished {} steps, total energy {} -> {}",
            num_steps, initial_energy, final_energy
        );
        Ok(RunSummary {
            steps: num_steps,
            samples,
            final_time: time,
            initial_energy,
            final_energy,
        })
    }

    // Observables

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.kinetic_energy()
    }
    /// Shifted pair energy summed over pairs inside the cutoff
    pub fn potential_energy(&self) -> f64 {
        self.atomic_potential
            .compute_potential_energy(&self.particles.positions(), &self.container)
    }
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
    /// 2D virial pressure, `(2 KE + W) / (2 area)`, with `W` taken from `evaluation`
    pub fn pressure(&self, evaluation: &ForceEvaluation, area: f64) -> f64 {
        (2.0 * self.kinetic_energy() + evaluation.virial) / (2.0 * area)
    }

    // Private functions
    fn check_finite(&self) -> Result<(), Error> {
        match self
            .particles
            .iter()
            .find(|p| !(p.position.is_finite() && p.velocity.is_finite()))
        {
            Some(p) => Err(Error::IntegratorError(format!(
                "Particle {} has a non-finite position or velocity",
                p.id
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn lj_sim(width: f64, height: f64) -> Simulation {
        let mut sim = Simulation::new(Container::new(width, height).unwrap());
        sim.set_lj_parameters(1.0, 1.0, 2.5).unwrap();
        sim
    }

    #[test]
    fn step_needs_forces() {
        let mut sim = lj_sim(10.0, 10.0);
        sim.initialize_grid(4, 0.1).unwrap();
        assert!(sim.step(0.001).is_err());
        sim.compute_forces();
        assert!(sim.step(0.001).is_ok());
        sim.add_particles(vec![Vector2::new(0.5, 9.5)], 1.0);
        assert!(sim.step(0.001).is_err());
    }

    #[test]
    fn empty_grid() {
        let mut sim = lj_sim(10.0, 10.0);
        sim.initialize_grid(0, 0.1).unwrap();
        assert!(sim.particles().is_empty());
        let evaluation = sim.compute_forces();
        assert_eq!(evaluation.virial(), 0.0);
        assert_eq!(sim.total_energy(), 0.0);
        assert!(sim.step(0.01).is_ok());
    }

    #[test]
    fn grid_radius_and_mass() {
        let mut sim = lj_sim(10.0, 10.0);
        sim.set_lj_parameters(0.4, 1.0, 1.0).unwrap();
        sim.initialize_grid(5, 0.1).unwrap();
        for p in sim.particles() {
            assert_eq!(p.radius, 0.2);
            assert_eq!(p.mass, 1.0);
        }
    }

    #[test]
    fn narrow_box_keeps_width_spacing() {
        let mut sim = lj_sim(4.0, 1.0);
        sim.initialize_grid(4, 0.0).unwrap();
        let ys: Vec<f64> = sim.particles().iter().map(|p| p.position.y).collect();
        assert_eq!(ys, vec![1.0, 3.0, 1.0, 3.0]);
    }

    #[test]
    fn rejects_bad_vmax() {
        let mut sim = lj_sim(10.0, 10.0);
        assert!(sim.initialize_grid(4, -0.1).is_err());
        assert!(sim.initialize_grid(4, f64::NAN).is_err());
    }

    #[test]
    fn blow_up_is_reported() {
        let mut sim = lj_sim(10.0, 10.0);
        // (sigma / r)^12 overflows for this pair
        sim.set_lj_parameters(1e20, 1.0, 2.5).unwrap();
        sim.add_particles(vec![Vector2::new(5.0, 5.0), Vector2::new(5.00001, 5.0)], 1.0);
        sim.compute_forces();
        assert!(sim.step(0.1).is_err());
    }

    #[test]
    fn pressure_uses_given_evaluation() {
        let mut sim = lj_sim(6.0, 6.0);
        sim.add_particles(vec![Vector2::new(1.0, 1.0), Vector2::new(2.0, 1.0)], 1.0);
        let evaluation = sim.compute_forces();
        // At r = sigma the pair repels with F = 24 eps / sigma
        assert_relative_eq!(evaluation.virial(), 24.0, max_relative = 1e-12);
        assert_eq!(evaluation.interacting_pairs(), 1);
        assert_relative_eq!(sim.pressure(&evaluation, 36.0), 24.0 / 72.0, max_relative = 1e-12);
        let stale = ForceEvaluation::default();
        assert_eq!(sim.pressure(&stale, 36.0), 0.0);
    }
}
