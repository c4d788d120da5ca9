use num_traits::Zero;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{error::check_non_negative, utils::Vector2, Error};

/// Kinematic state of a single particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    /// Acceleration from the force evaluation before the latest one
    pub previous_acceleration: Vector2,
    pub mass: f64,
    /// Drawing radius only, plays no part in the dynamics
    pub radius: f64,
}
impl Particle {
    pub fn new(id: usize, position: Vector2, velocity: Vector2, radius: f64, mass: f64) -> Self {
        Self {
            id,
            position,
            velocity,
            acceleration: Vector2::zero(),
            previous_acceleration: Vector2::zero(),
            mass,
            radius,
        }
    }
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm2()
    }
}

/// Index-stable collection of the particles in a simulation
#[derive(Clone, Debug, Default)]
pub struct Particles {
    particles: Vec<Particle>,
}
impl Particles {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    pub fn get(&self, idx: usize) -> Option<&Particle> {
        self.particles.get(idx)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
    pub fn ids(&self) -> Vec<usize> {
        self.particles.iter().map(|p| p.id).collect()
    }
    pub fn id_to_idx(&self, id: usize) -> Option<usize> {
        self.particles.iter().position(|p| p.id == id)
    }
    pub fn positions(&self) -> Vec<Vector2> {
        self.particles.iter().map(|p| p.position).collect()
    }
    pub fn velocities(&self) -> Vec<Vector2> {
        self.particles.iter().map(|p| p.velocity).collect()
    }
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Append particles at rest, numbering them after the current largest id
    pub fn add_particles(&mut self, coords: Vec<Vector2>, mass: f64, radius: f64) {
        let particle_id = match self.particles.iter().map(|p| p.id).max() {
            Some(j) => j + 1,
            None => 0,
        };
        self.particles.reserve(coords.len());
        for (i, coord) in coords.into_iter().enumerate() {
            self.particles.push(Particle::new(
                particle_id + i,
                coord,
                Vector2::zero(),
                radius,
                mass,
            ));
        }
    }

    /// Draw every velocity component independently from `Uniform[-vmax, vmax]`.
    ///
    /// Components are drawn in particle order, x before y.
    pub fn set_uniform_velocities<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        vmax: f64,
    ) -> Result<(), Error> {
        check_non_negative("vmax", vmax).map_err(Error::InitializationError)?;
        let dist = Uniform::new_inclusive(-vmax, vmax);
        for particle in self.particles.iter_mut() {
            let vx = dist.sample(rng);
            let vy = dist.sample(rng);
            particle.velocity = Vector2::new(vx, vy);
        }
        Ok(())
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }
    pub(crate) fn clear(&mut self) {
        self.particles.clear()
    }
}

impl<'a> IntoIterator for &'a Particles {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;
    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn kinetic_energy_of_one_particle() {
        let p = Particle::new(0, Vector2::zero(), Vector2::new(3.0, 4.0), 0.05, 2.0);
        assert_relative_eq!(p.kinetic_energy(), 25.0);
        assert!(p.acceleration.is_zero());
        assert!(p.previous_acceleration.is_zero());
    }

    #[test]
    fn ids_continue_after_largest() {
        let mut particles = Particles::new();
        particles.add_particles(vec![Vector2::new(0.1, 0.1), Vector2::new(0.2, 0.2)], 1.0, 0.0);
        particles.add_particles(vec![Vector2::new(0.3, 0.3)], 2.0, 0.0);
        assert_eq!(particles.ids(), vec![0, 1, 2]);
        assert_eq!(particles.id_to_idx(2), Some(2));
        assert_eq!(particles.id_to_idx(7), None);
        assert_eq!(particles.get(2).map(|p| p.mass), Some(2.0));
    }

    #[test]
    fn uniform_velocities_stay_in_range() {
        let mut particles = Particles::new();
        particles.add_particles(vec![Vector2::zero(); 200], 1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(7);
        particles.set_uniform_velocities(&mut rng, 0.5).unwrap();
        assert!(particles
            .velocities()
            .iter()
            .all(|v| v.x.abs() <= 0.5 && v.y.abs() <= 0.5));
        assert!(particles.kinetic_energy() > 0.0);
    }

    #[test]
    fn negative_vmax_is_rejected() {
        let mut particles = Particles::new();
        particles.add_particles(vec![Vector2::zero()], 1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(particles.set_uniform_velocities(&mut rng, -1.0).is_err());
    }
}
