//! Run configuration, loaded from YAML.
//!
//! Every field has a default, so a partial file (or none at all) is valid:
//!
//! ```yaml
//! num_particles: 100   # particles placed on the initial grid
//! epsilon: 1.0         # LJ energy scale
//! sigma: 0.1           # LJ length scale
//! vmax: 0.01           # initial velocity components are uniform in [-vmax, vmax]
//! width: 1.0           # box size, periodic in both directions
//! height: 1.0
//! timestep: 5.0e-6
//! total_time: 1.0
//! cutoff_factor: 3.0   # rcut = cutoff_factor * sigma
//! sample_every: 50     # steps between recorded samples
//! report_every: 2000   # steps between progress log lines
//! seed: 45             # velocity generator seed
//! ```

use std::{fs::File, io::Read, path::Path};

use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

use crate::{
    error::{check_non_negative, check_positive},
    output::Output,
    simulation::DEFAULT_SEED,
    Container, Error, Simulation,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub num_particles: usize,
    pub epsilon: f64,
    pub sigma: f64,
    pub vmax: f64,
    pub width: f64,
    pub height: f64,
    pub timestep: f64,
    pub total_time: f64,
    pub cutoff_factor: f64,
    pub sample_every: usize,
    pub report_every: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_particles: 100,
            epsilon: 1.0,
            sigma: 0.1,
            vmax: 0.01,
            width: 1.0,
            height: 1.0,
            timestep: 5e-6,
            total_time: 1.0,
            cutoff_factor: 3.0,
            sample_every: 50,
            report_every: 2000,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_yaml::from_reader(reader)?)
    }
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("timestep", self.timestep),
            ("total_time", self.total_time),
        ];
        let non_negative = [
            ("epsilon", self.epsilon),
            ("sigma", self.sigma),
            ("vmax", self.vmax),
            ("cutoff_factor", self.cutoff_factor),
        ];
        for (name, value) in positive {
            check_positive(name, value).map_err(Error::ConfigError)?;
        }
        for (name, value) in non_negative {
            check_non_negative(name, value).map_err(Error::ConfigError)?;
        }
        self.output()?;
        Ok(())
    }

    pub fn rcut(&self) -> f64 {
        self.cutoff_factor * self.sigma
    }
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
    /// Whole steps that fit in `total_time`
    pub fn num_steps(&self) -> usize {
        (self.total_time / self.timestep) as usize
    }
    pub fn output(&self) -> Result<Output, Error> {
        Output::new(self.sample_every, self.report_every)
    }

    /// Validated simulation with particles placed on the grid
    pub fn build(&self) -> Result<Simulation, Error> {
        self.validate()?;
        let container = Container::new(self.width, self.height)?;
        let mut sim = Simulation::new(container);
        sim.set_lj_parameters(self.sigma, self.epsilon, self.rcut())?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        sim.initialize_grid_with_rng(self.num_particles, self.vmax, &mut rng)?;
        Ok(sim)
    }
}
