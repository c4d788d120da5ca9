//! Two-dimensional Lennard-Jones gas in a periodic box, integrated with
//! velocity-verlet over an O(N^2) pair loop.

pub mod atomic;
pub mod compute;
pub mod config;
pub mod container;
pub mod error;
pub mod integrators;
pub mod lattice;
pub mod output;
pub mod particles;
pub mod prelude;
pub mod region;
pub mod simulation;
pub mod utils;

pub use atomic::*;
pub use config::SimulationConfig;
pub use container::Container;
pub use error::Error;
pub use integrators::*;
pub use particles::{Particle, Particles};
pub use simulation::{ForceEvaluation, RunSummary, Simulation};
