pub use super::atomic::{LJCut, NoInteraction, PairPotential};
pub use super::compute::Compute;
pub use super::config::SimulationConfig;
pub use super::container::Container;
pub use super::error::Error;
pub use super::lattice::{Lattice, Square};
pub use super::output::{FileRecorder, Observables, Output, Recorder};
pub use super::particles::{Particle, Particles};
pub use super::region::{Rect, Region};
pub use super::simulation::{ForceEvaluation, RunSummary, Simulation};
pub use super::utils::Vector2;
