#![deny(missing_docs)]
#![doc = "QUBO formulation of the k-clique cover decision problem: penalty calibration, variable layout, the energy model and its Ising view."]

mod ising;
mod layout;
mod model;
mod penalty;

pub use ising::IsingModel;
pub use layout::{VariableKey, VariableLayout};
pub use model::{EnergyModel, ModelBuilder, QuadraticModel};
pub use penalty::{PenaltyWeights, DEFAULT_PENALTY_A};
