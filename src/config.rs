//! Simulator configuration.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};

/// Configuration of a [Simulator](crate::simulator::Simulator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
	/// Random seed for reproducible measurements. `None` seeds from the operating system.
	pub seed: Option<u64>,

	/// Tolerance on the squared norm of states when checking normalization.
	pub tolerance: f64,

	/// Whether to report states that leave the unit sphere after running a program.
	pub check_normalization: bool,
}

impl Default for SimulatorConfig {
	fn default() -> Self {
		Self {
			seed:                None,
			tolerance:           1e-9,
			check_normalization: true,
		}
	}
}

impl SimulatorConfig {
	/// Create a configuration with a fixed seed.
	pub fn seeded(seed: u64) -> Self {
		Self {
			seed: Some(seed),
			..Default::default()
		}
	}

	/// Validate the configuration parameters.
	pub fn validate(&self) -> Result<()> {
		if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
			return Err(SimulatorError::invalid_parameter(
				"tolerance",
				"must be positive and finite",
			));
		}
		Ok(())
	}

	/// Creates the random source described by the configuration.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}
