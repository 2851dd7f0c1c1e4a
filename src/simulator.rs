//! Measurements and program runs sharing one configured random source.

use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::{
	backend::Program,
	config::SimulatorConfig,
	error::Result,
	state::QuantumState,
};

/// Owns the random source used for measurements, so that a seeded configuration gives
/// reproducible outcomes.
#[derive(Debug, Clone)]
pub struct Simulator {
	config: SimulatorConfig,
	rng:    StdRng,
}

impl Simulator {
	/// Creates a simulator from a validated configuration.
	pub fn new(config: SimulatorConfig) -> Result<Self> {
		config.validate()?;
		let rng = config.rng();
		debug!(seed = ?config.seed, "created simulator");
		return Ok(Self { config, rng });
	}

	/// Creates a simulator with a fixed seed and default settings.
	pub fn seeded(seed: u64) -> Self {
		let config = SimulatorConfig::seeded(seed);
		let rng = config.rng();
		Self { config, rng }
	}

	/// Gets the configuration the simulator was built with.
	pub fn config(&self) -> &SimulatorConfig {
		&self.config
	}

	/// Samples one full-system outcome, see [QuantumState::measure_at].
	pub fn measure(&mut self, state: &QuantumState) -> Result<usize> {
		state.measure_with(&mut self.rng)
	}

	/// Measures the `nb_measured` least significant qubits, see [QuantumState::collapse_at].
	pub fn collapse(&mut self, state: &QuantumState, nb_measured: usize) -> Result<QuantumState> {
		state.collapse_with(nb_measured, &mut self.rng)
	}

	/// Samples `shots` outcomes and counts how often each basis state came out.
	pub fn sample_counts(&mut self, state: &QuantumState, shots: usize) -> Result<Vec<usize>> {
		state.sample_counts(shots, &mut self.rng)
	}

	/// Runs a compiled program, reporting outputs that drifted off the unit sphere.
	pub fn run<P: Program>(&self, program: &P, state: &QuantumState) -> Result<QuantumState> {
		let output = program.run(state)?;
		if self.config.check_normalization && !output.is_normalized(self.config.tolerance) {
			warn!(
				norm = output.norm(),
				tolerance = self.config.tolerance,
				"program output is not normalized"
			);
		}
		return Ok(output);
	}
}
