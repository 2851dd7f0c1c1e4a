//! Run circuits with dense linear algebra on the CPU.

use tracing::debug;

use crate::{
	QuantumGate,
	backend::{Backend, Program},
	circuit::Circuit,
	error::Result,
	state::QuantumState,
};

/// Backend to compile circuits into [DenseProgram]'s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DenseBackend;

/// A circuit fused into a single dense operator.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseProgram {
	gate: QuantumGate,
}

impl DenseProgram {
	/// Creates a program from a gate representing the whole circuit.
	pub fn from_gate(gate: QuantumGate) -> Self {
		Self { gate }
	}

	/// Gets the matrix representation of the program.
	pub fn as_gate(&self) -> &QuantumGate {
		&self.gate
	}
}

impl Backend<DenseProgram> for DenseBackend {
	fn compile(&self, circuit: &Circuit) -> Result<DenseProgram> {
		debug!(
			nb_qubits = circuit.nb_qubits(),
			nb_stages = circuit.steps().len(),
			"compiling dense program"
		);
		return Ok(DenseProgram::from_gate(circuit.as_gate()?));
	}
}

impl Program for DenseProgram {
	fn nb_qubits(&self) -> usize {
		self.gate.nb_qubits()
	}

	fn run(&self, state: &QuantumState) -> Result<QuantumState> {
		self.gate.apply_state(state)
	}
}
