//! Run circuits with sparse matrix-vector products, never building a dense operator.

use tracing::debug;

use crate::{
	backend::{Backend, Program},
	circuit::Circuit,
	error::{Result, SimulatorError, dimension_of},
	sparse::SparseMatrix,
	state::QuantumState,
};

/// Backend to compile circuits into [SparseProgram]'s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SparseBackend;

/// A circuit kept as a list of sparse operators, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseProgram {
	/// Operators to apply in order to the state vector.
	operations: Vec<SparseMatrix>,
	/// The number of qubits the program works on.
	nb_qubits:  usize,
}

impl SparseProgram {
	/// Gets the operators, in the order they are applied.
	pub fn operations(&self) -> &[SparseMatrix] {
		&self.operations
	}

	/// Counts the nonzero entries stored over all operators.
	pub fn nnz(&self) -> usize {
		self.operations.iter().map(SparseMatrix::nnz).sum()
	}
}

impl Backend<SparseProgram> for SparseBackend {
	fn compile(&self, circuit: &Circuit) -> Result<SparseProgram> {
		let operations: Vec<SparseMatrix> = circuit.steps().iter().map(|stage| stage.to_sparse()).collect();
		let program = SparseProgram {
			operations,
			nb_qubits: circuit.nb_qubits(),
		};
		debug!(
			nb_qubits = program.nb_qubits,
			nb_stages = program.operations.len(),
			nnz = program.nnz(),
			"compiling sparse program"
		);
		return Ok(program);
	}
}

impl Program for SparseProgram {
	fn nb_qubits(&self) -> usize {
		self.nb_qubits
	}

	fn run(&self, state: &QuantumState) -> Result<QuantumState> {
		if state.nb_qubits() != self.nb_qubits {
			let expected = dimension_of(self.nb_qubits)?;
			return Err(SimulatorError::dimension_mismatch((expected, 1), (state.dimension(), 1)));
		}

		let mut current = state.clone();
		for operation in &self.operations {
			current = operation.apply_state(&current)?;
		}
		return Ok(current);
	}
}
