//! Circuits as ordered lists of operators over a fixed register.

use crate::{
	ComplexMatrix, QuantumGate,
	error::{Result, SimulatorError, dimension_of},
	sparse::SparseMatrix,
};

/// One step of a circuit, stored in the representation the caller chose.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
	/// A dense gate.
	Dense(QuantumGate),
	/// A sparse operator, e.g. an oracle built by enumeration.
	Sparse(SparseMatrix),
}

impl Stage {
	/// Gets the side of the operator matrix.
	pub fn dimension(&self) -> usize {
		match self {
			Stage::Dense(gate) => gate.dimension(),
			Stage::Sparse(sparse) => sparse.shape().0,
		}
	}

	/// Gets the stage as a dense matrix.
	pub fn to_dense(&self) -> ComplexMatrix {
		match self {
			Stage::Dense(gate) => gate.matrix().clone(),
			Stage::Sparse(sparse) => sparse.densify(),
		}
	}

	/// Gets the stage as a sparse matrix.
	pub fn to_sparse(&self) -> SparseMatrix {
		match self {
			Stage::Dense(gate) => gate.to_sparse(),
			Stage::Sparse(sparse) => sparse.clone(),
		}
	}
}

/// Operators applied one after the other to a register of `nb_qubits` qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
	steps:     Vec<Stage>,
	nb_qubits: usize,
}

impl Circuit {
	/// Creates an empty circuit on `nb_qubits` qubits.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] if `2^nb_qubits` overflows a `usize`.
	pub fn new(nb_qubits: usize) -> Result<Self> {
		dimension_of(nb_qubits)?;
		return Ok(Self {
			steps: Vec::new(),
			nb_qubits,
		});
	}

	/// Gets the number of qubits the circuit works on.
	pub fn nb_qubits(&self) -> usize {
		self.nb_qubits
	}

	/// Gets the stages, in the order they are applied.
	pub fn steps(&self) -> &[Stage] {
		&self.steps
	}

	fn then_stage(mut self, stage: Stage) -> Result<Self> {
		let dimension = dimension_of(self.nb_qubits)?;
		if stage.dimension() != dimension {
			let side = stage.dimension();
			return Err(SimulatorError::dimension_mismatch((dimension, dimension), (side, side)));
		}
		self.steps.push(stage);
		return Ok(self);
	}

	/// Appends a dense gate to the circuit.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the gate doesn't span the whole register.
	pub fn then(self, gate: QuantumGate) -> Result<Self> {
		self.then_stage(Stage::Dense(gate))
	}

	/// Appends a sparse operator to the circuit.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the operator isn't `2^nb_qubits` square.
	pub fn then_sparse(self, sparse: SparseMatrix) -> Result<Self> {
		if sparse.shape().0 != sparse.shape().1 {
			return Err(SimulatorError::NotSquare {
				rows: sparse.shape().0,
				cols: sparse.shape().1,
			});
		}
		self.then_stage(Stage::Sparse(sparse))
	}

	/// Fuses every stage into one dense gate, later stages on the left.
	/// An empty circuit is the identity.
	pub fn as_gate(&self) -> Result<QuantumGate> {
		let mut gate = QuantumGate::identity(self.nb_qubits)?;
		for stage in &self.steps {
			gate = match stage {
				Stage::Dense(dense) => dense.compose(&gate)?,
				Stage::Sparse(sparse) => QuantumGate::from_sparse(sparse)?.compose(&gate)?,
			};
		}
		return Ok(gate);
	}
}
