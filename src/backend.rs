//! Ways of running a [Circuit] on a state.
//!
//! The representation is an explicit choice of the caller: [dense::DenseBackend] fuses the whole
//! circuit into one `4^n`-entry matrix, while [sparse::SparseBackend] keeps every stage sparse so
//! large permutation-like operators stay tractable.

use crate::{circuit::Circuit, error::Result, state::QuantumState};

/// Compiles circuits into runnable programs.
pub trait Backend<P: Program> {
	/// Compiles `circuit` into a program.
	fn compile(&self, circuit: &Circuit) -> Result<P>;
}

/// A compiled circuit.
pub trait Program {
	/// Gets the number of qubits the program works on.
	fn nb_qubits(&self) -> usize;

	/// Runs the program on `state` and gives back the final state.
	fn run(&self, state: &QuantumState) -> Result<QuantumState>;
}

pub mod dense;
pub mod sparse;
