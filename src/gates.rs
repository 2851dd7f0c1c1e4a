//! Quantum gates as dense operator matrices, and the standard gate catalog.
//!
//! Multi-qubit gates (CX, CZ, SWAP, CCX) act on the qubits in the order they were tensored
//! together: the first tensor factor is the leftmost (most significant) qubit. Gates are never
//! reordered or addressed by label, so lining up the register with the gate is up to the caller.

use std::f64::consts::PI;

use num::{Complex, Zero};
use tracing::debug;

use crate::{
	Amplitude, ComplexMatrix,
	error::{Result, SimulatorError, dimension_of, log2_exact},
	sparse::SparseMatrix,
	state::QuantumState,
	tensor::{Kronecker, Tensor, kron_power},
};

/// Gates wider than this many qubits are reported when built densely, as they take `4^n` entries.
pub const DENSE_WARN_QUBITS: usize = 12;

/// A linear operator on `n` qubits, represented as a `2^n x 2^n` [complex matrix](crate::complex_matrix).
/// Unitarity is not enforced, so sums and differences of gates are gates too.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumGate {
	matrix:    ComplexMatrix,
	nb_qubits: usize,
}

/// What a gate can be applied to.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
	/// Apply the operator to a state vector.
	State(&'a QuantumState),
	/// Compose with another operator, which acts first.
	Gate(&'a QuantumGate),
}

impl<'a> From<&'a QuantumState> for Operand<'a> {
	fn from(state: &'a QuantumState) -> Self {
		Operand::State(state)
	}
}

impl<'a> From<&'a QuantumGate> for Operand<'a> {
	fn from(gate: &'a QuantumGate) -> Self {
		Operand::Gate(gate)
	}
}

/// Result of [QuantumGate::apply], of the same kind as the operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
	State(QuantumState),
	Gate(QuantumGate),
}

impl Applied {
	/// Unwraps a state.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidInput] if a gate was produced.
	pub fn into_state(self) -> Result<QuantumState> {
		match self {
			Applied::State(state) => Ok(state),
			Applied::Gate(_) => Err(SimulatorError::invalid_input("expected a state, got a gate")),
		}
	}

	/// Unwraps a gate.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidInput] if a state was produced.
	pub fn into_gate(self) -> Result<QuantumGate> {
		match self {
			Applied::Gate(gate) => Ok(gate),
			Applied::State(_) => Err(SimulatorError::invalid_input("expected a gate, got a state")),
		}
	}
}

impl QuantumGate {
	/// Creates a gate from its matrix.
	///
	/// # Errors
	///
	/// * [SimulatorError::NotSquare] if the matrix is not square.
	/// * [SimulatorError::NotPowerOfTwo] if its side is not a power of two.
	pub fn new(matrix: ComplexMatrix) -> Result<Self> {
		if !matrix.is_square() {
			return Err(SimulatorError::NotSquare {
				rows: matrix.rows(),
				cols: matrix.cols(),
			});
		}
		let nb_qubits = log2_exact(matrix.rows())?;
		if nb_qubits > DENSE_WARN_QUBITS {
			debug!(nb_qubits, "building a large dense gate, consider a sparse matrix");
		}
		return Ok(Self { matrix, nb_qubits });
	}

	/// Creates a gate from a dense array.
	///
	/// # Errors
	///
	/// * [SimulatorError::InvalidInput] if the tensor is a vector.
	/// * Any error of [QuantumGate::new].
	pub fn from_tensor(tensor: Tensor) -> Result<Self> {
		Self::new(tensor.into_matrix()?)
	}

	/// Creates a gate from a sparse matrix, see [QuantumGate::new].
	pub fn from_sparse(sparse: &SparseMatrix) -> Result<Self> {
		Self::new(sparse.densify())
	}

	/// Builds a gate whose matrix is known to be `2^nb_qubits` wide.
	fn from_parts(matrix: ComplexMatrix, nb_qubits: usize) -> Self {
		debug_assert_eq!(matrix.shape(), (1 << nb_qubits, 1 << nb_qubits));
		Self { matrix, nb_qubits }
	}

	/// Builds a fixed gate from its real entries.
	fn real(rows: &[&[f64]]) -> Self {
		let side = rows.len();
		let matrix = ComplexMatrix::from_fn(side, side, |i, j| Complex::from(rows[i][j]));
		return Self::from_parts(matrix, side.trailing_zeros() as usize);
	}

	/// Gets the matrix of the gate.
	pub fn matrix(&self) -> &ComplexMatrix {
		&self.matrix
	}

	/// Consumes the gate and gives back its matrix.
	pub fn into_matrix(self) -> ComplexMatrix {
		self.matrix
	}

	/// Gets the number of qubits the gate acts on.
	pub fn nb_qubits(&self) -> usize {
		self.nb_qubits
	}

	/// Gets the side of the matrix, i.e. `2^nb_qubits`.
	pub fn dimension(&self) -> usize {
		self.matrix.rows()
	}

	/// Records the nonzero entries of the gate in a sparse matrix.
	pub fn to_sparse(&self) -> SparseMatrix {
		SparseMatrix::from_dense(&self.matrix)
	}
}

// Composition
impl QuantumGate {
	/// Applies `self` and `other` to independent subsystems at once: `self ⊗ other`.
	pub fn tensor(&self, other: &QuantumGate) -> QuantumGate {
		Self::from_parts(self.matrix.kron(&other.matrix), self.nb_qubits + other.nb_qubits)
	}

	/// Tensors the gate with itself `power` times, i.e. applies it independently on `power` registers.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] if `power` is 0, or if the matrix would have
	/// more entries than a `usize` can count.
	pub fn power(&self, power: usize) -> Result<QuantumGate> {
		let nb_qubits = self.nb_qubits.checked_mul(power).unwrap_or(usize::MAX);
		// A `2^n x 2^n` matrix has `2^(2n)` entries.
		dimension_of(nb_qubits.saturating_mul(2))?;
		let matrix = kron_power(&self.matrix, power)?;
		return Ok(Self::from_parts(matrix, nb_qubits));
	}

	/// Multiplies every entry by `factor`.
	pub fn scale(&self, factor: Amplitude) -> QuantumGate {
		Self::from_parts(&self.matrix * factor, self.nb_qubits)
	}

	/// Divides every entry by `divisor`.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] on division by zero.
	pub fn div(&self, divisor: Amplitude) -> Result<QuantumGate> {
		if divisor.is_zero() {
			return Err(SimulatorError::invalid_parameter("divisor", "cannot divide by zero"));
		}
		return Ok(self.scale(divisor.inv()));
	}

	/// Adds two gates entry by entry.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the gates don't have the same shape.
	pub fn add(&self, other: &QuantumGate) -> Result<QuantumGate> {
		Ok(Self::from_parts(self.matrix.add(&other.matrix)?, self.nb_qubits))
	}

	/// Subtracts `other` entry by entry.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the gates don't have the same shape.
	pub fn sub(&self, other: &QuantumGate) -> Result<QuantumGate> {
		Ok(Self::from_parts(self.matrix.sub(&other.matrix)?, self.nb_qubits))
	}

	/// Applies the gate to a state, or composes it with a gate.
	///
	/// * On a state, gives back the state `matrix · amplitudes`.
	/// * On a gate, gives back the gate `self · other` (matrix product): `other` acts first.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the operand doesn't span as many qubits as the gate.
	pub fn apply<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<Applied> {
		match operand.into() {
			Operand::State(state) => Ok(Applied::State(self.apply_state(state)?)),
			Operand::Gate(gate) => Ok(Applied::Gate(self.compose(gate)?)),
		}
	}

	/// Applies the gate to a state, see [QuantumGate::apply].
	pub fn apply_state(&self, state: &QuantumState) -> Result<QuantumState> {
		let amplitudes = self.matrix.matvec(state.amplitudes())?;
		return Ok(QuantumState::from_parts(amplitudes, self.nb_qubits));
	}

	/// Composes `self` after `other`, see [QuantumGate::apply].
	pub fn compose(&self, other: &QuantumGate) -> Result<QuantumGate> {
		if self.dimension() != other.dimension() {
			return Err(SimulatorError::dimension_mismatch(
				self.matrix.shape(),
				other.matrix.shape(),
			));
		}
		return Ok(Self::from_parts(self.matrix.matmul(&other.matrix)?, self.nb_qubits));
	}

	/// Computes the conjugate transpose, which is the inverse of a unitary gate.
	pub fn adjoint(&self) -> QuantumGate {
		Self::from_parts(self.matrix.adjoint(), self.nb_qubits)
	}

	/// Computes the controlled version of the gate, with the new control qubit in front.
	/// The result is the identity, except on the block where the control qubit is 1.
	pub fn controlled(&self) -> QuantumGate {
		let offset = self.dimension();
		let mut matrix = ComplexMatrix::identity(2 * offset);
		for i in 0..offset {
			for j in 0..offset {
				matrix[(offset + i, offset + j)] = self.matrix[(i, j)];
			}
		}
		return Self::from_parts(matrix, self.nb_qubits + 1);
	}

	/// Checks whether `U†·U` is the identity within `tolerance`.
	pub fn is_unitary(&self, tolerance: f64) -> bool {
		match self.matrix.adjoint().matmul(&self.matrix) {
			Ok(product) => product.approx_eq(&ComplexMatrix::identity(self.dimension()), tolerance),
			Err(_) => false,
		}
	}

	/// Checks whether 2 gates are approximately equal given an error threshold.
	pub fn approx_eq(&self, rhs: &QuantumGate, epsilon: f64) -> bool {
		self.matrix.approx_eq(&rhs.matrix, epsilon)
	}
}

// Catalog
impl QuantumGate {
	/// Creates the identity gate on `nb_qubits` qubits.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] if `2^nb_qubits` overflows a `usize`.
	pub fn identity(nb_qubits: usize) -> Result<Self> {
		let dimension = dimension_of(nb_qubits)?;
		return Ok(Self::from_parts(ComplexMatrix::identity(dimension), nb_qubits));
	}

	/// Creates an X-gate (NOT) on a single qubit.
	pub fn x() -> Self {
		Self::real(&[&[0.0, 1.0], &[1.0, 0.0]])
	}

	/// Creates a Y-gate on a single qubit.
	pub fn y() -> Self {
		let i = Complex::i();
		let matrix = ComplexMatrix::from_fn(2, 2, |row, col| match (row, col) {
			(0, 1) => -i,
			(1, 0) => i,
			_ => Complex::zero(),
		});
		return Self::from_parts(matrix, 1);
	}

	/// Creates a Z-gate on a single qubit: `diag(1, -1)`.
	pub fn z() -> Self {
		Self::real(&[&[1.0, 0.0], &[0.0, -1.0]])
	}

	/// Creates an H or Hadamard gate on a single qubit.
	pub fn h() -> Self {
		Self::real(&[&[1.0, 1.0], &[1.0, -1.0]]).scale(Complex::from(1.0 / 2.0f64.sqrt()))
	}

	/// Creates an S-gate (phase gate) on a single qubit: `diag(1, i)`.
	pub fn s() -> Self {
		Self::phase_shift(PI / 2.0)
	}

	/// Creates a T-gate on a single qubit: `diag(1, e^(iπ/4))`.
	pub fn t() -> Self {
		Self::phase_shift(PI / 4.0)
	}

	/// Creates a phase shift gate `diag(1, e^(iφ))` on a single qubit.
	pub fn phase_shift(angle: f64) -> Self {
		let matrix = ComplexMatrix::from_fn(2, 2, |row, col| match (row, col) {
			(0, 0) => Complex::from(1.0),
			(1, 1) => Complex::from_polar(1.0, angle),
			_ => Complex::zero(),
		});
		return Self::from_parts(matrix, 1);
	}

	/// Creates a rotation around the x-axis of the Bloch sphere.
	pub fn rx(angle: f64) -> Self {
		let cos = Complex::from((angle / 2.0).cos());
		let minus_i_sin = Complex::new(0.0, -(angle / 2.0).sin());
		let matrix = ComplexMatrix::from_fn(2, 2, |row, col| if row == col { cos } else { minus_i_sin });
		return Self::from_parts(matrix, 1);
	}

	/// Creates a rotation around the y-axis of the Bloch sphere.
	pub fn ry(angle: f64) -> Self {
		let (sin, cos) = (angle / 2.0).sin_cos();
		Self::real(&[&[cos, -sin], &[sin, cos]])
	}

	/// Creates a rotation around the z-axis of the Bloch sphere.
	pub fn rz(angle: f64) -> Self {
		let matrix = ComplexMatrix::from_fn(2, 2, |row, col| match (row, col) {
			(0, 0) => Complex::from_polar(1.0, -angle / 2.0),
			(1, 1) => Complex::from_polar(1.0, angle / 2.0),
			_ => Complex::zero(),
		});
		return Self::from_parts(matrix, 1);
	}

	/// Creates a controlled-NOT gate: the first qubit controls an X on the second.
	pub fn cx() -> Self {
		Self::x().controlled()
	}

	/// Creates a controlled-Z gate: the first qubit controls a Z on the second.
	pub fn cz() -> Self {
		Self::z().controlled()
	}

	/// Creates a swap gate on 2 qubits.
	pub fn swap() -> Self {
		Self::real(&[
			&[1.0, 0.0, 0.0, 0.0],
			&[0.0, 0.0, 1.0, 0.0],
			&[0.0, 1.0, 0.0, 0.0],
			&[0.0, 0.0, 0.0, 1.0],
		])
	}

	/// Creates a Toffoli gate: the first two qubits control an X on the third.
	pub fn ccx() -> Self {
		Self::cx().controlled()
	}

	/// Creates the quantum Fourier transform on `nb_qubits` qubits:
	/// entry `(j, k)` is `ω^(j·k) / √N` with `ω = e^(2iπ/N)`.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] if `2^nb_qubits` overflows a `usize`.
	pub fn qft(nb_qubits: usize) -> Result<Self> {
		let dimension = dimension_of(nb_qubits)?;
		let normalization = 1.0 / (dimension as f64).sqrt();
		let matrix = ComplexMatrix::from_fn(dimension, dimension, |j, k| {
			// Reduce the exponent first so large products keep their precision.
			let exponent = (j * k) % dimension;
			Complex::from_polar(normalization, 2.0 * PI * exponent as f64 / dimension as f64)
		});
		return Ok(Self::from_parts(matrix, nb_qubits));
	}

	/// Creates the inverse quantum Fourier transform on `nb_qubits` qubits, see [QuantumGate::qft].
	pub fn inverse_qft(nb_qubits: usize) -> Result<Self> {
		Ok(Self::qft(nb_qubits)?.adjoint())
	}

	/// Builds the dense oracle `|x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩`, see [SparseMatrix::xor_oracle].
	pub fn xor_oracle(nb_input_qubits: usize, nb_output_qubits: usize, f: impl Fn(usize) -> usize) -> Result<Self> {
		let sparse = SparseMatrix::xor_oracle(nb_input_qubits, nb_output_qubits, f)?;
		return Ok(Self::from_parts(sparse.densify(), nb_input_qubits + nb_output_qubits));
	}
}
