//! Coordinate-list sparse matrices.
//!
//! Gates such as oracles are permutation-like: a `2^n x 2^n` matrix with only `2^n` nonzero
//! entries. Storing only the nonzero entries keeps Kronecker products and matrix-vector products
//! proportional to the number of nonzero entries rather than to the full size.

use num::{Complex, Zero};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
	Amplitude, ComplexMatrix,
	error::{Result, SimulatorError, dimension_of},
	state::QuantumState,
	tensor::{Kronecker, Tensor},
};

/// A matrix that only records its nonzero entries as `(row, col, value)` triplets.
///
/// The three arrays always have the same length, each coordinate appears at most once, and every
/// recorded value is nonzero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseMatrix {
	values:    Vec<Amplitude>,
	row_index: Vec<usize>,
	col_index: Vec<usize>,
	shape:     (usize, usize),
}

impl SparseMatrix {
	/// Scans every entry of a dense matrix and records the nonzero ones.
	pub fn from_dense(matrix: &ComplexMatrix) -> Self {
		let mut result = Self::empty(matrix.shape());
		for i in 0..matrix.rows() {
			for j in 0..matrix.cols() {
				let value = matrix[(i, j)];
				if !value.is_zero() {
					result.push(i, j, value);
				}
			}
		}
		return result;
	}

	/// Records the nonzero entries of a dense array.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidInput] if the tensor is a bare vector rather than a matrix.
	pub fn from_tensor(tensor: &Tensor) -> Result<Self> {
		match tensor {
			Tensor::Matrix(matrix) => Ok(Self::from_dense(matrix)),
			Tensor::Vector(vector) => Err(SimulatorError::invalid_input(format!(
				"sparse matrices are built from dense matrices, got a vector of length {}",
				vector.len()
			))),
		}
	}

	/// Builds a sparse matrix from explicit `(row, col, value)` entries.
	/// Zero values are dropped.
	///
	/// # Errors
	///
	/// * [SimulatorError::IndexOutOfBounds] if an entry lies outside `shape`.
	/// * [SimulatorError::DuplicateEntry] if two entries share the same coordinate.
	pub fn from_triplets(
		shape: (usize, usize), entries: impl IntoIterator<Item = (usize, usize, Amplitude)>,
	) -> Result<Self> {
		let mut result = Self::empty(shape);
		let mut seen = FxHashSet::default();
		for (row, col, value) in entries {
			if row >= shape.0 || col >= shape.1 {
				return Err(SimulatorError::IndexOutOfBounds { row, col, shape });
			}
			if !seen.insert((row, col)) {
				return Err(SimulatorError::DuplicateEntry { row, col });
			}
			if !value.is_zero() {
				result.push(row, col, value);
			}
		}
		return Ok(result);
	}

	/// Creates the sparse identity of side `size_side`.
	pub fn identity(size_side: usize) -> Self {
		let mut result = Self::empty((size_side, size_side));
		for i in 0..size_side {
			result.push(i, i, Complex::from(1.0));
		}
		return result;
	}

	/// Builds the oracle `|x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩` by enumeration.
	///
	/// The input register holds the `nb_input_qubits` most significant bits of a basis index and the
	/// output register the `nb_output_qubits` least significant ones. The result is a permutation
	/// matrix with exactly `2^(nb_input_qubits + nb_output_qubits)` nonzero entries.
	///
	/// # Errors
	///
	/// * [SimulatorError::InvalidParameter] if `f(x)` doesn't fit in the output register.
	/// * [SimulatorError::InvalidParameter] if the two registers together have more basis states than
	///   a `usize` can count.
	pub fn xor_oracle(nb_input_qubits: usize, nb_output_qubits: usize, f: impl Fn(usize) -> usize) -> Result<Self> {
		let dimension = dimension_of(nb_input_qubits.saturating_add(nb_output_qubits))?;
		let nb_inputs = dimension_of(nb_input_qubits)?;
		let nb_outputs = dimension_of(nb_output_qubits)?;

		let mut result = Self::empty((dimension, dimension));
		for x in 0..nb_inputs {
			let fx = f(x);
			if fx >= nb_outputs {
				return Err(SimulatorError::invalid_parameter(
					"f",
					format!("f({}) = {} doesn't fit on {} qubits", x, fx, nb_output_qubits),
				));
			}
			for y in 0..nb_outputs {
				let col = (x << nb_output_qubits) | y;
				let row = (x << nb_output_qubits) | (y ^ fx);
				result.push(row, col, Complex::from(1.0));
			}
		}

		debug!(nb_input_qubits, nb_output_qubits, nnz = result.nnz(), "built sparse oracle");
		return Ok(result);
	}

	fn empty(shape: (usize, usize)) -> Self {
		Self {
			values: Vec::new(),
			row_index: Vec::new(),
			col_index: Vec::new(),
			shape,
		}
	}

	fn push(&mut self, row: usize, col: usize, value: Amplitude) {
		self.values.push(value);
		self.row_index.push(row);
		self.col_index.push(col);
	}

	/// Gets the shape of the dense matrix this represents.
	pub fn shape(&self) -> (usize, usize) {
		self.shape
	}

	/// Gets the number of recorded (nonzero) entries.
	pub fn nnz(&self) -> usize {
		self.values.len()
	}

	/// Gets the recorded values, in insertion order.
	pub fn values(&self) -> &[Amplitude] {
		&self.values
	}

	/// Gets the row of each recorded value.
	pub fn row_indices(&self) -> &[usize] {
		&self.row_index
	}

	/// Gets the column of each recorded value.
	pub fn col_indices(&self) -> &[usize] {
		&self.col_index
	}

	/// Iterates over the recorded entries as `(row, col, value)`.
	pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Amplitude)> + '_ {
		self.row_index
			.iter()
			.zip(self.col_index.iter())
			.zip(self.values.iter())
			.map(|((&row, &col), &value)| (row, col, value))
	}

	/// Turns the matrix back into a dense one.
	/// Entries are accumulated, so a duplicated coordinate would show as a summed value.
	pub fn densify(&self) -> ComplexMatrix {
		let mut result = ComplexMatrix::zero(self.shape.0, self.shape.1);
		for (row, col, value) in self.iter() {
			result[(row, col)] += value;
		}
		return result;
	}

	/// Multiplies every entry by `factor`. Scaling by zero leaves an empty matrix.
	pub fn scale(&self, factor: Amplitude) -> Self {
		if factor.is_zero() {
			return Self::empty(self.shape);
		}
		let mut result = self.clone();
		for value in result.values.iter_mut() {
			*value *= factor;
		}
		return result;
	}

	/// Computes the product of the matrix with a vector, in time proportional to [SparseMatrix::nnz].
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the vector length doesn't match the columns.
	pub fn apply(&self, vector: &[Amplitude]) -> Result<Vec<Amplitude>> {
		if self.shape.1 != vector.len() {
			return Err(SimulatorError::dimension_mismatch((self.shape.1, 1), (vector.len(), 1)));
		}

		let mut result = vec![Complex::zero(); self.shape.0];
		for (row, col, value) in self.iter() {
			result[row] += value * vector[col];
		}
		return Ok(result);
	}

	/// Applies the matrix to a state, see [SparseMatrix::apply].
	pub fn apply_state(&self, state: &QuantumState) -> Result<QuantumState> {
		QuantumState::new(self.apply(state.amplitudes())?)
	}
}

/// Computes the Kronecker product of two sparse matrices.
///
/// Entry `(i, j)` of `lhs` and entry `(k, l)` of `rhs` land at `(i·p + k, j·q + l)` where `(p, q)` is
/// the shape of `rhs`. Runs in `O(nnz(lhs) · nnz(rhs))`.
pub fn sparse_kron(lhs: &SparseMatrix, rhs: &SparseMatrix) -> SparseMatrix {
	let (m, n) = lhs.shape;
	let (p, q) = rhs.shape;

	let capacity = lhs.nnz() * rhs.nnz();
	let mut result = SparseMatrix {
		values:    Vec::with_capacity(capacity),
		row_index: Vec::with_capacity(capacity),
		col_index: Vec::with_capacity(capacity),
		shape:     (m * p, n * q),
	};
	for (i, j, a) in lhs.iter() {
		for (k, l, b) in rhs.iter() {
			let value = a * b;
			// Products of nonzero finite values can still underflow to zero.
			if !value.is_zero() {
				result.push(i * p + k, j * q + l, value);
			}
		}
	}
	return result;
}

impl Kronecker for SparseMatrix {
	fn kron(&self, rhs: &Self) -> Self {
		sparse_kron(self, rhs)
	}
}

impl std::fmt::Display for SparseMatrix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (row, col, value) in self.iter() {
			writeln!(f, "({}, {}) : {}", row, col, value)?;
		}
		return Ok(());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_shape_and_nnz() {
		let dense = ComplexMatrix::from_real_rows(&[vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 2.0]]).unwrap();
		let sparse = SparseMatrix::from_dense(&dense);
		assert_eq!(sparse.shape(), (2, 3));
		assert_eq!(sparse.nnz(), 2);
		assert_eq!(sparse.row_indices(), &[0, 1]);
		assert_eq!(sparse.col_indices(), &[0, 2]);
	}

	#[test]
	fn test_display() {
		let sparse = SparseMatrix::identity(2);
		assert_eq!(sparse.to_string(), "(0, 0) : 1+0i\n(1, 1) : 1+0i\n");
	}
}
