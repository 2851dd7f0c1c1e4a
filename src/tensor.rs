//! Kronecker (tensor) product algebra over vectors and matrices.
//!
//! Every "put two subsystems side by side" in the crate goes through [Kronecker::kron].
//! For operands of shapes `(m, n)` and `(p, q)` the product has shape `(m·p, n·q)` and
//!
//! ```text
//! (A ⊗ B)[i, j] = A[i / p, j / q] · B[i % p, j % q]
//! ```
//!
//! A bare vector behaves as a single column, so its column index is always 0.

use num::Zero;
use tracing::trace;

use crate::{
	Amplitude, ComplexMatrix,
	complex_matrix::approx_eq_slices,
	error::{Result, SimulatorError},
};

/// Values closed under the Kronecker product.
///
/// The product is associative but not commutative, so the order of the operands matters.
pub trait Kronecker: Clone {
	/// Computes `self ⊗ rhs`.
	fn kron(&self, rhs: &Self) -> Self;
}

impl Kronecker for Vec<Amplitude> {
	fn kron(&self, rhs: &Self) -> Self {
		let mut result = Vec::with_capacity(self.len() * rhs.len());
		for a in self {
			for b in rhs {
				result.push(a * b);
			}
		}
		return result;
	}
}

impl Kronecker for ComplexMatrix {
	fn kron(&self, rhs: &Self) -> Self {
		let (m, n) = self.shape();
		let (p, q) = rhs.shape();
		let mut result = ComplexMatrix::zero(m * p, n * q);
		for i in 0..m {
			for j in 0..n {
				let lhs = self[(i, j)];
				if lhs.is_zero() {
					continue;
				}
				for k in 0..p {
					for l in 0..q {
						result[(i * p + k, j * q + l)] = lhs * rhs[(k, l)];
					}
				}
			}
		}
		return result;
	}
}

/// A dense numeric array: either a bare vector or a matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
	/// A vector, treated as a single column.
	Vector(Vec<Amplitude>),
	/// A 2-dimensional matrix.
	Matrix(ComplexMatrix),
}

impl Tensor {
	/// Gets the shape as `(rows, cols)`; a vector of length `m` has shape `(m, 1)`.
	pub fn shape(&self) -> (usize, usize) {
		match self {
			Tensor::Vector(vector) => (vector.len(), 1),
			Tensor::Matrix(matrix) => matrix.shape(),
		}
	}

	/// Gets the total number of entries.
	pub fn size(&self) -> usize {
		let (rows, cols) = self.shape();
		rows * cols
	}

	/// Checks whether the tensor is a bare vector.
	pub fn is_vector(&self) -> bool {
		matches!(self, Tensor::Vector(_))
	}

	/// Gets the entry at `(row, col)`, where a vector only has column 0.
	pub fn get(&self, row: usize, col: usize) -> Option<Amplitude> {
		let (rows, cols) = self.shape();
		if row >= rows || col >= cols {
			return None;
		}
		return Some(match self {
			Tensor::Vector(vector) => vector[row],
			Tensor::Matrix(matrix) => matrix[(row, col)],
		});
	}

	/// Unwraps a vector.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidInput] on a matrix.
	pub fn into_vector(self) -> Result<Vec<Amplitude>> {
		match self {
			Tensor::Vector(vector) => Ok(vector),
			Tensor::Matrix(matrix) => Err(SimulatorError::invalid_input(format!(
				"expected a vector, got a {}x{} matrix",
				matrix.rows(),
				matrix.cols()
			))),
		}
	}

	/// Unwraps a matrix.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidInput] on a vector.
	pub fn into_matrix(self) -> Result<ComplexMatrix> {
		match self {
			Tensor::Matrix(matrix) => Ok(matrix),
			Tensor::Vector(vector) => Err(SimulatorError::invalid_input(format!(
				"expected a matrix, got a vector of length {}",
				vector.len()
			))),
		}
	}

	/// Checks whether 2 tensors have the same kind and shape and approximately equal entries.
	pub fn approx_eq(&self, rhs: &Tensor, epsilon: f64) -> bool {
		match (self, rhs) {
			(Tensor::Vector(a), Tensor::Vector(b)) => approx_eq_slices(a, b, epsilon),
			(Tensor::Matrix(a), Tensor::Matrix(b)) => a.approx_eq(b, epsilon),
			_ => false,
		}
	}
}

impl From<Vec<Amplitude>> for Tensor {
	fn from(vector: Vec<Amplitude>) -> Self {
		Tensor::Vector(vector)
	}
}

impl From<ComplexMatrix> for Tensor {
	fn from(matrix: ComplexMatrix) -> Self {
		Tensor::Matrix(matrix)
	}
}

impl Kronecker for Tensor {
	/// Two vectors give a vector, anything else gives a matrix.
	fn kron(&self, rhs: &Self) -> Self {
		trace!(lhs = ?self.shape(), rhs = ?rhs.shape(), "kronecker product");
		match (self, rhs) {
			(Tensor::Vector(a), Tensor::Vector(b)) => Tensor::Vector(a.kron(b)),
			(Tensor::Matrix(a), Tensor::Matrix(b)) => Tensor::Matrix(a.kron(b)),
			(Tensor::Vector(a), Tensor::Matrix(b)) => Tensor::Matrix(ComplexMatrix::column(a.clone()).kron(b)),
			(Tensor::Matrix(a), Tensor::Vector(b)) => Tensor::Matrix(a.kron(&ComplexMatrix::column(b.clone()))),
		}
	}
}

/// Computes the Kronecker product `a ⊗ b` of two dense arrays.
pub fn kron(a: &Tensor, b: &Tensor) -> Tensor {
	a.kron(b)
}

/// Left-folds the Kronecker product over all operands: `M1 ⊗ M2 ⊗ ... ⊗ Mk`.
///
/// # Errors
///
/// Fails with [SimulatorError::InvalidParameter] if fewer than 2 operands are given.
pub fn kron_multi<T: Kronecker>(operands: &[T]) -> Result<T> {
	if operands.len() < 2 {
		return Err(SimulatorError::invalid_parameter(
			"operands",
			format!("at least 2 are needed, got {}", operands.len()),
		));
	}

	let mut accumulator = operands[0].clone();
	for operand in &operands[1..] {
		accumulator = accumulator.kron(operand);
	}
	return Ok(accumulator);
}

/// Computes the Kronecker power `M^{⊗power}`, where `M^{⊗1} = M`.
///
/// # Errors
///
/// Fails with [SimulatorError::InvalidParameter] if `power` is 0.
pub fn kron_power<T: Kronecker>(operand: &T, power: usize) -> Result<T> {
	if power < 1 {
		return Err(SimulatorError::invalid_parameter("power", "must be at least 1"));
	}
	trace!(power, "kronecker power");

	let mut accumulator = operand.clone();
	for _ in 1..power {
		accumulator = accumulator.kron(operand);
	}
	return Ok(accumulator);
}

#[cfg(test)]
mod tests {
	use num::Complex;

	use super::*;

	#[test]
	fn test_vector_matrix_product_is_a_matrix() {
		let vector = Tensor::from(vec![Complex::from(1.0), Complex::from(2.0)]);
		let matrix = Tensor::from(ComplexMatrix::identity(2));
		let product = kron(&vector, &matrix);
		assert_eq!(product.shape(), (4, 2));
		assert_eq!(product.get(2, 0), Some(Complex::from(2.0)));
		assert_eq!(product.get(3, 1), Some(Complex::from(2.0)));
		assert_eq!(product.get(1, 0), Some(Complex::from(0.0)));
	}

	#[test]
	fn test_complex_values_survive() {
		let a = Tensor::from(vec![Complex::new(0.0, 1.0)]);
		let b = Tensor::from(vec![Complex::new(0.0, 1.0), Complex::new(1.0, 1.0)]);
		let product = kron(&a, &b).into_vector().unwrap();
		assert_eq!(product, vec![Complex::new(-1.0, 0.0), Complex::new(-1.0, 1.0)]);
	}
}
