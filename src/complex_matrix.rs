use num::{Complex, Zero, complex::Complex64};

use crate::{
	Amplitude,
	error::{Result, SimulatorError},
};

/// Dense matrix of complex numbers stored row by row.
/// A column vector is a matrix with a single column.
#[derive(Clone, PartialEq, Default)]
pub struct ComplexMatrix {
	values: Vec<Amplitude>,
	rows:   usize,
	cols:   usize,
}

impl std::fmt::Debug for ComplexMatrix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f)?;
		for i in 0..self.rows {
			for j in 0..self.cols {
				write!(f, "{}+{}i ", self[(i, j)].re, self[(i, j)].im)?;
			}
			writeln!(f)?;
		}
		return Ok(());
	}
}

impl ComplexMatrix {
	/// Creates a matrix filled with zeros.
	pub fn zero(rows: usize, cols: usize) -> Self {
		Self {
			values: vec![Complex::zero(); rows * cols],
			rows,
			cols,
		}
	}

	/// Creates the identity matrix of side `size_side`.
	pub fn identity(size_side: usize) -> Self {
		let mut result = ComplexMatrix::zero(size_side, size_side);
		for i in 0..size_side {
			result[(i, i)] = Complex::from(1.0);
		}
		return result;
	}

	/// Creates a matrix where each entry is given by `f(row, col)`.
	pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Amplitude) -> Self {
		let mut values = Vec::with_capacity(rows * cols);
		for i in 0..rows {
			for j in 0..cols {
				values.push(f(i, j));
			}
		}
		return Self { values, rows, cols };
	}

	/// Creates a matrix from its rows.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidInput] if the rows don't all have the same length,
	/// as the data is then not a rectangular array.
	pub fn from_rows(rows: &[Vec<Amplitude>]) -> Result<Self> {
		let cols = rows.first().map_or(0, |row| row.len());
		if let Some(ragged) = rows.iter().position(|row| row.len() != cols) {
			return Err(SimulatorError::invalid_input(format!(
				"row {} has {} entries, expected {}",
				ragged,
				rows[ragged].len(),
				cols
			)));
		}
		return Ok(Self {
			values: rows.iter().flatten().copied().collect(),
			rows: rows.len(),
			cols,
		});
	}

	/// Creates a matrix from real rows, see [ComplexMatrix::from_rows].
	pub fn from_real_rows(rows: &[Vec<f64>]) -> Result<Self> {
		let rows: Vec<Vec<Amplitude>> = rows
			.iter()
			.map(|row| row.iter().map(|&x| Complex64::from(x)).collect())
			.collect();
		return Self::from_rows(&rows);
	}

	/// Turns a vector into a matrix with a single column.
	pub fn column(values: Vec<Amplitude>) -> Self {
		let rows = values.len();
		Self { values, rows, cols: 1 }
	}

	/// Gets the number of rows.
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Gets the number of columns.
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// Gets the shape as `(rows, cols)`.
	pub fn shape(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// Checks whether the matrix has as many rows as columns.
	pub fn is_square(&self) -> bool {
		self.rows == self.cols
	}

	/// Gets the entries, row after row.
	pub fn values(&self) -> &[Amplitude] {
		&self.values
	}

	/// Consumes the matrix and gives back its entries, row after row.
	pub fn into_values(self) -> Vec<Amplitude> {
		self.values
	}
}

impl std::ops::Index<(usize, usize)> for ComplexMatrix {
	type Output = Amplitude;
	fn index(&self, index: (usize, usize)) -> &Self::Output {
		return &self.values[index.0 * self.cols + index.1];
	}
}

impl std::ops::IndexMut<(usize, usize)> for ComplexMatrix {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		return &mut self.values[index.0 * self.cols + index.1];
	}
}

impl std::ops::Mul<Amplitude> for &ComplexMatrix {
	type Output = ComplexMatrix;

	fn mul(self, rhs: Amplitude) -> Self::Output {
		return ComplexMatrix {
			values: self.values.iter().map(|z| rhs * z).collect(),
			rows:   self.rows,
			cols:   self.cols,
		};
	}
}

impl std::ops::Mul<Amplitude> for ComplexMatrix {
	type Output = ComplexMatrix;

	fn mul(mut self, rhs: Amplitude) -> Self::Output {
		self *= rhs;
		return self;
	}
}

impl std::ops::MulAssign<Amplitude> for ComplexMatrix {
	fn mul_assign(&mut self, rhs: Amplitude) {
		for z in self.values.iter_mut() {
			*z *= rhs;
		}
	}
}

impl ComplexMatrix {
	fn elementwise(&self, rhs: &Self, op: impl Fn(Amplitude, Amplitude) -> Amplitude) -> Result<Self> {
		if self.shape() != rhs.shape() {
			return Err(SimulatorError::dimension_mismatch(self.shape(), rhs.shape()));
		}
		return Ok(Self {
			values: self.values.iter().zip(rhs.values.iter()).map(|(a, b)| op(*a, *b)).collect(),
			rows:   self.rows,
			cols:   self.cols,
		});
	}

	/// Adds two matrices entry by entry.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the shapes differ.
	pub fn add(&self, rhs: &Self) -> Result<Self> {
		self.elementwise(rhs, |a, b| a + b)
	}

	/// Subtracts `rhs` from the matrix entry by entry.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the shapes differ.
	pub fn sub(&self, rhs: &Self) -> Result<Self> {
		self.elementwise(rhs, |a, b| a - b)
	}

	/// Computes the matrix product `self · rhs`.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the columns of `self` don't match the rows of `rhs`.
	pub fn matmul(&self, rhs: &Self) -> Result<Self> {
		if self.cols != rhs.rows {
			return Err(SimulatorError::dimension_mismatch((self.cols, rhs.cols), rhs.shape()));
		}

		let mut result = ComplexMatrix::zero(self.rows, rhs.cols);
		for i in 0..self.rows {
			for k in 0..self.cols {
				let lhs = self[(i, k)];
				if lhs.is_zero() {
					continue;
				}
				for j in 0..rhs.cols {
					result[(i, j)] += lhs * rhs[(k, j)];
				}
			}
		}
		return Ok(result);
	}

	/// Computes the product of the matrix with a column vector.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::DimensionMismatch] if the vector length doesn't match the columns.
	pub fn matvec(&self, vector: &[Amplitude]) -> Result<Vec<Amplitude>> {
		if self.cols != vector.len() {
			return Err(SimulatorError::dimension_mismatch((self.cols, 1), (vector.len(), 1)));
		}

		let mut result = vec![Complex::zero(); self.rows];
		for (i, out) in result.iter_mut().enumerate() {
			let row = &self.values[i * self.cols..(i + 1) * self.cols];
			*out = row.iter().zip(vector.iter()).map(|(a, b)| a * b).sum();
		}
		return Ok(result);
	}

	/// Computes the transpose, without conjugating the entries.
	pub fn transpose(&self) -> Self {
		Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)])
	}

	/// Conjugates every entry, without transposing.
	pub fn conjugate(&self) -> Self {
		Self {
			values: self.values.iter().map(|z| z.conj()).collect(),
			rows:   self.rows,
			cols:   self.cols,
		}
	}

	/// Computes the conjugate transpose.
	pub fn adjoint(&self) -> Self {
		Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)].conj())
	}

	/// Counts the entries that aren't exactly zero.
	pub fn count_nonzero(&self) -> usize {
		self.values.iter().filter(|z| !z.is_zero()).count()
	}

	/// Checks whether 2 matrices are approximately equal given an error threshold.
	///
	/// # Arguments
	///
	/// * `rhs` - The other matrix to compare with.
	/// * `epsilon` - The margin of error tolerated between 2 entries, on both real and imaginary parts.
	pub fn approx_eq(&self, rhs: &Self, epsilon: f64) -> bool {
		if self.shape() != rhs.shape() {
			return false;
		}
		return approx_eq_slices(&self.values, &rhs.values, epsilon);
	}
}

/// Compares two amplitude slices entry by entry.
pub(crate) fn approx_eq_slices(lhs: &[Amplitude], rhs: &[Amplitude], epsilon: f64) -> bool {
	if lhs.len() != rhs.len() {
		return false;
	}
	for (a, b) in lhs.iter().zip(rhs.iter()) {
		let difference = a - b;
		if difference.re.abs() > epsilon || difference.im.abs() > epsilon {
			return false;
		}
	}
	return true;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_row_major_indexing() {
		let matrix = ComplexMatrix::from_real_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
		assert_eq!(matrix.shape(), (2, 3));
		assert_eq!(matrix[(0, 2)], Complex::from(3.0));
		assert_eq!(matrix[(1, 0)], Complex::from(4.0));
		assert_eq!(matrix.transpose()[(2, 1)], Complex::from(6.0));
	}

	#[test]
	fn test_ragged_rows_rejected() {
		let err = ComplexMatrix::from_real_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
		assert_eq!(err.kind(), crate::ErrorKind::Type);
	}

	#[test]
	fn test_conjugate_does_not_transpose() {
		let matrix = ComplexMatrix::from_rows(&[
			vec![Complex::new(0.0, 1.0), Complex::new(2.0, 0.0)],
			vec![Complex::new(0.0, 0.0), Complex::new(1.0, -1.0)],
		])
		.unwrap();
		let conjugate = matrix.conjugate();
		assert_eq!(conjugate[(0, 0)], Complex::new(0.0, -1.0));
		assert_eq!(conjugate[(0, 1)], Complex::new(2.0, 0.0));
		assert_eq!(matrix.adjoint()[(1, 0)], Complex::new(2.0, 0.0));
		assert_eq!(matrix.adjoint()[(1, 1)], Complex::new(1.0, 1.0));
	}

	#[test]
	fn test_approx_eq_uses_absolute_difference() {
		let a = ComplexMatrix::from_real_rows(&[vec![1.0]]).unwrap();
		let b = ComplexMatrix::from_real_rows(&[vec![2.0]]).unwrap();
		assert!(!a.approx_eq(&b, 1e-6));
		assert!(!b.approx_eq(&a, 1e-6));
	}
}
