//! Error types of the simulator.
//!
//! Every failure is local and synchronous. Each variant belongs to exactly one
//! [ErrorKind], so callers can tell a wrong input kind apart from a bad shape or
//! a bad numeric argument without matching on every variant.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// The class an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Wrong input kind, e.g. a vector where a matrix is expected.
	Type,
	/// Dimension problems: mismatched shapes, non power-of-two sizes.
	Shape,
	/// Invalid numeric argument, e.g. a zero Kronecker power.
	Domain,
}

/// Errors that can occur while building or running circuits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
	/// The input is not of the kind the operation works on.
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	/// A length or side that must be a power of two isn't.
	#[error("Size {0} is not a power of two")]
	NotPowerOfTwo(usize),

	/// A matrix that must be square isn't.
	#[error("Matrix of shape {rows}x{cols} is not square")]
	NotSquare {
		/// Number of rows.
		rows: usize,
		/// Number of columns.
		cols: usize,
	},

	/// Two operands don't have compatible shapes.
	#[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
	DimensionMismatch {
		/// Shape the operation needed.
		expected: (usize, usize),
		/// Shape it received.
		actual:   (usize, usize),
	},

	/// A coordinate lies outside the declared shape.
	#[error("Index ({row}, {col}) is out of bounds for shape {shape:?}")]
	IndexOutOfBounds {
		/// Row of the entry.
		row:   usize,
		/// Column of the entry.
		col:   usize,
		/// Shape of the matrix.
		shape: (usize, usize),
	},

	/// Two sparse entries share the same coordinate.
	#[error("Duplicate entry at ({row}, {col})")]
	DuplicateEntry {
		/// Row of the entry.
		row: usize,
		/// Column of the entry.
		col: usize,
	},

	/// A numeric argument is out of its valid range.
	#[error("Invalid parameter '{name}': {reason}")]
	InvalidParameter {
		/// Parameter name.
		name:   String,
		/// Why it was rejected.
		reason: String,
	},

	/// More qubits were asked to be measured than the state holds.
	#[error("Cannot measure {requested} qubits of a {available}-qubit state")]
	TooManyQubits {
		/// Qubits requested.
		requested: usize,
		/// Qubits in the state.
		available: usize,
	},
}

impl SimulatorError {
	/// Create an invalid input error.
	pub fn invalid_input(msg: impl Into<String>) -> Self {
		Self::InvalidInput(msg.into())
	}

	/// Create a dimension mismatch error.
	pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
		Self::DimensionMismatch { expected, actual }
	}

	/// Create an invalid parameter error.
	pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::InvalidParameter {
			name:   name.into(),
			reason: reason.into(),
		}
	}

	/// Gets the class of the error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidInput(_) => ErrorKind::Type,
			Self::NotPowerOfTwo(_)
			| Self::NotSquare { .. }
			| Self::DimensionMismatch { .. }
			| Self::IndexOutOfBounds { .. }
			| Self::DuplicateEntry { .. } => ErrorKind::Shape,
			Self::InvalidParameter { .. } | Self::TooManyQubits { .. } => ErrorKind::Domain,
		}
	}
}

/// Computes `2^nb_qubits`, the number of basis states of a register.
///
/// # Errors
///
/// Fails with [SimulatorError::InvalidParameter] if the count doesn't fit in a `usize`.
pub(crate) fn dimension_of(nb_qubits: usize) -> Result<usize> {
	u32::try_from(nb_qubits)
		.ok()
		.and_then(|shift| 1_usize.checked_shl(shift))
		.ok_or_else(|| {
			SimulatorError::invalid_parameter(
				"nb_qubits",
				format!("2^{} basis states can't be indexed", nb_qubits),
			)
		})
}

/// Checks that `size` is a power of two and returns its base-2 logarithm.
pub(crate) fn log2_exact(size: usize) -> Result<usize> {
	if !size.is_power_of_two() {
		return Err(SimulatorError::NotPowerOfTwo(size));
	}
	return Ok(size.trailing_zeros() as usize);
}
