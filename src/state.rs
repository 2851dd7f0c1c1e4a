//! States of quantum registers.

use num::{Complex, Zero};
use rand::Rng;
use tracing::debug;

use crate::{
	Amplitude,
	complex_matrix::approx_eq_slices,
	error::{Result, SimulatorError, dimension_of, log2_exact},
	tensor::{Kronecker, Tensor, kron_power},
};

/// The state vector of an `n`-qubit register: `2^n` amplitudes, one per basis state.
///
/// Basis state `i` is read as an `n`-bit binary string whose leftmost bit belongs to the first
/// tensor factor. States are immutable values: every operation gives back a new state.
///
/// The state is not normalized on construction, so un-normalized intermediate values can be built
/// and inspected; callers building from raw data are responsible for normalization.
#[derive(Clone, PartialEq)]
pub struct QuantumState {
	amplitudes: Vec<Amplitude>,
	nb_qubits:  usize,
}

impl std::fmt::Debug for QuantumState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "QuantumState (")?;
		for (idx, amplitude) in self.amplitudes.iter().enumerate() {
			writeln!(f, "    |{}⟩: {}+{}i", basis_label(idx, self.nb_qubits), amplitude.re, amplitude.im)?;
		}
		write!(f, ")")?;
		return Ok(());
	}
}

/// Renders a basis index as a zero-padded binary string of `width` bits.
pub fn basis_label(index: usize, width: usize) -> String {
	format!("{:0width$b}", index, width = width)
}

/// Reads a binary string such as `"0101"` back into a basis index.
///
/// # Errors
///
/// Fails with [SimulatorError::InvalidInput] if the label is empty or holds anything but `0` and `1`.
pub fn basis_index(label: &str) -> Result<usize> {
	if label.is_empty() || !label.bytes().all(|b| b == b'0' || b == b'1') {
		return Err(SimulatorError::invalid_input(format!("'{}' is not a binary string", label)));
	}
	return usize::from_str_radix(label, 2)
		.map_err(|_| SimulatorError::invalid_input(format!("'{}' doesn't fit in an index", label)));
}

impl QuantumState {
	/// Creates a state from its amplitudes.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::NotPowerOfTwo] if the length is not an exact power of two.
	pub fn new(amplitudes: Vec<Amplitude>) -> Result<Self> {
		let nb_qubits = log2_exact(amplitudes.len())?;
		return Ok(Self { amplitudes, nb_qubits });
	}

	/// Creates a state from real amplitudes, see [QuantumState::new].
	pub fn from_real(amplitudes: &[f64]) -> Result<Self> {
		Self::new(amplitudes.iter().map(|&x| Complex::from(x)).collect())
	}

	/// Creates a state from a dense array.
	///
	/// # Errors
	///
	/// * [SimulatorError::InvalidInput] if the tensor is a matrix.
	/// * [SimulatorError::NotPowerOfTwo] if its length is not a power of two.
	pub fn from_tensor(tensor: Tensor) -> Result<Self> {
		Self::new(tensor.into_vector()?)
	}

	/// Builds a state whose length is known to be a power of two.
	pub(crate) fn from_parts(amplitudes: Vec<Amplitude>, nb_qubits: usize) -> Self {
		debug_assert_eq!(amplitudes.len(), 1 << nb_qubits);
		Self { amplitudes, nb_qubits }
	}

	/// Gets the amplitudes.
	pub fn amplitudes(&self) -> &[Amplitude] {
		&self.amplitudes
	}

	/// Consumes the state and gives back its amplitudes.
	pub fn into_amplitudes(self) -> Vec<Amplitude> {
		self.amplitudes
	}

	/// Gets the number of qubits.
	pub fn nb_qubits(&self) -> usize {
		self.nb_qubits
	}

	/// Gets the dimension of the state, i.e. `2^nb_qubits`.
	pub fn dimension(&self) -> usize {
		self.amplitudes.len()
	}

	/// Places two independent subsystems side by side: `self ⊗ other`.
	/// The qubit counts add.
	pub fn tensor(&self, other: &QuantumState) -> QuantumState {
		Self::from_parts(self.amplitudes.kron(&other.amplitudes), self.nb_qubits + other.nb_qubits)
	}

	/// Multiplies every amplitude by `factor`.
	pub fn scale(&self, factor: Amplitude) -> QuantumState {
		Self::from_parts(self.amplitudes.iter().map(|z| factor * z).collect(), self.nb_qubits)
	}

	/// Divides every amplitude by `divisor`.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] on division by zero.
	pub fn div(&self, divisor: Amplitude) -> Result<QuantumState> {
		if divisor.is_zero() {
			return Err(SimulatorError::invalid_parameter("divisor", "cannot divide by zero"));
		}
		return Ok(self.scale(divisor.inv()));
	}

	/// Tensors the state with itself `power` times.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] if `power` is 0, or if the result would have
	/// more basis states than a `usize` can count.
	pub fn power(&self, power: usize) -> Result<QuantumState> {
		let nb_qubits = self.nb_qubits.checked_mul(power).unwrap_or(usize::MAX);
		dimension_of(nb_qubits)?;
		let amplitudes = kron_power(&self.amplitudes, power)?;
		return Ok(Self::from_parts(amplitudes, nb_qubits));
	}

	/// Gets the probability of measuring each basis state.
	pub fn probabilities(&self) -> Vec<f64> {
		self.amplitudes.iter().map(|z| z.norm_sqr()).collect()
	}

	/// Computes the L2 norm of the amplitudes.
	pub fn norm(&self) -> f64 {
		self.amplitudes.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
	}

	/// Checks whether the squared magnitudes sum to 1 within `tolerance`.
	pub fn is_normalized(&self, tolerance: f64) -> bool {
		let total: f64 = self.amplitudes.iter().map(|z| z.norm_sqr()).sum();
		(total - 1.0).abs() <= tolerance
	}

	/// Rescales the state onto the unit sphere.
	///
	/// # Errors
	///
	/// Fails with [SimulatorError::InvalidParameter] if every amplitude is zero.
	pub fn normalized(&self) -> Result<QuantumState> {
		let norm = self.norm();
		if norm == 0.0 {
			return Err(SimulatorError::invalid_parameter("state", "cannot normalize a zero vector"));
		}
		return Ok(self.scale(Complex::from(1.0 / norm)));
	}

	/// Picks the measured basis index for a uniform draw `x` in `[0, 1)`.
	///
	/// Probabilities are accumulated over basis indices in order and the first index whose running
	/// sum reaches `x` (scaled by the total probability) is returned. Zero-probability indices are
	/// never returned.
	///
	/// # Errors
	///
	/// * [SimulatorError::InvalidParameter] if `x` is not in `[0, 1)`.
	/// * [SimulatorError::InvalidParameter] if every amplitude is zero.
	pub fn measure_at(&self, x: f64) -> Result<usize> {
		if !(0.0..1.0).contains(&x) {
			return Err(SimulatorError::invalid_parameter("x", format!("{} is not in [0, 1)", x)));
		}
		let total: f64 = self.amplitudes.iter().map(|z| z.norm_sqr()).sum();
		if total == 0.0 {
			return Err(SimulatorError::invalid_parameter("state", "cannot measure a zero vector"));
		}

		let target = x * total;
		let mut cumulative = 0.0;
		let mut last_possible = 0;
		for (idx, amplitude) in self.amplitudes.iter().enumerate() {
			let probability = amplitude.norm_sqr();
			if probability == 0.0 {
				continue;
			}
			cumulative += probability;
			last_possible = idx;
			if cumulative >= target {
				return Ok(idx);
			}
		}
		// Round-off can leave the running sum just below the target.
		return Ok(last_possible);
	}

	/// Samples one full-system outcome using `rng`.
	/// The state itself is left untouched, so repeated calls sample independently.
	pub fn measure_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
		self.measure_at(rng.random::<f64>())
	}

	/// Samples one full-system outcome using the thread-local random source.
	pub fn measure(&self) -> Result<usize> {
		self.measure_with(&mut rand::rng())
	}

	/// Samples `shots` outcomes and counts how often each basis state came out.
	pub fn sample_counts<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Result<Vec<usize>> {
		let mut counts = vec![0; self.dimension()];
		for _ in 0..shots {
			counts[self.measure_with(rng)?] += 1;
		}
		return Ok(counts);
	}

	/// Measures the `nb_measured` least significant qubits for a uniform draw `x` in `[0, 1)`, and
	/// gives back the renormalized state of the remaining qubits.
	///
	/// The full-system index is picked as in [QuantumState::measure_at]. Its trailing `nb_measured`
	/// bits form the measured pattern, and the amplitudes of every basis state sharing that pattern
	/// are kept, in order.
	///
	/// # Errors
	///
	/// * [SimulatorError::TooManyQubits] if `nb_measured` exceeds the qubit count.
	/// * Any error of [QuantumState::measure_at].
	pub fn collapse_at(&self, nb_measured: usize, x: f64) -> Result<QuantumState> {
		if nb_measured > self.nb_qubits {
			return Err(SimulatorError::TooManyQubits {
				requested: nb_measured,
				available: self.nb_qubits,
			});
		}

		let sampled = self.measure_at(x)?;
		let mask = (1_usize << nb_measured) - 1;
		let pattern = sampled & mask;
		debug!(
			nb_measured,
			pattern = %basis_label(pattern, nb_measured),
			"collapsing state"
		);

		let kept: Vec<Amplitude> = self
			.amplitudes
			.iter()
			.enumerate()
			.filter(|(idx, _)| idx & mask == pattern)
			.map(|(_, amplitude)| *amplitude)
			.collect();
		let remaining = Self::from_parts(kept, self.nb_qubits - nb_measured);

		// The sampled index has a nonzero amplitude, so the norm can't be zero.
		return remaining.normalized();
	}

	/// Measures the `nb_measured` least significant qubits using `rng`, see [QuantumState::collapse_at].
	pub fn collapse_with<R: Rng + ?Sized>(&self, nb_measured: usize, rng: &mut R) -> Result<QuantumState> {
		self.collapse_at(nb_measured, rng.random::<f64>())
	}

	/// Measures the `nb_measured` least significant qubits using the thread-local random source.
	pub fn collapse(&self, nb_measured: usize) -> Result<QuantumState> {
		self.collapse_with(nb_measured, &mut rand::rng())
	}

	/// Computes the possible outcomes of a full measurement together with their probability.
	/// Doesn't include outcomes with 0 chance of happening.
	pub fn possible_outcomes(&self) -> Vec<(usize, f64)> {
		self.amplitudes
			.iter()
			.enumerate()
			.map(|(idx, amplitude)| (idx, amplitude.norm_sqr()))
			.filter(|(_, probability)| *probability > 0.0)
			.collect()
	}

	/// Computes the most likely outcome of a full measurement.
	/// Returns the lowest index if several are as likely as each other.
	pub fn most_likely_outcome(&self) -> usize {
		let mut best = 0;
		let mut best_probability = f64::NEG_INFINITY;
		for (idx, amplitude) in self.amplitudes.iter().enumerate() {
			let probability = amplitude.norm_sqr();
			if probability > best_probability {
				best = idx;
				best_probability = probability;
			}
		}
		return best;
	}

	/// Checks whether 2 states are approximately equal given an error threshold.
	///
	/// # Arguments
	///
	/// * `rhs` - The other state to compare with.
	/// * `epsilon` - The margin of error tolerated between 2 amplitudes.
	pub fn approx_eq(&self, rhs: &QuantumState, epsilon: f64) -> bool {
		approx_eq_slices(&self.amplitudes, &rhs.amplitudes, epsilon)
	}
}

impl std::ops::Index<usize> for QuantumState {
	type Output = Amplitude;

	fn index(&self, index: usize) -> &Self::Output {
		return &self.amplitudes[index];
	}
}
