//! Canonical register states.

use num::{Complex, Zero};

use crate::{
	Amplitude,
	error::{Result, SimulatorError, dimension_of},
	state::QuantumState,
};

/// Creates the basis state `|index⟩` over `nb_qubits` qubits.
///
/// # Errors
///
/// Fails with [SimulatorError::InvalidParameter] if `index` doesn't fit on `nb_qubits` bits,
/// or if `2^nb_qubits` overflows a `usize`.
///
/// # Examples
/// ```
/// use qsimulator::register;
/// let state = register::basis(0b00100, 5).unwrap(); // Represents |00100⟩, or |4⟩.
/// assert_eq!(state.most_likely_outcome(), 4);
/// ```
pub fn basis(index: usize, nb_qubits: usize) -> Result<QuantumState> {
	let dimension = dimension_of(nb_qubits)?;
	if index >= dimension {
		return Err(SimulatorError::invalid_parameter(
			"index",
			format!("{} doesn't fit on {} qubits", index, nb_qubits),
		));
	}
	let mut amplitudes = vec![Complex::zero(); dimension];
	amplitudes[index] = Complex::from(1.0);
	return Ok(QuantumState::from_parts(amplitudes, nb_qubits));
}

/// Creates `|0...0⟩` over `nb_qubits` qubits, see [basis].
pub fn zeros(nb_qubits: usize) -> Result<QuantumState> {
	basis(0, nb_qubits)
}

/// Creates `|1...1⟩` over `nb_qubits` qubits, see [basis].
pub fn ones(nb_qubits: usize) -> Result<QuantumState> {
	basis(dimension_of(nb_qubits)? - 1, nb_qubits)
}

/// Creates the equal superposition of all `2^nb_qubits` basis states,
/// each with amplitude `2^(-nb_qubits/2)`.
/// Over zero qubits this is the scalar state `[1]`.
///
/// # Errors
///
/// Fails with [SimulatorError::InvalidParameter] if `2^nb_qubits` overflows a `usize`.
pub fn equiprobable(nb_qubits: usize) -> Result<QuantumState> {
	if nb_qubits == 0 {
		return zeros(0);
	}
	return plus().power(nb_qubits);
}

/// Creates the single-qubit state `|+⟩ = (|0⟩ + |1⟩)/√2`.
pub fn plus() -> QuantumState {
	let amplitude = Complex::from(1.0 / 2.0f64.sqrt());
	QuantumState::from_parts(vec![amplitude, amplitude], 1)
}

/// Creates the single-qubit state `|-⟩ = (|0⟩ - |1⟩)/√2`.
pub fn minus() -> QuantumState {
	let amplitude = Complex::from(1.0 / 2.0f64.sqrt());
	QuantumState::from_parts(vec![amplitude, -amplitude], 1)
}

/// Creates the single-qubit state `α|0⟩ + β|1⟩`, normalized.
///
/// # Errors
///
/// Fails with [SimulatorError::InvalidParameter] if both coefficients are zero.
pub fn qubit(alpha: Amplitude, beta: Amplitude) -> Result<QuantumState> {
	QuantumState::from_parts(vec![alpha, beta], 1).normalized()
}
