//! Classical simulation of small quantum circuits.
//!
//! States and gates are complex arrays combined through Kronecker products
//! ([tensor]), applied through matrix products ([gates]) and sampled by
//! probabilistic measurement ([state]). Large, mostly-zero operators such as
//! oracles can go through [sparse] instead.

pub mod complex_matrix;
pub use complex_matrix::*;
pub mod error;
pub use error::{ErrorKind, Result, SimulatorError};
pub mod gates;
pub use gates::*;
pub mod backend;
pub mod circuit;
pub mod config;
pub mod register;
pub mod simulator;
pub mod sparse;
pub mod state;
pub mod tensor;

pub use sparse::{SparseMatrix, sparse_kron};
pub use state::QuantumState;
pub use tensor::{Kronecker, Tensor, kron, kron_multi, kron_power};

/// Complex coefficient of a basis state, and the entry type of every vector and matrix.
pub type Amplitude = num::complex::Complex64;
