use num::Complex;
use qsimulator::{
	ComplexMatrix, ErrorKind, Kronecker, QuantumGate, SimulatorError, SparseMatrix, Tensor, kron_power,
	register, sparse_kron,
};

#[test]
fn densify_round_trip() {
	let dense = ComplexMatrix::from_rows(&[
		vec![Complex::new(0.0, 1.0), Complex::from(0.0)],
		vec![Complex::from(0.0), Complex::from(-2.0)],
	])
	.unwrap();
	let sparse = SparseMatrix::from_dense(&dense);
	assert_eq!(sparse.nnz(), 2);
	assert_eq!(sparse.values(), &[Complex::new(0.0, 1.0), Complex::from(-2.0)]);
	assert!(sparse.densify().approx_eq(&dense, 1e-12));
}

#[test]
fn sparse_kron_matches_dense_kron() {
	let a = ComplexMatrix::from_real_rows(&[vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap();
	let b = ComplexMatrix::from_real_rows(&[vec![0.0, 3.0, 0.0], vec![4.0, 0.0, 5.0]]).unwrap();
	let product = sparse_kron(&SparseMatrix::from_dense(&a), &SparseMatrix::from_dense(&b));
	assert_eq!(product.shape(), (4, 6));
	assert_eq!(product.nnz(), 6);
	assert!(product.densify().approx_eq(&a.kron(&b), 1e-12));
}

#[test]
fn sparse_power_of_identity() {
	let identity = kron_power(&SparseMatrix::identity(2), 4).unwrap();
	assert_eq!(identity.shape(), (16, 16));
	assert_eq!(identity.nnz(), 16);
	assert!(identity.densify().approx_eq(&ComplexMatrix::identity(16), 1e-12));
}

#[test]
fn vectors_are_not_sparse_matrices() {
	let tensor = Tensor::from(vec![Complex::from(1.0)]);
	assert_eq!(SparseMatrix::from_tensor(&tensor).unwrap_err().kind(), ErrorKind::Type);
}

#[test]
fn triplets_are_validated() {
	let one = Complex::from(1.0);
	let out_of_bounds = SparseMatrix::from_triplets((2, 2), [(0, 0, one), (2, 1, one)]).unwrap_err();
	assert_eq!(
		out_of_bounds,
		SimulatorError::IndexOutOfBounds {
			row:   2,
			col:   1,
			shape: (2, 2),
		}
	);

	let duplicate = SparseMatrix::from_triplets((2, 2), [(1, 1, one), (1, 1, one)]).unwrap_err();
	assert_eq!(duplicate.kind(), ErrorKind::Shape);

	let zeros_dropped = SparseMatrix::from_triplets((2, 2), [(0, 1, Complex::from(0.0)), (1, 0, one)]).unwrap();
	assert_eq!(zeros_dropped.nnz(), 1);
}

#[test]
fn sparse_application_matches_dense() {
	let h2 = QuantumGate::h().tensor(&QuantumGate::cx());
	let state = register::basis(0b101, 3).unwrap();
	let dense = h2.apply_state(&state).unwrap();
	let sparse = h2.to_sparse().apply_state(&state).unwrap();
	assert!(dense.approx_eq(&sparse, 1e-12));
	assert_eq!(h2.to_sparse().apply(&[Complex::from(1.0)]).unwrap_err().kind(), ErrorKind::Shape);
}

#[test]
fn xor_oracle_is_a_permutation() {
	// f(x) = x mod 3 on 3 input qubits, 2 output qubits
	let oracle = SparseMatrix::xor_oracle(3, 2, |x| x % 3).unwrap();
	assert_eq!(oracle.shape(), (32, 32));
	assert_eq!(oracle.nnz(), 32);

	let gate = QuantumGate::from_sparse(&oracle).unwrap();
	assert!(gate.is_unitary(1e-12));

	// |5⟩|1⟩ → |5⟩|1 ⊕ 2⟩ = |5⟩|3⟩
	let input = register::basis((5 << 2) | 1, 5).unwrap();
	let output = oracle.apply_state(&input).unwrap();
	assert_eq!(output.most_likely_outcome(), (5 << 2) | 3);
}

#[test]
fn xor_oracle_output_must_fit() {
	let err = SparseMatrix::xor_oracle(2, 1, |x| x).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn xor_oracle_registers_must_be_indexable() {
	let err = SparseMatrix::xor_oracle(40, 30, |_| 0).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Domain);
	let err = SparseMatrix::xor_oracle(0, usize::BITS as usize, |_| 0).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn scaling() {
	let sparse = SparseMatrix::identity(4).scale(Complex::new(0.0, 2.0));
	assert_eq!(sparse.nnz(), 4);
	assert!(sparse.densify().approx_eq(&(ComplexMatrix::identity(4) * Complex::new(0.0, 2.0)), 1e-12));
	assert_eq!(SparseMatrix::identity(4).scale(Complex::from(0.0)).nnz(), 0);
}
