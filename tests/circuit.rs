use num::Complex;
use qsimulator::backend::dense::DenseBackend;
use qsimulator::backend::sparse::SparseBackend;
use qsimulator::backend::{Backend, Program};
use qsimulator::circuit::{Circuit, Stage};
use qsimulator::{ErrorKind, QuantumGate, QuantumState, SparseMatrix, register};

fn epr_circuit() -> Circuit {
	Circuit::new(2)
		.unwrap()
		.then(QuantumGate::h().tensor(&QuantumGate::identity(1).unwrap()))
		.unwrap()
		.then(QuantumGate::cx())
		.unwrap()
}

fn bell_state() -> QuantumState {
	let amplitude = 1.0 / 2.0f64.sqrt();
	QuantumState::from_real(&[amplitude, 0.0, 0.0, amplitude]).unwrap()
}

#[test]
fn epr_pair() {
	let circuit = epr_circuit();
	let program = DenseBackend.compile(&circuit).unwrap();
	let output = program.run(&register::zeros(2).unwrap()).unwrap();
	assert!(output.approx_eq(&bell_state(), 1e-12));
}

#[test]
fn fused_gate_puts_later_stages_on_the_left() {
	let circuit = epr_circuit();
	let expected = QuantumGate::cx()
		.compose(&QuantumGate::h().tensor(&QuantumGate::identity(1).unwrap()))
		.unwrap();
	assert!(circuit.as_gate().unwrap().approx_eq(&expected, 1e-12));
}

#[test]
fn empty_circuit_is_identity() {
	let circuit = Circuit::new(3).unwrap();
	assert!(circuit.as_gate().unwrap().approx_eq(&QuantumGate::identity(3).unwrap(), 0.0));

	let state = register::equiprobable(3).unwrap();
	let output = SparseBackend.compile(&circuit).unwrap().run(&state).unwrap();
	assert!(output.approx_eq(&state, 0.0));
}

#[test]
fn stages_must_span_the_register() {
	let err = Circuit::new(2).unwrap().then(QuantumGate::h()).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Shape);

	let err = Circuit::new(1).unwrap().then_sparse(SparseMatrix::identity(4)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn programs_reject_wrong_widths() {
	let circuit = epr_circuit();
	let dense = DenseBackend.compile(&circuit).unwrap();
	let sparse = SparseBackend.compile(&circuit).unwrap();
	assert_eq!(dense.run(&register::zeros(3).unwrap()).unwrap_err().kind(), ErrorKind::Shape);
	assert_eq!(sparse.run(&register::zeros(3).unwrap()).unwrap_err().kind(), ErrorKind::Shape);
	assert_eq!(dense.nb_qubits(), 2);
	assert_eq!(sparse.nb_qubits(), 2);
}

#[test]
fn dense_and_sparse_backends_agree() {
	let oracle = SparseMatrix::xor_oracle(2, 1, |x| x & 1).unwrap();
	let circuit = Circuit::new(3)
		.unwrap()
		.then(QuantumGate::h().power(3).unwrap())
		.unwrap()
		.then_sparse(oracle)
		.unwrap()
		.then(QuantumGate::t().tensor(&QuantumGate::cz()))
		.unwrap()
		.then(QuantumGate::ccx())
		.unwrap();
	assert!(matches!(circuit.steps()[1], Stage::Sparse(_)));

	let dense = DenseBackend.compile(&circuit).unwrap();
	let sparse = SparseBackend.compile(&circuit).unwrap();
	assert_eq!(sparse.operations().len(), 4);

	for index in 0..8 {
		let state = register::basis(index, 3).unwrap().scale(Complex::new(0.0, 1.0));
		let expected = dense.run(&state).unwrap();
		let actual = sparse.run(&state).unwrap();
		assert!(expected.approx_eq(&actual, 1e-12));
	}
}

#[test]
fn stage_conversions() {
	let stage = Stage::Dense(QuantumGate::swap());
	assert_eq!(stage.dimension(), 4);
	assert_eq!(stage.to_sparse().nnz(), 4);

	let stage = Stage::Sparse(SparseMatrix::identity(2));
	assert!(stage.to_dense().approx_eq(&QuantumGate::identity(1).unwrap().into_matrix(), 0.0));
}

#[test]
fn circuits_wider_than_an_index_are_rejected() {
	let err = Circuit::new(usize::BITS as usize).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Domain);
	assert_eq!(Circuit::new(4).unwrap().nb_qubits(), 4);
}
