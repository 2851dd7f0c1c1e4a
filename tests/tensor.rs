use num::Complex;
use qsimulator::{Amplitude, ComplexMatrix, ErrorKind, Tensor, kron, kron_multi, kron_power};

fn vector(values: &[f64]) -> Tensor {
	Tensor::from(values.iter().map(|&x| Complex::from(x)).collect::<Vec<Amplitude>>())
}

#[test]
fn vector_product_is_a_vector() {
	let product = kron(&vector(&[0.0, 1.0, 2.0]), &vector(&[0.0, 1.0]));
	assert!(product.is_vector());
	assert!(product.approx_eq(&vector(&[0.0, 0.0, 0.0, 1.0, 0.0, 2.0]), 1e-12));
}

#[test]
fn matrix_vector_product_is_a_matrix() {
	let matrix = Tensor::from(ComplexMatrix::from_real_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap());
	let product = kron(&matrix, &vector(&[1.0, -1.0]));
	assert_eq!(product.shape(), (4, 2));
	let expected = ComplexMatrix::from_real_rows(&[
		vec![1.0, 2.0],
		vec![-1.0, -2.0],
		vec![3.0, 4.0],
		vec![-3.0, -4.0],
	])
	.unwrap();
	assert!(product.approx_eq(&Tensor::from(expected), 1e-12));
}

#[test]
fn multi_product_keeps_order() {
	let a = vector(&[1.0, 0.0]);
	let b = vector(&[0.0, 1.0]);
	let abb = kron_multi(&[a.clone(), b.clone(), b.clone()]).unwrap();
	let bab = kron_multi(&[b.clone(), a.clone(), b.clone()]).unwrap();
	// |011⟩ and |101⟩
	assert_eq!(abb.get(0b011, 0), Some(Complex::from(1.0)));
	assert_eq!(bab.get(0b101, 0), Some(Complex::from(1.0)));
	assert!(!abb.approx_eq(&bab, 1e-12));
}

#[test]
fn multi_product_needs_two_operands() {
	assert_eq!(kron_multi::<Tensor>(&[]).unwrap_err().kind(), ErrorKind::Domain);
	assert_eq!(kron_multi(&[vector(&[1.0])]).unwrap_err().kind(), ErrorKind::Domain);
}

#[test]
fn power_identity() {
	let a = vector(&[0.0, 1.0, 2.0]);
	assert!(kron_power(&a, 1).unwrap().approx_eq(&a, 1e-12));

	let cube = kron_power(&a, 3).unwrap();
	assert_eq!(cube.size(), 27);
	assert!(cube.approx_eq(&kron_multi(&[a.clone(), a.clone(), a.clone()]).unwrap(), 1e-12));
}

#[test]
fn zero_power_is_rejected() {
	let err = kron_power(&vector(&[1.0, 1.0]), 0).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn wrong_kind_unwrapping() {
	assert_eq!(vector(&[1.0]).into_matrix().unwrap_err().kind(), ErrorKind::Type);
	let matrix = Tensor::from(ComplexMatrix::identity(2));
	assert_eq!(matrix.into_vector().unwrap_err().kind(), ErrorKind::Type);
}
