use num::Complex;
use qsimulator::{ComplexMatrix, ErrorKind, Kronecker};

#[test]
fn kronecker_product() {
	let a = ComplexMatrix::from_real_rows(&[vec![1.0, 2.0], vec![3.0, 1.0]]).unwrap();
	let b = ComplexMatrix::from_real_rows(&[vec![0.0, 3.0], vec![2.0, 1.0]]).unwrap();
	let expected = ComplexMatrix::from_real_rows(&[
		vec![0.0, 3.0, 0.0, 6.0],
		vec![2.0, 1.0, 4.0, 2.0],
		vec![0.0, 9.0, 0.0, 3.0],
		vec![6.0, 3.0, 2.0, 1.0],
	])
	.unwrap();
	assert!(expected.approx_eq(&a.kron(&b), 1e-10));
}

#[test]
fn non_square_kronecker_product() {
	let a = ComplexMatrix::from_real_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
	let b = ComplexMatrix::from_real_rows(&[vec![1.0], vec![-1.0]]).unwrap();
	let product = a.kron(&b);
	assert_eq!(product.shape(), (2, 3));
	let expected = ComplexMatrix::from_real_rows(&[vec![1.0, 2.0, 3.0], vec![-1.0, -2.0, -3.0]]).unwrap();
	assert!(product.approx_eq(&expected, 1e-12));
}

#[test]
fn matmul_and_matvec() {
	let a = ComplexMatrix::from_real_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
	let b = ComplexMatrix::from_real_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
	let product = a.matmul(&b).unwrap();
	let expected = ComplexMatrix::from_real_rows(&[vec![2.0, 1.0], vec![4.0, 3.0]]).unwrap();
	assert!(product.approx_eq(&expected, 1e-12));

	let vector = a.matvec(&[Complex::from(1.0), Complex::new(0.0, 1.0)]).unwrap();
	assert_eq!(vector, vec![Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)]);
}

#[test]
fn shape_mismatches_are_errors() {
	let a = ComplexMatrix::identity(2);
	let b = ComplexMatrix::identity(4);
	assert_eq!(a.add(&b).unwrap_err().kind(), ErrorKind::Shape);
	assert_eq!(a.sub(&b).unwrap_err().kind(), ErrorKind::Shape);
	assert_eq!(a.matmul(&b).unwrap_err().kind(), ErrorKind::Shape);
	assert_eq!(a.matvec(&[Complex::from(1.0)]).unwrap_err().kind(), ErrorKind::Shape);
}

#[test]
fn scalar_multiplication() {
	let mut a = ComplexMatrix::identity(2);
	a *= Complex::new(0.0, 2.0);
	assert_eq!(a[(0, 0)], Complex::new(0.0, 2.0));
	assert_eq!(a[(0, 1)], Complex::from(0.0));
	let b = &a * Complex::new(0.0, -0.5);
	assert!(b.approx_eq(&ComplexMatrix::identity(2), 1e-12));
}
