//! Property-based tests for the matrix algebra laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Matrix;

    // Strategy for generating small integer-valued matrices of any shape
    fn any_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| cells(rows, cols))
    }

    // Strategy for generating small square matrices
    fn square_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..5).prop_flat_map(|n| cells(n, n))
    }

    // Diagonally dominant, hence invertible and well conditioned
    fn invertible_matrix() -> impl Strategy<Value = Matrix> {
        square_matrix().prop_map(|m| {
            let n = m.num_rows();
            Matrix::from_fn(n, n, |i, j| if i == j { m[(i, j)] + 50.0 } else { m[(i, j)] }).unwrap()
        })
    }

    fn cells(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        prop::collection::vec(-10i32..10, rows * cols).prop_map(move |v| {
            Matrix::from_fn(rows, cols, |i, j| f64::from(v[i * cols + j])).unwrap()
        })
    }

    fn tolerance(value: f64) -> f64 {
        1e-9 * value.abs().max(1.0)
    }

    proptest! {
        #[test]
        fn transpose_is_involution(m in any_matrix()) {
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn cofactor_is_involution(m in any_matrix()) {
            prop_assert_eq!(m.cofactor().cofactor(), m);
        }

        #[test]
        fn identity_is_neutral(m in any_matrix()) {
            let left = Matrix::identity(m.num_rows()).unwrap();
            let right = Matrix::identity(m.num_cols()).unwrap();
            prop_assert_eq!(left.multiply(&m).unwrap(), m.clone());
            prop_assert_eq!(m.multiply(&right).unwrap(), m);
        }

        #[test]
        fn scalar_multiply_commutes(m in any_matrix(), k in -100i32..100) {
            let k = f64::from(k);
            prop_assert_eq!(&m * k, k * &m);
        }

        #[test]
        fn transpose_reverses_products(a in cells(2, 3), b in cells(3, 4)) {
            let lhs = a.multiply(&b).unwrap().transpose();
            let rhs = b.transpose().multiply(&a.transpose()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn row_swap_negates_determinant(m in square_matrix(), i in 0usize..4, j in 0usize..4) {
            let n = m.num_rows();
            let (i, j) = (i % n, j % n);
            prop_assume!(i != j);
            let mut rows = m.to_rows();
            rows.swap(i, j);
            let swapped = Matrix::from_rows(&rows).unwrap();
            let det = m.determinant().unwrap();
            let det_swapped = swapped.determinant().unwrap();
            prop_assert!((det + det_swapped).abs() <= tolerance(det));
        }

        #[test]
        fn inverse_roundtrips_to_identity(m in invertible_matrix()) {
            let n = m.num_rows();
            let product = m.multiply(&m.inverse().unwrap()).unwrap();
            prop_assert_eq!(product.eliminate_rounding_errors(), Matrix::identity(n).unwrap());
        }

        #[test]
        fn determinant_of_transpose_is_equal(m in square_matrix()) {
            let det = m.determinant().unwrap();
            let det_t = m.transpose().determinant().unwrap();
            prop_assert!((det - det_t).abs() <= tolerance(det));
        }
    }
}
