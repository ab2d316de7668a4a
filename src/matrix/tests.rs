// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Matrix, Matrix2, Matrix3, Matrix4, SquareMatrix, adj, cofactor, det, inverse},
    vector::{vec3, vec4},
};

#[test]
fn test_matrix_access() {
    #[rustfmt::skip]
    let mut matrix = Matrix::new([
        [01, 02, 03, 04, 05],
        [06, 07, 08, 09, 10],
        [11, 12, 13, 14, 15],
        [16, 17, 18, 19, 20],
        [12, 22, 23, 24, 25],
    ]);

    assert_eq!(matrix.row(2), [11, 12, 13, 14, 15]);
    assert_eq!(matrix.col(4), [05, 10, 15, 20, 25]);

    assert_eq!(matrix[(1, 3)], 09);
    assert_eq!(matrix[8], 09);
    assert_eq!(matrix.get(4, 0), Some(&12));
    assert_eq!(matrix.get(5, 0), None);
    assert_eq!(matrix.get(0, 5), None);

    if let Some(elem) = matrix.get_mut(0, 0) {
        *elem = 99;
    }
    assert_eq!(matrix[0], 99);

    matrix[(4, 0)] = 21;
    assert_eq!(matrix.as_slice()[20], 21);

    matrix.set_row(0, [0; 5]);
    matrix.set_col(1, [1; 5]);
    assert_eq!(matrix.row(0), [0, 1, 0, 0, 0]);
    assert_eq!(matrix.col(1), [1; 5]);
}

#[test]
fn test_linear_index() {
    let mut matrix: Matrix<usize, 3, 4> = Matrix::from_fn(|row, col| row * 4 + col);

    for i in 0..matrix.as_slice().len() {
        assert_eq!(matrix[i], i);
        assert_eq!(matrix[i], matrix[(i / 4, i % 4)]);
    }

    matrix[7] = 100;
    assert_eq!(matrix[(1, 3)], 100);
}

#[test]
#[should_panic]
fn test_index_out_of_bounds() {
    let matrix = Matrix2::new([[1, 2], [3, 4]]);
    let _ = matrix[(2, 0)];
}

#[test]
#[should_panic]
fn test_linear_index_out_of_bounds() {
    let matrix = Matrix2::new([[1, 2], [3, 4]]);
    let _ = matrix[4];
}

#[test]
fn test_construction() {
    assert_eq!(Matrix::<i32, 2, 3>::splat(7).as_slice(), &[7; 6]);
    assert_eq!(Matrix::<f32, 3, 2>::zero(), Matrix::splat(0.0));
    assert_eq!(Matrix::from([[1, 2], [3, 4]]), Matrix2::new([[1, 2], [3, 4]]));

    #[rustfmt::skip]
    let identity = Matrix::new([
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 1],
    ]);
    assert_eq!(Matrix3::<i32>::identity(), identity);

    let array: [[i32; 2]; 1] = Matrix::new([[5, 6]]).into();
    assert_eq!(array, [[5, 6]]);
}

#[test]
fn test_matrix_multiply() {
    #[rustfmt::skip]
    let m1 = Matrix4::new([
        [15, 07, 09, 10],
        [02, 03, 03, 08],
        [08, 10, 02, 03],
        [03, 03, 04, 08],
    ]);

    #[rustfmt::skip]
    let m2 = Matrix4::new([
        [03, 10, 12, 18],
        [12, 01, 04, 09],
        [09, 10, 12, 02],
        [03, 12, 04, 10],
    ]);

    #[rustfmt::skip]
    let result = Matrix4::new([
        [240, 367, 356, 451],
        [093, 149, 104, 149],
        [171, 146, 172, 268],
        [105, 169, 128, 169],
    ]);

    assert_eq!(m1 * m2, result);

    assert_eq!(
        Matrix4::<f32>::identity() * Matrix4::identity(),
        Matrix4::identity()
    );

    let m0 = Matrix::new([[1, 2, 3]]);
    let m1 = Matrix::new([[4], [5], [6]]);

    assert_eq!(m0 * m1, Matrix::new([[32]]));

    #[rustfmt::skip]
    let m1_by_m0_result = Matrix::new([
        [04, 08, 12],
        [05, 10, 15],
        [06, 12, 18],
    ]);

    assert_eq!(m1 * m0, m1_by_m0_result);
}

#[test]
fn test_matrix_vector_multiply() {
    let v = vec4(1.5, -2.0, 3.0, 1.0);
    assert_eq!(Matrix4::identity() * v, v);

    #[rustfmt::skip]
    let m = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);
    assert_eq!(m * vec3(1, 0, -1), Matrix::new([[-2], [-2]]));

    #[rustfmt::skip]
    let m = Matrix4::from_row_major([
        1, 2, 3, 10,
        4, 5, 6, 20,
        7, 8, 9, 30,
        0, 0, 0, 01,
    ]);

    // Only the upper-left 3x3 block applies to a 3D vector.
    assert_eq!(m * vec3(1, 1, 1), vec3(6, 15, 24));
    assert_eq!(m * vec4(1, 1, 1, 1), vec4(16, 35, 54, 1));
    assert_eq!(m * vec4(1, 1, 1, 0), vec4(6, 15, 24, 0));
}

#[test]
fn test_multiply_associative() {
    #[rustfmt::skip]
    let a = Matrix::new([
        [1, -2, 3],
        [0, 04, 5],
    ]);

    #[rustfmt::skip]
    let b = Matrix::new([
        [2, 1],
        [7, 0],
        [-1, 3],
    ]);

    #[rustfmt::skip]
    let c = Matrix::new([
        [3, -4],
        [1, 02],
    ]);

    assert_eq!((a * b) * c, a * (b * c));
}

#[test]
fn test_matrix_add() {
    // Taken from https://en.wikipedia.org/wiki/Matrix_addition
    #[rustfmt::skip]
    let m1 = Matrix::new([
        [1, 3],
        [1, 0],
        [1, 2],
    ]);

    #[rustfmt::skip]
    let m2 = Matrix::new([
        [0, 0],
        [7, 5],
        [2, 1],
    ]);

    #[rustfmt::skip]
    let expected_add_result = Matrix::new([
        [1, 3],
        [8, 5],
        [3, 3],
    ]);

    #[rustfmt::skip]
    let expected_sub_result = Matrix::new([
        [01, 03],
        [-6, -5],
        [-1, 01],
    ]);

    assert_eq!(m1 + m2, expected_add_result);
    assert_eq!(m1 - m2, expected_sub_result);
    assert_eq!(-(m1 - m2), m2 - m1);

    let mut m3 = m1;
    m3 += m2;
    assert_eq!(m3, expected_add_result);
    m3 -= m2;
    assert_eq!(m3, m1);
}

#[test]
fn test_scalar_ops() {
    let m = Matrix2::new([[1.0, -2.0], [4.0, 0.5]]);

    assert_eq!(m * 2.0, Matrix::new([[2.0, -4.0], [8.0, 1.0]]));
    assert_eq!(m / 2.0, Matrix::new([[0.5, -1.0], [2.0, 0.25]]));
    assert_eq!(m + 1.0, Matrix::new([[2.0, -1.0], [5.0, 1.5]]));
    assert_eq!(m - 1.0, Matrix::new([[0.0, -3.0], [3.0, -0.5]]));

    let mut n = m;
    n *= 3.0;
    n /= 3.0;
    n += 2.0;
    n -= 2.0;
    assert_eq!(n, m);

    let m = Matrix3::new([[0.3, -1.7, 2.9], [11.0, 0.01, -5.5], [1e3, -7.25, 0.125]]);
    for s in [0.1, 3.0, -42.5, 1e-3] {
        approx::assert_relative_eq!((m * s) / s, m, epsilon = 1e-12);
    }
}

#[test]
#[should_panic = "attempted to divide a matrix by zero"]
fn test_divide_by_zero() {
    let _ = Matrix2::<f32>::identity() / 0.0;
}

#[test]
#[should_panic = "attempted to divide a matrix by zero"]
fn test_divide_assign_by_zero() {
    let mut m = Matrix2::new([[1, 2], [3, 4]]);
    m /= 0;
}

#[test]
fn test_elementwise() {
    let lhs = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    let rhs = Matrix2::new([[2.0, 0.5], [-1.0, 8.0]]);

    assert_eq!(lhs.elementwise_mul(rhs), Matrix::new([[2.0, 1.0], [-3.0, 32.0]]));
    assert_eq!(lhs.elementwise_div(rhs), Matrix::new([[0.5, 4.0], [-3.0, 0.5]]));
    assert_eq!(lhs.zip_map(rhs, |x, y| x > y), Matrix::new([[false, true], [true, false]]));
}

#[test]
#[should_panic]
fn test_elementwise_divide_by_zero() {
    let lhs = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    let _ = lhs.elementwise_div(Matrix::new([[1.0, 1.0], [0.0, 1.0]]));
}

#[test]
fn test_transpose() {
    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    let transposed = Matrix::new([
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
    ]);

    assert_eq!(mat.transpose(), transposed);
    assert_eq!(crate::matrix::transpose(transposed), mat);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2],
        [3, 4],
        [5, 6],
    ]);
    #[rustfmt::skip]
    let transposed = Matrix::new([
        [1, 3, 5],
        [2, 4, 6],
    ]);

    assert_eq!(mat.transpose(), transposed);
    assert_eq!(mat.transpose().transpose(), mat);

    let mat = Matrix::new([[1]]);
    assert_eq!(mat.transpose(), mat);

    let mat = Matrix::new([[1, 2, 3, 4]]);
    assert_eq!(mat.transpose(), Matrix::new([[1], [2], [3], [4]]));
}

#[test]
fn test_determinant() {
    let mat = Matrix::new([[25]]);
    assert_eq!(mat.determinant(), 25);
    assert_eq!(det(Matrix::new([[5.0]])), 5.0);
    assert_eq!(det(Matrix2::<f64>::identity()), 1.0);

    // 2x2 example taken from https://www.mathsisfun.com/algebra/matrix-determinant.html
    #[rustfmt::skip]
    let mat = Matrix::new([
        [3, 8],
        [4, 6],
    ]);

    assert_eq!(mat.determinant(), -14);

    // 3x3 examples taken from https://www.geeksforgeeks.org/maths/determinant-of-3x3-matrix/
    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2, 1],
        [0, 3, 0],
        [4, 1, 2],
    ]);

    assert_eq!(mat.determinant(), -6);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [3, 1, 2],
        [0, 2, 5],
        [2, 0, 4],
    ]);

    assert_eq!(mat.determinant(), 26);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [00, -1, 2],
        [03, 02, 0],
        [-1, 03, 2],
    ]);

    assert_eq!(mat.determinant(), 28);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [02, 01, 3, 4],
        [00, -1, 2, 1],
        [03, 02, 0, 5],
        [-1, 03, 2, 1],
    ]);

    assert_eq!(mat.determinant(), 35);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [02, 01, 00, 3],
        [04, -1, 02, 0],
        [-3, 02, 01, 5],
        [01, 00, -2, 3],
    ]);

    assert_eq!(mat.determinant(), -85);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [2, 0, 0, 0, 1],
        [0, 3, 0, 0, 0],
        [0, 0, 4, 0, 0],
        [0, 0, 0, 5, 0],
        [1, 0, 0, 0, 2],
    ]);

    assert_eq!(mat.determinant(), 180);

    assert_eq!(Matrix::<i32, 4, 4>::identity().determinant(), 1);
    assert_eq!(Matrix::<i32, 6, 6>::identity().determinant(), 1);

    #[rustfmt::skip]
    let with_zero_row = Matrix::new([
        [1.5, 2.0, -3.0],
        [0.0, 0.0, 00.0],
        [7.0, 8.0, 09.0],
    ]);

    assert_eq!(det(with_zero_row), 0.0);
}

#[test]
fn test_minor_and_cofactor() {
    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2],
        [3, 4],
    ]);

    assert_eq!(mat.minor(0, 1), Matrix::new([[3]]));
    assert_eq!(mat.cofactor(0, 0), 4);
    assert_eq!(mat.cofactor(0, 1), -3);
    assert_eq!(mat.cofactor(1, 0), -2);
    assert_eq!(mat.cofactor(1, 1), 1);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    assert_eq!(mat.minor(1, 1), Matrix::new([[1, 3], [7, 9]]));
    assert_eq!(mat.minor(2, 0), Matrix::new([[2, 3], [5, 6]]));

    #[rustfmt::skip]
    let mat = Matrix::new([
        [00, -1, 2],
        [03, 02, 0],
        [-1, 03, 2],
    ]);

    assert_eq!(cofactor(mat, 0, 1), -det(mat.minor(0, 1)));
    assert_eq!(cofactor(mat, 0, 1), -6);
    assert_eq!(Matrix::new([[8]]).cofactor(0, 0), 1);
}

#[test]
#[should_panic]
fn test_minor_out_of_bounds() {
    let _ = Matrix3::<i32>::identity().minor(0, 3);
}

#[test]
#[should_panic]
fn test_cofactor_out_of_bounds() {
    let _ = Matrix::new([[2]]).cofactor(1, 0);
}

#[test]
fn test_adjugate() {
    assert_eq!(adj(Matrix::new([[7]])), Matrix::new([[1]]));

    #[rustfmt::skip]
    let mat = Matrix::new([
        [03, 6],
        [-4, 8],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix::new([
        [8, -6],
        [4, 03],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix::new([
        [-3, 006, -3],
        [06, -12, 06],
        [-3, 006, -3],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [05, -2, 02, 7],
        [01, 00, 00, 3],
        [-3, 01, 05, 0],
        [03, -1, -9, 4],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix::new([
        [-12, 076, -60, -36],
        [-56, 208, -82, -58],
        [004, 004, -02, -10],
        [004, 004, 020, 012],
    ]);

    assert_eq!(adj(mat), expected_adjugate);
}

#[test]
fn test_inverse() {
    let m1 = Matrix::new([[4.0]]);
    assert_eq!(inverse(m1), Matrix::new([[0.25]]));

    let m2 = Matrix2::new([[4.0, 7.0], [2.0, 6.0]]);
    approx::assert_relative_eq!(m2.inverse(), Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
    approx::assert_abs_diff_eq!(m2 * m2.inverse(), Matrix::identity(), epsilon = 1e-12);

    #[rustfmt::skip]
    let m3 = Matrix3::new([
        [3, 1, 2],
        [0, 2, 5],
        [2, 0, 4],
    ]).map(f64::from);
    approx::assert_abs_diff_eq!(m3 * m3.inverse(), Matrix::identity(), epsilon = 1e-12);
    approx::assert_abs_diff_eq!(m3.inverse() * m3, Matrix::identity(), epsilon = 1e-12);

    #[rustfmt::skip]
    let m4 = Matrix4::new([
        [02, 01, 3, 4],
        [00, -1, 2, 1],
        [03, 02, 0, 5],
        [-1, 03, 2, 1],
    ]).map(f64::from);
    approx::assert_abs_diff_eq!(m4 * inverse(m4), Matrix::identity(), epsilon = 1e-12);

    #[rustfmt::skip]
    let m5 = Matrix::new([
        [2, 0, 0, 0, 1],
        [0, 3, 0, 0, 0],
        [0, 0, 4, 0, 0],
        [0, 0, 0, 5, 0],
        [1, 0, 0, 0, 2],
    ]).map(f64::from);
    approx::assert_abs_diff_eq!(m5 * m5.inverse(), Matrix::identity(), epsilon = 1e-12);
}

#[test]
fn test_inverse_single_precision() {
    #[rustfmt::skip]
    let m4 = Matrix4::<f32>::new([
        [0.5, 1.0, -2.0, 3.0],
        [4.0, 0.0, 1.5, -1.0],
        [-3.0, 2.0, 1.0, 0.25],
        [1.0, -1.0, 2.0, 3.0],
    ]);
    approx::assert_abs_diff_eq!(m4 * m4.inverse(), Matrix::identity(), epsilon = 1e-4);

    let m3 = Matrix3::<f32>::new([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
    approx::assert_abs_diff_eq!(m3 * m3.inverse(), Matrix::identity(), epsilon = 1e-4);
}

#[test]
fn test_closed_form_inverse() {
    let inputs = [
        Matrix4::new([[2, 1, 3, 4], [0, -1, 2, 1], [3, 2, 0, 5], [-1, 3, 2, 1]]),
        Matrix4::new([[2, 1, 0, 3], [4, -1, 2, 0], [-3, 2, 1, 5], [1, 0, -2, 3]]),
        Matrix4::new([[5, -2, 2, 7], [1, 0, 0, 3], [-3, 1, 5, 0], [3, -1, -9, 4]]),
    ];

    for input in inputs {
        let m = input.map(f64::from);
        approx::assert_relative_eq!(
            m.closed_form_inverse(),
            m.cofactor_inverse(),
            epsilon = 1e-12
        );
        approx::assert_relative_eq!(m.inverse(), m.cofactor_inverse(), epsilon = 1e-12);
    }

    #[rustfmt::skip]
    let m = Matrix4::new([
        [1.500, -0.25, 3.75, 2.0],
        [0.125, 04.50, -1.0, 0.5],
        [-2.25, 01.00, 0.75, -3.5],
        [0.300, -1.70, 2.90, 1.1],
    ]);
    approx::assert_relative_eq!(
        m.closed_form_inverse(),
        m.cofactor_inverse(),
        epsilon = 1e-12
    );
    approx::assert_abs_diff_eq!(
        m * m.closed_form_inverse(),
        Matrix::identity(),
        epsilon = 1e-12
    );
}

#[test]
fn test_closed_form_inverse_generated() {
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64 * 20.0 - 10.0
    };

    for _ in 0..256 {
        let m: Matrix4<f64> = Matrix::from_fn(|_, _| next());
        approx::assert_relative_eq!(
            m.closed_form_inverse(),
            m.cofactor_inverse(),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_inverse_checked() {
    #[rustfmt::skip]
    let singular = Matrix3::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    assert!(!singular.has_inverse());
    assert_eq!(singular.inverse_checked(), None);
    assert_eq!(Matrix4::<f64>::zero().inverse_checked(), None);

    let m = Matrix2::new([[2.0, 0.0], [0.0, 4.0]]);
    assert!(m.has_inverse());
    assert_eq!(m.inverse_checked(), Some(Matrix::new([[0.5, 0.0], [0.0, 0.25]])));
}

#[test]
#[should_panic = "attempted to divide a matrix by zero"]
fn test_singular_inverse() {
    let _ = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).inverse();
}

#[test]
#[should_panic = "attempted to divide a matrix by zero"]
fn test_singular_closed_form_inverse() {
    #[rustfmt::skip]
    let singular = Matrix4::new([
        [1.0, 2.0, 3.0, 4.0],
        [0.0, 0.0, 0.0, 0.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 1.0, 2.0, 3.0],
    ]);

    let _ = inverse(singular);
}

#[cfg(feature = "mint")]
#[test]
fn test_mint_conversions() {
    use mint::{ColumnMatrix2x3, RowMatrix3};

    let mint_matrix = ColumnMatrix2x3 {
        x: [1.0, 2.0].into(),
        y: [3.0, 4.0].into(),
        z: [5.0, 6.0].into(),
    };

    let matrix: Matrix<f64, 2, 3> = mint_matrix.into();

    assert_eq!(matrix, Matrix::new([[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]));
    assert_eq!(ColumnMatrix2x3::from(matrix), mint_matrix);

    let rows: RowMatrix3<i32> = Matrix3::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).into();
    assert_eq!(rows.y, mint::Vector3 { x: 4, y: 5, z: 6 });
    assert_eq!(Matrix3::from(rows)[(2, 0)], 7);
}
