// SPDX-License-Identifier: MIT OR Apache-2.0

//! Determinants and inverses of square matrices.
//!
//! Every order is handled by cofactor expansion along the first row, recursing into minors
//! one order smaller until the `1x1` base case. The `4x4` matrix additionally has a closed
//! form inverse built from 2x2 sub-determinants, which [`SquareMatrix::inverse()`] prefers.

use super::{Matrix, Matrix4};
use crate::utils::{
    num::{Signed, Zero},
    sum, without,
};

/// Operations on square matrices which depend on the determinant.
///
/// This trait is implemented for `Matrix<T, N, N>` with `1 <= N <= 6`, where `T` is a
/// [`Signed`] scalar. The cost of cofactor expansion grows factorially with `N`.
pub trait SquareMatrix: Copy {
    type Scalar: Signed;

    /// Returns the signed minor at (`row`, `col`): the determinant of the matrix with `row`
    /// and `col` removed, negated when `row + col` is odd.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    fn cofactor(self, row: usize, col: usize) -> Self::Scalar;

    /// Calculates the scalar determinant of the matrix.
    ///
    /// If this value is `0`, then the matrix is not invertible.
    #[must_use]
    fn determinant(self) -> Self::Scalar;

    /// Returns the transpose of the matrix of cofactors.
    #[doc(alias = "adjoint")]
    #[must_use]
    fn adjugate(self) -> Self;

    /// Calculates the inverse as `adjugate / determinant`, for every order.
    ///
    /// # Panics
    ///
    /// Panics if the determinant is zero.
    #[must_use]
    fn cofactor_inverse(self) -> Self;

    /// Calculates the inverse of the matrix.
    ///
    /// If you have a matrix `m1`, and `m2`, multiplying `m1` by `m2`, and then multiplying
    /// the result by `m2.inverse()` will return the original `m1`.
    ///
    /// # Panics
    ///
    /// This method will panic if the determinant is zero. If the matrix is potentially
    /// not invertible, then use the [`inverse_checked()`] or [`has_inverse()`] methods.
    ///
    /// [`inverse_checked()`]: SquareMatrix::inverse_checked
    /// [`has_inverse()`]: SquareMatrix::has_inverse
    #[must_use]
    #[inline]
    #[track_caller]
    fn inverse(self) -> Self {
        self.cofactor_inverse()
    }

    /// Calculates the inverse of the matrix, or returns `None` if the determinant is zero.
    #[must_use]
    #[inline]
    fn inverse_checked(self) -> Option<Self> {
        self.has_inverse().then(|| self.inverse())
    }

    /// Returns whether the matrix is invertible.
    #[must_use]
    #[inline]
    fn has_inverse(self) -> bool {
        self.determinant() != Zero::ZERO
    }
}

#[track_caller]
#[inline]
fn check_bounds<const N: usize>(row: usize, col: usize) {
    assert!(
        row < N && col < N,
        "index ({row}, {col}) is out of bounds for a {N}x{N} matrix"
    );
}

impl<T: Signed> SquareMatrix for Matrix<T, 1, 1> {
    type Scalar = T;

    /// The minor of a `1x1` matrix is empty, and its determinant is one.
    #[track_caller]
    #[inline]
    fn cofactor(self, row: usize, col: usize) -> T {
        check_bounds::<1>(row, col);
        T::ONE
    }

    #[inline]
    fn determinant(self) -> T {
        self[0]
    }

    #[inline]
    fn adjugate(self) -> Self {
        Matrix::new([[T::ONE]])
    }

    #[track_caller]
    #[inline]
    fn cofactor_inverse(self) -> Self {
        self.adjugate() / self.determinant()
    }
}

macro_rules! impl_square_matrix {
    ( $( $n:literal => $m:literal $( , inverse = $fast:ident )? );* $(;)? ) => {
        $(
            impl<T: Copy> Matrix<T, $n, $n> {
                /// Returns the matrix left after deleting `removed_row` and `removed_col`.
                ///
                /// # Panics
                ///
                /// This method will panic if either index is out of bounds.
                #[track_caller]
                #[must_use]
                #[inline]
                pub fn minor(self, removed_row: usize, removed_col: usize) -> Matrix<T, $m, $m> {
                    check_bounds::<$n>(removed_row, removed_col);

                    let rows = self.data.map(|row| without::<T, $n, $m>(row, removed_col));
                    Matrix::new(without(rows, removed_row))
                }
            }

            impl<T: Signed> SquareMatrix for Matrix<T, $n, $n> {
                type Scalar = T;

                #[track_caller]
                #[inline]
                fn cofactor(self, row: usize, col: usize) -> T {
                    let minor_det = self.minor(row, col).determinant();
                    if (row + col) % 2 == 1 { -minor_det } else { minor_det }
                }

                #[inline]
                fn determinant(self) -> T {
                    sum((0..$n).map(|col| self.cofactor(0, col) * self[col]))
                }

                #[inline]
                fn adjugate(self) -> Self {
                    Matrix::from_fn(|row, col| self.cofactor(row, col)).transpose()
                }

                #[track_caller]
                #[inline]
                fn cofactor_inverse(self) -> Self {
                    self.adjugate() / self.determinant()
                }

                $(
                    #[track_caller]
                    #[inline]
                    fn inverse(self) -> Self {
                        self.$fast()
                    }
                )?
            }
        )*
    };
}

impl_square_matrix! {
    2 => 1;
    3 => 2;
    4 => 3, inverse = closed_form_inverse;
    5 => 4;
    6 => 5;
}

impl<T: Signed> Matrix4<T> {
    /// Calculates the inverse from precomputed 2x2 sub-determinants of the lower rows,
    /// without recursing into minors.
    ///
    /// The result matches [`SquareMatrix::cofactor_inverse()`] up to floating-point rounding.
    ///
    /// # Panics
    ///
    /// Panics if the determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::{matrix::Matrix4, transform::scale};
    /// let inverse = scale(2.0, 4.0, 8.0).closed_form_inverse();
    /// assert_eq!(inverse, scale(0.5, 0.25, 0.125));
    /// ```
    #[track_caller]
    #[must_use]
    pub fn closed_form_inverse(self) -> Self {
        let m = self.as_slice();

        let a1015 = m[10] * m[15] - m[11] * m[14];
        let a0915 = m[9] * m[15] - m[11] * m[13];
        let a0914 = m[9] * m[14] - m[10] * m[13];
        let a0815 = m[8] * m[15] - m[11] * m[12];
        let a0814 = m[8] * m[14] - m[10] * m[12];
        let a0813 = m[8] * m[13] - m[9] * m[12];
        let a0615 = m[6] * m[15] - m[7] * m[14];
        let a0515 = m[5] * m[15] - m[7] * m[13];
        let a0514 = m[5] * m[14] - m[6] * m[13];
        let a0415 = m[4] * m[15] - m[7] * m[12];
        let a0414 = m[4] * m[14] - m[6] * m[12];
        let a0413 = m[4] * m[13] - m[5] * m[12];
        let a0611 = m[6] * m[11] - m[7] * m[10];
        let a0511 = m[5] * m[11] - m[7] * m[9];
        let a0510 = m[5] * m[10] - m[6] * m[9];
        let a0411 = m[4] * m[11] - m[7] * m[8];
        let a0410 = m[4] * m[10] - m[6] * m[8];
        let a0409 = m[4] * m[9] - m[5] * m[8];

        #[rustfmt::skip]
        let adjugate = Matrix4::from_row_major([
            m[5] * a1015 - m[6] * a0915 + m[7] * a0914,
            -(m[1] * a1015 - m[2] * a0915 + m[3] * a0914),
            m[1] * a0615 - m[2] * a0515 + m[3] * a0514,
            -(m[1] * a0611 - m[2] * a0511 + m[3] * a0510),

            -(m[4] * a1015 - m[6] * a0815 + m[7] * a0814),
            m[0] * a1015 - m[2] * a0815 + m[3] * a0814,
            -(m[0] * a0615 - m[2] * a0415 + m[3] * a0414),
            m[0] * a0611 - m[2] * a0411 + m[3] * a0410,

            m[4] * a0915 - m[5] * a0815 + m[7] * a0813,
            -(m[0] * a0915 - m[1] * a0815 + m[3] * a0813),
            m[0] * a0515 - m[1] * a0415 + m[3] * a0413,
            -(m[0] * a0511 - m[1] * a0411 + m[3] * a0409),

            -(m[4] * a0914 - m[5] * a0814 + m[6] * a0813),
            m[0] * a0914 - m[1] * a0814 + m[2] * a0813,
            -(m[0] * a0514 - m[1] * a0414 + m[2] * a0413),
            m[0] * a0510 - m[1] * a0410 + m[2] * a0409,
        ]);

        // The first column of the adjugate holds the cofactors of the first row.
        let det = m[0] * adjugate[0]
            + m[1] * adjugate[4]
            + m[2] * adjugate[8]
            + m[3] * adjugate[12];

        adjugate / det
    }
}

/// Returns the determinant of `matrix`.
#[must_use]
#[inline]
pub fn det<M: SquareMatrix>(matrix: M) -> M::Scalar {
    matrix.determinant()
}

/// Returns the signed minor of `matrix` at (`row`, `col`).
///
/// # Panics
///
/// Panics if `row` or `col` is out of bounds.
#[track_caller]
#[must_use]
#[inline]
pub fn cofactor<M: SquareMatrix>(matrix: M, row: usize, col: usize) -> M::Scalar {
    matrix.cofactor(row, col)
}

/// Returns the adjugate of `matrix`.
#[must_use]
#[inline]
pub fn adj<M: SquareMatrix>(matrix: M) -> M {
    matrix.adjugate()
}

/// Returns the inverse of `matrix`.
///
/// # Panics
///
/// Panics if the determinant of `matrix` is zero.
///
/// # Examples
///
/// ```
/// # use gmath::{inverse, matrix::Matrix};
/// let matrix = Matrix::new([
///     [4.0f64, 7.0],
///     [2.0, 6.0],
/// ]);
///
/// let expected = Matrix::new([
///     [0.6, -0.7],
///     [-0.2, 0.4],
/// ]);
///
/// let result = inverse(matrix);
/// assert!(result.iter().zip(expected.iter()).all(|(x, y)| (x - y).abs() < 1e-12));
/// ```
#[track_caller]
#[must_use]
#[inline]
pub fn inverse<M: SquareMatrix>(matrix: M) -> M {
    matrix.inverse()
}
