// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    const_assert_larger,
    utils::{
        num::{ClosedAdd, ClosedMul, One, Zero},
        sum, zip_map,
    },
    vector::{Vector3, Vector4},
};
use core::{
    array,
    borrow::{Borrow, BorrowMut},
    convert::{AsMut, AsRef},
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice,
};

mod square;
#[cfg(test)]
mod tests;

pub use self::square::{SquareMatrix, adj, cofactor, det, inverse};

/// A row-major matrix of arbitrary dimensions.
///
/// Both dimensions must be at least `1`; building a matrix with a zero dimension fails to
/// compile.
///
/// ```compile_fail
/// # use gmath::matrix::Matrix;
/// let _ = Matrix::<f32, 0, 3>::new([]);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd)]
#[repr(C)]
pub struct Matrix<T = f32, const ROWS: usize = 4, const COLS: usize = 4> {
    data: [[T; COLS]; ROWS],
}

/// A 2x2 matrix.
pub type Matrix2<T = f32> = Matrix<T, 2, 2>;

/// A 3x3 matrix.
pub type Matrix3<T = f32> = Matrix<T, 3, 3>;

/// A 4x4 matrix, the usual homogeneous transform in 3D.
pub type Matrix4<T = f32> = Matrix<T, 4, 4>;

impl<T: Default, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| Default::default())
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    pub const NUM_ELEMENTS: usize = ROWS * COLS;

    /// Create a new `Matrix` from the given nested array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let data: [[i32; 2]; 2] = [[1, 2], [3, 4]];
    /// let matrix: Matrix<i32, 2, 2> = Matrix::new(data);
    /// assert_eq!(matrix[(1, 0)], 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(data: [[T; COLS]; ROWS]) -> Self {
        const_assert_larger!(ROWS, 0);
        const_assert_larger!(COLS, 0);

        Self { data }
    }

    /// Creates a `Matrix` by calling `f(row, col)` for every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix: Matrix<usize, 2, 3> = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(matrix.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::new(array::from_fn(|row| array::from_fn(|col| f(row, col))))
    }

    /// Returns a reference to the inner array of rows.
    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [[T; COLS]; ROWS] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [[T; COLS]; ROWS] {
        self.data
    }

    /// Returns the elements of the matrix as a flat slice in row-major order.
    ///
    /// The position of an element in this slice is the same as its linear index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// Returns the elements of the matrix as a flat, mutable slice in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let mut matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// matrix.as_mut_slice()[4] = 9;
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 9, 6],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Attempt to get a reference to the element at (`row`, `col`).
    ///
    /// This method returns `None` if either of the given indices are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmath::matrix::Matrix;
    ///
    /// let matrix: Matrix<f32, _, _> = Matrix::new([
    ///     [5.0, 6.0, 4.0, 2.0],
    ///     [1.0, 1.0, 3.0, 4.0],
    ///     [2.0, 7.0, 9.0, 0.0],
    /// ]);
    ///
    /// assert_eq!(matrix.get(1, 2), Some(&3.0));
    /// assert_eq!(matrix.get(3, 0), None);
    /// assert_eq!(matrix.get(0, 4), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(row)?.get(col)
    }

    /// Attempt to get a mutable reference to the element at (`row`, `col`).
    ///
    /// This method returns `None` if either of the given indices are out of bounds.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut(row)?.get_mut(col)
    }

    /// Replaces the row at `row_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx >= ROWS`.
    #[track_caller]
    #[inline]
    pub fn set_row(&mut self, row_idx: usize, row: [T; COLS]) {
        assert!(
            row_idx < ROWS,
            "row index {row_idx} is out of bounds for {ROWS} rows"
        );
        self.data[row_idx] = row;
    }

    /// Replaces the column at `col_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `col_idx >= COLS`.
    #[track_caller]
    #[inline]
    pub fn set_col(&mut self, col_idx: usize, col: [T; ROWS]) {
        assert!(
            col_idx < COLS,
            "column index {col_idx} is out of bounds for {COLS} columns"
        );

        for (row, elem) in self.data.iter_mut().zip(col) {
            row[col_idx] = elem;
        }
    }

    /// Applies the given function `f` to every element of the `Matrix`, returning
    /// a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3, 4],
    ///     [5, 6, 7, 8],
    /// ]);
    ///
    /// assert_eq!(matrix.map(|elem| elem % 2 == 0), Matrix::new([
    ///     [false, true, false, true],
    ///     [false, true, false, true],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, ROWS, COLS> {
        Matrix::new(self.data.map(|row| row.map(&mut f)))
    }

    /// Iterates over the elements in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a new matrix, where every element of `Matrix` is set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix: Matrix<_, 4, 4> = Matrix::splat(21);
    /// assert!(matrix.iter().all(|elem| *elem == 21));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([[value; COLS]; ROWS])
    }

    /// Returns a copy of the row at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `ROWS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [0, 1, 2, 3, 4],
    ///     [5, 6, 7, 8, 9]
    /// ]);
    ///
    /// assert_eq!(matrix.row(1), [5, 6, 7, 8, 9]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row(&self, n: usize) -> [T; COLS] {
        assert!(n < ROWS, "given row index is out of bounds");
        self.data[n]
    }

    /// Returns a copy of the column at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [0, 1, 2, 3, 4],
    ///     [5, 6, 7, 8, 9]
    /// ]);
    ///
    /// assert_eq!(matrix.col(1), [1, 6]);
    /// assert_eq!(matrix.col(4), [4, 9]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn col(&self, n: usize) -> [T; ROWS] {
        assert!(n < COLS, "given column index is out of bounds");
        self.data.map(|row| row[n])
    }

    /// Computes the transpose of the matrix, where `transposed(i, j) == self(j, i)`.
    ///
    /// This method can be called on matrices of any dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3, 4],
    ///     [5, 6, 7, 8],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([
    ///     [1, 5],
    ///     [2, 6],
    ///     [3, 7],
    ///     [4, 8],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, COLS, ROWS> {
        Matrix::from_fn(|row, col| self.data[col][row])
    }

    #[inline]
    pub fn zip_map<U: Copy, Ret, F: FnMut(T, U) -> Ret>(
        self,
        rhs: Matrix<U, ROWS, COLS>,
        mut f: F,
    ) -> Matrix<Ret, ROWS, COLS> {
        Matrix::new(zip_map(self.data, rhs.data, |lhs, rhs| {
            zip_map(lhs, rhs, &mut f)
        }))
    }

    /// Multiplies each element by the element at the same position in `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::vector::vec3;
    /// let v = vec3(1.0, 2.0, 3.0).elementwise_mul(vec3(2.0, 2.0, 0.5));
    /// assert_eq!(v, vec3(2.0, 4.0, 1.5));
    /// ```
    #[must_use]
    #[inline]
    pub fn elementwise_mul(self, rhs: Self) -> Self
    where
        T: Mul<Output = T>,
    {
        self.zip_map(rhs, Mul::mul)
    }

    /// Divides each element by the element at the same position in `rhs`.
    ///
    /// # Panics
    ///
    /// Panics if any element of `rhs` is zero.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn elementwise_div(self, rhs: Self) -> Self
    where
        T: Div<Output = T> + Zero + PartialEq,
    {
        assert!(
            rhs.iter().all(|elem| *elem != T::ZERO),
            "attempted to divide by a matrix containing zero"
        );
        self.zip_map(rhs, Div::div)
    }
}

impl<T: Zero, const ROWS: usize, const COLS: usize> Zero for Matrix<T, ROWS, COLS> {
    const ZERO: Self = Matrix::new(Zero::ZERO);
}

impl<T: Zero, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Returns a matrix where every element is zero.
    #[must_use]
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// Constructs an instance of the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix;
    /// let matrix = Matrix::<f64, 4, 4>::identity();
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn identity() -> Self {
        Matrix::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Copy> Matrix4<T> {
    /// Creates a 4x4 matrix from 16 entries given in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::matrix::Matrix4;
    /// #[rustfmt::skip]
    /// let matrix = Matrix4::from_row_major([
    ///     1, 0, 0, 5,
    ///     0, 1, 0, 6,
    ///     0, 0, 1, 7,
    ///     0, 0, 0, 1,
    /// ]);
    ///
    /// assert_eq!(matrix[3], 5);
    /// assert_eq!(matrix[(2, 3)], 7);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_row_major(entries: [T; 16]) -> Self {
        Matrix::from_fn(|row, col| entries[row * 4 + col])
    }
}

impl<T> Matrix4<T>
where
    T: Zero + One + Copy + PartialEq + ClosedAdd + ClosedMul + Div<Output = T>,
{
    /// Transforms the point `p` by this homogeneous matrix.
    ///
    /// The point is extended with `w = 1`. When the transformed `w` is neither `0` nor `1`
    /// (e.g. after a perspective projection), the result is divided by it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::{transform::translate, vector::vec3};
    /// let moved = translate(1.0, 2.0, 3.0).transform_point(vec3(1.0, 1.0, 1.0));
    /// assert_eq!(moved, vec3(2.0, 3.0, 4.0));
    /// ```
    #[must_use]
    #[inline]
    pub fn transform_point(self, p: Vector3<T>) -> Vector3<T> {
        let transformed: Vector4<T> = self * p.extend(T::ONE);
        let w = transformed.w();
        let xyz = transformed.xyz();

        if w == T::ONE || w == T::ZERO {
            xyz
        } else {
            xyz.map(|elem| elem / w)
        }
    }
}

/// Returns the transpose of `matrix`.
#[must_use]
#[inline]
pub fn transpose<T: Copy, const ROWS: usize, const COLS: usize>(
    matrix: Matrix<T, ROWS, COLS>,
) -> Matrix<T, COLS, ROWS> {
    matrix.transpose()
}

/// Linear, row-major access: element `i` lives at row `i / COLS`, column `i % COLS`.
impl<T, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = T;
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLS> {
    type Output = T;
    #[track_caller]
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLS> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

impl<T, const A: usize, const B: usize, const C: usize> Mul<Matrix<T, B, C>> for Matrix<T, A, B>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Matrix<T, A, C>;
    #[inline]
    fn mul(self, rhs: Matrix<T, B, C>) -> Self::Output {
        Matrix::from_fn(|row, col| sum(zip_map(self.row(row), rhs.col(col), Mul::mul)))
    }
}

/// Multiplies by the upper-left 3x3 block only, so translation is ignored.
impl<T> Mul<Vector3<T>> for Matrix4<T>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        let rhs = rhs.into_array();
        Vector3::from_array(array::from_fn(|row| {
            let [x, y, z, _] = self.data[row];
            sum(zip_map([x, y, z], rhs, Mul::mul))
        }))
    }
}

impl<T: Copy + Mul, const ROWS: usize, const COLS: usize> Mul<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Copy + MulAssign, const ROWS: usize, const COLS: usize> MulAssign<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|elem| *elem *= rhs);
    }
}

/// # Panics
///
/// Panics if `rhs` is zero.
impl<T, const ROWS: usize, const COLS: usize> Div<T> for Matrix<T, ROWS, COLS>
where
    T: Copy + Div + Zero + PartialEq,
{
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[track_caller]
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        assert!(rhs != T::ZERO, "attempted to divide a matrix by zero");
        self.map(|elem| elem / rhs)
    }
}

impl<T, const ROWS: usize, const COLS: usize> DivAssign<T> for Matrix<T, ROWS, COLS>
where
    T: Copy + DivAssign + Zero + PartialEq,
{
    #[track_caller]
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        assert!(rhs != T::ZERO, "attempted to divide a matrix by zero");
        self.iter_mut().for_each(|elem| *elem /= rhs);
    }
}

impl<T: Copy + Add, const ROWS: usize, const COLS: usize> Add for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: Copy + Add, const ROWS: usize, const COLS: usize> Add<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.map(|elem| elem + rhs)
    }
}

impl<T: Copy + AddAssign, const ROWS: usize, const COLS: usize> AddAssign
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(lhs, rhs)| *lhs += *rhs);
    }
}

impl<T: Copy + AddAssign, const ROWS: usize, const COLS: usize> AddAssign<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|elem| *elem += rhs);
    }
}

impl<T: Copy + Sub, const ROWS: usize, const COLS: usize> Sub for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: Copy + Sub, const ROWS: usize, const COLS: usize> Sub<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.map(|elem| elem - rhs)
    }
}

impl<T: Copy + SubAssign, const ROWS: usize, const COLS: usize> SubAssign
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(lhs, rhs)| *lhs -= *rhs);
    }
}

impl<T: Copy + SubAssign, const ROWS: usize, const COLS: usize> SubAssign<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|elem| *elem -= rhs);
    }
}

impl<T: Neg, const ROWS: usize, const COLS: usize> Neg for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn from(value: [[T; COLS]; ROWS]) -> Self {
        Self::new(value)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<Matrix<T, ROWS, COLS>> for [[T; COLS]; ROWS] {
    #[inline]
    fn from(value: Matrix<T, ROWS, COLS>) -> Self {
        value.to_array()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsMut<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> Borrow<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> BorrowMut<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }
}

impl<'a, T, const ROWS: usize, const COLS: usize> IntoIterator for &'a Matrix<T, ROWS, COLS> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const ROWS: usize, const COLS: usize> IntoIterator for &'a mut Matrix<T, ROWS, COLS> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

macro_rules! impl_matrix_conversion {
    ( row $matrix_name:ident => ($rows:literal, $cols:literal) [ $( $vecs:ident ),* $(,)? ] ) => {
        #[cfg(feature = "mint")]
        impl<T> From<mint:: $matrix_name <T>> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(value: mint:: $matrix_name<T>) -> Self {
                Matrix::new([
                    $( value. $vecs .into(), )*
                ])
            }
        }

        #[cfg(feature = "mint")]
        impl<T> From<Matrix<T, $rows, $cols>> for mint:: $matrix_name<T> {
            #[inline]
            fn from(value: Matrix<T, $rows, $cols>) -> Self {
                mint::$matrix_name::from(value.to_array())
            }
        }
    };

    ( col $matrix_name:ident => ($rows:literal, $cols:literal) [ $( $vecs:ident ),* $(,)? ] ) => {
        #[cfg(feature = "mint")]
        impl<T: Copy> From<mint:: $matrix_name <T>> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(value: mint:: $matrix_name<T>) -> Self {
                Matrix::<T, $cols, $rows>::new([$( value. $vecs .into(), )*]).transpose()
            }
        }

        #[cfg(feature = "mint")]
        impl<T: Copy> From<Matrix<T, $rows, $cols>> for mint:: $matrix_name<T> {
            #[inline]
            fn from(value: Matrix<T, $rows, $cols>) -> Self {
                mint::$matrix_name::from(value.transpose().to_array())
            }
        }
    };
}

macro_rules! impl_matrix_conversions {
    (
        $(
            $major_ty:ident $matrix_name:ident => ($rows:literal, $cols:literal) [ $( $vecs:ident ),* $(,)? ]
        )*
    ) => {
        $(
            impl_matrix_conversion!( $major_ty $matrix_name => ($rows, $cols) [ $( $vecs ),* ]);

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Matrix<T, $rows, $cols> {
                type MintType = mint:: $matrix_name<T>;
            }
        )*
    };
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize> bytemuck::Zeroable
    for Matrix<T, ROWS, COLS>
{
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> bytemuck::Pod
    for Matrix<T, ROWS, COLS>
{
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::AbsDiffEq, const ROWS: usize, const COLS: usize> approx::AbsDiffEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::RelativeEq, const ROWS: usize, const COLS: usize> approx::RelativeEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::UlpsEq, const ROWS: usize, const COLS: usize> approx::UlpsEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

impl_matrix_conversions! {
    row RowMatrix2 => (2, 2) [x, y]
    row RowMatrix3 => (3, 3) [x, y, z]
    row RowMatrix4 => (4, 4) [x, y, z, w]

    row RowMatrix2x3 => (2, 3) [x, y]
    row RowMatrix2x4 => (2, 4) [x, y]
    row RowMatrix3x2 => (3, 2) [x, y, z]
    row RowMatrix3x4 => (3, 4) [x, y, z]
    row RowMatrix4x2 => (4, 2) [x, y, z, w]
    row RowMatrix4x3 => (4, 3) [x, y, z, w]
}

// `IntoMint` already points at the row-major types.
impl_matrix_conversion! { col ColumnMatrix2 => (2, 2) [x, y] }
impl_matrix_conversion! { col ColumnMatrix3 => (3, 3) [x, y, z] }
impl_matrix_conversion! { col ColumnMatrix4 => (4, 4) [x, y, z, w] }
impl_matrix_conversion! { col ColumnMatrix2x3 => (2, 3) [x, y, z] }
impl_matrix_conversion! { col ColumnMatrix3x2 => (3, 2) [x, y] }
