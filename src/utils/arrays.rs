// SPDX-License-Identifier: MIT OR Apache-2.0

use core::array;

/// Combines two arrays of the same length element by element with `f`.
///
/// # Examples
///
/// ```
/// # use gmath::utils::zip_map;
/// let sums = zip_map([1, 2, 3], [10, 20, 30], |x, y| x + y);
/// assert_eq!(sums, [11, 22, 33]);
/// ```
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    T: Copy,
    U: Copy,
    F: FnMut(T, U) -> Res,
{
    array::from_fn(|i| f(lhs[i], rhs[i]))
}

/// Returns a copy of `array` without the element at `skipped`.
///
/// # Panics
///
/// Panics if `skipped >= N` or if `M != N - 1`.
#[track_caller]
#[must_use]
#[inline]
pub fn without<T: Copy, const N: usize, const M: usize>(array: [T; N], skipped: usize) -> [T; M] {
    assert!(skipped < N, "index {skipped} is out of bounds for an array of length {N}");
    assert!(M + 1 == N, "an array of length {N} can only shrink to length {}", N - 1);

    array::from_fn(|i| if i < skipped { array[i] } else { array[i + 1] })
}
