// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar helpers: angle conversion, interpolation and clamping.

use crate::utils::num::{Signed, Trig};

pub use crate::utils::num::lerp;

/// Converts `degrees` to radians.
///
/// # Examples
///
/// ```
/// # use gmath::util::rad;
/// # #[cfg(any(feature = "std", feature = "libm"))] {
/// let radians = rad(180.0f64);
/// assert!((radians - core::f64::consts::PI).abs() < 1e-12);
/// # }
/// ```
#[must_use]
#[inline]
pub fn rad<T: Trig>(degrees: T) -> T {
    degrees.to_radians()
}

/// Converts `radians` to degrees.
#[must_use]
#[inline]
pub fn deg<T: Trig>(radians: T) -> T {
    radians.to_degrees()
}

/// Restricts `val` to the range `[lo, hi]`.
///
/// # Panics
///
/// Panics if `lo > hi`, or if either bound is NaN.
///
/// # Examples
///
/// ```
/// # use gmath::util::clamp;
/// assert_eq!(clamp(5, 0, 3), 3);
/// assert_eq!(clamp(-1.5, -1.0, 1.0), -1.0);
/// assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
/// ```
#[track_caller]
#[must_use]
#[inline]
pub fn clamp<T: PartialOrd>(val: T, lo: T, hi: T) -> T {
    assert!(lo <= hi, "clamp requires lo <= hi");

    if val < lo {
        lo
    } else if val > hi {
        hi
    } else {
        val
    }
}

/// Restricts `val` to the range `[-hi, hi]`.
///
/// # Panics
///
/// Panics if `hi` is negative.
#[track_caller]
#[must_use]
#[inline]
pub fn clamp_symmetric<T: Signed>(val: T, hi: T) -> T {
    assert!(!hi.is_negative(), "clamp_symmetric requires hi >= 0");
    clamp(val, -hi, hi)
}
