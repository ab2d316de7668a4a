// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Matrix, Matrix4},
    utils::num::{One, Scalar, Sqrt, Trig, Zero},
    vector::Vector3,
};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A quaternion with scalar part `w` and vector part `v = (x, y, z)`.
///
/// Components are stored and indexed in `(w, x, y, z)` order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Quaternion<T = f32> {
    pub w: T,
    pub v: Vector3<T>,
}

impl<T> Quaternion<T> {
    /// Creates a quaternion from its four components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::quaternion::Quaternion;
    /// let q = Quaternion::new(1, 2, 3, 4);
    /// assert_eq!((q[0], q[1], q[2], q[3]), (1, 2, 3, 4));
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            w,
            v: Matrix::new([[x], [y], [z]]),
        }
    }

    #[must_use]
    #[inline]
    pub const fn from_scalar_vector(w: T, v: Vector3<T>) -> Self {
        Self { w, v }
    }
}

impl<T: Zero + One> Quaternion<T> {
    /// The quaternion `(1, 0, 0, 0)`, which represents no rotation.
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self {
            w: One::ONE,
            v: Zero::ZERO,
        }
    }
}

impl<T: Zero + One> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.w * rhs.w + self.v.dot(rhs.v)
    }
}

impl<T: Copy + Neg<Output = T>> Quaternion<T> {
    /// Returns the quaternion with its vector part negated.
    ///
    /// For a unit quaternion this is also its inverse.
    #[must_use]
    #[inline]
    pub fn conjugated(self) -> Self {
        Self {
            w: self.w,
            v: -self.v,
        }
    }

    #[inline]
    pub fn conjugate(&mut self) {
        *self = self.conjugated();
    }
}

impl<T: Scalar + Sqrt> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn magnitude(self) -> T {
        self.dot(self).sqrt()
    }

    /// Returns the quaternion scaled to unit length. The zero quaternion is returned
    /// unchanged.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO { self } else { self / magnitude }
    }
}

impl<T: Scalar + Trig> Quaternion<T> {
    /// Creates the rotation of `radians` about `axis`, which should have unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::{quaternion::Quaternion, vector::vec3};
    /// # #[cfg(any(feature = "std", feature = "libm"))] {
    /// let q = Quaternion::from_angle_axis(0.0, vec3(0.0, 1.0, 0.0));
    /// assert_eq!(q, Quaternion::identity());
    /// # }
    /// ```
    #[must_use]
    #[inline]
    pub fn from_angle_axis(radians: T, axis: Vector3<T>) -> Self {
        let half_angle = radians / (T::ONE + T::ONE);
        let (sin_a, cos_a) = half_angle.sin_cos();

        Self::from_scalar_vector(cos_a, axis * sin_a)
    }
}

impl<T: Scalar + Neg<Output = T>> Quaternion<T> {
    /// Rotates `v` by this quaternion, computing the vector part of `q * v * conj(q)`.
    ///
    /// The quaternion should have unit length.
    #[must_use]
    #[inline]
    pub fn rotate_vector(self, v: Vector3<T>) -> Vector3<T> {
        (self * v * self.conjugated()).v
    }
}

/// The Hamilton product.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w * rhs.w - self.v.dot(rhs.v),
            v: self.v.cross(rhs.v) + rhs.v * self.w + self.v * rhs.w,
        }
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// The product with the pure quaternion `(0, v)`.
impl<T: Scalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self * Quaternion::from_scalar_vector(T::ZERO, rhs)
    }
}

impl<T: Copy + Add> Add for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Quaternion {
            w: self.w + rhs.w,
            v: self.v + rhs.v,
        }
    }
}

impl<T: Copy + AddAssign> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.w += rhs.w;
        self.v += rhs.v;
    }
}

impl<T: Copy + Sub> Sub for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Quaternion {
            w: self.w - rhs.w,
            v: self.v - rhs.v,
        }
    }
}

impl<T: Copy + SubAssign> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.w -= rhs.w;
        self.v -= rhs.v;
    }
}

impl<T: Copy + Add> Add<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        Quaternion {
            w: self.w + rhs,
            v: self.v + rhs,
        }
    }
}

impl<T: Copy + AddAssign> AddAssign<T> for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.w += rhs;
        self.v += rhs;
    }
}

impl<T: Copy + Sub> Sub<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        Quaternion {
            w: self.w - rhs,
            v: self.v - rhs,
        }
    }
}

impl<T: Copy + SubAssign> SubAssign<T> for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.w -= rhs;
        self.v -= rhs;
    }
}

impl<T: Copy + Mul> Mul<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Quaternion {
            w: self.w * rhs,
            v: self.v * rhs,
        }
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.w *= rhs;
        self.v *= rhs;
    }
}

/// # Panics
///
/// Panics if `rhs` is zero.
impl<T: Copy + Div + Zero + PartialEq> Div<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;
    #[track_caller]
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        assert!(rhs != T::ZERO, "attempted to divide a quaternion by zero");
        Quaternion {
            w: self.w / rhs,
            v: self.v / rhs,
        }
    }
}

impl<T: Copy + DivAssign + Zero + PartialEq> DivAssign<T> for Quaternion<T> {
    #[track_caller]
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        assert!(rhs != T::ZERO, "attempted to divide a quaternion by zero");
        self.w /= rhs;
        self.v /= rhs;
    }
}

impl<T> Index<usize> for Quaternion<T> {
    type Output = T;
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.w,
            1..=3 => &self.v[index - 1],
            _ => panic!("index {index} is out of bounds for a quaternion"),
        }
    }
}

impl<T> IndexMut<usize> for Quaternion<T> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.w,
            1..=3 => &mut self.v[index - 1],
            _ => panic!("index {index} is out of bounds for a quaternion"),
        }
    }
}

/// Builds the homogeneous rotation matrix of a unit quaternion.
impl<T: Scalar> From<Quaternion<T>> for Matrix4<T> {
    #[rustfmt::skip]
    fn from(q: Quaternion<T>) -> Self {
        let two = T::ONE + T::ONE;
        let (w, [x, y, z]) = (q.w, q.v.into_array());
        let (o, l) = (T::ZERO, T::ONE);

        Matrix4::from_row_major([
            l - two * (y * y + z * z), two * (x * y - z * w),     two * (x * z + y * w),     o,
            two * (x * y + z * w),     l - two * (x * x + z * z), two * (y * z - x * w),     o,
            two * (x * z - y * w),     two * (y * z + x * w),     l - two * (x * x + y * y), o,
            o,                         o,                         o,                         l,
        ])
    }
}

impl<T> From<Quaternion<T>> for (T, Vector3<T>) {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        (value.w, value.v)
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn from(value: mint::Quaternion<T>) -> Self {
        Quaternion {
            w: value.s,
            v: From::from(value.v),
        }
    }
}

#[cfg(feature = "mint")]
impl<T> From<Quaternion<T>> for mint::Quaternion<T> {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        mint::Quaternion {
            v: From::from(value.v),
            s: value.w,
        }
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Quaternion<T> {
    type MintType = mint::Quaternion<T>;
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Quaternion<T>
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
        self.w.abs_diff_eq(&other.w, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::RelativeEq> approx::RelativeEq for Quaternion<T>
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
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::UlpsEq> approx::UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps) && self.v.ulps_eq(&other.v, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::Quaternion;
    use crate::vector::vec3;
    #[cfg(any(feature = "std", feature = "libm"))]
    use crate::{matrix::Matrix4, transform::rotate};
    #[cfg(any(feature = "std", feature = "libm"))]
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    #[test]
    fn test_quat_multiply() {
        let q1 = Quaternion::new(3.0, 1.0, 2.0, 4.0);
        let q2 = Quaternion::identity();

        assert_eq!(q1 * q2, q1);
        assert_eq!(q2 * q1, q1);

        let i = Quaternion::new(0, 1, 0, 0);
        let j = Quaternion::new(0, 0, 1, 0);
        let k = Quaternion::new(0, 0, 0, 1);

        assert_eq!(i * j, k);
        assert_eq!(j * i, Quaternion::new(0, 0, 0, -1));
        assert_eq!(i * i, Quaternion::new(-1, 0, 0, 0));
    }

    #[test]
    fn test_quat_vector_product() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q * vec3(5, 6, 7), Quaternion::new(-56, 2, 12, 4));
    }

    #[test]
    fn test_conjugate() {
        let mut q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q * q.conjugated(), Quaternion::new(30, 0, 0, 0));
        assert_eq!(q.dot(q), 30);

        q.conjugate();
        assert_eq!(q, Quaternion::new(1, -2, -3, -4));
    }

    #[test]
    fn test_scalar_ops() {
        let q = Quaternion::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(q + 1.0, Quaternion::new(3.0, 5.0, 7.0, 9.0));
        assert_eq!(q - 2.0, Quaternion::new(0.0, 2.0, 4.0, 6.0));
        assert_eq!(q * 0.5, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q / 2.0, q * 0.5);
        assert_eq!(q - q, Quaternion::new(0.0, 0.0, 0.0, 0.0));

        let mut sum = q;
        sum += q;
        sum /= 4.0;
        assert_eq!(sum, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn test_divide_by_zero() {
        let _ = Quaternion::new(1.0, 0.0, 0.0, 0.0) / 0.0;
    }

    #[test]
    fn test_index() {
        let mut q = Quaternion::new(1, 2, 3, 4);
        q[2] = 9;
        assert_eq!(q[0], 1);
        assert_eq!(q[2], 9);
        assert_eq!(q.v, vec3(2, 9, 4));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let q = Quaternion::new(1, 2, 3, 4);
        let _ = q[4];
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_normalized() {
        let q = Quaternion::new(0.0f64, 0.0, 3.0, 4.0);
        assert_eq!(q.normalized(), Quaternion::new(0.0, 0.0, 0.6, 0.8));
        assert_eq!(q.magnitude(), 5.0);

        let zero = Quaternion::new(0.0f64, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalized(), zero);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_rotate_vector() {
        let q = Quaternion::from_angle_axis(FRAC_PI_2, vec3(0.0, 0.0, 1.0));
        let rotated = q.rotate_vector(vec3(1.0, 0.0, 0.0));
        approx::assert_abs_diff_eq!(rotated, vec3(0.0, 1.0, 0.0), epsilon = 1e-12);

        let q = Quaternion::from_angle_axis(FRAC_PI_3, vec3(1.0, 1.0, 1.0).normalized());
        let back = q.conjugated().rotate_vector(q.rotate_vector(vec3(0.3, -2.0, 5.0)));
        approx::assert_abs_diff_eq!(back, vec3(0.3, -2.0, 5.0), epsilon = 1e-12);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_into_matrix() {
        assert_eq!(Matrix4::from(Quaternion::<f64>::identity()), Matrix4::identity());

        let q = Quaternion::from_angle_axis(FRAC_PI_3, vec3(1.0, 0.0, 0.0));
        let expected = rotate(FRAC_PI_3, 0.0, 0.0);
        approx::assert_abs_diff_eq!(Matrix4::from(q), expected, epsilon = 1e-12);

        let q = Quaternion::from_angle_axis(0.7, vec3(0.0, 0.6, 0.8));
        let v = vec3(1.0, 2.0, 3.0);
        approx::assert_abs_diff_eq!(Matrix4::from(q) * v, q.rotate_vector(v), epsilon = 1e-12);
    }

    #[cfg(feature = "mint")]
    #[test]
    fn test_mint() {
        let q = Quaternion::new(1, 2, 3, 4);
        let m: mint::Quaternion<i32> = q.into();
        assert_eq!(m.s, 1);
        assert_eq!(m.v, mint::Vector3 { x: 2, y: 3, z: 4 });
        assert_eq!(Quaternion::from(m), q);
    }
}
