// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column vectors.
//!
//! A vector is a [`Matrix`] with a single column, so every matrix operation applies to it
//! directly, and `matrix * vector` is the ordinary matrix product. The named components
//! (`x`, `r`, `u`, ...) are accessors over the same storage, indexed linearly.

use crate::{
    matrix::Matrix,
    utils::{
        num::{ClosedAdd, ClosedMul, ClosedSub, Scalar, Sqrt, Zero},
        sum, zip_map,
    },
};
use core::ops::Mul;

/// A column vector with `N` components.
pub type Vector<T = f32, const N: usize = 3> = Matrix<T, N, 1>;

pub type Vector2<T = f32> = Vector<T, 2>;
pub type Vector3<T = f32> = Vector<T, 3>;
pub type Vector4<T = f32> = Vector<T, 4>;

/// Creates a 2D vector.
#[must_use]
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector2<T> {
    Matrix::new([[x], [y]])
}

/// Creates a 3D vector.
///
/// # Examples
///
/// ```
/// # use gmath::vector::vec3;
/// let v = vec3(1, 2, 3);
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v[2], 3);
/// ```
#[must_use]
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector3<T> {
    Matrix::new([[x], [y], [z]])
}

/// Creates a 4D vector.
#[must_use]
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Matrix::new([[x], [y], [z], [w]])
}

impl<T, const N: usize> Matrix<T, N, 1> {
    /// Creates a vector from its components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::vector::{Vector, vec4};
    /// assert_eq!(Vector::from_array([1, 2, 3, 4]), vec4(1, 2, 3, 4));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_array(components: [T; N]) -> Self {
        Matrix::new(components.map(|elem| [elem]))
    }

    /// Returns the components of the vector as a flat array.
    #[must_use]
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.to_array().map(|[elem]| elem)
    }
}

impl<T, const N: usize> Matrix<T, N, 1>
where
    T: Copy + Zero + ClosedAdd + ClosedMul,
{
    /// Returns the sum of the component-wise products of `self` and `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::vector::vec3;
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(7, 8, 9)), 50);
    /// ```
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        sum(zip_map(self.into_array(), rhs.into_array(), Mul::mul))
    }

    #[must_use]
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }
}

impl<T, const N: usize> Matrix<T, N, 1>
where
    T: Scalar + Sqrt,
{
    /// Returns the euclidean length of the vector.
    #[doc(alias = "length")]
    #[must_use]
    #[inline]
    pub fn magnitude(self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Returns the vector scaled to a length of `1`.
    ///
    /// The zero vector has no direction, and is returned unchanged.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO { self } else { self / magnitude }
    }
}

impl<T: Copy + ClosedMul + ClosedSub> Vector3<T> {
    /// Computes the cross product `self x rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::vector::vec3;
    /// let z = vec3(1, 0, 0).cross(vec3(0, 1, 0));
    /// assert_eq!(z, vec3(0, 0, 1));
    /// ```
    #[must_use]
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [x0, y0, z0] = self.into_array();
        let [x1, y1, z1] = rhs.into_array();

        vec3(
            (y0 * z1) - (z0 * y1),
            (z0 * x1) - (x0 * z1),
            (x0 * y1) - (y0 * x1),
        )
    }
}

macro_rules! impl_component_accessors {
    ( $( $n:literal => [ $( $name:ident, $name_mut:ident => $idx:literal ),* $(,)? ] )* ) => {
        $(
            impl<T: Copy> Matrix<T, $n, 1> {
                $(
                    #[must_use]
                    #[inline]
                    pub fn $name(&self) -> T {
                        self[$idx]
                    }

                    #[must_use]
                    #[inline]
                    pub fn $name_mut(&mut self) -> &mut T {
                        &mut self[$idx]
                    }
                )*
            }
        )*
    };
}

impl_component_accessors! {
    2 => [
        x, x_mut => 0, y, y_mut => 1,
        u, u_mut => 0, v, v_mut => 1,
        s, s_mut => 0, t, t_mut => 1,
    ]
    3 => [
        x, x_mut => 0, y, y_mut => 1, z, z_mut => 2,
        u, u_mut => 0, v, v_mut => 1,
        r, r_mut => 0, g, g_mut => 1, b, b_mut => 2,
    ]
    4 => [
        x, x_mut => 0, y, y_mut => 1, z, z_mut => 2, w, w_mut => 3,
        r, r_mut => 0, g, g_mut => 1, b, b_mut => 2, a, a_mut => 3,
    ]
}

impl<T: Copy> Vector2<T> {
    /// Appends `z`, returning a 3D vector.
    #[must_use]
    #[inline]
    pub fn extend(self, z: T) -> Vector3<T> {
        let [x, y] = self.into_array();
        vec3(x, y, z)
    }
}

impl<T: Copy> Vector3<T> {
    /// Appends `w`, returning a 4D vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::vector::{vec3, vec4};
    /// assert_eq!(vec3(1, 2, 3).extend(1), vec4(1, 2, 3, 1));
    /// ```
    #[must_use]
    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        let [x, y, z] = self.into_array();
        vec4(x, y, z, w)
    }

    /// Drops the last component.
    #[must_use]
    #[inline]
    pub fn truncate(self) -> Vector2<T> {
        self.xy()
    }

    #[must_use]
    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        vec2(self.x(), self.y())
    }

    #[must_use]
    #[inline]
    pub fn uv(&self) -> Vector2<T> {
        vec2(self.u(), self.v())
    }
}

impl<T: Copy> Vector4<T> {
    /// Drops the last component.
    #[must_use]
    #[inline]
    pub fn truncate(self) -> Vector3<T> {
        self.xyz()
    }

    #[must_use]
    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        vec2(self.x(), self.y())
    }

    #[must_use]
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        vec3(self.x(), self.y(), self.z())
    }

    #[must_use]
    #[inline]
    pub fn rgb(&self) -> Vector3<T> {
        vec3(self.r(), self.g(), self.b())
    }
}

/// Returns the dot product of `lhs` and `rhs`.
#[must_use]
#[inline]
pub fn dot<T, const N: usize>(lhs: Vector<T, N>, rhs: Vector<T, N>) -> T
where
    T: Copy + Zero + ClosedAdd + ClosedMul,
{
    lhs.dot(rhs)
}

/// Returns the length of `vector`.
#[must_use]
#[inline]
pub fn mag<T: Scalar + Sqrt, const N: usize>(vector: Vector<T, N>) -> T {
    vector.magnitude()
}

/// Returns `vector` scaled to unit length, or the zero vector unchanged.
///
/// # Examples
///
/// ```
/// # use gmath::vector::{normalize, vec3, Vector3};
/// # #[cfg(any(feature = "std", feature = "libm"))] {
/// assert_eq!(normalize(vec3(0.0, 3.0, 4.0)), vec3(0.0, 0.6, 0.8));
/// assert_eq!(normalize(Vector3::<f32>::zero()), Vector3::zero());
/// # }
/// ```
#[must_use]
#[inline]
pub fn normalize<T: Scalar + Sqrt, const N: usize>(vector: Vector<T, N>) -> Vector<T, N> {
    vector.normalized()
}

/// Returns the cross product `lhs x rhs`.
#[must_use]
#[inline]
pub fn cross<T: Copy + ClosedMul + ClosedSub>(lhs: Vector3<T>, rhs: Vector3<T>) -> Vector3<T> {
    lhs.cross(rhs)
}

/// Returns the unit normal of the plane spanned by `lhs` and `rhs`.
#[must_use]
#[inline]
pub fn normal<T: Scalar + Sqrt>(lhs: Vector3<T>, rhs: Vector3<T>) -> Vector3<T> {
    lhs.cross(rhs).normalized()
}

/// Returns twice the signed area of the triangle (`v2`, `v0`, `v1`).
///
/// The result is positive when `v2` lies to the left of the directed edge from `v0` to
/// `v1`, negative when it lies to the right, and zero when the three points are collinear.
///
/// # Examples
///
/// ```
/// # use gmath::vector::{edge, vec2};
/// let (v0, v1) = (vec2(0, 0), vec2(4, 0));
/// assert_eq!(edge(v0, v1, vec2(1, 2)), 8);
/// assert_eq!(edge(v0, v1, vec2(1, -2)), -8);
/// assert_eq!(edge(v0, v1, vec2(9, 0)), 0);
/// ```
#[must_use]
#[inline]
pub fn edge<T: Scalar>(v0: Vector2<T>, v1: Vector2<T>, v2: Vector2<T>) -> T {
    v2.x() * (v0.y() - v1.y()) + v2.y() * (v1.x() - v0.x()) + v0.x() * v1.y() - v0.y() * v1.x()
}

/// Intersects the line through `q` with direction `v` and the plane through `p` with
/// normal `n`.
///
/// # Panics
///
/// Panics if the line is parallel to the plane, i.e. `dot(v, n)` is zero.
#[track_caller]
#[must_use]
#[inline]
pub fn line_plane_intersection<T: Scalar>(
    p: Vector4<T>,
    n: Vector4<T>,
    q: Vector4<T>,
    v: Vector4<T>,
) -> Vector4<T> {
    q + v * (p - q).dot(n) / v.dot(n)
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector2<T>> for Vector2<T> {
    #[inline]
    fn from(mint::Vector2 { x, y }: mint::Vector2<T>) -> Self {
        vec2(x, y)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vector2<T>> for mint::Vector2<T> {
    #[inline]
    fn from(value: Vector2<T>) -> Self {
        From::from(value.into_array())
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Vector2<T> {
    type MintType = mint::Vector2<T>;
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector3<T>> for Vector3<T> {
    #[inline]
    fn from(mint::Vector3 { x, y, z }: mint::Vector3<T>) -> Self {
        vec3(x, y, z)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vector3<T>> for mint::Vector3<T> {
    #[inline]
    fn from(value: Vector3<T>) -> Self {
        From::from(value.into_array())
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Vector3<T> {
    type MintType = mint::Vector3<T>;
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector4<T>> for Vector4<T> {
    #[inline]
    fn from(mint::Vector4 { x, y, z, w }: mint::Vector4<T>) -> Self {
        vec4(x, y, z, w)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vector4<T>> for mint::Vector4<T> {
    #[inline]
    fn from(value: Vector4<T>) -> Self {
        From::from(value.into_array())
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Vector4<T> {
    type MintType = mint::Vector4<T>;
}
