// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for homogeneous 4x4 transforms.
//!
//! All matrices use the column-vector convention: a point is transformed as `matrix * p`,
//! translation lives in the last column, and `a * b` applies `b` first.

use crate::{
    matrix::Matrix4,
    quaternion::Quaternion,
    utils::num::{Float, One, Scalar, Signed, Trig, Zero},
    vector::Vector3,
};

/// Builds a rotation from Euler angles in radians: `a` about the X axis, `b` about the Y
/// axis and `c` about the Z axis, composed as `Ry(b) * Rx(a) * Rz(c)`.
///
/// # Examples
///
/// ```
/// # use gmath::{transform::rotate, vector::vec3};
/// # use core::f64::consts::FRAC_PI_2;
/// # #[cfg(any(feature = "std", feature = "libm"))] {
/// let rotated = rotate(0.0, 0.0, FRAC_PI_2) * vec3(1.0, 0.0, 0.0);
/// assert!((rotated - vec3(0.0, 1.0, 0.0)).iter().all(|elem| elem.abs() < 1e-12));
/// # }
/// ```
#[must_use]
#[rustfmt::skip]
pub fn rotate<T: Signed + Trig>(a: T, b: T, c: T) -> Matrix4<T> {
    let (sin_a, cos_a) = a.sin_cos();
    let (sin_b, cos_b) = b.sin_cos();
    let (sin_c, cos_c) = c.sin_cos();
    let (o, l) = (T::ZERO, T::ONE);

    Matrix4::from_row_major([
        cos_c * cos_b + sin_c * sin_a * sin_b, -sin_c * cos_b + cos_c * sin_a * sin_b, cos_a * sin_b, o,
        sin_c * cos_a,                         cos_c * cos_a,                          -sin_a,        o,
        -cos_c * sin_b + sin_c * sin_a * cos_b, sin_c * sin_b + cos_c * sin_a * cos_b, cos_a * cos_b, o,
        o,                                     o,                                      o,             l,
    ])
}

/// Builds a scale along each axis.
#[must_use]
#[inline]
pub fn scale<T: Copy + Zero + One>(x: T, y: T, z: T) -> Matrix4<T> {
    let mut matrix = Matrix4::identity();
    matrix[(0, 0)] = x;
    matrix[(1, 1)] = y;
    matrix[(2, 2)] = z;
    matrix
}

/// Builds a translation by `(x, y, z)`.
///
/// # Examples
///
/// ```
/// # use gmath::{transform::translate, vector::vec4};
/// let moved = translate(1, 2, 3) * vec4(1, 1, 1, 1);
/// assert_eq!(moved, vec4(2, 3, 4, 1));
/// ```
#[must_use]
#[inline]
pub fn translate<T: Copy + Zero + One>(x: T, y: T, z: T) -> Matrix4<T> {
    let mut matrix = Matrix4::identity();
    matrix.set_col(3, [x, y, z, T::ONE]);
    matrix
}

/// Builds an orthographic projection mapping the box `[left, right] x [bottom, top] x
/// [-near, -far]` onto the `[-1, 1]` cube, looking down the negative Z axis.
#[must_use]
#[rustfmt::skip]
pub fn ortho<T: Signed>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix4<T> {
    let two = T::ONE + T::ONE;
    let (width, height, depth) = (right - left, top - bottom, far - near);
    let (o, l) = (T::ZERO, T::ONE);

    Matrix4::from_row_major([
        two / width, o,            o,            -(right + left) / width,
        o,           two / height, o,            -(top + bottom) / height,
        o,           o,            -two / depth, -(far + near) / depth,
        o,           o,            o,            l,
    ])
}

/// Builds a perspective projection of the frustum with the given near plane rectangle and
/// depth range. After the divide by `w`, the visible volume maps onto the `[-1, 1]` cube.
#[must_use]
#[rustfmt::skip]
pub fn perspective<T: Signed>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix4<T> {
    let two = T::ONE + T::ONE;
    let (width, height, depth) = (right - left, top - bottom, far - near);
    let o = T::ZERO;

    Matrix4::from_row_major([
        two * near / width, o,                   (right + left) / width,  o,
        o,                  two * near / height, (top + bottom) / height, o,
        o,                  o,                   -(far + near) / depth,   -two * far * near / depth,
        o,                  o,                   -T::ONE,                 o,
    ])
}

/// Builds a symmetric perspective projection from a vertical field of view in radians and
/// the width to height ratio of the viewport.
#[must_use]
pub fn perspective_fov<T: Float>(fov_y: T, aspect: T, near: T, far: T) -> Matrix4<T> {
    let top = near * (fov_y / (T::ONE + T::ONE)).tan();
    let right = top * aspect;
    perspective(-right, right, -top, top, near, far)
}

/// Builds the view matrix of a camera at `eye` looking at `target`.
///
/// The camera looks down its negative Z axis, with `up` giving the rough direction of its
/// positive Y axis.
///
/// # Examples
///
/// ```
/// # use gmath::{transform::look_at, vector::vec3};
/// # #[cfg(any(feature = "std", feature = "libm"))] {
/// let view = look_at(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
/// assert_eq!(view.transform_point(vec3(0.0, 0.0, 0.0)), vec3(0.0, 0.0, -5.0));
/// # }
/// ```
#[must_use]
pub fn look_at<T: Float>(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Matrix4<T> {
    let forward = (eye - target).normalized();
    let side = up.cross(forward).normalized();
    let up = forward.cross(side);

    let mut view = Matrix4::identity();
    for (row, axis) in [side, up, forward].into_iter().enumerate() {
        let [x, y, z] = axis.into_array();
        view.set_row(row, [x, y, z, -axis.dot(eye)]);
    }

    view
}

/// Builds the view matrix of a camera at `eye`, oriented by [`rotate(a, b, c)`](rotate).
///
/// This is the inverse of `translate(eye) * rotate(a, b, c)`.
#[must_use]
pub fn look_at_euler<T: Float>(eye: Vector3<T>, a: T, b: T, c: T) -> Matrix4<T> {
    let mut view = rotate(a, b, c).transpose();
    let [x, y, z] = (view * eye).into_array();
    view.set_col(3, [-x, -y, -z, T::ONE]);
    view
}

/// Builds the transform from normalized device coordinates to window coordinates, for the
/// viewport at (`x`, `y`) of size `w` by `h`, with depth mapped onto `[near, far]`.
///
/// # Examples
///
/// ```
/// # use gmath::{transform::viewport, vector::vec3};
/// let window = viewport(0.0, 0.0, 800.0, 600.0, 0.0, 1.0);
/// assert_eq!(window.transform_point(vec3(-1.0, -1.0, -1.0)), vec3(0.0, 0.0, 0.0));
/// assert_eq!(window.transform_point(vec3(1.0, 1.0, 1.0)), vec3(800.0, 600.0, 1.0));
/// ```
#[must_use]
#[rustfmt::skip]
pub fn viewport<T: Scalar>(x: T, y: T, w: T, h: T, near: T, far: T) -> Matrix4<T> {
    let two = T::ONE + T::ONE;
    let (half_w, half_h) = (w / two, h / two);
    let (o, l) = (T::ZERO, T::ONE);

    Matrix4::from_row_major([
        half_w, o,      o,                  x + half_w,
        o,      half_h, o,                  y + half_h,
        o,      o,      (far - near) / two, (far + near) / two,
        o,      o,      o,                  l,
    ])
}

/// Builds the quaternion rotating by `radians` about the unit vector `axis`.
#[must_use]
#[inline]
pub fn rotate_axis<T: Scalar + Trig>(radians: T, axis: Vector3<T>) -> Quaternion<T> {
    Quaternion::from_angle_axis(radians, axis)
}
