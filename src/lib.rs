// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small, fixed-size linear algebra for graphics programming.
//!
//! The core type is the row-major [`Matrix<T, ROWS, COLS>`](Matrix); a [`Vector`] is a
//! matrix with a single column. Square matrices of order 1 to 6 implement [`SquareMatrix`],
//! which computes determinants and inverses by cofactor expansion, with a closed form
//! fast path for 4x4 matrices. [`Quaternion`]s and the builders in [`transform`] produce
//! homogeneous 4x4 transforms in the column-vector convention (`matrix * vector`).
//!
//! ```
//! use gmath::{inverse, transform::translate, vector::vec3};
//!
//! let model = translate(1.0, 2.0, 3.0);
//! let p = model.transform_point(vec3(0.0, 0.0, 0.0));
//! assert_eq!(p, vec3(1.0, 2.0, 3.0));
//! assert_eq!(inverse(model).transform_point(p), vec3(0.0, 0.0, 0.0));
//! ```
//!
//! # Features
//!
//! * `std` (default): floating point `sqrt` and trigonometry from the standard library.
//! * `libm`: the same operations from [`libm`](https://docs.rs/libm), for `no_std` targets.
//! * `approx`: approximate comparisons of matrices, vectors and quaternions.
//! * `mint`: conversions to and from the [`mint`](https://docs.rs/mint) interop types.
//! * `bytemuck`: `Pod` and `Zeroable` implementations for uploading to GPU buffers.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod util;
pub mod utils;
pub mod vector;

pub use crate::{
    matrix::{
        Matrix, Matrix2, Matrix3, Matrix4, SquareMatrix, adj, cofactor, det, inverse, transpose,
    },
    quaternion::Quaternion,
    util::{clamp, deg, lerp, rad},
    vector::{Vector, Vector2, Vector3, Vector4, cross, dot, mag, normal, normalize},
};
