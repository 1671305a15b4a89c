//! Narrow contract over the Ed25519 group.
//!
//! The derivation and signing procedures only ever talk to the curve
//! through `CurveOps`, so the backend can be swapped (or tested) without
//! touching the key logic.
//!
//! Scalars cross the contract as 32 bytes little-endian integers. They do
//! not need to be reduced: a clamped `kL` is up to 2^255 and every backend
//! must treat it as the integer it represents, modulo the group order.

use crate::arithmetic::add_28_mul8;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;

pub const SCALAR_SIZE: usize = 32;
pub const POINT_SIZE: usize = 32;

pub trait CurveOps {
    type Point;

    /// `scalar * B`
    fn scalar_base_multiply(scalar: &[u8; SCALAR_SIZE]) -> Self::Point;

    /// `a * point + b * B`
    fn double_scalar_multiply(
        a: &[u8; SCALAR_SIZE],
        point: &Self::Point,
        b: &[u8; SCALAR_SIZE],
    ) -> Self::Point;

    fn point_add(p: &Self::Point, q: &Self::Point) -> Self::Point;

    /// decode a compressed point, `None` if the bytes are not on the curve
    fn point_decode(bytes: &[u8; POINT_SIZE]) -> Option<Self::Point>;

    fn point_encode(point: &Self::Point) -> [u8; POINT_SIZE];

    /// reduce a 512 bits little-endian integer modulo the group order
    fn reduce_mod_order(wide: &[u8; 64]) -> [u8; SCALAR_SIZE];

    /// `(a * b + c) mod l`
    fn scalar_multiply_add(
        a: &[u8; SCALAR_SIZE],
        b: &[u8; SCALAR_SIZE],
        c: &[u8; SCALAR_SIZE],
    ) -> [u8; SCALAR_SIZE];

    /// whether the bytes encode an integer strictly below the group order
    fn scalar_is_canonical(scalar: &[u8; SCALAR_SIZE]) -> bool;
}

/// The point `8 * trunc28(zl) * B`
pub fn point_of_trunc28_mul8<C: CurveOps>(zl: &[u8; SCALAR_SIZE]) -> C::Point {
    let scalar = add_28_mul8(&[0u8; SCALAR_SIZE], zl);
    C::scalar_base_multiply(&scalar)
}

/// Default backend, on top of curve25519-dalek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ed25519 {}

fn scalar(bytes: &[u8; SCALAR_SIZE]) -> Scalar {
    Scalar::from_bytes_mod_order(*bytes)
}

impl CurveOps for Ed25519 {
    type Point = EdwardsPoint;

    fn scalar_base_multiply(s: &[u8; SCALAR_SIZE]) -> EdwardsPoint {
        EdwardsPoint::mul_base(&scalar(s))
    }

    fn double_scalar_multiply(
        a: &[u8; SCALAR_SIZE],
        point: &EdwardsPoint,
        b: &[u8; SCALAR_SIZE],
    ) -> EdwardsPoint {
        EdwardsPoint::vartime_double_scalar_mul_basepoint(&scalar(a), point, &scalar(b))
    }

    fn point_add(p: &EdwardsPoint, q: &EdwardsPoint) -> EdwardsPoint {
        p + q
    }

    fn point_decode(bytes: &[u8; POINT_SIZE]) -> Option<EdwardsPoint> {
        CompressedEdwardsY(*bytes).decompress()
    }

    fn point_encode(point: &EdwardsPoint) -> [u8; POINT_SIZE] {
        point.compress().to_bytes()
    }

    fn reduce_mod_order(wide: &[u8; 64]) -> [u8; SCALAR_SIZE] {
        Scalar::from_bytes_mod_order_wide(wide).to_bytes()
    }

    fn scalar_multiply_add(
        a: &[u8; SCALAR_SIZE],
        b: &[u8; SCALAR_SIZE],
        c: &[u8; SCALAR_SIZE],
    ) -> [u8; SCALAR_SIZE] {
        (scalar(a) * scalar(b) + scalar(c)).to_bytes()
    }

    fn scalar_is_canonical(s: &[u8; SCALAR_SIZE]) -> bool {
        bool::from(Scalar::from_canonical_bytes(*s).is_some())
    }
}
