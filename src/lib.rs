#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of integer point sets using the [Graham scan][wiki].
//!
//! ```rust
//! # use graham_hull::algorithms::convex_hull;
//! # use graham_hull::data::Point;
//! let pts = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ];
//! let hull = convex_hull(pts).unwrap();
//! assert_eq!(
//!   hull.points(),
//!   &[
//!     Point::new([0, 0]),
//!     Point::new([4, 0]),
//!     Point::new([4, 4]),
//!     Point::new([0, 4]),
//!   ]
//! );
//! ```
//!
//! [wiki]: https://en.wikipedia.org/wiki/Graham_scan
use num_traits::{AsPrimitive, PrimInt};
use std::cmp::Ordering;
use std::ops::BitXor;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::{is_ccw, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three points were supplied.
  InvalidInput,
  /// All points lie on a single line so no polygon encloses them.
  CoLinearInput,
  /// Three consecutive hull vertices are either colinear or oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidInput => write!(f, "At least three points are required"),
      Error::CoLinearInput => write!(f, "All points are colinear"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

/// Integer coordinate types accepted by the hull algorithms.
///
/// Every predicate is evaluated in a type twice as wide as the coordinate so
/// that no input can overflow.
pub trait HullScalar: std::fmt::Debug + Copy + Ord {
  /// Signed type wide enough to hold the difference of any two coordinates.
  type Wide: PrimInt + AsPrimitive<f64>;

  fn widen(self) -> Self::Wide;
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $long:ty, $ulong: ty ) => {
    impl HullScalar for $ty {
      type Wide = $long;

      fn widen(self) -> $long {
        <$long>::from(self)
      }

      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let pq_x = diff(p[0], q[0]);
        let pq_y = diff(p[1], q[1]);
        let (pq_dist_squared, pq_overflow) = (pq_x * pq_x).overflowing_add(pq_y * pq_y);
        let pr_x = diff(p[0], r[0]);
        let pr_y = diff(p[1], r[1]);
        let (pr_dist_squared, pr_overflow) = (pr_x * pr_x).overflowing_add(pr_y * pr_y);
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pq_dist_squared.cmp(&pr_dist_squared),
        }
      }

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Return the absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN,i8:MAX) => (255_u16, true)
        // diff(a,b) = (c, sign) where a = if sign { b-c } else { b+c }
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

fixed_precision!(i8, u8, i16, u16);
fixed_precision!(i16, u16, i32, u32);
fixed_precision!(i32, u32, i64, u64);
fixed_precision!(i64, u64, i128, u128);

// `i128: From<isize>` doesn't exist, so isize gets its own impl.
impl HullScalar for isize {
  type Wide = i128;

  fn widen(self) -> i128 {
    self as i128
  }

  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    <i64 as HullScalar>::cmp_dist(&narrow(p), &narrow(q), &narrow(r))
  }

  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    <i64 as HullScalar>::cmp_slope(&narrow(p), &narrow(q), &narrow(r))
  }
}

fn narrow(pt: &[isize; 2]) -> [i64; 2] {
  [pt[0] as i64, pt[1] as i64]
}

#[cfg(test)]
pub mod testing;
