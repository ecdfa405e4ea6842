use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

/// Planar point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T: HullScalar> Point<T> {
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Compare the distance from `self` to `p` with the distance from `self` to `q`.
  ///
  /// Never overflows.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  /// Check whether every point in the set lies on a single line.
  ///
  /// Empty sets, single points and sets of duplicates are colinear.
  pub fn all_colinear(pts: &[Point<T>]) -> bool {
    let origin = match pts.first() {
      Some(origin) => origin,
      None => return true,
    };
    match pts.iter().find(|pt| *pt != origin) {
      None => true,
      Some(direction) => pts
        .iter()
        .all(|pt| origin.orientation(direction, pt).is_colinear()),
    }
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}
