use std::convert::TryFrom;
use std::ops::Index;

use super::{Hull, Point};
use crate::{Error, HullScalar};

/// Input to a hull computation: at least three points, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet<T> {
  points: Vec<Point<T>>,
}

impl<T> PointSet<T> {
  /// $O(1)$
  ///
  /// # Errors
  /// Returns [`Error::InvalidInput`] if fewer than three points are given.
  ///
  /// ```rust
  /// # use graham_hull::data::{Point, PointSet};
  /// # use graham_hull::Error;
  /// let pair = vec![Point::new([0, 0]), Point::new([1, 1])];
  /// assert_eq!(PointSet::new(pair).err(), Some(Error::InvalidInput));
  /// ```
  pub fn new(points: Vec<Point<T>>) -> Result<PointSet<T>, Error> {
    if points.len() < 3 {
      return Err(Error::InvalidInput);
    }
    Ok(PointSet { points })
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  // Construction guarantees at least three points.
  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.points
  }
}

impl<T: HullScalar> PointSet<T> {
  /// $O(n \log n)$ See [`graham_scan`](crate::algorithms::convex_hull::graham_scan).
  pub fn convex_hull(&self) -> Result<Hull<T>, Error> {
    crate::algorithms::convex_hull::graham_scan::graham_scan(self)
  }
}

impl<T> TryFrom<Vec<Point<T>>> for PointSet<T> {
  type Error = Error;
  fn try_from(points: Vec<Point<T>>) -> Result<PointSet<T>, Error> {
    PointSet::new(points)
  }
}

impl<T> Index<usize> for PointSet<T> {
  type Output = Point<T>;
  fn index(&self, key: usize) -> &Point<T> {
    self.points.index(key)
  }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
