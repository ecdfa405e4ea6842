use claims::debug_assert_ok;
use std::ops::Index;

use super::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// Strictly convex polygon produced by a hull computation.
///
/// Vertices are stored counter-clockwise starting at the anchor (the lowest
/// point, leftmost on ties). No vertex is repeated and no three consecutive
/// vertices are colinear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull<T> {
  points: Vec<Point<T>>,
}

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// $O(1)$ Assume that the points form a strictly convex polygon.
  ///
  /// Validity is only checked in debug builds.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull { points };
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n)$ Check that the vertices form a strictly convex, simple polygon.
  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InvalidInput);
    }
    let n = self.points.len();
    for i in 0..n {
      let prev = &self.points[i];
      let curr = &self.points[(i + 1) % n];
      let next = &self.points[(i + 2) % n];
      if prev.orientation(curr, next) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    // Local left turns also hold for stars that wind around more than once.
    // The fan from the first vertex must turn left at every step.
    let origin = &self.points[0];
    for pair in self.points[1..].windows(2) {
      if origin.orientation(&pair[0], &pair[1]) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$ Classify a point against the hull boundary.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let mut on_edge = false;
    for (start, end) in self.edges() {
      match start.orientation(end, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_edge = true,
        Orientation::CounterClockWise => {}
      }
    }
    if on_edge {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}

impl<T> Hull<T> {
  /// The first vertex: lowest y-coordinate, lowest x-coordinate on ties.
  pub fn anchor(&self) -> &Point<T> {
    &self.points[0]
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  // A hull always has at least three vertices.
  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  /// Boundary edges in counter-clockwise order, closing back at the anchor.
  pub fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    self
      .points
      .iter()
      .zip(self.points.iter().cycle().skip(1))
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.points
  }
}

impl<T> Index<usize> for Hull<T> {
  type Output = Point<T>;
  fn index(&self, key: usize) -> &Point<T> {
    self.points.index(key)
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.points
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
