use super::anchor::select_anchor;
use super::angular_sort::sort_around;
use crate::data::{Hull, Point, PointSet};
use crate::{is_ccw, Error, HullScalar};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    All Ok results are valid convex polygons.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// # Errors
/// * [`Error::InvalidInput`] if the input has fewer than three points.
/// * [`Error::CoLinearInput`] if all the points lie on a single line.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
/// * The first vertex is the lowest point (leftmost on ties) and the rest
///   follow counter-clockwise.
/// * Points on the boundary that are not corners are left out.
///
/// Candidates are ordered by a floating point `atan` key which stops telling
/// directions apart once coordinate differences pass roughly 2^25. Such ties
/// are settled with exact integer orientation tests, so the properties above
/// hold across the whole range of `T`.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// # use graham_hull::Error;
/// let pair = vec![Point::new([0, 0]), Point::new([1, 0])];
/// assert_eq!(convex_hull(pair).err(), Some(Error::InvalidInput));
///
/// let line = vec![Point::new([0, 0]), Point::new([1, 1]), Point::new([2, 2])];
/// assert_eq!(convex_hull(line).err(), Some(Error::CoLinearInput));
/// ```
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// let triangle = vec![Point::new([4, 4]), Point::new([0, 0]), Point::new([4, 0])];
/// let hull = convex_hull(triangle).unwrap();
/// assert_eq!(
///   hull.points(),
///   &[Point::new([0, 0]), Point::new([4, 0]), Point::new([4, 4])]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  graham_scan(&PointSet::new(pts)?)
}

/// $O(n \log n)$ Convex hull of a validated point set.
///
/// See [`convex_hull`].
pub fn graham_scan<T>(set: &PointSet<T>) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  let pts = set.points();
  let anchor_idx = select_anchor(pts)?;
  if Point::all_colinear(pts) {
    return Err(Error::CoLinearInput);
  }
  let anchor = pts[anchor_idx];
  let rest = pts
    .iter()
    .enumerate()
    .filter(|(idx, _)| *idx != anchor_idx)
    .map(|(_, pt)| *pt);
  let candidates = sort_around(&anchor, rest);
  log::debug!(
    "graham scan: anchor {:?}, {} candidates",
    anchor.array,
    candidates.len()
  );
  let hull = scan(anchor, candidates);
  log::debug!("graham scan: {} of {} points on the hull", hull.len(), pts.len());
  Ok(Hull::new_unchecked(hull))
}

/// $O(n)$ Monotonic stack sweep.
///
/// `candidates` must come from [`sort_around`](super::angular_sort::sort_around)
/// and are read from the back. Before a candidate is pushed, vertices are popped
/// until the top two and the candidate make a strict left turn. The anchor is
/// never popped. The last candidate is always pushed.
pub fn scan<T>(anchor: Point<T>, candidates: Vec<Point<T>>) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let mut stack = Vec::with_capacity(candidates.len() + 1);
  stack.push(anchor);
  for candidate in candidates.into_iter().rev() {
    while stack.len() >= 2 && !is_ccw(&stack[stack.len() - 2], &stack[stack.len() - 1], &candidate)
    {
      let rejected = stack.pop();
      log::trace!("graham scan: rejected {:?} before {:?}", rejected, candidate);
    }
    stack.push(candidate);
  }
  stack
}
