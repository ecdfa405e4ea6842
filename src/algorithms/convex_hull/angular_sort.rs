use num_traits::{AsPrimitive, Zero};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;

use crate::data::Point;
use crate::{HullScalar, Orientation};

/// Sort key for the angle of `pt` as seen from `anchor`: `atan(dy/dx)`.
///
/// The arctangent cannot tell `(dx,dy)` from `(-dx,-dy)`, so keys are only
/// comparable between points on the same side of the anchor's vertical.
/// Since `anchor` is the lowest point, `dy >= 0` for every candidate and:
///
/// * `dx == 0, dy > 0` gives `π/2`, the largest key on the right side.
/// * `dx == 0, dy == 0` (a copy of the anchor) gives `-π/2`, below every
///   other key on the right side.
///
/// Distinct directions can share a key once coordinate differences grow past
/// roughly 2^25. [`sort_around`] settles such ties with an exact orientation
/// test.
pub fn polar_key<T>(anchor: &Point<T>, pt: &Point<T>) -> OrderedFloat<f64>
where
  T: HullScalar,
{
  let dx = pt.x_coord().widen() - anchor.x_coord().widen();
  let dy = pt.y_coord().widen() - anchor.y_coord().widen();
  if dx.is_zero() {
    if dy.is_zero() {
      return OrderedFloat(-FRAC_PI_2);
    }
    return OrderedFloat(FRAC_PI_2);
  }
  let ratio: f64 = dy.as_() / dx.as_();
  OrderedFloat(ratio.atan())
}

/// $O(n \log n)$ Order candidates for the stack sweep.
///
/// Points with `x >= anchor.x` go to the right group, the rest to the left
/// group. Each group is sorted by descending [`polar_key`] and the result is
/// `left ++ right`. Equal keys are ordered by the exact turn around the anchor,
/// then farthest first along a shared ray. Read from the back this visits
/// every point counter-clockwise around the anchor, nearest first along each
/// ray.
pub fn sort_around<T>(anchor: &Point<T>, rest: impl IntoIterator<Item = Point<T>>) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let (right, left): (Vec<Point<T>>, Vec<Point<T>>) = rest
    .into_iter()
    .partition(|pt| pt.x_coord() >= anchor.x_coord());
  let mut sorted = sort_descending(anchor, left);
  sorted.extend(sort_descending(anchor, right));
  sorted
}

// Stable, so exact duplicates keep their input order.
fn sort_descending<T>(anchor: &Point<T>, group: Vec<Point<T>>) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let mut keyed: Vec<(OrderedFloat<f64>, Point<T>)> = group
    .into_iter()
    .map(|pt| (polar_key(anchor, &pt), pt))
    .collect();
  keyed.sort_by(|(a_key, a), (b_key, b)| {
    b_key
      .cmp(a_key)
      .then_with(|| match anchor.orientation(b, a) {
        Orientation::CounterClockWise => Ordering::Less,
        Orientation::ClockWise => Ordering::Greater,
        Orientation::CoLinear => anchor.cmp_distance_to(b, a),
      })
  });
  keyed.into_iter().map(|(_, pt)| pt).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::convex_hull::anchor::select_anchor;
  use crate::testing::*;

  use std::f64::consts::FRAC_PI_4;
  use test_strategy::proptest;

  fn pts(coords: &[[i32; 2]]) -> Vec<Point<i32>> {
    coords.iter().copied().map(Point::new).collect()
  }

  fn assert_key(key: OrderedFloat<f64>, expected: f64) {
    assert!((key.0 - expected).abs() < 1e-12, "{} != {}", key, expected);
  }

  #[test]
  fn keys() {
    let anchor = Point::new([0, 0]);
    assert_eq!(polar_key(&anchor, &Point::new([5, 0])), OrderedFloat(0.0));
    assert_key(polar_key(&anchor, &Point::new([3, 3])), FRAC_PI_4);
    assert_key(polar_key(&anchor, &Point::new([-3, 3])), -FRAC_PI_4);
    assert_eq!(polar_key(&anchor, &Point::new([0, 7])), OrderedFloat(FRAC_PI_2));
    assert_eq!(polar_key(&anchor, &anchor), OrderedFloat(-FRAC_PI_2));
  }

  #[test]
  fn keys_never_overflow() {
    let anchor = Point::new([i64::MIN, i64::MIN]);
    let key = polar_key(&anchor, &Point::new([i64::MAX, i64::MAX]));
    assert_key(key, FRAC_PI_4);
  }

  #[test]
  fn reference_example() {
    // Anchor is (0,-2).
    let anchor = Point::new([0, -2]);
    let rest = pts(&[[3, 2], [4, 0], [-2, 0], [4, -1], [-2, 4], [3, 0], [0, 0]]);
    let sorted = sort_around(&anchor, rest);
    assert_eq!(
      sorted,
      pts(&[[-2, 0], [-2, 4], [0, 0], [3, 2], [3, 0], [4, 0], [4, -1]])
    );
  }

  #[test]
  fn ties_farthest_first() {
    let anchor = Point::new([0, 0]);
    let rest = pts(&[[1, 0], [3, 0], [2, 0], [0, 1], [0, 3], [-1, 1], [-2, 2]]);
    let sorted = sort_around(&anchor, rest);
    assert_eq!(
      sorted,
      pts(&[[-2, 2], [-1, 1], [0, 3], [0, 1], [3, 0], [2, 0], [1, 0]])
    );
  }

  #[test]
  fn equal_keys_use_exact_turn() {
    let n = 1_i64 << 60;
    let anchor = Point::new([0, 0]);
    let steep = Point::new([n, n + 1]);
    let shallow = Point::new([n + 1, n + 2]);
    assert_eq!(polar_key(&anchor, &steep), polar_key(&anchor, &shallow));
    assert!(anchor.orientation(&shallow, &steep).is_ccw());
    assert_eq!(sort_around(&anchor, vec![shallow, steep]), vec![steep, shallow]);
    assert_eq!(sort_around(&anchor, vec![steep, shallow]), vec![steep, shallow]);
  }

  #[test]
  fn anchor_copies_sort_last() {
    let anchor = Point::new([0, 0]);
    let rest = pts(&[[0, 0], [2, 1], [0, 0], [-1, 1]]);
    let sorted = sort_around(&anchor, rest);
    assert_eq!(sorted, pts(&[[-1, 1], [2, 1], [0, 0], [0, 0]]));
  }

  #[proptest]
  fn sort_is_a_permutation(#[strategy(any_points(3..50))] input: Vec<Point<i32>>) {
    let mut input = input;
    let anchor = input.remove(select_anchor(&input).unwrap());
    let mut sorted = sort_around(&anchor, input.clone());
    sorted.sort();
    input.sort();
    assert_eq!(sorted, input);
  }

  #[proptest]
  fn sweep_order_is_counter_clockwise(#[strategy(any_points(3..50))] input: Vec<Point<i32>>) {
    let mut input = input;
    let anchor = input.remove(select_anchor(&input).unwrap());
    let sorted = sort_around(&anchor, input);
    // Reading from the back, no point is clockwise of the one before it.
    for pair in sorted.windows(2) {
      let (later, earlier) = (&pair[0], &pair[1]);
      if *earlier != anchor && *later != anchor {
        assert!(!anchor.orientation(earlier, later).is_cw());
      }
    }
  }
}
