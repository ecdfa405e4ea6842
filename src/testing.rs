// This module contains strategies for:
//  * points
//  * point sets
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use core::ops::Range;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

// Coordinates stay small enough that every polar key is exact in f64.
const COORD_RANGE: Range<i32> = -1000..1000;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T> {
  type Strategy = Mapped<[T; 2], Point<T>>;
  type Parameters = <[T; 2] as Arbitrary>::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<[T; 2]>(params).prop_map(Point::new)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

pub fn any_point() -> impl Strategy<Value = Point<i32>> {
  [COORD_RANGE, COORD_RANGE].prop_map(Point::new)
}

pub fn any_point_64() -> impl Strategy<Value = Point<i64>> {
  any::<Point<i64>>()
}

// Sets drawn from a narrow grid so duplicates and colinear runs show up often.
pub fn any_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  prop_oneof![
    vec(any_point(), len.clone()),
    vec([-4..4, -4..4].prop_map(Point::new), len),
  ]
}
