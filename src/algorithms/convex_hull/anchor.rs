use crate::data::Point;
use crate::{Error, HullScalar};

/// $O(n)$ Index of the lowest point, the leftmost one on ties.
///
/// The first occurrence wins when the lowest point appears more than once.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if fewer than three points are given.
pub fn select_anchor<T>(pts: &[Point<T>]) -> Result<usize, Error>
where
  T: HullScalar,
{
  if pts.len() < 3 {
    return Err(Error::InvalidInput);
  }
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| (pt.y_coord(), pt.x_coord()))
    .map(|(idx, _)| idx)
    .ok_or(Error::InvalidInput)
}
