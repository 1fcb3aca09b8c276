use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Unlike most averaging helpers this one is total:
/// an empty slice yields the origin.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use octreefy::utils::center;
/// use octreefy::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
///
/// assert_eq!(center(&[]), Point::origin());
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    center_of(pts.iter().copied())
}

/// Computes the mean of the points yielded by `pts`, or the origin if there are none.
///
/// The coordinates are accumulated first and divided once.
pub fn center_of(pts: impl IntoIterator<Item = Point<Real>>) -> Point<Real> {
    let mut sum = Point::origin();
    let mut count = 0usize;

    for pt in pts {
        sum.coords += pt.coords;
        count += 1;
    }

    if count != 0 {
        sum.coords /= na::convert::<f64, Real>(count as f64);
    }

    sum
}
