//! Approximate point-to-path distance by fixed-resolution sampling.
//!
//! The path is sampled at 101 evenly spaced fractions of its travel length
//! (0.00, 0.01, ..., 1.00) and the closest sample wins. The resolution does
//! not adapt to length or curvature; hit-testing tie-breaks depend on it.

use crate::model::{Point, ShapePath};

/// Parameter step between two samples.
pub const SAMPLE_STEP: f64 = 0.01;

/// Number of samples taken along a path, both ends included.
pub const SAMPLE_COUNT: usize = 101;

/// Iterates the sample points of `path` in travel order.
pub fn samples(path: &ShapePath) -> impl Iterator<Item = Point> + '_ {
    let last = (SAMPLE_COUNT - 1) as f64;
    (0..SAMPLE_COUNT).map(move |i| path.point_at_percent(i as f64 / last))
}

/// Minimum distance from `point` to any sample of `path`.
///
/// Zero-length paths yield the distance to their single point.
pub fn distance_to_point(path: &ShapePath, point: &Point) -> f64 {
    samples(path)
        .map(|sample| sample.distance_to(point))
        .fold(f64::INFINITY, f64::min)
}
