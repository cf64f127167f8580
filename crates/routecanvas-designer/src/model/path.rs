use lyon::math::point;
use lyon::path::Path;
use routecanvas_core::SceneError;

use super::{Anchor, Point};
use crate::spatial::Bounds;

/// Flattened outline of an imported shape in travel order.
///
/// A path is immutable once built. Reversal and re-rooting produce a new
/// path, so a shape can swap its path and everything derived from it in a
/// single assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePath {
    vertices: Vec<Point>,
    closed: bool,
    /// Cumulative length at every trace point, starting at 0.0.
    lengths: Vec<f64>,
}

impl ShapePath {
    /// Builds a path from its vertices.
    ///
    /// For closed paths a trailing vertex equal to the first one is dropped;
    /// the closing segment is implied.
    pub fn new(mut vertices: Vec<Point>, closed: bool) -> Result<Self, SceneError> {
        if vertices.is_empty() {
            return Err(SceneError::EmptyPath);
        }
        if closed && vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Ok(Self::from_parts(vertices, closed))
    }

    fn from_parts(vertices: Vec<Point>, closed: bool) -> Self {
        let mut path = Self {
            vertices,
            closed,
            lengths: Vec::new(),
        };
        path.lengths = path.measure();
        path
    }

    fn measure(&self) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(self.trace_len());
        let mut total = 0.0;
        let mut prev: Option<Point> = None;
        for p in self.trace() {
            if let Some(q) = prev {
                total += q.distance_to(&p);
            }
            lengths.push(total);
            prev = Some(p);
        }
        lengths
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Total travel length including the closing segment.
    pub fn length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Points in travel order; closed paths repeat the first vertex at the end.
    pub fn trace(&self) -> impl Iterator<Item = Point> + '_ {
        let closing = if self.is_looped() {
            Some(self.vertices[0])
        } else {
            None
        };
        self.vertices.iter().copied().chain(closing)
    }

    /// Consecutive point pairs in travel order.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = (Point, Point)> + '_ {
        (1..self.trace_len()).map(move |i| (self.trace_point(i - 1), self.trace_point(i)))
    }

    fn is_looped(&self) -> bool {
        self.closed && self.vertices.len() > 1
    }

    fn trace_len(&self) -> usize {
        self.vertices.len() + usize::from(self.is_looped())
    }

    fn trace_point(&self, index: usize) -> Point {
        self.vertices
            .get(index)
            .copied()
            .unwrap_or(self.vertices[0])
    }

    /// Point at fraction `t` of the travel length (clamped to `[0, 1]`).
    pub fn point_at_percent(&self, t: f64) -> Point {
        let total = self.length();
        if total <= 0.0 {
            return self.vertices[0];
        }

        let target = t.clamp(0.0, 1.0) * total;
        let idx = self.lengths.partition_point(|&l| l < target);
        if idx == 0 {
            return self.trace_point(0);
        }
        if idx >= self.lengths.len() {
            return self.trace_point(self.lengths.len() - 1);
        }

        let (l0, l1) = (self.lengths[idx - 1], self.lengths[idx]);
        let a = self.trace_point(idx - 1);
        let b = self.trace_point(idx);
        a.lerp(&b, (target - l0) / (l1 - l0))
    }

    /// Start point and the direction of the first non-degenerate segment.
    pub fn start_anchor(&self) -> Anchor {
        let angle = self
            .segments()
            .find(|(a, b)| a != b)
            .map(|(a, b)| a.angle_to(&b))
            .unwrap_or(0.0);
        Anchor::new(self.trace_point(0), angle)
    }

    /// End point and the direction of the last non-degenerate segment.
    pub fn end_anchor(&self) -> Anchor {
        let angle = self
            .segments()
            .rev()
            .find(|(a, b)| a != b)
            .map(|(a, b)| a.angle_to(&b))
            .unwrap_or(0.0);
        Anchor::new(self.trace_point(self.trace_len() - 1), angle)
    }

    /// The same outline traversed the other way round.
    ///
    /// Open paths swap start and end. Closed paths keep their start vertex
    /// and walk the loop in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        if self.closed {
            vertices[1..].reverse();
        } else {
            vertices.reverse();
        }
        Self::from_parts(vertices, self.closed)
    }

    /// Index of the vertex closest to `reference`; the first one wins ties.
    pub fn nearest_vertex(&self, reference: &Point) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (i, v) in self.vertices.iter().enumerate() {
            let d = v.distance_to(reference);
            if d < best_distance {
                best_distance = d;
                best = i;
            }
        }
        best
    }

    /// Closed path starting at vertex `index`, same direction of travel.
    pub(crate) fn rerooted(&self, index: usize) -> Self {
        let mut vertices = self.vertices.clone();
        let len = vertices.len();
        vertices.rotate_left(index % len);
        Self::from_parts(vertices, self.closed)
    }

    pub fn bounds(&self) -> Bounds {
        let first = self.vertices[0];
        self.vertices.iter().skip(1).fold(
            Bounds::new(first.x, first.y, first.x, first.y),
            |b, p| b.including(p),
        )
    }

    /// Whether the stroked outline touches `rect`.
    pub fn intersects_rect(&self, rect: &Bounds) -> bool {
        if self.trace_len() == 1 {
            return rect.contains(&self.vertices[0]);
        }
        self.segments().any(|(a, b)| rect.intersects_segment(&a, &b))
    }

    /// Renderable path handed to the painter.
    pub fn render(&self) -> Path {
        let mut builder = Path::builder();
        let mut points = self.vertices.iter();
        if let Some(first) = points.next() {
            builder.begin(point(first.x as f32, first.y as f32));
            for p in points {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            builder.end(self.closed);
        }
        builder.build()
    }
}
