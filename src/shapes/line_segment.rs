use rapier2d::prelude::{point, Point, Real, Vector};

/// A straight segment between two points, used as the spine of boundary walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Point<Real>,
    pub b: Point<Real>,
}

impl LineSegment {
    pub fn new(a: Point<Real>, b: Point<Real>) -> Self {
        Self { a, b }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> Real {
        self.direction().norm()
    }

    /// Returns the direction vector of the line segment (from a to b).
    pub fn direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The bottom edge of a `width` x `height` window, origin bottom-left.
    pub fn bottom_edge(width: Real) -> Self {
        Self::new(point![0.0, 0.0], point![width, 0.0])
    }

    /// The four edges of a `width` x `height` window: bottom, top, left, right.
    pub fn window_edges(width: Real, height: Real) -> [Self; 4] {
        [
            Self::bottom_edge(width),
            Self::new(point![0.0, height], point![width, height]),
            Self::new(point![0.0, 0.0], point![0.0, height]),
            Self::new(point![width, 0.0], point![width, height]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_line_segment_length() {
        let line = LineSegment::new(point![1.0, 2.0], point![4.0, 6.0]); // Difference (3, 4), length 5
        assert!((line.length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_line_segment_direction() {
        let line = LineSegment::new(point![1.0, 2.0], point![4.0, 6.0]);
        let dir = line.direction();
        assert!((dir.x - 3.0).abs() < EPSILON);
        assert!((dir.y - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_window_edges_trace_rectangle() {
        let [bottom, top, left, right] = LineSegment::window_edges(800.0, 600.0);
        assert_eq!(bottom, LineSegment::new(point![0.0, 0.0], point![800.0, 0.0]));
        assert_eq!(top, LineSegment::new(point![0.0, 600.0], point![800.0, 600.0]));
        assert_eq!(left, LineSegment::new(point![0.0, 0.0], point![0.0, 600.0]));
        assert_eq!(right, LineSegment::new(point![800.0, 0.0], point![800.0, 600.0]));
    }
}
