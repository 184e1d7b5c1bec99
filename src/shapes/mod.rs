pub mod line_segment;

pub use line_segment::LineSegment;
