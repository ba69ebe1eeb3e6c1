use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Identity of a component, issued by [`GraphModel`](super::GraphModel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub u32);

/// Identity of an admitted edge, issued independently from component ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

impl fmt::Display for ComponentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl fmt::Display for EdgeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A point (or displacement) in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y).sqrt()
	}

	pub fn distance(self, other: Point) -> f64 {
		(other - self).length()
	}

	pub fn translated(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}

	/// Rotate around the origin by `angle` radians.
	pub fn rotated(self, angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

/// A straight line piece, used for edge strokes and priority ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub from: Point,
	pub to: Point,
}

impl Segment {
	pub fn new(from: Point, to: Point) -> Self {
		Self { from, to }
	}

	pub fn midpoint(&self) -> Point {
		(self.from + self.to) * 0.5
	}

	/// Shortest distance from `p` to any point on the segment.
	pub fn distance_to(&self, p: Point) -> f64 {
		let d = self.to - self.from;
		let len_sq = d.x * d.x + d.y * d.y;
		if len_sq == 0.0 {
			return self.from.distance(p);
		}
		let t = (((p.x - self.from.x) * d.x + (p.y - self.from.y) * d.y) / len_sq).clamp(0.0, 1.0);
		(self.from + d * t).distance(p)
	}
}

/// Size of the drawing area; used to normalize coordinates in descriptions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
	pub width: f64,
	pub height: f64,
}

impl CanvasSize {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn normalize(&self, p: Point) -> [f64; 2] {
		[p.x / self.width, p.y / self.height]
	}

	pub fn denormalize(&self, x: f64, y: f64) -> Point {
		Point::new(x * self.width, y * self.height)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn segment_distance_clamps_to_endpoints() {
		let s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
		assert_eq!(s.distance_to(Point::new(5.0, 3.0)), 3.0);
		assert_eq!(s.distance_to(Point::new(-4.0, 3.0)), 5.0);
		assert_eq!(s.distance_to(Point::new(13.0, 4.0)), 5.0);
	}

	#[test]
	fn canvas_normalization_is_per_axis() {
		let canvas = CanvasSize::new(800.0, 400.0);
		assert_eq!(canvas.normalize(Point::new(200.0, 200.0)), [0.25, 0.5]);
		assert_eq!(canvas.denormalize(0.25, 0.5), Point::new(200.0, 200.0));
	}
}
