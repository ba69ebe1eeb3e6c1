//! Fixed geometric templates for the four component kinds.
//!
//! Template coordinates are given in shape space; a component's position is
//! the shape's [`PIVOT`], so every local offset is `template - PIVOT`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::Point;

/// Shape-space point that coincides with a component's position.
pub const PIVOT: Point = Point::new(50.0, 20.0);

/// Radius of the circular hit area around a port.
pub const ATTACHMENT_RADIUS: f64 = 7.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
	Source,
	Worker,
	Collector,
	Aggregator,
}

impl ComponentKind {
	pub const ALL: [ComponentKind; 4] = [
		ComponentKind::Source,
		ComponentKind::Worker,
		ComponentKind::Collector,
		ComponentKind::Aggregator,
	];

	pub fn name(self) -> &'static str {
		match self {
			ComponentKind::Source => "Source",
			ComponentKind::Worker => "Worker",
			ComponentKind::Collector => "Collector",
			ComponentKind::Aggregator => "Aggregator",
		}
	}

	pub fn shape(self) -> &'static Shape {
		match self {
			ComponentKind::Source => &SOURCE,
			ComponentKind::Worker => &WORKER,
			ComponentKind::Collector => &COLLECTOR,
			ComponentKind::Aggregator => &AGGREGATOR,
		}
	}
}

impl fmt::Display for ComponentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Polygon outline plus the named attachment ports of a kind.
#[derive(Debug)]
pub struct Shape {
	pub outline: &'static [Point],
	pub start_ports: &'static [Point],
	pub end_ports: &'static [Point],
}

impl Shape {
	/// Outline translated so the pivot is at the origin.
	pub fn local_outline(&self) -> impl Iterator<Item = Point> + '_ {
		self.outline.iter().map(|&p| p - PIVOT)
	}

	pub fn local_start_ports(&self) -> impl Iterator<Item = Point> + '_ {
		self.start_ports.iter().map(|&p| p - PIVOT)
	}

	pub fn local_end_ports(&self) -> impl Iterator<Item = Point> + '_ {
		self.end_ports.iter().map(|&p| p - PIVOT)
	}

	/// Axis-aligned bounds of the outline in local space, as `(min, max)`.
	pub fn local_bounds(&self) -> (Point, Point) {
		self.local_outline().fold(
			(
				Point::new(f64::INFINITY, f64::INFINITY),
				Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
			),
			|(min, max), p| {
				(
					Point::new(min.x.min(p.x), min.y.min(p.y)),
					Point::new(max.x.max(p.x), max.y.max(p.y)),
				)
			},
		)
	}
}

const OUT_PORT: Point = Point::new(100.0, 20.0);
const IN_PORT: Point = Point::new(20.0, 20.0);

static SOURCE: Shape = Shape {
	outline: &[
		Point::new(0.0, 0.0),
		Point::new(80.0, 0.0),
		Point::new(100.0, 20.0),
		Point::new(80.0, 40.0),
		Point::new(0.0, 40.0),
		Point::new(0.0, 0.0),
	],
	start_ports: &[OUT_PORT],
	end_ports: &[],
};

static WORKER: Shape = Shape {
	outline: &[
		Point::new(0.0, 0.0),
		Point::new(80.0, 0.0),
		Point::new(100.0, 20.0),
		Point::new(80.0, 40.0),
		Point::new(0.0, 40.0),
		Point::new(20.0, 20.0),
	],
	start_ports: &[OUT_PORT],
	end_ports: &[IN_PORT],
};

static COLLECTOR: Shape = Shape {
	outline: &[
		Point::new(0.0, 0.0),
		Point::new(100.0, 0.0),
		Point::new(100.0, 40.0),
		Point::new(0.0, 40.0),
		Point::new(20.0, 20.0),
	],
	start_ports: &[],
	end_ports: &[IN_PORT],
};

static AGGREGATOR: Shape = Shape {
	outline: &[
		Point::new(0.0, 0.0),
		Point::new(40.0, 0.0),
		Point::new(40.0, -20.0),
		Point::new(60.0, -20.0),
		Point::new(60.0, 0.0),
		Point::new(80.0, 0.0),
		Point::new(100.0, 20.0),
		Point::new(80.0, 40.0),
		Point::new(60.0, 40.0),
		Point::new(60.0, 60.0),
		Point::new(40.0, 60.0),
		Point::new(40.0, 40.0),
		Point::new(0.0, 40.0),
		Point::new(20.0, 20.0),
	],
	start_ports: &[OUT_PORT],
	end_ports: &[IN_PORT],
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ports_are_partitioned_by_kind() {
		assert!(ComponentKind::Source.shape().end_ports.is_empty());
		assert!(!ComponentKind::Source.shape().start_ports.is_empty());
		assert!(ComponentKind::Collector.shape().start_ports.is_empty());
		assert!(!ComponentKind::Collector.shape().end_ports.is_empty());
		for kind in [ComponentKind::Worker, ComponentKind::Aggregator] {
			assert_eq!(kind.shape().start_ports.len(), 1);
			assert_eq!(kind.shape().end_ports.len(), 1);
		}
	}

	#[test]
	fn local_ports_are_relative_to_pivot() {
		let shape = ComponentKind::Worker.shape();
		assert_eq!(shape.local_start_ports().next(), Some(Point::new(50.0, 0.0)));
		assert_eq!(shape.local_end_ports().next(), Some(Point::new(-30.0, 0.0)));
	}

	#[test]
	fn aggregator_bounds_include_pack_tabs() {
		let (min, max) = ComponentKind::Aggregator.shape().local_bounds();
		assert_eq!(min, Point::new(-50.0, -40.0));
		assert_eq!(max, Point::new(50.0, 40.0));
	}

	#[test]
	fn kind_serializes_lowercase() {
		let json = serde_json::to_string(&ComponentKind::Aggregator).unwrap();
		assert_eq!(json, "\"aggregator\"");
	}
}
