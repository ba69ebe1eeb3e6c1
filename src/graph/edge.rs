//! Directed connections and the geometry of their decorations.
//!
//! Decorations are derived, never edited: every endpoint or attribute change
//! that affects them recomputes the whole set from `start`, `end`, the
//! priority and whether a condition function is attached.

use std::f64::consts::FRAC_PI_4;

use super::node::split_params;
use super::types::{ComponentId, EdgeId, Point, Segment};

/// Distance from `start` to the first priority tick.
pub const TICK_OFFSET: f64 = 40.0;
/// Distance between consecutive priority ticks.
pub const TICK_SPACING: f64 = 10.0;
/// Half the length of a tick, measured along the edge normal.
pub const TICK_HALF_LENGTH: f64 = 10.0;
/// Side of the square condition marker.
pub const MARKER_SIDE: f64 = 40.0;

/// Square marker shown at the midpoint of a conditioned edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
	pub center: Point,
	/// Radians, relative to the axis-aligned square.
	pub rotation: f64,
}

impl Marker {
	pub fn corners(&self) -> [Point; 4] {
		let h = MARKER_SIDE / 2.0;
		[
			Point::new(-h, -h),
			Point::new(h, -h),
			Point::new(h, h),
			Point::new(-h, h),
		]
		.map(|corner| self.center + corner.rotated(self.rotation))
	}

	pub fn contains(&self, p: Point) -> bool {
		let local = (p - self.center).rotated(-self.rotation);
		let h = MARKER_SIDE / 2.0;
		local.x.abs() <= h && local.y.abs() <= h
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decorations {
	pub ticks: Vec<Segment>,
	pub marker: Option<Marker>,
}

// Math.sign semantics: zero maps to zero.
fn sign(v: f64) -> f64 {
	if v > 0.0 {
		1.0
	} else if v < 0.0 {
		-1.0
	} else {
		0.0
	}
}

/// Derive tick segments and the condition marker for a line.
///
/// A zero-length line has no direction and yields no decorations.
pub fn decorate(start: Point, end: Point, priority: u32, conditioned: bool) -> Decorations {
	let d = end - start;
	let len = d.length();
	if len == 0.0 || !len.is_finite() {
		return Decorations::default();
	}
	let unit = d * (1.0 / len);
	let normal = Point::new(unit.y, -unit.x);

	let ticks = (0..priority)
		.map(|i| {
			let c = start + unit * (TICK_OFFSET + TICK_SPACING * f64::from(i));
			Segment::new(c + normal * TICK_HALF_LENGTH, c - normal * TICK_HALF_LENGTH)
		})
		.collect();

	let marker = conditioned.then(|| Marker {
		center: start + unit * (len / 2.0),
		rotation: (d.x / len).acos() * sign(d.y) + FRAC_PI_4,
	});

	Decorations { ticks, marker }
}

/// Editable attributes of a connection.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeAttributes {
	pub buffer: u32,
	pub priority: u32,
	pub condition_function: String,
	pub condition_params: Vec<String>,
}

impl Default for EdgeAttributes {
	fn default() -> Self {
		Self {
			buffer: 0,
			priority: 1,
			condition_function: String::new(),
			condition_params: split_params(""),
		}
	}
}

impl EdgeAttributes {
	pub fn is_conditioned(&self) -> bool {
		!self.condition_function.is_empty()
	}
}

/// A connection being drawn whose destination is not chosen yet.
#[derive(Clone, Debug)]
pub struct PendingEdge {
	from: ComponentId,
	start: Point,
	end: Point,
	decorations: Decorations,
}

impl PendingEdge {
	pub fn new(from: ComponentId, at: Point) -> Self {
		Self {
			from,
			start: at,
			end: at,
			decorations: Decorations::default(),
		}
	}

	pub fn from(&self) -> ComponentId {
		self.from
	}

	pub fn start(&self) -> Point {
		self.start
	}

	pub fn end(&self) -> Point {
		self.end
	}

	pub fn segment(&self) -> Segment {
		Segment::new(self.start, self.end)
	}

	pub fn decorations(&self) -> &Decorations {
		&self.decorations
	}

	pub fn set_end(&mut self, at: Point) {
		self.end = at;
		self.decorations = decorate(self.start, self.end, EdgeAttributes::default().priority, false);
	}
}

/// A connection admitted into the graph.
#[derive(Clone, Debug)]
pub struct Edge {
	id: EdgeId,
	from: ComponentId,
	to: ComponentId,
	start: Point,
	end: Point,
	attributes: EdgeAttributes,
	decorations: Decorations,
}

impl Edge {
	pub(crate) fn new(
		id: EdgeId,
		from: ComponentId,
		to: ComponentId,
		start: Point,
		end: Point,
		mut attributes: EdgeAttributes,
	) -> Self {
		attributes.priority = attributes.priority.max(1);
		let mut edge = Self {
			id,
			from,
			to,
			start,
			end,
			attributes,
			decorations: Decorations::default(),
		};
		edge.recompute_decorations();
		edge
	}

	pub fn id(&self) -> EdgeId {
		self.id
	}

	pub fn from(&self) -> ComponentId {
		self.from
	}

	pub fn to(&self) -> ComponentId {
		self.to
	}

	pub fn start(&self) -> Point {
		self.start
	}

	pub fn end(&self) -> Point {
		self.end
	}

	pub fn segment(&self) -> Segment {
		Segment::new(self.start, self.end)
	}

	pub fn attributes(&self) -> &EdgeAttributes {
		&self.attributes
	}

	pub fn buffer(&self) -> u32 {
		self.attributes.buffer
	}

	pub fn priority(&self) -> u32 {
		self.attributes.priority
	}

	pub fn condition_function(&self) -> &str {
		&self.attributes.condition_function
	}

	pub fn condition_params(&self) -> &[String] {
		&self.attributes.condition_params
	}

	pub fn decorations(&self) -> &Decorations {
		&self.decorations
	}

	pub fn references(&self, component: ComponentId) -> bool {
		self.from == component || self.to == component
	}

	pub fn set_start(&mut self, x: f64, y: f64) {
		self.start = Point::new(x, y);
		self.recompute_decorations();
	}

	pub fn set_end(&mut self, x: f64, y: f64) {
		self.end = Point::new(x, y);
		self.recompute_decorations();
	}

	pub fn move_start(&mut self, dx: f64, dy: f64) {
		let p = self.start.translated(dx, dy);
		self.set_start(p.x, p.y);
	}

	pub fn move_end(&mut self, dx: f64, dy: f64) {
		let p = self.end.translated(dx, dy);
		self.set_end(p.x, p.y);
	}

	pub fn set_buffer(&mut self, buffer: u32) {
		self.attributes.buffer = buffer;
	}

	/// Priorities below one are raised to one.
	pub fn set_priority(&mut self, priority: u32) {
		self.attributes.priority = priority.max(1);
		self.recompute_decorations();
	}

	pub fn set_condition_function(&mut self, function: impl Into<String>) {
		self.attributes.condition_function = function.into();
		self.recompute_decorations();
	}

	pub fn set_condition_params(&mut self, params: Vec<String>) {
		self.attributes.condition_params = params;
	}

	pub fn recompute_decorations(&mut self) {
		self.decorations = decorate(
			self.start,
			self.end,
			self.attributes.priority,
			self.attributes.is_conditioned(),
		);
	}
}
