use super::shape::{ComponentKind, Shape};
use super::types::{ComponentId, Point};

/// Delimiter used when a parameter list is edited as a single line of text.
pub const PARAM_DELIMITER: &str = "$";

/// Split a `$`-joined parameter line. An empty line is one empty parameter.
pub fn split_params(text: &str) -> Vec<String> {
	text.split(PARAM_DELIMITER).map(str::to_owned).collect()
}

pub fn join_params(params: &[String]) -> String {
	params.join(PARAM_DELIMITER)
}

/// Kind-specific attributes of a component.
#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
	Function { name: String, params: Vec<String> },
	Aggregate { pack_size: u32 },
}

impl Behavior {
	fn for_kind(kind: ComponentKind) -> Self {
		match kind {
			ComponentKind::Aggregator => Behavior::Aggregate { pack_size: 0 },
			_ => Behavior::Function {
				name: String::new(),
				params: split_params(""),
			},
		}
	}
}

/// Text painted on the component body, refreshed when name or async change.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
	pub title: String,
	pub degree: String,
}

/// A node instance placed on the canvas.
#[derive(Clone, Debug)]
pub struct Component {
	id: ComponentId,
	kind: ComponentKind,
	name: String,
	async_degree: u32,
	behavior: Behavior,
	position: Point,
	caption: Caption,
}

impl Component {
	pub fn new(id: ComponentId, kind: ComponentKind, position: Point) -> Self {
		let name = format!("{}_{}", kind.name(), id.0);
		Self {
			id,
			kind,
			caption: Caption {
				title: name.clone(),
				degree: "1".to_owned(),
			},
			name,
			async_degree: 1,
			behavior: Behavior::for_kind(kind),
			position,
		}
	}

	pub fn id(&self) -> ComponentId {
		self.id
	}

	pub fn kind(&self) -> ComponentKind {
		self.kind
	}

	pub fn shape(&self) -> &'static Shape {
		self.kind.shape()
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn async_degree(&self) -> u32 {
		self.async_degree
	}

	pub fn behavior(&self) -> &Behavior {
		&self.behavior
	}

	pub fn position(&self) -> Point {
		self.position
	}

	pub fn caption(&self) -> &Caption {
		&self.caption
	}

	/// Function name, or `None` for aggregators.
	pub fn function(&self) -> Option<&str> {
		match &self.behavior {
			Behavior::Function { name, .. } => Some(name.as_str()),
			Behavior::Aggregate { .. } => None,
		}
	}

	pub fn function_params(&self) -> Option<&[String]> {
		match &self.behavior {
			Behavior::Function { params, .. } => Some(params.as_slice()),
			Behavior::Aggregate { .. } => None,
		}
	}

	/// Pack size, or `None` for non-aggregators.
	pub fn pack_size(&self) -> Option<u32> {
		match self.behavior {
			Behavior::Aggregate { pack_size } => Some(pack_size),
			Behavior::Function { .. } => None,
		}
	}

	pub fn has_start_port(&self) -> bool {
		!self.shape().start_ports.is_empty()
	}

	pub fn has_end_port(&self) -> bool {
		!self.shape().end_ports.is_empty()
	}

	pub fn world(&self, local: Point) -> Point {
		local + self.position
	}

	pub fn start_ports(&self) -> impl Iterator<Item = Point> + '_ {
		self.shape().local_start_ports().map(|p| self.world(p))
	}

	pub fn end_ports(&self) -> impl Iterator<Item = Point> + '_ {
		self.shape().local_end_ports().map(|p| self.world(p))
	}

	/// World position edges leave from.
	pub fn start_anchor(&self) -> Option<Point> {
		self.start_ports().next()
	}

	/// World position edges arrive at.
	pub fn end_anchor(&self) -> Option<Point> {
		self.end_ports().next()
	}

	pub fn outline(&self) -> Vec<Point> {
		self.shape().local_outline().map(|p| self.world(p)).collect()
	}

	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
		self.caption.title = self.name.clone();
	}

	/// Degrees below one are raised to one.
	pub fn set_async_degree(&mut self, degree: u32) {
		self.async_degree = degree.max(1);
		self.caption.degree = self.async_degree.to_string();
	}

	/// Ignored on aggregators.
	pub fn set_function(&mut self, function: impl Into<String>) {
		if let Behavior::Function { name, .. } = &mut self.behavior {
			*name = function.into();
		}
	}

	/// Ignored on aggregators.
	pub fn set_function_params(&mut self, function_params: Vec<String>) {
		if let Behavior::Function { params, .. } = &mut self.behavior {
			*params = function_params;
		}
	}

	/// Ignored on everything but aggregators.
	pub fn set_pack_size(&mut self, size: u32) {
		if let Behavior::Aggregate { pack_size } = &mut self.behavior {
			*pack_size = size;
		}
	}

	pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
		self.position = self.position.translated(dx, dy);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_component_has_defaults() {
		let c = Component::new(ComponentId(3), ComponentKind::Worker, Point::new(10.0, 10.0));
		assert_eq!(c.name(), "Worker_3");
		assert_eq!(c.async_degree(), 1);
		assert_eq!(c.function(), Some(""));
		assert_eq!(c.function_params(), Some(&[String::new()][..]));
		assert_eq!(c.pack_size(), None);
		assert_eq!(c.caption().title, "Worker_3");
	}

	#[test]
	fn ports_follow_position() {
		let mut c = Component::new(ComponentId(0), ComponentKind::Worker, Point::new(100.0, 100.0));
		assert_eq!(c.start_anchor(), Some(Point::new(150.0, 100.0)));
		assert_eq!(c.end_anchor(), Some(Point::new(70.0, 100.0)));
		c.translate(5.0, -5.0);
		assert_eq!(c.start_anchor(), Some(Point::new(155.0, 95.0)));
	}

	#[test]
	fn caption_tracks_name_and_async() {
		let mut c = Component::new(ComponentId(0), ComponentKind::Source, Point::ZERO);
		c.set_name("numbers");
		c.set_async_degree(4);
		assert_eq!(
			c.caption(),
			&Caption {
				title: "numbers".into(),
				degree: "4".into()
			}
		);
		c.set_async_degree(0);
		assert_eq!(c.async_degree(), 1);
	}

	#[test]
	fn kind_attributes_are_exclusive() {
		let mut agg = Component::new(ComponentId(0), ComponentKind::Aggregator, Point::ZERO);
		agg.set_function("ignored");
		agg.set_pack_size(8);
		assert_eq!(agg.function(), None);
		assert_eq!(agg.pack_size(), Some(8));

		let mut worker = Component::new(ComponentId(1), ComponentKind::Worker, Point::ZERO);
		worker.set_pack_size(8);
		assert_eq!(worker.pack_size(), None);
	}

	#[test]
	fn params_split_on_delimiter() {
		assert_eq!(split_params("a$b$$c"), vec!["a", "b", "", "c"]);
		assert_eq!(split_params(""), vec![""]);
		assert_eq!(join_params(&split_params("x$y")), "x$y");
	}
}
