use log::{debug, warn};

use super::description::ComponentDescription;
use super::edge::{Edge, EdgeAttributes, PendingEdge};
use super::node::Component;
use super::shape::ComponentKind;
use super::types::{ComponentId, EdgeId, Point};

/// Attribute change requested for a component.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentEdit {
	Name(String),
	AsyncDegree(u32),
	Function(String),
	FunctionParams(Vec<String>),
	PackSize(u32),
}

/// Attribute change requested for an edge.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeEdit {
	Buffer(u32),
	Priority(u32),
	ConditionFunction(String),
	ConditionParams(Vec<String>),
}

/// Discrete mutation of the graph. Everything that changes the model from
/// outside (pointer handling, side panel, palette) goes through one of these.
#[derive(Clone, Debug)]
pub enum Command {
	AddComponent { kind: ComponentKind, position: Point },
	RemoveComponent(ComponentId),
	TranslateComponent { id: ComponentId, dx: f64, dy: f64 },
	EditComponent(ComponentId, ComponentEdit),
	BindEdge { pending: PendingEdge, to: ComponentId },
	RemoveEdge(EdgeId),
	EditEdge(EdgeId, EdgeEdit),
	Clear,
}

/// Owns components and edges, and the two id generators.
#[derive(Debug, Default)]
pub struct GraphModel {
	components: Vec<Component>,
	edges: Vec<Edge>,
	next_component: u32,
	next_edge: u32,
}

impl GraphModel {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn components(&self) -> &[Component] {
		&self.components
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn component(&self, id: ComponentId) -> Option<&Component> {
		self.components.iter().find(|c| c.id() == id)
	}

	pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
		self.components.iter_mut().find(|c| c.id() == id)
	}

	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edges.iter().find(|e| e.id() == id)
	}

	pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
		self.edges.iter_mut().find(|e| e.id() == id)
	}

	pub fn apply(&mut self, command: Command) {
		match command {
			Command::AddComponent { kind, position } => {
				self.add_component(kind, position, None);
			}
			Command::RemoveComponent(id) => self.remove_component(id),
			Command::TranslateComponent { id, dx, dy } => self.translate_component(id, dx, dy),
			Command::EditComponent(id, edit) => self.edit_component(id, edit),
			Command::BindEdge { pending, to } => {
				self.bind_edge(pending, to);
			}
			Command::RemoveEdge(id) => self.remove_edge(id),
			Command::EditEdge(id, edit) => self.edit_edge(id, edit),
			Command::Clear => self.clear(),
		}
	}

	/// Allocate the next component id and place a new component of `kind`.
	pub fn add_component(
		&mut self,
		kind: ComponentKind,
		position: Point,
		description: Option<&ComponentDescription>,
	) -> &Component {
		let id = ComponentId(self.next_component);
		self.next_component += 1;

		let mut component = Component::new(id, kind, position);
		if let Some(desc) = description {
			desc.apply_to(&mut component);
		}
		debug!("added {} component {}", kind, id);
		self.components.push(component);
		&self.components[self.components.len() - 1]
	}

	/// Remove a component and every edge that starts or ends at it.
	pub fn remove_component(&mut self, id: ComponentId) {
		let before = self.components.len();
		self.components.retain(|c| c.id() != id);
		if self.components.len() == before {
			debug!("remove of unknown component {} ignored", id);
			return;
		}
		self.edges.retain(|e| !e.references(id));
	}

	pub fn remove_edge(&mut self, id: EdgeId) {
		self.edges.retain(|e| e.id() != id);
	}

	/// Empty both collections and restart both id generators at zero.
	pub fn clear(&mut self) {
		self.components.clear();
		self.edges.clear();
		self.next_component = 0;
		self.next_edge = 0;
	}

	/// Move a component and drag every attached edge endpoint along with it.
	pub fn translate_component(&mut self, id: ComponentId, dx: f64, dy: f64) {
		let Some(component) = self.component_mut(id) else {
			debug!("translate of unknown component {} ignored", id);
			return;
		};
		component.translate(dx, dy);

		for edge in &mut self.edges {
			if edge.from() == id {
				edge.move_start(dx, dy);
			}
			if edge.to() == id {
				edge.move_end(dx, dy);
			}
		}
	}

	/// Admit a drawn connection ending at `to`.
	///
	/// The endpoints snap onto the source's start port and the destination's
	/// end port. Returns `None` when either endpoint no longer exists or does
	/// not expose the required port.
	pub fn bind_edge(&mut self, pending: PendingEdge, to: ComponentId) -> Option<EdgeId> {
		let Some(start) = self.component(pending.from()).and_then(Component::start_anchor) else {
			warn!("edge source {} has no start port", pending.from());
			return None;
		};
		let Some(end) = self.component(to).and_then(Component::end_anchor) else {
			warn!("edge destination {} has no end port", to);
			return None;
		};
		Some(self.push_edge(pending.from(), to, start, end, EdgeAttributes::default()))
	}

	pub(crate) fn push_edge(
		&mut self,
		from: ComponentId,
		to: ComponentId,
		start: Point,
		end: Point,
		attributes: EdgeAttributes,
	) -> EdgeId {
		let id = EdgeId(self.next_edge);
		self.next_edge += 1;
		self.edges.push(Edge::new(id, from, to, start, end, attributes));
		debug!("connected {} -> {} as edge {}", from, to, id);
		id
	}

	fn edit_component(&mut self, id: ComponentId, edit: ComponentEdit) {
		let Some(component) = self.component_mut(id) else {
			return;
		};
		match edit {
			ComponentEdit::Name(name) => component.set_name(name),
			ComponentEdit::AsyncDegree(degree) => component.set_async_degree(degree),
			ComponentEdit::Function(function) => component.set_function(function),
			ComponentEdit::FunctionParams(params) => component.set_function_params(params),
			ComponentEdit::PackSize(size) => component.set_pack_size(size),
		}
	}

	fn edit_edge(&mut self, id: EdgeId, edit: EdgeEdit) {
		let Some(edge) = self.edge_mut(id) else {
			return;
		};
		match edit {
			EdgeEdit::Buffer(buffer) => edge.set_buffer(buffer),
			EdgeEdit::Priority(priority) => edge.set_priority(priority),
			EdgeEdit::ConditionFunction(function) => edge.set_condition_function(function),
			EdgeEdit::ConditionParams(params) => edge.set_condition_params(params),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn connected() -> (GraphModel, ComponentId, ComponentId, EdgeId) {
		let mut g = GraphModel::new();
		let source = g.add_component(ComponentKind::Source, Point::new(100.0, 100.0), None).id();
		let worker = g.add_component(ComponentKind::Worker, Point::new(300.0, 100.0), None).id();
		let edge = g
			.bind_edge(PendingEdge::new(source, Point::new(150.0, 100.0)), worker)
			.expect("bind");
		(g, source, worker, edge)
	}

	#[test]
	fn ids_are_never_reused() {
		let mut g = GraphModel::new();
		let a = g.add_component(ComponentKind::Source, Point::ZERO, None).id();
		g.remove_component(a);
		let b = g.add_component(ComponentKind::Source, Point::ZERO, None).id();
		assert!(b > a);
	}

	#[test]
	fn bound_edge_snaps_to_ports() {
		let (g, source, worker, id) = connected();
		let e = g.edge(id).unwrap();
		assert_eq!((e.from(), e.to()), (source, worker));
		assert_eq!(e.start(), Point::new(150.0, 100.0));
		assert_eq!(e.end(), Point::new(270.0, 100.0));
		assert_eq!(e.buffer(), 0);
		assert_eq!(e.priority(), 1);
	}

	#[test]
	fn binding_to_a_source_is_refused() {
		let mut g = GraphModel::new();
		let a = g.add_component(ComponentKind::Source, Point::ZERO, None).id();
		let b = g.add_component(ComponentKind::Source, Point::new(200.0, 0.0), None).id();
		assert_eq!(g.bind_edge(PendingEdge::new(a, Point::ZERO), b), None);
		assert!(g.edges().is_empty());
	}

	#[test]
	fn removing_component_cascades_to_its_edges_only() {
		let (mut g, source, worker, _) = connected();
		let collector = g.add_component(ComponentKind::Collector, Point::new(500.0, 100.0), None).id();
		let kept = g.bind_edge(PendingEdge::new(worker, Point::ZERO), collector).unwrap();

		g.remove_component(source);
		assert_eq!(g.edges().len(), 1);
		assert_eq!(g.edges()[0].id(), kept);
		assert!(g.component(worker).is_some());
	}

	#[test]
	fn translation_moves_attached_endpoints() {
		let (mut g, _, worker, id) = connected();
		g.translate_component(worker, 10.0, 20.0);
		let e = g.edge(id).unwrap();
		assert_eq!(e.start(), Point::new(150.0, 100.0));
		assert_eq!(e.end(), Point::new(280.0, 120.0));
		assert_eq!(Some(e.end()), g.component(worker).and_then(Component::end_anchor));
	}

	#[test]
	fn clear_resets_generators() {
		let (mut g, ..) = connected();
		g.clear();
		assert!(g.components().is_empty());
		assert!(g.edges().is_empty());
		assert_eq!(g.add_component(ComponentKind::Worker, Point::ZERO, None).id(), ComponentId(0));
	}

	#[test]
	fn commands_edit_attributes() {
		let (mut g, source, _, id) = connected();
		g.apply(Command::EditComponent(source, ComponentEdit::Name("numbers".into())));
		g.apply(Command::EditEdge(id, EdgeEdit::Priority(3)));
		g.apply(Command::EditEdge(id, EdgeEdit::ConditionFunction("isEven".into())));
		assert_eq!(g.component(source).unwrap().name(), "numbers");
		let e = g.edge(id).unwrap();
		assert_eq!(e.decorations().ticks.len(), 3);
		assert!(e.decorations().marker.is_some());
	}

	#[test]
	fn unknown_ids_are_ignored() {
		let (mut g, ..) = connected();
		g.remove_component(ComponentId(42));
		g.remove_edge(EdgeId(42));
		g.translate_component(ComponentId(42), 1.0, 1.0);
		assert_eq!(g.components().len(), 2);
		assert_eq!(g.edges().len(), 1);
	}
}
