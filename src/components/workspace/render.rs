use super::state::EditorState;
use super::surface::{Baseline, Paint, Surface};
use crate::graph::shape::ATTACHMENT_RADIUS;
use crate::graph::{Component, Decorations, Point, Segment};

/// Paint the whole model. Called once per animation frame; reads only.
pub fn render(state: &EditorState, surface: &mut impl Surface) {
	surface.fill_background(state.width, state.height);
	for edge in state.graph.edges() {
		draw_edge(surface, edge.segment(), edge.decorations());
	}
	if let Some(pending) = state.controller.pending_edge() {
		draw_edge(surface, pending.segment(), pending.decorations());
	}
	// components stack above edges
	for component in state.graph.components() {
		draw_component(surface, component);
	}
}

fn draw_edge(surface: &mut impl Surface, line: Segment, decorations: &Decorations) {
	surface.draw_segment(line, Paint::Edge);
	for &tick in &decorations.ticks {
		surface.draw_segment(tick, Paint::Edge);
	}
	if let Some(marker) = decorations.marker {
		surface.draw_polygon(&marker.corners(), Paint::Marker);
	}
}

fn draw_component(surface: &mut impl Surface, component: &Component) {
	surface.draw_polygon(&component.outline(), Paint::Body);
	for port in component.start_ports() {
		surface.draw_circle(port, ATTACHMENT_RADIUS, Paint::StartPort);
	}
	for port in component.end_ports() {
		surface.draw_circle(port, ATTACHMENT_RADIUS, Paint::EndPort);
	}

	let (min, max) = component.shape().local_bounds();
	let center = component.world((min + max) * 0.5);
	let caption = component.caption();
	surface.draw_text(&caption.title, Point::new(center.x, component.world(min).y), Baseline::Top);
	surface.draw_text(&caption.degree, center, Baseline::Middle);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{ComponentKind, EdgeEdit, GraphModel, PendingEdge};

	#[derive(Debug, PartialEq)]
	enum Op {
		Background,
		Polygon(usize, Paint),
		Segment(Segment),
		Circle(Point, Paint),
		Text(String),
	}

	#[derive(Default)]
	struct Recorder(Vec<Op>);

	impl Surface for Recorder {
		fn fill_background(&mut self, _: f64, _: f64) {
			self.0.push(Op::Background);
		}

		fn draw_polygon(&mut self, points: &[Point], paint: Paint) {
			self.0.push(Op::Polygon(points.len(), paint));
		}

		fn draw_segment(&mut self, segment: Segment, _: Paint) {
			self.0.push(Op::Segment(segment));
		}

		fn draw_circle(&mut self, center: Point, _: f64, paint: Paint) {
			self.0.push(Op::Circle(center, paint));
		}

		fn draw_text(&mut self, text: &str, _: Point, _: Baseline) {
			self.0.push(Op::Text(text.to_owned()));
		}
	}

	fn connected(graph: &mut GraphModel) {
		let s = graph.add_component(ComponentKind::Source, Point::new(100.0, 100.0), None).id();
		let w = graph.add_component(ComponentKind::Worker, Point::new(300.0, 100.0), None).id();
		let e = graph.bind_edge(PendingEdge::new(s, Point::ZERO), w).unwrap();
		graph.apply(crate::graph::Command::EditEdge(e, EdgeEdit::Priority(2)));
		graph.apply(crate::graph::Command::EditEdge(e, EdgeEdit::ConditionFunction("isEven".into())));
	}

	#[test]
	fn edges_are_painted_below_components() {
		let mut state = EditorState::new(800.0, 600.0);
		connected(&mut state.graph);
		let mut rec = Recorder::default();
		render(&state, &mut rec);

		let ops = &rec.0;
		assert_eq!(ops[0], Op::Background);
		let edge = &state.graph.edges()[0];
		assert_eq!(ops[1], Op::Segment(edge.segment()));
		assert_eq!(ops[2], Op::Segment(edge.decorations().ticks[0]));
		assert_eq!(ops[3], Op::Segment(edge.decorations().ticks[1]));
		assert_eq!(ops[4], Op::Polygon(4, Paint::Marker));
		assert_eq!(ops[5], Op::Polygon(6, Paint::Body));
		assert_eq!(ops[6], Op::Circle(Point::new(150.0, 100.0), Paint::StartPort));
		assert_eq!(ops[7], Op::Text("Source_0".into()));
		assert_eq!(ops[8], Op::Text("1".into()));
	}

	#[test]
	fn pending_edge_is_painted() {
		let mut state = EditorState::new(800.0, 600.0);
		state.graph.add_component(ComponentKind::Source, Point::new(100.0, 100.0), None);
		state.controller.begin_connection(crate::graph::ComponentId(0), Point::new(150.0, 100.0));
		state.pointer(crate::graph::PointerEvent::Move(Point::new(400.0, 100.0)));

		let mut rec = Recorder::default();
		render(&state, &mut rec);
		let segments = rec.0.iter().filter(|op| matches!(op, Op::Segment(_))).count();
		// stroke plus one priority tick
		assert_eq!(segments, 2);
	}

	#[test]
	fn rendering_does_not_mutate() {
		let mut state = EditorState::new(800.0, 600.0);
		connected(&mut state.graph);
		let before = state.description(true);
		render(&state, &mut Recorder::default());
		assert_eq!(state.description(true), before);
	}
}
