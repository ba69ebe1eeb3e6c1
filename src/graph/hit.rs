use super::model::GraphModel;
use super::shape::ATTACHMENT_RADIUS;
use super::types::{ComponentId, EdgeId, Point};

/// Slack around an edge stroke that still counts as a hit.
pub const EDGE_HIT_TOLERANCE: f64 = 6.0;

/// What lies under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
	StartPort(ComponentId),
	EndPort(ComponentId),
	Body(ComponentId),
	Edge(EdgeId),
}

/// Find the topmost entity at `p`.
///
/// Components are painted above edges, ports above their component, and
/// later entities above earlier ones; the search follows the same order.
pub fn hit_test(graph: &GraphModel, p: Point) -> Option<HitTarget> {
	for component in graph.components().iter().rev() {
		let id = component.id();
		if component.start_ports().any(|port| port.distance(p) <= ATTACHMENT_RADIUS) {
			return Some(HitTarget::StartPort(id));
		}
		if component.end_ports().any(|port| port.distance(p) <= ATTACHMENT_RADIUS) {
			return Some(HitTarget::EndPort(id));
		}
		if polygon_contains(&component.outline(), p) {
			return Some(HitTarget::Body(id));
		}
	}

	graph
		.edges()
		.iter()
		.rev()
		.find(|edge| {
			edge.segment().distance_to(p) <= EDGE_HIT_TOLERANCE
				|| edge.decorations().marker.is_some_and(|m| m.contains(p))
		})
		.map(|edge| HitTarget::Edge(edge.id()))
}

/// Even-odd rule; the outline is implicitly closed.
fn polygon_contains(outline: &[Point], p: Point) -> bool {
	let mut inside = false;
	let mut j = outline.len().wrapping_sub(1);
	for (i, a) in outline.iter().enumerate() {
		let b = outline[j];
		if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
			inside = !inside;
		}
		j = i;
	}
	inside
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::edge::PendingEdge;
	use crate::graph::shape::ComponentKind;

	#[test]
	fn ports_win_over_bodies() {
		let mut g = GraphModel::new();
		let w = g.add_component(ComponentKind::Worker, Point::new(100.0, 100.0), None).id();
		assert_eq!(hit_test(&g, Point::new(148.0, 101.0)), Some(HitTarget::StartPort(w)));
		assert_eq!(hit_test(&g, Point::new(72.0, 100.0)), Some(HitTarget::EndPort(w)));
		assert_eq!(hit_test(&g, Point::new(100.0, 100.0)), Some(HitTarget::Body(w)));
		assert_eq!(hit_test(&g, Point::new(400.0, 400.0)), None);
	}

	#[test]
	fn worker_notch_is_not_body() {
		let mut g = GraphModel::new();
		g.add_component(ComponentKind::Worker, Point::new(100.0, 100.0), None);
		// inside the bounding box, left of the notch apex at local (-30, 0)
		assert_eq!(hit_test(&g, Point::new(52.0, 100.0)), None);
	}

	#[test]
	fn later_components_are_on_top() {
		let mut g = GraphModel::new();
		g.add_component(ComponentKind::Collector, Point::new(100.0, 100.0), None);
		let top = g.add_component(ComponentKind::Collector, Point::new(110.0, 100.0), None).id();
		assert_eq!(hit_test(&g, Point::new(130.0, 110.0)), Some(HitTarget::Body(top)));
	}

	#[test]
	fn edges_are_hit_along_their_stroke() {
		let mut g = GraphModel::new();
		let s = g.add_component(ComponentKind::Source, Point::new(100.0, 100.0), None).id();
		let c = g.add_component(ComponentKind::Collector, Point::new(500.0, 100.0), None).id();
		let e = g.bind_edge(PendingEdge::new(s, Point::ZERO), c).unwrap();
		assert_eq!(hit_test(&g, Point::new(300.0, 103.0)), Some(HitTarget::Edge(e)));
		assert_eq!(hit_test(&g, Point::new(300.0, 130.0)), None);
	}
}
