//! Pointer-driven interaction state machine.
//!
//! The controller never touches the graph. It turns pointer events plus the
//! hit-test result into [`Effect`]s: model commands for the graph and
//! selection changes for the side panel.

use log::debug;

use super::edge::PendingEdge;
use super::hit::HitTarget;
use super::model::Command;
use super::types::{ComponentId, EdgeId, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down(Point),
	Move(Point),
	Up(Point),
	/// Released after leaving the canvas.
	UpOutside,
}

impl PointerEvent {
	pub fn position(&self) -> Option<Point> {
		match *self {
			PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => Some(p),
			PointerEvent::UpOutside => None,
		}
	}
}

/// Entity surfaced for attribute editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
	Component(ComponentId),
	Edge(EdgeId),
}

#[derive(Clone, Debug)]
pub enum Effect {
	Apply(Command),
	Select(Selection),
	Deselect,
}

#[derive(Clone, Debug, Default)]
pub enum InteractionState {
	#[default]
	Idle,
	DraggingComponent {
		id: ComponentId,
		last: Point,
	},
	DrawingConnection {
		pending: PendingEdge,
	},
}

#[derive(Debug, Default)]
pub struct InteractionController {
	state: InteractionState,
}

impl InteractionController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &InteractionState {
		&self.state
	}

	pub fn is_idle(&self) -> bool {
		matches!(self.state, InteractionState::Idle)
	}

	/// The connection currently being drawn, if any.
	pub fn pending_edge(&self) -> Option<&PendingEdge> {
		match &self.state {
			InteractionState::DrawingConnection { pending } => Some(pending),
			_ => None,
		}
	}

	/// Start drawing a connection from `from` at `at`.
	///
	/// Only possible while idle; returns whether a draw was started.
	pub fn begin_connection(&mut self, from: ComponentId, at: Point) -> bool {
		if !self.is_idle() {
			debug!("connection from {} ignored, controller busy", from);
			return false;
		}
		self.state = InteractionState::DrawingConnection {
			pending: PendingEdge::new(from, at),
		};
		true
	}

	/// Drop any in-flight interaction without producing commands.
	pub fn reset(&mut self) {
		self.state = InteractionState::Idle;
	}

	pub fn handle(&mut self, event: PointerEvent, hit: Option<HitTarget>) -> Vec<Effect> {
		match event {
			PointerEvent::Down(p) => self.pointer_down(p, hit),
			PointerEvent::Move(p) => self.pointer_move(p),
			PointerEvent::Up(_) => self.pointer_up(hit),
			PointerEvent::UpOutside => self.pointer_up(None),
		}
	}

	fn pointer_down(&mut self, p: Point, hit: Option<HitTarget>) -> Vec<Effect> {
		match hit {
			Some(HitTarget::Edge(id)) => vec![Effect::Select(Selection::Edge(id))],
			Some(HitTarget::StartPort(id)) => {
				self.begin_connection(id, p);
				Vec::new()
			}
			Some(HitTarget::EndPort(_)) => Vec::new(),
			Some(HitTarget::Body(id)) if self.is_idle() => {
				self.state = InteractionState::DraggingComponent { id, last: p };
				vec![Effect::Select(Selection::Component(id))]
			}
			None if self.is_idle() => vec![Effect::Deselect],
			_ => Vec::new(),
		}
	}

	fn pointer_move(&mut self, p: Point) -> Vec<Effect> {
		match &mut self.state {
			InteractionState::DraggingComponent { id, last } => {
				let (dx, dy) = (p.x - last.x, p.y - last.y);
				*last = p;
				vec![Effect::Apply(Command::TranslateComponent { id: *id, dx, dy })]
			}
			InteractionState::DrawingConnection { pending } => {
				pending.set_end(p);
				Vec::new()
			}
			InteractionState::Idle => Vec::new(),
		}
	}

	fn pointer_up(&mut self, hit: Option<HitTarget>) -> Vec<Effect> {
		match std::mem::take(&mut self.state) {
			InteractionState::DrawingConnection { pending } => match hit {
				Some(HitTarget::EndPort(to)) => {
					vec![Effect::Apply(Command::BindEdge { pending, to })]
				}
				_ => {
					debug!("connection from {} discarded", pending.from());
					Vec::new()
				}
			},
			InteractionState::DraggingComponent { .. } | InteractionState::Idle => Vec::new(),
		}
	}
}
