use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::error::DescriptionError;
use crate::graph::{
	CanvasSize, Command, ComponentId, ComponentKind, Description, EdgeId, Effect, GraphModel,
	InteractionController, PointerEvent, Selection, hit_test, join_params,
};

/// Editor state shared between the canvas, the side panel and the toolbar.
pub type SharedState = Rc<RefCell<EditorState>>;

/// Snapshot of the selected entity, shown and edited by the side panel.
#[derive(Clone, Debug, PartialEq)]
pub enum Inspector {
	Component {
		id: ComponentId,
		kind: ComponentKind,
		name: String,
		async_degree: u32,
		function: Option<String>,
		function_params: String,
		pack_size: Option<u32>,
	},
	Edge {
		id: EdgeId,
		route: String,
		buffer: u32,
		priority: u32,
		condition_function: String,
		condition_params: String,
	},
}

impl Inspector {
	pub fn selection(&self) -> Selection {
		match *self {
			Inspector::Component { id, .. } => Selection::Component(id),
			Inspector::Edge { id, .. } => Selection::Edge(id),
		}
	}
}

/// What the side panel should do after a pointer event.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelUpdate {
	Show(Inspector),
	Hide,
}

pub struct EditorState {
	pub graph: GraphModel,
	pub controller: InteractionController,
	pub width: f64,
	pub height: f64,
}

impl EditorState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			graph: GraphModel::new(),
			controller: InteractionController::new(),
			width,
			height,
		}
	}

	pub fn shared(width: f64, height: f64) -> SharedState {
		Rc::new(RefCell::new(Self::new(width, height)))
	}

	pub fn canvas(&self) -> CanvasSize {
		CanvasSize::new(self.width, self.height)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn apply(&mut self, command: Command) {
		self.graph.apply(command);
	}

	/// Route a pointer event through hit testing and the controller, then
	/// apply the resulting commands. The last selection change, if any, is
	/// returned for the side panel.
	pub fn pointer(&mut self, event: PointerEvent) -> Option<PanelUpdate> {
		let hit = event.position().and_then(|p| hit_test(&self.graph, p));
		let mut update = None;
		for effect in self.controller.handle(event, hit) {
			match effect {
				Effect::Apply(command) => self.graph.apply(command),
				Effect::Select(selection) => {
					update = self.inspect(selection).map(PanelUpdate::Show);
				}
				Effect::Deselect => update = Some(PanelUpdate::Hide),
			}
		}
		update
	}

	pub fn inspect(&self, selection: Selection) -> Option<Inspector> {
		match selection {
			Selection::Component(id) => {
				let c = self.graph.component(id)?;
				Some(Inspector::Component {
					id,
					kind: c.kind(),
					name: c.name().to_owned(),
					async_degree: c.async_degree(),
					function: c.function().map(str::to_owned),
					function_params: c.function_params().map(join_params).unwrap_or_default(),
					pack_size: c.pack_size(),
				})
			}
			Selection::Edge(id) => {
				let e = self.graph.edge(id)?;
				let name = |id: ComponentId| self.graph.component(id).map(|c| c.name().to_owned()).unwrap_or_default();
				Some(Inspector::Edge {
					id,
					route: format!("{} -> {}", name(e.from()), name(e.to())),
					buffer: e.buffer(),
					priority: e.priority(),
					condition_function: e.condition_function().to_owned(),
					condition_params: join_params(e.condition_params()),
				})
			}
		}
	}

	pub fn description(&self, include_positions: bool) -> Description {
		self.graph.to_description(self.canvas(), include_positions)
	}

	/// Replace the graph with a saved workspace. On error nothing changes.
	pub fn load(&mut self, text: &str) -> Result<(), DescriptionError> {
		let description = Description::from_json(text)?;
		self.graph.load_description(&description, self.canvas())?;
		self.controller.reset();
		info!("workspace replaced");
		Ok(())
	}
}
