//! Normalized JSON description of a graph.
//!
//! Two modes share one format: the position-preserving form used for save
//! and load carries canvas-normalized coordinates, the compile-submission
//! form omits them. Connections are always ordered by ascending priority.

use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};

use super::edge::EdgeAttributes;
use super::model::GraphModel;
use super::node::Component;
use super::shape::ComponentKind;
use super::types::{CanvasSize, ComponentId, Point};
use crate::error::DescriptionError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
	pub components: Vec<ComponentDescription>,
	pub connections: Vec<ConnectionDescription>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescription {
	pub name: String,
	#[serde(rename = "type")]
	pub kind: ComponentKind,
	#[serde(rename = "async")]
	pub async_degree: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pack_size: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub function: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub function_parameters: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub x: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub y: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDescription {
	pub from: usize,
	pub to: usize,
	pub buffer: u32,
	pub priority: u32,
	#[serde(default)]
	pub condition_function: String,
	#[serde(default)]
	pub function_parameters: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from_pos: Option<[f64; 2]>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub to_pos: Option<[f64; 2]>,
}

impl Description {
	pub fn from_json(text: &str) -> Result<Self, DescriptionError> {
		Ok(serde_json::from_str(text)?)
	}

	pub fn to_json(&self) -> Result<String, DescriptionError> {
		Ok(serde_json::to_string(self)?)
	}

	/// Serialize `graph`. Pending (unbound) edges live in the interaction
	/// controller and are never part of a description.
	pub fn from_graph(graph: &GraphModel, canvas: CanvasSize, include_positions: bool) -> Self {
		let id_map: HashMap<ComponentId, usize> = graph
			.components()
			.iter()
			.enumerate()
			.map(|(index, c)| (c.id(), index))
			.collect();

		let components = graph
			.components()
			.iter()
			.map(|c| {
				let mut desc = ComponentDescription::from_component(c);
				if include_positions {
					let [x, y] = canvas.normalize(c.position());
					desc.x = Some(x);
					desc.y = Some(y);
				}
				desc
			})
			.collect();

		let mut connections: Vec<ConnectionDescription> = graph
			.edges()
			.iter()
			.filter_map(|e| {
				let (from, to) = (*id_map.get(&e.from())?, *id_map.get(&e.to())?);
				Some(ConnectionDescription {
					from,
					to,
					buffer: e.buffer(),
					priority: e.priority(),
					condition_function: e.condition_function().to_owned(),
					function_parameters: e.condition_params().to_vec(),
					from_pos: include_positions.then(|| canvas.normalize(e.start())),
					to_pos: include_positions.then(|| canvas.normalize(e.end())),
				})
			})
			.collect();
		connections.sort_by_key(|c| c.priority);

		Self {
			components,
			connections,
		}
	}

	/// Check that every connection refers to existing components of suitable
	/// kinds and that every component carries a position.
	pub fn validate(&self) -> Result<(), DescriptionError> {
		for (index, c) in self.components.iter().enumerate() {
			if c.x.is_none() || c.y.is_none() {
				return Err(DescriptionError::MissingPosition { index });
			}
		}
		for (index, conn) in self.connections.iter().enumerate() {
			let from = self.component_at(index, conn.from)?;
			let to = self.component_at(index, conn.to)?;
			if from.kind.shape().start_ports.is_empty() {
				return Err(DescriptionError::NoStartPort {
					index,
					kind: from.kind,
				});
			}
			if to.kind.shape().end_ports.is_empty() {
				return Err(DescriptionError::NoEndPort { index, kind: to.kind });
			}
		}
		Ok(())
	}

	fn component_at(&self, connection: usize, component: usize) -> Result<&ComponentDescription, DescriptionError> {
		self.components
			.get(component)
			.ok_or(DescriptionError::UnknownComponent {
				connection,
				component,
				count: self.components.len(),
			})
	}
}

impl ComponentDescription {
	fn from_component(c: &Component) -> Self {
		Self {
			name: c.name().to_owned(),
			kind: c.kind(),
			async_degree: c.async_degree(),
			pack_size: c.pack_size(),
			function: c.function().map(str::to_owned),
			function_parameters: c.function_params().map(<[String]>::to_vec),
			x: None,
			y: None,
		}
	}

	/// Copy the described attributes onto a freshly created component.
	pub(crate) fn apply_to(&self, component: &mut Component) {
		component.set_name(self.name.clone());
		component.set_async_degree(self.async_degree);
		component.set_pack_size(self.pack_size.unwrap_or(0));
		component.set_function(self.function.clone().unwrap_or_default());
		if let Some(params) = &self.function_parameters {
			component.set_function_params(params.clone());
		}
	}
}

impl GraphModel {
	/// Replace the whole graph with `desc`.
	///
	/// The description is validated first; on error the current graph is
	/// left untouched.
	pub fn load_description(&mut self, desc: &Description, canvas: CanvasSize) -> Result<(), DescriptionError> {
		desc.validate()?;
		self.clear();

		let mut ids = Vec::with_capacity(desc.components.len());
		for c in &desc.components {
			let position = canvas.denormalize(c.x.unwrap_or_default(), c.y.unwrap_or_default());
			ids.push(self.add_component(c.kind, position, Some(c)).id());
		}

		for conn in &desc.connections {
			let (from, to) = (ids[conn.from], ids[conn.to]);
			let start = match conn.from_pos {
				Some([x, y]) => canvas.denormalize(x, y),
				None => self.anchor(from, Component::start_anchor),
			};
			let end = match conn.to_pos {
				Some([x, y]) => canvas.denormalize(x, y),
				None => self.anchor(to, Component::end_anchor),
			};
			let attributes = EdgeAttributes {
				buffer: conn.buffer,
				priority: conn.priority,
				condition_function: conn.condition_function.clone(),
				condition_params: conn.function_parameters.clone(),
			};
			self.push_edge(from, to, start, end, attributes);
		}

		info!(
			"loaded {} components and {} connections",
			self.components().len(),
			self.edges().len()
		);
		Ok(())
	}

	pub fn from_description(desc: &Description, canvas: CanvasSize) -> Result<Self, DescriptionError> {
		let mut graph = Self::new();
		graph.load_description(desc, canvas)?;
		Ok(graph)
	}

	pub fn to_description(&self, canvas: CanvasSize, include_positions: bool) -> Description {
		Description::from_graph(self, canvas, include_positions)
	}

	fn anchor(&self, id: ComponentId, port: fn(&Component) -> Option<Point>) -> Point {
		self.component(id).and_then(port).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::edge::PendingEdge;
	use crate::graph::model::{Command, ComponentEdit, EdgeEdit};
	use crate::graph::node::split_params;

	const CANVAS: CanvasSize = CanvasSize {
		width: 1000.0,
		height: 500.0,
	};

	fn pipeline() -> GraphModel {
		let mut g = GraphModel::new();
		let s = g.add_component(ComponentKind::Source, Point::new(100.0, 100.0), None).id();
		let w = g.add_component(ComponentKind::Worker, Point::new(300.0, 100.0), None).id();
		let a = g.add_component(ComponentKind::Aggregator, Point::new(500.0, 250.0), None).id();
		let c = g.add_component(ComponentKind::Collector, Point::new(700.0, 250.0), None).id();

		g.apply(Command::EditComponent(w, ComponentEdit::Function("double".into())));
		g.apply(Command::EditComponent(w, ComponentEdit::FunctionParams(split_params("2$x"))));
		g.apply(Command::EditComponent(a, ComponentEdit::PackSize(16)));

		let sw = g.bind_edge(PendingEdge::new(s, Point::ZERO), w).unwrap();
		let wa = g.bind_edge(PendingEdge::new(w, Point::ZERO), a).unwrap();
		let ac = g.bind_edge(PendingEdge::new(a, Point::ZERO), c).unwrap();
		g.apply(Command::EditEdge(sw, EdgeEdit::Priority(3)));
		g.apply(Command::EditEdge(wa, EdgeEdit::Priority(2)));
		g.apply(Command::EditEdge(ac, EdgeEdit::Buffer(8)));
		g.apply(Command::EditEdge(ac, EdgeEdit::ConditionFunction("isEven".into())));
		g
	}

	#[test]
	fn compile_form_has_no_coordinates() {
		let json = pipeline().to_description(CANVAS, false).to_json().unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert!(value["components"][0].get("x").is_none());
		assert!(value["connections"][0].get("from_pos").is_none());
		assert_eq!(value["components"][0]["type"], "source");
		assert_eq!(value["components"][2]["pack_size"], 16);
		assert!(value["components"][2].get("function").is_none());
		assert_eq!(
			value["components"][1]["function_parameters"],
			serde_json::json!(["2", "x"])
		);
	}

	#[test]
	fn connections_are_sorted_by_priority() {
		let desc = pipeline().to_description(CANVAS, false);
		let priorities: Vec<u32> = desc.connections.iter().map(|c| c.priority).collect();
		assert_eq!(priorities, vec![1, 2, 3]);
		// indices refer to serialization order, not ids
		assert_eq!((desc.connections[0].from, desc.connections[0].to), (2, 3));
	}

	#[test]
	fn positions_are_normalized() {
		let desc = pipeline().to_description(CANVAS, true);
		assert_eq!((desc.components[0].x, desc.components[0].y), (Some(0.1), Some(0.2)));
		let first = &desc.connections[2];
		assert_eq!(first.from_pos, Some([0.15, 0.2]));
		assert_eq!(first.to_pos, Some([0.27, 0.2]));
	}

	#[test]
	fn index_map_skips_removed_components() {
		let mut g = pipeline();
		g.remove_component(ComponentId(0));
		let desc = g.to_description(CANVAS, false);
		assert_eq!(desc.components.len(), 3);
		assert_eq!(desc.components[0].name, "Worker_1");
		let wa = desc.connections.iter().find(|c| c.priority == 2).unwrap();
		assert_eq!((wa.from, wa.to), (0, 1));
	}

	#[test]
	fn round_trip_restores_attributes() {
		let original = pipeline();
		let json = original.to_description(CANVAS, true).to_json().unwrap();
		let restored = GraphModel::from_description(&Description::from_json(&json).unwrap(), CANVAS).unwrap();

		assert_eq!(restored.components().len(), 4);
		assert_eq!(restored.edges().len(), 3);
		for (a, b) in original.components().iter().zip(restored.components()) {
			assert_eq!(a.name(), b.name());
			assert_eq!(a.kind(), b.kind());
			assert_eq!(a.behavior(), b.behavior());
			assert!(a.position().distance(b.position()) < 1e-9);
		}
		let agg = &restored.components()[2];
		assert_eq!(agg.pack_size(), Some(16));

		// edges come back in priority order
		let cond = &restored.edges()[0];
		assert_eq!(cond.condition_function(), "isEven");
		assert_eq!(cond.buffer(), 8);
		assert!(cond.decorations().marker.is_some());
		assert_eq!(restored.edges()[2].decorations().ticks.len(), 3);
	}

	#[test]
	fn missing_edge_positions_fall_back_to_ports() {
		let text = r#"{
			"components": [
				{"name": "in", "type": "source", "async": 1, "function": "gen", "function_parameters": [""], "x": 0.1, "y": 0.2},
				{"name": "out", "type": "collector", "async": 2, "function": "", "x": 0.5, "y": 0.2}
			],
			"connections": [
				{"from": 0, "to": 1, "buffer": 4, "priority": 1, "condition_function": "", "function_parameters": [""]}
			]
		}"#;
		let g = GraphModel::from_description(&Description::from_json(text).unwrap(), CANVAS).unwrap();
		let e = &g.edges()[0];
		assert_eq!(e.start(), Point::new(150.0, 100.0));
		assert_eq!(e.end(), Point::new(470.0, 100.0));
		assert_eq!(g.components()[1].caption().degree, "2");
	}

	#[test]
	fn invalid_description_leaves_graph_untouched() {
		let mut g = pipeline();
		let mut desc = g.to_description(CANVAS, true);
		desc.connections[0].to = 17;
		let err = g.load_description(&desc, CANVAS).unwrap_err();
		assert!(matches!(err, DescriptionError::UnknownComponent { component: 17, .. }));
		assert_eq!(g.components().len(), 4);

		let compile_form = g.to_description(CANVAS, false);
		assert!(matches!(
			g.load_description(&compile_form, CANVAS),
			Err(DescriptionError::MissingPosition { index: 0 })
		));
	}

	#[test]
	fn connection_into_source_is_rejected() {
		let mut desc = pipeline().to_description(CANVAS, true);
		desc.connections[0].to = 0;
		assert!(matches!(
			desc.validate(),
			Err(DescriptionError::NoEndPort {
				kind: ComponentKind::Source,
				..
			})
		));
	}

	#[test]
	fn malformed_json_is_reported() {
		assert!(matches!(Description::from_json("{\"components\": ["), Err(DescriptionError::Parse(_))));
	}
}
