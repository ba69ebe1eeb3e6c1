//! Side panel for editing the selected component or edge.
//!
//! The panel renders from an [`Inspector`] snapshot and only changes the
//! graph by dispatching commands.

use leptos::prelude::*;

use super::state::{Inspector, SharedState};
use crate::graph::{Command, ComponentEdit, EdgeEdit, Selection, split_params};
use crate::service::Catalog;

#[derive(Clone)]
struct Dispatch {
	state: SharedState,
	inspector: RwSignal<Option<Inspector>>,
}

impl Dispatch {
	fn selection(&self) -> Option<Selection> {
		self.inspector.with_untracked(|i| i.as_ref().map(Inspector::selection))
	}

	fn component(&self, edit: ComponentEdit) {
		if let Some(Selection::Component(id)) = self.selection() {
			self.state.borrow_mut().apply(Command::EditComponent(id, edit));
		}
	}

	fn edge(&self, edit: EdgeEdit) {
		if let Some(Selection::Edge(id)) = self.selection() {
			self.state.borrow_mut().apply(Command::EditEdge(id, edit));
		}
	}

	fn remove(&self) {
		let command = match self.selection() {
			Some(Selection::Component(id)) => Command::RemoveComponent(id),
			Some(Selection::Edge(id)) => Command::RemoveEdge(id),
			None => return,
		};
		self.state.borrow_mut().apply(command);
		self.inspector.set(None);
	}
}

fn parse_count(ev: &web_sys::Event) -> Option<u32> {
	event_target_value(ev).trim().parse().ok()
}

fn function_options(catalog: RwSignal<Catalog>) -> impl IntoView {
	view! {
		<option value="">"(none)"</option>
		{move || {
			catalog
				.get()
				.functions
				.into_iter()
				.map(|f| view! { <option value=f.clone()>{f.clone()}</option> })
				.collect_view()
		}}
	}
}

#[component]
pub fn SidePanel(
	state: SharedState,
	inspector: RwSignal<Option<Inspector>>,
	catalog: RwSignal<Catalog>,
) -> impl IntoView {
	let dispatch = Dispatch { state, inspector };

	let component = move || match inspector.get() {
		Some(Inspector::Component {
			kind,
			name,
			async_degree,
			function,
			function_params,
			pack_size,
			..
		}) => Some((kind, name, async_degree, function, function_params, pack_size)),
		_ => None,
	};
	let edge = move || match inspector.get() {
		Some(Inspector::Edge {
			route,
			buffer,
			priority,
			condition_function,
			condition_params,
			..
		}) => Some((route, buffer, priority, condition_function, condition_params)),
		_ => None,
	};
	let shown = |visible: bool| if visible { "block" } else { "none" };

	let (d_name, d_async, d_func, d_params, d_pack) = (
		dispatch.clone(),
		dispatch.clone(),
		dispatch.clone(),
		dispatch.clone(),
		dispatch.clone(),
	);
	let (d_buffer, d_priority, d_cond, d_cond_params) = (
		dispatch.clone(),
		dispatch.clone(),
		dispatch.clone(),
		dispatch.clone(),
	);
	let (d_remove_component, d_remove_edge) = (dispatch.clone(), dispatch);

	view! {
		<aside class="side-panel">
			<section class="component-settings" style:display=move || shown(component().is_some())>
				<h3>{move || component().map(|c| c.0.name()).unwrap_or_default()}</h3>
				<label>"Name"
					<input
						type="text"
						prop:value=move || component().map(|c| c.1).unwrap_or_default()
						on:input=move |ev| d_name.component(ComponentEdit::Name(event_target_value(&ev)))
					/>
				</label>
				<label>"Async"
					<input
						type="number"
						min="1"
						prop:value=move || component().map(|c| c.2.to_string()).unwrap_or_default()
						on:input=move |ev| {
							if let Some(n) = parse_count(&ev) {
								d_async.component(ComponentEdit::AsyncDegree(n));
							}
						}
					/>
				</label>
				<div
					class="function-settings"
					style:display=move || shown(component().is_some_and(|c| c.3.is_some()))
				>
					<label>"Function"
						<select
							prop:value=move || component().and_then(|c| c.3).unwrap_or_default()
							on:change=move |ev| d_func.component(ComponentEdit::Function(event_target_value(&ev)))
						>
							{function_options(catalog)}
						</select>
					</label>
					<label>"Parameters"
						<input
							type="text"
							prop:value=move || component().map(|c| c.4).unwrap_or_default()
							on:input=move |ev| {
								d_params.component(ComponentEdit::FunctionParams(split_params(&event_target_value(&ev))))
							}
						/>
					</label>
				</div>
				<div
					class="aggregation-settings"
					style:display=move || shown(component().is_some_and(|c| c.5.is_some()))
				>
					<label>"Pack size"
						<input
							type="number"
							min="0"
							prop:value=move || component().and_then(|c| c.5).map(|n| n.to_string()).unwrap_or_default()
							on:input=move |ev| {
								if let Some(n) = parse_count(&ev) {
									d_pack.component(ComponentEdit::PackSize(n));
								}
							}
						/>
					</label>
				</div>
				<button on:click=move |_| d_remove_component.remove()>"Remove"</button>
			</section>

			<section class="edge-settings" style:display=move || shown(edge().is_some())>
				<h3>{move || edge().map(|e| e.0).unwrap_or_default()}</h3>
				<label>"Buffer"
					<input
						type="number"
						min="0"
						prop:value=move || edge().map(|e| e.1.to_string()).unwrap_or_default()
						on:input=move |ev| {
							if let Some(n) = parse_count(&ev) {
								d_buffer.edge(EdgeEdit::Buffer(n));
							}
						}
					/>
				</label>
				<label>"Priority"
					<input
						type="number"
						min="1"
						prop:value=move || edge().map(|e| e.2.to_string()).unwrap_or_default()
						on:input=move |ev| {
							if let Some(n) = parse_count(&ev) {
								d_priority.edge(EdgeEdit::Priority(n));
							}
						}
					/>
				</label>
				<label>"Condition"
					<select
						prop:value=move || edge().map(|e| e.3).unwrap_or_default()
						on:change=move |ev| d_cond.edge(EdgeEdit::ConditionFunction(event_target_value(&ev)))
					>
						{function_options(catalog)}
					</select>
				</label>
				<label>"Parameters"
					<input
						type="text"
						prop:value=move || edge().map(|e| e.4).unwrap_or_default()
						on:input=move |ev| {
							d_cond_params.edge(EdgeEdit::ConditionParams(split_params(&event_target_value(&ev))))
						}
					/>
				</label>
				<button on:click=move |_| d_remove_edge.remove()>"Remove"</button>
			</section>
		</aside>
	}
}
