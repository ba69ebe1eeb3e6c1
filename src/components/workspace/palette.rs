use leptos::prelude::*;
use web_sys::{DragEvent, HtmlCanvasElement};

use super::component::canvas_position;
use super::state::SharedState;
use crate::graph::{Command, ComponentKind};

/// Draggable component kinds; dropping one on the canvas places it there.
#[component]
pub fn Palette(state: SharedState, canvas_ref: NodeRef<leptos::html::Canvas>) -> impl IntoView {
	let entries = ComponentKind::ALL
		.into_iter()
		.map(|kind| {
			let state = state.clone();
			let on_dragend = move |ev: DragEvent| {
				let Some(canvas) = canvas_ref.get() else {
					return;
				};
				let canvas: HtmlCanvasElement = canvas.into();
				let position = canvas_position(&canvas, &ev);
				let mut state = state.borrow_mut();
				let inside = (0.0..=state.width).contains(&position.x)
					&& (0.0..=state.height).contains(&position.y);
				if inside {
					state.apply(Command::AddComponent { kind, position });
				}
			};
			view! {
				<div class="box" draggable="true" on:dragend=on_dragend>
					{kind.name()}
				</div>
			}
		})
		.collect_view();

	view! { <nav class="palette">{entries}</nav> }
}
