use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::{Inspector, PanelUpdate, SharedState};
use super::surface::CanvasSurface;
use crate::graph::{Point, PointerEvent};

/// Pointer position relative to the canvas' top-left corner.
pub fn canvas_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

#[component]
pub fn WorkspaceCanvas(
	state: SharedState,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	inspector: RwSignal<Option<Inspector>>,
) -> impl IntoView {
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		state_init.borrow_mut().resize(w, h);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("canvas has no 2d context");
			return;
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			state_resize.borrow_mut().resize(nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			render::render(&state_anim.borrow(), &mut CanvasSurface::new(&ctx));
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let dispatch = move |state: &SharedState, ev: &MouseEvent, event: fn(Point) -> PointerEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let update = state.borrow_mut().pointer(event(canvas_position(&canvas, ev)));
		match update {
			Some(PanelUpdate::Show(view)) => inspector.set(Some(view)),
			Some(PanelUpdate::Hide) => inspector.set(None),
			None => {}
		}
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| dispatch(&state_md, &ev, PointerEvent::Down);

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| dispatch(&state_mm, &ev, PointerEvent::Move);

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| dispatch(&state_mu, &ev, PointerEvent::Up);

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		state_ml.borrow_mut().pointer(PointerEvent::UpOutside);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="workspace-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
