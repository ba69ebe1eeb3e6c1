use leptos::prelude::*;

use crate::components::workspace::{
	Actions, EditorState, Inspector, Palette, SidePanel, Terminal, TerminalView, Toolbar,
	WorkspaceCanvas,
};
use crate::config::EditorConfig;
use crate::service::{Catalog, ServiceClient};

/// The pipeline editor: palette, canvas, side panel and terminal.
#[component]
pub fn Home() -> impl IntoView {
	let config = EditorConfig::from_build_env();
	let state = EditorState::shared(800.0, 600.0);
	let inspector = RwSignal::new(None::<Inspector>);
	let catalog = RwSignal::new(Catalog::default());
	let terminal = Terminal::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let actions = Actions {
		state: state.clone(),
		client: ServiceClient::new(config.clone()),
		config,
		terminal,
		catalog,
		inspector,
	};
	actions.refresh_catalog();

	view! {
		<div class="editor">
			<Toolbar actions=actions />
			<Palette state=state.clone() canvas_ref=canvas_ref />
			<div class="workspace">
				<WorkspaceCanvas state=state.clone() canvas_ref=canvas_ref inspector=inspector />
			</div>
			<SidePanel state=state inspector=inspector catalog=catalog />
			<div class="packages">
				<h3>"Packages"</h3>
				<ul>
					{move || {
						catalog
							.get()
							.packages
							.into_iter()
							.map(|p| view! { <li>{p}</li> })
							.collect_view()
					}}
				</ul>
			</div>
			<TerminalView terminal=terminal />
		</div>
	}
}
