//! Toolbar actions: catalog refresh, compile, save and open.
//!
//! Service replies only touch the catalog list, the terminal and downloads;
//! the graph is changed synchronously by `open` alone.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::files::{download, pick_text_file};
use super::state::{Inspector, SharedState};
use super::terminal::Terminal;
use crate::config::EditorConfig;
use crate::service::{Catalog, ServiceClient};

/// Everything the toolbar buttons act on.
#[derive(Clone)]
pub struct Actions {
	pub state: SharedState,
	pub client: ServiceClient,
	pub config: EditorConfig,
	pub terminal: Terminal,
	pub catalog: RwSignal<Catalog>,
	pub inspector: RwSignal<Option<Inspector>>,
}

impl Actions {
	pub fn refresh_catalog(&self) {
		self.terminal.writeln("Refreshing...");
		let (client, catalog, terminal) = (self.client.clone(), self.catalog, self.terminal);
		spawn_local(async move {
			match client.catalog().await {
				Ok(listing) => {
					catalog.set(listing);
					terminal.writeln("Refreshed!");
				}
				Err(e) => e.lines().into_iter().for_each(|l| terminal.writeln(l)),
			}
		});
	}

	pub fn compile(&self) {
		self.terminal.writeln("Compiling...");
		let description = self.state.borrow().description(false);
		let (client, terminal) = (self.client.clone(), self.terminal);
		let file_name = self.config.artifact_file_name.clone();
		spawn_local(async move {
			match client.compile(&description).await {
				Ok(artifact) => match download(&file_name, &artifact, "application/octet-stream") {
					Ok(()) => terminal.writeln("Compiled!"),
					Err(e) => terminal.writeln(format!("Cannot offer artifact: {e:?}")),
				},
				Err(e) => e.lines().into_iter().for_each(|l| terminal.writeln(l)),
			}
		});
	}

	pub fn save(&self) {
		let json = self.state.borrow().description(true).to_json();
		let result = match json {
			Ok(json) => download(&self.config.save_file_name, json.as_bytes(), "application/json;charset=utf-8")
				.map_err(|e| format!("{e:?}")),
			Err(e) => Err(e.to_string()),
		};
		if let Err(e) = result {
			self.terminal.writeln(format!("Cannot save workspace: {e}"));
		}
	}

	pub fn open(&self) {
		let (state, terminal, inspector) = (self.state.clone(), self.terminal, self.inspector);
		let picked = pick_text_file(move |text| match state.borrow_mut().load(&text) {
			Ok(()) => {
				inspector.set(None);
				terminal.writeln("Workspace opened");
			}
			Err(e) => terminal.writeln(format!("Cannot open workspace: {e}")),
		});
		if let Err(e) = picked {
			self.terminal.writeln(format!("Cannot open file picker: {e:?}"));
		}
	}
}

#[component]
pub fn Toolbar(actions: Actions) -> impl IntoView {
	let (a_refresh, a_compile, a_save, a_open) =
		(actions.clone(), actions.clone(), actions.clone(), actions);

	view! {
		<header class="toolbar">
			<button on:click=move |_| a_refresh.refresh_catalog()>"Refresh packages"</button>
			<button on:click=move |_| a_compile.compile()>"Compile"</button>
			<button on:click=move |_| a_save.save()>"Save"</button>
			<button on:click=move |_| a_open.open()>"Open"</button>
		</header>
	}
}
