use leptos::prelude::*;

/// Append-only log shown under the workspace.
#[derive(Clone, Copy)]
pub struct Terminal {
	lines: RwSignal<Vec<String>>,
}

impl Terminal {
	pub fn new() -> Self {
		Self {
			lines: RwSignal::new(Vec::new()),
		}
	}

	pub fn writeln(&self, line: impl Into<String>) {
		let line = line.into();
		log::info!("{line}");
		self.lines.update(|lines| lines.push(line));
	}
}

impl Default for Terminal {
	fn default() -> Self {
		Self::new()
	}
}

#[component]
pub fn TerminalView(terminal: Terminal) -> impl IntoView {
	view! {
		<pre class="terminal">
			{move || {
				terminal
					.lines
					.get()
					.into_iter()
					.map(|line| view! { <div>{line}</div> })
					.collect_view()
			}}
		</pre>
	}
}
