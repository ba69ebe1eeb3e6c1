mod component;
mod files;
mod palette;
mod panel;
mod render;
mod state;
mod surface;
mod terminal;
mod toolbar;

pub use component::WorkspaceCanvas;
pub use palette::Palette;
pub use panel::SidePanel;
pub use state::{EditorState, Inspector};
pub use terminal::{Terminal, TerminalView};
pub use toolbar::{Actions, Toolbar};
