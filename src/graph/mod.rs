//! Graph editing core: entities, the model that owns them, pointer
//! interaction and the description format. Nothing here depends on the
//! browser.

pub mod controller;
pub mod description;
pub mod edge;
pub mod hit;
pub mod model;
pub mod node;
pub mod shape;
pub mod types;

pub use controller::{Effect, InteractionController, InteractionState, PointerEvent, Selection};
pub use description::{ComponentDescription, ConnectionDescription, Description};
pub use edge::{Decorations, Edge, EdgeAttributes, Marker, PendingEdge};
pub use hit::{HitTarget, hit_test};
pub use model::{Command, ComponentEdit, EdgeEdit, GraphModel};
pub use node::{Behavior, Caption, Component, join_params, split_params};
pub use shape::{ComponentKind, Shape};
pub use types::{CanvasSize, ComponentId, EdgeId, Point, Segment};
