//! # Wirekit Editor
//!
//! The canvas interaction engine: everything between raw pointer/keyboard
//! input and the circuit store.
//!
//! ## Core Components
//!
//! - [`Viewport`] - pan/zoom state and the only screen↔world conversion
//! - `geometry` - port layout and absolute pin positions
//! - [`ModeMachine`] - the mutually-exclusive interaction-mode machine
//! - [`DragController`] - live component relocation with commit-on-release
//! - [`WireDraft`] - click-to-route orthogonal wiring with live preview
//! - `path` - SVG path data and waypoint re-projection for rendering
//! - [`EditorState`] - the facade that routes events to the active gesture
//!
//! ## Architecture
//!
//! ```text
//! pointer/keyboard events
//!   └── EditorState (facade)
//!         ├── Viewport (screen → world)
//!         ├── ModeMachine (which gesture may run)
//!         ├── DragController / WireDraft (ephemeral state)
//!         └── Circuit store (written only at gesture boundaries)
//! ```
//!
//! Rendering reads the store plus the ephemeral gesture state; it never
//! writes either.

pub mod drag;
pub mod editor;
pub mod geometry;
pub mod mode;
pub mod path;
pub mod viewport;
pub mod wiring;

pub use drag::DragController;
pub use editor::{EditorState, Modifiers, PointerButton, PointerEvent};
pub use geometry::{component_dimensions, port_absolute_position, port_offset};
pub use mode::{InteractionMode, ModeMachine};
pub use viewport::{CanvasFrame, Viewport, ZoomDirection};
pub use wiring::{simplify_orthogonal, WireCommit, WireDraft};
