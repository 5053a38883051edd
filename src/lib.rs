//! # Wirekit
//!
//! An interactive circuit-module canvas: place hardware modules, route
//! orthogonal wires between their ports, and check every connection for
//! electrical compatibility.
//!
//! ## Architecture
//!
//! Wirekit is organized as a workspace with multiple crates:
//!
//! 1. **wirekit-core** - Data model, circuit store, catalog, validator,
//!    netlist export
//! 2. **wirekit-editor** - Viewport transforms, interaction modes, drag and
//!    wire gestures, render paths
//! 3. **wirekit** - Facade library and the command-line tool
//!
//! The editor is headless: it consumes pointer/keyboard events and canvas
//! measurements from whatever shell embeds it and produces store mutations
//! and SVG path data. No GUI toolkit is linked here.

pub use wirekit_core::{
    netlist, validator, Catalog, CatalogModule, Circuit, CircuitError, ComponentKind, Connection,
    ConnectionStatus, Endpoint, Error, ModuleInstance, Point, Port, PortKind, PortSide,
    PropertyValue, Recommendation, Recommender, Result, RouteMode, Size, Verdict,
};

pub use wirekit_editor::{
    CanvasFrame, DragController, EditorState, InteractionMode, Modifiers, ModeMachine,
    PointerButton, PointerEvent, Viewport, WireDraft, ZoomDirection,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
