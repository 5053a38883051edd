//! Editor facade.
//!
//! Owns the circuit store, the viewport, the mode machine, and the two
//! gesture controllers, and routes pointer/keyboard events between them.
//! The embedding shell delivers events per target (component, port, empty
//! canvas) the way its hit-testing resolves them, along with a fresh
//! [`CanvasFrame`] measurement; this type holds no screen-geometry cache.
//!
//! Input that violates a gesture's contract (wrong mode, wrong button,
//! unknown target) is a silent no-op, not an error. Errors are reserved
//! for catalog/file problems.

use tracing::{debug, info, warn};

use wirekit_core::validator::validate_circuit;
use wirekit_core::{Catalog, Circuit, Endpoint, Point, Result};

use crate::drag::DragController;
use crate::geometry::{component_dimensions, port_absolute_position};
use crate::mode::{InteractionMode, ModeMachine};
use crate::viewport::{CanvasFrame, Viewport, ZoomDirection};
use crate::wiring::WireDraft;

/// Pointer button identity, as reported by the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Ctrl, or Cmd on macOS.
    pub ctrl: bool,
}

/// A pointer press in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::default(),
        }
    }
}

/// Top-level editor state: store, view transform, mode machine, and the
/// ephemeral gesture state of the two interactive controllers.
#[derive(Debug)]
pub struct EditorState {
    circuit: Circuit,
    catalog: Catalog,
    viewport: Viewport,
    modes: ModeMachine,
    drag: DragController,
    draft: Option<WireDraft>,
    selection: Option<String>,
    /// Last pointer position while panning, plus the mode to restore when
    /// the pan button is released.
    pan_anchor: Option<(Point, InteractionMode)>,
}

impl EditorState {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_circuit(catalog, Circuit::new())
    }

    pub fn with_circuit(catalog: Catalog, circuit: Circuit) -> Self {
        Self {
            circuit,
            catalog,
            viewport: Viewport::new(),
            modes: ModeMachine::new(),
            drag: DragController::new(),
            draft: None,
            selection: None,
            pan_anchor: None,
        }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> InteractionMode {
        self.modes.mode()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn wire_draft(&self) -> Option<&WireDraft> {
        self.draft.as_ref()
    }

    /// The position to draw a component at: the drag's live position while
    /// that component is in flight, otherwise the committed one.
    pub fn component_position(&self, instance_id: &str) -> Option<Point> {
        if let Some(live) = self.drag.live_position(instance_id) {
            return Some(live);
        }
        self.circuit.component(instance_id).map(|c| c.position)
    }

    /// Transitions to `mode`, cancelling the outgoing mode's gesture.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if let Some(exited) = self.modes.set(mode) {
            self.cancel_gesture(exited);
        }
    }

    /// Keyboard mode toggles: `w` wire, `m` move, `x` delete. Pressing the
    /// active mode's key returns to idle. Other keys are ignored.
    pub fn on_key(&mut self, key: char) {
        let target = match key {
            'w' => InteractionMode::Wire,
            'm' => InteractionMode::Move,
            'x' => InteractionMode::Delete,
            _ => return,
        };
        if let Some(exited) = self.modes.toggle(target) {
            self.cancel_gesture(exited);
        }
    }

    /// Escape cancels an in-progress wire draft first, staying armed in
    /// wire mode; with no draft it drops back to idle.
    pub fn on_escape(&mut self) {
        if self.draft.take().is_some() {
            debug!("wire draft discarded");
            return;
        }
        self.set_mode(InteractionMode::Idle);
    }

    /// Press on a component housing.
    pub fn on_component_pressed(
        &mut self,
        frame: &CanvasFrame,
        instance_id: &str,
        event: PointerEvent,
    ) {
        let Some(component) = self.circuit.component(instance_id) else {
            warn!(instance_id, "press on unknown component ignored");
            return;
        };
        self.selection = Some(instance_id.to_string());

        match self.modes.mode() {
            InteractionMode::Delete if event.button == PointerButton::Primary => {
                self.selection = None;
                if let Ok(cascaded) = self.circuit.remove_component(instance_id) {
                    info!(instance_id, cascaded, "deleted component");
                }
            }
            InteractionMode::Move
                if event.button == PointerButton::Primary && !event.modifiers.ctrl =>
            {
                let position = component.position;
                let dims = component_dimensions(&component.module);
                let world = self.viewport.to_world(frame, event.position);
                self.drag.begin(instance_id, position, dims, world);
            }
            _ => {}
        }
    }

    /// Click on a port pin. Only meaningful in wire mode.
    pub fn on_port_clicked(&mut self, instance_id: &str, port_id: &str) {
        if !self.modes.is(InteractionMode::Wire) {
            return;
        }
        let Some(pin) = self
            .circuit
            .component(instance_id)
            .and_then(|c| port_absolute_position(c, port_id))
        else {
            warn!(instance_id, port_id, "wire click on unknown port ignored");
            return;
        };

        match self.draft.take() {
            None => {
                self.draft = Some(WireDraft::begin(
                    Endpoint::new(instance_id, port_id),
                    pin,
                ));
            }
            Some(draft) => {
                // Closing on the start component is the cancel gesture.
                if let Some(commit) = draft.close(Endpoint::new(instance_id, port_id), pin) {
                    if let Err(err) = self.circuit.add_connection(
                        commit.from,
                        commit.to,
                        commit.waypoints,
                        commit.mode,
                    ) {
                        warn!(%err, "wire commit rejected");
                    }
                }
            }
        }
    }

    /// Press on empty canvas.
    pub fn on_canvas_pressed(&mut self, frame: &CanvasFrame, event: PointerEvent) {
        let pans = event.button == PointerButton::Middle
            || (event.button == PointerButton::Primary && event.modifiers.ctrl);
        if pans {
            let resume = self.modes.mode();
            if resume != InteractionMode::Pan {
                self.modes.set(InteractionMode::Pan);
                self.pan_anchor = Some((event.position, resume));
            }
            return;
        }
        if event.button != PointerButton::Primary {
            return;
        }

        if self.modes.is(InteractionMode::Wire) {
            if let Some(draft) = self.draft.as_mut() {
                draft.add_bend(self.viewport.to_world(frame, event.position));
                return;
            }
        }
        self.selection = None;
    }

    /// Pointer motion, routed to whichever gesture is live.
    pub fn on_pointer_moved(&mut self, frame: &CanvasFrame, position: Point) {
        if let Some((anchor, resume)) = self.pan_anchor {
            self.viewport
                .pan_by(position.x - anchor.x, position.y - anchor.y);
            self.pan_anchor = Some((position, resume));
            return;
        }
        let world = self.viewport.to_world(frame, position);
        if self.drag.is_active() {
            self.drag.update(world, self.viewport.visible_bounds(frame));
        }
        if let Some(draft) = self.draft.as_mut() {
            draft.set_cursor(world);
        }
    }

    /// Pointer release: ends a pan or commits an in-flight drag.
    pub fn on_pointer_released(&mut self) {
        if let Some((_, resume)) = self.pan_anchor.take() {
            self.modes.set(resume);
            return;
        }
        if let Some((instance_id, position)) = self.drag.end() {
            // The id came from a live drag, so the commit cannot miss.
            if let Err(err) = self.circuit.update_component_position(&instance_id, position) {
                warn!(%err, "drag commit rejected");
            }
        }
    }

    /// Wheel zoom anchored at the cursor.
    pub fn on_zoom(&mut self, frame: &CanvasFrame, cursor: Point, direction: ZoomDirection) {
        self.viewport.zoom_at(frame, cursor, direction);
    }

    /// Pans the view so `instance_id` sits at the canvas center.
    pub fn focus_component(&mut self, frame: &CanvasFrame, instance_id: &str) {
        let Some(component) = self.circuit.component(instance_id) else {
            return;
        };
        let dims = component_dimensions(&component.module);
        let center = Point::new(
            component.position.x + dims.width / 2.0,
            component.position.y + dims.height / 2.0,
        );
        self.viewport.center_on(frame, center);
    }

    /// Drops a catalog module onto the canvas, centered under the cursor.
    /// Returns the new instance id.
    pub fn drop_module(
        &mut self,
        frame: &CanvasFrame,
        module_id: &str,
        screen: Point,
    ) -> Result<String> {
        let module = self.catalog.require(module_id)?.clone();
        let dims = component_dimensions(&module);
        let world = self.viewport.to_world(frame, screen);
        let position = Point::new(world.x - dims.width / 2.0, world.y - dims.height / 2.0);
        Ok(self.circuit.add_component(module, position))
    }

    /// Deletes a wire. Only meaningful in delete mode.
    pub fn on_connection_clicked(&mut self, connection_id: &str) {
        if !self.modes.is(InteractionMode::Delete) {
            return;
        }
        if self.circuit.remove_connection(connection_id).is_ok() {
            info!(connection_id, "deleted connection");
        }
    }

    /// Runs the compatibility pass over every connection, writing statuses
    /// into the store. Returns the incompatible count.
    pub fn validate(&mut self) -> usize {
        validate_circuit(&mut self.circuit)
    }

    fn cancel_gesture(&mut self, exited: InteractionMode) {
        match exited {
            InteractionMode::Move => self.drag.cancel(),
            InteractionMode::Wire => {
                if self.draft.take().is_some() {
                    debug!("wire draft discarded on mode exit");
                }
            }
            InteractionMode::Pan => self.pan_anchor = None,
            _ => {}
        }
    }
}
