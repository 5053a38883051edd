//! Electrical compatibility validation.
//!
//! `check_compatibility` is a pure function over the graph: it never
//! mutates its inputs and is callable with no UI state at all. Rules are
//! evaluated in a fixed order and the first match wins. Unresolvable
//! endpoints are a verdict ("not found"), not a panic: by the time
//! validation runs, cascading delete should have made them impossible, but
//! the validator does not rely on that.

use tracing::info;

use crate::circuit::Circuit;
use crate::model::{Connection, ConnectionStatus, ModuleInstance, PortKind};

/// Outcome of checking a single connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub compatible: bool,
    /// Human-readable explanation, also used to seed the recommender.
    pub reason: String,
}

impl Verdict {
    fn ok(reason: impl Into<String>) -> Self {
        Self {
            compatible: true,
            reason: reason.into(),
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            compatible: false,
            reason: reason.into(),
        }
    }
}

/// Classifies one connection against the placed modules.
///
/// Rule order, first match wins:
/// 1. unresolvable module or port → incompatible
/// 2. two power outputs → incompatible
/// 3. ground to non-ground → incompatible
/// 4. ground to ground → compatible
/// 5. power output with known voltage into power input → range check
///    against the sink module's operating voltage (checked in both
///    endpoint orders); unknown source voltage is optimistically
///    compatible
/// 6. anything else → compatible
pub fn check_compatibility(connection: &Connection, modules: &[ModuleInstance]) -> Verdict {
    let from_module = modules
        .iter()
        .find(|m| m.instance_id == connection.from.instance_id);
    let to_module = modules
        .iter()
        .find(|m| m.instance_id == connection.to.instance_id);
    let (from_module, to_module) = match (from_module, to_module) {
        (Some(f), Some(t)) => (f, t),
        _ => return Verdict::fail("Module not found."),
    };

    let from_port = from_module.port(&connection.from.port_id);
    let to_port = to_module.port(&connection.to.port_id);
    let (from_port, to_port) = match (from_port, to_port) {
        (Some(f), Some(t)) => (f, t),
        _ => return Verdict::fail("Port not found."),
    };

    if from_port.kind == PortKind::PowerOut && to_port.kind == PortKind::PowerOut {
        return Verdict::fail("Cannot connect two power output ports together.");
    }

    let from_gnd = from_port.kind == PortKind::Ground;
    let to_gnd = to_port.kind == PortKind::Ground;
    if from_gnd != to_gnd {
        return Verdict::fail("Ground (GND) ports can only be connected to other GND ports.");
    }
    if from_gnd && to_gnd {
        return Verdict::ok("GND connection is valid.");
    }

    // Supply-into-sink voltage check, evaluated regardless of which
    // endpoint is `from`.
    if from_port.kind == PortKind::PowerOut && to_port.kind == PortKind::PowerIn {
        if let Some(verdict) = check_supply(from_port.voltage, to_module) {
            return verdict;
        }
    }
    if to_port.kind == PortKind::PowerOut && from_port.kind == PortKind::PowerIn {
        if let Some(verdict) = check_supply(to_port.voltage, from_module) {
            return verdict;
        }
    }

    Verdict::ok("Connection is compatible.")
}

/// Checks a supply voltage against the sink module's operating range.
/// Returns `None` when the supply is in range and the default verdict
/// should apply.
fn check_supply(voltage: Option<f64>, sink: &ModuleInstance) -> Option<Verdict> {
    let voltage = match voltage {
        Some(v) => v,
        None => {
            return Some(Verdict::ok(
                "Source voltage not specified, assuming compatibility.",
            ))
        }
    };

    let [min, max] = sink.operating_voltage();
    if voltage < min || voltage > max {
        return Some(Verdict::fail(format!(
            "{} requires {}V-{}V, but is supplied with {}V.",
            sink.name(),
            min,
            max,
            voltage
        )));
    }
    None
}

/// Re-validates every connection, writes the verdicts back onto the
/// circuit, and returns the number of incompatible connections.
pub fn validate_circuit(circuit: &mut Circuit) -> usize {
    let modules: Vec<ModuleInstance> = circuit.components().cloned().collect();
    let statuses: Vec<(String, ConnectionStatus)> = circuit
        .connections()
        .map(|conn| {
            let verdict = check_compatibility(conn, &modules);
            let status = if verdict.compatible {
                ConnectionStatus::Ok
            } else {
                ConnectionStatus::Incompatible
            };
            (conn.id.clone(), status)
        })
        .collect();

    let incompatible = statuses
        .iter()
        .filter(|(_, s)| *s == ConnectionStatus::Incompatible)
        .count();
    circuit.set_connection_statuses(&statuses);
    info!(
        checked = statuses.len(),
        incompatible, "circuit validation complete"
    );
    incompatible
}
