//! Circuit data model.
//!
//! Plain serde-derived types shared by the store, the validator, and the
//! editor crate. Field and variant names mirror the persisted wire format
//! so catalogs and circuits round-trip as JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{CAPACITOR_SIZE, IC_SIZE, MODULE_CARD_SIZE, RESISTOR_SIZE};

/// A world-space coordinate. Used for component origins, port offsets,
/// wire waypoints, and the live cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Width/height pair in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Semantic role of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortKind {
    /// Accepts supply power; checked against the module's operating range.
    PowerIn,
    /// Provides supply power at an optional nominal voltage.
    PowerOut,
    /// Ground reference. Only connects to other grounds.
    #[serde(rename = "gnd")]
    Ground,
    /// Bidirectional data line (I2C, SPI, GPIO, ...).
    DataIo,
    /// Not connected; present for footprint completeness.
    #[serde(rename = "nc")]
    NoConnect,
}

/// Which housing edge a port sits on. Determines its default layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// A named electrical terminal on a module.
///
/// Owned by exactly one module; `id` is unique within that module and
/// stable for the life of the instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PortKind,
    /// Nominal voltage for power outputs, when the datasheet specifies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
    #[serde(rename = "position")]
    pub side: PortSide,
}

/// The closed set of drawable component kinds.
///
/// Each kind carries a fixed dimension template; an unknown kind is not
/// representable, so dimension lookup is an exhaustive match rather than a
/// fallible table probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    #[serde(rename = "IC")]
    Ic,
    /// A catalog hardware module rendered as a card.
    Module,
}

impl ComponentKind {
    /// Base housing dimensions for this kind, in world units.
    ///
    /// Modules with many ports on one edge grow beyond the base height;
    /// see the editor crate's geometry module for the dynamic variant.
    pub fn dimensions(self) -> Size {
        let (w, h) = match self {
            ComponentKind::Resistor => RESISTOR_SIZE,
            ComponentKind::Capacitor => CAPACITOR_SIZE,
            ComponentKind::Ic => IC_SIZE,
            ComponentKind::Module => MODULE_CARD_SIZE,
        };
        Size::new(w, h)
    }
}

/// A free-form property value attached to a component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

/// Catalog entry for a hardware module, as shipped in the built-in catalog
/// or loaded from a user catalog file. Read-only at placement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogModule {
    pub id: String,
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Supply range `[min, max]` in volts the module tolerates on power-in.
    #[serde(default = "default_operating_voltage")]
    pub operating_voltage: [f64; 2],
    pub ports: Vec<Port>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

fn default_kind() -> ComponentKind {
    ComponentKind::Module
}

fn default_operating_voltage() -> [f64; 2] {
    // Wide-open range: modules that do not declare one accept anything.
    [0.0, f64::MAX]
}

/// A placed instance of a catalog module.
///
/// Created by a placement operation with a fresh process-unique
/// `instance_id`; destroyed only by the store's cascading remove.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInstance {
    pub instance_id: String,
    /// Snapshot of the catalog data this instance was placed from.
    #[serde(flatten)]
    pub module: CatalogModule,
    /// World-space origin of the housing's top-left corner.
    pub position: Point,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl ModuleInstance {
    /// Places a new instance of `module` at `position` with a fresh id.
    pub fn place(module: CatalogModule, position: Point) -> Self {
        Self {
            instance_id: uuid::Uuid::new_v4().to_string(),
            module,
            position,
            properties: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.module.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.module.kind
    }

    pub fn ports(&self) -> &[Port] {
        &self.module.ports
    }

    /// Looks up a port by id on this instance.
    pub fn port(&self, port_id: &str) -> Option<&Port> {
        self.module.ports.iter().find(|p| p.id == port_id)
    }

    pub fn operating_voltage(&self) -> [f64; 2] {
        self.module.operating_voltage
    }
}

/// One end of a connection: a `(component, port)` reference pair.
///
/// Stores ids rather than references, which is what makes cascading
/// delete possible without dangling pointers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub instance_id: String,
    pub port_id: String,
}

impl Endpoint {
    pub fn new(instance_id: impl Into<String>, port_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            port_id: port_id.into(),
        }
    }
}

/// How a connection's path is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    /// Single cubic curve between the two ports; used when the wire was
    /// committed without any interior bends.
    Curved,
    /// Horizontal/vertical polyline through the stored waypoints.
    Orthogonal,
}

/// Validator verdict attached to a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Not yet validated.
    Pending,
    Ok,
    Incompatible,
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        ConnectionStatus::Pending
    }
}

/// An edge between two ports on distinct components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from: Endpoint,
    pub to: Endpoint,
    #[serde(default)]
    pub status: ConnectionStatus,
    /// Interior route points, excluding the two derivable port positions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Point>,
    pub mode: RouteMode,
}

impl Connection {
    /// Builds a connection with a fresh id and `Pending` status.
    pub fn new(from: Endpoint, to: Endpoint, waypoints: Vec<Point>, mode: RouteMode) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from,
            to,
            status: ConnectionStatus::Pending,
            waypoints,
            mode,
        }
    }

    /// True when either endpoint references the given component.
    pub fn touches(&self, instance_id: &str) -> bool {
        self.from.instance_id == instance_id || self.to.instance_id == instance_id
    }
}
