//! Error handling for wirekit.
//!
//! Graph-integrity failures surface as `CircuitError`; everything that
//! arises from fast or ambiguous pointer input is deliberately NOT an error
//! (the interaction layer treats those as silent no-ops). Compatibility
//! failures are not errors either: they are a first-class connection
//! status with an explanatory reason.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Circuit graph error type
///
/// Represents violations of the circuit store's structural invariants:
/// operations referencing missing components, ports, or connections, and
/// attempts to create degenerate edges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircuitError {
    /// No component with the given instance id exists in the circuit
    #[error("Component not found: {instance_id}")]
    ComponentNotFound {
        /// The missing instance id.
        instance_id: String,
    },

    /// No port with the given id exists on the component
    #[error("Port {port_id} not found on component {instance_id}")]
    PortNotFound {
        /// The owning component's instance id.
        instance_id: String,
        /// The missing port id.
        port_id: String,
    },

    /// A component with the same instance id is already present
    #[error("Duplicate instance id: {instance_id}")]
    DuplicateInstance {
        /// The instance id that already exists in the circuit.
        instance_id: String,
    },

    /// No connection with the given id exists in the circuit
    #[error("Connection not found: {connection_id}")]
    ConnectionNotFound {
        /// The missing connection id.
        connection_id: String,
    },

    /// A connection's two endpoints reference the same component
    #[error("Connection endpoints must reference distinct components (both on {instance_id})")]
    SelfConnection {
        /// The component both endpoints reference.
        instance_id: String,
    },

    /// No catalog module with the given id exists
    #[error("Unknown catalog module: {module_id}")]
    UnknownModule {
        /// The unknown catalog id.
        module_id: String,
    },
}

/// Main error type for wirekit
///
/// A unified error type used in public APIs across the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Circuit graph error
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// Catalog or circuit file could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
