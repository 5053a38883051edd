//! # Wirekit Core
//!
//! Core types and graph engine for the wirekit module editor.
//! Provides the circuit data model, the authoritative component/connection
//! store, the electrical compatibility validator, catalog loading, and the
//! netlist/recommender boundaries toward external collaborators.
//!
//! The interactive layer (viewport transforms, gestures, wire routing) lives
//! in the `wirekit-editor` crate and reads/writes the store exclusively
//! through the operations defined here.

pub mod catalog;
pub mod circuit;
pub mod constants;
pub mod error;
pub mod model;
pub mod netlist;
pub mod recommend;
pub mod validator;

pub use catalog::Catalog;
pub use circuit::Circuit;
pub use error::{CircuitError, Error, Result};
pub use model::{
    CatalogModule, ComponentKind, Connection, ConnectionStatus, Endpoint, ModuleInstance, Point,
    Port, PortKind, PortSide, PropertyValue, RouteMode, Size,
};
pub use recommend::{Recommendation, Recommender};
pub use validator::{check_compatibility, validate_circuit, Verdict};
