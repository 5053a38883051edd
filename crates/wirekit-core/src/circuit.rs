//! The authoritative in-memory circuit graph.
//!
//! `Circuit` owns the component and connection collections. Every mutation
//! goes through one of the named operations below; the collections are
//! never handed out mutably, so the endpoint-resolution invariant
//! (connections always reference components present in the set) can be
//! enforced at each commit. Removal cascades: deleting a component deletes
//! every connection referencing it, which is what makes dangling references
//! unrepresentable rather than merely detected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::error::{CircuitError, Result};
use crate::model::{
    CatalogModule, Connection, ConnectionStatus, Endpoint, ModuleInstance, Point, PropertyValue,
    RouteMode,
};

/// The aggregate circuit graph: placed module instances plus the
/// connections between their ports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Circuit {
    components: Vec<ModuleInstance>,
    connections: Vec<Connection>,
}

impl Circuit {
    /// Creates an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the placed components in placement order.
    pub fn components(&self) -> impl Iterator<Item = &ModuleInstance> {
        self.components.iter()
    }

    /// Iterates the connections in creation order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Looks up a component by instance id.
    pub fn component(&self, instance_id: &str) -> Option<&ModuleInstance> {
        self.components
            .iter()
            .find(|c| c.instance_id == instance_id)
    }

    /// Looks up a connection by id.
    pub fn connection(&self, connection_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == connection_id)
    }

    /// Places a new instance of `module` at `position` and returns its
    /// fresh instance id.
    pub fn add_component(&mut self, module: CatalogModule, position: Point) -> String {
        let instance = ModuleInstance::place(module, position);
        let id = instance.instance_id.clone();
        info!(instance_id = %id, name = %instance.name(), %position, "placed component");
        self.components.push(instance);
        id
    }

    /// Adds an already-constructed instance (used when loading a circuit).
    /// Rejects duplicate instance ids.
    pub fn insert_component(&mut self, instance: ModuleInstance) -> Result<()> {
        if self.component(&instance.instance_id).is_some() {
            return Err(CircuitError::DuplicateInstance {
                instance_id: instance.instance_id,
            }
            .into());
        }
        self.components.push(instance);
        Ok(())
    }

    /// Moves a component to a new world position. This is the commit half
    /// of a drag gesture; live positions never touch the store.
    pub fn update_component_position(&mut self, instance_id: &str, position: Point) -> Result<()> {
        let component = self
            .components
            .iter_mut()
            .find(|c| c.instance_id == instance_id)
            .ok_or_else(|| CircuitError::ComponentNotFound {
                instance_id: instance_id.to_string(),
            })?;
        debug!(%instance_id, %position, "committed component position");
        component.position = position;
        Ok(())
    }

    /// Merges the given properties into a component's property map.
    pub fn update_component_properties(
        &mut self,
        instance_id: &str,
        properties: BTreeMap<String, PropertyValue>,
    ) -> Result<()> {
        let component = self
            .components
            .iter_mut()
            .find(|c| c.instance_id == instance_id)
            .ok_or_else(|| CircuitError::ComponentNotFound {
                instance_id: instance_id.to_string(),
            })?;
        component.properties.extend(properties);
        Ok(())
    }

    /// Removes a component and, cascading, every connection that references
    /// it. Returns the number of connections removed alongside it.
    pub fn remove_component(&mut self, instance_id: &str) -> Result<usize> {
        let before = self.components.len();
        self.components.retain(|c| c.instance_id != instance_id);
        if self.components.len() == before {
            return Err(CircuitError::ComponentNotFound {
                instance_id: instance_id.to_string(),
            }
            .into());
        }

        let conn_before = self.connections.len();
        self.connections.retain(|c| !c.touches(instance_id));
        let cascaded = conn_before - self.connections.len();
        info!(%instance_id, cascaded, "removed component");
        Ok(cascaded)
    }

    /// Creates a connection between two resolvable ports on distinct
    /// components and returns its id.
    pub fn add_connection(
        &mut self,
        from: Endpoint,
        to: Endpoint,
        waypoints: Vec<Point>,
        mode: RouteMode,
    ) -> Result<String> {
        if from.instance_id == to.instance_id {
            return Err(CircuitError::SelfConnection {
                instance_id: from.instance_id,
            }
            .into());
        }
        self.resolve(&from)?;
        self.resolve(&to)?;

        let connection = Connection::new(from, to, waypoints, mode);
        let id = connection.id.clone();
        info!(
            connection_id = %id,
            from = %connection.from.instance_id,
            to = %connection.to.instance_id,
            "added connection"
        );
        self.connections.push(connection);
        Ok(id)
    }

    /// Removes a connection by id.
    pub fn remove_connection(&mut self, connection_id: &str) -> Result<()> {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != connection_id);
        if self.connections.len() == before {
            return Err(CircuitError::ConnectionNotFound {
                connection_id: connection_id.to_string(),
            }
            .into());
        }
        info!(%connection_id, "removed connection");
        Ok(())
    }

    /// Writes validator verdicts onto the connections. Only the validator
    /// pass calls this; the UI never guesses a status.
    pub fn set_connection_statuses(&mut self, statuses: &[(String, ConnectionStatus)]) {
        for (id, status) in statuses {
            if let Some(conn) = self.connections.iter_mut().find(|c| &c.id == id) {
                conn.status = *status;
            }
        }
    }

    /// Checks that an endpoint resolves to a present component and port.
    fn resolve(&self, endpoint: &Endpoint) -> Result<()> {
        let component = self.component(&endpoint.instance_id).ok_or_else(|| {
            CircuitError::ComponentNotFound {
                instance_id: endpoint.instance_id.clone(),
            }
        })?;
        if component.port(&endpoint.port_id).is_none() {
            return Err(CircuitError::PortNotFound {
                instance_id: endpoint.instance_id.clone(),
                port_id: endpoint.port_id.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Loads a circuit from JSON, verifying the endpoint invariant.
    pub fn from_json(json: &str) -> Result<Self> {
        let circuit: Circuit = serde_json::from_str(json)?;
        for conn in &circuit.connections {
            circuit.resolve(&conn.from)?;
            circuit.resolve(&conn.to)?;
        }
        Ok(circuit)
    }

    /// Serializes the circuit as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
