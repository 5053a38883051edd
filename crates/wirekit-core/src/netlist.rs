//! SPICE-style netlist export.
//!
//! The simulation collaborator is an opaque executable that accepts a
//! netlist file; this module renders the circuit graph into that text
//! form. Net extraction folds connected ports into shared nodes, with
//! every ground-bearing net collapsed onto node 0.

use std::collections::HashMap;
use std::fmt::Write;

use crate::circuit::Circuit;
use crate::model::{ComponentKind, ModuleInstance, PortKind};

/// Renders the circuit as a SPICE-style netlist.
///
/// One card per component listing its node assignments in port order,
/// followed by `.end`. Unconnected ports get their own private node.
pub fn export(circuit: &Circuit) -> String {
    let nets = assign_nodes(circuit);

    let mut out = String::new();
    let _ = writeln!(out, "* wirekit netlist");
    for (index, component) in circuit.components().enumerate() {
        let _ = write!(out, "{}", card_name(component, index));
        for port in component.ports() {
            let node = nets
                .get(&(component.instance_id.as_str(), port.id.as_str()))
                .copied()
                .unwrap_or(0);
            let _ = write!(out, " {}", node);
        }
        let _ = writeln!(out, " ; {}", component.name());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, ".end");
    out
}

/// Netlist card prefix by component kind, SPICE convention.
fn card_name(component: &ModuleInstance, index: usize) -> String {
    let prefix = match component.kind() {
        ComponentKind::Resistor => 'R',
        ComponentKind::Capacitor => 'C',
        ComponentKind::Ic => 'U',
        ComponentKind::Module => 'X',
    };
    format!("{}{}", prefix, index + 1)
}

/// Folds connected ports into shared net nodes via union-find. Ground
/// nets are node 0; every other net gets the next positive integer.
fn assign_nodes<'a>(circuit: &'a Circuit) -> HashMap<(&'a str, &'a str), u32> {
    let ports: Vec<(&str, &str, PortKind)> = circuit
        .components()
        .flat_map(|c| {
            c.ports()
                .iter()
                .map(move |p| (c.instance_id.as_str(), p.id.as_str(), p.kind))
        })
        .collect();

    let index_of: HashMap<(&str, &str), usize> = ports
        .iter()
        .enumerate()
        .map(|(i, (cid, pid, _))| ((*cid, *pid), i))
        .collect();

    let mut parent: Vec<usize> = (0..ports.len()).collect();
    fn find(parent: &mut Vec<usize>, i: usize) -> usize {
        if parent[i] != i {
            let root = find(parent, parent[i]);
            parent[i] = root;
        }
        parent[i]
    }

    for conn in circuit.connections() {
        let a = index_of.get(&(conn.from.instance_id.as_str(), conn.from.port_id.as_str()));
        let b = index_of.get(&(conn.to.instance_id.as_str(), conn.to.port_id.as_str()));
        if let (Some(&a), Some(&b)) = (a, b) {
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            parent[ra] = rb;
        }
    }

    // Number the nets: any net containing a ground port is node 0.
    let mut net_numbers: HashMap<usize, u32> = HashMap::new();
    let mut next_node = 1u32;
    let mut nodes = HashMap::new();
    for i in 0..ports.len() {
        let root = find(&mut parent, i);
        let grounded = (0..ports.len())
            .any(|j| ports[j].2 == PortKind::Ground && find(&mut parent, j) == root);
        let node = *net_numbers.entry(root).or_insert_with(|| {
            if grounded {
                0
            } else {
                let n = next_node;
                next_node += 1;
                n
            }
        });
        nodes.insert((ports[i].0, ports[i].1), node);
    }
    nodes
}
