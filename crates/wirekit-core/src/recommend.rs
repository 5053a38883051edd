//! Recommendation boundary.
//!
//! The AI-assist collaborator is external: given a module's specification
//! and the reason a connection was rejected, it proposes alternatives.
//! The core only defines the seam and the aggregation that feeds it;
//! circuit state is never affected by what the recommender returns or by
//! its failure.

use crate::circuit::Circuit;
use crate::error::Result;
use crate::model::{CatalogModule, ConnectionStatus};
use crate::validator::check_compatibility;

/// A suggested alternative module.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub reason: String,
}

/// External recommendation service seam.
///
/// Implementations typically call out to a remote model; tests use a stub.
pub trait Recommender {
    /// Proposes alternatives for `module` given why its connection was
    /// rejected.
    fn recommend(&self, module: &CatalogModule, reason: &str) -> Result<Vec<Recommendation>>;
}

/// Collects recommendations for every incompatible connection.
///
/// Walks the validated graph, re-derives each incompatible connection's
/// reason, and asks the recommender for alternatives to the sink module.
/// A failing recommender call skips that connection rather than aborting
/// the sweep.
pub fn suggestions_for_incompatible(
    circuit: &Circuit,
    recommender: &dyn Recommender,
) -> Vec<(String, Vec<Recommendation>)> {
    let modules: Vec<_> = circuit.components().cloned().collect();
    let mut out = Vec::new();

    for conn in circuit.connections() {
        if conn.status != ConnectionStatus::Incompatible {
            continue;
        }
        let verdict = check_compatibility(conn, &modules);
        let sink = modules.iter().find(|m| m.instance_id == conn.to.instance_id);
        let Some(sink) = sink else { continue };

        match recommender.recommend(&sink.module, &verdict.reason) {
            Ok(recommendations) => out.push((conn.id.clone(), recommendations)),
            Err(error) => {
                tracing::warn!(connection_id = %conn.id, %error, "recommender call failed");
            }
        }
    }
    out
}
