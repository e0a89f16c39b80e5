//! Directionality normalization
//!
//! `undirected` collapses a directed graph, `out` reverses it so the `in`
//! code path can be reused, and `all`/`in` keep the graph as is. Graphs are
//! never modified; a transformed view is returned only when needed.

use std::borrow::Cow;

use crate::centralization::Diagnostic;
use crate::config::Mode;
use crate::error::{CentralizationError, Result};
use crate::graph::GraphView;

/// Fail if `mode` needs edge direction the graph does not have
pub fn check_mode<G: GraphView>(graph: &G, mode: Mode) -> Result<()> {
    if mode.requires_direction() && !graph.is_directed() {
        return Err(CentralizationError::ModeMismatch {
            mode: mode.to_string(),
        });
    }
    Ok(())
}

/// View of `graph` on which the measures for `mode` are evaluated
pub fn normalize<'g, G: GraphView>(
    graph: &'g G,
    mode: Mode,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Cow<'g, G>> {
    check_mode(graph, mode)?;

    let view = match mode {
        Mode::Undirected if graph.is_directed() => {
            log::debug!("Disregarding directions in directed graph");
            diagnostics.push(Diagnostic::DirectionsDisregarded);
            Cow::Owned(graph.to_undirected())
        }
        Mode::Out => Cow::Owned(graph.reverse()),
        Mode::Undirected | Mode::All | Mode::In => Cow::Borrowed(graph),
    };

    Ok(view)
}

/// Undirected view of `graph`, borrowed when it already is undirected
pub fn undirected_view<G: GraphView>(graph: &G) -> Cow<'_, G> {
    if graph.is_directed() {
        Cow::Owned(graph.to_undirected())
    } else {
        Cow::Borrowed(graph)
    }
}
