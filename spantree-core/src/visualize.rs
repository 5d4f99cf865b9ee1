//! Graphviz DOT visualization of shortest-path results.
//!
//! Renders the union of all result paths: the source stands out, every
//! finalized vertex is annotated with its settled weight, and edges are
//! the consecutive path hops (deduplicated, since paths share prefixes).

use std::collections::HashSet;
use std::fmt::Write;

use crate::report::PathReport;

/// Generate a Graphviz DOT representation of a result's path tree.
///
/// - the source vertex is lightblue
/// - finalized vertices are lightgreen, labelled `name\nw=<weight>`
/// - edges are the hops appearing on any shortest path
pub fn generate_dot(report: &PathReport) -> String {
    // Estimate capacity: ~60 bytes/node + ~30 bytes/edge + header/footer.
    let node_count = report.entries.len() + 1;
    let hop_count: usize = report.entries.iter().map(|e| e.path.len()).sum();
    let mut dot = String::with_capacity(node_count * 60 + hop_count * 30 + 150);

    if let Err(e) = write_dot_content(&mut dot, report) {
        eprintln!("[ERROR] Failed to generate DOT string: {}", e);
        return "digraph spantree {\n}\n".to_string();
    }

    dot
}

fn write_dot_content(dot: &mut String, report: &PathReport) -> std::fmt::Result {
    writeln!(dot, "digraph spantree {{")?;
    writeln!(dot, "  rankdir=LR;")?;
    writeln!(
        dot,
        "  node [shape=box, style=filled, fontname=\"JetBrains Mono\"];"
    )?;
    writeln!(dot)?;

    // 1. NODES: source first, then every finalized vertex with its weight.
    writeln!(dot, "  \"{}\" [fillcolor=lightblue];", report.source)?;
    for entry in &report.entries {
        writeln!(
            dot,
            "  \"{}\" [label=\"{}\\nw={}\" fillcolor=lightgreen];",
            entry.vertex, entry.vertex, entry.weight
        )?;
    }

    writeln!(dot)?;

    // 2. EDGES: consecutive hops of each path, shared prefixes drawn once.
    let mut drawn: HashSet<(&str, &str)> = HashSet::new();
    for entry in &report.entries {
        for hop in entry.path.windows(2) {
            let (from, to) = (hop[0].as_str(), hop[1].as_str());
            if drawn.insert((from, to)) {
                // Intermediate hops are themselves finalized vertices,
                // so every endpoint already has a node line above.
                writeln!(dot, "  \"{}\" -> \"{}\";", from, to)?;
            }
        }
    }

    writeln!(dot, "}}")?;
    Ok(())
}
