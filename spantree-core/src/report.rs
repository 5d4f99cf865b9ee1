//! Output formatting - plaintext and JSON.
//!
//! [`ShortestPaths`] holds opaque vertex tokens; a report resolves them
//! to display names through the caller-supplied lookup and carries the
//! `{weight, path}` shape consumed by the printers and the DOT export.

use serde::Serialize;
use serde_json::json;

use crate::paths::ShortestPaths;
use crate::store::VertexId;

/// One finalized vertex in display form.
#[derive(Debug, Clone, Serialize)]
pub struct PathEntry {
    pub vertex: String,
    pub weight: f64,
    pub path: Vec<String>,
}

/// Display form of a whole result, ordered by ascending weight.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub source: String,
    pub entries: Vec<PathEntry>,
}

/// Build a report from a result, resolving tokens with `name_of`.
///
/// Entries are sorted by `(weight, vertex name)` so output is stable.
pub fn build_report<F>(
    source: impl Into<String>,
    paths: &ShortestPaths,
    mut name_of: F,
) -> PathReport
where
    F: FnMut(VertexId) -> String,
{
    let mut entries: Vec<PathEntry> = paths
        .iter()
        .map(|(vertex, weighted)| PathEntry {
            vertex: name_of(vertex),
            weight: weighted.weight,
            path: weighted.path.into_iter().map(&mut name_of).collect(),
        })
        .collect();
    entries.sort_by(|a, b| {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.vertex.cmp(&b.vertex))
    });
    PathReport {
        source: source.into(),
        entries,
    }
}

/// Prints a report in plain text format.
pub fn print_plain(report: &PathReport) {
    if report.entries.is_empty() {
        println!("No vertices reachable from '{}'.", report.source);
        return;
    }
    println!(
        "SHORTEST PATHS FROM '{}' ({}):",
        report.source,
        report.entries.len()
    );
    for entry in &report.entries {
        println!(
            "- {}  weight {}  path {}",
            entry.vertex,
            entry.weight,
            entry.path.join(" -> ")
        );
    }
}

/// Prints a report in JSON format.
///
/// Falls back to a minimal shape if serialization fails (should never
/// happen with these types, but the failure is reported, not ignored).
pub fn print_json(report: &PathReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{}", json!({ "source": report.source }));
        }
    }
}
