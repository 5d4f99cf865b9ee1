//! spantree CLI - bounded single-source shortest paths over edge-list graphs.
//!
//! Features:
//! - JSON edge-list graph files loaded into the in-memory store
//! - Both query shapes: to-all (with a result limit) and to-one
//! - Degree / skip-degree / capacity bounds from flags or spantree.toml
//! - Plain and JSON output, Graphviz DOT export of the result tree

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use spantree_core::{
    build_report, generate_dot, init_structured_logging, load_config, print_json, print_plain,
    single_source_shortest_paths, weighted_shortest_path, Direction, GraphSpec, MemoryGraph,
    PathEntry, PathReport, QueryOptions, SpantreeConfig, VertexId,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bounded single-source shortest paths over edge-list graphs")]
pub struct Cli {
    /// Path to the JSON graph file (edge list)
    graph: String,

    /// Source vertex name
    #[arg(long)]
    source: String,

    /// Target vertex name; switches to the single-target query
    #[arg(long)]
    target: Option<String>,

    /// Traversal direction: out, in, or both
    #[arg(long, default_value = "out")]
    direction: String,

    /// Only follow edges with this label
    #[arg(long)]
    label: Option<String>,

    /// Edge property holding the weight (absent = every hop costs 1)
    #[arg(long)]
    weight_property: Option<String>,

    /// Max edges sampled per vertex per round (absent = unbounded)
    #[arg(long)]
    degree: Option<u64>,

    /// Skip vertices with at least this many edges; 0 disables
    #[arg(long)]
    skip_degree: Option<u64>,

    /// Total search-space ceiling (absent = unbounded)
    #[arg(long)]
    capacity: Option<u64>,

    /// Max number of results for the to-all query (absent = unbounded)
    #[arg(long)]
    limit: Option<u64>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Generate Graphviz DOT output of the result paths
    #[arg(long)]
    dot: bool,

    /// Write DOT output to a specified file instead of stdout
    #[arg(long)]
    dot_file: Option<String>,
}

/// Security: Validates output file paths to prevent path traversal.
///
/// Rejects absolute paths, `..` components, and null bytes; the output
/// always lands under the current directory.
fn validate_output_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Output path contains null bytes"));
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(anyhow!(
            "Output path must be relative, not absolute: {}",
            path
        ));
    }
    for component in p.components() {
        if matches!(component, std::path::Component::ParentDir) {
            return Err(anyhow!(
                "Path traversal (..) not allowed in output paths: {}",
                path
            ));
        }
    }

    Ok(p)
}

fn load_graph(path: &str) -> Result<MemoryGraph> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file: {}", path))?;
    let spec: GraphSpec = serde_json::from_str(&content)
        .with_context(|| format!("Invalid graph file: {}", path))?;
    Ok(MemoryGraph::from_spec(spec))
}

fn resolve_vertex(graph: &MemoryGraph, name: &str, role: &str) -> Result<VertexId> {
    graph
        .vertex_id(name)
        .ok_or_else(|| anyhow!("{} vertex '{}' is not in the graph", role, name))
}

/// Merge CLI flags over spantree.toml defaults into query options.
fn build_options(cli: &Cli, config: &SpantreeConfig, source: VertexId) -> Result<QueryOptions> {
    let defaults = config.traversal.as_ref();
    let mut options = QueryOptions::new(source);
    options.direction = cli.direction.parse::<Direction>()?;
    options.label = cli.label.clone();
    options.weight_property = cli.weight_property.clone();
    options.degree = cli.degree.or(defaults.and_then(|d| d.degree));
    options.skip_degree = cli
        .skip_degree
        .or(defaults.and_then(|d| d.skip_degree))
        .unwrap_or(0);
    options.capacity = cli.capacity.or(defaults.and_then(|d| d.capacity));
    options.limit = cli.limit.or(defaults.and_then(|d| d.limit));
    Ok(options)
}

fn emit_dot(cli: &Cli, report: &PathReport) -> Result<()> {
    let dot = generate_dot(report);
    match &cli.dot_file {
        Some(path) => {
            let path = validate_output_path(path)?;
            fs::write(&path, dot)
                .with_context(|| format!("Failed to write DOT file: {}", path.display()))?;
            eprintln!("DOT graph written to {}", path.display());
        }
        None => print!("{}", dot),
    }
    Ok(())
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] spantree internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    let config = match load_config(Path::new(".")) {
        Ok(found) => found.unwrap_or_default(),
        Err(e) => {
            eprintln!("[WARN] Ignoring unreadable spantree.toml: {}", e);
            SpantreeConfig::default()
        }
    };
    let json = cli.json
        || config
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|format| format.eq_ignore_ascii_case("json"));

    let graph = load_graph(&cli.graph)?;
    let source = resolve_vertex(&graph, &cli.source, "source")?;
    let options = build_options(&cli, &config, source)?;
    let name_of = |vertex: VertexId| {
        graph
            .vertex_name(vertex)
            .unwrap_or_default()
            .to_string()
    };

    let report = match &cli.target {
        Some(target) => {
            let target = resolve_vertex(&graph, target, "target")?;
            let found = weighted_shortest_path(&graph, &options, target)
                .context("Shortest path query failed")?;
            let entries = found
                .map(|weighted| PathEntry {
                    vertex: name_of(target),
                    weight: weighted.weight,
                    path: weighted.path.iter().map(|v| name_of(*v)).collect(),
                })
                .into_iter()
                .collect();
            PathReport {
                source: cli.source.clone(),
                entries,
            }
        }
        None => {
            let paths = single_source_shortest_paths(&graph, &options)
                .context("Shortest path query failed")?;
            build_report(cli.source.clone(), &paths, name_of)
        }
    };

    if cli.target.is_some() && report.entries.is_empty() {
        // Unreachable target is a normal outcome, not an error.
        if json {
            print_json(&report);
        } else {
            println!(
                "No path from '{}' to '{}' under the configured bounds.",
                cli.source,
                cli.target.as_deref().unwrap_or_default()
            );
        }
    } else if json {
        print_json(&report);
    } else {
        print_plain(&report);
    }

    if cli.dot || cli.dot_file.is_some() {
        emit_dot(&cli, &report)?;
    }

    Ok(())
}
