use clap::{Parser, ValueEnum};
use saiyo::logger;
use saiyo::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Shape of the input file.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// `{ "nodes": [...], "edges": [...] }` as exported by the canvas
    Graph,
    /// A stored workflow document with JSON-encoded `nodes` and `edges` strings
    Record,
}

/// Validates recruitment workflow graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file
    workflow_path: PathBuf,

    /// Format of the input file
    #[arg(short, long, value_enum, default_value_t = InputFormat::Graph)]
    format: InputFormat,

    /// Number of incoming connections every task node must have
    #[arg(long, default_value_t = saiyo::validator::DEFAULT_REQUIRED_FAN_IN)]
    fan_in: usize,

    /// Fail on connections that reference unknown nodes
    #[arg(long)]
    strict_edges: bool,

    /// Print the in/out degree of every node
    #[arg(short, long)]
    verbose: bool,

    /// Also write log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.log_file.as_deref());

    let total_start = Instant::now();

    // --- 1. Loading ---
    let json = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            cli.workflow_path.display(),
            e
        ))
    });

    let graph = match cli.format {
        InputFormat::Graph => GraphDocument::from_json(&json)
            .map_err(|e| e.to_string())
            .and_then(|doc| doc.into_graph().map_err(|e| e.to_string())),
        InputFormat::Record => serde_json::from_str::<WorkflowRecord>(&json)
            .map_err(|e| e.to_string())
            .and_then(|record| record.graph().map_err(|e| e.to_string())),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)));

    // --- 2. Validation ---
    let validator = Validator::builder()
        .with_required_fan_in(cli.fan_in)
        .with_dangling_edge_check(cli.strict_edges)
        .build();

    let validate_start = Instant::now();
    let verdict = validator.validate_graph(&graph);
    let validate_duration = validate_start.elapsed();

    // --- 3. Report ---
    println!(
        "\nWorkflow: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    if cli.verbose {
        let nodes: Vec<&Node> = graph.nodes().collect();
        let degrees = saiyo::validator::DegreeTable::build(&nodes, graph.edges());
        println!("\n--- Degrees ---");
        for node in &nodes {
            println!(
                "{:<14} {:<38} in={} out={}  {}",
                node.kind().to_string(),
                node.id(),
                degrees.in_degree(node.id()),
                degrees.out_degree(node.id()),
                node.label()
            );
        }
        for id in degrees.unknown_ids(&nodes) {
            println!(
                "{:<14} {:<38} in={} out={}",
                "<unknown>",
                id,
                degrees.in_degree(id),
                degrees.out_degree(id)
            );
        }
    }

    println!("\n{}", verdict);
    if let Some(failure) = verdict.failure() {
        for id in &failure.affected_ids {
            println!("  -> {}", id);
        }
    }

    println!("\nValidation:      {:?}", validate_duration);
    println!("Total Execution: {:?}", total_start.elapsed());

    if !verdict.is_pass() {
        std::process::exit(1);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
