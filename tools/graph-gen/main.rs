use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use saiyo::logger;
use saiyo::prelude::*;
use std::fs;

const TASK_TAGS: [&str; 3] = ["notification", "assignment", "interview"];

/// A CLI tool to generate workflow graphs for exercising the validator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of task nodes between Start and End
    #[arg(short, long, default_value_t = 5)]
    tasks: usize,

    /// Generate random connections instead of a workflow that passes validation
    #[arg(long)]
    random: bool,

    /// Number of connections in random mode
    #[arg(long, default_value_t = 10)]
    edges: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(None);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let factory = NodeFactory::new();
    let mut graph = WorkflowGraph::seeded(&factory);
    let start = terminal_id(&graph, Node::is_start);
    let end = terminal_id(&graph, Node::is_end);

    let mut tasks = Vec::with_capacity(cli.tasks);
    for i in 0..cli.tasks {
        let tag = TASK_TAGS.choose(&mut rng).copied().unwrap_or("notification");
        let position = Position::new(rng.random_range(0.0..500.0), 100.0 * (i + 1) as f64);
        if let Some(node) = factory.create_with_layout(
            tag,
            format!("Step {}", i + 1),
            position,
            LayoutHints::vertical(),
        ) {
            tasks.push(node.id().to_string());
            graph.add_node(node)?;
        }
    }

    if cli.random {
        connect_randomly(&mut graph, &mut rng, cli.edges);
    } else {
        connect_chain(&mut graph, &mut rng, &start, &end, &tasks);
    }

    let verdict = Validator::default().validate_graph(&graph);
    println!(
        "Generated {} nodes and {} edges -> {}",
        graph.node_count(),
        graph.edge_count(),
        verdict
    );

    let json_output = serde_json::to_string_pretty(&graph.to_document())?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully saved workflow to '{}'", cli.output);

    Ok(())
}

fn terminal_id(graph: &WorkflowGraph, is_terminal: fn(&Node) -> bool) -> String {
    graph
        .nodes()
        .find(|n| is_terminal(n))
        .map(|n| n.id().to_string())
        .unwrap_or_default()
}

/// Builds a chain where each task has two incoming edges: one from its
/// predecessor and one from a random earlier node (possibly the same one).
fn connect_chain(
    graph: &mut WorkflowGraph,
    rng: &mut StdRng,
    start: &str,
    end: &str,
    tasks: &[String],
) {
    let mut earlier = vec![start.to_string()];
    for task in tasks {
        let previous = earlier.last().cloned().unwrap_or_else(|| start.to_string());
        let extra = earlier.choose(rng).cloned().unwrap_or_else(|| start.to_string());
        graph.connect(&previous, task);
        graph.connect(&extra, task);
        earlier.push(task.clone());
    }
    let last = earlier.last().cloned().unwrap_or_else(|| start.to_string());
    graph.connect(&last, end);
}

fn connect_randomly(graph: &mut WorkflowGraph, rng: &mut StdRng, count: usize) {
    let ids: Vec<String> = graph.nodes().map(|n| n.id().to_string()).collect();
    for _ in 0..count {
        if let (Some(source), Some(target)) = (ids.choose(rng), ids.choose(rng)) {
            graph.connect(source, target);
        }
    }
}
