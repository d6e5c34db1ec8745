use clap::Parser;
use flowboard::document::{FlowDocument, TriggerType};
use flowboard::graph::GraphModel;
use flowboard::registry::NodeKind;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generates random flow documents for exercising the editor at scale
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Flow name written into the document
    #[arg(long, default_value = "Generated flow")]
    name: String,

    /// Number of nodes, including the trigger
    #[arg(long, default_value_t = 25)]
    nodes: usize,

    /// Average number of outgoing connections per node
    #[arg(long, default_value_t = 1.5)]
    fan_out: f64,

    /// Fraction of connections that get a branch label
    #[arg(long, default_value_t = 0.3)]
    labeled: f64,
}

const LABELS: &[&str] = &["yes", "no", "ok", "fail", "timeout", "other"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.labeled) {
        eprintln!("Error: --labeled must be between 0 and 1");
        std::process::exit(1);
    }

    let mut rng = rand::rng();
    let graph = generate_graph(&mut rng, &cli);
    let document = FlowDocument::capture(cli.name.clone(), TriggerType::Inbound, &graph);

    fs::write(&cli.output, document.to_json_pretty()?)?;
    info!(
        nodes = graph.node_count(),
        connections = graph.connection_count(),
        output = %cli.output,
        "generated flow"
    );
    println!(
        "Successfully generated a {}-node flow and saved it to '{}'",
        graph.node_count(),
        cli.output
    );
    Ok(())
}

fn generate_graph(rng: &mut impl Rng, cli: &Cli) -> GraphModel {
    let mut graph = GraphModel::new();
    graph.add_node(NodeKind::Trigger, "Start", 100.0, 100.0);

    // Lay nodes out on a loose grid so the rendered export stays readable.
    let columns = (cli.nodes as f64).sqrt().ceil().max(1.0) as usize;
    let body: Vec<NodeKind> = NodeKind::ALL
        .iter()
        .copied()
        .filter(|k| *k != NodeKind::Trigger)
        .collect();

    for i in 1..cli.nodes {
        let kind = *body.choose(rng).unwrap_or(&NodeKind::Message);
        let col = i % columns;
        let row = i / columns;
        let x = 100.0 + col as f64 * 260.0 + rng.random_range(-20.0..20.0);
        let y = 100.0 + row as f64 * 160.0 + rng.random_range(-20.0..20.0);
        let Some(id) = graph.add_node(kind, kind.title(), x, y).map(|n| n.id) else {
            break;
        };
        graph.replace_data(id, kind.default_data());
    }

    let ids: Vec<_> = graph.nodes().map(|n| n.id).collect();
    let connections = (ids.len() as f64 * cli.fan_out).round() as usize;
    for _ in 0..connections {
        let (Some(&source), Some(&target)) = (ids.choose(rng), ids.choose(rng)) else {
            break;
        };
        let label = if rng.random_bool(cli.labeled) {
            LABELS.choose(rng).copied().unwrap_or("")
        } else {
            ""
        };
        // Self-loops are rejected by the graph and simply skipped.
        graph.add_connection(source, target, label);
    }
    graph
}
