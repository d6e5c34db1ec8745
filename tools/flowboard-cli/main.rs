use clap::{Parser, Subcommand, ValueEnum};
use flowboard::prelude::*;
use flowboard::document::read_document;
use flowboard::registry::summarize;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// CLI-specific trigger enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TriggerCli {
    Inbound,
    Outbound,
    Message,
    Webhook,
}

impl From<TriggerCli> for TriggerType {
    fn from(cli: TriggerCli) -> Self {
        match cli {
            TriggerCli::Inbound => TriggerType::Inbound,
            TriggerCli::Outbound => TriggerType::Outbound,
            TriggerCli::Message => TriggerType::Message,
            TriggerCli::Webhook => TriggerType::Webhook,
        }
    }
}

/// Inspect, validate and export flow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional editor config JSON file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new flow document containing only the seed node
    New {
        /// Flow name
        #[arg(short, long)]
        name: String,
        #[arg(short, long, value_enum, default_value = "inbound")]
        trigger: TriggerCli,
        /// Directory the flow is written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the nodes and connections of a flow document
    Inspect { path: PathBuf },
    /// Load a flow document and report whether it is well formed
    Validate { path: PathBuf },
    /// Render a flow document to SVG
    Render {
        path: PathBuf,
        /// Output SVG path
        #[arg(short, long, default_value = "flow.svg")]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };

    match cli.command {
        Command::New {
            name,
            trigger,
            out_dir,
        } => run_new(config, name, trigger.into(), out_dir),
        Command::Inspect { path } => run_inspect(config, path),
        Command::Validate { path } => run_validate(config, path),
        Command::Render { path, output } => run_render(config, path, output),
    }
}

fn run_new(config: EditorConfig, name: String, trigger: TriggerType, out_dir: PathBuf) {
    let mut session = EditorSession::new(config, RecordingSurface::new());
    session.set_name(name);
    session.set_trigger_type(trigger);

    let mut store = JsonFileStore::new(&out_dir);
    let document = session
        .save_flow(&mut store)
        .unwrap_or_else(|e| exit_with_error(&format!("Save failed: {}", e)));
    println!(
        "Created flow '{}' at {}",
        document.name,
        store.path_for(&document.name).display()
    );
}

fn load_session(config: EditorConfig, path: &Path) -> EditorSession<SvgSurface> {
    let document = read_document(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read flow: {}", e)));
    let mut session = EditorSession::new(config, SvgSurface::new(0.0, 0.0));
    session
        .load_document(document)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid flow: {}", e)));
    session
}

fn run_inspect(config: EditorConfig, path: PathBuf) {
    let session = load_session(config, &path);
    let graph = session.graph();

    println!("\n--- Flow '{}' ({}) ---", session.name(), session.trigger_type());
    println!("Nodes ({}):", graph.node_count());
    for node in graph.nodes() {
        println!(
            "  #{:<4} {:<10} {:<20} at {}  | {}",
            node.id,
            node.kind,
            node.title,
            node.position,
            summarize(node)
        );
    }

    println!("Connections ({}):", graph.connection_count());
    for connection in graph.connections() {
        let label = if connection.label.is_empty() {
            String::new()
        } else {
            format!(" [{}]", connection.label)
        };
        println!("  #{} -> #{}{}", connection.source, connection.target, label);
    }

    let counts = graph.nodes().counts_by(|n| n.kind);
    let breakdown = counts
        .iter()
        .sorted_by_key(|(kind, _)| **kind)
        .map(|(kind, count)| format!("{}={}", kind, count))
        .join(", ");
    println!("Node types: {}", breakdown);
}

fn run_validate(config: EditorConfig, path: PathBuf) {
    let start = Instant::now();
    let session = load_session(config, &path);
    println!(
        "Flow '{}' is well formed: {} nodes, {} connections (checked in {:?})",
        session.name(),
        session.graph().node_count(),
        session.graph().connection_count(),
        start.elapsed()
    );
}

fn run_render(config: EditorConfig, path: PathBuf, output: PathBuf) {
    let session = load_session(config, &path);
    let graph = session.graph();

    // Size the canvas to fit every node plus a margin.
    let margin = 40.0;
    let (width, height) = graph.nodes().fold((0.0_f64, 0.0_f64), |(w, h), n| {
        (
            w.max(n.position.x + n.size.width),
            h.max(n.position.y + n.size.height),
        )
    });

    let mut surface = SvgSurface::new(width + margin, height + margin);
    session.renderer().redraw(graph, &mut surface, None);
    session.renderer().paint_nodes(graph, &mut surface, None);

    fs::write(&output, surface.finish()).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Could not write SVG to '{}': {}",
            output.display(),
            e
        ))
    });
    println!(
        "Rendered {} nodes and {} connections to {}",
        graph.node_count(),
        graph.connection_count(),
        output.display()
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
