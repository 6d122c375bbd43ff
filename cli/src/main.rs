//! gexf: command-line inspection of GEXF graphs
//!
//! Reads a document, assembles the graph and prints its contents or the
//! snapshots of a dynamic graph.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use gexf_timeline::{parse_with_config, Graph, ParseConfig};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "gexf", version, about = "Inspect GEXF graphs and dynamic snapshots")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true, env = "GEXF_FORMAT")]
    format: OutputFormat,

    /// Skip viz styling elements
    #[arg(long, global = true)]
    no_viz: bool,

    /// Reject documents larger than this many bytes
    #[arg(long, global = true, env = "GEXF_MAX_BYTES")]
    max_bytes: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Graph settings, metadata and counts
    Summary { file: PathBuf },
    /// List nodes in document order
    Nodes { file: PathBuf },
    /// List edges in document order
    Edges { file: PathBuf },
    /// Timeline instants with snapshot sizes
    Timeline { file: PathBuf },
    /// Nodes and edges present at one instant
    Snapshot {
        file: PathBuf,

        /// Timeline instant
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ParseConfig {
        include_viz: !cli.no_viz,
        max_document_bytes: cli.max_bytes,
    };

    let result = match &cli.command {
        Commands::Summary { file } => run_summary(file, &config, &cli.format).await,
        Commands::Nodes { file } => run_nodes(file, &config, &cli.format).await,
        Commands::Edges { file } => run_edges(file, &config, &cli.format).await,
        Commands::Timeline { file } => run_timeline(file, &config, &cli.format).await,
        Commands::Snapshot { file, at } => run_snapshot(file, *at, &config, &cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn load(path: &Path, config: &ParseConfig) -> Result<Graph, Box<dyn std::error::Error>> {
    debug!("Loading {:?}", path);
    let document = tokio::fs::read_to_string(path).await?;
    Ok(parse_with_config(&document, config)?)
}

fn opt(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

async fn run_summary(path: &Path, config: &ParseConfig, format: &OutputFormat) -> CliResult {
    let graph = load(path, config).await?;
    let time_format = graph.mode.dynamic().map(|d| d.time_format.to_string());

    match format {
        OutputFormat::Json => {
            let summary = json!({
                "version": graph.version,
                "mode": graph.mode.name(),
                "timeformat": time_format,
                "defaultedgetype": graph.default_edge_type.as_str(),
                "idtype": graph.id_type.as_str(),
                "meta": graph.meta,
                "attributes": graph.attributes.len(),
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            println!("Version:      {}", opt(graph.version.as_deref()));
            println!("Mode:         {}", graph.mode.name());
            if let Some(time_format) = time_format {
                println!("Time format:  {}", time_format);
            }
            println!("Edge default: {}", graph.default_edge_type);
            println!("Id type:      {}", graph.id_type);
            println!("Creator:      {}", opt(graph.meta.creator.as_deref()));
            println!("Description:  {}", opt(graph.meta.description.as_deref()));
            println!("Attributes:   {}", graph.attributes.len());
            println!("Nodes:        {}", graph.node_count());
            println!("Edges:        {}", graph.edge_count());
        }
    }

    Ok(())
}

async fn run_nodes(path: &Path, config: &ParseConfig, format: &OutputFormat) -> CliResult {
    let graph = load(path, config).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph.nodes)?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["id", "label", "color", "size", "attributes"]);
            for node in &graph.nodes {
                table.add_row(vec![
                    node.id.clone(),
                    node.label.clone(),
                    node.color.map(|c| c.to_string()).unwrap_or_default(),
                    node.size.map(|s| s.to_string()).unwrap_or_default(),
                    node.attributes.as_ref().map(|a| a.len()).unwrap_or(0).to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} node(s)", graph.node_count());
        }
    }

    Ok(())
}

async fn run_edges(path: &Path, config: &ParseConfig, format: &OutputFormat) -> CliResult {
    let graph = load(path, config).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph.edges)?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["id", "source", "target", "type", "weight", "label"]);
            for edge in &graph.edges {
                table.add_row(vec![
                    edge.id.clone(),
                    edge.source.clone(),
                    edge.target.clone(),
                    edge.direction_or(&graph.default_edge_type).to_string(),
                    edge.weight.map(|w| w.to_string()).unwrap_or_default(),
                    edge.label.clone().unwrap_or_default(),
                ]);
            }
            println!("{}", table);
            println!("{} edge(s)", graph.edge_count());
        }
    }

    Ok(())
}

async fn run_timeline(path: &Path, config: &ParseConfig, format: &OutputFormat) -> CliResult {
    let graph = load(path, config).await?;
    let snapshots = graph.snapshots()?;

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = snapshots
                .iter()
                .map(|s| json!({ "instant": s.instant, "nodes": s.nodes.len(), "edges": s.edges.len() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["instant", "nodes", "edges"]);
            for snapshot in snapshots.iter() {
                table.add_row(vec![
                    snapshot.instant.to_string(),
                    snapshot.nodes.len().to_string(),
                    snapshot.edges.len().to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} instant(s)", snapshots.len());
        }
    }

    Ok(())
}

async fn run_snapshot(path: &Path, at: f64, config: &ParseConfig, format: &OutputFormat) -> CliResult {
    let graph = load(path, config).await?;
    let snapshots = graph.snapshots()?;
    let snapshot = snapshots
        .at(at)
        .ok_or_else(|| format!("{} is not an instant of the timeline", at))?;

    let nodes = snapshot.node_ids(&graph);
    let edges = snapshot.edge_ids(&graph);

    match format {
        OutputFormat::Json => {
            let value = json!({ "instant": snapshot.instant, "nodes": nodes, "edges": edges });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("Instant: {}", snapshot.instant);
            println!("Nodes ({}): {}", nodes.len(), nodes.join(", "));
            println!("Edges ({}): {}", edges.len(), edges.join(", "));
        }
    }

    Ok(())
}
