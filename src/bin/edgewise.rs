//! CLI entry point for the `edgewise` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use edgewise::cli::commands;

#[derive(Parser)]
#[command(
    name = "edgewise",
    about = "edgewise CLI — in-memory graph engine with classic graph algorithms"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    New {
        /// Path to the graph file to create
        file: PathBuf,
        /// Make the graph directed
        #[arg(long)]
        directed: bool,
        /// Make the graph weighted
        #[arg(long)]
        weighted: bool,
    },
    /// Display summary information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Print the adjacency list
    Show {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add a vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex id
        id: String,
    },
    /// Add an edge between two existing vertices
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source endpoint
        u: String,
        /// Target endpoint
        v: String,
        /// Edge weight (required for weighted graphs)
        #[arg(long)]
        weight: Option<f64>,
        /// Replace the weight if the edge already exists
        #[arg(long)]
        overwrite: bool,
    },
    /// Remove a vertex and every incident edge
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex id
        id: String,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source endpoint
        u: String,
        /// Target endpoint
        v: String,
    },
    /// List the deduplicated edge set
    Edges {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Vertices whose in-degree is lower than the target's
    LowerIndegree {
        /// Path to the graph file
        file: PathBuf,
        /// Target vertex
        target: String,
    },
    /// Vertices with an edge into the target
    Incoming {
        /// Path to the graph file
        file: PathBuf,
        /// Target vertex
        target: String,
    },
    /// Keep only mutually-confirmed arcs, writing a new graph file
    Reciprocal {
        /// Path to the graph file
        file: PathBuf,
        /// Where to write the reciprocal subgraph
        output: PathBuf,
    },
    /// Enumerate all simple paths between two vertices
    Paths {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        u: String,
        /// End vertex
        v: String,
    },
    /// Radius and center of the graph
    Center {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Connected components and the main component's boundary edges
    Components {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Minimum spanning tree (Kruskal)
    Mst {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Shortest distance and all shortest paths between two vertices
    Shortest {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Target vertex
        target: String,
    },
    /// Vertices farther than N from the source
    Periphery {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Distance threshold
        n: f64,
    },
    /// Negative cycles reachable from the source (Bellman-Ford)
    NegativeCycles {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
    },
    /// Maximum flow between a source and a sink (Edmonds-Karp)
    MaxFlow {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Sink vertex
        sink: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::New {
            file,
            directed,
            weighted,
        } => commands::cmd_new(&file, directed, weighted),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Show { file } => commands::cmd_show(&file),
        Commands::AddVertex { file, id } => commands::cmd_add_vertex(&file, &id),
        Commands::AddEdge {
            file,
            u,
            v,
            weight,
            overwrite,
        } => commands::cmd_add_edge(&file, &u, &v, weight, overwrite),
        Commands::RemoveVertex { file, id } => commands::cmd_remove_vertex(&file, &id),
        Commands::RemoveEdge { file, u, v } => commands::cmd_remove_edge(&file, &u, &v),
        Commands::Edges { file } => commands::cmd_edges(&file, json),
        Commands::LowerIndegree { file, target } => {
            commands::cmd_lower_indegree(&file, &target, json)
        }
        Commands::Incoming { file, target } => commands::cmd_incoming(&file, &target, json),
        Commands::Reciprocal { file, output } => commands::cmd_reciprocal(&file, &output),
        Commands::Paths { file, u, v } => commands::cmd_paths(&file, &u, &v, json),
        Commands::Center { file } => commands::cmd_center(&file, json),
        Commands::Components { file } => commands::cmd_components(&file, json),
        Commands::Mst { file } => commands::cmd_mst(&file, json),
        Commands::Shortest {
            file,
            source,
            target,
        } => commands::cmd_shortest(&file, &source, &target, json),
        Commands::Periphery { file, source, n } => {
            commands::cmd_periphery(&file, &source, n, json)
        }
        Commands::NegativeCycles { file, source } => {
            commands::cmd_negative_cycles(&file, &source, json)
        }
        Commands::MaxFlow { file, source, sink } => {
            commands::cmd_max_flow(&file, &source, &sink, json)
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
