use std::{error::Error, fmt::Debug, fs, path::PathBuf};

use clap::{Parser, Subcommand};
use graph_adt::{
    ConnectedComponents, CycleDetection, Dijkstra, DirectedWeightedGraph, Graph, GraphError,
    Traversal, UndirectedGraph,
    input::edgelist::{EdgeList, PairList},
};
use log::{debug, info};
use serde::Serialize;

#[derive(Parser)]
#[command(version, about = "Query small graphs loaded from edge lists")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Refuse directed graphs with more vertices than this
    #[arg(long, global = true, default_value_t = 4096)]
    max_vertices: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Directed weighted graph from '<SRC> <DST> <WEIGHT>' lines
    Directed {
        in_file: PathBuf,

        #[command(subcommand)]
        query: DirectedQuery,
    },

    /// Undirected graph from '<U> <V>' lines
    Undirected {
        in_file: PathBuf,

        #[command(subcommand)]
        query: UndirectedQuery,
    },
}

#[derive(Subcommand, Clone)]
enum DirectedQuery {
    /// Print the adjacency matrix
    Show,
    Edges,
    Dfs {
        start: usize,

        /// Stop once <END> is reached
        #[arg(short, long)]
        end: Option<usize>,
    },
    Bfs {
        start: usize,

        /// Stop once <END> is reached
        #[arg(short, long)]
        end: Option<usize>,
    },
    /// Check whether <VERTICES> form a path
    Path { vertices: Vec<usize> },
    Cycle,
    /// Shortest distances from <SOURCE>
    Dijkstra {
        source: usize,

        /// Also print the shortest path to every reachable vertex
        #[arg(short, long)]
        paths: bool,
    },
}

#[derive(Subcommand, Clone)]
enum UndirectedQuery {
    /// Print the adjacency lists
    Show,
    Edges,
    Dfs {
        start: String,

        /// Stop once <END> is reached
        #[arg(short, long)]
        end: Option<String>,
    },
    Bfs {
        start: String,

        /// Stop once <END> is reached
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Check whether <VERTICES> form a path
    Path { vertices: Vec<String> },
    Cycle,
    Components,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    match cli.command {
        Commands::Directed { in_file, query } => {
            info!("Load directed graph from {:?}", in_file);
            let graph = load_directed(&fs::read_to_string(&in_file)?, cli.max_vertices)?;
            directed(&graph, query, cli.json)
        }
        Commands::Undirected { in_file, query } => {
            info!("Load undirected graph from {:?}", in_file);
            let graph = UndirectedGraph::from(PairList::<String>::try_from(
                fs::read_to_string(&in_file)?.as_str(),
            )?);
            undirected(&graph, query, cli.json)
        }
    }
}

fn load_directed(
    text: &str,
    max_vertices: usize,
) -> Result<DirectedWeightedGraph, Box<dyn Error>> {
    let edge_list = EdgeList::try_from(text)?;

    if edge_list.vertex_count() > max_vertices {
        return Err(GraphError::TooManyVertices(edge_list.vertex_count()).into());
    }

    Ok(DirectedWeightedGraph::from(edge_list))
}

fn directed(
    graph: &DirectedWeightedGraph,
    query: DirectedQuery,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    match query {
        DirectedQuery::Show if json => emit(graph, true),
        DirectedQuery::Show => {
            print!("{graph}");
            Ok(())
        }
        DirectedQuery::Edges => emit(&graph.edges(), json),
        DirectedQuery::Dfs { start, end } => emit(&graph.dfs(&start, end.as_ref()), json),
        DirectedQuery::Bfs { start, end } => emit(&graph.bfs(&start, end.as_ref()), json),
        DirectedQuery::Path { vertices } => emit(&graph.is_valid_path(&vertices)?, json),
        DirectedQuery::Cycle => emit(&graph.has_cycle(), json),
        DirectedQuery::Dijkstra { source, paths } => {
            let result = graph.shortest_paths(source);
            debug!(
                "{} of {} vertices reachable from {source}",
                graph.vertices().iter().filter(|v| result.distance(**v).is_some()).count(),
                graph.vertex_count()
            );
            if !paths {
                return emit(&result.distances(), json);
            }

            let paths = graph
                .vertices()
                .into_iter()
                .map(|vertex| (vertex, result.distance(vertex), result.path(vertex)))
                .collect::<Vec<_>>();
            emit(&paths, json)
        }
    }
}

fn undirected(
    graph: &UndirectedGraph<String>,
    query: UndirectedQuery,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    match query {
        UndirectedQuery::Show if json => emit(graph, true),
        UndirectedQuery::Show => {
            println!("{graph}");
            Ok(())
        }
        UndirectedQuery::Edges => emit(&graph.edges(), json),
        UndirectedQuery::Dfs { start, end } => emit(&graph.dfs(&start, end.as_ref()), json),
        UndirectedQuery::Bfs { start, end } => emit(&graph.bfs(&start, end.as_ref()), json),
        UndirectedQuery::Path { vertices } => emit(&graph.is_valid_path(&vertices), json),
        UndirectedQuery::Cycle => emit(&graph.has_cycle(), json),
        UndirectedQuery::Components => emit(&graph.connected_components(), json),
    }
}

fn emit<T: Serialize + Debug + ?Sized>(value: &T, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value:?}");
    }
    Ok(())
}
