use std::{
    error::Error,
    fs::File,
    io::BufWriter,
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use path_finders::{
    dijkstra,
    graphs::{
        graph_functions::{random_graph, random_pairs, validate_path},
        reversible_vec_graph::ReversibleVecGraph,
        Vertex, Weight,
    },
    heuristics::{landmarks::Landmarks, HeuristicFunction},
    utility::get_progressbar,
    Algorithm, HeapQueue, KeyedQueue, MinimumPriorityQueue, PathFinder, QueueKind,
};
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

type BoxedError = Box<dyn Error + Send + Sync>;

/// Builds a random graph, answers `queries` random queries with every
/// algorithm and validates each answer against Dijkstra's algorithm and the
/// graph itself. Average query times are logged per algorithm.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices of the random graph
    #[arg(long, default_value_t = 10_000)]
    vertices: u32,
    /// Number of random edges, loops and duplicates are dropped
    #[arg(long, default_value_t = 40_000)]
    edges: u32,
    /// Edge weights are drawn from 0..=max_weight
    #[arg(long, default_value_t = 100)]
    max_weight: u32,
    #[arg(short, long, default_value_t = 1_000)]
    queries: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Priority queue every search spawns its frontiers from
    #[arg(long, value_enum, default_value_t = QueueKind::Keyed)]
    queue: QueueKind,
    /// Number of random landmarks guiding A*
    #[arg(long, default_value_t = 8)]
    landmarks: u32,
    /// Path where the per query timings shall be saved
    #[arg(short, long)]
    timing_results: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TimingResult {
    algorithm: Algorithm,
    source: Vertex,
    target: Vertex,
    distance: Option<Weight>,
    timing_in_seconds: f64,
}

fn main() -> Result<(), BoxedError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let args = Args::parse();
    info!(?args, "starting validate_and_time");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let graph = random_graph(args.vertices, args.edges, args.max_weight, &mut rng);
    info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        "generated graph"
    );
    let pairs = random_pairs(&graph, args.queries, &mut rng);
    let landmarks = Landmarks::random(&graph, args.landmarks, &mut rng)?;

    let capacity = graph.number_of_vertices() as usize;
    let results = match args.queue {
        QueueKind::Keyed => {
            validate_and_time(&graph, &landmarks, &pairs, KeyedQueue::with_capacity(capacity))?
        }
        QueueKind::Heap => {
            validate_and_time(&graph, &landmarks, &pairs, HeapQueue::with_capacity(capacity))?
        }
    };

    if let Some(timing_results) = args.timing_results {
        info!(path = ?timing_results, "writing timing results");
        let writer = BufWriter::new(File::create(timing_results)?);
        serde_json::to_writer(writer, &results)?;
    }

    Ok(())
}

fn validate_and_time<Q>(
    graph: &ReversibleVecGraph,
    landmarks: &Landmarks,
    pairs: &[(Vertex, Vertex)],
    queue: Q,
) -> Result<Vec<TimingResult>, BoxedError>
where
    Q: MinimumPriorityQueue<Vertex> + Clone + Send + Sync,
{
    let weight_function = graph.weight_function();
    let heuristic = |node: &Vertex, target: &Vertex| landmarks.estimate(node, target);

    let reference = dijkstra(graph, weight_function).with_queue(queue.clone());
    let expected = pairs
        .par_iter()
        .progress_with(get_progressbar(
            "Computing reference distances",
            pairs.len() as u64,
        ))
        .map(|(source, target)| reference.shortest_path_distance(source, target))
        .collect::<Result<Vec<_>, _>>()?;

    let mut results = Vec::new();
    for algorithm in Algorithm::all() {
        let path_finder = algorithm.path_finder(graph, weight_function, heuristic, queue.clone());
        let timings = pairs
            .par_iter()
            .zip(expected.par_iter())
            .progress_with(get_progressbar(
                &format!("Testing {:?}", algorithm),
                pairs.len() as u64,
            ))
            .map(|(&(source, target), &expected)| -> Result<TimingResult, BoxedError> {
                let start = Instant::now();
                let path = path_finder.shortest_path(&source, &target)?;
                let timing_in_seconds = start.elapsed().as_secs_f64();

                validate_path(graph, source, target, &path, expected).map_err(|message| {
                    format!("{:?} {} -> {}: {}", algorithm, source, target, message)
                })?;

                Ok(TimingResult {
                    algorithm,
                    source,
                    target,
                    distance: path.map(|path| path.distance),
                    timing_in_seconds,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let average = timings
            .iter()
            .map(|result| result.timing_in_seconds)
            .sum::<f64>()
            / timings.len().max(1) as f64;
        info!(
            ?algorithm,
            average = ?Duration::from_secs_f64(average),
            queries = timings.len(),
            "all correct"
        );
        results.extend(timings);
    }

    Ok(results)
}
