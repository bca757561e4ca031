use postroute::export;
use postroute::graph::Graph;
use postroute::solver::solve;
use postroute::utils::{Args, Parser, enumerate_input_files, read_csv_edges};

use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() -> postroute::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let files = enumerate_input_files(&args)?;
    for path in &files {
        let setup_time = Instant::now();

        let edges = read_csv_edges(path)?;
        let graph = Graph::from_edges(edges)?;

        println!("------");
        println!("Instance: {:?}", path.display().to_string());
        println!(
            "Graph: {} vertices, {} edges, {} odd",
            graph.vertex_count(),
            graph.edge_count(),
            graph.odd_vertices().len()
        );

        let start_time = Instant::now();
        let tour = solve(&graph)?;
        let duration = start_time.elapsed();

        println!(
            "Time computing: {:?} ({:?} setup)",
            duration,
            start_time - setup_time
        );
        println!("Base cost: {}", graph.total_weight());
        println!("Total cost: {}", tour.total_cost);
        println!("Tour: {}", tour.display(&graph));

        if let Some(out) = &args.save_tour {
            let mut file = File::create(out)?;
            writeln!(file, "{}", tour.display(&graph))?;
            println!("Tour saved to: {out}");
        }

        if let Some(out) = &args.parquet {
            export::serialize_to_parquet(&tour, &graph, out)
                .map_err(|e| postroute::Error::invalid_input(format!("parquet export failed: {e}")))?;
            println!("Legs saved to: {out}");
        }
    }

    Ok(())
}
