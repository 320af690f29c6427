//! Command-line maze solver.
//!
//! Loads a text layout (or the built-in one), runs one or all of the search
//! strategies and prints the explored maze with the solution path marked.
//!
//! ```text
//! mazeai-demo --algorithm bfs
//! mazeai-demo --all --heuristic manhattan mazes/walled.txt
//! ```

mod render;

use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use mazeai_core::Maze;
use mazeai_solve::{Algorithm, Heuristic, Outcome, Solver, SolverConfig};

const DEFAULT_LAYOUT: &str = include_str!("../mazes/default.txt");

#[derive(Parser, Debug)]
#[command(name = "mazeai-demo")]
#[command(about = "Solve a text maze with DFS, BFS, Dijkstra or A*")]
struct Args {
    /// Layout file: '#' wall, '.' open, 'S' start, 'E' exit
    layout: Option<PathBuf>,

    /// Strategy: a selector (taken mod 4) or a name
    #[arg(short, long, default_value = "DFS")]
    algorithm: Algorithm,

    /// A* heuristic
    #[arg(long, default_value = "squared-euclidean")]
    heuristic: Heuristic,

    /// Run every strategy in turn
    #[arg(long)]
    all: bool,

    /// Never colour the output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load(path: Option<&PathBuf>) -> Result<Maze, Box<dyn Error>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => DEFAULT_LAYOUT.to_string(),
    };
    Ok(Maze::parse(&text)?)
}

fn run(maze: &mut Maze, config: SolverConfig, color: bool) -> Result<(), Box<dyn Error>> {
    let algorithm = config.algorithm();
    let outcome = Solver::with_config(maze, config).solve()?;

    println!("== {algorithm} ==");
    print!("{}", render::render(maze, color));
    match outcome {
        Outcome::Skipped => println!("skipped: maze has no start or no exit"),
        Outcome::NoPath => println!("no path ({} cells explored)", maze.visited_count()),
        Outcome::Solved { length } => {
            println!(
                "path of {length} steps ({} cells explored)",
                maze.visited_count()
            );
            if let Some(moves) = render::moves(maze) {
                println!("moves: {moves}");
            }
        }
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut maze = load(args.layout.as_ref())?;
    log::info!("loaded maze with {} cells", maze.len());

    let color = !args.no_color && std::io::stdout().is_terminal();
    let base = SolverConfig::default().with_heuristic(args.heuristic);

    if args.all {
        for algorithm in Algorithm::ALL {
            maze.reset();
            run(&mut maze, base.with_algorithm(algorithm), color)?;
        }
    } else {
        run(&mut maze, base.with_algorithm(args.algorithm), color)?;
    }
    Ok(())
}
