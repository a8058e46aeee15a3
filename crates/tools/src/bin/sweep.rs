use std::collections::{BTreeSet, VecDeque};

use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{Direction, MazeResult, Point, Walls, generate};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Generates many mazes and checks their structural invariants.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    count: u32,
    #[arg(long, default_value_t = 24)]
    max_rows: u64,
    #[arg(long, default_value_t = 24)]
    max_cols: u64,
    /// Fixed braid ratio; a random ratio per maze when omitted
    #[arg(short, long)]
    loop_ratio: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.max_rows == 0 || args.max_cols == 0 {
        bail!("--max-rows and --max-cols must be positive");
    }

    println!(
        "Sweeping {} mazes up to {}x{} from seed {}...",
        args.count, args.max_rows, args.max_cols, args.seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut fingerprints = BTreeSet::new();
    let mut braided_passages = 0_usize;

    for _ in 0..args.count {
        let rows = 1 + (rng.next_u64() % args.max_rows) as usize;
        let cols = 1 + (rng.next_u64() % args.max_cols) as usize;
        let maze_seed = rng.next_u64();
        let loop_ratio =
            args.loop_ratio.unwrap_or_else(|| (rng.next_u64() % 101) as f64 / 100.0);

        let maze = generate(rows, cols, Some(maze_seed), loop_ratio)?;
        if let Err(violation) = check_invariants(&maze, loop_ratio) {
            bail!("{rows}x{cols} seed={maze_seed} loop_ratio={loop_ratio}: {violation}");
        }

        braided_passages += maze.passage_count() + 1 - rows * cols;
        fingerprints.insert(maze.fingerprint());
    }

    println!("Distinct mazes: {}", fingerprints.len());
    println!("Passages added by braiding: {braided_passages}");
    println!("Sweep completed successfully.");
    Ok(())
}

fn check_invariants(maze: &MazeResult, loop_ratio: f64) -> Result<(), String> {
    let cells = maze.rows * maze.cols;
    if maze.cells.len() != cells {
        return Err(format!("expected {cells} cells, got {}", maze.cells.len()));
    }

    for cell in &maze.cells {
        let point = Point { x: cell.x, y: cell.y };
        for direction in Direction::ALL {
            let facing = match neighbor(maze, point, direction) {
                Some(next) => walls_at(maze, next).has(direction.opposite()),
                None => true,
            };
            if cell.walls.has(direction) != facing {
                return Err(format!("asymmetric {direction:?} wall at {point:?}"));
            }
        }
    }

    let passages = maze.passage_count();
    if passages + 1 < cells || (loop_ratio == 0.0 && passages + 1 != cells) {
        return Err(format!("{passages} passages for {cells} cells at ratio {loop_ratio}"));
    }

    for endpoint in [maze.start, maze.end] {
        if !maze.is_boundary(endpoint) {
            return Err(format!("endpoint {endpoint:?} is not on the boundary"));
        }
    }

    let reached = reachable_from(maze, maze.start);
    if reached != cells {
        return Err(format!("only {reached} of {cells} cells reachable from start"));
    }

    Ok(())
}

fn reachable_from(maze: &MazeResult, origin: Point) -> usize {
    let mut seen = BTreeSet::from([origin]);
    let mut open = VecDeque::from([origin]);
    while let Some(point) = open.pop_front() {
        let walls = walls_at(maze, point);
        for direction in Direction::ALL {
            if walls.has(direction) {
                continue;
            }
            if let Some(next) = neighbor(maze, point, direction)
                && seen.insert(next)
            {
                open.push_back(next);
            }
        }
    }
    seen.len()
}

fn walls_at(maze: &MazeResult, point: Point) -> Walls {
    maze.cells[point.y * maze.cols + point.x].walls
}

fn neighbor(maze: &MazeResult, point: Point, direction: Direction) -> Option<Point> {
    match direction {
        Direction::Top => point.y.checked_sub(1).map(|y| Point { x: point.x, y }),
        Direction::Bottom => {
            (point.y + 1 < maze.rows).then(|| Point { x: point.x, y: point.y + 1 })
        }
        Direction::Left => point.x.checked_sub(1).map(|x| Point { x, y: point.y }),
        Direction::Right => {
            (point.x + 1 < maze.cols).then(|| Point { x: point.x + 1, y: point.y })
        }
    }
}
