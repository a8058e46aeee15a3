use anyhow::{Context, Result};
use clap::Parser;
use maze_core::render::to_ascii;
use maze_core::{GenerateRequest, MazeGenerator, MazeResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a maze and print it as JSON", long_about = None)]
struct Args {
    /// Path to a JSON request body, as accepted by `POST /maze/generate`
    #[arg(long, conflicts_with_all = ["rows", "cols", "seed", "loop_ratio"])]
    request: Option<PathBuf>,

    /// Number of rows
    #[arg(long)]
    rows: Option<u64>,

    /// Number of columns
    #[arg(long)]
    cols: Option<u64>,

    /// Seed for reproducible output; omitted means a fresh random maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability of opening an extra wall at each dead end (0 to 1)
    #[arg(short, long)]
    loop_ratio: Option<f64>,

    /// Write the JSON response here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,

    /// Draw the maze on stderr
    #[arg(long)]
    ascii: bool,

    /// Print generation events on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let request = load_request(&args)?.validate().context("Invalid maze request")?;
    let mut generator = MazeGenerator::for_request(&request);
    let maze = generator.generate(request.loop_ratio);

    if args.verbose {
        for event in generator.log() {
            eprintln!("{}", serde_json::to_string(event)?);
        }
    }
    if args.ascii {
        eprint!("{}", to_ascii(&maze));
    }

    let json = render_json(&maze, args.pretty)?;
    match &args.output {
        Some(path) => {
            write_output(path, &json)?;
            eprintln!("Wrote {}x{} maze to {}", maze.rows, maze.cols, path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn load_request(args: &Args) -> Result<GenerateRequest> {
    if let Some(path) = &args.request {
        let body = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display()))?;
        return GenerateRequest::from_json(&body)
            .with_context(|| format!("Failed to parse request file: {}", path.display()));
    }

    Ok(GenerateRequest {
        rows: args.rows.map(Value::from),
        cols: args.cols.map(Value::from),
        loop_ratio: args.loop_ratio,
        seed: args.seed.map(Value::from),
    })
}

fn render_json(maze: &MazeResult, pretty: bool) -> Result<String> {
    let json =
        if pretty { serde_json::to_string_pretty(maze) } else { serde_json::to_string(maze) };
    json.context("Failed to serialize maze")
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write maze file: {}", path.display()))
}
