use std::process;

use bintree::{Error, Tree};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exit code for a tree literal that could not be parsed.
const EXIT_USAGE: i32 = 2;
/// Exit code for a tree an algorithm has no answer for, or whose answer doesn't fit.
const EXIT_PRECONDITION: i32 = 1;

/// Runs a binary tree algorithm on a level-order tree literal and prints the result
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,

    /// Algorithm to run
    #[arg(value_enum)]
    command: Command,

    /// Tree in level order, e.g. "[1, 2, 3, null, 5]"
    tree: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// Largest sum along any path
    MaxPathSum,
    /// Values grouped by column
    Vertical,
    /// Root, left edge, leaves, right edge
    Boundary,
    /// Edges on the longest path
    Diameter,
    /// Rightmost value of every level
    RightView,
    /// Leftmost value of every level
    LeftView,
    /// Levels in alternating direction
    Zigzag,
    /// Levels left to right
    LevelOrder,
    /// The normalized literal with its size and height
    Show,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match run(cli.command, &cli.tree) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match e {
                Error::Parse { .. } => EXIT_USAGE,
                Error::EmptyTree { .. } | Error::Overflow { .. } => EXIT_PRECONDITION,
            };
            process::exit(code);
        }
    }
}

fn run(command: Command, literal: &str) -> bintree::Result<String> {
    let tree: Tree<i64> = literal.parse()?;
    tracing::info!(nodes = tree.len(), ?command, "parsed tree");

    let output = match command {
        Command::MaxPathSum => bintree::max_path_sum(&tree)?.to_string(),
        Command::Vertical => format!("{:?}", bintree::vertical_order(&tree)),
        Command::Boundary => format!("{:?}", bintree::boundary(&tree)),
        Command::Diameter => bintree::diameter(&tree).to_string(),
        Command::RightView => format!("{:?}", bintree::right_side_view(&tree)),
        Command::LeftView => format!("{:?}", bintree::left_side_view(&tree)),
        Command::Zigzag => format!("{:?}", bintree::zigzag_level_order(&tree)),
        Command::LevelOrder => format!("{:?}", bintree::level_order(&tree)),
        Command::Show => format!(
            "{} (nodes: {}, height: {})",
            tree,
            tree.len(),
            tree.height()
        ),
    };
    Ok(output)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // `RUST_LOG` refines the level picked on the command line.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
