//! Builds a tree from the keys on the command line and prints what it looks like.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use plain_bst::{Key, LevelPrinter, Tree};

const DEFAULT_KEYS: [Key; 9] = [5, 3, 2, 1, 6, 8, 4, 7, 9];

/// Insert keys into an unbalanced binary search tree and report on its shape
#[derive(Parser, Debug)]
#[command(name = "bst")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keys to insert, in order. Defaults to 5 3 2 1 6 8 4 7 9
    #[arg(allow_negative_numbers = true)]
    keys: Vec<Key>,

    /// Log more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let keys = if cli.keys.is_empty() {
        DEFAULT_KEYS.to_vec()
    } else {
        cli.keys
    };

    let tree: Tree = keys.iter().copied().collect();

    if let Err(e) = report(&tree, &keys, &mut io::stdout().lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Could not set up logging: {}", e);
    }
}

fn report<W: Write>(tree: &Tree, keys: &[Key], out: &mut W) -> io::Result<()> {
    writeln!(out, "Full Tree:")?;
    write!(out, "{}", tree)?;
    writeln!(out)?;

    writeln!(out, "number of Nodes  = {}", tree.num_nodes())?;
    writeln!(out, "number of Leaves = {}", tree.num_leaves())?;
    writeln!(out, "height of tree   = {}", tree.height())?;
    writeln!(out, "is a BST         = {}", tree.is_bst())?;
    writeln!(out)?;

    for key in keys {
        if let Some(node) = tree.find(*key) {
            writeln!(out, "height({}) = {}", key, node.height())?;
            writeln!(out, "depth({}) = {}", key, tree.depth(node))?;
        }
    }
    writeln!(out)?;

    writeln!(out, "In-order traversal:")?;
    let mut printer = LevelPrinter::new(out);
    tree.in_order(&mut printer);
    printer.finish().map(drop)
}
