//! Loads a road file (or stdin) and prints the shortest route between two
//! towns, or lists the towns and roads it contains.
//!
//! Usage:
//!   cargo run --example route_finder -- roads.txt --from Town_1 --to Town_11
//!   cat roads.txt | cargo run --example route_finder -- --list-towns
//!   cargo run --example route_finder -- roads.txt --list-roads --timings

use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use clap::Parser;
use town_graph::{
    prelude::*,
    tracing_support::{dump_span_timings, init_tracing, init_verbose_tracing},
};

/// Find the shortest route between two towns.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road file, one `name;weight;source;destination` per line (use '-' or
    /// omit to read from stdin)
    input: Option<String>,

    /// Starting town
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination town
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Print every town, sorted by name
    #[arg(long)]
    list_towns: bool,

    /// Print every road, sorted by name
    #[arg(long)]
    list_roads: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print time spent in each traced operation
    #[arg(long)]
    timings: bool,
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        init_verbose_tracing();
    } else {
        init_tracing();
    }

    let mut manager = TownGraphManager::new();
    let loaded = match args.input.as_deref() {
        Some("-") | None => manager.populate_from_reader(io::stdin().lock()),
        Some(path) => match File::open(path) {
            Ok(file) => manager.populate_from_reader(BufReader::new(file)),
            Err(err) => {
                eprintln!("Failed to open '{path}': {err}");
                process::exit(1);
            }
        },
    };
    match loaded {
        Ok(count) => eprintln!("Loaded {count} roads."),
        Err(err) => {
            eprintln!("Invalid road data: {err}");
            process::exit(1);
        }
    }

    if args.list_towns {
        for town in manager.all_towns() {
            println!("{}", manager.get_town(&town).map_or(town.clone(), ToString::to_string));
        }
    }
    if args.list_roads {
        for name in manager.all_roads() {
            println!("{name}");
        }
    }
    if let (Some(from), Some(to)) = (args.from.as_deref(), args.to.as_deref()) {
        print_route(&manager, from, to);
    }

    if args.timings {
        dump_span_timings();
    }
}

fn print_route(manager: &TownGraphManager, from: &str, to: &str) {
    for name in [from, to] {
        if !manager.contains_town(name) {
            eprintln!("Unknown town: {name}");
            process::exit(1);
        }
    }
    match manager.graph().shortest_route(&Town::new(from), &Town::new(to)) {
        Some(route) if route.is_empty() => println!("{from} is the destination."),
        Some(route) => {
            println!("{route}");
            println!("Total: {} mi", route.total_weight());
        }
        None => {
            println!("No route from {from} to {to}.");
        }
    }
}
