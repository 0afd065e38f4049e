//! Command line front end running union-find based graph algorithms on edge lists.
#![deny(unsafe_code)]

pub mod edge_list;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use dsf::graph::{connected_components, find_cycle, minimum_spanning_forest};
use std::{ffi::OsString, io::BufReader};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Edge list with one `a b [weight]` edge per line.
    input: OsString,
    /// Number of nodes, defaults to one more than the largest endpoint.
    #[clap(short = 'n', long)]
    nodes: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of connected components and the representative of every node.
    Components,
    /// Print the first edge that closes a cycle.
    Cycle,
    /// Print a minimum spanning forest.
    Mst,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    dsf_logger::setup();

    let file = std::fs::File::open(&args.input)
        .wrap_err_with(|| format!("failed to open {:?}", args.input))?;
    let list = edge_list::parse(BufReader::new(file))?;
    let nodes = args.nodes.unwrap_or(list.node_count);

    log::info!("read {} edges over {} nodes", list.edges.len(), nodes);

    match args.command {
        Command::Components => {
            let components = connected_components(nodes, &list.edges)?;
            println!("components: {}", components.count);
            for (node, label) in components.labels.iter().enumerate() {
                println!("{node} {label}");
            }
        }
        Command::Cycle => match find_cycle(nodes, &list.edges)? {
            Some(index) => {
                let edge = list.edges[index];
                println!("cycle closed at line {}: {} {}", list.lines[index], edge.a, edge.b);
            }
            None => println!("acyclic"),
        },
        Command::Mst => {
            let forest = minimum_spanning_forest(nodes, &list.edges)?;
            for &index in forest.edges.iter() {
                let edge = list.edges[index];
                println!("{} {} {}", edge.a, edge.b, edge.weight);
            }
            println!("total weight: {}", forest.total_weight);
            println!("trees: {}", forest.tree_count);
        }
    }

    Ok(())
}
