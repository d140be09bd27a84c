use std::path::PathBuf;

use anyhow::Context;
use chrono::TimeDelta;
use clap::{Parser, Subcommand};
use itertools::Itertools;

use transit_network::{JsonAdapter, TransitNetwork, logging};

const DEMO_TRIPS: [(&str, &str); 5] = [
    ("Union", "Harbor"),
    ("Union", "University"),
    ("Union", "Airport"),
    ("Union", "Ferry Landing"),
    ("Depot", "Union"),
];

#[derive(Parser)]
#[command(name = "transit-network")]
#[command(about = "Route queries over a transit network of stations, lines and travel times")]
struct Cli {
    /// JSON network description; the bundled sample network is used when omitted
    #[arg(short, long, global = true)]
    network: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether one station can be reached from another
    Travel { from: String, to: String },
    /// Route with the fewest stations
    Stops { from: String, to: String },
    /// Route with the lowest total travel time
    Fastest { from: String, to: String },
    /// Count line changes along a route
    Transfers {
        #[arg(required = true, num_args = 1..)]
        stations: Vec<String>,
    },
    /// Network statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every query against a few sample trips
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let network = load_network(cli.network.as_ref())?;

    match cli.command {
        Command::Travel { from, to } => print_travel(&network, &from, &to),
        Command::Stops { from, to } => print_fewest_stops(&network, &from, &to),
        Command::Fastest { from, to } => print_fastest(&network, &from, &to),
        Command::Transfers { stations } => {
            println!(
                "{} transfer(s) along {}",
                network.count_transfers(&stations),
                format_route(&stations)
            );
        }
        Command::Stats { json } => print_stats(&network, json)?,
        Command::Demo => {
            for (from, to) in DEMO_TRIPS {
                println!("== {from} to {to}");
                print_travel(&network, from, to);
                print_fewest_stops(&network, from, to);
                print_fastest(&network, from, to);
                println!();
            }
            print_stats(&network, false)?;
        }
    }

    Ok(())
}

fn load_network(path: Option<&PathBuf>) -> anyhow::Result<TransitNetwork> {
    let now = std::time::Instant::now();
    let adapter = match path {
        Some(path) => JsonAdapter::from_path(path)?,
        None => JsonAdapter::sample().context("loading bundled sample network")?,
    };
    let network = TransitNetwork::from_adapter(&adapter)?;
    tracing::debug!(elapsed = ?now.elapsed(), "network loaded");
    Ok(network)
}

fn print_travel(network: &TransitNetwork, from: &str, to: &str) {
    if network.can_travel(from, to) {
        println!("Can travel from {from} to {to}");
    } else {
        println!("Cannot travel from {from} to {to}");
    }
}

fn print_fewest_stops(network: &TransitNetwork, from: &str, to: &str) {
    let route = network.fewest_stops(from, to);
    if route.is_empty() {
        println!("Fewest stops: no route from {from} to {to}");
        return;
    }

    println!(
        "Fewest stops: {} ({} stations, {} transfer(s))",
        format_route(&route),
        route.len(),
        network.count_transfers(&route)
    );
}

fn print_fastest(network: &TransitNetwork, from: &str, to: &str) {
    let Some(journey) = network.fastest_journey(from, to) else {
        println!("Fastest: no route from {from} to {to}");
        return;
    };

    println!(
        "Fastest: {} in {} ({} transfer(s))",
        format_route(&journey.stations),
        format_duration(journey.duration()),
        network.count_transfers(&journey.stations)
    );
    for leg in network.legs(&journey.stations) {
        println!(
            "  {} -> {} on {} ({} min)",
            leg.from, leg.to, leg.line, leg.travel_time
        );
    }
}

fn print_stats(network: &TransitNetwork, json: bool) -> anyhow::Result<()> {
    let stats = network.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Stations: {}", stats.total_stations);
    println!("Connections: {}", stats.total_connections);
    println!("Lines: {}", network.lines().iter().join(", "));
    match stats.most_connected_station {
        Some(station) => println!("Most connected station: {station}"),
        None => println!("Most connected station: none"),
    }
    Ok(())
}

fn format_route(route: &[String]) -> String {
    route.iter().join(" -> ")
}

fn format_duration(duration: TimeDelta) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else {
        format!("{minutes} min")
    }
}
