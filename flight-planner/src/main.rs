use std::io::{self, BufReader};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use flight_planner::graph::FlightGraph;
use flight_planner::menu::ConsoleMenu;
use flight_planner::repository;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let data_dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data".to_string())
        .into();

    let airports = repository::load_airports(&data_dir.join("airports.csv"))
        .expect("Failed to load airports");
    let flights =
        repository::load_flights(&data_dir.join("flights.csv")).expect("Failed to load flights");
    let routes_path = data_dir.join("routes.csv");
    let routes = repository::load_routes(&routes_path).expect("Failed to load routes");

    let graph = FlightGraph::new(&airports, flights.clone());
    println!(
        "Loaded {} airports and {} flights",
        graph.airport_count(),
        graph.flight_count()
    );

    let mut menu = ConsoleMenu::new(&graph, &airports, &flights, routes);
    let stdin = BufReader::new(io::stdin());
    menu.run(stdin, io::stdout()).expect("Menu I/O failed");

    repository::save_routes(&routes_path, menu.routes()).expect("Failed to save routes");
}
