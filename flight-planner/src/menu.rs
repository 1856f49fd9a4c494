//! Interactive console menu.
//!
//! Text front end over the planner: route calculation with a criterion
//! submenu, sorting of computed routes, and flight search. Reads from any
//! `BufRead` and writes to any `Write`, so the whole flow is testable
//! with scripted input.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{Airport, Flight, Iata, Route};
use crate::graph::FlightGraph;
use crate::planner::{RouteCriterion, RouteFinder};
use crate::ranking::{compare, merge_sort, quick_sort};

const MAIN_MENU: &str = "\
===== Flight route planner =====
1 - Calculate a route
2 - Sort computed routes
3 - Search flights
9 - Exit
Your choice: ";

const CRITERION_MENU: &str = "\
Choose a criterion:
1 - Cheapest route
2 - Fastest route
3 - Fewest stopovers
4 - Slowest route
Your choice: ";

/// The interactive menu and its session state.
pub struct ConsoleMenu<'a> {
    graph: &'a FlightGraph,
    airports: &'a [Airport],
    flights: &'a [Flight],
    finder: RouteFinder,
    routes: Vec<Route>,
}

impl<'a> ConsoleMenu<'a> {
    /// Create a menu over loaded data. Previously saved routes seed the
    /// sortable batch.
    pub fn new(
        graph: &'a FlightGraph,
        airports: &'a [Airport],
        flights: &'a [Flight],
        routes: Vec<Route>,
    ) -> Self {
        let next_id = routes.iter().map(|route| route.id).max().unwrap_or(0) + 1;
        let finder = RouteFinder::starting_at(next_id);
        Self {
            graph,
            airports,
            flights,
            finder,
            routes,
        }
    }

    /// Computed and loaded routes, in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            write!(output, "{MAIN_MENU}")?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                return Ok(()); // End of input
            };

            match line.trim() {
                "1" => self.calculate_route(&mut lines, &mut output)?,
                "2" => self.sort_routes(&mut lines, &mut output)?,
                "3" => self.search_flights(&mut lines, &mut output)?,
                "9" => {
                    writeln!(output, "Exit.")?;
                    return Ok(());
                }
                _ => writeln!(output, "Invalid choice, please try again.")?,
            }
        }
    }

    fn calculate_route(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
        output: &mut impl Write,
    ) -> io::Result<()> {
        let codes: Vec<&str> = self.airports.iter().map(|a| a.iata.as_str()).collect();
        writeln!(output, "Known airports: {}", codes.join(", "))?;

        let Some(origin) = prompt_iata(lines, output, "Enter origin IATA code (e.g. VIE): ")?
        else {
            return Ok(());
        };
        let Some(destination) =
            prompt_iata(lines, output, "Enter destination IATA code (e.g. JFK): ")?
        else {
            return Ok(());
        };
        if origin == destination {
            writeln!(output, "Origin and destination must be different.")?;
            return Ok(());
        }

        write!(output, "{CRITERION_MENU}")?;
        output.flush()?;
        let Some(choice) = lines.next().transpose()? else {
            return Ok(());
        };
        let criterion = match choice.trim() {
            "1" => RouteCriterion::Cheapest,
            "2" => RouteCriterion::Fastest,
            "3" => RouteCriterion::FewestStopovers,
            "4" => RouteCriterion::Slowest,
            _ => {
                writeln!(output, "Invalid choice.")?;
                return Ok(());
            }
        };

        match self.finder.find_route(self.graph, origin, destination, criterion) {
            Some(route) => {
                print_route(output, "Result route", &route)?;
                self.routes.push(route);
            }
            None => writeln!(output, "No route found.")?,
        }
        Ok(())
    }

    fn sort_routes(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
        output: &mut impl Write,
    ) -> io::Result<()> {
        if self.routes.is_empty() {
            writeln!(output, "No routes to sort; calculate some first.")?;
            return Ok(());
        }

        writeln!(output, "Choose comparator:")?;
        writeln!(output, "1 - Price (ascending)")?;
        writeln!(output, "2 - Duration (ascending)")?;
        writeln!(output, "3 - Stopovers (ascending)")?;
        writeln!(output, "4 - Composite (price, duration, stopovers)")?;
        write!(output, "Your choice: ")?;
        output.flush()?;
        let Some(comparator_choice) = lines.next().transpose()? else {
            return Ok(());
        };
        let comparator: fn(&Route, &Route) -> std::cmp::Ordering = match comparator_choice.trim() {
            "1" => compare::by_price,
            "2" => compare::by_duration,
            "3" => compare::by_stopovers,
            "4" => compare::combined,
            _ => {
                writeln!(output, "Unknown comparator, using price.")?;
                compare::by_price
            }
        };

        writeln!(output, "Choose algorithm:")?;
        writeln!(output, "1 - Stable (merge sort)")?;
        writeln!(output, "2 - Unstable (quicksort)")?;
        write!(output, "Your choice: ")?;
        output.flush()?;
        let Some(algorithm_choice) = lines.next().transpose()? else {
            return Ok(());
        };

        match algorithm_choice.trim() {
            "2" => {
                let mut rng = StdRng::from_entropy();
                quick_sort(&mut self.routes, &comparator, &mut rng);
            }
            _ => merge_sort(&mut self.routes, &comparator),
        }

        writeln!(output, "Sorted routes:")?;
        for route in &self.routes {
            print_route(output, &format!("Route {}", route.id), route)?;
        }
        Ok(())
    }

    fn search_flights(
        &self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
        output: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(output, "Search flights by:")?;
        writeln!(output, "1 - Origin")?;
        writeln!(output, "2 - Destination")?;
        writeln!(output, "3 - Airline")?;
        writeln!(output, "4 - Flight number")?;
        write!(output, "Your choice: ")?;
        output.flush()?;
        let Some(choice) = lines.next().transpose()? else {
            return Ok(());
        };

        let Some(term) = prompt(lines, output, "Search term: ")? else {
            return Ok(());
        };
        let term = term.trim().to_ascii_uppercase();

        let matches: Vec<&Flight> = self
            .flights
            .iter()
            .filter(|flight| match choice.trim() {
                "1" => flight.origin.as_str() == term,
                "2" => flight.destination.as_str() == term,
                "3" => flight.airline.to_ascii_uppercase() == term,
                "4" => flight.flight_number.to_ascii_uppercase() == term,
                _ => false,
            })
            .collect();

        if matches.is_empty() {
            writeln!(output, "No matching flights.")?;
        } else {
            for flight in matches {
                writeln!(
                    output,
                    "{} {} {}->{} dep {} ({} min, €{:.2})",
                    flight.airline,
                    flight.flight_number,
                    flight.origin,
                    flight.destination,
                    flight.departure_time.format("%H:%M"),
                    flight.duration,
                    flight.price,
                )?;
            }
        }
        Ok(())
    }
}

/// Print a route result in a human-readable way.
pub fn print_route(output: &mut impl Write, title: &str, route: &Route) -> io::Result<()> {
    writeln!(output, "--- {title} ---")?;
    writeln!(
        output,
        "Flights: {}\nDuration: {} min\nPrice: €{:.2}\nStopovers: {}",
        route.flights, route.total_duration, route.total_price, route.stopovers,
    )
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    output: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    loop {
        write!(output, "{message}")?;
        output.flush()?;
        match lines.next().transpose()? {
            None => return Ok(None),
            Some(line) if line.trim().is_empty() => {
                writeln!(output, "Input must not be empty.")?;
            }
            Some(line) => return Ok(Some(line.trim().to_string())),
        }
    }
}

fn prompt_iata(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    output: &mut impl Write,
    message: &str,
) -> io::Result<Option<Iata>> {
    loop {
        let Some(line) = prompt(lines, output, message)? else {
            return Ok(None);
        };
        match Iata::parse(&line.to_ascii_uppercase()) {
            Ok(iata) => return Ok(Some(iata)),
            Err(error) => writeln!(output, "{error}")?,
        }
    }
}
