//! Domain types for the flight route planner.
//!
//! This module contains the data records the planner works with. The
//! `Iata` code type enforces its invariant at construction time, so code
//! that receives one can trust its validity.

mod airport;
mod flight;
mod iata;
mod route;

pub use airport::Airport;
pub use flight::Flight;
pub use iata::{Iata, InvalidIata};
pub use route::Route;
