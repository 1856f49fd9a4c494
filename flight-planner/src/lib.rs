//! Flight route planner.
//!
//! Computes optimal itineraries through a directed graph of scheduled
//! flights, subject to feasibility constraints (maximum number of flights,
//! minimum connection time), and ranks batches of itineraries by multiple
//! criteria using interchangeable sorting algorithms.

pub mod domain;
pub mod graph;
pub mod menu;
pub mod planner;
pub mod ranking;
pub mod repository;
