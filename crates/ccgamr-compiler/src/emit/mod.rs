//! Output from a normalized graph.
//!
//! Both outputs walk the graph depth-first from each root in root order,
//! expanding a node at most once per walk. Visited state lives in the walk,
//! so a graph can be printed any number of times.

mod printer;
mod propositions;

#[cfg(test)]
mod printer_tests;

pub use printer::AmrPrinter;
pub use propositions::{Proposition, extract_propositions};
