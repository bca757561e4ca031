pub mod error;
pub mod export;
pub mod graph;
pub mod solver;
pub mod tour;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use graph::Graph;
pub use solver::solve;
pub use tour::Tour;
