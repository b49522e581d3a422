pub use crate::errors::ChainError;

pub mod cli;
pub mod errors;
pub mod generator;
pub mod graph;
pub mod parser;
pub mod runtime;
