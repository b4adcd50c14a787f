//! This crate provides the data model shared between optimizers and the batch evaluator

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod objective;
mod objective_output;

pub use objective::{FitnessVector, Objective, ParameterMatrix};
pub use objective_output::ObjectiveOutput;
