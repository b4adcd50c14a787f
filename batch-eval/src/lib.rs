//! Batch evaluation of objective functions for population based optimizers.
//!
//! An optimizer hands over all candidates of a generation as one matrix,
//! the objective is called exactly once for the whole batch and its output
//! is validated before the optimizer gets to see it.

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod batch_evaluator;
mod error;
mod eval_counter;
mod row_objectives;

pub use batch_evaluator::{evaluate, BatchEvaluator, Evaluation};
pub use common::{FitnessVector, Objective, ObjectiveOutput, ParameterMatrix};
pub use error::{EvalError, Result};
pub use eval_counter::EvalCounter;
pub use row_objectives::{ParallelRows, RowWise};
