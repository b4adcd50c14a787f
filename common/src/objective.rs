use nalgebra::{DMatrix, DVector};

use crate::ObjectiveOutput;

/// Candidate solutions of one generation.
/// Each row is a candidate, each column a dimension of the search space.
pub type ParameterMatrix = DMatrix<f64>;

/// One fitness value per candidate row
pub type FitnessVector = DVector<f64>;

/// An objective function evaluated over a whole batch of candidates at once.
/// A: The extra arguments forwarded verbatim on every call
///
/// Any closure `FnMut(&ParameterMatrix, &A) -> ObjectiveOutput` is an objective.
pub trait Objective<A: ?Sized> {
    /// Evaluate all candidates in `params`
    ///
    /// # Arguments:
    /// params: The candidates, one per row
    /// args: Extra arguments which are opaque to the caller
    ///
    /// # Returns:
    /// Whatever the objective produced, validated by the caller
    fn evaluate(&mut self, params: &ParameterMatrix, args: &A) -> ObjectiveOutput;
}

impl<A, F> Objective<A> for F
where
    A: ?Sized,
    F: FnMut(&ParameterMatrix, &A) -> ObjectiveOutput,
{
    #[inline(always)]
    fn evaluate(&mut self, params: &ParameterMatrix, args: &A) -> ObjectiveOutput {
        self(params, args)
    }
}
