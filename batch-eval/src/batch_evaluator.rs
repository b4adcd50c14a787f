//! Evaluating a whole generation of candidates with contract enforcement

use common::{FitnessVector, Objective, ParameterMatrix};

use crate::{EvalCounter, EvalError, Result};

/// The outcome of a successful batch evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation<'p> {
    /// There was no objective, so the parameter matrix is handed back untouched.
    /// Used when the fitness was computed elsewhere.
    Passthrough(&'p ParameterMatrix),
    /// Validated fitness values, one per candidate row
    Fitness(FitnessVector),
}

impl<'p> Evaluation<'p> {
    /// The validated fitness values, if an objective was evaluated
    pub fn fitness(&self) -> Option<&FitnessVector> {
        match self {
            Evaluation::Fitness(f) => Some(f),
            Evaluation::Passthrough(_) => None,
        }
    }

    /// Take ownership of the validated fitness values
    pub fn into_fitness(self) -> Option<FitnessVector> {
        match self {
            Evaluation::Fitness(f) => Some(f),
            Evaluation::Passthrough(_) => None,
        }
    }

    /// Whether the evaluation was skipped
    #[inline(always)]
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Evaluation::Passthrough(_))
    }
}

/// Evaluate all candidates in `params` with a single call to `objective`.
///
/// # Arguments:
/// counter: Incremented by the number of candidates once the output has the right shape
/// params: The candidates, one per row
/// objective: The objective function. If None, `params` is passed through unchecked
/// args: Extra arguments forwarded verbatim to the objective
/// increment_counter: Whether this call counts against the evaluation budget
///
/// # Returns:
/// Either the passed through matrix or one validated fitness value per candidate.
/// The counter is incremented before the NaN check, so evaluations failing
/// it still count as spent.
pub fn evaluate<'p, A, O>(
    counter: &mut EvalCounter,
    params: &'p ParameterMatrix,
    objective: Option<&mut O>,
    args: &A,
    increment_counter: bool,
) -> Result<Evaluation<'p>>
where
    A: ?Sized,
    O: Objective<A> + ?Sized,
{
    let Some(objective) = objective else {
        trace!("no objective, passing {} candidates through", params.nrows());
        return Ok(Evaluation::Passthrough(params));
    };

    let expected = params.nrows();
    trace!("evaluating {} candidates of dimension {}", expected, params.ncols());
    let out = objective.evaluate(params, args);

    let returned = out.nrows();
    if returned != expected {
        warn!("objective returned {} rows for {} candidates", returned, expected);
        return Err(EvalError::ShapeMismatch { expected, returned });
    }

    if increment_counter {
        counter.add(expected);
    }

    let kind = out.type_name();
    let Some(fits) = out.into_reals() else {
        warn!("objective returned unsupported type `{}`", kind);
        return Err(EvalError::UnsupportedReturnType { kind });
    };

    if let Some(index) = fits.iter().position(|f| f.is_nan()) {
        warn!("objective returned NaN for candidate {}: {}", index, params.row(index));
        return Err(EvalError::NaNResult { index });
    }

    Ok(Evaluation::Fitness(FitnessVector::from_vec(fits)))
}

/// Owns the objective and evaluation counter of one optimization run.
pub struct BatchEvaluator<O> {
    objective: Option<O>,
    counter: EvalCounter,
}

impl<O> BatchEvaluator<O> {
    /// Create a new batch evaluator
    ///
    /// # Arguments:
    /// objective: The objective function, or None if fitness is computed elsewhere
    /// counter: Usually `EvalCounter::new()` or `EvalCounter::with_budget(..)`
    pub fn new(objective: Option<O>, counter: EvalCounter) -> Self {
        Self { objective, counter }
    }

    /// Evaluate one generation of candidates, see [`evaluate`]
    pub fn evaluate<'p, A>(
        &mut self,
        params: &'p ParameterMatrix,
        args: &A,
        increment_counter: bool,
    ) -> Result<Evaluation<'p>>
    where
        A: ?Sized,
        O: Objective<A>,
    {
        evaluate(&mut self.counter, params, self.objective.as_mut(), args, increment_counter)
    }

    /// The evaluation counter, for budget checks
    #[inline(always)]
    pub fn counter(&self) -> &EvalCounter {
        &self.counter
    }

    /// Whether an objective is configured
    #[inline(always)]
    pub fn has_objective(&self) -> bool {
        self.objective.is_some()
    }
}
