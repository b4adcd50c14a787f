/// Running total of objective evaluations within one optimization run.
///
/// Only the evaluator increments it and it is taken by `&mut`,
/// so there is a single writer at any time.
/// Share it between threads only behind a lock of your own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalCounter {
    count: u64,
    max_evals: Option<u64>,
}

impl EvalCounter {
    /// Create a new counter without an evaluation budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new counter which is exhausted after `max_evals` evaluations
    pub fn with_budget(max_evals: u64) -> Self {
        Self {
            count: 0,
            max_evals: Some(max_evals),
        }
    }

    /// Total number of candidates evaluated so far
    #[inline(always)]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The evaluation budget, if any
    #[inline(always)]
    pub fn max_evals(&self) -> Option<u64> {
        self.max_evals
    }

    /// Evaluations left until the budget is used up
    pub fn remaining(&self) -> Option<u64> {
        self.max_evals.map(|m| m.saturating_sub(self.count))
    }

    /// Whether the budget is used up. Always false without a budget.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.remaining(), Some(0))
    }

    pub(crate) fn add(&mut self, n: usize) {
        self.count = self.count.saturating_add(n as u64);
        debug!("evaluation counter at {}", self.count);
        if self.is_exhausted() {
            debug!("evaluation budget of {:?} exhausted", self.max_evals);
        }
    }
}
