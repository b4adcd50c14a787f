//! Adapters turning a function of a single candidate into a batch objective.
//! Both ignore the extra arguments.

use std::{cmp::max, sync::Arc};

use common::{Objective, ObjectiveOutput, ParameterMatrix};
use crossbeam::channel::unbounded;
use threadpool::ThreadPool;

/// Evaluates the candidates one after another, in row order
pub struct RowWise<F> {
    f: F,
}

impl<F> RowWise<F>
where
    F: FnMut(&[f64]) -> f64,
{
    /// Wrap a function of a single candidate
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<A, F> Objective<A> for RowWise<F>
where
    A: ?Sized,
    F: FnMut(&[f64]) -> f64,
{
    fn evaluate(&mut self, params: &ParameterMatrix, _args: &A) -> ObjectiveOutput {
        let mut candidate = Vec::with_capacity(params.ncols());
        let fits: Vec<f64> = params
            .row_iter()
            .map(|row| {
                candidate.clear();
                candidate.extend(row.iter());
                (self.f)(&candidate)
            })
            .collect();

        ObjectiveOutput::Real(fits)
    }
}

/// Evaluates the candidates concurrently on a thread pool.
/// A candidate whose evaluation panics gets a NaN fitness.
pub struct ParallelRows<F> {
    f: Arc<F>,
    pool: ThreadPool,
}

impl<F> ParallelRows<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
{
    /// Wrap a function of a single candidate, using one thread per cpu
    pub fn new(f: F) -> Self {
        Self::with_threads(f, num_cpus::get())
    }

    /// Wrap a function of a single candidate, using `num_threads` threads
    pub fn with_threads(f: F, num_threads: usize) -> Self {
        Self {
            f: Arc::new(f),
            pool: ThreadPool::new(max(num_threads, 1)),
        }
    }

    /// The number of worker threads
    #[inline(always)]
    pub fn num_threads(&self) -> usize {
        self.pool.max_count()
    }
}

impl<A, F> Objective<A> for ParallelRows<F>
where
    A: ?Sized,
    F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
{
    fn evaluate(&mut self, params: &ParameterMatrix, _args: &A) -> ObjectiveOutput {
        let panics_before = self.pool.panic_count();

        let (ch_fit_s, ch_fit_r) = unbounded();
        for (i, row) in params.row_iter().enumerate() {
            let ch_fit_s = ch_fit_s.clone();
            let f = self.f.clone();
            let candidate: Vec<f64> = row.iter().copied().collect();
            self.pool.execute(move || {
                let fit = f(&candidate);
                // The receiver lives until all senders are gone
                let _ = ch_fit_s.send((i, fit));
            });
        }
        drop(ch_fit_s);

        let mut fits = vec![f64::NAN; params.nrows()];
        while let Ok((i, fit)) = ch_fit_r.recv() {
            fits[i] = fit;
        }

        let panicked = self.pool.panic_count() - panics_before;
        if panicked > 0 {
            warn!("{} candidate evaluations panicked", panicked);
        }

        ObjectiveOutput::Real(fits)
    }
}
