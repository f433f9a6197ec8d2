//! In-memory collaborators for testing. No state-management library or
//! saga scheduler required.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::traits::{CombineReducers, Reducer, RunningTask, Saga, SagaMiddleware, SharedReducer};

// ---------------------------------------------------------------------------
// NoopTask
// ---------------------------------------------------------------------------

/// Task handle for tests. Nothing actually runs; `abort` flips a flag.
#[derive(Default)]
pub struct NoopTask {
    aborted: AtomicBool,
}

impl NoopTask {
    /// Whether `abort` has been called (for test assertions).
    pub fn aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

impl RunningTask for NoopTask {
    fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    fn is_finished(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// RecordingMiddleware
// ---------------------------------------------------------------------------

/// Middleware fake that counts `run` calls without scheduling anything.
#[derive(Default)]
pub struct RecordingMiddleware {
    started: AtomicUsize,
}

impl RecordingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sagas handed to `run` (for test assertions).
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

impl SagaMiddleware for RecordingMiddleware {
    fn run(&self, _saga: Arc<dyn Saga>) -> Box<dyn RunningTask> {
        self.started.fetch_add(1, Ordering::SeqCst);
        Box::new(NoopTask::default())
    }
}

// ---------------------------------------------------------------------------
// OrderedCombiner
// ---------------------------------------------------------------------------

/// Combination fake: the root reducer applies slice reducers in sorted key
/// order. Stands in for the external library's `create_reducer` in tests.
pub struct OrderedCombiner;

impl<E, S> CombineReducers<E, S> for OrderedCombiner
where
    E: 'static,
    S: 'static,
{
    fn combine(&self, slices: &HashMap<String, SharedReducer<E, S>>) -> SharedReducer<E, S> {
        let mut ordered: Vec<_> = slices
            .iter()
            .map(|(key, slice)| (key.clone(), Arc::clone(slice)))
            .collect();
        ordered.sort_by(|a, b| a.0.cmp(&b.0));

        Arc::new(OrderedRoot {
            slices: ordered.into_iter().map(|(_, slice)| slice).collect(),
        })
    }
}

struct OrderedRoot<E, S> {
    slices: Vec<SharedReducer<E, S>>,
}

impl<E, S> Reducer<E, S> for OrderedRoot<E, S> {
    fn reduce(&self, state: &mut S, event: &E) {
        for slice in &self.slices {
            slice.reduce(state, event);
        }
    }
}
