//! Typed configuration bundle for injector setup.

use std::sync::Arc;

use crate::traits::{CombineReducers, SagaMiddleware};

/// The two capabilities a store needs before reducers and sagas can be
/// injected. Both fields are required, so a malformed bundle is a compile
/// error rather than a failure at first use of a missing capability.
pub struct InjectorOptions<E, S> {
    /// Combines the injected-reducer registry into a single root reducer.
    pub create_reducer: Arc<dyn CombineReducers<E, S>>,
    /// Schedules sagas against the store.
    pub saga_middleware: Arc<dyn SagaMiddleware>,
}

impl<E, S> Clone for InjectorOptions<E, S> {
    fn clone(&self) -> Self {
        Self {
            create_reducer: Arc::clone(&self.create_reducer),
            saga_middleware: Arc::clone(&self.saga_middleware),
        }
    }
}
