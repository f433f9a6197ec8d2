//! The injector bindings and the setup operation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::options::InjectorOptions;
use crate::traits::{CombineReducers, InjectorHost, RunningTask, Saga, SagaMiddleware, SharedReducer};

/// An injected saga: the workflow plus the task-handle slot injection logic
/// fills once the saga has been scheduled through `run_saga`.
pub struct SagaDescriptor {
    pub saga: Arc<dyn Saga>,
    pub task: Option<Box<dyn RunningTask>>,
}

impl SagaDescriptor {
    /// Descriptor for a saga that has not been scheduled yet.
    pub fn new(saga: Arc<dyn Saga>) -> Self {
        Self { saga, task: None }
    }
}

/// The four bindings a store adopts to support incremental injection:
/// the two capability handles and the two registries.
///
/// Registries start empty and belong to the store; injection logic mutates
/// them after setup. Setup never repopulates them.
pub struct InjectorSlots<E, S> {
    /// Builds the root reducer from the injected-reducer registry.
    /// Stored here, called by the external state-management library.
    pub create_reducer: Arc<dyn CombineReducers<E, S>>,
    /// Schedules injected sagas.
    /// Stored here, called by the external injection logic.
    pub run_saga: Arc<dyn SagaMiddleware>,
    /// Reducer registry, keyed by slice name.
    pub injected_reducers: HashMap<String, SharedReducer<E, S>>,
    /// Saga registry, keyed by task name.
    pub injected_sagas: HashMap<String, SagaDescriptor>,
}

impl<E, S> InjectorSlots<E, S> {
    /// Bind the two capabilities from `options`, with fresh empty registries.
    pub fn from_options(options: InjectorOptions<E, S>) -> Self {
        Self {
            create_reducer: options.create_reducer,
            run_saga: options.saga_middleware,
            injected_reducers: HashMap::new(),
            injected_sagas: HashMap::new(),
        }
    }
}

/// Set up `store` so reducer and saga injection can work.
///
/// The store adopts a fresh [`InjectorSlots`] built from `options`. That is
/// the sole observable outcome: no return value, no I/O, never blocks.
///
/// Calling this again on a live store rebinds both capabilities and resets
/// both registries, discarding anything injected since the previous call.
/// Callers that run setup more than once per store lifetime almost always
/// have a bug; the reset is logged when it drops entries.
pub fn setup_store_for_injectors<E, S, H>(store: &mut H, options: InjectorOptions<E, S>)
where
    H: InjectorHost<E, S>,
{
    if let Some(prev) = store.injector_slots() {
        let reducers = prev.injected_reducers.len();
        let sagas = prev.injected_sagas.len();
        if reducers > 0 || sagas > 0 {
            warn!(reducers, sagas, "Repeated setup discards injected entries");
        }
    }

    store.adopt_injector_slots(InjectorSlots::from_options(options));
    debug!("Injector slots installed");
}
