//! Collaborator seams for the injector bindings.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::slots::InjectorSlots;

/// Pure state updates for one slice of the store. No I/O, no side effects.
pub trait Reducer<E, S>: Send + Sync {
    fn reduce(&self, state: &mut S, event: &E);
}

/// Registry value type. Reducers are shared between the registry and the
/// root reducer the external combination library builds from it.
pub type SharedReducer<E, S> = Arc<dyn Reducer<E, S>>;

/// The reducer-combination capability (`create_reducer`).
///
/// Called with the injected-reducer registry, produces the single root
/// reducer. Supplied by the external state-management library; this crate
/// stores the handle and never calls it.
pub trait CombineReducers<E, S>: Send + Sync {
    fn combine(&self, slices: &HashMap<String, SharedReducer<E, S>>) -> SharedReducer<E, S>;
}

/// A background workflow coordinating side effects against the store.
/// May perform I/O, may run for the life of the application.
#[async_trait]
pub trait Saga: Send + Sync {
    async fn run(self: Arc<Self>) -> Result<()>;
}

/// Handle to a scheduled saga, returned by `SagaMiddleware::run`.
pub trait RunningTask: Send + Sync {
    fn abort(&self);
    fn is_finished(&self) -> bool;
}

/// Schedulers built on tokio can hand back the join handle directly.
impl<T: Send + 'static> RunningTask for tokio::task::JoinHandle<T> {
    fn abort(&self) {
        tokio::task::JoinHandle::abort(self);
    }

    fn is_finished(&self) -> bool {
        tokio::task::JoinHandle::is_finished(self)
    }
}

/// Arc blanket — lets tests keep a handle for assertions after the boxed
/// copy has been stashed in a `SagaDescriptor`.
impl<T: RunningTask + ?Sized> RunningTask for Arc<T> {
    fn abort(&self) {
        (**self).abort();
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}

/// The task-runner capability (`run_saga`).
///
/// `run` schedules a saga against the store and returns its handle.
/// Supplied by the external saga-execution library; this crate stores the
/// handle and never calls it.
pub trait SagaMiddleware: Send + Sync {
    fn run(&self, saga: Arc<dyn Saga>) -> Box<dyn RunningTask>;
}

/// The mutable store seam.
///
/// Setup reaches the store only through this trait, so fields outside the
/// injector slots cannot be touched. Injection logic uses the `_mut`
/// accessor to populate the registries after setup.
pub trait InjectorHost<E, S> {
    /// The currently installed bindings, if any.
    fn injector_slots(&self) -> Option<&InjectorSlots<E, S>>;

    /// Mutable access for injection logic.
    fn injector_slots_mut(&mut self) -> Option<&mut InjectorSlots<E, S>>;

    /// Replace the bindings wholesale.
    fn adopt_injector_slots(&mut self, slots: InjectorSlots<E, S>);
}
