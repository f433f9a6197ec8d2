//! Incremental reducer and saga injection for a state container.
//!
//! A store wired all at once must know every reducer and saga at
//! construction time. Code-split applications don't: slices of state and
//! their background workflows arrive after bootstrap.
//! [`setup_store_for_injectors`] binds the two capabilities injection needs
//! (`create_reducer`, `run_saga`) and two empty registries onto the store,
//! so later code can register reducers and sagas incrementally.
//!
//! The combination library and the saga scheduler stay external: this crate
//! stores their handles and never calls them. Consumers implement
//! [`InjectorHost`] on their store type to adopt the bindings.

pub mod options;
pub mod slots;
pub mod support;
pub mod traits;

pub use options::InjectorOptions;
pub use slots::{setup_store_for_injectors, InjectorSlots, SagaDescriptor};
pub use support::{NoopTask, OrderedCombiner, RecordingMiddleware};
pub use traits::{
    CombineReducers, InjectorHost, Reducer, RunningTask, Saga, SagaMiddleware, SharedReducer,
};
