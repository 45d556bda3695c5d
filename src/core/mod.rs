/// [`DequeConfig`] type for constructing deques.
pub mod config;
/// [`BoundedDeque`] type, a double-ended queue with an optional maximum length.
pub mod deque;
/// [`DequeError`] type returned by fallible operations.
pub mod error;
/// [`SharedDeque`] type, a reentrancy-safe shared handle to a [`BoundedDeque`].
pub mod shared;
/// Warning switches used throughout the crate.
pub mod utils;

pub use config::DequeConfig;
pub use deque::BoundedDeque;
pub use error::DequeError;
pub use shared::{SharedDeque, SharedIter, WeakDeque};
pub use utils::{disable_warnings, enable_warnings, maybe_warn, should_warn};
