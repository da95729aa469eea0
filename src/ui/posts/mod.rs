//! Posts store feature module.
//!
//! Holds the posts list and the status of the last settled operation.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Store state (posts, status, error)
//! - `intent.rs` - Lifecycle steps for fetch/create/update/delete
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `operation.rs` - Commands that pair a pending intent with a gateway call

mod intent;
mod operation;
mod reducer;
mod state;

pub use intent::PostsIntent;
pub use operation::PostsCommand;
pub use reducer::PostsReducer;
pub use state::{LoadStatus, PostsState};
