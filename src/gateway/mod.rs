//! Remote resource gateway for the posts REST API.
//!
//! Isolates network I/O from state logic: callers get typed posts or a
//! [`GatewayError`], never raw responses.

mod client;
mod error;
mod types;

pub use client::{PostsApi, PostsGateway};
pub use error::{GatewayError, Operation};
pub use types::{NewPost, Post, PostId, PostPatch};
