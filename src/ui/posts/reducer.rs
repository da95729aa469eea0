//! Reducer for the posts store.

use std::collections::HashSet;

use crate::ui::mvi::Reducer;

use super::intent::PostsIntent;
use super::state::{LoadStatus, PostsState};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Pure state transitions for the four operation lifecycles.
///
/// Pending steps only touch `status`. Fulfilled steps set `Succeeded` and
/// apply the payload; an update also collapses entries sharing an id.
/// Rejected steps set `Failed` and record the message, leaving `posts` as
/// they were.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::FetchPending
            | PostsIntent::CreatePending
            | PostsIntent::UpdatePending
            | PostsIntent::DeletePending => {
                state.status = LoadStatus::Loading;
            }

            PostsIntent::FetchFulfilled { posts } => {
                state.status = LoadStatus::Succeeded;
                state.posts = posts;
            }
            PostsIntent::CreateFulfilled { post } => {
                state.status = LoadStatus::Succeeded;
                state.posts.push(post);
            }
            PostsIntent::UpdateFulfilled { post } => {
                state.status = LoadStatus::Succeeded;
                if let Some(existing) = state.posts.iter_mut().find(|p| p.id == post.id) {
                    *existing = post;
                }
                // Creates can repeat a server-assigned id; first entry wins
                let mut seen = HashSet::new();
                state.posts.retain(|p| seen.insert(p.id));
            }
            PostsIntent::DeleteFulfilled { id } => {
                state.status = LoadStatus::Succeeded;
                state.posts.retain(|post| post.id != id);
            }

            PostsIntent::FetchRejected { message }
            | PostsIntent::CreateRejected { message }
            | PostsIntent::UpdateRejected { message }
            | PostsIntent::DeleteRejected { message } => {
                state.status = LoadStatus::Failed;
                state.error = Some(if message.is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    message
                });
            }
        }
        state
    }
}
