//! Intents for the posts store.

use crate::gateway::{Post, PostId};
use crate::ui::mvi::Intent;

/// One lifecycle step of one of the four operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsIntent {
    FetchPending,
    FetchFulfilled { posts: Vec<Post> },
    FetchRejected { message: String },

    CreatePending,
    CreateFulfilled { post: Post },
    CreateRejected { message: String },

    UpdatePending,
    UpdateFulfilled { post: Post },
    UpdateRejected { message: String },

    DeletePending,
    /// Carries the requested id; the server response is not used for identity.
    DeleteFulfilled { id: PostId },
    DeleteRejected { message: String },
}

impl Intent for PostsIntent {}

impl PostsIntent {
    /// True for fulfilled and rejected steps.
    pub fn is_settled(&self) -> bool {
        !matches!(
            self,
            PostsIntent::FetchPending
                | PostsIntent::CreatePending
                | PostsIntent::UpdatePending
                | PostsIntent::DeletePending
        )
    }
}
