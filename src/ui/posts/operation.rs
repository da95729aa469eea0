//! Posts operations: the pending intent to dispatch up front and the
//! gateway call that produces the settled intent.

use tracing::Instrument;
use uuid::Uuid;

use crate::gateway::{NewPost, PostId, PostPatch, PostsApi};

use super::intent::PostsIntent;

#[derive(Debug, Clone, PartialEq)]
pub enum PostsCommand {
    Fetch,
    Create { draft: NewPost },
    Update { id: PostId, patch: PostPatch },
    Delete { id: PostId },
}

impl PostsCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PostsCommand::Fetch => "fetch",
            PostsCommand::Create { .. } => "create",
            PostsCommand::Update { .. } => "update",
            PostsCommand::Delete { .. } => "delete",
        }
    }

    /// Intent to dispatch before the gateway call starts.
    pub fn pending(&self) -> PostsIntent {
        match self {
            PostsCommand::Fetch => PostsIntent::FetchPending,
            PostsCommand::Create { .. } => PostsIntent::CreatePending,
            PostsCommand::Update { .. } => PostsIntent::UpdatePending,
            PostsCommand::Delete { .. } => PostsIntent::DeletePending,
        }
    }

    /// Intent that settles this command as failed with `message`.
    pub fn rejected(&self, message: String) -> PostsIntent {
        match self {
            PostsCommand::Fetch => PostsIntent::FetchRejected { message },
            PostsCommand::Create { .. } => PostsIntent::CreateRejected { message },
            PostsCommand::Update { .. } => PostsIntent::UpdateRejected { message },
            PostsCommand::Delete { .. } => PostsIntent::DeleteRejected { message },
        }
    }

    /// Runs the gateway call and returns the fulfilled or rejected intent.
    ///
    /// Never fails: gateway errors become `*Rejected` intents carrying the
    /// error's display string.
    pub async fn execute<A: PostsApi>(self, api: &A) -> PostsIntent {
        let span = tracing::info_span!(
            "posts_operation",
            operation = self.name(),
            request_id = %Uuid::new_v4()
        );
        self.run(api).instrument(span).await
    }

    async fn run<A: PostsApi>(self, api: &A) -> PostsIntent {
        let settled = match &self {
            PostsCommand::Fetch => api
                .list_posts()
                .await
                .map(|posts| PostsIntent::FetchFulfilled { posts }),
            PostsCommand::Create { draft } => api
                .create_post(draft)
                .await
                .map(|post| PostsIntent::CreateFulfilled { post }),
            PostsCommand::Update { id, patch } => api
                .update_post(*id, patch)
                .await
                .map(|post| PostsIntent::UpdateFulfilled { post }),
            PostsCommand::Delete { id } => api
                .delete_post(*id)
                .await
                .map(|id| PostsIntent::DeleteFulfilled { id }),
        };

        match settled {
            Ok(intent) => {
                tracing::info!("Operation fulfilled");
                intent
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Operation rejected");
                self.rejected(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_matches_command() {
        assert_eq!(PostsCommand::Fetch.pending(), PostsIntent::FetchPending);
        assert_eq!(
            PostsCommand::Delete { id: 3 }.pending(),
            PostsIntent::DeletePending
        );
        assert_eq!(
            PostsCommand::Update {
                id: 3,
                patch: PostPatch::default()
            }
            .pending(),
            PostsIntent::UpdatePending
        );
        assert_eq!(
            PostsCommand::Create {
                draft: NewPost::new("t", "b", 1)
            }
            .pending(),
            PostsIntent::CreatePending
        );
    }

    #[test]
    fn rejected_matches_command() {
        assert_eq!(
            PostsCommand::Delete { id: 3 }.rejected("nope".to_string()),
            PostsIntent::DeleteRejected {
                message: "nope".to_string()
            }
        );
        assert_eq!(
            PostsCommand::Fetch.rejected("nope".to_string()),
            PostsIntent::FetchRejected {
                message: "nope".to_string()
            }
        );
    }

    #[test]
    fn pending_is_not_settled() {
        assert!(!PostsCommand::Fetch.pending().is_settled());
        assert!(PostsIntent::DeleteFulfilled { id: 1 }.is_settled());
    }
}
