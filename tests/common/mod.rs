//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use postboard::gateway::{GatewayError, NewPost, Operation, Post, PostId, PostPatch, PostsApi};
use postboard::ui::posts::{PostsIntent, PostsState};
use postboard::ui::mvi::Reducer;
use postboard::ui::posts::PostsReducer;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn post(id: PostId, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: format!("body of {title}"),
        user_id: 1,
    }
}

/// Folds intents through the reducer starting from the initial state.
pub fn reduce_all(intents: impl IntoIterator<Item = PostsIntent>) -> PostsState {
    intents
        .into_iter()
        .fold(PostsState::default(), PostsReducer::reduce)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Scripted reply for one [`FakeApi`] call.
#[derive(Debug, Clone)]
pub enum FakeReply {
    Posts(Vec<Post>),
    Post(Post),
    Deleted,
    StatusFailure(u16),
}

/// In-memory [`PostsApi`] that answers each call from a script, after an
/// optional delay, and records what it was asked.
#[derive(Default)]
pub struct FakeApi {
    replies: Mutex<Vec<(FakeReply, Duration)>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: FakeReply) -> Self {
        self.reply_after(reply, Duration::ZERO)
    }

    pub fn reply_after(self, reply: FakeReply, delay: Duration) -> Self {
        self.replies.lock().unwrap().push((reply, delay));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: String) -> (FakeReply, Duration) {
        self.calls.lock().unwrap().push(call);
        let mut replies = self.replies.lock().unwrap();
        assert!(!replies.is_empty(), "FakeApi: no scripted reply left");
        replies.remove(0)
    }

    fn status_error(operation: Operation, code: u16) -> GatewayError {
        GatewayError::Status {
            operation,
            status: reqwest::StatusCode::from_u16(code).unwrap(),
        }
    }
}

impl PostsApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<Post>, GatewayError> {
        let (reply, delay) = self.next("list".to_string());
        tokio::time::sleep(delay).await;
        match reply {
            FakeReply::Posts(posts) => Ok(posts),
            FakeReply::StatusFailure(code) => Err(Self::status_error(Operation::List, code)),
            other => panic!("unexpected reply for list: {:?}", other),
        }
    }

    async fn create_post(&self, draft: &NewPost) -> Result<Post, GatewayError> {
        let (reply, delay) = self.next(format!("create {}", draft.title));
        tokio::time::sleep(delay).await;
        match reply {
            FakeReply::Post(post) => Ok(post),
            FakeReply::StatusFailure(code) => Err(Self::status_error(Operation::Create, code)),
            other => panic!("unexpected reply for create: {:?}", other),
        }
    }

    async fn update_post(&self, id: PostId, _patch: &PostPatch) -> Result<Post, GatewayError> {
        let (reply, delay) = self.next(format!("update {id}"));
        tokio::time::sleep(delay).await;
        match reply {
            FakeReply::Post(post) => Ok(post),
            FakeReply::StatusFailure(code) => Err(Self::status_error(Operation::Update, code)),
            other => panic!("unexpected reply for update: {:?}", other),
        }
    }

    async fn delete_post(&self, id: PostId) -> Result<PostId, GatewayError> {
        let (reply, delay) = self.next(format!("delete {id}"));
        tokio::time::sleep(delay).await;
        match reply {
            FakeReply::Deleted => Ok(id),
            FakeReply::StatusFailure(code) => Err(Self::status_error(Operation::Delete, code)),
            other => panic!("unexpected reply for delete: {:?}", other),
        }
    }
}
