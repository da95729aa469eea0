//! State for the posts store.

use crate::gateway::Post;
use crate::ui::mvi::UiState;

/// Status of the most recently settled operation.
///
/// Shared by all four operations: a later settlement overwrites an
/// earlier one regardless of which operation started first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Succeeded => "succeeded",
            LoadStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    /// Insertion/fetch order, no sort guarantee.
    pub posts: Vec<Post>,
    pub status: LoadStatus,
    /// Message of the last rejection. Not cleared by later successes.
    pub error: Option<String>,
}

impl UiState for PostsState {}

impl PostsState {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn is_failed(&self) -> bool {
        self.status == LoadStatus::Failed
    }

    /// Error to display, only while the last settled operation failed.
    pub fn visible_error(&self) -> Option<&str> {
        if self.is_failed() {
            self.error.as_deref()
        } else {
            None
        }
    }
}
