//! What the list body shows, derived from the store alone.

use crate::gateway::{Post, PostId};
use crate::ui::posts::{LoadStatus, PostsState};

#[derive(Debug, Clone, PartialEq)]
pub struct PostRow {
    pub id: PostId,
    pub title: String,
    pub body: String,
}

impl From<&Post> for PostRow {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostListView {
    Loading,
    Error(String),
    Posts {
        rows: Vec<PostRow>,
        selected: Option<usize>,
    },
}

impl PostListView {
    /// Loading wins while `status=loading`, the error while `status=failed`;
    /// otherwise the list (idle and succeeded alike).
    pub fn from_state(state: &PostsState, selection: usize) -> Self {
        match state.status {
            LoadStatus::Loading => PostListView::Loading,
            LoadStatus::Failed => {
                PostListView::Error(state.error.clone().unwrap_or_default())
            }
            LoadStatus::Idle | LoadStatus::Succeeded => {
                let rows: Vec<PostRow> = state.posts.iter().map(PostRow::from).collect();
                let selected = if rows.is_empty() {
                    None
                } else {
                    Some(selection.min(rows.len() - 1))
                };
                PostListView::Posts { rows, selected }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(status: LoadStatus, posts: Vec<Post>, error: Option<&str>) -> PostsState {
        PostsState {
            posts,
            status,
            error: error.map(str::to_string),
        }
    }

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("T{id}"),
            body: format!("B{id}"),
            user_id: 1,
        }
    }

    #[test]
    fn loading_hides_posts() {
        let view = PostListView::from_state(&state(LoadStatus::Loading, vec![post(1)], None), 0);
        assert_eq!(view, PostListView::Loading);
    }

    #[test]
    fn failed_shows_error() {
        let view = PostListView::from_state(
            &state(LoadStatus::Failed, vec![post(1)], Some("Failed to fetch posts")),
            0,
        );
        assert_eq!(view, PostListView::Error("Failed to fetch posts".to_string()));
    }

    #[test]
    fn idle_shows_empty_list() {
        let view = PostListView::from_state(&PostsState::default(), 3);
        assert_eq!(
            view,
            PostListView::Posts {
                rows: vec![],
                selected: None
            }
        );
    }

    #[test]
    fn selection_is_clamped_to_rows() {
        let view = PostListView::from_state(
            &state(LoadStatus::Succeeded, vec![post(1), post(2)], None),
            9,
        );
        match view {
            PostListView::Posts { rows, selected } => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1].title, "T2");
                assert_eq!(selected, Some(1));
            }
            other => panic!("Expected Posts, got {:?}", other),
        }
    }
}
