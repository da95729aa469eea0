use crate::gateway::{NewPost, Post, PostPatch};
use crate::ui::mvi::Reducer;
use crate::ui::posts::{PostsCommand, PostsIntent, PostsReducer, PostsState};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Draft sent by the "add" command.
pub const NEW_POST_TITLE: &str = "New Post Title";
pub const NEW_POST_BODY: &str = "New Post Body";
pub const NEW_POST_USER_ID: u64 = 1;

/// Fields sent by the "update" command.
pub const UPDATED_POST_TITLE: &str = "Updated Post Title";
pub const UPDATED_POST_BODY: &str = "Updated Post Body";

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

pub type CommandSender = mpsc::Sender<PostsCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    base_url: String,
    /// Posts store (MVI pattern).
    posts: PostsState,
    /// Row the update/delete keys act on.
    selection: usize,
    spinner: usize,
    /// Channel to the gateway worker (resource, managed outside MVI).
    command_sender: Option<CommandSender>,
}

impl App {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            base_url: base_url.into(),
            posts: PostsState::default(),
            selection: 0,
            spinner: 0,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: CommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn on_tick(&mut self) {
        if self.posts.is_loading() {
            self.spinner = (self.spinner + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner]
    }

    // ========================================================================
    // Posts store (MVI pattern)
    // ========================================================================

    pub fn posts(&self) -> &PostsState {
        &self.posts
    }

    /// Dispatch an intent to the posts reducer.
    pub fn dispatch_posts(&mut self, intent: PostsIntent) {
        tracing::trace!(?intent, "Dispatching posts intent");
        dispatch_mvi!(self, posts, PostsReducer, intent);
        self.clamp_selection();
    }

    /// Applies the pending step locally, then hands the command to the
    /// worker. If the worker cannot take it, the operation is rejected
    /// right away so the status never stays `loading`.
    pub fn run_command(&mut self, command: PostsCommand) {
        self.dispatch_posts(command.pending());

        let queued = match &self.command_sender {
            Some(sender) => sender.try_send(command),
            None => Err(TrySendError::Closed(command)),
        };

        if let Err(err) = queued {
            tracing::warn!("Failed to queue posts command: {}", err);
            let command = match err {
                TrySendError::Full(command) | TrySendError::Closed(command) => command,
            };
            let message = format!("Failed to queue {} request", command.name());
            self.dispatch_posts(command.rejected(message));
        }
    }

    /// Initial load when the list is first shown.
    pub fn on_mount(&mut self) {
        self.run_command(PostsCommand::Fetch);
    }

    pub fn reload(&mut self) {
        self.run_command(PostsCommand::Fetch);
    }

    pub fn add_post(&mut self) {
        self.run_command(PostsCommand::Create {
            draft: NewPost::new(NEW_POST_TITLE, NEW_POST_BODY, NEW_POST_USER_ID),
        });
    }

    /// No-op when nothing is selected.
    pub fn update_selected(&mut self) {
        let Some(id) = self.selected_post().map(|post| post.id) else {
            return;
        };
        let patch = PostPatch::default()
            .title(UPDATED_POST_TITLE)
            .body(UPDATED_POST_BODY);
        self.run_command(PostsCommand::Update { id, patch });
    }

    /// No-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_post().map(|post| post.id) else {
            return;
        };
        self.run_command(PostsCommand::Delete { id });
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.posts.get(self.selection)
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.posts.posts.len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection as i32;
        let next = (current + direction).rem_euclid(len as i32);
        self.selection = next as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.posts.posts.len();
        if len == 0 {
            self.selection = 0;
        } else if self.selection >= len {
            self.selection = len - 1;
        }
    }
}
