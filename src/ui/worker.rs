//! Background side of the posts operations.
//!
//! Receives [`PostsCommand`]s from the UI thread and runs each one as its
//! own tokio task, so calls may overlap. Every call posts exactly one
//! settled intent back to the UI event queue, in completion order.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::gateway::PostsApi;
use crate::ui::app::CommandSender;
use crate::ui::events::AppEvent;
use crate::ui::posts::PostsCommand;

const COMMAND_QUEUE_CAPACITY: usize = 64;

pub struct PostsWorker<A> {
    receiver: mpsc::Receiver<PostsCommand>,
    api: Arc<A>,
    events: std_mpsc::Sender<AppEvent>,
}

impl<A: PostsApi> PostsWorker<A> {
    pub fn new(
        receiver: mpsc::Receiver<PostsCommand>,
        api: Arc<A>,
        events: std_mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            receiver,
            api,
            events,
        }
    }

    /// Runs until every [`CommandSender`] is dropped.
    pub async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            let api = Arc::clone(&self.api);
            let events = self.events.clone();
            tokio::spawn(async move {
                let intent = command.execute(api.as_ref()).await;
                if events.send(AppEvent::Posts(intent)).is_err() {
                    tracing::trace!("Posts: settled intent dropped (UI gone)");
                }
            });
        }
        tracing::debug!("Posts worker stopped");
    }
}

/// Spawns a [`PostsWorker`] on `handle` and returns the sender the UI
/// dispatches through.
pub fn spawn_posts_worker<A: PostsApi>(
    handle: &Handle,
    api: Arc<A>,
    events: std_mpsc::Sender<AppEvent>,
) -> CommandSender {
    let (sender, receiver) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
    handle.spawn(PostsWorker::new(receiver, api, events).run());
    sender
}
