use crate::config::Config;
use crate::gateway::PostsGateway;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_posts_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Runs the posts list until the user quits.
///
/// Gateway calls run on `handle`; everything else, store updates
/// included, happens on the calling thread.
pub fn run(config: &Config, handle: &Handle) -> io::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let gateway = Arc::new(PostsGateway::new(config.api.base_url.clone()));
    let events = EventHandler::new(tick_rate);
    let commands = spawn_posts_worker(handle, gateway, events.sender());

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.api.base_url.clone());
    app.set_command_sender(commands);
    app.on_mount();
    tracing::info!("Posts list mounted ({})", config.api.base_url);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Next draw picks up the new size
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!("Terminal resized to {}x{}", cols, rows);
            }
            Ok(AppEvent::Posts(intent)) => app.dispatch_posts(intent),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Posts list closed");
    drop(guard);
    Ok(())
}
