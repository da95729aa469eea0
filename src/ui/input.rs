use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key press to an app command.
///
/// | Key | Command |
/// |---|---|
/// | `a` | add post |
/// | `u` | update selected post |
/// | `d` | delete selected post |
/// | `r` | reload |
/// | `Up`/`k`, `Down`/`j` | move selection |
/// | `q`, `Esc`, `Ctrl+C` | quit |
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('c')) {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') => app.add_post(),
        KeyCode::Char('u') => app.update_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        _ => {}
    }
}
