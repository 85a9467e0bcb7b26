use crate::shell::Screen;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Global shortcuts first, then hand the key to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    let on_bare_home =
        app.shell().screen() == Screen::Home && !app.shell().state().is_shuffle_open();
    if on_bare_home && matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }
    app.on_key(key);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Shell;

    #[test]
    fn ctrl_q_quits_anywhere() {
        let mut app = App::new(Shell::new(Screen::Settings, Default::default()));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn plain_q_only_quits_from_home() {
        let mut app = App::new(Shell::new(Screen::Settings, Default::default()));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.should_quit());

        let mut app = App::new(Shell::default());
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit());
    }
}
