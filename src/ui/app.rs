use crate::screens::{FloatingShuffleButton, Navigation, Screens};
use crate::shell::{ActiveView, Screen, Shell, ShellCommand, ShellState};
use crossterm::event::KeyEvent;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Length of the dimmed hand-off between screens.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Owns the shell plus the per-screen cursors and drives both from input.
pub struct App {
    shell: Shell,
    screens: Screens,
    should_quit: bool,
    tick: u64,
    transition_started: Option<Instant>,
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut shell: Shell) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        shell.subscribe(move |_: &ShellState| flag.set(true));
        Self {
            shell,
            screens: Screens::default(),
            should_quit: false,
            tick: 0,
            transition_started: None,
            dirty,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Returns whether anything changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        self.dirty.replace(false)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty.set(true);
    }

    pub fn in_transition(&self) -> bool {
        self.transition_started
            .is_some_and(|started| started.elapsed() < TRANSITION)
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.transition_started.is_some() && !self.in_transition() {
            self.transition_started = None;
            self.mark_dirty();
        }
        let prefs = self.shell.state().preferences();
        if self.shell.screen() == Screen::Home && !prefs.reduced_motion {
            self.mark_dirty();
        }
    }

    /// Run a collaborator's request through the shell.
    pub fn apply(&mut self, command: impl Into<ShellCommand>) {
        let before = self.shell.screen();
        self.shell.execute(command);
        let after = self.shell.screen();
        if before != after {
            self.screens.reset(after);
            self.screens.shuffle = Default::default();
            self.transition_started =
                (!self.shell.state().preferences().reduced_motion).then(Instant::now);
        }
    }

    /// Route a key to the overlay, the navigation bar or the active screen.
    pub fn on_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if self.shell.state().is_shuffle_open() {
            if let Some(event) = self.screens.shuffle.handle_key(key) {
                self.apply(event);
            }
            return;
        }

        let chrome = self.shell.render_chrome();
        if let Some(event) = Navigation::handle_key(chrome.navigation, key) {
            self.apply(event);
            return;
        }
        if chrome.shuffle_button.is_some() {
            if let Some(event) = FloatingShuffleButton::handle_key(key) {
                self.apply(event);
                return;
            }
        }

        let command: Option<ShellCommand> = match self.shell.render_active_screen() {
            ActiveView::Home => self.screens.home.handle_key(key).map(Into::into),
            ActiveView::Questions(props) => {
                self.screens.questions.handle_key(props, key).map(Into::into)
            }
            ActiveView::DateIdeas => self.screens.date_ideas.handle_key(key).map(Into::into),
            ActiveView::SmallMoments => {
                self.screens.small_moments.handle_key(key).map(Into::into)
            }
            ActiveView::BuildADate => self.screens.build_a_date.handle_key(key).map(Into::into),
            ActiveView::Favorites(props) => {
                self.screens.favorites.handle_key(props, key).map(Into::into)
            }
            ActiveView::History(props) => {
                self.screens.history.handle_key(props, key);
                None
            }
            ActiveView::Settings(props) => {
                self.screens.settings.handle_key(props, key).map(Into::into)
            }
        };
        if let Some(command) = command {
            self.apply(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Preferences;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn shuffle_button_only_reacts_on_home() {
        let mut app = App::new(Shell::new(Screen::History, Preferences::default()));
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.shell().state().is_shuffle_open());

        let mut app = App::new(Shell::default());
        press(&mut app, KeyCode::Char('s'));
        assert!(app.shell().state().is_shuffle_open());
    }

    #[test]
    fn reduced_motion_skips_transition() {
        let prefs = Preferences {
            reduced_motion: true,
            ..Preferences::default()
        };
        let mut app = App::new(Shell::new(Screen::Home, prefs));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.shell().screen(), Screen::Questions);
        assert!(!app.in_transition());

        let mut app = App::new(Shell::default());
        press(&mut app, KeyCode::Tab);
        assert!(app.in_transition());
    }

    #[test]
    fn redraw_flag_follows_state_changes() {
        let mut app = App::new(Shell::default());
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
        app.apply(ShellCommand::OpenShuffle);
        assert!(app.take_redraw());
    }

    #[test]
    fn navigating_resets_target_screen() {
        let mut app = App::new(Shell::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.shell().state().history().len(), 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.shell().screen(), Screen::Home);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        let history = app.shell().state().history();
        assert_eq!(
            history.get(0).map(|item| item.content.headline()),
            history.get(1).map(|item| item.content.headline())
        );
    }
}
