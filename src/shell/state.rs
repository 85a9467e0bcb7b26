use crate::shell::items::{Favorites, History};
use crate::shell::preferences::Preferences;
use crate::shell::screen::Screen;
use crate::ui::mvi::UiState;

/// Everything the shell owns. Screens only ever see borrowed slices of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellState {
    pub(super) screen: Screen,
    pub(super) preferences: Preferences,
    pub(super) favorites: Favorites,
    pub(super) history: History,
    pub(super) shuffle_open: bool,
    pub(super) revision: u64,
}

impl UiState for ShellState {
    fn revision(&self) -> u64 {
        self.revision
    }
}

impl ShellState {
    pub fn new(screen: Screen, preferences: Preferences) -> Self {
        Self {
            screen,
            preferences: preferences.normalized(),
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_shuffle_open(&self) -> bool {
        self.shuffle_open
    }
}
