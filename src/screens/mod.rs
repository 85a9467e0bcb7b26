//! Collaborator screens and chrome.
//!
//! Each component keeps only local cursor state. It reads the props the
//! shell hands it and answers key presses with its own event type.

pub mod build_a_date;
pub mod favorites;
pub mod flow;
pub mod history;
pub mod home;
pub mod navigation;
pub mod settings;
pub mod shuffle;

use crate::shell::Screen;
use crossterm::event::{KeyCode, KeyEvent};

pub use build_a_date::BuildADate;
pub use favorites::FavoritesScreen;
pub use flow::{DateIdeasFlow, QuestionsFlow, SmallMomentsHub};
pub use history::HistoryScreen;
pub use home::Home;
pub use navigation::Navigation;
pub use settings::SettingsScreen;
pub use shuffle::{FloatingShuffleButton, ShuffleModal};

/// Local state of every screen. Navigating to a screen starts it fresh.
#[derive(Debug, Default)]
pub struct Screens {
    pub home: Home,
    pub questions: QuestionsFlow,
    pub date_ideas: DateIdeasFlow,
    pub small_moments: SmallMomentsHub,
    pub build_a_date: BuildADate,
    pub favorites: FavoritesScreen,
    pub history: HistoryScreen,
    pub settings: SettingsScreen,
    pub shuffle: ShuffleModal,
}

impl Screens {
    pub fn reset(&mut self, screen: Screen) {
        match screen {
            Screen::Home => self.home = Home::default(),
            Screen::Questions => self.questions = QuestionsFlow::default(),
            Screen::DateIdeas => self.date_ideas = DateIdeasFlow::default(),
            Screen::SmallMoments => self.small_moments = SmallMomentsHub::default(),
            Screen::BuildADate => self.build_a_date = BuildADate::default(),
            Screen::Favorites => self.favorites = FavoritesScreen::default(),
            Screen::History => self.history = HistoryScreen::default(),
            Screen::Settings => self.settings = SettingsScreen::default(),
        }
    }
}

fn is_back(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Backspace)
}

/// Move a list cursor by one, wrapping within `len`.
fn step(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }
}
