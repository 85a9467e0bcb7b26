//! Per-screen inputs derived from [`ShellState`].
//!
//! Each props type carries only what its screen is allowed to read. Paired
//! with the event types in [`events`](super::events) this is the whole
//! contract between the shell and its collaborators.

use crate::shell::items::{Favorites, History};
use crate::shell::preferences::Preferences;
use crate::shell::screen::Screen;
use crate::shell::state::ShellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionsProps {
    pub spicy_enabled: bool,
    pub faith_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FavoritesProps<'a> {
    pub favorites: &'a Favorites,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryProps<'a> {
    pub history: &'a History,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsProps<'a> {
    pub preferences: &'a Preferences,
}

/// The one screen to render, with its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveView<'a> {
    Home,
    Questions(QuestionsProps),
    DateIdeas,
    SmallMoments,
    BuildADate,
    Favorites(FavoritesProps<'a>),
    History(HistoryProps<'a>),
    Settings(SettingsProps<'a>),
}

impl ActiveView<'_> {
    pub fn screen(&self) -> Screen {
        match self {
            ActiveView::Home => Screen::Home,
            ActiveView::Questions(_) => Screen::Questions,
            ActiveView::DateIdeas => Screen::DateIdeas,
            ActiveView::SmallMoments => Screen::SmallMoments,
            ActiveView::BuildADate => Screen::BuildADate,
            ActiveView::Favorites(_) => Screen::Favorites,
            ActiveView::History(_) => Screen::History,
            ActiveView::Settings(_) => Screen::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationProps {
    pub current: Screen,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleButtonProps {
    pub dark_mode: bool,
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleModalProps {
    pub open: bool,
    pub dark_mode: bool,
    pub spicy_enabled: bool,
    pub faith_enabled: bool,
}

/// Always-present chrome around the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeView {
    pub navigation: NavigationProps,
    /// Only shown on the home screen.
    pub shuffle_button: Option<ShuffleButtonProps>,
    pub shuffle_modal: ShuffleModalProps,
}

pub fn render_active_screen(state: &ShellState) -> ActiveView<'_> {
    let prefs = state.preferences();
    match state.screen() {
        Screen::Home => ActiveView::Home,
        Screen::Questions => ActiveView::Questions(QuestionsProps {
            spicy_enabled: prefs.spicy_enabled,
            faith_enabled: prefs.faith_enabled,
        }),
        Screen::DateIdeas => ActiveView::DateIdeas,
        Screen::SmallMoments => ActiveView::SmallMoments,
        Screen::BuildADate => ActiveView::BuildADate,
        Screen::Favorites => ActiveView::Favorites(FavoritesProps {
            favorites: state.favorites(),
        }),
        Screen::History => ActiveView::History(HistoryProps {
            history: state.history(),
        }),
        Screen::Settings => ActiveView::Settings(SettingsProps { preferences: prefs }),
    }
}

pub fn render_chrome(state: &ShellState) -> ChromeView {
    let prefs = state.preferences();
    ChromeView {
        navigation: NavigationProps {
            current: state.screen(),
            dark_mode: prefs.dark_mode,
        },
        shuffle_button: (state.screen() == Screen::Home).then_some(ShuffleButtonProps {
            dark_mode: prefs.dark_mode,
            reduced_motion: prefs.reduced_motion,
        }),
        shuffle_modal: ShuffleModalProps {
            open: state.is_shuffle_open(),
            dark_mode: prefs.dark_mode,
            spicy_enabled: prefs.spicy_enabled,
            faith_enabled: prefs.faith_enabled,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_maps_to_its_own_view() {
        for screen in Screen::ALL {
            let state = ShellState::new(screen, Preferences::default());
            assert_eq!(render_active_screen(&state).screen(), screen);
        }
    }

    #[test]
    fn shuffle_button_only_on_home() {
        for screen in Screen::ALL {
            let state = ShellState::new(screen, Preferences::default());
            assert_eq!(
                render_chrome(&state).shuffle_button.is_some(),
                screen == Screen::Home
            );
        }
    }

    #[test]
    fn questions_receive_content_flags() {
        let prefs = Preferences {
            spicy_enabled: true,
            faith_enabled: false,
            ..Preferences::default()
        };
        let state = ShellState::new(Screen::Questions, prefs);
        assert_eq!(
            render_active_screen(&state),
            ActiveView::Questions(QuestionsProps {
                spicy_enabled: true,
                faith_enabled: false,
            })
        );
    }
}
