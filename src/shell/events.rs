//! Upward events each collaborator may raise.
//!
//! A screen can only report what its event type allows; the shell turns every
//! event into a [`ShellCommand`].

use crate::shell::content::{Content, HistoryContent};
use crate::shell::preferences::PreferenceChange;
use crate::shell::screen::Screen;

/// Unstamped shell operation, as requested by a collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Navigate(Screen),
    AddFavorite(Content),
    RemoveFavorite(String),
    AddHistory(HistoryContent),
    SetPreference(PreferenceChange),
    OpenShuffle,
    CloseShuffle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    Navigate(Screen),
}

/// Raised by the questions, date-ideas and small-moments flows.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    Back,
    AddFavorite(Content),
    AddHistory(HistoryContent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildADateEvent {
    Back,
    AddFavorite(Content),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesEvent {
    Remove(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEvent {
    Set(PreferenceChange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    Navigate(Screen),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleButtonEvent {
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleModalEvent {
    Navigate(Screen),
    Close,
}

impl From<HomeEvent> for ShellCommand {
    fn from(event: HomeEvent) -> Self {
        match event {
            HomeEvent::Navigate(screen) => ShellCommand::Navigate(screen),
        }
    }
}

impl From<FlowEvent> for ShellCommand {
    fn from(event: FlowEvent) -> Self {
        match event {
            FlowEvent::Back => ShellCommand::Navigate(Screen::Home),
            FlowEvent::AddFavorite(content) => ShellCommand::AddFavorite(content),
            FlowEvent::AddHistory(content) => ShellCommand::AddHistory(content),
        }
    }
}

impl From<BuildADateEvent> for ShellCommand {
    fn from(event: BuildADateEvent) -> Self {
        match event {
            BuildADateEvent::Back => ShellCommand::Navigate(Screen::Home),
            BuildADateEvent::AddFavorite(content) => ShellCommand::AddFavorite(content),
        }
    }
}

impl From<FavoritesEvent> for ShellCommand {
    fn from(event: FavoritesEvent) -> Self {
        match event {
            FavoritesEvent::Remove(id) => ShellCommand::RemoveFavorite(id),
        }
    }
}

impl From<SettingsEvent> for ShellCommand {
    fn from(event: SettingsEvent) -> Self {
        match event {
            SettingsEvent::Set(change) => ShellCommand::SetPreference(change),
        }
    }
}

impl From<NavigationEvent> for ShellCommand {
    fn from(event: NavigationEvent) -> Self {
        match event {
            NavigationEvent::Navigate(screen) => ShellCommand::Navigate(screen),
        }
    }
}

impl From<ShuffleButtonEvent> for ShellCommand {
    fn from(event: ShuffleButtonEvent) -> Self {
        match event {
            ShuffleButtonEvent::Open => ShellCommand::OpenShuffle,
        }
    }
}

impl From<ShuffleModalEvent> for ShellCommand {
    fn from(event: ShuffleModalEvent) -> Self {
        match event {
            ShuffleModalEvent::Navigate(screen) => ShellCommand::Navigate(screen),
            ShuffleModalEvent::Close => ShellCommand::CloseShuffle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_always_targets_home() {
        assert_eq!(
            ShellCommand::from(FlowEvent::Back),
            ShellCommand::Navigate(Screen::Home)
        );
        assert_eq!(
            ShellCommand::from(BuildADateEvent::Back),
            ShellCommand::Navigate(Screen::Home)
        );
    }

    #[test]
    fn modal_close_maps_to_close_shuffle() {
        assert_eq!(
            ShellCommand::from(ShuffleModalEvent::Close),
            ShellCommand::CloseShuffle
        );
    }
}
