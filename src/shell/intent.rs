use crate::shell::items::{FavoriteItem, HistoryItem};
use crate::shell::preferences::PreferenceChange;
use crate::shell::screen::Screen;
use crate::ui::mvi::Intent;

/// Shell transitions. Items arrive already stamped with id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellIntent {
    Navigate(Screen),
    AddFavorite(FavoriteItem),
    RemoveFavorite(String),
    AddHistory(HistoryItem),
    SetPreference(PreferenceChange),
    OpenShuffle,
    CloseShuffle,
}

impl Intent for ShellIntent {}
