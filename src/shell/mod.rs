//! The application shell: single owner of navigation, preferences,
//! favorites and history.
//!
//! Collaborators never mutate this state directly. They receive props from
//! [`view`] and hand back events which [`Shell::execute`] turns into stamped
//! [`ShellIntent`]s for the [`ShellReducer`].

pub mod content;
pub mod events;
pub mod intent;
pub mod items;
pub mod preferences;
pub mod reducer;
pub mod screen;
pub mod state;
pub mod view;

pub use content::{Content, ContentKind, HistoryContent};
pub use events::ShellCommand;
pub use intent::ShellIntent;
pub use items::{FavoriteItem, Favorites, History, HistoryItem, HISTORY_LIMIT};
pub use preferences::{Preference, PreferenceChange, Preferences};
pub use reducer::ShellReducer;
pub use screen::{Screen, ScreenParseError};
pub use state::ShellState;
pub use view::{ActiveView, ChromeView};

use crate::ui::mvi::{Store, Subscription};

pub struct Shell {
    store: Store<ShellReducer>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Screen::Home, Preferences::default())
    }
}

impl Shell {
    pub fn new(screen: Screen, preferences: Preferences) -> Self {
        Self {
            store: Store::new(ShellState::new(screen, preferences)),
        }
    }

    pub fn state(&self) -> &ShellState {
        self.store.state()
    }

    pub fn screen(&self) -> Screen {
        self.state().screen()
    }

    pub fn navigate(&mut self, screen: Screen) {
        let from = self.screen();
        self.store.dispatch(ShellIntent::Navigate(screen));
        tracing::info!(from = %from, to = %screen, "navigate");
    }

    /// Save `content` as a new favorite and return its id.
    pub fn add_to_favorites(&mut self, content: Content) -> String {
        let item = FavoriteItem::new(content);
        let id = item.id.clone();
        tracing::debug!(id = %id, kind = %item.kind(), "add favorite");
        self.store.dispatch(ShellIntent::AddFavorite(item));
        id
    }

    pub fn remove_from_favorites(&mut self, id: &str) {
        if !self.store.dispatch(ShellIntent::RemoveFavorite(id.to_string())) {
            tracing::debug!(id, "remove favorite: no such id");
        }
    }

    pub fn add_to_history(&mut self, content: HistoryContent) {
        let item = HistoryItem::new(content);
        tracing::debug!(id = %item.id, kind = %item.kind(), "add history");
        self.store.dispatch(ShellIntent::AddHistory(item));
    }

    pub fn set_preference(&mut self, change: PreferenceChange) {
        tracing::debug!(?change, "set preference");
        self.store.dispatch(ShellIntent::SetPreference(change));
    }

    pub fn open_shuffle(&mut self) {
        self.store.dispatch(ShellIntent::OpenShuffle);
    }

    pub fn close_shuffle(&mut self) {
        self.store.dispatch(ShellIntent::CloseShuffle);
    }

    /// Apply a collaborator's request.
    pub fn execute(&mut self, command: impl Into<ShellCommand>) {
        match command.into() {
            ShellCommand::Navigate(screen) => self.navigate(screen),
            ShellCommand::AddFavorite(content) => {
                self.add_to_favorites(content);
            }
            ShellCommand::RemoveFavorite(id) => self.remove_from_favorites(&id),
            ShellCommand::AddHistory(content) => self.add_to_history(content),
            ShellCommand::SetPreference(change) => self.set_preference(change),
            ShellCommand::OpenShuffle => self.open_shuffle(),
            ShellCommand::CloseShuffle => self.close_shuffle(),
        }
    }

    pub fn render_active_screen(&self) -> ActiveView<'_> {
        view::render_active_screen(self.state())
    }

    pub fn render_chrome(&self) -> ChromeView {
        view::render_chrome(self.state())
    }

    /// Observe every state change after it has been fully applied.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&ShellState) + 'static,
    {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.store.unsubscribe(subscription);
    }
}
