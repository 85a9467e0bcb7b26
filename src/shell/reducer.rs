use crate::shell::intent::ShellIntent;
use crate::shell::state::ShellState;
use crate::ui::mvi::Reducer;

pub struct ShellReducer;

impl Reducer for ShellReducer {
    type State = ShellState;
    type Intent = ShellIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let changed = match intent {
            ShellIntent::Navigate(screen) => {
                let changed = state.screen != screen || state.shuffle_open;
                state.screen = screen;
                // The overlay never outlives a navigation.
                state.shuffle_open = false;
                changed
            }
            ShellIntent::AddFavorite(item) => state.favorites.add(item),
            ShellIntent::RemoveFavorite(id) => state.favorites.remove(&id),
            ShellIntent::AddHistory(item) => {
                state.history.push(item);
                true
            }
            ShellIntent::SetPreference(change) => {
                let before = state.preferences;
                state.preferences.apply(change);
                state.preferences != before
            }
            ShellIntent::OpenShuffle => !std::mem::replace(&mut state.shuffle_open, true),
            ShellIntent::CloseShuffle => std::mem::replace(&mut state.shuffle_open, false),
        };
        if changed {
            state.revision += 1;
        }
        state
    }
}
