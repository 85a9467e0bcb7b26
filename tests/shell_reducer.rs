mod common;

use common::{history_moment, question_content};
use datespark::shell::{
    FavoriteItem, HistoryItem, PreferenceChange, Screen, ShellIntent, ShellReducer, ShellState,
};
use datespark::ui::mvi::Reducer;

fn with_favorites(n: usize) -> (ShellState, Vec<String>) {
    let mut state = ShellState::default();
    let mut ids = Vec::new();
    for i in 0..n {
        let item = FavoriteItem::new(question_content(&i.to_string()));
        ids.push(item.id.clone());
        state = ShellReducer::reduce(state, ShellIntent::AddFavorite(item));
    }
    (state, ids)
}

#[test]
fn navigate_replaces_screen() {
    let state = ShellReducer::reduce(ShellState::default(), ShellIntent::Navigate(Screen::History));
    assert_eq!(state.screen(), Screen::History);
}

#[test]
fn add_favorite_prepends() {
    let (state, ids) = with_favorites(3);
    let order: Vec<&str> = state.favorites().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(order, vec![ids[2].as_str(), ids[1].as_str(), ids[0].as_str()]);
}

#[test]
fn remove_missing_favorite_is_noop() {
    let (state, _) = with_favorites(2);
    let after = ShellReducer::reduce(state.clone(), ShellIntent::RemoveFavorite("missing".into()));
    assert_eq!(after, state);
}

#[test]
fn add_history_truncates() {
    let mut state = ShellState::default();
    for i in 0..60 {
        state = ShellReducer::reduce(
            state,
            ShellIntent::AddHistory(HistoryItem::new(history_moment(&i.to_string()))),
        );
    }
    assert_eq!(state.history().len(), 50);
}

#[test]
fn shuffle_open_and_close() {
    let state = ShellReducer::reduce(ShellState::default(), ShellIntent::OpenShuffle);
    assert!(state.is_shuffle_open());
    let state = ShellReducer::reduce(state, ShellIntent::CloseShuffle);
    assert!(!state.is_shuffle_open());
}

#[test]
fn preference_change_touches_one_field() {
    let before = ShellState::default();
    let after = ShellReducer::reduce(
        before.clone(),
        ShellIntent::SetPreference(PreferenceChange::HighContrast(true)),
    );
    assert!(after.preferences().high_contrast);
    assert_eq!(after.preferences().dark_mode, before.preferences().dark_mode);
    assert_eq!(after.preferences().text_size, before.preferences().text_size);
    assert_eq!(after.favorites(), before.favorites());
}
