mod common;

use common::{date_idea, history_moment, question_content};
use datespark::shell::{
    Content, ContentKind, PreferenceChange, Preferences, Screen, Shell, HISTORY_LIMIT,
};
use std::collections::HashSet;

#[test]
fn starts_on_home_with_empty_collections() {
    let shell = Shell::default();
    assert_eq!(shell.screen(), Screen::Home);
    assert!(shell.state().favorites().is_empty());
    assert!(shell.state().history().is_empty());
    assert_eq!(*shell.state().preferences(), Preferences::default());
}

#[test]
fn favorites_are_newest_first() {
    let mut shell = Shell::default();
    shell.add_to_favorites(question_content("Q1"));
    let favorites = shell.state().favorites();
    assert_eq!(favorites.len(), 1);
    let first = favorites.get(0).unwrap();
    assert_eq!(first.kind(), ContentKind::Question);
    assert_eq!(first.content.headline(), "Q1");

    shell.add_to_favorites(Content::DateIdea(date_idea("D1")));
    let headlines: Vec<String> = shell
        .state()
        .favorites()
        .iter()
        .map(|item| item.content.headline())
        .collect();
    assert_eq!(headlines, vec!["D1", "Q1"]);
}

#[test]
fn identical_content_is_not_deduplicated() {
    let mut shell = Shell::default();
    let a = shell.add_to_favorites(question_content("same"));
    let b = shell.add_to_favorites(question_content("same"));
    assert_ne!(a, b);
    assert_eq!(shell.state().favorites().len(), 2);
}

#[test]
fn history_keeps_last_fifty() {
    let mut shell = Shell::default();
    for i in 0..55 {
        shell.add_to_history(history_moment(&format!("m{i}")));
    }
    let history = shell.state().history();
    assert_eq!(history.len(), HISTORY_LIMIT);
    let headlines: Vec<String> = history.iter().map(|item| item.content.headline()).collect();
    let expected: Vec<String> = (5..55).rev().map(|i| format!("m{i}")).collect();
    assert_eq!(headlines, expected);
}

#[test]
fn history_never_exceeds_bound_at_any_step() {
    let mut shell = Shell::default();
    for i in 0..(HISTORY_LIMIT * 3) {
        shell.add_to_history(history_moment(&i.to_string()));
        let history = shell.state().history();
        assert_eq!(history.len(), (i + 1).min(HISTORY_LIMIT));
        assert_eq!(
            history.get(0).map(|item| item.content.headline()),
            Some(i.to_string())
        );
    }
}

#[test]
fn removing_absent_id_changes_nothing() {
    let mut shell = Shell::default();
    shell.add_to_favorites(question_content("keep"));
    let before = shell.state().clone();
    shell.remove_from_favorites("not-an-id");
    assert_eq!(shell.state(), &before);
}

#[test]
fn removing_present_id_removes_exactly_one_and_keeps_order() {
    let mut shell = Shell::default();
    let ids: Vec<String> = (0..5)
        .map(|i| shell.add_to_favorites(question_content(&format!("q{i}"))))
        .collect();
    shell.remove_from_favorites(&ids[2]);

    let remaining: Vec<String> = shell
        .state()
        .favorites()
        .iter()
        .map(|item| item.content.headline())
        .collect();
    assert_eq!(remaining, vec!["q4", "q3", "q1", "q0"]);

    shell.remove_from_favorites(&ids[2]);
    assert_eq!(shell.state().favorites().len(), 4);
}

#[test]
fn favorite_ids_are_never_reused() {
    let mut shell = Shell::default();
    let mut seen = HashSet::new();
    for i in 0..200 {
        let id = shell.add_to_favorites(question_content(&i.to_string()));
        assert!(seen.insert(id.clone()), "id {id} reused");
        if i % 2 == 0 {
            shell.remove_from_favorites(&id);
        }
    }
    assert_eq!(shell.state().favorites().len(), 100);
}

#[test]
fn navigate_is_immediately_visible() {
    let mut shell = Shell::default();
    for screen in Screen::ALL.iter().rev() {
        shell.navigate(*screen);
        assert_eq!(shell.screen(), *screen);
        assert_eq!(shell.render_active_screen().screen(), *screen);
    }
}

#[test]
fn any_screen_can_follow_any_other() {
    let mut shell = Shell::default();
    for from in Screen::ALL {
        for to in Screen::ALL {
            shell.navigate(from);
            shell.navigate(to);
            assert_eq!(shell.screen(), to);
        }
    }
}

#[test]
fn dark_mode_toggle_leaves_other_flags_alone() {
    let mut shell = Shell::default();
    shell.set_preference(PreferenceChange::DarkMode(true));
    let prefs = shell.state().preferences();
    assert!(prefs.dark_mode);
    assert_eq!(
        *prefs,
        Preferences {
            dark_mode: true,
            ..Preferences::default()
        }
    );
}

#[test]
fn text_size_out_of_range_is_clamped() {
    let mut shell = Shell::default();
    shell.set_preference(PreferenceChange::TextSize(1000));
    assert_eq!(shell.state().preferences().text_size, 200);
    shell.set_preference(PreferenceChange::TextSize(10));
    assert_eq!(shell.state().preferences().text_size, 50);
}

#[test]
fn observers_see_every_mutation() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let screens = Rc::new(RefCell::new(Vec::new()));
    let mut shell = Shell::default();
    let sink = Rc::clone(&screens);
    let subscription = shell.subscribe(move |state| sink.borrow_mut().push(state.screen()));

    shell.navigate(Screen::Questions);
    shell.navigate(Screen::Questions);
    shell.navigate(Screen::Home);
    shell.unsubscribe(subscription);
    shell.navigate(Screen::Settings);

    assert_eq!(*screens.borrow(), vec![Screen::Questions, Screen::Home]);
}
