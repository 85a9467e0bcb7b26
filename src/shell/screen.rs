use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Top-level view selected by the shell. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    #[default]
    Home,
    Questions,
    DateIdeas,
    SmallMoments,
    BuildADate,
    Favorites,
    History,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen '{0}' (expected one of: home, questions, dateIdeas, smallMoments, buildADate, favorites, history, settings)")]
pub struct ScreenParseError(pub String);

impl Screen {
    /// Navigation bar order.
    pub const ALL: [Screen; 8] = [
        Screen::Home,
        Screen::Questions,
        Screen::DateIdeas,
        Screen::SmallMoments,
        Screen::BuildADate,
        Screen::Favorites,
        Screen::History,
        Screen::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Questions => "questions",
            Screen::DateIdeas => "dateIdeas",
            Screen::SmallMoments => "smallMoments",
            Screen::BuildADate => "buildADate",
            Screen::Favorites => "favorites",
            Screen::History => "history",
            Screen::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Questions => "Questions",
            Screen::DateIdeas => "Date Ideas",
            Screen::SmallMoments => "Small Moments",
            Screen::BuildADate => "Build a Date",
            Screen::Favorites => "Favorites",
            Screen::History => "History",
            Screen::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next screen in navigation bar order, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ScreenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| ScreenParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_default() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn parses_every_wire_name() {
        for screen in Screen::ALL {
            assert_eq!(screen.as_str().parse::<Screen>(), Ok(screen));
        }
    }

    #[test]
    fn rejects_values_outside_enumeration() {
        let err = "profile".parse::<Screen>().unwrap_err();
        assert_eq!(err, ScreenParseError("profile".to_string()));
        assert!("DateIdeas".parse::<Screen>().is_err());
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Screen::Settings.next(), Screen::Home);
        assert_eq!(Screen::Home.prev(), Screen::Settings);
        assert_eq!(Screen::Questions.next().prev(), Screen::Questions);
    }

    #[test]
    fn deserializes_camel_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            screen: Screen,
        }
        let parsed: Wrapper = toml::from_str("screen = \"buildADate\"").unwrap();
        assert_eq!(parsed.screen, Screen::BuildADate);
    }
}
