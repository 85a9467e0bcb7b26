use crate::config::Config;
use crate::shell::{PreferenceChange, Preferences, Screen};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "datespark", version, about = "Conversation starters and date ideas for two")]
pub struct Cli {
    /// Path to config.toml (default: <config dir>/datespark/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open at launch (home, questions, dateIdeas, smallMoments,
    /// buildADate, favorites, history, settings)
    #[arg(long, value_name = "SCREEN")]
    pub screen: Option<Screen>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Include spicy questions
    #[arg(long)]
    pub spicy: bool,

    /// Skip screen transitions and pulsing
    #[arg(long)]
    pub reduced_motion: bool,

    /// Use high-contrast colours
    #[arg(long)]
    pub high_contrast: bool,

    /// Text size in percent (clamped to 50-200)
    #[arg(long, value_name = "PERCENT")]
    pub text_size: Option<u16>,
}

impl Cli {
    /// Initial screen and preferences: config values, then CLI overrides.
    pub fn startup(&self, config: &Config) -> (Screen, Preferences) {
        let screen = self.screen.unwrap_or(config.ui.start_screen);
        let mut prefs = config.preferences.normalized();
        let flags = [
            (self.dark, PreferenceChange::DarkMode(true)),
            (self.spicy, PreferenceChange::SpicyEnabled(true)),
            (self.reduced_motion, PreferenceChange::ReducedMotion(true)),
            (self.high_contrast, PreferenceChange::HighContrast(true)),
        ];
        for (_, change) in flags.into_iter().filter(|(set, _)| *set) {
            prefs.apply(change);
        }
        if let Some(size) = self.text_size {
            prefs.apply(PreferenceChange::TextSize(size));
        }
        (screen, prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["datespark", "--screen", "favorites", "--dark", "--text-size", "400"]);
        let (screen, prefs) = cli.startup(&Config::default());
        assert_eq!(screen, Screen::Favorites);
        assert!(prefs.dark_mode);
        assert_eq!(prefs.text_size, 200);
        assert!(prefs.faith_enabled);
    }

    #[test]
    fn config_start_screen_used_without_flag() {
        let mut config = Config::default();
        config.ui.start_screen = Screen::Settings;
        config.preferences.spicy_enabled = true;
        let cli = Cli::parse_from(["datespark"]);
        let (screen, prefs) = cli.startup(&config);
        assert_eq!(screen, Screen::Settings);
        assert!(prefs.spicy_enabled);
    }

    #[test]
    fn unknown_screen_is_rejected() {
        assert!(Cli::try_parse_from(["datespark", "--screen", "profile"]).is_err());
    }
}
