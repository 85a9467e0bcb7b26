use crate::shell::{Preferences, Screen};
use serde::Deserialize;

/// Root of `config.toml`. Every section is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preference values at startup. Changes made in the app are not saved.
    pub preferences: Preferences,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Interval between ticks driving animations, in milliseconds.
    pub tick_rate_ms: u64,
    /// Screen shown at launch.
    pub start_screen: Screen,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_screen: Screen::Home,
        }
    }
}
