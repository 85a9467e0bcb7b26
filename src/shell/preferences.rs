use serde::Deserialize;

pub const TEXT_SIZE_DEFAULT: u16 = 100;
pub const TEXT_SIZE_MIN: u16 = 50;
pub const TEXT_SIZE_MAX: u16 = 200;
pub const TEXT_SIZE_STEP: u16 = 10;

/// Session-scoped presentation flags. No field constrains another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub spicy_enabled: bool,
    pub faith_enabled: bool,
    pub reduced_motion: bool,
    /// Percentage, clamped to `TEXT_SIZE_MIN..=TEXT_SIZE_MAX`.
    pub text_size: u16,
    pub high_contrast: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            spicy_enabled: false,
            faith_enabled: true,
            reduced_motion: false,
            text_size: TEXT_SIZE_DEFAULT,
            high_contrast: false,
        }
    }
}

/// Identifies one preference, in settings-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    DarkMode,
    SpicyEnabled,
    FaithEnabled,
    ReducedMotion,
    TextSize,
    HighContrast,
}

impl Preference {
    pub const ALL: [Preference; 6] = [
        Preference::DarkMode,
        Preference::SpicyEnabled,
        Preference::FaithEnabled,
        Preference::ReducedMotion,
        Preference::TextSize,
        Preference::HighContrast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preference::DarkMode => "Dark mode",
            Preference::SpicyEnabled => "Spicy questions",
            Preference::FaithEnabled => "Faith-based content",
            Preference::ReducedMotion => "Reduce motion",
            Preference::TextSize => "Text size",
            Preference::HighContrast => "High contrast",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preference::DarkMode => "Use the dark palette",
            Preference::SpicyEnabled => "Include flirty questions and ideas",
            Preference::FaithEnabled => "Include faith-centred prompts",
            Preference::ReducedMotion => "Skip screen transitions",
            Preference::TextSize => "Scale body text (+/- to adjust)",
            Preference::HighContrast => "Stronger colours and borders",
        }
    }
}

/// A single unconditional write to one preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    DarkMode(bool),
    SpicyEnabled(bool),
    FaithEnabled(bool),
    ReducedMotion(bool),
    TextSize(u16),
    HighContrast(bool),
}

impl Preferences {
    pub fn apply(&mut self, change: PreferenceChange) {
        match change {
            PreferenceChange::DarkMode(value) => self.dark_mode = value,
            PreferenceChange::SpicyEnabled(value) => self.spicy_enabled = value,
            PreferenceChange::FaithEnabled(value) => self.faith_enabled = value,
            PreferenceChange::ReducedMotion(value) => self.reduced_motion = value,
            PreferenceChange::TextSize(value) => self.text_size = clamp_text_size(value),
            PreferenceChange::HighContrast(value) => self.high_contrast = value,
        }
    }

    /// Current value of a boolean preference; `None` for text size.
    pub fn flag(&self, preference: Preference) -> Option<bool> {
        match preference {
            Preference::DarkMode => Some(self.dark_mode),
            Preference::SpicyEnabled => Some(self.spicy_enabled),
            Preference::FaithEnabled => Some(self.faith_enabled),
            Preference::ReducedMotion => Some(self.reduced_motion),
            Preference::HighContrast => Some(self.high_contrast),
            Preference::TextSize => None,
        }
    }

    /// Change that flips a boolean preference; `None` for text size.
    pub fn toggled(&self, preference: Preference) -> Option<PreferenceChange> {
        let value = !self.flag(preference)?;
        Some(match preference {
            Preference::DarkMode => PreferenceChange::DarkMode(value),
            Preference::SpicyEnabled => PreferenceChange::SpicyEnabled(value),
            Preference::FaithEnabled => PreferenceChange::FaithEnabled(value),
            Preference::ReducedMotion => PreferenceChange::ReducedMotion(value),
            Preference::HighContrast => PreferenceChange::HighContrast(value),
            Preference::TextSize => return None,
        })
    }

    /// Change that moves text size one step up or down.
    pub fn text_size_step(&self, up: bool) -> PreferenceChange {
        let size = if up {
            self.text_size.saturating_add(TEXT_SIZE_STEP)
        } else {
            self.text_size.saturating_sub(TEXT_SIZE_STEP)
        };
        PreferenceChange::TextSize(clamp_text_size(size))
    }

    /// Returns a copy with out-of-range values pulled back into range.
    pub fn normalized(mut self) -> Self {
        self.text_size = clamp_text_size(self.text_size);
        self
    }
}

pub fn clamp_text_size(value: u16) -> u16 {
    value.clamp(TEXT_SIZE_MIN, TEXT_SIZE_MAX)
}
