use crate::shell::Preferences;
use ratatui::style::{Color, Modifier, Style};

const ROSE: Color = Color::Rgb(0xe1, 0x1d, 0x48);
const ROSE_SOFT: Color = Color::Rgb(0xfb, 0x71, 0x85);
const BLUSH_BG: Color = Color::Rgb(0xff, 0xf1, 0xf2);
const INK: Color = Color::Rgb(0x27, 0x27, 0x2a);
const INK_MUTED: Color = Color::Rgb(0x71, 0x71, 0x7a);
const ZINC_BG: Color = Color::Rgb(0x18, 0x18, 0x1b);
const ZINC_TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
const ZINC_MUTED: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
const ZINC_BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
const BLUSH_BORDER: Color = Color::Rgb(0xfe, 0xcd, 0xd3);
const ZINC_HIGHLIGHT: Color = Color::Rgb(0x27, 0x27, 0x2a);
const BLUSH_HIGHLIGHT: Color = Color::Rgb(0xff, 0xe4, 0xe6);

/// Text size at which body text switches to bold.
const LARGE_TEXT_THRESHOLD: u16 = 125;

/// Palette resolved from the current preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    large_text: bool,
}

impl Theme {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let mut theme = if prefs.dark_mode {
            Self {
                background: ZINC_BG,
                text: ZINC_TEXT,
                muted: ZINC_MUTED,
                accent: ROSE_SOFT,
                border: ZINC_BORDER,
                highlight: ZINC_HIGHLIGHT,
                large_text: false,
            }
        } else {
            Self {
                background: BLUSH_BG,
                text: INK,
                muted: INK_MUTED,
                accent: ROSE,
                border: BLUSH_BORDER,
                highlight: BLUSH_HIGHLIGHT,
                large_text: false,
            }
        };
        if prefs.high_contrast {
            let (fg, bg) = if prefs.dark_mode {
                (Color::White, Color::Black)
            } else {
                (Color::Black, Color::White)
            };
            theme.background = bg;
            theme.text = fg;
            theme.muted = fg;
            theme.border = fg;
        }
        theme.large_text = prefs.text_size >= LARGE_TEXT_THRESHOLD;
        theme
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn body(&self) -> Style {
        let style = Style::default().fg(self.text);
        if self.large_text {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_contrast_overrides_palette() {
        let prefs = Preferences {
            dark_mode: true,
            high_contrast: true,
            ..Preferences::default()
        };
        let theme = Theme::from_preferences(&prefs);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.background, Color::Black);
    }

    #[test]
    fn large_text_is_bold() {
        let prefs = Preferences {
            text_size: 150,
            ..Preferences::default()
        };
        let theme = Theme::from_preferences(&prefs);
        assert!(theme.body().add_modifier.contains(Modifier::BOLD));
        let normal = Theme::from_preferences(&Preferences::default());
        assert!(!normal.body().add_modifier.contains(Modifier::BOLD));
    }
}
