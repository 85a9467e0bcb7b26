use crate::shell::events::SettingsEvent;
use crate::shell::preferences::TEXT_SIZE_STEP;
use crate::shell::view::SettingsProps;
use crate::shell::Preference;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::step;

#[derive(Debug, Default)]
pub struct SettingsScreen {
    focused: usize,
}

impl SettingsScreen {
    fn focused_preference(&self) -> Preference {
        Preference::ALL[self.focused % Preference::ALL.len()]
    }

    pub fn handle_key(&mut self, props: SettingsProps<'_>, key: KeyEvent) -> Option<SettingsEvent> {
        let prefs = props.preferences;
        let focused = self.focused_preference();
        match key.code {
            KeyCode::Up => {
                self.focused = step(self.focused, Preference::ALL.len(), false);
                None
            }
            KeyCode::Down => {
                self.focused = step(self.focused, Preference::ALL.len(), true);
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => prefs.toggled(focused).map(SettingsEvent::Set),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right
                if focused == Preference::TextSize =>
            {
                Some(SettingsEvent::Set(prefs.text_size_step(true)))
            }
            KeyCode::Char('-') | KeyCode::Left if focused == Preference::TextSize => {
                Some(SettingsEvent::Set(prefs.text_size_step(false)))
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, props: SettingsProps<'_>, theme: &Theme) {
        let prefs = props.preferences;
        let mut lines = Vec::new();
        for (idx, preference) in Preference::ALL.iter().enumerate() {
            let value = match prefs.flag(*preference) {
                Some(true) => "[x]".to_string(),
                Some(false) => "[ ]".to_string(),
                None => format!("{}%", prefs.text_size),
            };
            let style = if idx == self.focused {
                theme.selected()
            } else {
                theme.body()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{value:>5} "), style),
                Span::styled(format!("{:<22}", preference.label()), style),
                Span::styled(preference.description(), theme.muted()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("↑/↓: Move  Space: Toggle  +/-: Text size ±{TEXT_SIZE_STEP}%"),
            theme.muted(),
        )));
        let block = Block::default()
            .title(Span::styled(" Settings ", theme.accent()))
            .borders(Borders::ALL)
            .border_style(theme.border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_keys::{ch, key};
    use crate::shell::{PreferenceChange, Preferences};

    #[test]
    fn space_toggles_focused_flag() {
        let prefs = Preferences::default();
        let mut screen = SettingsScreen::default();
        assert_eq!(
            screen.handle_key(SettingsProps { preferences: &prefs }, ch(' ')),
            Some(SettingsEvent::Set(PreferenceChange::DarkMode(true)))
        );
    }

    #[test]
    fn plus_only_applies_to_text_size() {
        let prefs = Preferences::default();
        let props = SettingsProps { preferences: &prefs };
        let mut screen = SettingsScreen::default();
        assert_eq!(screen.handle_key(props, ch('+')), None);
        for _ in 0..4 {
            screen.handle_key(props, key(KeyCode::Down));
        }
        assert_eq!(
            screen.handle_key(props, ch('+')),
            Some(SettingsEvent::Set(PreferenceChange::TextSize(110)))
        );
        assert_eq!(screen.handle_key(props, ch(' ')), None);
    }
}
