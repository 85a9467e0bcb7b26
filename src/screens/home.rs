use crate::shell::events::HomeEvent;
use crate::shell::Screen;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const MENU: [(Screen, &str); 7] = [
    (Screen::Questions, "Questions to ask each other"),
    (Screen::DateIdeas, "Ideas for your next date"),
    (Screen::SmallMoments, "Little ways to show you care"),
    (Screen::BuildADate, "Put a date together step by step"),
    (Screen::Favorites, "Everything you saved"),
    (Screen::History, "What you have seen recently"),
    (Screen::Settings, "Preferences"),
];

#[derive(Debug, Default)]
pub struct Home {
    selected: usize,
}

impl Home {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<HomeEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::step(self.selected, MENU.len(), false);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::step(self.selected, MENU.len(), true);
                None
            }
            KeyCode::Enter => MENU
                .get(self.selected)
                .map(|(screen, _)| HomeEvent::Navigate(*screen)),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::styled("What would you like to do together?", theme.body())),
            Line::from(""),
        ];
        for (idx, (screen, blurb)) in MENU.iter().enumerate() {
            let marker = if idx == self.selected { "▸ " } else { "  " };
            let style = if idx == self.selected {
                theme.selected()
            } else {
                theme.body()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{:<14}", screen.label()), style),
                Span::styled(*blurb, theme.muted()),
            ]));
        }
        let block = Block::default()
            .title(Span::styled(" Home ", theme.accent()))
            .borders(Borders::ALL)
            .border_style(theme.border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_keys::key;

    #[test]
    fn enter_opens_first_entry() {
        let mut home = Home::default();
        assert_eq!(
            home.handle_key(key(KeyCode::Enter)),
            Some(HomeEvent::Navigate(Screen::Questions))
        );
    }

    #[test]
    fn up_from_top_selects_settings() {
        let mut home = Home::default();
        home.handle_key(key(KeyCode::Up));
        assert_eq!(
            home.handle_key(key(KeyCode::Enter)),
            Some(HomeEvent::Navigate(Screen::Settings))
        );
    }
}
