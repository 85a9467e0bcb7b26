use crate::shell::events::NavigationEvent;
use crate::shell::view::NavigationProps;
use crate::shell::Screen;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar listing every screen; always visible.
pub struct Navigation;

impl Navigation {
    /// Tab/Shift+Tab cycle screens, 1..8 jump directly.
    pub fn handle_key(props: NavigationProps, key: KeyEvent) -> Option<NavigationEvent> {
        let target = match key.code {
            KeyCode::Tab => props.current.next(),
            KeyCode::BackTab => props.current.prev(),
            KeyCode::Char(ch) if key.modifiers.is_empty() => {
                let index = ch.to_digit(10)?.checked_sub(1)?;
                Screen::from_index(index as usize)?
            }
            _ => return None,
        };
        Some(NavigationEvent::Navigate(target))
    }

    pub fn render(frame: &mut Frame, area: Rect, props: NavigationProps, theme: &Theme) {
        let mut spans = vec![Span::raw(" ")];
        for (idx, screen) in Screen::ALL.iter().enumerate() {
            let style = if *screen == props.current {
                theme.selected()
            } else {
                theme.muted()
            };
            spans.push(Span::styled(format!("{} {}", idx + 1, screen.label()), style));
            spans.push(Span::styled(" │ ", theme.border()));
        }
        spans.pop();

        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let padding = (area.width.saturating_sub(2) as usize)
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(
            version,
            theme.muted().add_modifier(Modifier::DIM),
        ));

        let widget = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            );
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn props(current: Screen) -> NavigationProps {
        NavigationProps {
            current,
            dark_mode: false,
        }
    }

    #[test]
    fn tab_cycles_forward() {
        let event = Navigation::handle_key(
            props(Screen::History),
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
        );
        assert_eq!(event, Some(NavigationEvent::Navigate(Screen::Settings)));
    }

    #[test]
    fn digit_jumps() {
        let event = Navigation::handle_key(
            props(Screen::Home),
            KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE),
        );
        assert_eq!(event, Some(NavigationEvent::Navigate(Screen::Favorites)));
        let none = Navigation::handle_key(
            props(Screen::Home),
            KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE),
        );
        assert_eq!(none, None);
    }
}
