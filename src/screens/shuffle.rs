use crate::shell::events::{ShuffleButtonEvent, ShuffleModalEvent};
use crate::shell::view::{ShuffleButtonProps, ShuffleModalProps};
use crate::shell::Screen;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::step;

/// Destinations the shuffle overlay can jump to.
pub const SHUFFLE_TARGETS: [Screen; 4] = [
    Screen::Questions,
    Screen::DateIdeas,
    Screen::SmallMoments,
    Screen::BuildADate,
];

const BUTTON_LABEL: &str = " ✦ Shuffle (s) ";

/// Floating button in the bottom-right corner of the home screen.
pub struct FloatingShuffleButton;

impl FloatingShuffleButton {
    pub fn handle_key(key: KeyEvent) -> Option<ShuffleButtonEvent> {
        matches!(key.code, KeyCode::Char('s')).then_some(ShuffleButtonEvent::Open)
    }

    /// `tick` drives a pulse that is skipped under reduced motion.
    pub fn render(frame: &mut Frame, body: Rect, props: ShuffleButtonProps, theme: &Theme, tick: u64) {
        let width = (BUTTON_LABEL.chars().count() as u16).min(body.width);
        let height = body.height.min(1);
        let area = Rect {
            x: body.x + body.width.saturating_sub(width + 2),
            y: body.y + body.height.saturating_sub(height + 1),
            width,
            height,
        };
        let mut style = theme.selected();
        if !props.reduced_motion && tick % 4 < 2 {
            style = style.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(Paragraph::new(Span::styled(BUTTON_LABEL, style)), area);
    }
}

#[derive(Debug, Default)]
pub struct ShuffleModal {
    selected: usize,
}

impl ShuffleModal {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ShuffleModalEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => Some(ShuffleModalEvent::Close),
            KeyCode::Up => {
                self.selected = step(self.selected, SHUFFLE_TARGETS.len(), false);
                None
            }
            KeyCode::Down => {
                self.selected = step(self.selected, SHUFFLE_TARGETS.len(), true);
                None
            }
            KeyCode::Enter => SHUFFLE_TARGETS
                .get(self.selected)
                .map(|screen| ShuffleModalEvent::Navigate(*screen)),
            KeyCode::Char('r') => SHUFFLE_TARGETS
                .choose(&mut rand::thread_rng())
                .map(|screen| ShuffleModalEvent::Navigate(*screen)),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, body: Rect, props: ShuffleModalProps, theme: &Theme) {
        if !props.open {
            return;
        }
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        let mut lines = vec![Line::from(Span::styled(
            format!(
                "Spicy {} · Faith {}",
                on_off(props.spicy_enabled),
                on_off(props.faith_enabled)
            ),
            theme.muted(),
        ))];
        lines.push(Line::from(""));
        for (idx, screen) in SHUFFLE_TARGETS.iter().enumerate() {
            let style = if idx == self.selected {
                theme.selected()
            } else {
                theme.body()
            };
            lines.push(Line::from(Span::styled(format!(" {} ", screen.label()), style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter: Go  r: Surprise me  Esc: Close",
            theme.muted(),
        )));

        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;
        let area = centered_rect_by_size(body, width, height);
        frame.render_widget(Clear, area);
        let block = Block::default()
            .title(Span::styled(" Shuffle ", theme.accent()))
            .borders(Borders::ALL)
            .border_style(theme.accent());
        frame.render_widget(Paragraph::new(lines).style(theme.base()).block(block), area);
    }
}
