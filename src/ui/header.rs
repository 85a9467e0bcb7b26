use crate::shell::ShellState;
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget(state: &ShellState, theme: &Theme) -> Paragraph<'static> {
        let separator = Span::styled("  │  ", theme.border());
        let line = Line::from(vec![
            Span::styled("  ♥ DateSpark", theme.accent()),
            separator.clone(),
            Span::styled(state.screen().label(), theme.body()),
            separator.clone(),
            Span::styled(format!("♡ {}", state.favorites().len()), theme.muted()),
            separator,
            Span::styled(format!("↺ {}", state.history().len()), theme.muted()),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(theme.border()),
        )
    }
}
