use crate::shell::view::HistoryProps;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Read-only list. Scrolling is the only interaction and raises no events.
#[derive(Debug, Default)]
pub struct HistoryScreen {
    scroll_offset: usize,
}

impl HistoryScreen {
    pub fn handle_key(&mut self, props: HistoryProps<'_>, key: KeyEvent) {
        let max = props.history.len().saturating_sub(1);
        match key.code {
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::Down => self.scroll_offset = (self.scroll_offset + 1).min(max),
            KeyCode::Home => self.scroll_offset = 0,
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, props: HistoryProps<'_>, theme: &Theme) {
        let visible = area.height.saturating_sub(2) as usize;
        let mut lines = Vec::new();
        if props.history.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing here yet. Cards you move past show up here.",
                theme.muted(),
            )));
        }
        for item in props.history.iter().skip(self.scroll_offset).take(visible) {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", format_time(item.timestamp)), theme.muted()),
                Span::styled(format!("{:<13}", item.kind().label()), theme.muted()),
                Span::styled(item.content.headline(), theme.body()),
            ]));
        }
        let block = Block::default()
            .title(Span::styled(
                format!(" History ({}) ", props.history.len()),
                theme.accent(),
            ))
            .borders(Borders::ALL)
            .border_style(theme.border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// `HH:MM:SS` (UTC) for a millisecond timestamp.
fn format_time(timestamp_ms: u64) -> String {
    let secs = (timestamp_ms / 1000) % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
