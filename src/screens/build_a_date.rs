use crate::content::{ACTIVITIES, FOODS, SETTINGS};
use crate::shell::content::{Content, CustomDate};
use crate::shell::events::BuildADateEvent;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{is_back, step};

const STEPS: [(&str, &[&str]); 3] = [
    ("Where", SETTINGS),
    ("What", ACTIVITIES),
    ("Food", FOODS),
];

/// Pick one option per step; the result can be saved as a favorite.
#[derive(Debug, Default)]
pub struct BuildADate {
    focused_step: usize,
    choices: [usize; 3],
}

impl BuildADate {
    pub fn plan(&self) -> CustomDate {
        let pick = |idx: usize| STEPS[idx].1[self.choices[idx] % STEPS[idx].1.len()].to_string();
        CustomDate {
            setting: pick(0),
            activity: pick(1),
            food: pick(2),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<BuildADateEvent> {
        if is_back(&key) {
            return Some(BuildADateEvent::Back);
        }
        match key.code {
            KeyCode::Up => self.focused_step = step(self.focused_step, STEPS.len(), false),
            KeyCode::Down => self.focused_step = step(self.focused_step, STEPS.len(), true),
            KeyCode::Left | KeyCode::Right => {
                let options = STEPS[self.focused_step].1.len();
                let choice = &mut self.choices[self.focused_step];
                *choice = step(*choice, options, key.code == KeyCode::Right);
            }
            KeyCode::Char('f') | KeyCode::Enter => {
                return Some(BuildADateEvent::AddFavorite(Content::CustomDate(self.plan())));
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::new();
        for (idx, (label, options)) in STEPS.iter().enumerate() {
            let value = options[self.choices[idx] % options.len()];
            let style = if idx == self.focused_step {
                theme.selected()
            } else {
                theme.body()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<6}"), theme.muted()),
                Span::styled(format!("‹ {value} ›"), style),
            ]));
        }
        let plan = self.plan();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            Content::CustomDate(plan).headline(),
            theme.accent(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓: Step  ←/→: Option  f/Enter: Save  Esc: Back",
            theme.muted(),
        )));
        let block = Block::default()
            .title(Span::styled(" Build a Date ", theme.accent()))
            .borders(Borders::ALL)
            .border_style(theme.border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
