use crate::content;
use crate::shell::content::{Content, DateIdea, HistoryContent, Question, SmallMoment, Tone};
use crate::shell::events::FlowEvent;
use crate::shell::view::QuestionsProps;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::is_back;

/// Something a flow can show as a card.
trait Card {
    fn title(&self) -> String;
    fn body(&self) -> Option<String>;
    fn tag(&self) -> Option<&'static str> {
        None
    }
    fn to_history(&self) -> HistoryContent;
}

impl Card for Question {
    fn title(&self) -> String {
        self.prompt.clone()
    }
    fn body(&self) -> Option<String> {
        None
    }
    fn tag(&self) -> Option<&'static str> {
        Some(match self.tone {
            Tone::Light => "light",
            Tone::Deep => "deep",
            Tone::Spicy => "spicy",
            Tone::Faith => "faith",
        })
    }
    fn to_history(&self) -> HistoryContent {
        HistoryContent::Question(self.clone())
    }
}

impl Card for DateIdea {
    fn title(&self) -> String {
        self.title.clone()
    }
    fn body(&self) -> Option<String> {
        Some(self.description.clone())
    }
    fn to_history(&self) -> HistoryContent {
        HistoryContent::DateIdea(self.clone())
    }
}

impl Card for SmallMoment {
    fn title(&self) -> String {
        self.text.clone()
    }
    fn body(&self) -> Option<String> {
        None
    }
    fn to_history(&self) -> HistoryContent {
        HistoryContent::SmallMoment(self.clone())
    }
}

/// Cursor over a deck of cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Deck {
    cursor: usize,
}

impl Deck {
    fn current<'a, C>(&self, cards: &'a [C]) -> Option<&'a C> {
        if cards.is_empty() {
            return None;
        }
        cards.get(self.cursor % cards.len())
    }

    /// Advancing records the card being left in history.
    fn handle_key<C: Card>(&mut self, cards: &[C], key: KeyEvent) -> Option<FlowEvent> {
        if is_back(&key) {
            return Some(FlowEvent::Back);
        }
        let card = self.current(cards)?;
        match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => {
                let viewed = card.to_history();
                self.cursor = super::step(self.cursor % cards.len(), cards.len(), true);
                Some(FlowEvent::AddHistory(viewed))
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.cursor = super::step(self.cursor % cards.len(), cards.len(), false);
                None
            }
            KeyCode::Char('f') => Some(FlowEvent::AddFavorite(Content::from(card.to_history()))),
            _ => None,
        }
    }

    fn render<C: Card>(&self, frame: &mut Frame, area: Rect, title: &str, cards: &[C], theme: &Theme) {
        let mut lines = Vec::new();
        match self.current(cards) {
            Some(card) => {
                let position = format!("{}/{}", self.cursor % cards.len() + 1, cards.len());
                let mut header = vec![Span::styled(position, theme.muted())];
                if let Some(tag) = card.tag() {
                    header.push(Span::raw("  "));
                    header.push(Span::styled(format!("#{tag}"), theme.accent()));
                }
                lines.push(Line::from(header));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(card.title(), theme.accent())));
                if let Some(body) = card.body() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(body, theme.body())));
                }
            }
            None => lines.push(Line::from(Span::styled("Nothing to show.", theme.muted()))),
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter: Next  ←: Previous  f: Favorite  Esc: Back",
            theme.muted(),
        )));

        let block = Block::default()
            .title(Span::styled(format!(" {title} "), theme.accent()))
            .borders(Borders::ALL)
            .border_style(theme.border());
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}

#[derive(Debug, Default)]
pub struct QuestionsFlow {
    deck: Deck,
}

impl QuestionsFlow {
    pub fn handle_key(&mut self, props: QuestionsProps, key: KeyEvent) -> Option<FlowEvent> {
        let cards = content::questions(props.spicy_enabled, props.faith_enabled);
        self.deck.handle_key(&cards, key)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, props: QuestionsProps, theme: &Theme) {
        let cards = content::questions(props.spicy_enabled, props.faith_enabled);
        self.deck.render(frame, area, "Questions", &cards, theme);
    }
}

#[derive(Debug, Default)]
pub struct DateIdeasFlow {
    deck: Deck,
}

impl DateIdeasFlow {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FlowEvent> {
        self.deck.handle_key(&content::date_ideas(), key)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.deck
            .render(frame, area, "Date Ideas", &content::date_ideas(), theme);
    }
}

#[derive(Debug, Default)]
pub struct SmallMomentsHub {
    deck: Deck,
}

impl SmallMomentsHub {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FlowEvent> {
        self.deck.handle_key(&content::small_moments(), key)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.deck
            .render(frame, area, "Small Moments", &content::small_moments(), theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_keys::{ch, key};
    use crate::shell::ContentKind;

    const PLAIN: QuestionsProps = QuestionsProps {
        spicy_enabled: false,
        faith_enabled: false,
    };

    #[test]
    fn advancing_records_viewed_card() {
        let mut flow = QuestionsFlow::default();
        let first = content::questions(false, false)[0].clone();
        let event = flow.handle_key(PLAIN, key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(FlowEvent::AddHistory(HistoryContent::Question(first)))
        );
    }

    #[test]
    fn favorite_uses_current_card() {
        let mut flow = DateIdeasFlow::default();
        flow.handle_key(key(KeyCode::Right));
        let Some(FlowEvent::AddFavorite(content)) = flow.handle_key(ch('f')) else {
            panic!("expected AddFavorite");
        };
        assert_eq!(content.kind(), ContentKind::DateIdea);
        assert_eq!(content.headline(), content::date_ideas()[1].title);
    }

    #[test]
    fn escape_goes_back() {
        let mut flow = SmallMomentsHub::default();
        assert_eq!(flow.handle_key(key(KeyCode::Esc)), Some(FlowEvent::Back));
    }

    #[test]
    fn previous_wraps_without_history() {
        let mut flow = SmallMomentsHub::default();
        assert_eq!(flow.handle_key(key(KeyCode::Left)), None);
        let last = content::small_moments().last().cloned();
        let Some(FlowEvent::AddFavorite(Content::SmallMoment(moment))) = flow.handle_key(ch('f'))
        else {
            panic!("expected small moment favorite");
        };
        assert_eq!(Some(moment), last);
    }
}
