use crate::shell::events::FavoritesEvent;
use crate::shell::view::FavoritesProps;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::cell::Cell;

use super::step;

/// Border plus the blank line and key hint under the list.
const CHROME_ROWS: u16 = 4;

#[derive(Debug, Default)]
pub struct FavoritesScreen {
    selected: usize,
    /// First visible row. Only known once the body height is, so render
    /// keeps it in step with `selected`.
    scroll_offset: Cell<usize>,
}

impl FavoritesScreen {
    pub fn handle_key(&mut self, props: FavoritesProps<'_>, key: KeyEvent) -> Option<FavoritesEvent> {
        let len = props.favorites.len();
        match key.code {
            KeyCode::Up => self.selected = step(self.selected.min(len), len, false),
            KeyCode::Down => self.selected = step(self.selected.min(len), len, true),
            KeyCode::Char('d') | KeyCode::Delete => {
                let item = props.favorites.get(self.selected)?;
                let event = FavoritesEvent::Remove(item.id.clone());
                // Keep the cursor on the row that slides into place.
                self.selected = self.selected.min(len.saturating_sub(2));
                return Some(event);
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, props: FavoritesProps<'_>, theme: &Theme) {
        let len = props.favorites.len();
        let rows = area.height.saturating_sub(CHROME_ROWS).max(1) as usize;
        let selected = self.selected.min(len.saturating_sub(1));
        let offset = scroll_to(self.scroll_offset.get(), selected, rows, len);
        self.scroll_offset.set(offset);

        let mut lines = Vec::new();
        if props.favorites.is_empty() {
            lines.push(Line::from(Span::styled(
                "No favorites yet. Press f on any card to save it.",
                theme.muted(),
            )));
        }
        for (idx, item) in props.favorites.iter().enumerate().skip(offset).take(rows) {
            let style = if idx == selected {
                theme.selected()
            } else {
                theme.body()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<13}", item.kind().label()), theme.muted()),
                Span::styled(item.content.headline(), style),
            ]));
        }
        if !props.favorites.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "↑/↓: Move  d: Remove",
                theme.muted(),
            )));
        }
        let block = Block::default()
            .title(Span::styled(
                format!(" Favorites ({}) ", props.favorites.len()),
                theme.accent(),
            ))
            .borders(Borders::ALL)
            .border_style(theme.border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Smallest move of `offset` that keeps `selected` inside a window of
/// `rows`, never scrolling past the end of the list.
fn scroll_to(offset: usize, selected: usize, rows: usize, len: usize) -> usize {
    let offset = if selected < offset {
        selected
    } else if selected >= offset + rows {
        selected + 1 - rows
    } else {
        offset
    };
    offset.min(len.saturating_sub(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_keys::{ch, key};
    use crate::shell::content::{Content, SmallMoment};
    use crate::shell::{FavoriteItem, Favorites};

    fn favorites(n: usize) -> Favorites {
        let mut favorites = Favorites::default();
        for i in 0..n {
            favorites.add(FavoriteItem::new(Content::SmallMoment(SmallMoment {
                text: i.to_string(),
            })));
        }
        favorites
    }

    #[test]
    fn delete_targets_selected_entry() {
        let favorites = favorites(3);
        let props = FavoritesProps {
            favorites: &favorites,
        };
        let mut screen = FavoritesScreen::default();
        screen.handle_key(props, key(KeyCode::Down));
        let expected = favorites.get(1).map(|item| item.id.clone());
        assert_eq!(
            screen.handle_key(props, ch('d')),
            expected.map(FavoritesEvent::Remove)
        );
    }

    #[test]
    fn delete_on_empty_list_does_nothing() {
        let favorites = Favorites::default();
        let mut screen = FavoritesScreen::default();
        assert_eq!(
            screen.handle_key(
                FavoritesProps {
                    favorites: &favorites
                },
                ch('d')
            ),
            None
        );
    }

    #[test]
    fn scroll_follows_selection_both_ways() {
        assert_eq!(scroll_to(0, 3, 5, 40), 0);
        assert_eq!(scroll_to(0, 7, 5, 40), 3);
        assert_eq!(scroll_to(3, 5, 5, 40), 3);
        assert_eq!(scroll_to(3, 1, 5, 40), 1);
    }

    #[test]
    fn scroll_shrinks_with_list() {
        // Two rows were deleted from the bottom of a 12-entry list.
        assert_eq!(scroll_to(7, 9, 5, 10), 5);
        assert_eq!(scroll_to(4, 0, 5, 1), 0);
    }
}
