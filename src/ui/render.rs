use crate::screens::{FloatingShuffleButton, Navigation};
use crate::shell::ActiveView;
use crate::ui::app::App;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

/// Redraw everything from the current shell state.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let shell = app.shell();
    let screens = app.screens();
    let theme = Theme::from_preferences(shell.state().preferences());
    let area = frame.area();
    let (header, body, navigation) = layout_regions(area);

    frame.render_widget(Block::default().style(theme.base()), area);
    frame.render_widget(Header::widget(shell.state(), &theme), header);
    frame.render_widget(Clear, body);
    frame.render_widget(Block::default().style(theme.base()), body);

    match shell.render_active_screen() {
        ActiveView::Home => screens.home.render(frame, body, &theme),
        ActiveView::Questions(props) => screens.questions.render(frame, body, props, &theme),
        ActiveView::DateIdeas => screens.date_ideas.render(frame, body, &theme),
        ActiveView::SmallMoments => screens.small_moments.render(frame, body, &theme),
        ActiveView::BuildADate => screens.build_a_date.render(frame, body, &theme),
        ActiveView::Favorites(props) => screens.favorites.render(frame, body, props, &theme),
        ActiveView::History(props) => screens.history.render(frame, body, props, &theme),
        ActiveView::Settings(props) => screens.settings.render(frame, body, props, &theme),
    }
    if app.in_transition() {
        frame
            .buffer_mut()
            .set_style(body, Style::default().add_modifier(Modifier::DIM));
    }

    let chrome = shell.render_chrome();
    Navigation::render(frame, navigation, chrome.navigation, &theme);
    if let Some(props) = chrome.shuffle_button {
        FloatingShuffleButton::render(frame, body, props, &theme, app.tick());
    }
    screens.shuffle.render(frame, body, chrome.shuffle_modal, &theme);
}
