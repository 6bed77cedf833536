use crate::ui::app::App;
use crate::ui::fact::LoadingState;
use crate::ui::footer::Footer;
use crate::ui::gradient::GradientBackground;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{CARD_BACKGROUND, CARD_TEXT, GLOBAL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

const CARD_MAX_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.fact_state();

    let header_widget = Header::new(&state.cat_emoji, app.history_len());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(GradientBackground::new(state.background), body);

    let card_width = CARD_MAX_WIDTH.min(body.width.saturating_sub(4));
    let card = centered_rect_by_size(body, card_width, CARD_HEIGHT);
    frame.render_widget(Clear, card);
    frame.render_widget(card_widget(&state.loading), card);

    let footer_widget = Footer::new(state.has_history, app.can_share(), app.status());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn card_widget(loading: &LoadingState) -> Paragraph<'static> {
    let text_style = Style::default().fg(CARD_TEXT).bg(CARD_BACKGROUND);
    let text = match loading {
        LoadingState::Loading => Text::from(Line::from(Span::styled(
            "Fetching a fact…",
            text_style.add_modifier(Modifier::DIM),
        ))),
        LoadingState::Done { fact, .. } if fact.is_empty() => Text::from(Line::from(Span::styled(
            "Press Enter to generate a cat fact!",
            text_style.add_modifier(Modifier::DIM),
        ))),
        LoadingState::Done { fact, exclamation } => Text::from(Line::from(vec![
            Span::styled(format!("{} ", fact), text_style),
            Span::styled(
                exclamation.clone(),
                text_style.add_modifier(Modifier::ITALIC),
            ),
        ])),
    };

    Paragraph::new(text)
        .style(text_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER).bg(CARD_BACKGROUND))
                .padding(Padding::new(2, 2, 1, 1)),
        )
}
