use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE_ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    cat_emoji: &'a str,
    history_len: usize,
}

impl<'a> Header<'a> {
    pub fn new(cat_emoji: &'a str, history_len: usize) -> Self {
        Self {
            cat_emoji,
            history_len,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(TITLE_ACCENT)
            .add_modifier(Modifier::BOLD);
        let history = match self.history_len {
            1 => "1 fact".to_string(),
            n => format!("{} facts", n),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.cat_emoji.to_string(), text_style),
            Span::styled("  ", text_style),
            Span::styled("Cat Facts", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(history, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
