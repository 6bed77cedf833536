use crate::ui::app::{StatusKind, StatusMessage};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    can_go_back: bool,
    can_share: bool,
    status: Option<&'a StatusMessage>,
}

impl<'a> Footer<'a> {
    pub fn new(can_go_back: bool, can_share: bool, status: Option<&'a StatusMessage>) -> Self {
        Self {
            can_go_back,
            can_share,
            status,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = text_style.add_modifier(Modifier::DIM);
        let enabled = |on: bool| if on { text_style } else { dim_style };

        let hints = [
            (" Enter: Generate", text_style),
            (" │ ", dim_style),
            ("←: Back", enabled(self.can_go_back)),
            (" │ ", dim_style),
            ("S: Share", enabled(self.can_share)),
            (" │ ", dim_style),
            ("Q: Quit", text_style),
        ];

        let (right, right_style) = match self.status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => STATUS_OK,
                    StatusKind::Error => STATUS_ERROR,
                };
                (format!("{} ", status.text), Style::default().fg(color))
            }
            None => (format!("v{} ", VERSION), dim_style),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width: usize = hints.iter().map(|(text, _)| text.chars().count()).sum();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let mut spans: Vec<Span<'static>> = hints
            .iter()
            .map(|(text, style)| Span::styled(*text, *style))
            .collect();
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(right, right_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
