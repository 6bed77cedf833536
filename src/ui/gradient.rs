use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::palette::Rgb;

/// Fills its area with a top-to-bottom blend between two colors.
pub struct GradientBackground {
    start: Rgb,
    end: Rgb,
}

impl GradientBackground {
    pub fn new((start, end): (Rgb, Rgb)) -> Self {
        Self { start, end }
    }

    /// Color of row `row` out of `height` rows.
    pub fn row_color(&self, row: u16, height: u16) -> Rgb {
        if height <= 1 {
            return self.start;
        }
        self.start.lerp(self.end, row as f32 / (height - 1) as f32)
    }
}

impl Widget for GradientBackground {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            let style = Style::default().bg(self.row_color(row, area.height).into());
            let y = area.y + row;
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ").set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn first_and_last_rows_hit_endpoints() {
        let start = Rgb::new(255, 0, 0);
        let end = Rgb::new(0, 0, 255);
        let gradient = GradientBackground::new((start, end));
        assert_eq!(gradient.row_color(0, 5), start);
        assert_eq!(gradient.row_color(4, 5), end);
        assert_eq!(gradient.row_color(0, 1), start);
    }

    #[test]
    fn render_paints_background() {
        let start = Rgb::new(10, 20, 30);
        let end = Rgb::new(200, 100, 50);
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        GradientBackground::new((start, end)).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(10, 20, 30));
        assert_eq!(buf[(2, 1)].bg, Color::Rgb(200, 100, 50));
    }
}
