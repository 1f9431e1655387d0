//! Progress bar widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// A horizontal bar filled to a whole-number percentage.
pub struct ProgressBar {
    /// Percentage to display (0 - 100).
    percent: u8,
    /// Style for filled portion.
    filled_style: Style,
    /// Style for empty portion.
    empty_style: Style,
    filled_char: char,
    empty_char: char,
}

impl ProgressBar {
    /// Create a new progress bar.
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            filled_style: Style::default(),
            empty_style: Style::default(),
            filled_char: '━',
            empty_char: '─',
        }
    }

    /// Set the style for the filled portion.
    pub fn filled_style(mut self, style: Style) -> Self {
        self.filled_style = style;
        self
    }

    /// Set the style for the empty portion.
    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }

    /// Set custom characters.
    pub fn chars(mut self, filled: char, empty: char) -> Self {
        self.filled_char = filled;
        self.empty_char = empty;
        self
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled_width =
            (u32::from(area.width) * u32::from(self.percent) + 50) / 100;

        for x in 0..area.width {
            let (char, style) = if u32::from(x) < filled_width {
                (self.filled_char, self.filled_style)
            } else {
                (self.empty_char, self.empty_style)
            };

            buf[(area.x + x, area.y)].set_char(char).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(percent: u8, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        ProgressBar::new(percent).chars('#', '.').render(area, &mut buf);
        buf
    }

    #[test]
    fn test_progress_bar_full() {
        let buf = render(100, 10);
        for x in 0..10 {
            assert_eq!(buf[(x, 0)].symbol(), "#");
        }
    }

    #[test]
    fn test_progress_bar_partial() {
        let buf = render(33, 10);
        for x in 0..3 {
            assert_eq!(buf[(x, 0)].symbol(), "#");
        }
        for x in 3..10 {
            assert_eq!(buf[(x, 0)].symbol(), ".");
        }
    }

    #[test]
    fn test_progress_bar_rounds_half_up() {
        // 25% of 10 cells is 2.5 cells
        let buf = render(25, 10);
        assert_eq!(buf[(2, 0)].symbol(), "#");
        assert_eq!(buf[(3, 0)].symbol(), ".");
    }

    #[test]
    fn test_progress_bar_zero_width() {
        let area = Rect::new(0, 0, 0, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        ProgressBar::new(50).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
