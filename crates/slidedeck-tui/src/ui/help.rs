//! Help overlay widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use crate::event::{HelpSection, get_help_sections};
use crate::theme::Theme;

const KEY_COLUMN_WIDTH: usize = 12;

/// Help overlay showing key bindings organized by section.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section_lines(&self, section: &HelpSection) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(self.theme.info)
                .add_modifier(Modifier::BOLD),
        ))];

        lines.extend(section.bindings.iter().map(|binding| {
            Line::from(vec![
                Span::styled(
                    format!("{:>width$}", binding.keys, width = KEY_COLUMN_WIDTH),
                    self.theme.help_key,
                ),
                Span::styled(format!(" {}", binding.description), self.theme.help_desc),
            ])
        }));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line<'static>> = get_help_sections()
            .iter()
            .flat_map(|section| {
                let mut lines = self.section_lines(section);
                lines.push(Line::default());
                lines
            })
            .collect();

        // Centered popup sized to its content
        let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let popup_width = 56.min(area.width.saturating_sub(4));
        let popup_height = content_height
            .saturating_add(1)
            .min(area.height.saturating_sub(2));

        let popup_x = (area.width.saturating_sub(popup_width)) / 2 + area.x;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2 + area.y;
        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        Clear.render(popup_area, buf);
        buf.set_style(popup_area, Style::new().bg(self.theme.background));

        let block = Block::default()
            .title(" Help - Press ? or Esc to close ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        for (line, y) in lines.iter().zip(inner.y..inner.bottom()) {
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
        }
    }
}
