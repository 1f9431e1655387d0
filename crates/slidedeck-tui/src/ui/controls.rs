//! Progress readout and Prev/Next buttons.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

const LABEL_WIDTH: u16 = 10;
const VALUE_WIDTH: u16 = 6;
const BUTTON_WIDTH: u16 = 10;
const MAX_BAR_WIDTH: u16 = 28;
/// Narrowest bar worth keeping the label for.
const MIN_BAR_WIDTH: u16 = 6;

/// Areas of the control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAreas {
    pub label: Rect,
    pub bar: Rect,
    pub value: Rect,
    pub prev: Rect,
    pub next: Rect,
}

impl ControlAreas {
    /// Split the control row. The buttons keep their width; on narrow rows
    /// the label goes first, then the value, and the bar takes what is left.
    pub fn new(area: Rect) -> Self {
        let mut rest = area.width.saturating_sub(BUTTON_WIDTH * 2 + 1);
        let value_width = if rest >= VALUE_WIDTH { VALUE_WIDTH } else { 0 };
        rest -= value_width;
        let label_width = if rest >= LABEL_WIDTH + MIN_BAR_WIDTH {
            LABEL_WIDTH
        } else {
            0
        };
        rest -= label_width;
        let bar_width = (area.width / 4).min(MAX_BAR_WIDTH).min(rest);

        let [label, bar, value, _, prev, _, next] = Layout::horizontal([
            Constraint::Length(label_width),
            Constraint::Length(bar_width),
            Constraint::Length(value_width),
            Constraint::Fill(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(area);

        Self {
            label,
            bar,
            value,
            prev,
            next,
        }
    }

    /// Whether a click at (`column`, `row`) lands on the Prev button.
    pub fn hits_prev(&self, column: u16, row: u16) -> bool {
        self.prev.contains(Position::new(column, row))
    }

    /// Whether a click at (`column`, `row`) lands on the Next button.
    pub fn hits_next(&self, column: u16, row: u16) -> bool {
        self.next.contains(Position::new(column, row))
    }
}

/// A single-row button with a centered label.
pub struct Button<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.style);
        Line::from(self.label).centered().render(area, buf);
    }
}
