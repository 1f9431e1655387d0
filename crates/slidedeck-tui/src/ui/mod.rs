//! UI components and widgets.

mod controls;
mod help;
mod picker;
mod progress_bar;
mod slide_view;

pub use controls::{Button, ControlAreas};
pub use help::HelpOverlay;
pub use picker::{
    ChipPlacement, ChipStyle, PickerStrip, chip_at, chip_label, number_width, picker_rows,
    place_chips,
};
pub use progress_bar::ProgressBar;
pub use slide_view::SlideView;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Layout areas for the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckLayout {
    pub header: Rect,
    pub slide: Rect,
    pub controls: Rect,
    pub picker: Option<Rect>,
}

impl DeckLayout {
    /// Compute layout from terminal area. `picker_height` of zero hides the
    /// picker strip.
    pub fn new(area: Rect, picker_height: u16) -> Self {
        let area = area.inner(ratatui::layout::Margin::new(1, 0));

        let [header, slide, controls, _, picker] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(u16::from(picker_height > 0)),
            Constraint::Length(picker_height),
        ])
        .areas(area);

        Self {
            header,
            slide,
            controls,
            picker: (picker_height > 0 && picker.height > 0).then_some(picker),
        }
    }
}

/// `Slide 03 / 12` style counter, zero-padded to two digits.
pub fn format_counter(ordinal: usize, total: usize) -> String {
    format!("Slide {ordinal:02} / {total:02}")
}

/// Truncate a string to a display width, appending `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Number of rows `text` takes when wrapped at `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    text.lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum::<usize>()
        .try_into()
        .unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_counter() {
        assert_eq!(format_counter(1, 6), "Slide 01 / 06");
        assert_eq!(format_counter(12, 120), "Slide 12 / 120");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Roadmap", 10), "Roadmap");
        assert_eq!(truncate_to_width("Current state versus target", 10), "Current s…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 0);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("exactly ten", 10), 2);
        assert_eq!(wrapped_height("a\nb", 10), 2);
    }

    #[test]
    fn test_layout_hides_picker() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = DeckLayout::new(area, 0);
        assert!(layout.picker.is_none());
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.controls.y, 23);

        let layout = DeckLayout::new(area, 2);
        let picker = layout.picker.unwrap();
        assert_eq!(picker.height, 2);
        assert_eq!(picker.bottom(), 24);
        assert_eq!(layout.controls.y, 20);
    }
}
