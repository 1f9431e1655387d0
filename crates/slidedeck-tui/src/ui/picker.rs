//! Slide picker strip.
//!
//! One chip per slide, flowed left to right and wrapped onto extra rows.
//! When the rows outgrow the strip it shows the page of rows holding the
//! active chip. Rendering and mouse hit-testing share [`place_chips`] so a
//! click always lands on the chip that was drawn there.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use slidedeck_core::Slide;

use super::truncate_to_width;
use crate::theme::Theme;

/// Longest title shown inside a chip.
const CHIP_TITLE_WIDTH: usize = 18;

/// Where a chip was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipPlacement {
    /// Zero-based slide position.
    pub index: usize,
    pub area: Rect,
}

/// How much a chip shows, widest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipStyle {
    /// Number and truncated title.
    Titled,
    /// Padded number.
    Numbered,
    /// Bare number, no padding.
    Compact,
}

/// Digits used for chip numbers in a deck of `total` slides.
pub fn number_width(total: usize) -> usize {
    total.to_string().len().max(2)
}

/// Label for the chip of slide `index`, numbered with `digits` digits.
pub fn chip_label(index: usize, slide: &Slide, style: ChipStyle, digits: usize) -> String {
    let number = index + 1;
    match style {
        ChipStyle::Titled => format!(
            " {number:0digits$} {} ",
            truncate_to_width(&slide.title, CHIP_TITLE_WIDTH)
        ),
        ChipStyle::Numbered => format!(" {number:0digits$} "),
        ChipStyle::Compact => format!("{number:0digits$}"),
    }
}

/// Offsets of each chip when flowed into `width` columns, as
/// `(index, column, row, chip_width)`.
fn flow(width: u16, labels: &[String]) -> impl Iterator<Item = (usize, u16, u16, u16)> + '_ {
    let mut column: u16 = 0;
    let mut row: u16 = 0;
    labels.iter().enumerate().map(move |(index, label)| {
        let chip_width = u16::try_from(label.width())
            .unwrap_or(u16::MAX)
            .min(width);
        if column > 0 && u32::from(column) + u32::from(chip_width) > u32::from(width) {
            column = 0;
            row = row.saturating_add(1);
        }
        let placed = (index, column, row, chip_width);
        column = column.saturating_add(chip_width).saturating_add(1);
        placed
    })
}

/// First row shown when `total_rows` rows are paged through a strip
/// `height` rows tall. The page always contains `active_row`.
fn first_visible_row(active_row: u16, total_rows: u16, height: u16) -> u16 {
    if total_rows <= height {
        return 0;
    }
    (active_row / height * height).min(total_rows - height)
}

/// Flow chips into `area`, showing the page of rows that holds the chip
/// of slide `active`. Every slide gets a chip on some page.
pub fn place_chips(area: Rect, labels: &[String], active: usize) -> Vec<ChipPlacement> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let flowed: Vec<_> = flow(area.width, labels).collect();
    let total_rows = flowed
        .last()
        .map_or(0, |&(_, _, row, _)| row.saturating_add(1));
    let active_row = flowed
        .get(active)
        .or(flowed.last())
        .map_or(0, |&(_, _, row, _)| row);
    let first_row = first_visible_row(active_row, total_rows, area.height);

    flowed
        .into_iter()
        .filter(|&(_, _, row, _)| row >= first_row && row - first_row < area.height)
        .map(|(index, column, row, width)| ChipPlacement {
            index,
            area: Rect::new(area.x + column, area.y + (row - first_row), width, 1),
        })
        .collect()
}

/// Rows needed to show every chip at `width`, capped at `max_rows`.
pub fn picker_rows(width: u16, labels: &[String], max_rows: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    flow(width, labels)
        .last()
        .map_or(0, |(_, _, row, _)| row.saturating_add(1))
        .min(max_rows)
}

/// Find the chip under (`column`, `row`).
pub fn chip_at(placements: &[ChipPlacement], column: u16, row: u16) -> Option<usize> {
    placements
        .iter()
        .find(|chip| chip.area.contains(Position::new(column, row)))
        .map(|chip| chip.index)
}

/// Picker strip widget. Draws chips already placed by [`place_chips`].
pub struct PickerStrip<'a> {
    theme: &'a Theme,
    labels: &'a [String],
    chips: &'a [ChipPlacement],
    active: usize,
}

impl<'a> PickerStrip<'a> {
    pub fn new(
        theme: &'a Theme,
        labels: &'a [String],
        chips: &'a [ChipPlacement],
        active: usize,
    ) -> Self {
        Self {
            theme,
            labels,
            chips,
            active,
        }
    }
}

impl Widget for PickerStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for chip in self.chips {
            let Some(label) = self.labels.get(chip.index) else {
                continue;
            };
            let chip_area = chip.area.intersection(area);
            let style = if chip.index == self.active {
                self.theme.chip_active
            } else {
                self.theme.chip
            };
            buf.set_style(chip_area, style);
            Line::styled(label.as_str(), style).render(chip_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!(" {:02} ", i + 1)).collect()
    }

    #[test]
    fn test_chip_label() {
        let slide = Slide::new("roadmap", "Roadmap");
        assert_eq!(chip_label(2, &slide, ChipStyle::Numbered, 2), " 03 ");
        assert_eq!(chip_label(2, &slide, ChipStyle::Titled, 2), " 03 Roadmap ");
        assert_eq!(chip_label(2, &slide, ChipStyle::Compact, 2), "03");
        assert_eq!(chip_label(2, &slide, ChipStyle::Compact, 3), "003");
    }

    #[test]
    fn test_number_width() {
        assert_eq!(number_width(6), 2);
        assert_eq!(number_width(99), 2);
        assert_eq!(number_width(100), 3);
    }

    #[test]
    fn test_place_chips_wraps() {
        // Each chip is 4 wide plus a 1 column gap, so 3 fit in 14 columns.
        let placements = place_chips(Rect::new(0, 0, 14, 3), &labels(5), 0);
        assert_eq!(placements.len(), 5);
        assert_eq!(placements[2].area, Rect::new(10, 0, 4, 1));
        assert_eq!(placements[3].area, Rect::new(0, 1, 4, 1));
    }

    #[test]
    fn test_place_chips_pages_to_active() {
        // Two chips per row, five rows of content in a one row strip.
        let area = Rect::new(0, 0, 9, 1);
        let labels = labels(9);

        let indices = |active| {
            place_chips(area, &labels, active)
                .iter()
                .map(|chip| chip.index)
                .collect::<Vec<_>>()
        };
        assert_eq!(indices(0), vec![0, 1]);
        assert_eq!(indices(3), vec![2, 3]);
        assert_eq!(indices(8), vec![8]);

        let last = place_chips(area, &labels, 8);
        assert_eq!(last[0].area, Rect::new(0, 0, 4, 1));
    }

    #[test]
    fn test_place_chips_every_slide_reachable() {
        let area = Rect::new(3, 10, 20, 2);
        let labels = labels(40);
        for active in 0..labels.len() {
            let placements = place_chips(area, &labels, active);
            assert!(placements.iter().any(|chip| chip.index == active));
            assert!(
                placements
                    .iter()
                    .all(|chip| area.intersection(chip.area) == chip.area)
            );
        }
    }

    #[test]
    fn test_first_visible_row_clamps_last_page() {
        assert_eq!(first_visible_row(1, 2, 3), 0);
        assert_eq!(first_visible_row(4, 16, 3), 3);
        assert_eq!(first_visible_row(15, 16, 3), 13);
    }

    #[test]
    fn test_picker_rows() {
        assert_eq!(picker_rows(14, &labels(5), 3), 2);
        assert_eq!(picker_rows(14, &labels(30), 3), 3);
        assert_eq!(picker_rows(80, &labels(0), 3), 0);
    }

    #[test]
    fn test_chip_at() {
        let placements = place_chips(Rect::new(2, 5, 14, 2), &labels(4), 0);
        assert_eq!(chip_at(&placements, 2, 5), Some(0));
        assert_eq!(chip_at(&placements, 8, 5), Some(1));
        assert_eq!(chip_at(&placements, 6, 5), None);
        assert_eq!(chip_at(&placements, 3, 6), Some(3));
        assert_eq!(chip_at(&placements, 40, 5), None);
    }
}
