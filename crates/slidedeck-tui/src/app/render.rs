//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use slidedeck_core::{Deck, Navigator};

use crate::theme::Theme;
use crate::ui::{
    Button, ChipPlacement, ChipStyle, ControlAreas, DeckLayout, HelpOverlay, PickerStrip,
    ProgressBar, SlideView, chip_label, format_counter, number_width, picker_rows, place_chips,
};

use super::constants::{MAX_PICKER_ROWS, PICKER_TITLE_MIN_WIDTH};
use super::state::AppMode;

/// Geometry of one frame. Rendering and mouse hit-testing both use it, so
/// clicks resolve against exactly what was drawn.
#[derive(Debug, Clone)]
pub struct Screen {
    pub layout: DeckLayout,
    pub controls: ControlAreas,
    pub chip_labels: Vec<String>,
    pub chips: Vec<ChipPlacement>,
}

impl Screen {
    pub fn compute(deck: &Deck, show_picker: bool, active: usize, area: Rect) -> Self {
        let width = area.width.saturating_sub(2);
        let chip_labels = if show_picker {
            picker_labels(deck, width)
        } else {
            Vec::new()
        };

        let layout = DeckLayout::new(area, picker_rows(width, &chip_labels, MAX_PICKER_ROWS));
        let chips = layout
            .picker
            .map(|picker| place_chips(picker, &chip_labels, active))
            .unwrap_or_default();

        Self {
            controls: ControlAreas::new(layout.controls),
            layout,
            chip_labels,
            chips,
        }
    }
}

/// Chip labels for the picker: the widest style whose chips fit in
/// [`MAX_PICKER_ROWS`], or bare numbers paged through the strip.
fn picker_labels(deck: &Deck, width: u16) -> Vec<String> {
    let digits = number_width(deck.slides().len());
    let labels = |style| {
        deck.slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| chip_label(index, slide, style, digits))
            .collect::<Vec<_>>()
    };

    let styles: &[ChipStyle] = if width >= PICKER_TITLE_MIN_WIDTH {
        &[ChipStyle::Titled, ChipStyle::Numbered]
    } else {
        &[ChipStyle::Numbered]
    };
    styles
        .iter()
        .map(|&style| labels(style))
        .find(|candidate| picker_rows(width, candidate, u16::MAX) <= MAX_PICKER_ROWS)
        .unwrap_or_else(|| labels(ChipStyle::Compact))
}

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
    pub deck: &'a Deck,
    pub navigator: &'a Navigator,
    pub screen: &'a Screen,
    pub jump_input: &'a str,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    // Fill entire area with theme background color
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let layout = &ctx.screen.layout;
    render_header(ctx, layout.header, buf);

    let slide = ctx.deck.slide(ctx.navigator.current());
    SlideView::new(slide, ctx.deck.spotlight_for(slide)).render(layout.slide, buf);

    render_controls(ctx, buf);

    if let Some(picker) = layout.picker {
        PickerStrip::new(
            ctx.theme,
            &ctx.screen.chip_labels,
            &ctx.screen.chips,
            ctx.navigator.current().get(),
        )
        .render(picker, buf);
    }

    if ctx.mode == AppMode::Help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let theme = ctx.theme;
    Line::styled(ctx.deck.meta().label.as_str(), theme.header).render(area, buf);

    let counter = format_counter(
        ctx.navigator.current().ordinal(),
        ctx.navigator.total().get(),
    );
    let mut spans = Vec::with_capacity(2);
    if !ctx.jump_input.is_empty() {
        spans.push(Span::styled(
            format!("Go to {}_  ", ctx.jump_input),
            theme.jump_prompt,
        ));
    }
    spans.push(Span::styled(counter, theme.header_counter));
    Line::from(spans).right_aligned().render(area, buf);
}

fn render_controls(ctx: &RenderContext, buf: &mut Buffer) {
    let theme = ctx.theme;
    let areas = &ctx.screen.controls;
    let progress = ctx.navigator.progress();

    Line::styled("PROGRESS", theme.progress_label).render(areas.label, buf);
    ProgressBar::new(progress)
        .filled_style(theme.progress_bar)
        .empty_style(theme.progress_bg)
        .chars('█', '░')
        .render(areas.bar, buf);
    Line::styled(format!("{progress:>4}%"), theme.progress_value).render(areas.value, buf);

    let prev_style = if ctx.navigator.can_go_prev() {
        theme.button
    } else {
        theme.button_disabled
    };
    let next_style = if ctx.navigator.can_go_next() {
        theme.button_primary
    } else {
        theme.button_disabled
    };
    Button::new("◀ Prev").style(prev_style).render(areas.prev, buf);
    Button::new("Next ▶").style(next_style).render(areas.next, buf);
}

#[cfg(test)]
mod tests {
    use slidedeck_core::{DeckMeta, Slide};

    use super::*;

    fn numbered_deck(total: usize) -> Deck {
        let slides = (0..total)
            .map(|i| Slide::new(format!("s{i}"), format!("Slide {i}")))
            .collect();
        Deck::new(DeckMeta::default(), slides).unwrap()
    }

    #[test]
    fn test_screen_hides_picker() {
        let deck = Deck::sample().unwrap();
        let area = Rect::new(0, 0, 80, 24);

        let screen = Screen::compute(&deck, false, 0, area);
        assert!(screen.layout.picker.is_none());
        assert!(screen.chips.is_empty());

        let screen = Screen::compute(&deck, true, 0, area);
        assert_eq!(screen.chips.len(), deck.slides().len());
    }

    #[test]
    fn test_picker_titles_follow_width() {
        let deck = Deck::sample().unwrap();
        assert_eq!(picker_labels(&deck, 60)[0], " 01 ");
        assert!(picker_labels(&deck, 160)[0].starts_with(" 01 "));
        assert!(picker_labels(&deck, 160)[0].len() > " 01 ".len());
    }

    #[test]
    fn test_long_deck_places_every_chip() {
        let deck = numbered_deck(60);
        let area = Rect::new(0, 0, 80, 24);

        let screen = Screen::compute(&deck, true, 0, area);
        assert_eq!(screen.chips.len(), deck.total().get());
        assert!(screen.chips.iter().any(|chip| chip.index == 59));
        assert_eq!(screen.chip_labels[59], "60");
        assert!(screen.layout.slide.height >= 6);
    }

    #[test]
    fn test_oversized_deck_pages_picker() {
        let deck = numbered_deck(300);
        let area = Rect::new(0, 0, 80, 24);

        for active in [0, 150, 299] {
            let screen = Screen::compute(&deck, true, active, area);
            let picker = screen.layout.picker.unwrap();
            assert_eq!(picker.height, MAX_PICKER_ROWS);
            assert!(screen.chips.iter().any(|chip| chip.index == active));
            assert!(
                screen
                    .chips
                    .iter()
                    .all(|chip| picker.intersection(chip.area) == chip.area)
            );
        }
    }
}
