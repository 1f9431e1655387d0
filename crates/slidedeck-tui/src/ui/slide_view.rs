//! Slide panel widget.

use itertools::Itertools;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use slidedeck_core::{Slide, SlideColumn, TimelineEvent};

use super::wrapped_height;
use crate::theme::SlidePalette;

const BULLET: &str = "•  ";

/// Vertical sections of a slide, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Heading,
    Gap,
    Bullets,
    Columns,
    Timeline,
    Fill,
    Highlights,
    Footer,
}

/// Renders one slide: spotlight, title, subtitle and whichever content
/// blocks the slide declares.
pub struct SlideView<'a> {
    slide: &'a Slide,
    spotlight: &'a str,
}

impl<'a> SlideView<'a> {
    /// `spotlight` is the label shown above the title.
    pub fn new(slide: &'a Slide, spotlight: &'a str) -> Self {
        Self { slide, spotlight }
    }

    fn heading_lines(&self, palette: &SlidePalette) -> Vec<Line<'a>> {
        let slide = self.slide;
        let mut lines = vec![Line::styled(self.spotlight.to_uppercase(), palette.spotlight)];

        if slide.is_cover() {
            lines.push(Line::default());
            lines.push(Line::styled(
                slide.title.to_uppercase(),
                palette.title.add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::default());
        } else {
            lines.push(Line::styled(slide.title.as_str(), palette.title));
        }

        if let Some(subtitle) = &slide.subtitle {
            lines.push(Line::styled(subtitle.as_str(), palette.subtitle));
        }
        lines
    }

    fn heading_height(&self, width: u16) -> u16 {
        let slide = self.slide;
        let title_rows = if slide.is_cover() {
            wrapped_height(&slide.title, width) + 2
        } else {
            wrapped_height(&slide.title, width)
        };
        let subtitle_rows = slide
            .subtitle
            .as_deref()
            .map_or(0, |s| wrapped_height(s, width));
        1 + title_rows + subtitle_rows
    }

    fn bullets_height(&self, width: u16) -> u16 {
        let text_width = width.saturating_sub(BULLET.width() as u16);
        self.slide
            .bullets
            .iter()
            .map(|b| wrapped_height(b, text_width))
            .sum()
    }

    fn sections(&self, width: u16) -> Vec<(Section, Constraint)> {
        let slide = self.slide;
        let mut sections = vec![(
            Section::Heading,
            Constraint::Length(self.heading_height(width)),
        )];

        let mut body = Vec::new();
        if !slide.bullets.is_empty() {
            body.push((Section::Bullets, Constraint::Length(self.bullets_height(width))));
        }
        if !slide.columns.is_empty() {
            let card_width = card_width(width, slide.columns.len());
            let rows = slide
                .columns
                .iter()
                .map(|c| column_rows(c, card_width))
                .max()
                .unwrap_or(0);
            body.push((Section::Columns, Constraint::Length(rows + 2)));
        }
        if !slide.timeline.is_empty() {
            let card_width = card_width(width, slide.timeline.len());
            let rows = slide
                .timeline
                .iter()
                .map(|e| timeline_rows(e, card_width))
                .max()
                .unwrap_or(0);
            body.push((Section::Timeline, Constraint::Length(rows + 2)));
        }

        for part in body {
            sections.push((Section::Gap, Constraint::Length(1)));
            sections.push(part);
        }

        sections.push((Section::Fill, Constraint::Fill(1)));
        if !slide.highlights.is_empty() {
            sections.push((Section::Highlights, Constraint::Length(1)));
        }
        if slide.footer_note.is_some() {
            sections.push((Section::Footer, Constraint::Length(1)));
        }
        sections
    }
}

/// Width of one card when `count` cards share `width` with 2 column gaps.
fn card_width(width: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    let gaps = (count - 1).saturating_mul(2);
    // minus borders and padding
    (width.saturating_sub(gaps) / count).saturating_sub(4)
}

fn column_rows(column: &SlideColumn, width: u16) -> u16 {
    1 + column
        .items
        .iter()
        .map(|item| wrapped_height(item, width))
        .sum::<u16>()
}

fn timeline_rows(event: &TimelineEvent, width: u16) -> u16 {
    3 + wrapped_height(&event.details, width)
}

fn card_block(palette: &SlidePalette) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(palette.card_border)
        .padding(Padding::horizontal(1))
}

fn render_cards<T>(
    items: &[T],
    area: Rect,
    buf: &mut Buffer,
    palette: &SlidePalette,
    lines: impl Fn(&T) -> Vec<Line<'_>>,
) {
    let areas = Layout::horizontal(items.iter().map(|_| Constraint::Fill(1)))
        .spacing(2)
        .split(area);

    for (item, card) in items.iter().zip(areas.iter()) {
        Paragraph::new(lines(item))
            .block(card_block(palette))
            .wrap(Wrap { trim: true })
            .render(*card, buf);
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = SlidePalette::for_accent(self.slide.accent);
        buf.set_style(area, Style::new().bg(palette.surface));

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(palette.border)
            .padding(Padding::new(3, 3, 1, 1));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let sections = self.sections(inner.width);
        let areas = Layout::vertical(sections.iter().map(|(_, c)| *c)).split(inner);
        let slide = self.slide;

        for ((section, _), section_area) in sections.iter().zip(areas.iter().copied()) {
            match section {
                Section::Heading => {
                    Paragraph::new(self.heading_lines(&palette))
                        .wrap(Wrap { trim: true })
                        .render(section_area, buf);
                }
                Section::Bullets => {
                    let lines = slide
                        .bullets
                        .iter()
                        .map(|b| {
                            Line::from(vec![
                                Span::styled(BULLET, palette.body.add_modifier(Modifier::BOLD)),
                                Span::styled(b.as_str(), palette.body),
                            ])
                        })
                        .collect_vec();
                    Paragraph::new(lines)
                        .wrap(Wrap { trim: false })
                        .render(section_area, buf);
                }
                Section::Columns => {
                    render_cards(&slide.columns, section_area, buf, &palette, |column| {
                        std::iter::once(Line::styled(
                            column.title.to_uppercase(),
                            palette.card_title,
                        ))
                        .chain(
                            column
                                .items
                                .iter()
                                .map(|item| Line::styled(item.as_str(), palette.card_text)),
                        )
                        .collect()
                    });
                }
                Section::Timeline => {
                    render_cards(&slide.timeline, section_area, buf, &palette, |event| {
                        vec![
                            Line::styled(event.phase.to_uppercase(), palette.spotlight),
                            Line::styled(event.period.as_str(), palette.card_title),
                            Line::default(),
                            Line::styled(event.details.as_str(), palette.card_text),
                        ]
                    });
                }
                Section::Highlights => {
                    let spans = slide
                        .highlights
                        .iter()
                        .map(|h| Span::styled(format!(" {} ", h.to_uppercase()), palette.chip));
                    let spans = Itertools::intersperse(spans, Span::raw("  ")).collect_vec();
                    Line::from(spans).render(section_area, buf);
                }
                Section::Footer => {
                    if let Some(note) = &slide.footer_note {
                        Line::styled(note.to_uppercase(), palette.footer).render(section_area, buf);
                    }
                }
                Section::Gap | Section::Fill => {}
            }
        }
    }
}
