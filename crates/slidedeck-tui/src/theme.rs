//! Color themes for the TUI.
//!
//! The chrome around the slide (header, controls, picker) follows a dark or
//! light [`Theme`]. The slide surface itself follows the slide's accent via
//! [`SlidePalette`], independent of the chrome theme. Colors come from the
//! Tailwind CSS palette.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use slidedeck_core::{Accent, Contrast};

// Slate
const SLATE_50: Color = Color::Rgb(248, 250, 252);
const SLATE_100: Color = Color::Rgb(241, 245, 249);
const SLATE_200: Color = Color::Rgb(226, 232, 240);
const SLATE_300: Color = Color::Rgb(203, 213, 225);
const SLATE_400: Color = Color::Rgb(148, 163, 184);
const SLATE_500: Color = Color::Rgb(100, 116, 139);
const SLATE_600: Color = Color::Rgb(71, 85, 105);
const SLATE_700: Color = Color::Rgb(51, 65, 85);
const SLATE_800: Color = Color::Rgb(30, 41, 59);
const SLATE_900: Color = Color::Rgb(15, 23, 42);
const SLATE_950: Color = Color::Rgb(2, 6, 23);

// Accents
const SKY_400: Color = Color::Rgb(56, 189, 248);
const SKY_600: Color = Color::Rgb(2, 132, 199);
const SKY_900: Color = Color::Rgb(12, 74, 110);
const CYAN_300: Color = Color::Rgb(103, 232, 249);
const CYAN_700: Color = Color::Rgb(14, 116, 144);
const BLUE_700: Color = Color::Rgb(29, 78, 216);
const INDIGO_950: Color = Color::Rgb(30, 27, 75);
const EMERALD_900: Color = Color::Rgb(6, 78, 59);
const RED_900: Color = Color::Rgb(127, 29, 29);
const AMBER_100: Color = Color::Rgb(254, 243, 199);
const AMBER_500: Color = Color::Rgb(245, 158, 11);
const AMBER_600: Color = Color::Rgb(217, 119, 6);
const GREEN_100: Color = Color::Rgb(220, 252, 231);
const STONE_50: Color = Color::Rgb(250, 250, 249);

/// Theme variant (dark or light).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the presentation chrome.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,

    // Status colors
    pub info: Color,

    // UI elements
    pub border: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,

    // Header
    pub header: Style,
    pub header_counter: Style,
    pub jump_prompt: Style,

    // Progress
    pub progress_label: Style,
    pub progress_bar: Style,
    pub progress_bg: Style,
    pub progress_value: Style,

    // Buttons
    pub button: Style,
    pub button_primary: Style,
    pub button_disabled: Style,

    // Picker
    pub chip: Style,
    pub chip_active: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
            background: SLATE_950,
            foreground: SLATE_100,

            info: SKY_400,

            border: Style::new().fg(SLATE_600),
            title: Style::new().fg(SKY_400).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(SKY_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(SLATE_400),

            header: Style::new().fg(SLATE_400),
            header_counter: Style::new().fg(SLATE_300).add_modifier(Modifier::BOLD),
            jump_prompt: Style::new().fg(AMBER_500).add_modifier(Modifier::BOLD),

            progress_label: Style::new().fg(SLATE_400),
            progress_bar: Style::new().fg(SKY_400),
            progress_bg: Style::new().fg(SLATE_700),
            progress_value: Style::new().fg(SLATE_400),

            button: Style::new().fg(SLATE_200).add_modifier(Modifier::BOLD),
            button_primary: Style::new()
                .bg(CYAN_300)
                .fg(SLATE_950)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::new().fg(SLATE_600),

            chip: Style::new().bg(SLATE_800).fg(SLATE_400),
            chip_active: Style::new()
                .bg(SKY_900)
                .fg(SLATE_100)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
            background: SLATE_50,
            foreground: SLATE_900,

            info: SKY_600,

            border: Style::new().fg(SLATE_400),
            title: Style::new().fg(BLUE_700).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(BLUE_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(SLATE_600),

            header: Style::new().fg(SLATE_500),
            header_counter: Style::new().fg(SLATE_700).add_modifier(Modifier::BOLD),
            jump_prompt: Style::new().fg(AMBER_600).add_modifier(Modifier::BOLD),

            progress_label: Style::new().fg(SLATE_500),
            progress_bar: Style::new().fg(SKY_600),
            progress_bg: Style::new().fg(SLATE_200),
            progress_value: Style::new().fg(SLATE_600),

            button: Style::new().fg(SLATE_700).add_modifier(Modifier::BOLD),
            button_primary: Style::new()
                .bg(CYAN_700)
                .fg(SLATE_50)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::new().fg(SLATE_300),

            chip: Style::new().bg(SLATE_200).fg(SLATE_600),
            chip_active: Style::new()
                .bg(SKY_600)
                .fg(SLATE_50)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Colors for one slide surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePalette {
    pub contrast: Contrast,
    pub surface: Color,
    pub border: Style,
    pub spotlight: Style,
    pub title: Style,
    pub subtitle: Style,
    pub body: Style,
    pub card_border: Style,
    pub card_title: Style,
    pub card_text: Style,
    pub chip: Style,
    pub footer: Style,
}

impl SlidePalette {
    /// Palette for a slide with the given accent.
    pub fn for_accent(accent: Option<Accent>) -> Self {
        let surface = accent_surface(accent);
        let base = Style::new().bg(surface);

        match Accent::contrast_of(accent) {
            Contrast::Dark => Self {
                contrast: Contrast::Dark,
                surface,
                border: base.fg(SLATE_600),
                spotlight: base.fg(SLATE_300).add_modifier(Modifier::BOLD),
                title: base.fg(Color::White).add_modifier(Modifier::BOLD),
                subtitle: base.fg(SLATE_200),
                body: base.fg(SLATE_100),
                card_border: base.fg(SLATE_500),
                card_title: base.fg(SLATE_200).add_modifier(Modifier::BOLD),
                card_text: base.fg(SLATE_100),
                chip: Style::new().bg(SLATE_700).fg(SLATE_200).add_modifier(Modifier::BOLD),
                footer: base.fg(SLATE_400),
            },
            Contrast::Light => Self {
                contrast: Contrast::Light,
                surface,
                border: base.fg(SLATE_300),
                spotlight: base.fg(SLATE_500).add_modifier(Modifier::BOLD),
                title: base.fg(SLATE_900).add_modifier(Modifier::BOLD),
                subtitle: base.fg(SLATE_700),
                body: base.fg(SLATE_700),
                card_border: base.fg(SLATE_300),
                card_title: base.fg(SLATE_600).add_modifier(Modifier::BOLD),
                card_text: base.fg(SLATE_800),
                chip: Style::new().bg(SLATE_200).fg(SLATE_700).add_modifier(Modifier::BOLD),
                footer: base.fg(SLATE_500),
            },
        }
    }
}

/// Surface color keyed by accent.
fn accent_surface(accent: Option<Accent>) -> Color {
    match accent {
        None => SLATE_50,
        Some(Accent::Midnight) => SLATE_900,
        Some(Accent::Ocean) => SKY_900,
        Some(Accent::Indigo) => INDIGO_950,
        Some(Accent::Aurora) => EMERALD_900,
        Some(Accent::Ember) => RED_900,
        Some(Accent::Sunrise) => AMBER_100,
        Some(Accent::Forest) => GREEN_100,
        Some(Accent::Paper) => STONE_50,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_theme_toggle() {
        let theme = Theme::dark();
        assert_eq!(theme.toggle().variant, ThemeVariant::Light);
        assert_eq!(theme.toggle().toggle().variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("light".parse::<ThemeVariant>().unwrap(), ThemeVariant::Light);
        assert_eq!("DARK".parse::<ThemeVariant>().unwrap(), ThemeVariant::Dark);
    }

    #[test]
    fn test_palette_contrast_matches_accent() {
        for accent in Accent::iter() {
            let palette = SlidePalette::for_accent(Some(accent));
            assert_eq!(palette.contrast, accent.contrast());
        }
        assert_eq!(SlidePalette::for_accent(None).contrast, Contrast::Light);
    }

    #[test]
    fn test_dark_surface_uses_light_text() {
        let palette = SlidePalette::for_accent(Some(Accent::Midnight));
        assert_eq!(palette.title.fg, Some(Color::White));
        assert_eq!(palette.title.bg, Some(palette.surface));
    }

    #[test]
    fn test_jump_prompt_stands_out() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.jump_prompt.fg, theme.header_counter.fg);
            assert_ne!(theme.jump_prompt.fg, Some(theme.background));
        }
    }
}
