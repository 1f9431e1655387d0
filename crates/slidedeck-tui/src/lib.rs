//! Terminal presentation view for slidedeck.
//!
//! Shows one slide at a time with a progress bar, Prev/Next buttons and a
//! slide picker strip, built with ratatui.
//!
//! # Usage
//!
//! ```rust,no_run
//! use slidedeck_core::Deck;
//! use slidedeck_tui::TuiConfig;
//!
//! let deck = Deck::sample().unwrap();
//! slidedeck_tui::run(deck, TuiConfig::default()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `→`/`PageDown` - Next slide
//! - `←`/`PageUp` - Previous slide
//! - `g`/`G` - First/last slide
//! - digits then `Enter` - Go to slide number
//! - `p` - Toggle picker
//! - `t` - Toggle theme
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod theme;
mod ui;

pub use app::state::{AppMode, UserSettings};
pub use app::{App, AppResult};
pub use event::{KeyAction, key_name};
pub use theme::{Theme, ThemeVariant};

/// Launch options for the presentation. Unset options fall back to the
/// user settings.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Zero-based slide to open on. Out of range values are clamped.
    pub start: i64,
    pub theme: Option<ThemeVariant>,
    pub show_picker: Option<bool>,
    pub mouse: Option<bool>,
}

impl TuiConfig {
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_picker(mut self, show: bool) -> Self {
        self.show_picker = Some(show);
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = Some(mouse);
        self
    }
}

/// Run the presentation until the viewer quits.
pub fn run(deck: slidedeck_core::Deck, config: TuiConfig) -> AppResult<()> {
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new(deck, config).run(terminal));
    ratatui::restore();

    result
}
