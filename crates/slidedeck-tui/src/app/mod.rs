//! Main application state and logic.

mod constants;
mod render;
pub mod state;

use std::time::Duration;

use crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};

use slidedeck_core::{Deck, Navigator, SlideIndex};

use crate::TuiConfig;
use crate::event::{KeyAction, KeyListener};
use crate::theme::Theme;
use crate::ui::chip_at;

use self::constants::TICK_INTERVAL_MS;
use self::render::{RenderContext, Screen, render_app};
use self::state::{AppMode, JumpInput, UserSettings};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// Deck being presented.
    deck: Deck,
    /// Owns the current slide index.
    navigator: Navigator,
    /// Current mode.
    mode: AppMode,
    /// Color theme.
    theme: Theme,
    /// Show the slide picker strip.
    show_picker: bool,
    /// Capture mouse clicks and wheel.
    mouse: bool,
    /// Pending slide number.
    jump: JumpInput,
    /// Size of the last drawn frame, used for mouse hit-testing.
    viewport: Rect,
    /// Flag indicating UI needs redraw.
    needs_redraw: bool,
}

impl App {
    /// Create a new application, merging `config` over the saved user
    /// settings.
    pub fn new(deck: Deck, config: TuiConfig) -> Self {
        Self::with_settings(deck, config, UserSettings::load())
    }

    /// Create a new application from explicit settings.
    pub fn with_settings(deck: Deck, config: TuiConfig, settings: UserSettings) -> Self {
        let navigator = Navigator::starting_at(deck.total(), config.start);
        let variant = config.theme.unwrap_or(settings.theme);

        Self {
            deck,
            navigator,
            mode: AppMode::default(),
            theme: Theme::from_variant(variant),
            show_picker: config.show_picker.unwrap_or(settings.show_picker),
            mouse: config.mouse.unwrap_or(settings.mouse),
            jump: JumpInput::default(),
            viewport: Rect::default(),
            needs_redraw: true,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Index of the displayed slide.
    pub fn current(&self) -> SlideIndex {
        self.navigator.current()
    }

    /// Progress percentage of the displayed slide.
    pub fn progress(&self) -> u8 {
        self.navigator.progress()
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_picker(&self) -> bool {
        self.show_picker
    }

    /// Slide number typed so far, empty when no jump is pending.
    pub fn jump_input(&self) -> &str {
        self.jump.as_str()
    }

    /// Run the application main loop.
    ///
    /// Input is only delivered while this future runs: the listener is
    /// attached on entry and detached when it returns, on every path.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut listener = KeyListener::attach(self.mouse)?;

        tracing::info!(
            slides = self.deck.total().get(),
            start = self.current().ordinal(),
            "presentation started"
        );

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                let completed = terminal.draw(|frame| self.render(frame))?;
                self.viewport = completed.area;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                event = listener.next() => match event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },

                _ = interval.tick() => {
                    // Periodic tick keeps the loop polling
                }
            }
        }

        tracing::info!(last = self.current().ordinal(), "presentation closed");
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) if self.mouse => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
            }
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Handle a key event. Releases and repeats of non-press kinds are
    /// ignored.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.handle_action(KeyAction::from_key_event(key));
    }

    fn handle_action(&mut self, action: KeyAction) {
        if self.mode == AppMode::Help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Cancel | KeyAction::Quit => {
                    self.mode = AppMode::Normal;
                }
                KeyAction::ForceQuit => self.mode = AppMode::Quit,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Navigate(intent) => {
                self.jump.clear();
                self.navigator.apply(intent);
            }
            KeyAction::JumpToFirst => {
                self.jump.clear();
                self.navigator.first();
            }
            KeyAction::JumpToLast => {
                self.jump.clear();
                self.navigator.last();
            }
            KeyAction::JumpDigit(digit) => self.jump.push(digit),
            KeyAction::JumpBackspace => self.jump.pop(),
            KeyAction::ConfirmJump => {
                if let Some(number) = self.jump.take() {
                    self.navigator.go_to_slide(number - 1);
                }
            }
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggle();
                tracing::debug!(theme = %self.theme.variant, "theme toggled");
            }
            KeyAction::TogglePicker => self.show_picker = !self.show_picker,
            KeyAction::Cancel => self.jump.clear(),
            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::None => {}
        }
    }

    /// Handle a mouse event against the last drawn frame.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.mode != AppMode::Normal {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => {
                self.navigator.next();
            }
            MouseEventKind::ScrollUp => {
                self.navigator.prev();
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let screen = self.screen(self.viewport);

        if screen.controls.hits_prev(column, row) {
            if self.navigator.can_go_prev() {
                self.navigator.prev();
            }
        } else if screen.controls.hits_next(column, row) {
            if self.navigator.can_go_next() {
                self.navigator.next();
            }
        } else if let Some(index) = chip_at(&screen.chips, column, row) {
            self.jump.clear();
            self.navigator
                .go_to_slide(i64::try_from(index).unwrap_or(i64::MAX));
        }
    }

    fn screen(&self, area: Rect) -> Screen {
        Screen::compute(
            &self.deck,
            self.show_picker,
            self.navigator.current().get(),
            area,
        )
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = self.screen(area);
        let ctx = RenderContext {
            mode: self.mode,
            theme: &self.theme,
            deck: &self.deck,
            navigator: &self.navigator,
            screen: &screen,
            jump_input: self.jump.as_str(),
        };
        render_app(&ctx, area, buf);
    }
}
