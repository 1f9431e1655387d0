//! Core types and navigation for slidedeck.
//!
//! This crate provides the slide data model, deck loading and validation,
//! and the [`Navigator`] that owns the current slide position.

mod deck;
mod error;
mod navigator;
mod slide;
mod style;

pub use deck::{Deck, DeckFormat, DeckMeta, DeckMetaBuilder};
pub use error::DeckError;
pub use navigator::{NavIntent, Navigator, SlideIndex, direction_from_key, progress_for};
pub use slide::{Slide, SlideColumn, SlideId, TimelineEvent};
pub use style::{Accent, Contrast};
