//! Deck loading and validation.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DeckError;
use crate::navigator::{Navigator, SlideIndex};
use crate::slide::Slide;

const SAMPLE_DECK: &str = include_str!("../decks/sample.toml");

/// Presentation-wide settings declared at the top of a deck file.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct DeckMeta {
    /// Deck title, printed as the heading of `outline`.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Header text shown on every slide.
    #[builder(default = "default_label()")]
    #[serde(default = "default_label")]
    pub label: String,

    /// Spotlight used by slides that do not set their own.
    #[builder(default = "default_spotlight()")]
    #[serde(default = "default_spotlight")]
    pub spotlight: String,
}

fn default_label() -> String {
    "Presentation".to_string()
}

fn default_spotlight() -> String {
    "Overview".to_string()
}

impl DeckMeta {
    /// Create a new deck meta builder.
    pub fn builder() -> DeckMetaBuilder {
        DeckMetaBuilder::default()
    }

    /// Outline heading: the title, or the header label when untitled.
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }
}

impl Default for DeckMeta {
    fn default() -> Self {
        Self {
            title: None,
            label: default_label(),
            spotlight: default_spotlight(),
        }
    }
}

/// On-disk encoding of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Toml,
    Json,
}

impl DeckFormat {
    /// Pick a format from the file extension. Anything that is not `.json`
    /// is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DeckFormat::Json,
            _ => DeckFormat::Toml,
        }
    }
}

#[derive(Deserialize)]
struct RawDeck {
    #[serde(default)]
    meta: DeckMeta,
    #[serde(default)]
    slides: Vec<Slide>,
}

#[derive(Serialize)]
struct DeckRef<'a> {
    meta: &'a DeckMeta,
    slides: &'a [Slide],
}

/// An ordered, validated, immutable sequence of slides.
///
/// A `Deck` always holds at least one slide with a unique, non-blank id and
/// a non-blank title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    meta: DeckMeta,
    slides: Vec<Slide>,
    total: NonZeroUsize,
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDeck::deserialize(deserializer)?;
        Deck::new(raw.meta, raw.slides).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Deck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DeckRef {
            meta: &self.meta,
            slides: &self.slides,
        }
        .serialize(serializer)
    }
}

impl Deck {
    /// Build a deck, validating the slide list.
    pub fn new(meta: DeckMeta, slides: Vec<Slide>) -> Result<Self, DeckError> {
        let total = NonZeroUsize::new(slides.len()).ok_or(DeckError::Empty)?;

        let mut seen = HashSet::with_capacity(slides.len());
        for (position, slide) in slides.iter().enumerate() {
            if slide.id.as_str().trim().is_empty() {
                return Err(DeckError::BlankId {
                    position: position + 1,
                });
            }
            if slide.title.trim().is_empty() {
                return Err(DeckError::BlankTitle {
                    id: slide.id.clone(),
                });
            }
            if !seen.insert(&slide.id) {
                return Err(DeckError::DuplicateId {
                    id: slide.id.clone(),
                });
            }
        }

        Ok(Self {
            meta,
            slides,
            total,
        })
    }

    /// Load a deck from a TOML or JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DeckError::io(path, e))?;
        let deck = Self::parse(&content, DeckFormat::from_path(path), path)?;

        tracing::info!(
            path = %path.display(),
            slides = deck.total.get(),
            "loaded deck"
        );
        Ok(deck)
    }

    /// Parse deck text in the given format. `origin` is only used for error
    /// messages.
    pub fn parse(content: &str, format: DeckFormat, origin: &Path) -> Result<Self, DeckError> {
        let raw: RawDeck = match format {
            DeckFormat::Toml => toml::from_str(content).map_err(|e| DeckError::parse(origin, e))?,
            DeckFormat::Json => {
                serde_json::from_str(content).map_err(|e| DeckError::parse(origin, e))?
            }
        };
        Self::new(raw.meta, raw.slides)
    }

    /// The deck bundled with the binary.
    pub fn sample() -> Result<Self, DeckError> {
        Self::parse(SAMPLE_DECK, DeckFormat::Toml, Path::new("<sample>"))
    }

    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides, never zero.
    pub fn total(&self) -> NonZeroUsize {
        self.total
    }

    /// A navigator for this deck positioned on the first slide.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.total)
    }

    /// Slide at `index`. Indices past the end resolve to the last slide.
    pub fn slide(&self, index: SlideIndex) -> &Slide {
        let position = index.get().min(self.total.get() - 1);
        &self.slides[position]
    }

    /// Zero-based position of the slide with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id.as_str() == id)
    }

    /// Spotlight text for a slide, falling back to the deck default.
    pub fn spotlight_for<'a>(&'a self, slide: &'a Slide) -> &'a str {
        slide.spotlight.as_deref().unwrap_or(&self.meta.spotlight)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
