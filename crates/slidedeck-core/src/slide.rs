//! Slide records.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::style::{Accent, Contrast};

/// Stable identifier of a slide within a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(pub CompactString);

impl SlideId {
    /// Create a new SlideId.
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlideId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A titled column of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One phase card on a timeline slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Short phase label, e.g. "Phase 1".
    pub phase: String,
    /// When the phase happens, e.g. "Q1 2025".
    pub period: String,
    pub details: String,
}

/// A single slide.
///
/// Only `id`, `title` and the slide's position in the deck matter for
/// navigation. Everything else is display payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,

    /// Small uppercase label shown above the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotlight: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<SlideColumn>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelineEvent>,

    /// Short chips rendered below the body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<String>,

    /// Style hint for the slide surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
}

impl Slide {
    /// Create a slide with just an id and title.
    pub fn new(id: impl Into<SlideId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            spotlight: None,
            subtitle: None,
            bullets: Vec::new(),
            columns: Vec::new(),
            timeline: Vec::new(),
            highlights: Vec::new(),
            footer_note: None,
            accent: None,
        }
    }

    /// The cover slide gets a larger title treatment.
    pub fn is_cover(&self) -> bool {
        self.id.as_str() == "cover"
    }

    /// Surface contrast derived from the accent.
    pub fn contrast(&self) -> Contrast {
        Accent::contrast_of(self.accent)
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the bullet list.
    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the accent.
    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }
}

impl From<String> for SlideId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
