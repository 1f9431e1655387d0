//! Slide style hints.
//!
//! A slide may declare an accent. The accent decides whether the slide
//! surface is dark or light, which in turn drives every text color on it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Accent category declared by a slide.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(into = "String", try_from = "String")]
pub enum Accent {
    /// Deep slate gradient.
    Midnight,
    /// Sky to blue gradient.
    Ocean,
    /// Indigo to violet gradient.
    Indigo,
    /// Emerald to cyan gradient.
    Aurora,
    /// Red to orange gradient.
    Ember,
    /// Amber to rose gradient on a pale surface.
    Sunrise,
    /// Green gradient on a pale surface.
    Forest,
    /// Plain off-white paper.
    Paper,
}

impl Accent {
    /// Surface contrast for this accent.
    pub fn contrast(self) -> Contrast {
        match self {
            Accent::Midnight | Accent::Ocean | Accent::Indigo | Accent::Aurora | Accent::Ember => {
                Contrast::Dark
            }
            Accent::Sunrise | Accent::Forest | Accent::Paper => Contrast::Light,
        }
    }

    /// Contrast for an optional accent. Slides without one sit on the
    /// default light surface.
    pub fn contrast_of(accent: Option<Accent>) -> Contrast {
        accent.map_or(Contrast::Light, Accent::contrast)
    }
}

impl From<Accent> for String {
    fn from(accent: Accent) -> Self {
        accent.to_string()
    }
}

impl TryFrom<String> for Accent {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse()
            .map_err(|_| format!("unknown accent `{value}`"))
    }
}

/// Whether a slide surface is dark or light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Contrast {
    Dark,
    #[default]
    Light,
}

impl Contrast {
    pub fn is_dark(self) -> bool {
        self == Contrast::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_accent_parse_case_insensitive() {
        assert_eq!("midnight".parse::<Accent>().unwrap(), Accent::Midnight);
        assert_eq!("Ocean".parse::<Accent>().unwrap(), Accent::Ocean);
        assert_eq!("PAPER".parse::<Accent>().unwrap(), Accent::Paper);
        assert!("neon".parse::<Accent>().is_err());
    }

    #[test]
    fn test_default_contrast_is_light() {
        assert_eq!(Accent::contrast_of(None), Contrast::Light);
        assert_eq!(Accent::contrast_of(Some(Accent::Midnight)), Contrast::Dark);
    }

    #[test]
    fn test_every_accent_has_contrast() {
        let dark = Accent::iter().filter(|a| a.contrast().is_dark()).count();
        let light = Accent::iter().filter(|a| !a.contrast().is_dark()).count();
        assert_eq!(dark + light, Accent::iter().count());
        assert!(dark > 0 && light > 0);
    }

    #[test]
    fn test_accent_serde_name() {
        let json = serde_json::to_string(&Accent::Aurora).unwrap();
        assert_eq!(json, "\"aurora\"");
        let back: Accent = serde_json::from_str("\"Aurora\"").unwrap();
        assert_eq!(back, Accent::Aurora);
    }
}
