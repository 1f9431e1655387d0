//! Bounded slide navigation and progress derivation.
//!
//! The [`Navigator`] owns the single slide position of a presentation. Every
//! mutation goes through [`Navigator::go_to_slide`], which saturates at the
//! deck boundaries instead of failing, so the stored index is always valid
//! for the deck it was created for.

use std::num::NonZeroUsize;

use strum::{Display, EnumIter};

/// Zero-based position of a slide within a deck.
///
/// Only a [`Navigator`] hands these out, so a `SlideIndex` is always in
/// `[0, total - 1]` for the deck that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideIndex(usize);

impl SlideIndex {
    /// The first slide.
    pub const FIRST: Self = Self(0);

    /// Zero-based position.
    pub fn get(self) -> usize {
        self.0
    }

    /// One-based position, as shown to the viewer.
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl From<SlideIndex> for usize {
    fn from(index: SlideIndex) -> Self {
        index.0
    }
}

/// Navigation intent derived from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum NavIntent {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Prev,
    /// Not a navigation key; the caller keeps its default handling.
    Ignore,
}

impl NavIntent {
    /// Whether this intent moves the presentation.
    pub fn is_navigation(self) -> bool {
        !matches!(self, NavIntent::Ignore)
    }
}

/// Map a DOM-style key name to a navigation intent.
///
/// Exactly four keys are recognized: `ArrowRight` and `PageDown` advance,
/// `ArrowLeft` and `PageUp` go back. Everything else is [`NavIntent::Ignore`].
pub fn direction_from_key(key: &str) -> NavIntent {
    match key {
        "ArrowRight" | "PageDown" => NavIntent::Next,
        "ArrowLeft" | "PageUp" => NavIntent::Prev,
        _ => NavIntent::Ignore,
    }
}

/// Percentage of the deck traversed, inclusive of the slide at `index`.
///
/// Computes `round((index + 1) / total * 100)` in integer arithmetic with
/// ties rounded up, so `1/8` yields `13` and `1/3` yields `33`.
pub fn progress_for(index: SlideIndex, total: NonZeroUsize) -> u8 {
    let position = index.0 as u128 + 1;
    let total = total.get() as u128;
    let percent = (position * 200 + total) / (total * 2);
    percent.min(100) as u8
}

/// Owner of the current slide position.
///
/// The deck size is fixed at construction. A deck must hold at least one
/// slide, which the `NonZeroUsize` total enforces at the type level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: SlideIndex,
    total: NonZeroUsize,
}

impl Navigator {
    /// Create a navigator positioned on the first slide.
    pub fn new(total: NonZeroUsize) -> Self {
        Self {
            current: SlideIndex::FIRST,
            total,
        }
    }

    /// Create a navigator positioned at `requested`, clamped into range.
    pub fn starting_at(total: NonZeroUsize, requested: i64) -> Self {
        let mut nav = Self::new(total);
        nav.go_to_slide(requested);
        nav
    }

    /// Currently displayed slide.
    pub fn current(&self) -> SlideIndex {
        self.current
    }

    /// Number of slides in the deck.
    pub fn total(&self) -> NonZeroUsize {
        self.total
    }

    /// Index of the last slide.
    pub fn last_index(&self) -> SlideIndex {
        SlideIndex(self.total.get() - 1)
    }

    /// Clamp a requested position into the deck without moving.
    ///
    /// Negative requests resolve to the first slide, requests at or past the
    /// end resolve to the last slide, anything else is returned unchanged.
    pub fn resolve(&self, requested: i64) -> SlideIndex {
        if requested < 0 {
            return SlideIndex::FIRST;
        }
        match usize::try_from(requested) {
            Ok(index) if index < self.total.get() => SlideIndex(index),
            _ => self.last_index(),
        }
    }

    /// Move to `requested`, clamped into range, and return the new position.
    pub fn go_to_slide(&mut self, requested: i64) -> SlideIndex {
        let target = self.resolve(requested);
        if target != self.current {
            tracing::debug!(
                from = self.current.ordinal(),
                to = target.ordinal(),
                requested,
                "slide changed"
            );
        }
        self.current = target;
        target
    }

    /// Advance one slide, staying put on the last slide.
    pub fn next(&mut self) -> SlideIndex {
        self.go_to_slide(self.offset(1))
    }

    /// Go back one slide, staying put on the first slide.
    pub fn prev(&mut self) -> SlideIndex {
        self.go_to_slide(self.offset(-1))
    }

    /// Jump to the first slide.
    pub fn first(&mut self) -> SlideIndex {
        self.go_to_slide(0)
    }

    /// Jump to the last slide.
    pub fn last(&mut self) -> SlideIndex {
        self.go_to_slide(i64::MAX)
    }

    /// Apply a navigation intent.
    ///
    /// Returns `None` for [`NavIntent::Ignore`], which leaves the position
    /// untouched.
    pub fn apply(&mut self, intent: NavIntent) -> Option<SlideIndex> {
        match intent {
            NavIntent::Next => Some(self.next()),
            NavIntent::Prev => Some(self.prev()),
            NavIntent::Ignore => None,
        }
    }

    /// Resolve a key name and apply the resulting intent.
    pub fn handle_key(&mut self, key: &str) -> Option<SlideIndex> {
        self.apply(direction_from_key(key))
    }

    /// Whether a previous slide exists.
    pub fn can_go_prev(&self) -> bool {
        self.current.0 > 0
    }

    /// Whether a next slide exists.
    pub fn can_go_next(&self) -> bool {
        self.current < self.last_index()
    }

    /// On the first slide.
    pub fn is_first(&self) -> bool {
        !self.can_go_prev()
    }

    /// On the last slide.
    pub fn is_last(&self) -> bool {
        !self.can_go_next()
    }

    /// Progress percentage for the current slide.
    pub fn progress(&self) -> u8 {
        progress_for(self.current, self.total)
    }

    fn offset(&self, delta: i64) -> i64 {
        i64::try_from(self.current.0)
            .unwrap_or(i64::MAX)
            .saturating_add(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(total: usize) -> Navigator {
        Navigator::new(NonZeroUsize::new(total).unwrap())
    }

    #[test]
    fn test_slide_index_has_no_outside_constructor() {
        use std::marker::PhantomData;

        // Resolves to the bounded impl only when `T` has the capability.
        struct Has<T>(PhantomData<T>);

        trait Decodable {
            fn decodable(&self) -> bool {
                true
            }
        }
        impl<T: serde::de::DeserializeOwned> Decodable for Has<T> {}
        trait NotDecodable {
            fn decodable(&self) -> bool {
                false
            }
        }
        impl<T> NotDecodable for &Has<T> {}

        trait Defaulted {
            fn defaulted(&self) -> bool {
                true
            }
        }
        impl<T: Default> Defaulted for Has<T> {}
        trait NotDefaulted {
            fn defaulted(&self) -> bool {
                false
            }
        }
        impl<T> NotDefaulted for &Has<T> {}

        assert!((&Has::<usize>(PhantomData)).decodable());
        assert!((&Has::<usize>(PhantomData)).defaulted());
        assert!(!(&Has::<SlideIndex>(PhantomData)).decodable());
        assert!(!(&Has::<SlideIndex>(PhantomData)).defaulted());
    }

    #[test]
    fn test_go_to_slide_clamps_low() {
        let mut nav = nav(4);
        assert_eq!(nav.go_to_slide(-5).get(), 0);
        assert_eq!(nav.go_to_slide(i64::MIN).get(), 0);
    }

    #[test]
    fn test_go_to_slide_clamps_high() {
        let mut nav = nav(4);
        assert_eq!(nav.go_to_slide(9).get(), 3);
        assert_eq!(nav.go_to_slide(4).get(), 3);
        assert_eq!(nav.go_to_slide(i64::MAX).get(), 3);
    }

    #[test]
    fn test_go_to_slide_identity_in_range() {
        let mut nav = nav(6);
        for k in 0..6 {
            assert_eq!(nav.go_to_slide(k).get(), k as usize);
            assert_eq!(nav.current().get(), k as usize);
        }
    }

    #[test]
    fn test_single_slide_always_zero() {
        let mut nav = nav(1);
        for r in [-3, -1, 0, 1, 2, 100] {
            assert_eq!(nav.go_to_slide(r), SlideIndex::FIRST);
        }
        assert!(nav.is_first());
        assert!(nav.is_last());
        assert_eq!(nav.progress(), 100);
    }

    #[test]
    fn test_resolve_does_not_move() {
        let nav = nav(5);
        assert_eq!(nav.resolve(3).get(), 3);
        assert_eq!(nav.current(), SlideIndex::FIRST);
    }

    #[test]
    fn test_progress_tenths() {
        let nav = nav(10);
        let total = nav.total();
        assert_eq!(progress_for(nav.resolve(0), total), 10);
        assert_eq!(progress_for(nav.resolve(4), total), 50);
        assert_eq!(progress_for(nav.resolve(9), total), 100);
    }

    #[test]
    fn test_progress_thirds() {
        let nav = nav(3);
        let total = nav.total();
        assert_eq!(progress_for(nav.resolve(0), total), 33);
        assert_eq!(progress_for(nav.resolve(1), total), 67);
        assert_eq!(progress_for(nav.resolve(2), total), 100);
    }

    #[test]
    fn test_progress_ties_round_up() {
        let nav = nav(8);
        // 1/8 = 12.5%, 3/8 = 37.5%
        assert_eq!(progress_for(nav.resolve(0), nav.total()), 13);
        assert_eq!(progress_for(nav.resolve(2), nav.total()), 38);
    }

    #[test]
    fn test_direction_from_key() {
        assert_eq!(direction_from_key("ArrowRight"), NavIntent::Next);
        assert_eq!(direction_from_key("PageDown"), NavIntent::Next);
        assert_eq!(direction_from_key("ArrowLeft"), NavIntent::Prev);
        assert_eq!(direction_from_key("PageUp"), NavIntent::Prev);
        assert_eq!(direction_from_key("Enter"), NavIntent::Ignore);
        assert_eq!(direction_from_key("arrowright"), NavIntent::Ignore);
        assert_eq!(direction_from_key(""), NavIntent::Ignore);
    }

    #[test]
    fn test_ignore_does_not_mutate() {
        let mut nav = nav(5);
        nav.go_to_slide(2);
        assert_eq!(nav.apply(NavIntent::Ignore), None);
        assert_eq!(nav.handle_key("Enter"), None);
        assert_eq!(nav.current().get(), 2);
    }

    #[test]
    fn test_next_saturates_at_end() {
        let mut nav = nav(5);
        for _ in 0..4 {
            nav.apply(NavIntent::Next);
        }
        assert_eq!(nav.current().get(), 4);
        assert!(nav.is_last());

        nav.next();
        nav.handle_key("PageDown");
        assert_eq!(nav.current().get(), 4);
    }

    #[test]
    fn test_prev_saturates_at_start() {
        let mut nav = Navigator::starting_at(NonZeroUsize::new(5).unwrap(), 4);
        for _ in 0..4 {
            nav.apply(NavIntent::Prev);
        }
        assert_eq!(nav.current(), SlideIndex::FIRST);

        nav.prev();
        nav.handle_key("ArrowLeft");
        assert_eq!(nav.current(), SlideIndex::FIRST);
    }

    #[test]
    fn test_button_enable_states() {
        let mut nav = nav(3);
        assert!(!nav.can_go_prev());
        assert!(nav.can_go_next());

        nav.go_to_slide(1);
        assert!(nav.can_go_prev());
        assert!(nav.can_go_next());

        nav.last();
        assert!(nav.can_go_prev());
        assert!(!nav.can_go_next());
    }

    #[test]
    fn test_ordinal() {
        let nav = nav(12);
        assert_eq!(nav.resolve(0).ordinal(), 1);
        assert_eq!(nav.last_index().ordinal(), 12);
    }
}
