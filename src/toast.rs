// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record and the `Variant` enum that
//! selects its presentation style.

use crate::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Lifetime applied when a toast carries no explicit duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Unique identifier for a toast.
///
/// Identifiers come from a process-wide monotonic counter, so two toasts
/// created within the same instant never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral message with no particular semantic (gray accent).
    #[default]
    Default,
    /// Operation completed successfully (green accent).
    Success,
    /// Something failed or was deleted (red accent).
    Destructive,
    /// Informational message (blue accent).
    Info,
}

impl Variant {
    /// Returns the accent color for this variant.
    #[must_use]
    pub fn accent_color(&self) -> Color {
        match self {
            Variant::Default => palette::GRAY_400,
            Variant::Success => palette::SUCCESS_500,
            Variant::Destructive => palette::DESTRUCTIVE_500,
            Variant::Info => palette::INFO_500,
        }
    }
}

/// A transient message to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast.
    id: ToastId,
    /// The display text.
    text: String,
    /// Presentation style.
    variant: Variant,
    /// Explicit lifetime. `None` falls back to the provider's default
    /// at display time.
    duration: Option<Duration>,
    /// Whether the card renders a decay indicator.
    show_progress: bool,
    /// When this toast was created.
    created_at: Instant,
}

impl Toast {
    /// Creates a toast with the default variant, default lifetime and a
    /// visible decay indicator.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            text: text.into(),
            variant: Variant::default(),
            duration: None,
            show_progress: true,
            created_at: Instant::now(),
        }
    }

    /// Creates a success toast.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text).with_variant(Variant::Success)
    }

    /// Creates a destructive toast.
    pub fn destructive(text: impl Into<String>) -> Self {
        Self::new(text).with_variant(Variant::Destructive)
    }

    /// Creates an info toast.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text).with_variant(Variant::Info)
    }

    /// Sets the presentation variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets an explicit lifetime, overriding the provider default.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets whether the card renders a decay indicator.
    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the presentation variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the explicit lifetime, if one was set.
    #[must_use]
    pub fn explicit_duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns whether the card renders a decay indicator.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.show_progress
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns how long this toast has been alive.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the fraction of the given lifetime that remains, from 1.0
    /// (just shown) down to 0.0 (expired). Drives the decay indicator.
    #[must_use]
    pub fn remaining_fraction(&self, lifetime: Duration) -> f32 {
        if lifetime.is_zero() {
            return 0.0;
        }
        let elapsed = self.age().as_secs_f32();
        (1.0 - elapsed / lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::new("one");
        let b = Toast::new("one");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_toast_uses_documented_defaults() {
        let toast = Toast::new("hello");
        assert_eq!(toast.text(), "hello");
        assert_eq!(toast.variant(), Variant::Default);
        assert_eq!(toast.explicit_duration(), None);
        assert!(toast.has_progress());
    }

    #[test]
    fn variant_constructors_set_correct_variant() {
        assert_eq!(Toast::success("").variant(), Variant::Success);
        assert_eq!(Toast::destructive("").variant(), Variant::Destructive);
        assert_eq!(Toast::info("").variant(), Variant::Info);
    }

    #[test]
    fn builder_overrides_duration_and_progress() {
        let toast = Toast::new("slow")
            .duration(Duration::from_secs(5))
            .show_progress(false);
        assert_eq!(toast.explicit_duration(), Some(Duration::from_secs(5)));
        assert!(!toast.has_progress());
    }

    #[test]
    fn accent_colors_are_distinct() {
        let colors = [
            Variant::Default.accent_color(),
            Variant::Success.accent_color(),
            Variant::Destructive.accent_color(),
            Variant::Info.accent_color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn remaining_fraction_starts_near_full() {
        let toast = Toast::new("fresh");
        let fraction = toast.remaining_fraction(DEFAULT_DURATION);
        assert!(fraction > 0.9);
        assert!(fraction <= 1.0);
    }

    #[test]
    fn remaining_fraction_of_zero_lifetime_is_zero() {
        let toast = Toast::new("instant");
        assert_eq!(toast.remaining_fraction(Duration::ZERO), 0.0);
    }
}
