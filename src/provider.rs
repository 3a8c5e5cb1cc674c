// SPDX-License-Identifier: MPL-2.0
//! Toast store and dispatcher.
//!
//! The `Provider` owns the ordered active set and mediates every mutation
//! to it: appends from `show`, removals from `dismiss`, and expiry on
//! `tick`. Rendering and update handling follow the Elm-style
//! "state down, messages up" pattern, so the provider slots into a host
//! application as one more component.

use crate::handle::{Command, Handle};
use crate::history::History;
use crate::toast::{Toast, ToastId, DEFAULT_DURATION};
use crate::widget;
use crate::Config;
use iced::{time, Element, Subscription};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// How often the tick subscription fires while toasts are visible.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Screen edge the toast stack is anchored to.
///
/// Fixed for the lifetime of a provider; individual toasts cannot opt
/// out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Top,
    Bottom,
}

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Remove a specific toast by ID (dismiss button or expiry callback).
    Dismiss(ToastId),
    /// Periodic tick driving command intake and auto-dismiss.
    Tick,
}

/// Owns the active set of toasts and renders them as an anchored overlay.
#[derive(Debug)]
pub struct Provider {
    /// Active toasts in insertion order (insertion order = display order).
    active: Vec<Toast>,
    /// Where the overlay stack is anchored.
    edge: Edge,
    /// Lifetime applied to toasts without an explicit duration.
    default_duration: Duration,
    /// Provider-wide switch for decay indicators.
    progress_enabled: bool,
    /// Optional activity log.
    history: Option<History>,
    /// Command intake from handles.
    receiver: mpsc::Receiver<Command>,
    /// Kept so new handles can be minted at any time.
    sender: mpsc::Sender<Command>,
    /// Commands queued by handles but not yet drained.
    pending: Arc<AtomicUsize>,
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider {
    /// Creates an empty provider anchored at the top edge.
    #[must_use]
    pub fn new() -> Self {
        Self::with_edge(Edge::default())
    }

    /// Creates an empty provider anchored at the given edge.
    #[must_use]
    pub fn with_edge(edge: Edge) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            active: Vec::new(),
            edge,
            default_duration: DEFAULT_DURATION,
            progress_enabled: true,
            history: None,
            receiver,
            sender,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a provider from persisted preferences.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut provider = Self::with_edge(config.edge.unwrap_or_default());
        if let Some(ms) = config.duration_ms {
            provider.default_duration = Duration::from_millis(ms);
        }
        if let Some(show_progress) = config.show_progress {
            provider.progress_enabled = show_progress;
        }
        provider
    }

    /// Attaches an activity log. Subsequent shows, dismissals and
    /// expirations are recorded into it.
    pub fn set_history(&mut self, history: History) {
        self.history = Some(history);
    }

    /// Returns the attached activity log, if any.
    #[must_use]
    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    /// Mints a cloneable handle feeding this provider.
    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle::new(self.sender.clone(), Arc::clone(&self.pending))
    }

    /// Appends a toast to the end of the active set and returns its ID.
    ///
    /// Total over its input: never blocks, never fails.
    pub fn show(&mut self, toast: Toast) -> ToastId {
        let id = toast.id();
        if let Some(history) = &mut self.history {
            history.record_shown(&toast);
        }
        self.active.push(toast);
        id
    }

    /// Removes the toast with the given ID from the active set.
    ///
    /// Returns `true` if a toast was removed. Unknown IDs leave the set
    /// unchanged; calling this twice with the same ID is harmless.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.active.iter().position(|t| t.id() == id) else {
            return false;
        };
        self.active.remove(pos);
        if let Some(history) = &mut self.history {
            history.record_dismissed(id);
        }
        true
    }

    /// Drains queued handle commands and removes expired toasts.
    ///
    /// Should run periodically while toasts are visible; see
    /// [`Provider::subscription`].
    pub fn tick(&mut self) {
        self.drain_commands();

        let default_duration = self.default_duration;
        let history = &mut self.history;
        self.active.retain(|toast| {
            let lifetime = toast.explicit_duration().unwrap_or(default_duration);
            if toast.age() < lifetime {
                return true;
            }
            if let Some(history) = history {
                history.record_expired(toast.id());
            }
            false
        });
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Periodic tick while any toast is visible or handle commands are
    /// waiting to be drained, nothing otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.needs_ticks() {
            time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Whether the tick subscription must stay alive: toasts are visible
    /// or handle commands are still queued.
    fn needs_ticks(&self) -> bool {
        !self.active.is_empty() || self.pending.load(Ordering::Acquire) > 0
    }

    /// Renders one toast card per active record, in insertion order,
    /// anchored at this provider's edge.
    pub fn view(&self) -> Element<'_, Message> {
        widget::overlay(self)
    }

    /// Resolved lifetime for a toast: its explicit duration, or this
    /// provider's default.
    #[must_use]
    pub fn lifetime_of(&self, toast: &Toast) -> Duration {
        toast.explicit_duration().unwrap_or(self.default_duration)
    }

    /// Whether the given toast should render its decay indicator.
    #[must_use]
    pub fn progress_visible(&self, toast: &Toast) -> bool {
        self.progress_enabled && toast.has_progress()
    }

    /// Returns the anchor edge.
    #[must_use]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Returns the active toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether the active set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.receiver.try_recv() {
            self.pending.fetch_sub(1, Ordering::Release);
            match command {
                Command::Show(toast) => {
                    self.show(toast);
                }
                Command::Dismiss(id) => {
                    self.dismiss(id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_provider_is_empty_and_top_anchored() {
        let provider = Provider::new();
        assert!(provider.is_empty());
        assert_eq!(provider.edge(), Edge::Top);
    }

    #[test]
    fn show_appends_in_insertion_order() {
        let mut provider = Provider::new();
        provider.show(Toast::new("first"));
        provider.show(Toast::new("second"));
        provider.show(Toast::new("third"));

        let texts: Vec<_> = provider.iter().map(Toast::text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut provider = Provider::new();
        provider.show(Toast::new("keep"));
        let id = provider.show(Toast::new("drop"));
        provider.show(Toast::new("keep too"));

        assert!(provider.dismiss(id));
        let texts: Vec<_> = provider.iter().map(Toast::text).collect();
        assert_eq!(texts, vec!["keep", "keep too"]);
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut provider = Provider::new();
        provider.show(Toast::new("survivor"));
        let unknown = ToastId::new();

        assert!(!provider.dismiss(unknown));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut provider = Provider::new();
        let id = provider.show(Toast::new("once"));

        assert!(provider.dismiss(id));
        assert!(!provider.dismiss(id));
        assert!(provider.is_empty());
    }

    #[test]
    fn tick_drains_handle_commands() {
        let mut provider = Provider::new();
        let handle = provider.handle();

        let id = handle.show(Toast::info("queued")).expect("provider alive");
        assert!(provider.is_empty());

        provider.tick();
        assert_eq!(provider.len(), 1);

        handle.dismiss(id).expect("provider alive");
        provider.tick();
        assert!(provider.is_empty());
    }

    #[test]
    fn tick_expires_zero_duration_toasts() {
        let mut provider = Provider::new();
        provider.show(Toast::new("gone").duration(Duration::ZERO));
        provider.show(Toast::new("stays"));

        provider.tick();
        let texts: Vec<_> = provider.iter().map(Toast::text).collect();
        assert_eq!(texts, vec!["stays"]);
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let mut provider = Provider::new();
        let id = provider.show(Toast::new("target"));

        provider.handle_message(&Message::Dismiss(id));
        assert!(provider.is_empty());

        provider.show(Toast::new("expired").duration(Duration::ZERO));
        provider.handle_message(&Message::Tick);
        assert!(provider.is_empty());
    }

    #[test]
    fn lifetime_falls_back_to_provider_default() {
        let provider = Provider::new();
        let plain = Toast::new("plain");
        let custom = Toast::new("custom").duration(Duration::from_secs(5));

        assert_eq!(provider.lifetime_of(&plain), DEFAULT_DURATION);
        assert_eq!(provider.lifetime_of(&custom), Duration::from_secs(5));
    }

    #[test]
    fn from_config_applies_edge_duration_and_progress() {
        let config = Config {
            edge: Some(Edge::Bottom),
            duration_ms: Some(1500),
            show_progress: Some(false),
        };
        let provider = Provider::from_config(&config);

        assert_eq!(provider.edge(), Edge::Bottom);
        assert_eq!(
            provider.lifetime_of(&Toast::new("x")),
            Duration::from_millis(1500)
        );
        assert!(!provider.progress_visible(&Toast::new("x")));
    }

    #[test]
    fn progress_visibility_combines_provider_and_toast_flags() {
        let provider = Provider::new();
        assert!(provider.progress_visible(&Toast::new("on")));
        assert!(!provider.progress_visible(&Toast::new("off").show_progress(false)));
    }

    #[test]
    fn history_records_full_lifecycle() {
        use crate::history::EventKind;

        let mut provider = Provider::new();
        provider.set_history(History::new());

        let id = provider.show(Toast::success("saved"));
        provider.dismiss(id);
        provider.show(Toast::new("brief").duration(Duration::ZERO));
        provider.tick();

        let history = provider.history().expect("history attached");
        let kinds: Vec<_> = history.iter().map(|e| e.kind().clone()).collect();
        assert_eq!(kinds.len(), 4);
        assert!(matches!(kinds[0], EventKind::Shown { .. }));
        assert!(matches!(kinds[1], EventKind::Dismissed { id: d } if d == id));
        assert!(matches!(kinds[2], EventKind::Shown { .. }));
        assert!(matches!(kinds[3], EventKind::Expired { .. }));
    }

    #[test]
    fn ticks_needed_only_while_toasts_or_commands_outstanding() {
        let mut provider = Provider::new();
        assert!(!provider.needs_ticks());

        let id = provider.show(Toast::new("visible"));
        assert!(provider.needs_ticks());

        provider.dismiss(id);
        assert!(!provider.needs_ticks());

        let handle = provider.handle();
        handle
            .show(Toast::new("queued").duration(Duration::ZERO))
            .expect("provider alive");
        assert!(provider.needs_ticks());

        provider.tick();
        assert!(!provider.needs_ticks());
    }

    #[test]
    fn single_tick_expires_all_elapsed_toasts() {
        use crate::history::EventKind;

        let mut provider = Provider::new();
        provider.set_history(History::new());

        let a = provider.show(Toast::new("a").duration(Duration::ZERO));
        let b = provider.show(Toast::new("b").duration(Duration::ZERO));
        provider.show(Toast::new("c"));

        provider.tick();
        assert_eq!(provider.len(), 1);

        let history = provider.history().expect("history attached");
        let expired: Vec<_> = history
            .iter()
            .filter_map(|e| match e.kind() {
                EventKind::Expired { id } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(expired, vec![a, b]);
    }

    #[test]
    fn drained_commands_never_underflow_pending() {
        let mut provider = Provider::new();
        let handle = provider.handle();

        let worker = std::thread::spawn(move || {
            handle
                .show(Toast::new("from another thread"))
                .expect("provider alive");
        });
        worker.join().expect("worker finished");

        provider.tick();
        assert_eq!(provider.len(), 1);
        assert_eq!(provider.pending.load(Ordering::Acquire), 0);
    }
}
