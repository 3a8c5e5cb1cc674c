// SPDX-License-Identifier: MPL-2.0
//! Bounded log of toast activity.
//!
//! Hosts that want to inspect what was shown to the user (e.g. a debug
//! screen listing recent notifications) can attach a `History` to the
//! provider. The log is a fixed-capacity ring buffer: once full, the
//! oldest entry is evicted. Nothing is persisted; the log lives and dies
//! with the provider.

use crate::toast::{Toast, ToastId, Variant};
use std::collections::VecDeque;
use std::time::Instant;

/// Default number of events kept before eviction.
pub const DEFAULT_CAPACITY: usize = 100;

/// A single entry in the toast activity log.
#[derive(Debug, Clone)]
pub struct Event {
    kind: EventKind,
    at: Instant,
}

/// What happened to a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A toast entered the active set.
    Shown {
        id: ToastId,
        variant: Variant,
        text: String,
    },
    /// A toast was removed on request (caller or dismiss button).
    Dismissed { id: ToastId },
    /// A toast was removed because its lifetime elapsed.
    Expired { id: ToastId },
}

impl Event {
    fn now(kind: EventKind) -> Self {
        Self {
            kind,
            at: Instant::now(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    #[must_use]
    pub fn at(&self) -> Instant {
        self.at
    }
}

/// Fixed-capacity toast activity log, oldest entries evicted first.
#[derive(Debug, Clone)]
pub struct History {
    events: VecDeque<Event>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    /// Creates an empty log with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log with the given capacity (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn record_shown(&mut self, toast: &Toast) {
        self.push(Event::now(EventKind::Shown {
            id: toast.id(),
            variant: toast.variant(),
            text: toast.text().to_string(),
        }));
    }

    pub(crate) fn record_dismissed(&mut self, id: ToastId) {
        self.push(Event::now(EventKind::Dismissed { id }));
    }

    pub(crate) fn record_expired(&mut self, id: ToastId) {
        self.push(Event::now(EventKind::Expired { id }));
    }

    fn push(&mut self, event: Event) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Returns the logged events in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Returns the number of logged events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
