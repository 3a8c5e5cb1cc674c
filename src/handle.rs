// SPDX-License-Identifier: MPL-2.0
//! Cloneable dispatcher handle for code that does not own the provider.
//!
//! A `Handle` is minted by [`Provider::handle`](crate::Provider::handle)
//! and passed explicitly into whatever subtree needs to raise toasts.
//! Commands are queued over a channel and applied the next time the
//! provider ticks, so a handle never touches the active set directly and
//! never blocks.

use crate::error::{Error, Result};
use crate::toast::{Toast, ToastId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};

/// A queued mutation of the provider's active set.
#[derive(Debug)]
pub(crate) enum Command {
    Show(Toast),
    Dismiss(ToastId),
}

/// Remote control for a [`Provider`](crate::Provider).
///
/// Cheap to clone; every clone feeds the same provider. Both operations
/// fail with [`Error::ProviderClosed`] once the provider has been
/// dropped, which flags a wiring mistake in the host application.
#[derive(Debug, Clone)]
pub struct Handle {
    sender: mpsc::Sender<Command>,
    /// Commands sent but not yet drained; keeps the provider's tick
    /// subscription alive while the active set is still empty.
    pending: Arc<AtomicUsize>,
}

impl Handle {
    pub(crate) fn new(sender: mpsc::Sender<Command>, pending: Arc<AtomicUsize>) -> Self {
        Self { sender, pending }
    }

    /// Queues a toast for display and returns its ID.
    ///
    /// The toast joins the active set when the provider next processes
    /// its commands (on tick or message handling).
    pub fn show(&self, toast: Toast) -> Result<ToastId> {
        let id = toast.id();
        self.send(Command::Show(toast))?;
        Ok(id)
    }

    /// Queues removal of a toast. Unknown IDs are ignored by the provider.
    pub fn dismiss(&self, id: ToastId) -> Result<()> {
        self.send(Command::Dismiss(id))
    }

    /// The counter is raised before the command is handed over: the
    /// provider decrements once per drained command, so the count must
    /// never trail the channel or it underflows when a drain lands
    /// between the two steps.
    fn send(&self, command: Command) -> Result<()> {
        self.pending.fetch_add(1, Ordering::Release);
        if self.sender.send(command).is_err() {
            self.pending.fetch_sub(1, Ordering::Release);
            return Err(Error::ProviderClosed);
        }
        Ok(())
    }
}
