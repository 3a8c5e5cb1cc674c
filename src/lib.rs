// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` provides anchored, auto-dismissing toast notifications
//! for applications built with the Iced GUI toolkit.
//!
//! A [`Provider`] owns the ordered set of active toasts and renders them
//! as an overlay stacked at a fixed screen edge. Code elsewhere in the
//! application raises toasts either through the provider directly or
//! through a cloneable [`Handle`].
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::{Edge, Provider, Toast};
//!
//! // In your application state
//! let mut toasts = Provider::with_edge(Edge::Bottom);
//!
//! // Anywhere you can reach the provider (or a handle to it)
//! toasts.show(Toast::success("Image saved"));
//!
//! // In your update function
//! // Message::Toast(m) => self.toasts.handle_message(&m),
//!
//! // In your view function
//! let overlay = toasts.view().map(Message::Toast);
//!
//! // In your subscription function
//! let ticks = toasts.subscription().map(Message::Toast);
//! ```

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod handle;
pub mod history;
pub mod provider;
pub mod toast;
pub mod widget;

pub use config::Config;
pub use error::{Error, Result};
pub use handle::Handle;
pub use history::History;
pub use provider::{Edge, Message, Provider};
pub use toast::{Toast, ToastId, Variant, DEFAULT_DURATION};
