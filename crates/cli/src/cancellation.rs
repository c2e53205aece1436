//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token passed through command handlers.
//! - Define the `Cancelled` error that signals Ctrl+C through `anyhow::Result`.
//! - Provide `cancellable!` to race a client call against the token.
//! - Centralize the cancellation message and the SIGINT exit code (130).
//!
//! Does NOT handle:
//! - Installing signal handlers (see `main()`).
//!
//! Invariants:
//! - Once cancelled, the token remains cancelled.
//! - A cancelled call is dropped; no follow-up request is sent for it.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Standard Unix exit code for SIGINT: 128 + 2.
pub const SIGINT_EXIT_CODE: u8 = 130;

/// Race a future against a [`CancellationToken`].
///
/// Evaluates to `anyhow::Result<T>`: the future's output with its error
/// converted, or [`Cancelled`] if the token fires first.
#[macro_export]
macro_rules! cancellable {
    ($future:expr, $cancel:expr) => {{
        let cancel: &$crate::cancellation::CancellationToken = $cancel;
        tokio::select! {
            result = $future => result.map_err(::anyhow::Error::from),
            _ = cancel.cancelled() => Err(::anyhow::Error::new($crate::cancellation::Cancelled)),
        }
    }};
}

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// Creates the `notified()` future before checking the flag so a
    /// concurrent `cancel()` is never missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
