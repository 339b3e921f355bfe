// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cancellation context threaded through every RPC, backend call, and
//! user-function invocation.

use tokio_util::sync::CancellationToken;

/// A cancellable context passed to backend Get/Put and user-function calls.
///
/// Cloning an `OpContext` shares the same cancellation signal; cancelling
/// any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct OpContext {
    token: CancellationToken,
}

impl OpContext {
    /// Create a fresh, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a child context that is cancelled when either `self` or the
    /// child is cancelled.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Cancel this context and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// `true` once [`OpContext::cancel`] has been called on this context or
    /// an ancestor.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolve once the context is cancelled. Useful for racing against a
    /// suspension point with `tokio::select!`.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// Run `fut` to completion, unless this context is cancelled first.
    ///
    /// Every suspension point in this crate (backend Get/Put, codec work
    /// wrapped around blocking calls) is threaded through here so that
    /// cancelling the driver's top-level context aborts in-flight work
    /// promptly instead of waiting out the operation.
    pub async fn run<T, E, F>(&self, fut: F) -> Result<T, E>
    where
        F: std::future::Future<Output = Result<T, E>>,
        E: From<Cancelled>,
    {
        tokio::select! {
            result = fut => result,
            _ = self.token.cancelled() => Err(E::from(Cancelled)),
        }
    }
}

/// Marker indicating an operation was aborted by context cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cancelling_parent_cancels_child() {
        let parent = OpContext::new();
        let child = parent.child();
        assert!(!child.is_cancelled());
        parent.cancel();
        assert!(child.is_cancelled());
    }
}
