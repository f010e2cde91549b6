//! Delayed expiry of the copy confirmation.
//!
//! Scheduling a new expiry aborts the pending one, and every expiry carries
//! the token of the notice it belongs to. A late timer can therefore never
//! hide a newer confirmation.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::state::NoticeToken;

/// Cancellable one-shot timer that reports expired notice tokens.
pub struct NoticeTimer {
    tx: mpsc::UnboundedSender<NoticeToken>,
    pending: Option<JoinHandle<()>>,
}

impl NoticeTimer {
    /// Create a timer and the receiver its expiries arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NoticeToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, pending: None }, rx)
    }

    /// Send `token` after `delay`, cancelling any earlier schedule.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, token: NoticeToken, delay: Duration) {
        self.cancel();

        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session ended.
            let _ = tx.send(token);
        }));
    }

    /// Abort the pending expiry, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for NoticeTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
