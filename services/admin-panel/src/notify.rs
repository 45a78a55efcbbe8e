//! Transient notifications

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::document::{Document, Notification, Severity};

/// Shows a message and clears it after a fixed window
///
/// Timers are independent: an earlier timer may clear a later message
/// before its own window has elapsed.
#[derive(Clone)]
pub struct Notifier {
    document: Arc<dyn Document>,
    display_for: Duration,
}

impl Notifier {
    pub fn new(document: Arc<dyn Document>, display_for: Duration) -> Self {
        Self {
            document,
            display_for,
        }
    }

    /// Must be called from within a tokio runtime
    pub fn show(&self, message: &str, is_error: bool) -> JoinHandle<()> {
        let severity = if is_error {
            Severity::Error
        } else {
            Severity::Success
        };
        self.document.show_notification(Notification {
            message: message.to_string(),
            severity,
        });

        let document = Arc::clone(&self.document);
        let display_for = self.display_for;
        tokio::spawn(async move {
            tokio::time::sleep(display_for).await;
            document.clear_notification();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[tokio::test(start_paused = true)]
    async fn message_clears_after_window() {
        let doc = Arc::new(MemoryDocument::new());
        let notifier = Notifier::new(doc.clone(), Duration::from_millis(2500));

        notifier.show("User deleted.", false);
        assert_eq!(
            doc.snapshot().notification,
            Some(Notification {
                message: "User deleted.".to_string(),
                severity: Severity::Success,
            })
        );

        tokio::time::sleep(Duration::from_millis(2499)).await;
        assert!(doc.snapshot().notification.is_some());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(doc.snapshot().notification, None);
    }

    #[tokio::test(start_paused = true)]
    async fn earlier_timer_clears_later_message() {
        let doc = Arc::new(MemoryDocument::new());
        let notifier = Notifier::new(doc.clone(), Duration::from_millis(2500));

        notifier.show("first", false);
        tokio::time::sleep(Duration::from_millis(2000)).await;
        notifier.show("second", true);
        assert_eq!(
            doc.snapshot().notification.map(|n| n.severity),
            Some(Severity::Error)
        );

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(doc.snapshot().notification, None);
    }
}
