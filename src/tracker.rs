use crate::error::ServiceError;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared slot holding the most recent failure.
///
/// Clones share the same slot, so the service, the models and the UI layer
/// can each hold a handle. Only the last reported error is kept.
#[derive(Debug, Clone, Default)]
pub struct ErrorTracker {
    current: Arc<Mutex<Option<ServiceError>>>,
}

impl ErrorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error`, replacing whatever was stored before
    pub async fn report(&self, error: ServiceError) {
        debug!("Error reported: {}", error);
        *self.current.lock().await = Some(error);
    }

    pub async fn current(&self) -> Option<ServiceError> {
        *self.current.lock().await
    }

    pub async fn clear(&self) {
        self.current.lock().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_last_report_wins() {
        let tracker = ErrorTracker::new();
        assert_eq!(tracker.current().await, None);

        tracker.report(ServiceError::InvalidUrl).await;
        tracker.report(ServiceError::DecodingFailure).await;
        assert_eq!(tracker.current().await, Some(ServiceError::DecodingFailure));
    }

    #[tokio::test]
    async fn test_clones_share_slot() {
        let tracker = ErrorTracker::new();
        let handle = tracker.clone();

        handle.report(ServiceError::Unknown).await;
        assert_eq!(tracker.current().await, Some(ServiceError::Unknown));

        tracker.clear().await;
        assert_eq!(handle.current().await, None);
    }
}
