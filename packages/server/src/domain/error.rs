//! Errors reported by the external collaborators of the chat core.

use thiserror::Error;

/// History store failures (append or load)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History store error: {0}")]
    Store(String),
}

/// Broadcast bus failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("Failed to publish to bus: {0}")]
    Publish(String),

    #[error("Failed to subscribe to bus: {0}")]
    Subscribe(String),

    #[error("Bus subscription disconnected")]
    Disconnected,

    #[error("Bus subscription lagged behind by {0} messages")]
    Lagged(u64),

    #[error("Malformed bus payload: {0}")]
    Payload(String),
}

impl BusError {
    /// Whether the subscriber should wait before reading again.
    ///
    /// Lag and bad payloads leave the subscription usable; transport errors do not.
    pub fn should_back_off(&self) -> bool {
        matches!(
            self,
            BusError::Subscribe(_) | BusError::Disconnected | BusError::Publish(_)
        )
    }
}

/// Identity provider failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Identity '{0}' not found")]
    NotFound(String),

    #[error("Identity provider error: {0}")]
    Upstream(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_error_back_off_only_for_transport_failures() {
        // テスト項目: トランスポート系のエラーのみバックオフ対象になる
        // given (前提条件):
        let transport = [
            BusError::Disconnected,
            BusError::Subscribe("refused".to_string()),
        ];
        let recoverable = [BusError::Lagged(3), BusError::Payload("nil".to_string())];

        // when (操作) / then (期待する結果):
        assert!(transport.iter().all(BusError::should_back_off));
        assert!(!recoverable.iter().any(BusError::should_back_off));
    }
}
