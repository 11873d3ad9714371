//! UseCase: 履歴取得処理

use std::sync::Arc;

use crate::domain::{HistoryStore, RenderedLine};

use super::error::LoadHistoryError;

/// 履歴取得のユースケース
pub struct LoadHistoryUseCase {
    history: Arc<dyn HistoryStore>,
}

impl LoadHistoryUseCase {
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    /// 全履歴を古い順に返す（ページングなし）
    pub async fn execute(&self) -> Result<Vec<RenderedLine>, LoadHistoryError> {
        self.history
            .load_all()
            .await
            .map_err(|e| LoadHistoryError::StoreUnavailable(e.to_string()))
    }
}
