//! UseCase: 接続一覧の取得（デバッグ用）

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, ConnectionSnapshot};

pub struct GetConnectionsUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl GetConnectionsUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self) -> Vec<ConnectionSnapshot> {
        self.registry.snapshot().await
    }
}
