//! UseCase: identity バインド処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BindIdentityUseCase::execute() メソッド
//! - Identity Provider による表示名の解決と、レジストリへの userID の記録
//!
//! ### どのような状況を想定しているか
//! - 正常系：解決できた表示名が返され、レジストリに userID が記録される
//! - 異常系：未知のトークン、Identity Provider の障害（レジストリは変更されない）

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, DisplayName, IdentityProvider, UserId};

use super::error::BindIdentityError;

/// identity バインドのユースケース
pub struct BindIdentityUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
    registry: Arc<dyn ConnectionRegistry>,
}

impl BindIdentityUseCase {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        registry: Arc<dyn ConnectionRegistry>,
    ) -> Self {
        Self {
            identity_provider,
            registry,
        }
    }

    /// 表示名を解決し、接続に userID をバインドする
    ///
    /// # Arguments
    ///
    /// * `connection_id` - バインド対象の接続
    /// * `identity_token` - init フレームの userID
    /// * `claimed_name` - init フレームの username
    ///
    /// # Returns
    ///
    /// * `Ok(DisplayName)` - チャット行に使う表示名
    /// * `Err(BindIdentityError)` - 解決失敗（セッションは状態を変えない）
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        identity_token: UserId,
        claimed_name: &DisplayName,
    ) -> Result<DisplayName, BindIdentityError> {
        let display_name = self
            .identity_provider
            .resolve(&identity_token, claimed_name)
            .await?;

        if !self
            .registry
            .bind_identity(connection_id, identity_token)
            .await
        {
            // already pruned by fan-out; the reader will notice the closed socket
            tracing::debug!(
                "Connection '{}' left the registry before binding",
                connection_id
            );
        }

        Ok(display_name)
    }
}
