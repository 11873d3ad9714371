//! Identity Provider trait 定義
//!
//! クライアントが提示する userID（トークン）を表示名に解決します。
//! 認証そのものはこのサービスの責務外です。

use async_trait::async_trait;

use super::{DisplayName, IdentityError, UserId};

/// Maps an opaque user token to a display name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the display name for a connection binding its identity.
    ///
    /// `claimed_name` is the `username` the client sent in its `init` frame.
    /// Providers backed by a user store ignore it.
    async fn resolve(
        &self,
        token: &UserId,
        claimed_name: &DisplayName,
    ) -> Result<DisplayName, IdentityError>;

    /// Look up the display name of a known token.
    async fn lookup(&self, token: &UserId) -> Result<DisplayName, IdentityError>;
}
