//! UseCase: userID から表示名を引く

use std::sync::Arc;

use crate::domain::{DisplayName, IdentityProvider, UserId};

use super::error::LookupUsernameError;

pub struct LookupUsernameUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
}

impl LookupUsernameUseCase {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_provider }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<DisplayName, LookupUsernameError> {
        Ok(self.identity_provider.lookup(user_id).await?)
    }
}
