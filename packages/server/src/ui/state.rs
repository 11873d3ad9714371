//! Server state shared by the handlers.

use std::sync::Arc;

use chatline_shared::time::Clock;

use crate::{
    domain::ConnectionRegistry,
    infrastructure::Backends,
    usecase::{
        BindIdentityUseCase, ConnectClientUseCase, DisconnectClientUseCase,
        GetConnectionsUseCase, LoadHistoryUseCase, LookupUsernameUseCase, SendChatUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// ConnectClientUseCase（接続登録のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（接続削除のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// BindIdentityUseCase（identity バインドのユースケース）
    pub bind_identity_usecase: Arc<BindIdentityUseCase>,
    /// SendChatUseCase（チャット送信のユースケース）
    pub send_chat_usecase: Arc<SendChatUseCase>,
    /// LoadHistoryUseCase（履歴取得のユースケース）
    pub load_history_usecase: Arc<LoadHistoryUseCase>,
    /// LookupUsernameUseCase（表示名取得のユースケース）
    pub lookup_username_usecase: Arc<LookupUsernameUseCase>,
    /// GetConnectionsUseCase（接続一覧取得のユースケース）
    pub get_connections_usecase: Arc<GetConnectionsUseCase>,
}

impl AppState {
    /// Wire every use case to the given registry and backends.
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        backends: Backends,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect_client_usecase: Arc::new(ConnectClientUseCase::new(registry.clone(), clock)),
            disconnect_client_usecase: Arc::new(DisconnectClientUseCase::new(registry.clone())),
            bind_identity_usecase: Arc::new(BindIdentityUseCase::new(
                backends.identity.clone(),
                registry.clone(),
            )),
            send_chat_usecase: Arc::new(SendChatUseCase::new(
                backends.history.clone(),
                backends.bus.clone(),
            )),
            load_history_usecase: Arc::new(LoadHistoryUseCase::new(backends.history)),
            lookup_username_usecase: Arc::new(LookupUsernameUseCase::new(backends.identity)),
            get_connections_usecase: Arc::new(GetConnectionsUseCase::new(registry)),
        }
    }
}
