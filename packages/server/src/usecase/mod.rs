//! UseCase 層
//!
//! セッションハンドラ・HTTP ハンドラ・fan-out リスナーから呼ばれる
//! アプリケーションロジック。ドメイン層の trait にのみ依存します。

pub mod bind_identity;
pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod fan_out;
pub mod get_connections;
pub mod load_history;
pub mod lookup_username;
pub mod send_chat;

pub use bind_identity::BindIdentityUseCase;
pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{BindIdentityError, LoadHistoryError, LookupUsernameError};
pub use fan_out::FanOutListener;
pub use get_connections::GetConnectionsUseCase;
pub use load_history::LoadHistoryUseCase;
pub use lookup_username::LookupUsernameUseCase;
pub use send_chat::{SendChatUseCase, SendReport};
