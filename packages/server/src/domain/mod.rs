//! ドメイン層
//!
//! 値オブジェクト、セッションの状態遷移、外部コラボレーター（History / Bus /
//! Identity）と接続レジストリの trait を定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod bus;
pub mod error;
pub mod history;
pub mod identity;
pub mod registry;
pub mod session;
pub mod value_object;

pub use bus::{BusSubscription, MessageBus};
pub use error::{BusError, HistoryError, IdentityError};
pub use history::HistoryStore;
pub use identity::IdentityProvider;
pub use registry::{BroadcastReport, ConnectionRegistry, ConnectionSender, ConnectionSnapshot};
pub use session::{ChatFrame, ChatSession, SessionCommand, SessionState};
pub use value_object::{ConnectionId, DisplayName, RenderedLine, Timestamp, UserId};
