//! Per-connection chat session state machine.
//!
//! Pure state transitions with no I/O; the WebSocket handler executes the
//! returned [`SessionCommand`]s against the use cases.
//!
//! ```text
//! Unbound --Init--> Bound --Chat--> Bound
//!    |                |
//!    +----- read failure / close -----> Closed
//! ```

use super::{DisplayName, RenderedLine, UserId};

/// Decoded inbound frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatFrame {
    /// Bind the connection to a user
    Init {
        identity_token: UserId,
        display_name: DisplayName,
    },
    /// Send a chat message
    Chat { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unbound,
    Bound {
        user_id: UserId,
        display_name: DisplayName,
    },
    Closed,
}

/// What the handler has to do for a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Resolve the identity, then call [`ChatSession::bind`] on success
    Bind {
        identity_token: UserId,
        claimed_name: DisplayName,
    },
    /// Append the line to history and publish it on the bus
    Publish(RenderedLine),
    /// Nothing to do
    Ignore,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    state: SessionState,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Unbound,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, SessionState::Bound { .. })
    }

    /// Decide what to do with an inbound frame.
    ///
    /// Chat frames are ignored until an identity is bound. An `Init` while
    /// already bound asks for a rebind.
    pub fn handle(&self, frame: ChatFrame) -> SessionCommand {
        match (&self.state, frame) {
            (SessionState::Closed, _) => SessionCommand::Ignore,
            (
                _,
                ChatFrame::Init {
                    identity_token,
                    display_name,
                },
            ) => SessionCommand::Bind {
                identity_token,
                claimed_name: display_name,
            },
            (SessionState::Bound { display_name, .. }, ChatFrame::Chat { text }) => {
                SessionCommand::Publish(RenderedLine::render(display_name, &text))
            }
            (SessionState::Unbound, ChatFrame::Chat { .. }) => SessionCommand::Ignore,
        }
    }

    /// Transition to `Bound` after the identity was resolved.
    pub fn bind(&mut self, user_id: UserId, display_name: DisplayName) {
        if self.state == SessionState::Closed {
            return;
        }
        self.state = SessionState::Bound {
            user_id,
            display_name,
        };
    }

    /// Enter the terminal state.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_frame(user_id: &str, name: &str) -> ChatFrame {
        ChatFrame::Init {
            identity_token: UserId::new(user_id),
            display_name: DisplayName::new(name),
        }
    }

    fn chat_frame(text: &str) -> ChatFrame {
        ChatFrame::Chat {
            text: text.to_string(),
        }
    }

    fn bound_session(user_id: &str, name: &str) -> ChatSession {
        let mut session = ChatSession::new();
        session.bind(UserId::new(user_id), DisplayName::new(name));
        session
    }

    #[test]
    fn test_new_session_is_unbound() {
        // テスト項目: 新しいセッションは Unbound 状態で始まる
        // given (前提条件):

        // when (操作):
        let session = ChatSession::new();

        // then (期待する結果):
        assert_eq!(session.state(), &SessionState::Unbound);
        assert!(!session.is_bound());
    }

    #[test]
    fn test_chat_while_unbound_is_ignored() {
        // テスト項目: Unbound 状態の Chat フレームは無視される（履歴にも Bus にも流れない）
        // given (前提条件):
        let session = ChatSession::new();

        // when (操作):
        let command = session.handle(chat_frame("hello"));

        // then (期待する結果):
        assert_eq!(command, SessionCommand::Ignore);
    }

    #[test]
    fn test_init_while_unbound_requests_bind() {
        // テスト項目: Unbound 状態の Init フレームはバインド要求になる
        // given (前提条件):
        let session = ChatSession::new();

        // when (操作):
        let command = session.handle(init_frame("u1", "alice"));

        // then (期待する結果):
        assert_eq!(
            command,
            SessionCommand::Bind {
                identity_token: UserId::new("u1"),
                claimed_name: DisplayName::new("alice"),
            }
        );
    }

    #[test]
    fn test_chat_while_bound_publishes_rendered_line() {
        // テスト項目: Bound 状態の Chat フレームは表示名付きの行として publish される
        // given (前提条件):
        let session = bound_session("u1", "alice");

        // when (操作):
        let command = session.handle(chat_frame("hello"));

        // then (期待する結果):
        assert_eq!(
            command,
            SessionCommand::Publish(RenderedLine::from_rendered("alice: hello"))
        );
    }

    #[test]
    fn test_init_while_bound_requests_rebind() {
        // テスト項目: Bound 状態でも Init フレームは再バインド要求になる
        // given (前提条件):
        let session = bound_session("u1", "alice");

        // when (操作):
        let command = session.handle(init_frame("u2", "bob"));

        // then (期待する結果):
        assert!(matches!(command, SessionCommand::Bind { .. }));
    }

    #[test]
    fn test_bind_uses_resolved_display_name() {
        // テスト項目: bind 後は解決された表示名で行が生成される
        // given (前提条件):
        let mut session = ChatSession::new();

        // when (操作):
        session.bind(UserId::new("u1"), DisplayName::new("Alice (verified)"));
        let command = session.handle(chat_frame("hi"));

        // then (期待する結果):
        assert!(session.is_bound());
        assert_eq!(
            command,
            SessionCommand::Publish(RenderedLine::from_rendered("Alice (verified): hi"))
        );
    }

    #[test]
    fn test_closed_session_ignores_everything() {
        // テスト項目: Closed 状態ではいかなるフレームも処理されず、bind もできない
        // given (前提条件):
        let mut session = bound_session("u1", "alice");
        session.close();

        // when (操作):
        let chat = session.handle(chat_frame("late"));
        let init = session.handle(init_frame("u1", "alice"));
        session.bind(UserId::new("u1"), DisplayName::new("alice"));

        // then (期待する結果):
        assert_eq!(chat, SessionCommand::Ignore);
        assert_eq!(init, SessionCommand::Ignore);
        assert_eq!(session.state(), &SessionState::Closed);
    }
}
