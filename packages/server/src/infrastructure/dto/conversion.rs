//! Conversion logic between DTOs and domain types.

use chatline_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatFrame, ConnectionSnapshot, DisplayName, RenderedLine, UserId};
use crate::infrastructure::dto::{http as http_dto, websocket as ws_dto};

// ========================================
// DTO → Domain
// ========================================

impl From<ws_dto::IncomingFrame> for ChatFrame {
    fn from(dto: ws_dto::IncomingFrame) -> Self {
        if dto.is_init() {
            ChatFrame::Init {
                identity_token: UserId::new(dto.user_id.unwrap_or_default()),
                display_name: DisplayName::new(dto.username.unwrap_or_default()),
            }
        } else {
            ChatFrame::Chat {
                text: dto.message.unwrap_or_default(),
            }
        }
    }
}

/// Decode a raw text frame into a [`ChatFrame`].
pub fn decode_frame(payload: &str) -> Result<ChatFrame, serde_json::Error> {
    serde_json::from_str::<ws_dto::IncomingFrame>(payload).map(ChatFrame::from)
}

// ========================================
// Domain → DTO
// ========================================

impl From<ConnectionSnapshot> for http_dto::ConnectionDto {
    fn from(model: ConnectionSnapshot) -> Self {
        Self {
            connection_id: model.connection_id.to_string(),
            user_id: model.user_id.map(UserId::into_string),
            connected_at: timestamp_to_rfc3339(model.connected_at.value()),
        }
    }
}

impl From<DisplayName> for http_dto::UsernameDto {
    fn from(model: DisplayName) -> Self {
        Self {
            username: model.into_string(),
        }
    }
}

/// History lines as the JSON array of strings returned to clients
pub fn history_to_dto(lines: Vec<RenderedLine>) -> Vec<String> {
    lines.into_iter().map(RenderedLine::into_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, Timestamp};

    #[test]
    fn test_decode_init_frame() {
        // テスト項目: init フレームが ChatFrame::Init に変換される
        // given (前提条件):
        let payload = r#"{"type":"init","userID":"u1","username":"alice"}"#;

        // when (操作):
        let frame = decode_frame(payload).unwrap();

        // then (期待する結果):
        assert_eq!(
            frame,
            ChatFrame::Init {
                identity_token: UserId::new("u1"),
                display_name: DisplayName::new("alice"),
            }
        );
    }

    #[test]
    fn test_decode_chat_frame() {
        // テスト項目: chat フレームが ChatFrame::Chat に変換される
        // given (前提条件):
        let payload = r#"{"type":"chat","message":"hello"}"#;

        // when (操作):
        let frame = decode_frame(payload).unwrap();

        // then (期待する結果):
        assert_eq!(
            frame,
            ChatFrame::Chat {
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_decode_unknown_type_as_chat() {
        // テスト項目: 未知の type は chat として扱われる（現行動作の互換性）
        // given (前提条件):
        let payload = r#"{"type":"shout","message":"hey"}"#;

        // when (操作):
        let frame = decode_frame(payload).unwrap();

        // then (期待する結果):
        assert_eq!(
            frame,
            ChatFrame::Chat {
                text: "hey".to_string()
            }
        );
    }

    #[test]
    fn test_decode_init_with_missing_fields_uses_empty_strings() {
        // テスト項目: init フレームのフィールドが欠けている場合は空文字になる
        // given (前提条件):
        let payload = r#"{"type":"init"}"#;

        // when (操作):
        let frame = decode_frame(payload).unwrap();

        // then (期待する結果):
        assert_eq!(
            frame,
            ChatFrame::Init {
                identity_token: UserId::new(""),
                display_name: DisplayName::new(""),
            }
        );
    }

    #[test]
    fn test_decode_malformed_frame_is_error() {
        // テスト項目: 不正な JSON はエラーになる
        // given (前提条件):
        let payload = "{not json";

        // when (操作):
        let result = decode_frame(payload);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_connection_snapshot_to_dto() {
        // テスト項目: レジストリのスナップショットが DTO に変換される
        // given (前提条件):
        let connection_id = ConnectionId::generate();
        let snapshot = ConnectionSnapshot {
            connection_id,
            user_id: Some(UserId::new("u1")),
            connected_at: Timestamp::new(1672531200000),
        };

        // when (操作):
        let dto: http_dto::ConnectionDto = snapshot.into();

        // then (期待する結果):
        assert_eq!(dto.connection_id, connection_id.to_string());
        assert_eq!(dto.user_id.as_deref(), Some("u1"));
        assert!(dto.connected_at.starts_with("2023-01-01T00:00:00"));
    }
}
