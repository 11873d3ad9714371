//! WebSocket frame DTOs.
//!
//! Inbound frames are JSON objects:
//!
//! ```json
//! {"type":"init","userID":"<id>","username":"<name>"}
//! {"type":"chat","message":"<text>"}
//! ```
//!
//! Only `"init"` is special-cased. Any other `type`, or none at all, is a
//! chat message. Outbound frames are the bare rendered line as text.

use serde::{Deserialize, Serialize};

/// `type` value of identity binding frames
pub const INIT_FRAME_TYPE: &str = "init";

/// Inbound frame as sent by clients. Missing or `null` fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingFrame {
    #[serde(default, rename = "type")]
    pub r#type: Option<String>,
    #[serde(default, rename = "userID")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl IncomingFrame {
    pub fn is_init(&self) -> bool {
        self.r#type.as_deref() == Some(INIT_FRAME_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_init_frame() {
        // テスト項目: init フレームの userID / username が読み取れる
        // given (前提条件):
        let json = r#"{"type":"init","userID":"u1","username":"alice"}"#;

        // when (操作):
        let frame: IncomingFrame = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert!(frame.is_init());
        assert_eq!(frame.user_id.as_deref(), Some("u1"));
        assert_eq!(frame.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_deserialize_frame_without_type() {
        // テスト項目: type が省略されたフレームも受け付ける（init ではない）
        // given (前提条件):
        let json = r#"{"message":"hello"}"#;

        // when (操作):
        let frame: IncomingFrame = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert!(!frame.is_init());
        assert_eq!(frame.message.as_deref(), Some("hello"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields_and_nulls() {
        // テスト項目: 未知のフィールドや null 値があっても読み取れる
        // given (前提条件):
        let json = r#"{"type":null,"message":"hi","extra":42}"#;

        // when (操作):
        let frame: IncomingFrame = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(frame.r#type, None);
        assert_eq!(frame.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        // テスト項目: JSON オブジェクトでない入力はエラーになる
        // given (前提条件):
        let inputs = ["not json", "[1,2]", r#"{"type":5}"#];

        // when (操作) / then (期待する結果):
        for input in inputs {
            assert!(serde_json::from_str::<IncomingFrame>(input).is_err());
        }
    }
}
