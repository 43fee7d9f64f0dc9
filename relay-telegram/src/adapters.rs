//! Adapters from Telegram (teloxide) types to relay_core types.

use relay_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Non-text updates get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let text = self.0.text();
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat).to_string(),
            },
            content: text.unwrap_or("").to_string(),
            message_type: if text.is_some() { "text" } else { "other" }.to_string(),
            created_at: self.0.date,
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::MessageKind;

    fn telegram_message(json: serde_json::Value) -> teloxide::types::Message {
        serde_json::from_value(json).expect("valid Telegram message JSON")
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: A private text message keeps chat id, sender and text; `/start` is classified as a command.**
    #[test]
    fn test_text_message_to_core() {
        let msg = telegram_message(serde_json::json!({
            "message_id": 7,
            "date": 1700000000,
            "chat": {"id": 456, "type": "private", "first_name": "Test"},
            "from": {"id": 123, "is_bot": false, "first_name": "Test", "username": "testuser"},
            "text": "/start"
        }));

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, "7");
        assert_eq!(core.chat.id, 456);
        assert_eq!(core.chat.chat_type, "private");
        assert_eq!(core.user.id, 123);
        assert_eq!(core.content, "/start");
        assert_eq!(core.message_type, "text");
        assert!(core.kind().is_command("start"));
    }

    /// **Test: A message without text converts to empty content and MessageKind::Empty.**
    #[test]
    fn test_non_text_message_has_empty_content() {
        let msg = telegram_message(serde_json::json!({
            "message_id": 8,
            "date": 1700000000,
            "chat": {"id": -100, "type": "group", "title": "Group"},
            "from": {"id": 123, "is_bot": false, "first_name": "Test"},
            "location": {"latitude": 35.6892, "longitude": 51.389}
        }));

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.chat.chat_type, "group");
        assert_eq!(core.content, "");
        assert_eq!(core.message_type, "other");
        assert_eq!(core.kind(), MessageKind::Empty);
    }
}
