use serde::{ Serialize, Deserialize };

/// Inbound webhook payload. Only the fields the relay consumes are modeled;
/// anything else in the update is ignored by serde.
#[derive(Clone, Debug, Deserialize)]
pub struct Update {
    pub message: Option<Message>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<Sender>,
    pub text: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Sender {
    pub id: i64,
}

/// Fixed acknowledgement returned for every webhook delivery so the
/// platform does not redeliver.
#[derive(Clone, Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[derive(Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_update_parses() {
        let raw =
            r#"{
            "update_id": 1,
            "message": {
                "message_id": 42,
                "chat": { "id": 1001, "type": "private" },
                "from": { "id": 2002, "is_bot": false },
                "text": "Hi"
            }
        }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, 1001);
        assert_eq!(message.from.unwrap().id, 2002);
        assert_eq!(message.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn update_without_message_parses_as_none() {
        let raw = r#"{ "update_id": 2, "edited_message": { "message_id": 3 } }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn message_without_text_parses() {
        let raw =
            r#"{
            "update_id": 3,
            "message": { "chat": { "id": 5 }, "from": { "id": 6 }, "sticker": {} }
        }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        assert!(update.message.unwrap().text.is_none());
    }
}
