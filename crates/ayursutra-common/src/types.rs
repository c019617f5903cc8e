use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::MessageId;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => f.write_str("user"),
            Sender::Bot => f.write_str("bot"),
        }
    }
}

/// One transcript entry. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, text, Sender::User)
    }

    pub fn bot(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, text, Sender::Bot)
    }

    fn new(id: MessageId, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn message_constructors_set_sender() {
        let m = Message::user(MessageId(7), "hi");
        assert_eq!(m.sender, Sender::User);
        assert!(!m.is_bot());

        let m = Message::bot(MessageId(8), "hello");
        assert!(m.is_bot());
        assert_eq!(m.text, "hello");
        assert_eq!(m.id, MessageId(8));
    }

    #[test]
    fn message_serialization_shape() {
        let m = Message::bot(MessageId(1), "greeting");
        let json: serde_json::Value = serde_json::to_value(&m).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["sender"], "bot");
        assert_eq!(json["text"], "greeting");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(Point::new(10.0, 10.0), Size::new(100.0, 50.0));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(110.0, 60.0)));
        assert!(!r.contains(Point::new(111.0, 30.0)));
        assert!(!r.contains(Point::new(50.0, 9.0)));
    }

    #[test]
    fn rect_origin_and_size() {
        let r = Rect::new(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(r.origin(), Point::new(1.0, 2.0));
        assert_eq!(r.size(), Size::new(3.0, 4.0));
    }
}
