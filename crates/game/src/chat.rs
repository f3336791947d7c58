//! In-game chat log with per-player rate limiting.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use wordsquad_config::constants::MAX_CHAT_MESSAGES;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub emoji: String,
    pub text: String,
    pub ts_ms: u64,
    /// Announcements (new game, hard mode changes) rather than player chat
    #[serde(default)]
    pub system: bool,
}

/// Why a chat message was not accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatRejection {
    Empty,
    TooLong { max: usize },
    Unregistered,
    RateLimited { retry_ms: u64 },
}

impl ChatRejection {
    pub fn message(&self) -> String {
        match self {
            ChatRejection::Empty => "Empty message.".to_string(),
            ChatRejection::TooLong { max } => {
                format!("Message too long (max {} characters).", max)
            }
            ChatRejection::Unregistered => "Pick an emoji first.".to_string(),
            ChatRejection::RateLimited { .. } => {
                "Please wait before sending another message.".to_string()
            }
        }
    }
}

/// Bounded chat history. Oldest messages fall off the front.
#[derive(Debug)]
pub struct ChatLog {
    messages: VecDeque<ChatMessage>,
    last_sent_ms: HashMap<String, u64>,
    rate_limit_ms: u64,
    max_message_len: usize,
}

impl ChatLog {
    pub fn new(rate_limit_secs: u64, max_message_len: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            last_sent_ms: HashMap::new(),
            rate_limit_ms: rate_limit_secs * 1000,
            max_message_len,
        }
    }

    /// Validate and append a player message.
    ///
    /// Checks run in order: empty text, length, registration, rate
    /// limit. The trimmed text is what gets stored.
    pub fn push_at(
        &mut self,
        now_ms: u64,
        emoji: &str,
        text: &str,
        is_registered: bool,
    ) -> Result<(), ChatRejection> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatRejection::Empty);
        }
        if trimmed.chars().count() > self.max_message_len {
            return Err(ChatRejection::TooLong {
                max: self.max_message_len,
            });
        }
        if !is_registered {
            return Err(ChatRejection::Unregistered);
        }
        if let Some(last) = self.last_sent_ms.get(emoji) {
            let elapsed = now_ms.saturating_sub(*last);
            if elapsed < self.rate_limit_ms {
                return Err(ChatRejection::RateLimited {
                    retry_ms: self.rate_limit_ms - elapsed,
                });
            }
        }

        self.last_sent_ms.insert(emoji.to_string(), now_ms);
        self.push_message(ChatMessage {
            emoji: emoji.to_string(),
            text: trimmed.to_string(),
            ts_ms: now_ms,
            system: false,
        });
        Ok(())
    }

    /// Append an announcement, bypassing validation and rate limits.
    pub fn push_system_at(&mut self, now_ms: u64, text: &str) {
        self.push_message(ChatMessage {
            emoji: String::new(),
            text: text.to_string(),
            ts_ms: now_ms,
            system: true,
        });
    }

    fn push_message(&mut self, message: ChatMessage) {
        self.messages.push_back(message);
        while self.messages.len() > MAX_CHAT_MESSAGES {
            self.messages.pop_front();
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Replace the log contents (loading a saved session).
    pub fn restore(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages.into_iter().collect();
        while self.messages.len() > MAX_CHAT_MESSAGES {
            self.messages.pop_front();
        }
    }

    pub fn to_vec(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> ChatLog {
        ChatLog::new(2, 280)
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let mut chat = log();
        assert_eq!(
            chat.push_at(1000, "🐶", "   ", true),
            Err(ChatRejection::Empty)
        );
        assert!(chat.is_empty());
    }

    #[test]
    fn test_rejects_unregistered_player() {
        let mut chat = log();
        assert_eq!(
            chat.push_at(1000, "🐶", "hello", false),
            Err(ChatRejection::Unregistered)
        );
    }

    #[test]
    fn test_rate_limit_per_player() {
        let mut chat = log();
        assert!(chat.push_at(1000, "🐶", "first", true).is_ok());
        assert_eq!(
            chat.push_at(2500, "🐶", "too soon", true),
            Err(ChatRejection::RateLimited { retry_ms: 500 })
        );
        // A different player is not throttled
        assert!(chat.push_at(2500, "🦊", "hi", true).is_ok());
        // And the first player may send again after the window
        assert!(chat.push_at(3000, "🐶", "second", true).is_ok());
        assert_eq!(chat.len(), 3);
    }

    #[test]
    fn test_stores_trimmed_text() {
        let mut chat = log();
        assert!(chat.push_at(1000, "🐶", "  hello  ", true).is_ok());
        let stored: Vec<_> = chat.messages().collect();
        assert_eq!(stored[0].text, "hello");
    }

    #[test]
    fn test_too_long_rejected() {
        let mut chat = ChatLog::new(2, 5);
        assert_eq!(
            chat.push_at(1000, "🐶", "toolong", true),
            Err(ChatRejection::TooLong { max: 5 })
        );
    }

    #[test]
    fn test_capped_at_max_messages() {
        let mut chat = ChatLog::new(0, 280);
        for i in 0..(MAX_CHAT_MESSAGES + 10) {
            chat.push_at(i as u64 * 1000, "🐶", &format!("msg {}", i), true)
                .ok();
        }
        assert_eq!(chat.len(), MAX_CHAT_MESSAGES);
    }

    #[test]
    fn test_system_messages_bypass_validation() {
        let mut chat = log();
        chat.push_system_at(1000, "New game started");
        chat.push_system_at(1001, "Hard mode enabled");
        assert_eq!(chat.len(), 2);
        assert!(chat.messages().all(|m| m.system));
    }
}
