use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type SessionId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    Waiting,
    Resolved,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Waiting => "waiting",
            SessionStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Chat,
    Email,
    Phone,
    Social,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::Chat => "chat",
            Channel::Email => "email",
            Channel::Phone => "phone",
            Channel::Social => "social",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Channel::Chat => "💬",
            Channel::Email => "✉",
            Channel::Phone => "☎",
            Channel::Social => "@",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSender {
    Customer,
    Agent,
}

/// Delivery state of an agent-authored message. Customer messages are
/// always stored as `Read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

impl DeliveryStatus {
    pub fn glyph(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "🕓",
            DeliveryStatus::Delivered => "✓",
            DeliveryStatus::Read => "✓✓",
        }
    }
}

/// A customer-agent conversation thread with metadata. Fixture-created
/// and never mutated at runtime; in particular the unread count is not
/// decremented on selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: SessionId,
    pub customer_name: String,
    pub customer_email: String,
    pub status: SessionStatus,
    pub priority: Priority,
    pub channel: Channel,
    pub last_message: String,
    pub unread_count: u32,
    pub timestamp: DateTime<Utc>,
}

impl ChatSession {
    /// Uppercase initials for the avatar placeholder, e.g. "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        self.customer_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// One entry in a session thread. Threads are append-only; a message is
/// never edited or removed once pushed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: MessageSender,
    pub timestamp: DateTime<Utc>,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleKind {
    Article,
    Video,
    Guide,
}

impl ArticleKind {
    pub fn glyph(self) -> &'static str {
        match self {
            ArticleKind::Article => "📄",
            ArticleKind::Video => "🎬",
            ArticleKind::Guide => "📖",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeArticle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub views: u32,
    pub likes: u32,
    pub rating: f32,
    pub last_updated: DateTime<Utc>,
    pub author: String,
    pub kind: ArticleKind,
    pub summary: String,
    pub featured: bool,
}

impl KnowledgeArticle {
    pub fn author_initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCategory {
    pub name: String,
    pub article_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in progress",
            TicketStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub customer: String,
    pub priority: Priority,
    pub channel: Channel,
    pub status: TicketStatus,
    pub age: String,
    pub agent: String,
}

/// One day of the weekly ticket volume bar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTicketVolume {
    pub day: String,
    pub new: u32,
    pub resolved: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelShare {
    pub channel: Channel,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTimeSample {
    pub hour: String,
    pub avg_hours: f32,
}

/// Numbers behind the four stat cards on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineStats {
    pub open_tickets: u32,
    pub open_delta_pct: i32,
    pub avg_response_hours: f32,
    pub response_delta_pct: i32,
    pub resolved_today: u32,
    pub resolved_goal: u32,
    pub satisfaction: f32,
    pub satisfaction_delta: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        let session = ChatSession {
            id: "CHT-900".into(),
            customer_name: "Sarah Johnson".into(),
            customer_email: "sarah@company.com".into(),
            status: SessionStatus::Active,
            priority: Priority::High,
            channel: Channel::Chat,
            last_message: String::new(),
            unread_count: 0,
            timestamp: Utc::now(),
        };
        assert_eq!(session.initials(), "SJ");
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(Priority::High.label(), "high");
        assert_eq!(SessionStatus::Waiting.label(), "waiting");
        assert_eq!(TicketStatus::InProgress.label(), "in progress");
        assert_eq!(Channel::Social.label(), "social");
    }
}
