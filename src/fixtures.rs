//! Hardcoded datasets standing in for a real ticketing backend. Every
//! view reads from these; nothing here is mutated after construction
//! except the chat threads, which grow by appending.

use chrono::{Duration, Utc};

use crate::common::types::{
    ArticleCategory, ArticleKind, Channel, ChatSession, DailyTicketVolume, ChannelShare,
    DeliveryStatus, HeadlineStats, KnowledgeArticle, Message, MessageSender, Priority,
    ResponseTimeSample, SessionStatus, Ticket, TicketStatus,
};

/// The session selected when the app starts; its thread is the only one
/// seeded with history.
pub const DEFAULT_SESSION_ID: &str = "CHT-001";

/// Total article count shown on the knowledge base stat card (the fixture
/// list itself only carries a sample).
pub const TOTAL_ARTICLES: u32 = 145;

pub fn chat_sessions() -> Vec<ChatSession> {
    let now = Utc::now();
    vec![
        ChatSession {
            id: "CHT-001".into(),
            customer_name: "Sarah Johnson".into(),
            customer_email: "sarah@company.com".into(),
            status: SessionStatus::Active,
            priority: Priority::High,
            channel: Channel::Chat,
            last_message: "I'm having trouble accessing my email...".into(),
            unread_count: 2,
            timestamp: now - Duration::minutes(5),
        },
        ChatSession {
            id: "CHT-002".into(),
            customer_name: "Mike Chen".into(),
            customer_email: "mike@startup.com".into(),
            status: SessionStatus::Waiting,
            priority: Priority::Medium,
            channel: Channel::Chat,
            last_message: "Can you help me with software installation?".into(),
            unread_count: 1,
            timestamp: now - Duration::minutes(15),
        },
        ChatSession {
            id: "CHT-003".into(),
            customer_name: "Emma Wilson".into(),
            customer_email: "emma@corp.com".into(),
            status: SessionStatus::Active,
            priority: Priority::Low,
            channel: Channel::Chat,
            last_message: "Thank you for the help!".into(),
            unread_count: 0,
            timestamp: now - Duration::minutes(30),
        },
    ]
}

/// Seed history for the default session's thread.
pub fn seed_thread() -> Vec<Message> {
    let now = Utc::now();
    vec![
        Message {
            id: "1".into(),
            text: "Hi, I'm having trouble accessing my email account. It keeps saying my \
                   password is incorrect but I'm sure it's right."
                .into(),
            sender: MessageSender::Customer,
            timestamp: now - Duration::minutes(10),
            status: DeliveryStatus::Read,
        },
        Message {
            id: "2".into(),
            text: "Hello Sarah! I'm here to help you with that. Let me check your account \
                   status. Can you confirm your email address for me?"
                .into(),
            sender: MessageSender::Agent,
            timestamp: now - Duration::minutes(8),
            status: DeliveryStatus::Read,
        },
        Message {
            id: "3".into(),
            text: "Yes, it's sarah@company.com".into(),
            sender: MessageSender::Customer,
            timestamp: now - Duration::minutes(6),
            status: DeliveryStatus::Read,
        },
        Message {
            id: "4".into(),
            text: "Perfect! I can see your account. It looks like there was a security \
                   lockout due to multiple failed login attempts. I'm resetting that now. \
                   Please try logging in again in about 2 minutes."
                .into(),
            sender: MessageSender::Agent,
            timestamp: now - Duration::minutes(3),
            status: DeliveryStatus::Delivered,
        },
    ]
}

pub fn knowledge_articles() -> Vec<KnowledgeArticle> {
    let now = Utc::now();
    vec![
        KnowledgeArticle {
            id: "KB-001".into(),
            title: "How to Reset Your Email Password".into(),
            category: "Email Support".into(),
            tags: vec!["password".into(), "email".into(), "security".into()],
            views: 1250,
            likes: 45,
            rating: 4.8,
            last_updated: now - Duration::days(2),
            author: "Sarah Johnson".into(),
            kind: ArticleKind::Article,
            summary: "Step-by-step guide to reset your email password...".into(),
            featured: true,
        },
        KnowledgeArticle {
            id: "KB-002".into(),
            title: "Setting Up VPN Access".into(),
            category: "Network".into(),
            tags: vec!["vpn".into(), "security".into(), "network".into()],
            views: 890,
            likes: 32,
            rating: 4.6,
            last_updated: now - Duration::days(5),
            author: "Mike Chen".into(),
            kind: ArticleKind::Guide,
            summary: "Complete guide for setting up VPN access...".into(),
            featured: false,
        },
        KnowledgeArticle {
            id: "KB-003".into(),
            title: "Software Installation Tutorial".into(),
            category: "Software".into(),
            tags: vec!["installation".into(), "software".into(), "tutorial".into()],
            views: 670,
            likes: 28,
            rating: 4.5,
            last_updated: now - Duration::days(7),
            author: "Anna Wilson".into(),
            kind: ArticleKind::Video,
            summary: "Video tutorial showing software installation process...".into(),
            featured: true,
        },
        KnowledgeArticle {
            id: "KB-004".into(),
            title: "Troubleshooting Network Connectivity".into(),
            category: "Network".into(),
            tags: vec![
                "network".into(),
                "troubleshooting".into(),
                "connectivity".into(),
            ],
            views: 1100,
            likes: 52,
            rating: 4.7,
            last_updated: now - Duration::days(3),
            author: "David Brown".into(),
            kind: ArticleKind::Article,
            summary: "Common network connectivity issues and solutions...".into(),
            featured: false,
        },
    ]
}

pub fn article_categories() -> Vec<ArticleCategory> {
    [
        ("All Articles", 24),
        ("Email Support", 8),
        ("Network", 6),
        ("Software", 5),
        ("Hardware", 3),
        ("Security", 2),
    ]
    .into_iter()
    .map(|(name, article_count)| ArticleCategory {
        name: name.into(),
        article_count,
    })
    .collect()
}

pub fn recent_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TCK-001".into(),
            title: "Email server down".into(),
            customer: "John Smith".into(),
            priority: Priority::High,
            channel: Channel::Email,
            status: TicketStatus::Open,
            age: "2 min ago".into(),
            agent: "Sarah".into(),
        },
        Ticket {
            id: "TCK-002".into(),
            title: "Password reset request".into(),
            customer: "Emily Johnson".into(),
            priority: Priority::Medium,
            channel: Channel::Chat,
            status: TicketStatus::InProgress,
            age: "15 min ago".into(),
            agent: "Mike".into(),
        },
        Ticket {
            id: "TCK-003".into(),
            title: "Software installation help".into(),
            customer: "David Wilson".into(),
            priority: Priority::Low,
            channel: Channel::Phone,
            status: TicketStatus::Resolved,
            age: "1 hour ago".into(),
            agent: "Anna".into(),
        },
    ]
}

pub fn weekly_ticket_volume() -> Vec<DailyTicketVolume> {
    [
        ("Mon", 24, 20, 8),
        ("Tue", 30, 25, 12),
        ("Wed", 18, 22, 6),
        ("Thu", 35, 28, 15),
        ("Fri", 42, 38, 18),
        ("Sat", 15, 12, 5),
        ("Sun", 8, 10, 3),
    ]
    .into_iter()
    .map(|(day, new, resolved, pending)| DailyTicketVolume {
        day: day.into(),
        new,
        resolved,
        pending,
    })
    .collect()
}

pub fn channel_distribution() -> Vec<ChannelShare> {
    vec![
        ChannelShare {
            channel: Channel::Email,
            percent: 45,
        },
        ChannelShare {
            channel: Channel::Chat,
            percent: 30,
        },
        ChannelShare {
            channel: Channel::Phone,
            percent: 20,
        },
        ChannelShare {
            channel: Channel::Social,
            percent: 5,
        },
    ]
}

pub fn response_times() -> Vec<ResponseTimeSample> {
    [
        ("9AM", 2.5),
        ("10AM", 1.8),
        ("11AM", 3.2),
        ("12PM", 2.1),
        ("1PM", 4.5),
        ("2PM", 2.8),
        ("3PM", 1.9),
    ]
    .into_iter()
    .map(|(hour, avg_hours)| ResponseTimeSample {
        hour: hour.into(),
        avg_hours,
    })
    .collect()
}

pub fn headline_stats() -> HeadlineStats {
    HeadlineStats {
        open_tickets: 142,
        open_delta_pct: 12,
        avg_response_hours: 2.4,
        response_delta_pct: -8,
        resolved_today: 87,
        resolved_goal: 100,
        satisfaction: 4.8,
        satisfaction_delta: 0.2,
    }
}
