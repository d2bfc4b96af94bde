use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::types::{
    ArticleCategory, ChannelShare, ChatSession, DailyTicketVolume, DeliveryStatus, HeadlineStats,
    KnowledgeArticle, Message, MessageSender, ResponseTimeSample, SessionId, Ticket,
};
use crate::common::SimulatorEvent;
use crate::fixtures;

/// The four mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Tickets,
    Analytics,
    Knowledge,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Tickets,
        View::Analytics,
        View::Knowledge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Tickets => "Tickets",
            View::Analytics => "Analytics",
            View::Knowledge => "Knowledge Base",
        }
    }
}

/// Local state of the live chat widget. Threads are per-session and
/// append-only; the typing flag is per-session so replies pending in a
/// background session do not bleed into the foreground one.
pub struct ChatState {
    pub sessions: Vec<ChatSession>,
    pub selected_session_id: Option<SessionId>,
    pub threads: HashMap<SessionId, Vec<Message>>,
    pub typing: HashSet<SessionId>,
    pub input_text: String,
}

impl ChatState {
    pub fn new() -> Self {
        let sessions = fixtures::chat_sessions();
        let mut threads = HashMap::new();
        threads.insert(fixtures::DEFAULT_SESSION_ID.to_string(), fixtures::seed_thread());
        Self {
            selected_session_id: sessions.first().map(|session| session.id.clone()),
            sessions,
            threads,
            typing: HashSet::new(),
            input_text: String::new(),
        }
    }

    pub fn selected_session(&self) -> Option<&ChatSession> {
        let selected = self.selected_session_id.as_ref()?;
        self.sessions.iter().find(|session| &session.id == selected)
    }

    /// Switch the active session. Does not decrement the unread count and
    /// does not cancel a pending simulated reply; both are deliberate
    /// simplifications carried over from the original widget.
    pub fn select_session(&mut self, session_id: &str) {
        if self.sessions.iter().any(|session| session.id == session_id) {
            self.selected_session_id = Some(session_id.to_string());
        }
    }

    pub fn thread(&self, session_id: &str) -> &[Message] {
        self.threads
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_typing(&self, session_id: &str) -> bool {
        self.typing.contains(session_id)
    }

    /// Append the agent's message from the input buffer to the selected
    /// session's thread and clear the buffer. Whitespace-only input is a
    /// silent no-op. Returns the session to schedule a simulated reply
    /// for, if anything was appended.
    pub fn send_agent_message(&mut self, now: DateTime<Utc>) -> Option<SessionId> {
        let text = self.input_text.trim();
        if text.is_empty() {
            return None;
        }
        let session_id = self.selected_session_id.clone()?;

        let message = Message {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            sender: MessageSender::Agent,
            timestamp: now,
            status: DeliveryStatus::Sent,
        };
        self.threads
            .entry(session_id.clone())
            .or_default()
            .push(message);
        self.input_text.clear();
        Some(session_id)
    }

    pub fn apply_event(&mut self, event: SimulatorEvent) {
        match event {
            SimulatorEvent::TypingStarted { session_id } => {
                self.typing.insert(session_id);
            }
            SimulatorEvent::CustomerReply {
                session_id,
                message,
            } => {
                self.typing.remove(&session_id);
                self.threads.entry(session_id).or_default().push(message);
            }
        }
    }
}

/// Local state of the knowledge base view. Selection survives tab
/// switches because the whole struct lives on `AppState`.
pub struct KnowledgeState {
    pub articles: Vec<KnowledgeArticle>,
    pub categories: Vec<ArticleCategory>,
    pub search_query: String,
    pub selected_category: String,
    pub selected_article_id: Option<String>,
}

impl KnowledgeState {
    pub fn new() -> Self {
        let categories = fixtures::article_categories();
        Self {
            articles: fixtures::knowledge_articles(),
            selected_category: categories
                .first()
                .map(|category| category.name.clone())
                .unwrap_or_default(),
            categories,
            search_query: String::new(),
            selected_article_id: None,
        }
    }

    pub fn selected_article(&self) -> Option<&KnowledgeArticle> {
        let selected = self.selected_article_id.as_ref()?;
        self.articles.iter().find(|article| &article.id == selected)
    }
}

/// Static datasets behind the dashboard view.
pub struct DashboardData {
    pub headline: HeadlineStats,
    pub weekly_volume: Vec<DailyTicketVolume>,
    pub channel_distribution: Vec<ChannelShare>,
    pub recent_tickets: Vec<Ticket>,
}

impl DashboardData {
    pub fn new() -> Self {
        Self {
            headline: fixtures::headline_stats(),
            weekly_volume: fixtures::weekly_ticket_volume(),
            channel_distribution: fixtures::channel_distribution(),
            recent_tickets: fixtures::recent_tickets(),
        }
    }
}

pub struct AnalyticsData {
    pub response_times: Vec<ResponseTimeSample>,
}

impl AnalyticsData {
    pub fn new() -> Self {
        Self {
            response_times: fixtures::response_times(),
        }
    }
}

/// Everything the shell owns. Each view's state is an exclusively owned
/// field, so switching tabs cannot disturb another view.
pub struct AppState {
    pub active_view: View,
    pub ticket_search: String,
    pub chat: ChatState,
    pub knowledge: KnowledgeState,
    pub dashboard: DashboardData,
    pub analytics: AnalyticsData,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_view: View::Dashboard,
            ticket_search: String::new(),
            chat: ChatState::new(),
            knowledge: KnowledgeState::new(),
            dashboard: DashboardData::new(),
            analytics: AnalyticsData::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_one_agent_message_with_status_sent() {
        let mut chat = ChatState::new();
        let session_id = chat.selected_session_id.clone().unwrap();
        assert_eq!(chat.thread(&session_id).len(), 4);

        chat.input_text = "test".to_string();
        let scheduled = chat.send_agent_message(Utc::now());
        assert_eq!(scheduled.as_deref(), Some(session_id.as_str()));

        let thread = chat.thread(&session_id);
        assert_eq!(thread.len(), 5);
        assert_eq!(thread[4].sender, MessageSender::Agent);
        assert_eq!(thread[4].status, DeliveryStatus::Sent);
        assert_eq!(thread[4].text, "test");
        assert!(chat.input_text.is_empty());
    }

    #[test]
    fn whitespace_only_send_is_a_no_op() {
        let mut chat = ChatState::new();
        let session_id = chat.selected_session_id.clone().unwrap();

        chat.input_text = "   \t ".to_string();
        assert!(chat.send_agent_message(Utc::now()).is_none());
        assert_eq!(chat.thread(&session_id).len(), 4);
    }

    #[test]
    fn send_trims_surrounding_whitespace() {
        let mut chat = ChatState::new();
        let session_id = chat.selected_session_id.clone().unwrap();

        chat.input_text = "  hello  ".to_string();
        chat.send_agent_message(Utc::now()).unwrap();
        assert_eq!(chat.thread(&session_id)[4].text, "hello");
    }

    #[test]
    fn reply_event_clears_typing_and_appends() {
        let mut chat = ChatState::new();
        let session_id = chat.selected_session_id.clone().unwrap();

        chat.apply_event(SimulatorEvent::TypingStarted {
            session_id: session_id.clone(),
        });
        assert!(chat.is_typing(&session_id));

        chat.apply_event(SimulatorEvent::CustomerReply {
            session_id: session_id.clone(),
            message: Message {
                id: "r1".into(),
                text: "Thank you! That worked perfectly.".into(),
                sender: MessageSender::Customer,
                timestamp: Utc::now(),
                status: DeliveryStatus::Read,
            },
        });
        assert!(!chat.is_typing(&session_id));
        let thread = chat.thread(&session_id);
        assert_eq!(thread.len(), 5);
        assert_eq!(thread[4].sender, MessageSender::Customer);
    }

    #[test]
    fn typing_is_tracked_per_session() {
        let mut chat = ChatState::new();
        chat.apply_event(SimulatorEvent::TypingStarted {
            session_id: "CHT-002".to_string(),
        });
        assert!(chat.is_typing("CHT-002"));
        assert!(!chat.is_typing("CHT-001"));
    }

    #[test]
    fn selecting_a_session_keeps_its_unread_count() {
        let mut chat = ChatState::new();
        let before = chat.sessions[1].unread_count;
        chat.select_session("CHT-002");
        assert_eq!(chat.selected_session().unwrap().id, "CHT-002");
        assert_eq!(chat.sessions[1].unread_count, before);
    }

    #[test]
    fn unknown_session_id_does_not_change_selection() {
        let mut chat = ChatState::new();
        chat.select_session("CHT-999");
        assert_eq!(chat.selected_session_id.as_deref(), Some("CHT-001"));
    }

    #[test]
    fn switching_views_preserves_other_view_state() {
        let mut state = AppState::new();
        state.knowledge.selected_article_id = Some("KB-002".to_string());
        state.knowledge.search_query = "vpn".to_string();
        state.chat.select_session("CHT-003");

        state.active_view = View::Dashboard;
        state.active_view = View::Knowledge;

        assert_eq!(state.knowledge.selected_article_id.as_deref(), Some("KB-002"));
        assert_eq!(state.knowledge.search_query, "vpn");
        assert_eq!(state.chat.selected_session_id.as_deref(), Some("CHT-003"));
    }
}
