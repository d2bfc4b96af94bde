use crate::common::types::{Message, SessionId};

/// Events the reply simulator sends back up to the UI.
#[derive(Debug, Clone)]
pub enum SimulatorEvent {
    /// The simulated customer started typing in a session.
    TypingStarted { session_id: SessionId },
    /// The simulated customer finished typing and replied. Implies the
    /// typing indicator for the session is cleared.
    CustomerReply { session_id: SessionId, message: Message },
}
