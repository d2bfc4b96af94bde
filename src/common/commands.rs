use crate::common::types::SessionId;

/// Commands the UI sends down to the reply simulator.
#[derive(Debug, Clone)]
pub enum SimulatorCommand {
    /// Start the typing/reply sequence for a session the agent just
    /// messaged.
    ScheduleReply { session_id: SessionId },
    /// Drop any pending phases for a session. The shell deliberately does
    /// not issue this on session switch (pending replies fire to
    /// completion, matching the original behavior); it exists so that
    /// wiring cancellation in later is a one-line change.
    CancelReply { session_id: SessionId },
}
