use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use uuid::Uuid;

use crate::common::types::{DeliveryStatus, MessageSender, SessionId};
use crate::common::{Message, SimulatorCommand, SimulatorEvent};
use crate::config::AppConfig;

/// Which half of the simulated reply a deadline drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Reply,
}

#[derive(Debug)]
struct PendingPhase {
    session_id: SessionId,
    phase: Phase,
    due: Instant,
}

/// Stands in for the customer side of a chat. For every scheduled reply
/// it emits a typing event after `typing_delay`, then the canned reply
/// after a further `reply_delay`. Phases are kept in a deadline queue
/// keyed by session id, so pending work for one session is independent
/// of every other session and can be cancelled without touching the
/// run loop.
pub struct ReplySimulator {
    event_sender: mpsc::Sender<SimulatorEvent>,
    command_receiver: mpsc::Receiver<SimulatorCommand>,
    typing_delay: Duration,
    reply_delay: Duration,
    canned_reply: String,
    pending: Vec<PendingPhase>,
}

impl ReplySimulator {
    pub fn new(
        event_sender: mpsc::Sender<SimulatorEvent>,
        command_receiver: mpsc::Receiver<SimulatorCommand>,
        config: &AppConfig,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            typing_delay: Duration::from_millis(config.typing_delay_ms),
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            canned_reply: config.canned_reply.clone(),
            pending: Vec::new(),
        }
    }

    pub async fn run(mut self) {
        log::info!("Reply simulator started");
        let mut commands_open = true;

        loop {
            if !commands_open && self.pending.is_empty() {
                break;
            }

            let next_due = self.pending.iter().map(|phase| phase.due).min();

            tokio::select! {
                command = self.command_receiver.recv(), if commands_open => {
                    match command {
                        Some(command) => self.handle_command(command),
                        // UI dropped its sender; drain remaining timers, then exit.
                        None => commands_open = false,
                    }
                }
                _ = time::sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                    if !self.fire_due().await {
                        break;
                    }
                }
            }
        }

        log::info!("Reply simulator stopped");
    }

    fn handle_command(&mut self, command: SimulatorCommand) {
        match command {
            SimulatorCommand::ScheduleReply { session_id } => {
                self.pending.push(PendingPhase {
                    session_id,
                    phase: Phase::Typing,
                    due: Instant::now() + self.typing_delay,
                });
            }
            SimulatorCommand::CancelReply { session_id } => {
                let before = self.pending.len();
                self.pending.retain(|phase| phase.session_id != session_id);
                if self.pending.len() != before {
                    log::debug!("Dropped pending reply phases for {session_id}");
                }
            }
        }
    }

    /// Fires every phase whose deadline has passed. Returns false once the
    /// UI side of the event channel is gone.
    async fn fire_due(&mut self) -> bool {
        let now = Instant::now();
        let (due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|phase| phase.due <= now);
        self.pending = rest;

        for fired in due {
            match fired.phase {
                Phase::Typing => {
                    let event = SimulatorEvent::TypingStarted {
                        session_id: fired.session_id.clone(),
                    };
                    if self.event_sender.send(event).await.is_err() {
                        log::warn!("UI event channel closed; stopping simulator");
                        return false;
                    }
                    // Anchored to the typing deadline rather than the wakeup
                    // instant, so the typing+reply spacing stays fixed even
                    // under a late tick.
                    self.pending.push(PendingPhase {
                        session_id: fired.session_id,
                        phase: Phase::Reply,
                        due: fired.due + self.reply_delay,
                    });
                }
                Phase::Reply => {
                    let message = Message {
                        id: Uuid::new_v4().to_string(),
                        text: self.canned_reply.clone(),
                        sender: MessageSender::Customer,
                        timestamp: Utc::now(),
                        status: DeliveryStatus::Read,
                    };
                    let event = SimulatorEvent::CustomerReply {
                        session_id: fired.session_id,
                        message,
                    };
                    if self.event_sender.send(event).await.is_err() {
                        log::warn!("UI event channel closed; stopping simulator");
                        return false;
                    }
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_simulator() -> (
        mpsc::Sender<SimulatorCommand>,
        mpsc::Receiver<SimulatorEvent>,
    ) {
        let (command_sender, command_receiver) = mpsc::channel(8);
        let (event_sender, event_receiver) = mpsc::channel(8);
        let simulator =
            ReplySimulator::new(event_sender, command_receiver, &AppConfig::default());
        tokio::spawn(simulator.run());
        (command_sender, event_receiver)
    }

    /// Let the spawned simulator task run until it parks again. The test
    /// runtime is single-threaded, so a handful of yields is enough.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    async fn schedule(commands: &mpsc::Sender<SimulatorCommand>, session_id: &str) {
        commands
            .send(SimulatorCommand::ScheduleReply {
                session_id: session_id.to_string(),
            })
            .await
            .unwrap();
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn typing_fires_at_one_second_not_before() {
        let (commands, mut events) = spawn_simulator();
        schedule(&commands, "CHT-001").await;

        time::advance(Duration::from_millis(999)).await;
        settle().await;
        assert!(events.try_recv().is_err());

        time::advance(Duration::from_millis(1)).await;
        settle().await;
        match events.try_recv().unwrap() {
            SimulatorEvent::TypingStarted { session_id } => assert_eq!(session_id, "CHT-001"),
            other => panic!("expected TypingStarted, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reply_fires_three_seconds_after_send() {
        let (commands, mut events) = spawn_simulator();
        schedule(&commands, "CHT-001").await;

        time::advance(Duration::from_millis(1000)).await;
        settle().await;
        assert!(matches!(
            events.try_recv().unwrap(),
            SimulatorEvent::TypingStarted { .. }
        ));

        // 2999 ms total: the reply is still pending.
        time::advance(Duration::from_millis(1999)).await;
        settle().await;
        assert!(events.try_recv().is_err());

        time::advance(Duration::from_millis(1)).await;
        settle().await;
        match events.try_recv().unwrap() {
            SimulatorEvent::CustomerReply {
                session_id,
                message,
            } => {
                assert_eq!(session_id, "CHT-001");
                assert_eq!(message.text, "Thank you! That worked perfectly.");
                assert_eq!(message.sender, MessageSender::Customer);
                assert_eq!(message.status, DeliveryStatus::Read);
            }
            other => panic!("expected CustomerReply, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_one_session_only() {
        let (commands, mut events) = spawn_simulator();
        schedule(&commands, "CHT-001").await;
        schedule(&commands, "CHT-002").await;

        commands
            .send(SimulatorCommand::CancelReply {
                session_id: "CHT-001".to_string(),
            })
            .await
            .unwrap();
        settle().await;

        time::advance(Duration::from_millis(3000)).await;
        settle().await;

        let mut received = Vec::new();
        while let Ok(event) = events.try_recv() {
            received.push(event);
        }
        assert_eq!(received.len(), 2);
        for event in received {
            let session_id = match event {
                SimulatorEvent::TypingStarted { session_id } => session_id,
                SimulatorEvent::CustomerReply { session_id, .. } => session_id,
            };
            assert_eq!(session_id, "CHT-002");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_sessions_fire_independently() {
        let (commands, mut events) = spawn_simulator();
        schedule(&commands, "CHT-001").await;
        time::advance(Duration::from_millis(500)).await;
        settle().await;
        schedule(&commands, "CHT-002").await;

        time::advance(Duration::from_millis(2500)).await;
        settle().await;
        // 3000 ms for the first session, 2500 ms for the second: first has
        // fully replied, second is still typing.
        let mut typing = 0;
        let mut replies = 0;
        while let Ok(event) = events.try_recv() {
            match event {
                SimulatorEvent::TypingStarted { .. } => typing += 1,
                SimulatorEvent::CustomerReply { session_id, .. } => {
                    assert_eq!(session_id, "CHT-001");
                    replies += 1;
                }
            }
        }
        assert_eq!(typing, 2);
        assert_eq!(replies, 1);

        time::advance(Duration::from_millis(500)).await;
        settle().await;
        match events.try_recv().unwrap() {
            SimulatorEvent::CustomerReply { session_id, .. } => assert_eq!(session_id, "CHT-002"),
            other => panic!("expected CustomerReply, got {other:?}"),
        }
    }
}
