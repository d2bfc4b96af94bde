//! Drives the chat state and the reply simulator together, the way the
//! app wires them, using a paused clock.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time;

use helpdesk_dashboard::common::types::{DeliveryStatus, MessageSender};
use helpdesk_dashboard::common::{SimulatorCommand, SimulatorEvent};
use helpdesk_dashboard::config::AppConfig;
use helpdesk_dashboard::simulation::ReplySimulator;
use helpdesk_dashboard::ui::state::AppState;

/// Let the spawned simulator task run until it parks again.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn drain(state: &mut AppState, events: &mut mpsc::Receiver<SimulatorEvent>) {
    while let Ok(event) = events.try_recv() {
        state.chat.apply_event(event);
    }
}

#[tokio::test(start_paused = true)]
async fn send_then_simulated_reply_round_trip() {
    let mut state = AppState::new();
    let (command_sender, command_receiver) = mpsc::channel(8);
    let (event_sender, mut events) = mpsc::channel(8);
    let simulator = ReplySimulator::new(event_sender, command_receiver, &AppConfig::default());
    tokio::spawn(simulator.run());

    let session_id = state.chat.selected_session_id.clone().unwrap();
    assert_eq!(state.chat.thread(&session_id).len(), 4);

    state.chat.input_text = "test".to_string();
    let scheduled = state.chat.send_agent_message(Utc::now()).unwrap();
    assert_eq!(scheduled, session_id);
    command_sender
        .send(SimulatorCommand::ScheduleReply {
            session_id: scheduled,
        })
        .await
        .unwrap();
    settle().await;

    // The agent message is visible immediately.
    {
        let thread = state.chat.thread(&session_id);
        assert_eq!(thread.len(), 5);
        assert_eq!(thread[4].sender, MessageSender::Agent);
        assert_eq!(thread[4].status, DeliveryStatus::Sent);
        assert_eq!(thread[4].text, "test");
    }
    assert!(!state.chat.is_typing(&session_id));

    // 1000 ms: the customer starts typing, nothing is appended yet.
    time::advance(Duration::from_millis(1000)).await;
    settle().await;
    drain(&mut state, &mut events);
    assert!(state.chat.is_typing(&session_id));
    assert_eq!(state.chat.thread(&session_id).len(), 5);

    // 3000 ms total: typing clears and the canned reply lands.
    time::advance(Duration::from_millis(2000)).await;
    settle().await;
    drain(&mut state, &mut events);
    assert!(!state.chat.is_typing(&session_id));

    let thread = state.chat.thread(&session_id);
    assert_eq!(thread.len(), 6);
    assert_eq!(thread[5].sender, MessageSender::Customer);
    assert_eq!(thread[5].status, DeliveryStatus::Read);
    assert_eq!(thread[5].text, "Thank you! That worked perfectly.");

    // Insertion order is preserved end to end.
    for pair in thread.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[tokio::test(start_paused = true)]
async fn switching_sessions_does_not_cancel_a_pending_reply() {
    let mut state = AppState::new();
    let (command_sender, command_receiver) = mpsc::channel(8);
    let (event_sender, mut events) = mpsc::channel(8);
    let simulator = ReplySimulator::new(event_sender, command_receiver, &AppConfig::default());
    tokio::spawn(simulator.run());

    let first = state.chat.selected_session_id.clone().unwrap();
    state.chat.input_text = "on my way".to_string();
    let scheduled = state.chat.send_agent_message(Utc::now()).unwrap();
    command_sender
        .send(SimulatorCommand::ScheduleReply {
            session_id: scheduled,
        })
        .await
        .unwrap();
    settle().await;

    // The agent moves to another conversation while the reply is pending.
    state.chat.select_session("CHT-002");

    time::advance(Duration::from_millis(3000)).await;
    settle().await;
    drain(&mut state, &mut events);

    // The reply still lands in the original session's thread.
    let thread = state.chat.thread(&first);
    assert_eq!(thread.len(), 6);
    assert_eq!(thread[5].sender, MessageSender::Customer);
    assert!(state.chat.thread("CHT-002").is_empty());
    assert!(!state.chat.is_typing("CHT-002"));
}
