use eframe::egui;
use tokio::sync::mpsc;

use crate::common::types::SessionId;
use crate::common::{SimulatorCommand, SimulatorEvent};

use super::state::{AppState, View};
use super::views::{analytics, dashboard, knowledge, tickets};

pub struct HelpDeskApp {
    state: AppState,
    command_sender: mpsc::Sender<SimulatorCommand>,
    event_receiver: mpsc::Receiver<SimulatorEvent>,
}

impl HelpDeskApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<SimulatorCommand>,
        event_receiver: mpsc::Receiver<SimulatorEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        }
    }

    fn drain_simulator_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.chat.apply_event(event);
        }
    }

    fn schedule_reply(&mut self, session_id: SessionId) {
        if let Err(err) = self
            .command_sender
            .try_send(SimulatorCommand::ScheduleReply { session_id })
        {
            log::warn!("Failed to send command to simulator: {err}");
        }
    }

    fn render_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🎧 ICT Help Desk");
                ui.separator();
                for view in View::ALL {
                    if ui
                        .selectable_label(self.state.active_view == view, view.label())
                        .clicked()
                    {
                        self.state.active_view = view;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.ticket_search)
                            .hint_text("Search tickets...")
                            .desired_width(200.0),
                    );
                });
            });
        });
    }
}

impl eframe::App for HelpDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_simulator_events();
        self.render_nav(ctx);

        let mut scheduled = None;
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_view {
            View::Dashboard => dashboard::render(ui, &self.state.dashboard),
            View::Tickets => scheduled = tickets::render(ui, &mut self.state.chat),
            View::Analytics => analytics::render(ui, &self.state.analytics),
            View::Knowledge => knowledge::render(ui, &mut self.state.knowledge),
        });

        if let Some(session_id) = scheduled {
            self.schedule_reply(session_id);
        }

        // Simulator events arrive without user input; keep polling for
        // them even when the pointer is idle.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
