use chrono::Utc;
use eframe::egui;

use crate::common::types::SessionId;
use crate::ui::components::{badges, chat_area, input_bar, session_list};
use crate::ui::state::ChatState;

/// Unified inbox: session sidebar plus the live chat for the selected
/// session. Returns a session id when the agent sent a message and a
/// simulated reply should be scheduled.
pub fn render(ui: &mut egui::Ui, chat: &mut ChatState) -> Option<SessionId> {
    ui.heading("Unified Inbox");
    ui.add_space(4.0);

    egui::SidePanel::left("session_sidebar")
        .resizable(true)
        .default_width(260.0)
        .show_inside(ui, |ui| session_list::render(ui, chat));

    let mut scheduled = None;
    egui::CentralPanel::default().show_inside(ui, |ui| {
        let Some(session) = chat.selected_session().cloned() else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Select a conversation");
                ui.label(
                    egui::RichText::new("Choose a chat from the sidebar to start messaging")
                        .weak(),
                );
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(session.initials()).strong());
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&session.customer_name).strong());
                ui.label(egui::RichText::new(&session.customer_email).weak().small());
            });
            badges::priority_badge(ui, session.priority);
            ui.label(egui::RichText::new("priority").weak().small());
        });
        ui.separator();

        let input_height = 36.0;
        let chat_height = (ui.available_height() - input_height).max(60.0);
        chat_area::render(
            ui,
            chat.thread(&session.id),
            chat.is_typing(&session.id),
            chat_height,
        );

        ui.separator();
        if input_bar::render(ui, &mut chat.input_text) {
            scheduled = chat.send_agent_message(Utc::now());
        }
    });

    scheduled
}
