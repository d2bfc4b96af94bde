use eframe::egui;

use crate::ui::components::badges;
use crate::ui::state::ChatState;

/// Sidebar listing all chat sessions. Clicking a row selects it; the
/// unread count is intentionally left untouched by selection.
pub fn render(ui: &mut egui::Ui, chat: &mut ChatState) {
    ui.heading("Active Chats");
    ui.label(egui::RichText::new(format!("{} conversations", chat.sessions.len())).weak());
    ui.separator();

    let selected = chat.selected_session_id.clone();
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for session in &chat.sessions {
                let is_selected = selected.as_deref() == Some(session.id.as_str());

                ui.horizontal(|ui| {
                    badges::status_dot(ui, session.status);
                    if ui
                        .selectable_label(
                            is_selected,
                            egui::RichText::new(&session.customer_name).strong(),
                        )
                        .clicked()
                    {
                        clicked = Some(session.id.clone());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badges::unread_badge(ui, session.unread_count);
                    });
                });
                ui.label(egui::RichText::new(&session.last_message).weak().small());
                ui.horizontal(|ui| {
                    badges::priority_badge(ui, session.priority);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(session.timestamp.format("%H:%M").to_string())
                                .weak()
                                .small(),
                        );
                    });
                });
                ui.separator();
            }
        });

    if let Some(session_id) = clicked {
        chat.select_session(&session_id);
    }
}
