use eframe::egui;

use crate::common::types::{Priority, SessionStatus, TicketStatus};

pub fn priority_color(priority: Priority) -> egui::Color32 {
    match priority {
        Priority::High => egui::Color32::from_rgb(220, 60, 60),
        Priority::Medium => egui::Color32::from_rgb(220, 180, 0),
        Priority::Low => egui::Color32::from_rgb(0, 180, 0),
    }
}

pub fn priority_badge(ui: &mut egui::Ui, priority: Priority) {
    ui.colored_label(priority_color(priority), priority.label());
}

pub fn session_status_color(status: SessionStatus) -> egui::Color32 {
    match status {
        SessionStatus::Active => egui::Color32::from_rgb(0, 200, 0),
        SessionStatus::Waiting => egui::Color32::from_rgb(220, 180, 0),
        SessionStatus::Resolved => egui::Color32::GRAY,
    }
}

/// Small presence dot next to a session row.
pub fn status_dot(ui: &mut egui::Ui, status: SessionStatus) {
    ui.colored_label(session_status_color(status), "●");
}

pub fn ticket_status_badge(ui: &mut egui::Ui, status: TicketStatus) {
    let color = match status {
        TicketStatus::Open => egui::Color32::from_rgb(220, 60, 60),
        TicketStatus::InProgress => egui::Color32::from_rgb(220, 180, 0),
        TicketStatus::Resolved => egui::Color32::from_rgb(0, 180, 0),
    };
    ui.colored_label(color, status.label());
}

pub fn unread_badge(ui: &mut egui::Ui, count: u32) {
    if count > 0 {
        ui.colored_label(
            egui::Color32::from_rgb(220, 60, 60),
            egui::RichText::new(format!("{count}")).strong(),
        );
    }
}
