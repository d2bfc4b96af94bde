use eframe::egui;

use crate::common::types::{Message, MessageSender};

/// Scrollable message thread for the selected session, agent messages on
/// the right, customer messages on the left, with an animated typing row
/// while a simulated reply is pending.
pub fn render(ui: &mut egui::Ui, thread: &[Message], typing: bool, max_height: f32) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .max_height(max_height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in thread {
                render_bubble(ui, message);
                ui.add_space(4.0);
            }

            if typing {
                let dots = ".".repeat((ui.input(|i| i.time) * 2.0) as usize % 3 + 1);
                ui.label(egui::RichText::new(format!("typing{dots}")).weak().italics());
            }
        });
}

fn render_bubble(ui: &mut egui::Ui, message: &Message) {
    let align = match message.sender {
        MessageSender::Agent => egui::Align::Max,
        MessageSender::Customer => egui::Align::Min,
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.group(|ui| {
            ui.set_max_width(ui.available_width() * 0.7);
            ui.label(&message.text);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(message.timestamp.format("%H:%M").to_string())
                        .weak()
                        .small(),
                );
                if message.sender == MessageSender::Agent {
                    ui.label(egui::RichText::new(message.status.glyph()).weak().small());
                }
            });
        });
    });
}
