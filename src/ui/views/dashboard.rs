use eframe::egui;

use crate::ui::components::{badges, charts};
use crate::ui::state::DashboardData;

pub fn render(ui: &mut egui::Ui, data: &DashboardData) {
    let headline = &data.headline;

    ui.columns(4, |cols| {
        stat_card(
            &mut cols[0],
            "Open Tickets",
            format!("{}", headline.open_tickets),
            format!("{:+}% from yesterday", headline.open_delta_pct),
        );
        stat_card(
            &mut cols[1],
            "Avg Response Time",
            format!("{:.1}h", headline.avg_response_hours),
            format!("{}% improvement", headline.response_delta_pct),
        );
        stat_card(
            &mut cols[2],
            "Resolved Today",
            format!("{}", headline.resolved_today),
            format!("Goal: {} tickets", headline.resolved_goal),
        );
        stat_card(
            &mut cols[3],
            "Customer Satisfaction",
            format!("{:.1}/5", headline.satisfaction),
            format!("{:+.1} from last week", headline.satisfaction_delta),
        );
    });

    ui.add_space(8.0);
    ui.columns(2, |cols| {
        cols[0].group(|ui| {
            ui.heading("Weekly Ticket Volume");
            charts::weekly_volume_bars(ui, &data.weekly_volume);
        });
        cols[1].group(|ui| {
            ui.heading("Channel Distribution");
            charts::channel_share_bars(ui, &data.channel_distribution);
        });
    });

    ui.add_space(8.0);
    ui.group(|ui| {
        ui.heading("Recent Tickets");
        ui.separator();
        for ticket in &data.recent_tickets {
            ui.horizontal(|ui| {
                ui.label(ticket.channel.glyph());
                ui.label(egui::RichText::new(&ticket.id).monospace().weak());
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&ticket.title).strong());
                    ui.label(egui::RichText::new(&ticket.customer).weak().small());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(format!("Agent: {}", ticket.agent)).strong());
                    ui.label(egui::RichText::new(&ticket.age).weak());
                    badges::ticket_status_badge(ui, ticket.status);
                    badges::priority_badge(ui, ticket.priority);
                });
            });
            ui.separator();
        }
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: String, note: String) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(title).weak());
        ui.label(egui::RichText::new(value).heading().strong());
        ui.label(egui::RichText::new(note).weak().small());
    });
}
