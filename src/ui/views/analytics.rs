use eframe::egui;

use crate::ui::components::charts;
use crate::ui::state::AnalyticsData;

pub fn render(ui: &mut egui::Ui, data: &AnalyticsData) {
    ui.heading("Analytics Dashboard");
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("Response Time Trends");
        charts::response_time_line(ui, &data.response_times);
        ui.label(egui::RichText::new("Avg response time (hours)").weak().small());
    });
}
