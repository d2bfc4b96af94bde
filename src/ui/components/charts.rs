//! Painter-drawn charts. Scaling is linear against the largest value in
//! each series; styling here is presentation only.

use eframe::egui;

use crate::common::types::{ChannelShare, DailyTicketVolume, ResponseTimeSample};

const NEW_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 140, 240);
const RESOLVED_COLOR: egui::Color32 = egui::Color32::from_rgb(70, 190, 120);
const PENDING_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 190, 60);

const LABEL_BAND: f32 = 14.0;

/// Grouped bars, one cluster of new/resolved/pending per day.
pub fn weekly_volume_bars(ui: &mut egui::Ui, rows: &[DailyTicketVolume]) {
    if rows.is_empty() {
        return;
    }

    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), 200.0), egui::Sense::hover());
    let rect = response.rect.shrink(4.0);
    let plot_bottom = rect.bottom() - LABEL_BAND;
    let plot_height = plot_bottom - rect.top();

    let max = rows
        .iter()
        .map(|row| row.new.max(row.resolved).max(row.pending))
        .max()
        .unwrap_or(0)
        .max(1) as f32;
    let group_width = rect.width() / rows.len() as f32;
    let bar_width = (group_width - 10.0) / 3.0;

    for (i, row) in rows.iter().enumerate() {
        let left = rect.left() + i as f32 * group_width + 5.0;
        let series = [
            (row.new, NEW_COLOR),
            (row.resolved, RESOLVED_COLOR),
            (row.pending, PENDING_COLOR),
        ];
        for (j, (value, color)) in series.into_iter().enumerate() {
            let height = value as f32 / max * plot_height;
            let bar = egui::Rect::from_min_max(
                egui::pos2(left + j as f32 * bar_width, plot_bottom - height),
                egui::pos2(left + (j + 1) as f32 * bar_width - 1.0, plot_bottom),
            );
            painter.rect_filled(bar, egui::CornerRadius::same(1), color);
        }
        painter.text(
            egui::pos2(rect.left() + (i as f32 + 0.5) * group_width, rect.bottom()),
            egui::Align2::CENTER_BOTTOM,
            &row.day,
            egui::FontId::proportional(10.0),
            ui.visuals().weak_text_color(),
        );
    }

    ui.horizontal(|ui| {
        ui.colored_label(NEW_COLOR, "■ New");
        ui.colored_label(RESOLVED_COLOR, "■ Resolved");
        ui.colored_label(PENDING_COLOR, "■ Pending");
    });
}

/// Single line with point markers and hour labels.
pub fn response_time_line(ui: &mut egui::Ui, samples: &[ResponseTimeSample]) {
    if samples.len() < 2 {
        return;
    }

    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), 240.0), egui::Sense::hover());
    let rect = response.rect.shrink(8.0);
    let plot_bottom = rect.bottom() - LABEL_BAND;
    let plot_height = plot_bottom - rect.top();

    let max = samples
        .iter()
        .map(|sample| sample.avg_hours)
        .fold(0.0_f32, f32::max)
        .max(1.0);
    let step = rect.width() / (samples.len() - 1) as f32;

    let points: Vec<egui::Pos2> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            egui::pos2(
                rect.left() + i as f32 * step,
                plot_bottom - sample.avg_hours / max * plot_height,
            )
        })
        .collect();

    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], egui::Stroke::new(2.0, NEW_COLOR));
    }
    for (point, sample) in points.iter().zip(samples) {
        painter.circle_filled(*point, 3.0, NEW_COLOR);
        painter.text(
            egui::pos2(point.x, rect.bottom()),
            egui::Align2::CENTER_BOTTOM,
            &sample.hour,
            egui::FontId::proportional(10.0),
            ui.visuals().weak_text_color(),
        );
    }
}

/// Channel mix as labelled percentage bars.
pub fn channel_share_bars(ui: &mut egui::Ui, shares: &[ChannelShare]) {
    for share in shares {
        ui.label(format!(
            "{} {}",
            share.channel.glyph(),
            share.channel.label()
        ));
        ui.add(
            egui::ProgressBar::new(share.percent as f32 / 100.0)
                .text(format!("{}%", share.percent)),
        );
        ui.add_space(6.0);
    }
}
