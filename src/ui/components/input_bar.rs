use eframe::egui;

/// Message input row. Returns true when a send was requested, either by
/// clicking Send or pressing Enter; the caller decides whether the buffer
/// actually contains anything worth sending.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type your message...")
                .desired_width(ui.available_width() - 64.0),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });
    send
}
