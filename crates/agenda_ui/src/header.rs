use egui::{FontId, RichText};

use crate::colors;

/// Top bar showing the app wordmark.
pub fn page_header(ui: &mut egui::Ui) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("AGENDA")
                .font(FontId::proportional(28.0))
                .strong()
                .color(colors::ACCENT),
        );
    })
    .response
}
