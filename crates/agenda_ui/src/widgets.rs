use egui::{Align2, Color32, FontId, Margin, RichText};

use crate::{colors, constants};

/// Rounded label used for the date and category of an event.
pub fn pill(text: &str) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        egui::Frame::new()
            .fill(colors::PILL_BG)
            .corner_radius(50.0)
            .inner_margin(Margin::symmetric(15, 5))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(text)
                        .size(constants::SMALL_SIZE)
                        .color(colors::PILL_FG),
                );
            })
            .response
    }
}

/// Section title drawn over a colored band.
pub fn background_title(label: &str) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        egui::Frame::new()
            .fill(colors::TITLE_BAND)
            .inner_margin(Margin::symmetric(8, 4))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(label.to_uppercase())
                        .size(22.0)
                        .strong()
                        .color(Color32::BLACK),
                );
            })
            .response
    }
}

/// Error banner shown in place of content that failed to load.
pub fn inline_flash_error(message: &str) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        egui::Frame::new()
            .fill(colors::ERROR_BG)
            .stroke(egui::Stroke::new(1.0, colors::ERROR_FG))
            .corner_radius(8.0)
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(message).color(colors::ERROR_FG));
            })
            .response
    }
}

pub fn spinner(size: f32) -> impl egui::Widget {
    move |ui: &mut egui::Ui| -> egui::Response {
        ui.vertical_centered(|ui| {
            ui.add(egui::Spinner::new().size(size).color(colors::SPINNER));
        })
        .response
    }
}

/// Round avatar with the first letter of `name`.
pub fn avatar(name: &str, size: f32) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
        let painter = ui.painter();
        let radius = size / 2.0;

        painter.circle_filled(rect.center(), radius, colors::AVATAR_BG);
        painter.circle_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(3.0, Color32::WHITE),
        );

        let initial: String = name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();

        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            initial,
            FontId::proportional(size * 0.45),
            Color32::WHITE,
        );

        response
    }
}

/// Rounded submit button. Greyed out and inert while `enabled` is false.
pub fn form_button(text: &str, fill: Color32, enabled: bool) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        let label = RichText::new(text)
            .size(constants::BODY_SIZE)
            .color(Color32::WHITE);

        let button = egui::Button::new(label)
            .fill(fill)
            .corner_radius(8.0)
            .min_size(egui::vec2(120.0, 36.0));

        ui.add_enabled(enabled, button)
            .on_disabled_hover_text("Renseignez votre nom et votre avis")
    }
}
