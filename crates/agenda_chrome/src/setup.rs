use eframe::NativeOptions;

use crate::theme;

pub fn generate_native_options(is_mobile: bool) -> NativeOptions {
    let viewport = egui::ViewportBuilder::default().with_title("Agenda");
    let viewport = if is_mobile {
        viewport.with_inner_size([405.0, 915.0])
    } else {
        viewport.with_inner_size([480.0, 900.0])
    };

    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}

pub fn setup_cc(ctx: &egui::Context, light: bool) {
    ctx.set_visuals_of(egui::Theme::Dark, theme::dark_mode());
    ctx.set_visuals_of(egui::Theme::Light, theme::light_mode());
    ctx.set_theme(if light {
        egui::Theme::Light
    } else {
        egui::Theme::Dark
    });
}
