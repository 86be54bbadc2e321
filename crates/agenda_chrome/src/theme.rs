use agenda_ui::colors;
use egui::{Color32, Visuals};

const DARK_BG: Color32 = Color32::from_rgb(0x1F, 0x1F, 0x1F);
const LIGHT_BG: Color32 = Color32::from_rgb(0xF8, 0xF8, 0xF8);

pub fn light_mode() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = LIGHT_BG;
    visuals.hyperlink_color = colors::ACCENT;
    visuals.selection.bg_fill = colors::ACCENT.gamma_multiply(0.4);
    visuals.error_fg_color = colors::ERROR_FG;
    visuals
}

pub fn dark_mode() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = DARK_BG;
    visuals.hyperlink_color = colors::ACCENT;
    visuals.selection.bg_fill = colors::ACCENT.gamma_multiply(0.6);
    visuals
}
