use egui::Color32;

pub const PILL_BG: Color32 = Color32::from_rgb(0xBE, 0xB8, 0xAC);
pub const PILL_FG: Color32 = Color32::WHITE;
pub const SPINNER: Color32 = Color32::from_rgb(0x00, 0x00, 0xFF);
pub const TITLE_BAND: Color32 = Color32::from_rgb(0xE8, 0xE2, 0xD6);
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFD, 0xEC, 0xEC);
pub const ERROR_FG: Color32 = Color32::from_rgb(0xB0, 0x1E, 0x1E);
pub const AVATAR_BG: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x3A);
pub const ACCENT: Color32 = Color32::from_rgb(0x82, 0x56, 0xDD);

/// Translucent sheet drawn over the background.
pub fn detail_panel_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_black_alpha(204)
    } else {
        Color32::from_white_alpha(204)
    }
}
