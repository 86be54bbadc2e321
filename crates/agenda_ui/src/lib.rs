pub mod colors;
pub mod constants;
pub mod header;
pub mod icons;
pub mod widgets;

pub use header::page_header;
pub use widgets::{avatar, background_title, form_button, inline_flash_error, pill, spinner};
