/// Horizontal padding of the detail sheet
pub const DETAIL_PADDING: i8 = 30;

/// Space above the detail sheet, the avatar overlaps it
pub const DETAIL_TOP_MARGIN: f32 = 82.0;

pub const AVATAR_SIZE: f32 = 100.0;

/// Vertical gap after a section body
pub const SECTION_GAP: f32 = 59.0;

pub const TITLE_SIZE: f32 = 35.0;
pub const BODY_SIZE: f32 = 16.0;
pub const SMALL_SIZE: f32 = 12.0;
pub const TINY_SIZE: f32 = 10.0;
