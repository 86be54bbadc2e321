use crate::{Args, RouteParams};

/// What a screen gets to see of the host each frame.
pub struct AppContext<'a> {
    pub args: &'a Args,
    pub route: &'a RouteParams,
    pub egui: &'a egui::Context,
}

pub trait App {
    /// Background processing, called every frame before rendering.
    fn update(&mut self, _ctx: &mut AppContext<'_>) {}

    /// UI rendering
    fn render(&mut self, ctx: &mut AppContext<'_>, ui: &mut egui::Ui);
}
