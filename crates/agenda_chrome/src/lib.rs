mod app;
pub mod router;
pub mod setup;
pub mod theme;

pub use app::Agenda;
