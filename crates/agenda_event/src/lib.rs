mod comment_form;
pub mod layout;
mod screen;
mod ui;

pub use comment_form::{CommentForm, CommentFormAction};
pub use layout::{CommentLayout, CommentsLayout, EventLayout, ScreenLayout};
pub use screen::EventScreen;
