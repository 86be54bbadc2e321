pub mod api;
mod app;
mod args;
mod error;
mod loading;
pub mod model;
mod options;
mod route;
pub mod storage;
pub mod time;

pub use api::{
    decode_comments, decode_payload, decode_posted_comment, ApiClient, EventSource, OnDone,
};
pub use app::{App, AppContext};
pub use args::{Args, API_BASE_ENV, DEFAULT_API_BASE, DEFAULT_ROUTE};
pub use error::{show_one_error_message, Error};
pub use loading::LoadingState;
pub use model::{Artist, Comment, Event, EventId, NewComment};
pub use options::AgendaOptions;
pub use route::{RouteError, RouteParam, RouteParams, EVENT_ROUTE};
pub use storage::{DataPath, DataPathType};
pub use time::{format_date, format_date_in, DateFormat};
