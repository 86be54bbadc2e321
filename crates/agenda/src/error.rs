use std::io;

use crate::route::RouteError;

/// App related errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("http error: {0}")]
    Http(String),

    #[error("bad http response: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty payload")]
    EmptyPayload,

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("generic error: {0}")]
    Generic(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

impl Error {
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Error::Status {
            status,
            status_text: status_text.into(),
        }
    }
}

/// Log an error message once per widget id instead of every frame.
pub fn show_one_error_message(ui: &mut egui::Ui, message: &str) {
    let id = ui.id().with(("error", message));
    let res: Option<()> = ui.ctx().data(|d| d.get_temp(id));

    if res.is_none() {
        ui.ctx().data_mut(|d| d.insert_temp(id, ()));
        tracing::error!(message);
    }
}
