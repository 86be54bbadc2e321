use agenda::RouteParams;
use tracing::info;

/// Current location of the app and the parameters derived from it.
pub struct Router {
    path: String,
    params: RouteParams,
}

impl Router {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            params: RouteParams::from_path(path),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn navigate(&mut self, path: &str) {
        let path = path.trim();
        if path == self.path {
            return;
        }

        info!("navigating to {path}");
        self.path = path.to_owned();
        self.params = RouteParams::from_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda::{EventId, RouteError};

    #[test]
    fn navigate_updates_params() {
        let mut router = Router::new("/calendar/1");
        assert_eq!(router.params().event_id(), Ok(EventId::new("1")));

        router.navigate(" /calendar/2 ");
        assert_eq!(router.path(), "/calendar/2");
        assert_eq!(router.params().event_id(), Ok(EventId::new("2")));

        router.navigate("/calendar");
        assert_eq!(router.params().event_id(), Err(RouteError::Missing));
    }
}
