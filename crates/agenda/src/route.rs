use std::collections::HashMap;

use crate::model::EventId;

/// Path prefix of the event detail screen.
pub const EVENT_ROUTE: &str = "calendar";

/// A route parameter as handed over by the router. Catch-all routes
/// produce several segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParam {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("missing route parameter")]
    Missing,

    #[error("empty route parameter")]
    Empty,

    #[error("expected a single identifier, got {0}")]
    Ambiguous(usize),
}

impl RouteParam {
    /// Collapse the parameter into a single event identifier.
    pub fn normalize(&self) -> Result<EventId, RouteError> {
        let raw = match self {
            RouteParam::Single(s) => s.as_str(),
            RouteParam::Many(segments) => match segments.as_slice() {
                [] => return Err(RouteError::Empty),
                [one] => one.as_str(),
                many => return Err(RouteError::Ambiguous(many.len())),
            },
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RouteError::Empty);
        }

        Ok(EventId::new(trimmed))
    }
}

/// The parameters of the current navigation context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, RouteParam>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, param: RouteParam) -> Self {
        self.params.insert(key.into(), param);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RouteParam> {
        self.params.get(key)
    }

    /// Parse a screen path such as `/calendar/42`. Everything after the
    /// `calendar` segment becomes the `id` parameter.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        if segments.next() != Some(EVENT_ROUTE) {
            return Self::default();
        }

        let rest: Vec<String> = segments.map(str::to_owned).collect();
        let param = match rest.len() {
            0 => return Self::default(),
            1 => RouteParam::Single(rest[0].clone()),
            _ => RouteParam::Many(rest),
        };

        Self::default().with("id", param)
    }

    /// Normalized event identifier under the `id` key.
    pub fn event_id(&self) -> Result<EventId, RouteError> {
        self.get("id").ok_or(RouteError::Missing)?.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_param_normalizes() {
        let param = RouteParam::Single(" 42 ".to_string());
        assert_eq!(param.normalize(), Ok(EventId::new("42")));
    }

    #[test]
    fn one_element_array_normalizes() {
        let param = RouteParam::Many(vec!["42".to_string()]);
        assert_eq!(param.normalize(), Ok(EventId::new("42")));
    }

    #[test]
    fn invalid_arrays_are_rejected() {
        assert_eq!(RouteParam::Many(vec![]).normalize(), Err(RouteError::Empty));
        assert_eq!(
            RouteParam::Many(vec!["1".to_string(), "2".to_string()]).normalize(),
            Err(RouteError::Ambiguous(2))
        );
        assert_eq!(
            RouteParam::Single("   ".to_string()).normalize(),
            Err(RouteError::Empty)
        );
    }

    #[test]
    fn params_from_path() {
        assert_eq!(
            RouteParams::from_path("/calendar/42").get("id"),
            Some(&RouteParam::Single("42".to_string()))
        );
        assert_eq!(
            RouteParams::from_path("calendar/a/b?x=1").get("id"),
            Some(&RouteParam::Many(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(
            RouteParams::from_path("/calendar").event_id(),
            Err(RouteError::Missing)
        );
        assert_eq!(
            RouteParams::from_path("/search/42").event_id(),
            Err(RouteError::Missing)
        );
    }
}
