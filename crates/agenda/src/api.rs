//! HTTP access to the agenda API.
//!
//! The API answers with a JSON document whose value is itself a JSON
//! encoded string. [`decode_payload`] is the only place that knows about
//! this; everything above it works with typed values.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::model::{Comment, Event, EventId, NewComment};
use crate::Error;

/// Completion callback for a request. Called exactly once, possibly from
/// another thread.
pub type OnDone<T> = Box<dyn FnOnce(Result<T, Error>) + Send + 'static>;

/// Where the event screen gets its data from.
pub trait EventSource {
    fn fetch_event(&self, id: &EventId, on_done: OnDone<Event>);

    fn fetch_comments(&self, id: &EventId, on_done: OnDone<Vec<Comment>>);

    fn post_comment(&self, comment: NewComment, on_done: OnDone<Comment>);
}

/// Decode an API response body into `T`, unwrapping the extra layer of
/// JSON string encoding when present.
pub fn decode_payload<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::EmptyPayload);
    }

    match serde_json::from_slice::<Value>(bytes)? {
        Value::Null => Err(Error::EmptyPayload),
        Value::String(inner) => {
            if inner.trim().is_empty() {
                return Err(Error::EmptyPayload);
            }
            Ok(serde_json::from_str(&inner)?)
        }
        value => Ok(serde_json::from_value(value)?),
    }
}

/// Decode a comment list. A missing list (empty body, `null`, or a
/// `"null"` string) means the event has no comments yet.
pub fn decode_comments(bytes: &[u8]) -> Result<Vec<Comment>, Error> {
    match decode_payload::<Option<Vec<Comment>>>(bytes) {
        Ok(comments) => Ok(comments.unwrap_or_default()),
        Err(Error::EmptyPayload) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Decode the answer to a successful comment submission. The API may
/// accept the comment without echoing it, in which case the submitted
/// comment is used as is.
pub fn decode_posted_comment(
    bytes: &[u8],
    sent: NewComment,
    now: DateTime<Utc>,
) -> Result<Comment, Error> {
    match decode_payload(bytes) {
        Err(Error::EmptyPayload) => {
            tracing::debug!("empty answer to comment submission, using sent comment");
            Ok(sent.into_comment(now))
        }
        res => res,
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self, Error> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(Error::Generic(format!("{base} cannot be used as a base url")));
        }

        // so that joining segments never drops the last path component
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `{base}/event/{id}`
    pub fn event_url(&self, id: &EventId) -> Url {
        self.endpoint(&["event", id.as_str()])
    }

    /// `{base}/comments?eventId={id}`
    pub fn comments_url(&self, id: &EventId) -> Url {
        let mut url = self.endpoint(&["comments"]);
        url.query_pairs_mut().append_pair("eventId", id.as_str());
        url
    }

    /// `{base}/comments`
    pub fn new_comment_url(&self) -> Url {
        self.endpoint(&["comments"])
    }
}

impl EventSource for ApiClient {
    fn fetch_event(&self, id: &EventId, on_done: OnDone<Event>) {
        fetch(
            ehttp::Request::get(self.event_url(id)),
            decode_payload::<Event>,
            on_done,
        );
    }

    fn fetch_comments(&self, id: &EventId, on_done: OnDone<Vec<Comment>>) {
        fetch(
            ehttp::Request::get(self.comments_url(id)),
            decode_comments,
            on_done,
        );
    }

    fn post_comment(&self, comment: NewComment, on_done: OnDone<Comment>) {
        let body = match serde_json::to_vec(&comment) {
            Ok(body) => body,
            Err(err) => {
                on_done(Err(err.into()));
                return;
            }
        };

        let mut request = ehttp::Request::post(self.new_comment_url(), body);
        request.headers.insert("Content-Type", "application/json");
        fetch(
            request,
            move |bytes: &[u8]| decode_posted_comment(bytes, comment, Utc::now()),
            on_done,
        );
    }
}

fn fetch<T, D>(request: ehttp::Request, decode: D, on_done: OnDone<T>)
where
    T: 'static,
    D: FnOnce(&[u8]) -> Result<T, Error> + Send + 'static,
{
    let url = request.url.clone();
    tracing::debug!("{} {}", request.method, url);

    ehttp::fetch(request, move |response: Result<ehttp::Response, String>| {
        let result = response.map_err(Error::Http).and_then(|resp| {
            if !resp.ok {
                return Err(Error::status(resp.status, resp.status_text));
            }

            decode(&resp.bytes)
        });

        tracing::trace!("{url} done, ok={}", result.is_ok());
        on_done(result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_double_encoded_payload() {
        let inner = r#"{"author":"Léa","content":"Top","createdAt":"2024-06-22T08:15:00Z"}"#;
        let body = serde_json::to_vec(&format!("[{inner}]")).expect("encode");

        let comments: Vec<Comment> = decode_payload(&body).expect("decode");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "Top");
    }

    #[test]
    fn decodes_plain_payload() {
        let body = r#"[{"author":"Léa","content":"Top","createdAt":"2024-06-22T08:15:00Z"}]"#;
        let comments: Vec<Comment> = decode_payload(body.as_bytes()).expect("decode");
        assert_eq!(comments[0].author, "Léa");
    }

    #[test]
    fn empty_payloads_are_errors() {
        let bodies: [&[u8]; 4] = [b"", b"   ", b"null", b"\"\""];
        for body in bodies {
            let res: Result<Vec<Comment>, Error> = decode_payload(body);
            assert!(matches!(res, Err(Error::EmptyPayload)), "{body:?}");
        }
    }

    #[test]
    fn missing_comment_list_is_empty() {
        let bodies: [&[u8]; 5] = [b"", b"  ", b"null", b"\"null\"", b"\"\""];
        for body in bodies {
            let comments = decode_comments(body).expect("no comments");
            assert!(comments.is_empty(), "{body:?}");
        }

        let res = decode_comments(b"\"{not json\"");
        assert!(matches!(res, Err(Error::Json(_))));
    }

    #[test]
    fn event_payload_stays_strict() {
        for body in [&b"null"[..], b"\"null\""] {
            let res: Result<Event, Error> = decode_payload(body);
            assert!(res.is_err(), "{body:?}");
        }
    }

    #[test]
    fn posted_comment_falls_back_to_sent_comment() {
        let now = DateTime::parse_from_rfc3339("2024-06-22T08:15:00Z")
            .expect("date")
            .with_timezone(&Utc);
        let sent = NewComment {
            event_id: EventId::new("7"),
            author: "Tom".to_string(),
            content: "Bravo".to_string(),
        };

        let comment = decode_posted_comment(b"", sent.clone(), now).expect("comment");
        assert_eq!(comment, sent.clone().into_comment(now));

        let echoed = serde_json::to_vec(
            r#"{"id":5,"author":"Tom","content":"Bravo","createdAt":"2024-06-22T09:00:00Z","eventId":7}"#,
        )
        .expect("encode");
        let comment = decode_posted_comment(&echoed, sent.clone(), now).expect("comment");
        assert_eq!(comment.id, Some(EventId::new("5")));
        assert_ne!(comment.created_at, now);

        assert!(decode_posted_comment(b"[1, 2]", sent, now).is_err());
    }

    #[test]
    fn malformed_payload_is_json_error() {
        let body = serde_json::to_vec("{not json").expect("encode");
        let res: Result<Event, Error> = decode_payload(&body);
        assert!(matches!(res, Err(Error::Json(_))));
    }

    #[test]
    fn builds_endpoint_urls() {
        let api = ApiClient::new("https://api.example.com/v1").expect("api");
        let id = EventId::new("42");

        assert_eq!(
            api.event_url(&id).as_str(),
            "https://api.example.com/v1/event/42"
        );
        assert_eq!(
            api.comments_url(&id).as_str(),
            "https://api.example.com/v1/comments?eventId=42"
        );
        assert_eq!(
            api.new_comment_url().as_str(),
            "https://api.example.com/v1/comments"
        );
    }

    #[test]
    fn escapes_identifiers() {
        let api = ApiClient::new("http://localhost:3000/").expect("api");
        let id = EventId::new("a b/c");

        assert_eq!(
            api.event_url(&id).as_str(),
            "http://localhost:3000/event/a%20b%2Fc"
        );
        assert_eq!(
            api.comments_url(&id).as_str(),
            "http://localhost:3000/comments?eventId=a+b%2Fc"
        );
    }

    #[test]
    fn rejects_invalid_base() {
        assert!(matches!(ApiClient::new("not a url"), Err(Error::Url(_))));
        assert!(ApiClient::new("mailto:someone@example.com").is_err());
    }
}
