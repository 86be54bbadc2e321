//! Wire models for the agenda API.
//!
//! Field names follow the API's camelCase JSON. Identifiers are accepted
//! either as JSON strings or integers and are kept as strings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of an event, normalized to a single string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EventId(s),
            RawId::Integer(n) => EventId(n.to_string()),
        })
    }
}

impl Serialize for EventId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A performer or speaker attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A calendar entry (`Evenement` on the API side).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    /// Category label, `type` on the wire.
    #[serde(rename = "type", default)]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artists: Vec<Artist>,
}

/// User-submitted text tied to one event (`Commentaire` on the API side).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<EventId>,
}

/// Body of a comment submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub event_id: EventId,
    pub author: String,
    pub content: String,
}

impl NewComment {
    /// The comment as it was stored, when the API does not echo it back.
    pub fn into_comment(self, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id: None,
            author: self.author,
            content: self.content,
            created_at,
            event_id: Some(self.event_id),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn event_from_api_json() {
        let json = r#"{
            "id": 12,
            "name": "Concert d'ouverture",
            "description": "Soirée de lancement",
            "date": "2024-06-21T19:30:00.000Z",
            "type": "Concert",
            "artists": [
                {"name": "Les Voix", "description": "Chorale"},
                {"name": "DJ Nord", "description": "Set électro"}
            ]
        }"#;

        let event: Event = serde_json::from_str(json).expect("event");
        assert_eq!(event.id, EventId::new("12"));
        assert_eq!(event.category, "Concert");
        assert_eq!(
            event.date,
            Utc.with_ymd_and_hms(2024, 6, 21, 19, 30, 0).unwrap()
        );
        assert_eq!(
            event.artists.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            vec!["Les Voix", "DJ Nord"]
        );
    }

    #[test]
    fn event_without_artists() {
        let json = r#"{"id":"a1","name":"Atelier","date":"2024-06-21T10:00:00Z","type":"Atelier","artists":null}"#;
        let event: Event = serde_json::from_str(json).expect("event");
        assert!(event.artists.is_empty());
        assert_eq!(event.description, "");

        let json = r#"{"id":"a1","name":"Atelier","date":"2024-06-21T10:00:00Z"}"#;
        let event: Event = serde_json::from_str(json).expect("event");
        assert!(event.artists.is_empty());
    }

    #[test]
    fn comment_from_api_json() {
        let json = r#"{"id":3,"author":"Léa","content":"Super soirée","createdAt":"2024-06-22T08:15:00Z","eventId":12}"#;
        let comment: Comment = serde_json::from_str(json).expect("comment");
        assert_eq!(comment.author, "Léa");
        assert_eq!(comment.event_id, Some(EventId::new("12")));
    }

    #[test]
    fn new_comment_wire_names() {
        let body = NewComment {
            event_id: EventId::new("12"),
            author: "Léa".to_string(),
            content: "Merci".to_string(),
        };

        let value = serde_json::to_value(&body).expect("json");
        assert_eq!(
            value,
            serde_json::json!({"eventId": "12", "author": "Léa", "content": "Merci"})
        );
    }

    #[test]
    fn new_comment_into_comment() {
        let created_at = DateTime::parse_from_rfc3339("2024-06-22T08:15:00Z")
            .expect("date")
            .with_timezone(&Utc);
        let comment = NewComment {
            event_id: EventId::new("12"),
            author: "Léa".to_string(),
            content: "Merci".to_string(),
        }
        .into_comment(created_at);

        assert_eq!(comment.id, None);
        assert_eq!(comment.author, "Léa");
        assert_eq!(comment.content, "Merci");
        assert_eq!(comment.created_at, created_at);
        assert_eq!(comment.event_id, Some(EventId::new("12")));
    }
}
