//! Pure mapping from screen state to what gets drawn.
//!
//! Keeping this separate from the egui code lets the rendering rules be
//! checked without a frame.

use agenda::{format_date_in, Artist, Comment, DateFormat, Error, Event, LoadingState};
use chrono::TimeZone;

pub const EVENT_ERROR: &str = "Une erreur est survenue lors du chargement de l'évènement";
pub const COMMENTS_ERROR: &str = "Une erreur est survenue lors du chargement des commentaires";

pub const PRESENTATION_TITLE: &str = "Présentation";
pub const ARTISTS_TITLE: &str = "Intervenants";
pub const COMMENTS_TITLE: &str = "Avis";

#[derive(Debug, PartialEq)]
pub enum ScreenLayout<'a> {
    Spinner,
    Error(&'static str),
    Detail(EventLayout<'a>),
}

#[derive(Debug, PartialEq)]
pub struct EventLayout<'a> {
    pub title: &'a str,
    pub date: String,
    pub category: &'a str,
    pub description: &'a str,
    pub artists: &'a [Artist],
    pub comments: CommentsLayout<'a>,
}

#[derive(Debug, PartialEq)]
pub enum CommentsLayout<'a> {
    Loading,
    Error(&'static str),
    /// Comments in received order, followed by the comment form.
    List(Vec<CommentLayout<'a>>),
}

impl CommentsLayout<'_> {
    pub fn has_form(&self) -> bool {
        matches!(self, CommentsLayout::List(_))
    }
}

#[derive(Debug, PartialEq)]
pub struct CommentLayout<'a> {
    pub author_line: String,
    pub content: &'a str,
    pub date_line: String,
}

impl<'a> CommentLayout<'a> {
    fn new<Tz: TimeZone>(comment: &'a Comment, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            author_line: format!("{} a dit :", comment.author),
            content: &comment.content,
            date_line: format!(
                "Le {}",
                format_date_in(&comment.created_at, tz, DateFormat::Full)
            ),
        }
    }
}

pub fn screen_layout<'a, Tz: TimeZone>(
    event: &'a LoadingState<Event, Error>,
    comments: &'a LoadingState<Vec<Comment>, Error>,
    tz: &Tz,
) -> ScreenLayout<'a>
where
    Tz::Offset: std::fmt::Display,
{
    let event = match event {
        LoadingState::Loading => return ScreenLayout::Spinner,
        LoadingState::Failed(_) => return ScreenLayout::Error(EVENT_ERROR),
        LoadingState::Loaded(event) => event,
    };

    let comments = match comments {
        LoadingState::Loading => CommentsLayout::Loading,
        LoadingState::Failed(_) => CommentsLayout::Error(COMMENTS_ERROR),
        LoadingState::Loaded(comments) => CommentsLayout::List(
            comments
                .iter()
                .map(|comment| CommentLayout::new(comment, tz))
                .collect(),
        ),
    };

    ScreenLayout::Detail(EventLayout {
        title: &event.name,
        date: format_date_in(&event.date, tz, DateFormat::DayMonthTime),
        category: &event.category,
        description: &event.description,
        artists: &event.artists,
        comments,
    })
}
