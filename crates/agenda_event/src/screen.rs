use agenda::{
    App, AppContext, Comment, Error, Event, EventId, EventSource, LoadingState, NewComment,
    OnDone, RouteError, RouteParams,
};
use chrono::{Local, TimeZone};
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, error, info};

use crate::comment_form::{CommentForm, CommentFormAction, SUBMIT_ERROR};
use crate::layout::{screen_layout, ScreenLayout};
use crate::ui::screen_ui;

/// Result of one request, tagged with the generation it was issued under.
struct Completion {
    generation: u64,
    loaded: Loaded,
}

enum Loaded {
    Event(Result<Event, Error>),
    Comments(Result<Vec<Comment>, Error>),
    CommentPosted(Result<Comment, Error>),
}

/// Detail screen for one event and its comments.
///
/// The event and comment loads are issued together whenever the route
/// identifier changes. Each change bumps `generation`; completions carrying
/// an older generation are dropped when drained, so a slow response for a
/// previous identifier can never overwrite the current one.
pub struct EventScreen {
    source: Box<dyn EventSource>,
    route: Option<Result<EventId, RouteError>>,
    generation: u64,
    event: LoadingState<Event, Error>,
    comments: LoadingState<Vec<Comment>, Error>,
    form: CommentForm,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    waker: Option<egui::Context>,
}

impl EventScreen {
    pub fn new(source: impl EventSource + 'static) -> Self {
        let (tx, rx) = unbounded();
        Self {
            source: Box::new(source),
            route: None,
            generation: 0,
            event: LoadingState::Loading,
            comments: LoadingState::Loading,
            form: CommentForm::default(),
            tx,
            rx,
            waker: None,
        }
    }

    /// Repaint `ctx` whenever a request completes.
    pub fn set_waker(&mut self, ctx: egui::Context) {
        self.waker = Some(ctx);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn event(&self) -> &LoadingState<Event, Error> {
        &self.event
    }

    pub fn comments(&self) -> &LoadingState<Vec<Comment>, Error> {
        &self.comments
    }

    pub fn form(&self) -> &CommentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CommentForm {
        &mut self.form
    }

    /// The normalized identifier of the current route, if it is valid.
    pub fn event_id(&self) -> Option<&EventId> {
        self.route.as_ref()?.as_ref().ok()
    }

    /// Sync with the navigation context. Loads only run when the
    /// normalized identifier differs from the last one seen.
    pub fn navigate(&mut self, params: &RouteParams) {
        let route = params.event_id();
        if self.route.as_ref() == Some(&route) {
            return;
        }

        self.generation += 1;
        self.event = LoadingState::Loading;
        self.comments = LoadingState::Loading;
        self.form = CommentForm::default();

        match &route {
            Ok(id) => {
                info!("EventScreen: loading event {id} (generation {})", self.generation);
                self.load_event(id);
                self.load_comments(id);
            }
            Err(err) => {
                error!("EventScreen: invalid route {params:?}: {err}");
                self.event = LoadingState::Failed(Error::Route(err.clone()));
                self.comments = LoadingState::Failed(Error::Route(err.clone()));
            }
        }

        self.route = Some(route);
    }

    fn completion<T: Send + 'static>(&self, wrap: fn(Result<T, Error>) -> Loaded) -> OnDone<T> {
        let tx = self.tx.clone();
        let generation = self.generation;
        let waker = self.waker.clone();

        Box::new(move |result: Result<T, Error>| {
            // the screen may have been dropped already, nothing to do then
            let _ = tx.send(Completion {
                generation,
                loaded: wrap(result),
            });

            if let Some(ctx) = waker {
                ctx.request_repaint();
            }
        })
    }

    fn load_event(&self, id: &EventId) {
        self.source.fetch_event(id, self.completion(Loaded::Event));
    }

    fn load_comments(&self, id: &EventId) {
        self.source
            .fetch_comments(id, self.completion(Loaded::Comments));
    }

    /// Post a comment for the current event. Stays on the current
    /// generation, so a navigation in between discards the answer.
    pub fn submit_comment(&mut self, comment: NewComment) {
        self.form.begin_submit();
        self.source
            .post_comment(comment, self.completion(Loaded::CommentPosted));
    }

    /// Drain finished requests into the screen state.
    #[profiling::function]
    pub fn poll(&mut self) {
        while let Ok(completion) = self.rx.try_recv() {
            if completion.generation != self.generation {
                debug!(
                    "EventScreen: discarding stale completion (generation {} != {})",
                    completion.generation, self.generation
                );
                continue;
            }

            self.apply(completion.loaded);
        }
    }

    fn apply(&mut self, loaded: Loaded) {
        match loaded {
            Loaded::Event(Ok(event)) => {
                self.event = LoadingState::Loaded(event);
            }
            Loaded::Event(Err(err)) => {
                error!("EventScreen: failed to load event: {err}");
                self.event = LoadingState::Failed(err);
            }
            Loaded::Comments(Ok(comments)) => {
                debug!("EventScreen: {} comments", comments.len());
                self.comments = LoadingState::Loaded(comments);
            }
            Loaded::Comments(Err(err)) => {
                error!("EventScreen: failed to load comments: {err}");
                self.comments = LoadingState::Failed(err);
            }
            Loaded::CommentPosted(Ok(comment)) => {
                if let Some(comments) = self.comments.loaded_mut() {
                    comments.push(comment);
                }
                self.form.submitted();
            }
            Loaded::CommentPosted(Err(err)) => {
                error!("EventScreen: failed to post comment: {err}");
                self.form.failed(SUBMIT_ERROR);
            }
        }
    }

    pub fn layout_in<Tz: TimeZone>(&self, tz: &Tz) -> ScreenLayout<'_>
    where
        Tz::Offset: std::fmt::Display,
    {
        screen_layout(&self.event, &self.comments, tz)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let layout = screen_layout(&self.event, &self.comments, &Local);
        let event_id = self.route.as_ref().and_then(|r| r.as_ref().ok());

        let action = screen_ui(ui, &layout, &mut self.form, event_id);

        if let Some(CommentFormAction::Submit(comment)) = action {
            self.submit_comment(comment);
        }
    }
}

impl App for EventScreen {
    fn update(&mut self, ctx: &mut AppContext<'_>) {
        if self.waker.is_none() {
            self.set_waker(ctx.egui.clone());
        }

        self.navigate(ctx.route);
        self.poll();
    }

    fn render(&mut self, _ctx: &mut AppContext<'_>, ui: &mut egui::Ui) {
        self.ui(ui);
    }
}
