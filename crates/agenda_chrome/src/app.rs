use agenda::{show_one_error_message, App, AppContext, Args, Error};
use agenda_ui::{inline_flash_error, page_header};
use egui::Margin;

use crate::router::Router;

/// Hosts the active screen: owns the route, drives `update` then `render`
/// every frame, and in debug mode shows a bar for typing a route.
pub struct Agenda {
    args: Args,
    router: Router,
    app: Result<Box<dyn App>, Error>,
    nav_input: String,
}

impl Agenda {
    pub fn new(args: Args, app: Result<Box<dyn App>, Error>) -> Self {
        let router = Router::new(args.route());
        let nav_input = router.path().to_owned();

        Self {
            args,
            router,
            app,
            nav_input,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigate(&mut self, path: &str) {
        self.router.navigate(path);
        self.nav_input = self.router.path().to_owned();
    }

    #[profiling::function]
    pub fn show(&mut self, ctx: &egui::Context) {
        if self.args.is_debug() {
            egui::TopBottomPanel::top("agenda-nav").show(ctx, |ui| {
                if let Some(path) = nav_bar(ui, &mut self.nav_input) {
                    self.router.navigate(&path);
                }
            });
        }

        let app = match &mut self.app {
            Ok(app) => app,
            Err(err) => {
                let message = format!("Impossible de démarrer : {err}");
                egui::CentralPanel::default().show(ctx, |ui| {
                    show_one_error_message(ui, &message);
                    page_header(ui);
                    ui.add(inline_flash_error(&message));
                });
                return;
            }
        };

        let mut app_ctx = AppContext {
            args: &self.args,
            route: self.router.params(),
            egui: ctx,
        };

        app.update(&mut app_ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| app.render(&mut app_ctx, ui));
    }
}

impl eframe::App for Agenda {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
        profiling::finish_frame!();
    }
}

fn nav_bar(ui: &mut egui::Ui, input: &mut String) -> Option<String> {
    let mut go = false;

    egui::Frame::new()
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(input)
                        .hint_text("/calendar/1")
                        .desired_width(ui.available_width() - 80.0),
                );
                let entered = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                go = ui.button("Ouvrir").clicked() || entered;
            });
        });

    go.then(|| input.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda::{EventId, RouteParams};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Seen {
        updates: usize,
        renders: usize,
        last_route: Option<Result<EventId, agenda::RouteError>>,
    }

    struct Recorder(Arc<Mutex<Seen>>);

    impl App for Recorder {
        fn update(&mut self, ctx: &mut AppContext<'_>) {
            let mut seen = self.0.lock().unwrap();
            seen.updates += 1;
            seen.last_route = Some(ctx.route.event_id());
        }

        fn render(&mut self, _ctx: &mut AppContext<'_>, _ui: &mut egui::Ui) {
            self.0.lock().unwrap().renders += 1;
        }
    }

    fn args(list: &[&str]) -> Args {
        let list: Vec<String> = std::iter::once("agenda")
            .chain(list.iter().copied())
            .map(str::to_owned)
            .collect();
        Args::parse(&list).0
    }

    fn run(agenda: &mut Agenda, ctx: &egui::Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| agenda.show(ctx));
    }

    #[test]
    fn drives_app_with_current_route() {
        let seen = Arc::new(Mutex::new(Seen::default()));
        let mut agenda = Agenda::new(
            args(&["--route", "/calendar/3"]),
            Ok(Box::new(Recorder(seen.clone()))),
        );
        let ctx = egui::Context::default();

        run(&mut agenda, &ctx);
        {
            let seen = seen.lock().unwrap();
            assert_eq!(seen.updates, 1);
            assert_eq!(seen.renders, 1);
            assert_eq!(seen.last_route, Some(Ok(EventId::new("3"))));
        }

        agenda.navigate("/calendar/4");
        run(&mut agenda, &ctx);
        assert_eq!(
            seen.lock().unwrap().last_route,
            Some(Ok(EventId::new("4")))
        );
        assert_eq!(agenda.nav_input, "/calendar/4");
    }

    #[test]
    fn default_route_when_none_given() {
        let agenda = Agenda::new(args(&[]), Err(Error::Generic("unused".to_string())));
        assert_eq!(
            agenda.router().params().event_id(),
            RouteParams::from_path(agenda::DEFAULT_ROUTE).event_id()
        );
    }

    #[test]
    fn startup_error_still_renders() {
        let mut agenda = Agenda::new(
            args(&["--debug"]),
            Err(Error::Generic("bad api base".to_string())),
        );
        let ctx = egui::Context::default();

        run(&mut agenda, &ctx);
        run(&mut agenda, &ctx);
    }
}
