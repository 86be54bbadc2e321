#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use agenda::{ApiClient, App, Args, DataPath, DataPathType};
use agenda_chrome::{
    setup::{generate_native_options, setup_cc},
    Agenda,
};
use agenda_event::EventScreen;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn setup_logging(path: &DataPath) -> WorkerGuard {
    use tracing_appender::{
        non_blocking,
        rolling::{RollingFileAppender, Rotation},
    };
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        path.path(DataPathType::Log),
        format!("agenda-{}.log", env!("CARGO_PKG_VERSION")),
    );

    // the guard flushes the file writer on drop, keep it for the whole run
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    // Log to stdout (if you run with `RUST_LOG=debug`).
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("agenda=info,agenda_event=info,agenda_chrome=info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(env_filter)
        .init();

    guard
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (args, unrecognized) = Args::parse(&args);

    let path = args
        .datapath
        .as_ref()
        .map(DataPath::new)
        .unwrap_or_default();

    let _guard = setup_logging(&path);

    for arg in &unrecognized {
        warn!("unrecognized arg: {arg}");
    }

    let api_base = args.api_base();
    let screen = ApiClient::new(&api_base).map(|api| {
        info!("using api at {}", api.base());
        Box::new(EventScreen::new(api)) as Box<dyn App>
    });
    if let Err(err) = &screen {
        error!("invalid api base '{api_base}': {err}");
    }

    let options = generate_native_options(args.is_mobile());
    let light = args.is_light();

    let res = eframe::run_native(
        "Agenda",
        options,
        Box::new(move |cc| {
            setup_cc(&cc.egui_ctx, light);
            Ok(Box::new(Agenda::new(args, screen)))
        }),
    );

    if let Err(err) = res {
        error!("eframe error: {err}");
    }
}
