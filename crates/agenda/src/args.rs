use std::collections::BTreeSet;

use crate::AgendaOptions;
use tracing::error;

/// Environment variable consulted when `--api-base` is not given.
pub const API_BASE_ENV: &str = "AGENDA_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
pub const DEFAULT_ROUTE: &str = "/calendar/1";

pub struct Args {
    pub api_base: Option<String>,
    pub route: Option<String>,
    pub datapath: Option<String>,
    pub options: AgendaOptions,
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args {
            api_base: None,
            route: None,
            datapath: None,
            options: AgendaOptions::default(),
        };

        // first argument is the program name
        let mut i = 1;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--mobile" {
                res.options.set(AgendaOptions::Mobile, true);
            } else if arg == "--light" {
                res.options.set(AgendaOptions::LightTheme, true);
            } else if arg == "--dark" {
                res.options.set(AgendaOptions::LightTheme, false);
            } else if arg == "--debug" {
                res.options.set(AgendaOptions::Debug, true);
            } else if arg == "--api-base" {
                i += 1;
                let Some(base) = args.get(i) else {
                    error!("api-base argument missing?");
                    continue;
                };
                res.api_base = Some(base.clone());
            } else if arg == "--route" {
                i += 1;
                let Some(route) = args.get(i) else {
                    error!("route argument missing?");
                    continue;
                };
                res.route = Some(route.clone());
            } else if arg == "--datapath" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("datapath argument missing?");
                    continue;
                };
                res.datapath = Some(path.clone());
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        (res, unrecognized_args)
    }

    /// API base url: `--api-base`, then [`API_BASE_ENV`], then the default.
    pub fn api_base(&self) -> String {
        resolve_api_base(self.api_base.as_deref(), std::env::var(API_BASE_ENV).ok())
    }

    pub fn route(&self) -> &str {
        self.route.as_deref().unwrap_or(DEFAULT_ROUTE)
    }

    pub fn is_mobile(&self) -> bool {
        self.options.contains(AgendaOptions::Mobile)
    }

    pub fn is_light(&self) -> bool {
        self.options.contains(AgendaOptions::LightTheme)
    }

    pub fn is_debug(&self) -> bool {
        self.options.contains(AgendaOptions::Debug)
    }
}

fn resolve_api_base(arg: Option<&str>, env: Option<String>) -> String {
    arg.map(str::to_owned)
        .or(env.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
}
