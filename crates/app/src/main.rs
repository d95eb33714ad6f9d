use std::fmt;
use std::sync::Arc;

use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::LaunchBuilder;
use services::{Clock, HttpSubmissionSink, Invitation, SubmissionConfig, SubmissionSink};
use ui::{build_app_context, App, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSubmitUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSubmitUrl { raw } => write!(f, "invalid --submit-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    invitation: Invitation,
    submission: Arc<dyn SubmissionSink>,
}

impl UiApp for DesktopApp {
    fn invitation(&self) -> Invitation {
        self.invitation.clone()
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }

    fn submission(&self) -> Arc<dyn SubmissionSink> {
        Arc::clone(&self.submission)
    }
}

struct Args {
    invitation: Invitation,
    submit_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--email <address>] [--organization <name>] [--submit-url <url>]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ONBOARD_EMAIL, ONBOARD_ORGANIZATION, ONBOARD_SUBMIT_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut email = std::env::var("ONBOARD_EMAIL").unwrap_or_default();
        let mut organization = std::env::var("ONBOARD_ORGANIZATION").unwrap_or_default();
        let mut submit_url = std::env::var("ONBOARD_SUBMIT_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--email" => {
                    email = require_value(args, "--email")?;
                }
                "--organization" => {
                    organization = require_value(args, "--organization")?;
                }
                "--submit-url" => {
                    let value = require_value(args, "--submit-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSubmitUrl { raw: value });
                    }
                    submit_url = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            invitation: Invitation {
                email,
                organization,
            },
            submit_url,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let submission = Arc::new(HttpSubmissionSink::new(
        parsed
            .submit_url
            .map(|endpoint| SubmissionConfig { endpoint }),
    ));

    let app = DesktopApp {
        invitation: parsed.invitation,
        submission,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the wizard doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("BBI Intelligence")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
