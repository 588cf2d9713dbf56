use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuizLength;
use services::{HttpQuizApi, QuizApi, QuizApiConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
    InvalidQuestions { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
            ArgsError::InvalidQuestions { raw } => {
                write!(f, "invalid --questions value: {raw} (expected 10, 15 or 25)")
            }
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
    quiz_api: Arc<dyn QuizApi>,
    default_length: QuizLength,
}

impl UiApp for DesktopApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }

    fn default_length(&self) -> QuizLength {
        self.default_length
    }
}

#[derive(Debug)]
struct Args {
    api: QuizApiConfig,
    length: QuizLength,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--base-url <url>] [--questions <10|15|25>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url http://127.0.0.1:5000");
    eprintln!("  --questions 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NFL_QUIZ_BASE_URL, NFL_QUIZ_LENGTH, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut api = QuizApiConfig::from_env();
        let mut length = std::env::var("NFL_QUIZ_LENGTH")
            .ok()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .map_or_else(QuizLength::default, QuizLength::from_count_or_default);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    api = QuizApiConfig::new(value);
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    length = value
                        .parse::<u32>()
                        .ok()
                        .and_then(|count| QuizLength::try_from_count(count).ok())
                        .ok_or_else(|| ArgsError::InvalidQuestions { raw: value.clone() })?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { api, length }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt().with_env_filter(filter).with_target(false).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(parsed) = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    init_tracing();
    info!(
        base_url = %parsed.api.base_url,
        questions = parsed.length.count(),
        "starting quiz client"
    );

    let quiz_api: Arc<dyn QuizApi> = Arc::new(HttpQuizApi::new(parsed.api)?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_api,
        default_length: parsed.length,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("NFL Stat Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
