// SPDX-License-Identifier: MPL-2.0
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use campus_reviews::config::{self, Config};
use campus_reviews::diagnostics::ErrorLogger;
use campus_reviews::error::{Error, Result};
use campus_reviews::logging;
use campus_reviews::review::{parse_review, ReviewInput};
use campus_reviews::ui::notifications::{Manager, ToastDispatcher, ToastRequest};

const HELP: &str = "\
campus_reviews

USAGE:
  campus_reviews [--config PATH] validate <FILE|->
  campus_reviews [--config PATH] toast [--title T] [--description D] [--destructive] [--duration MS]

FLAGS:
  -h, --help        Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            ErrorLogger::tracing().log_error(&err, Some(&"campus_reviews"));
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: pico_args::Arguments) -> Result<ExitCode> {
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };
    logging::init(&config.logging);

    let mut dispatcher = ToastDispatcher::from_config(&config.notifications);

    let code = match args.subcommand()?.as_deref() {
        Some("validate") => {
            let source: String = args.free_from_str()?;
            reject_leftovers(args)?;
            validate(&source, &mut dispatcher)?
        }
        Some("toast") => {
            let request = toast_request(&mut args)?;
            reject_leftovers(args)?;
            dispatcher.toast(request);
            ExitCode::SUCCESS
        }
        Some(other) => return Err(Error::Usage(format!("unknown command `{other}`"))),
        None => return Err(Error::Usage("missing command, see --help".to_string())),
    };

    print_toasts(dispatcher.notifier(), &config);
    Ok(code)
}

fn reject_leftovers(args: pico_args::Arguments) -> Result<()> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::Usage(format!("unexpected arguments: {rest:?}")))
    }
}

fn toast_request(args: &mut pico_args::Arguments) -> Result<ToastRequest> {
    let mut request = ToastRequest::new();
    request.title = args.opt_value_from_str("--title")?;
    request.description = args.opt_value_from_str("--description")?;
    if args.contains("--destructive") {
        request = request.destructive();
    }
    let duration_ms: Option<u64> = args.opt_value_from_str("--duration")?;
    request.duration = duration_ms.map(Duration::from_millis);
    Ok(request)
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

fn validate(source: &str, dispatcher: &mut ToastDispatcher<Manager>) -> Result<ExitCode> {
    let payload = read_source(source)?;
    match parse_review(&payload) {
        Ok(review) => {
            print_review(&review)?;
            dispatcher.toast(
                ToastRequest::new()
                    .title("Review accepted")
                    .description(review.title),
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::InvalidReview(violations)) => {
            for violation in &violations {
                println!("{violation}");
            }
            dispatcher.toast(
                ToastRequest::new()
                    .title("Review rejected")
                    .description(format!("{} field(s) need attention", violations.len()))
                    .destructive(),
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}

fn print_review(review: &ReviewInput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(review)?);
    Ok(())
}

fn print_toasts(manager: &Manager, config: &Config) {
    for notification in manager.visible() {
        println!(
            "[{}] {} ({} ms)",
            notification.severity().label(),
            notification.message(),
            notification.duration().as_millis()
        );
    }
    if manager.queued_count() > 0 {
        println!(
            "{} more queued (max {} visible)",
            manager.queued_count(),
            config.notifications.max_visible().value()
        );
    }
}
