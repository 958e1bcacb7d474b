use super::render::{print_messages, uploaded, Message};
use super::setup::Cli;
use clap::Parser;
use gistup::api::{upload_to_gist, UploadOptions};
use gistup::error::Result;
use gistup::format::{format_json, JsonStyle};
use gistup::input::read_content;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = read_content(cli.path.as_deref())?;
    debug!(
        source = %cli.path.as_ref().map_or("stdin".into(), |p| p.display().to_string()),
        bytes = input.content.len(),
        "input read"
    );

    let (content, warning) = match cli.json_style() {
        Some(style) => apply_json_style(input.content, style),
        None => (input.content, None),
    };
    if let Some(warning) = warning {
        print_messages(&[warning]);
    }

    let options = UploadOptions {
        filename: cli.filename.unwrap_or(input.default_filename),
        token: cli.token,
        gist_id: cli.gist_id,
        description: cli.description,
        public: cli.public,
    };

    let gist = upload_to_gist(&content, options)?;
    print_messages(&[uploaded(&gist.html_url)]);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Reformats `content`, or hands it back untouched with a warning if it isn't JSON.
fn apply_json_style(content: String, style: JsonStyle) -> (String, Option<Message>) {
    match format_json(&content, style) {
        Ok(formatted) => (formatted, None),
        Err(e) => {
            debug!(error = %e, "JSON parse failed");
            (
                content,
                Some(Message::warning(
                    "Warning: Input is not valid JSON; continuing as plain text.",
                )),
            )
        }
    }
}
