//! Terminal front end for the multi-step contact form.

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod logging;
pub mod state;
pub mod style;
pub mod tui;

use color_eyre::Result;
use stepform::{Submission, TextField, Validation, rules};
use tracing::info;

use crate::{app::App, cli::Cli, config::Config};

/// Run the interactive form. An accepted submission is printed as JSON on
/// stdout once the terminal has been restored.
pub async fn run(cli: &Cli) -> Result<Option<Submission>> {
    errors::init()?;
    config::ensure_data_and_config_dirs_exist()?;
    let _guard = logging::init()?;

    let config = Config::new()?;
    let tick_rate = cli.tick_rate.unwrap_or(config.ui.tick_rate);
    let frame_rate = cli.frame_rate.unwrap_or(config.ui.frame_rate);

    info!(tick_rate, frame_rate, "starting form");
    let mut app = App::new(config, tick_rate, frame_rate)?;
    let submission = app.run().await?;
    info!(submitted = submission.is_some(), "form closed");
    if let Some(submission) = &submission {
        println!("{}", serde_json::to_string_pretty(submission)?);
    }
    Ok(submission)
}

/// Validate one value with the rule its field uses in the form. Returns the
/// message on failure.
pub fn check(field: TextField, value: &str) -> Option<&'static str> {
    let result = match field {
        TextField::Name => rules::validate_name(value),
        TextField::Email => rules::validate_email(value),
        TextField::Phone => rules::validate_phone(value),
        TextField::Company => Validation::ok(),
    };
    result.message.filter(|_| !result.is_valid)
}
