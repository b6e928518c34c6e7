//! Error and panic reporting for the terminal front end.
//!
//! A panic can fire while the form owns the terminal, so the hook puts the
//! terminal back first and only then prints anything.

use std::io::stderr;
use std::sync::Once;

use color_eyre::{Result, config::HookBuilder};
use crossterm::{
    cursor,
    event::DisableBracketedPaste,
    terminal::{self, LeaveAlternateScreen},
};
use tracing::error;

static HOOKS: Once = Once::new();

/// Install the eyre and panic hooks. Later calls are no-ops.
pub fn init() -> Result<()> {
    let mut installed = Ok(());
    HOOKS.call_once(|| installed = install());
    installed
}

fn install() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "{} crashed while the form was open. Nothing was submitted.",
            env!("CARGO_PKG_NAME")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();
        error!(report = %strip_ansi_escapes::strip_str(&report), "wizard panicked");

        #[cfg(debug_assertions)]
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .create_panic_handler()(panic_info);

        #[cfg(not(debug_assertions))]
        {
            let metadata = human_panic::metadata!();
            let dump = human_panic::handle_dump(&metadata, panic_info);
            if human_panic::print_msg(dump, &metadata).is_err() {
                eprintln!("{report}");
            }
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Undo what `Tui::enter` set up. Every step is attempted even if an
/// earlier one fails.
fn restore_terminal() {
    let _ = crossterm::execute!(
        stderr(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        cursor::Show
    );
    let _ = terminal::disable_raw_mode();
}
