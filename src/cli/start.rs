use crate::cli::{actions::Action, commands, dispatch::handler, telemetry};
use anyhow::Result;

/// Start the CLI
/// # Errors
/// Returns an error if telemetry setup or argument handling fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity_level =
        telemetry::verbosity_level(matches.get_one::<u8>("verbosity").map_or(0, |&v| v));

    telemetry::init(verbosity_level)?;

    let action = handler(&matches)?;

    Ok(action)
}
