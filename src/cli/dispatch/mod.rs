use crate::cli::actions::Action;
use anyhow::Result;

/// # Errors
/// Returns an error if the matches cannot be turned into an action.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_handler_default_port() {
        temp_env::with_vars([("SEZAMO_PORT", None::<String>)], || {
            let matches = commands::new().get_matches_from(vec!["sezamo"]);
            let Ok(Action::Server { port }) = handler(&matches) else {
                panic!("expected a server action");
            };

            assert_eq!(port, 8080);
        });
    }

    #[test]
    fn test_handler_custom_port() {
        temp_env::with_vars([("SEZAMO_PORT", None::<String>)], || {
            let matches = commands::new().get_matches_from(vec!["sezamo", "--port", "9090"]);
            let Ok(Action::Server { port }) = handler(&matches) else {
                panic!("expected a server action");
            };

            assert_eq!(port, 9090);
        });
    }
}
