use crate::{api, cli::actions::Action, store::CredentialStore};
use anyhow::Result;

/// Handle the server action
/// # Errors
/// Returns an error if the server fails to start
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port } => {
            // The store starts empty here and is the only one in the process;
            // the router hands it to the handlers
            let store = CredentialStore::new();

            api::new(port, store).await?;
        }
    }

    Ok(())
}
