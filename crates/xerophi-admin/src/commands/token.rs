use tracing::info;
use xerophi_auth::TokenIssuer;

use super::CommandOutcome;
use crate::console::Console;
use crate::error::AdminError;

/// Issue an administrative credential and show it once.
pub fn generate_token<T, C>(issuer: &T, console: &mut C) -> Result<CommandOutcome, AdminError>
where
    T: TokenIssuer,
    C: Console,
{
    console.clear()?;
    let issued = issuer.issue()?;

    info!(digest = %issued.digest, "Issued admin token");
    console.write(&format!(
        "Token: {}\nSHA-256: {}\n",
        issued.token, issued.digest
    ))?;

    Ok(CommandOutcome::Completed)
}
