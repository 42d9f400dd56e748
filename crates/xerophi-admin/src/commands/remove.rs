use tracing::{info, warn};
use xerophi_core::repository::UserRepository;

use super::{CommandOutcome, is_affirmative, render_user};
use crate::console::Console;
use crate::error::AdminError;

/// Look a record up by token and, after two confirmations, soft or hard
/// delete it.
pub async fn remove_user<R, C>(repo: &R, console: &mut C) -> Result<CommandOutcome, AdminError>
where
    R: UserRepository,
    C: Console,
{
    console.clear()?;
    let token = console.prompt("Token: ")?;

    let user = repo.get_by_token(&token).await?;
    console.write(&render_user(&user))?;

    let confirm = console.prompt("Confirm deletion [y/n]: ")?;
    if !is_affirmative(&confirm) {
        warn!(token = %user.token, "Didn't receive confirmation, not removing");
        return Ok(CommandOutcome::Cancelled);
    }

    let hard = console.prompt("Hard deletion [y/n]: ")?;
    if is_affirmative(&hard) {
        repo.delete_by_id(user.id).await?;
        info!(id = %user.id, token = %user.token, "Hard-deleted user");
        console.write(&format!("Removed {} permanently.\n", user.token))?;
    } else {
        repo.disable_by_id(user.id).await?;
        info!(id = %user.id, token = %user.token, "Soft-deleted user");
        console.write(&format!("Disabled {}.\n", user.token))?;
    }

    Ok(CommandOutcome::Completed)
}
