use tracing::info;
use xerophi_core::error::XerophiError;
use xerophi_core::models::user::UpdateUser;
use xerophi_core::repository::UserRepository;

use super::{CommandOutcome, non_blank, prompt_user_fields};
use crate::console::Console;
use crate::error::AdminError;

const HEADING: &str = "Update info. Leave empty to leave the same, token is required";

/// Prompt for changes and apply the non-blank ones to the record found
/// by token.
pub async fn update_user<R, C>(repo: &R, console: &mut C) -> Result<CommandOutcome, AdminError>
where
    R: UserRepository,
    C: Console,
{
    console.clear()?;
    let fields = prompt_user_fields(console, HEADING)?;

    if fields.token.is_empty() {
        return Err(XerophiError::Validation {
            message: "token required".into(),
        }
        .into());
    }

    let mut user = repo.get_by_token(&fields.token).await?;

    let hash = match non_blank(fields.password) {
        Some(password) => Some(xerophi_auth::hash_password(&password)?),
        None => None,
    };
    user.apply_update(UpdateUser {
        token: fields.token,
        user_name: non_blank(fields.user_name),
        hash,
        service: non_blank(fields.service),
    });

    let user = repo.update_by_id(&user).await?;

    info!(
        user_id = user.user_id,
        token = %user.token,
        "Successfully updated user"
    );
    console.write(&format!(
        "Updated user {} (user ID {}).\n",
        user.user_name, user.user_id
    ))?;

    Ok(CommandOutcome::Completed)
}
