use tracing::info;
use xerophi_core::error::XerophiError;
use xerophi_core::models::user::CreateUser;
use xerophi_core::repository::UserRepository;

use super::{CommandOutcome, prompt_user_fields};
use crate::console::Console;
use crate::error::AdminError;

/// Prompt for a new user and insert it with the next sequential id.
pub async fn add_user<R, C>(repo: &R, console: &mut C) -> Result<CommandOutcome, AdminError>
where
    R: UserRepository,
    C: Console,
{
    console.clear()?;
    let fields = prompt_user_fields(console, "New user info")?;

    if fields.token.is_empty() {
        return Err(XerophiError::Validation {
            message: "token required".into(),
        }
        .into());
    }

    // The pre-insert count becomes the sequential id.
    let user_id = repo.count().await?;

    let user = repo
        .create(CreateUser {
            user_id,
            user_name: fields.user_name,
            token: fields.token,
            password: fields.password,
            service: fields.service,
        })
        .await?;

    info!(
        id = %user.id,
        user_id = user.user_id,
        user_name = %user.user_name,
        service = %user.service,
        "Successfully added user"
    );
    console.write(&format!(
        "Added user {} (user ID {}).\n",
        user.user_name, user.user_id
    ))?;

    Ok(CommandOutcome::Completed)
}
