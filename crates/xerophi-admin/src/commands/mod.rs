//! Menu command handlers.
//!
//! Each handler prompts for its fields, performs one or two repository
//! calls and writes a short report. Failures are returned to the menu
//! loop, which logs them and carries on.

mod add;
mod remove;
mod token;
mod update;

use std::fmt;
use std::io;

use xerophi_auth::TokenIssuer;
use xerophi_core::models::user::User;
use xerophi_core::repository::UserRepository;

use crate::console::Console;
use crate::context::AdminContext;
use crate::error::AdminError;

pub use add::add_user;
pub use remove::remove_user;
pub use token::generate_token;
pub use update::update_user;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddUser,
    UpdateUser,
    RemoveUser,
    GenerateToken,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "a" => Some(Self::AddUser),
            "u" => Some(Self::UpdateUser),
            "r" => Some(Self::RemoveUser),
            "g" => Some(Self::GenerateToken),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddUser => "add-user",
            Self::UpdateUser => "update-user",
            Self::RemoveUser => "remove-user",
            Self::GenerateToken => "generate-token",
            Self::Quit => "quit",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed,
    /// The operator declined; nothing was written.
    Cancelled,
}

/// Run one handler. `Quit` is a no-op here; the menu loop owns it.
pub async fn execute<R, T, C>(
    command: Command,
    ctx: &AdminContext<R, T>,
    console: &mut C,
) -> Result<CommandOutcome, AdminError>
where
    R: UserRepository,
    T: TokenIssuer,
    C: Console,
{
    match command {
        Command::AddUser => add_user(&ctx.users, console).await,
        Command::UpdateUser => update_user(&ctx.users, console).await,
        Command::RemoveUser => remove_user(&ctx.users, console).await,
        Command::GenerateToken => generate_token(&ctx.tokens, console),
        Command::Quit => Ok(CommandOutcome::Completed),
    }
}

/// Raw field values as typed by the operator.
#[derive(Debug, Default)]
pub(crate) struct UserFields {
    pub user_name: String,
    pub token: String,
    pub password: String,
    pub service: String,
}

pub(crate) fn prompt_user_fields<C: Console>(
    console: &mut C,
    heading: &str,
) -> io::Result<UserFields> {
    console.write(heading)?;
    console.write("\n")?;
    Ok(UserFields {
        user_name: console.prompt("Username: ")?,
        token: console.prompt("Token: ")?,
        password: console.prompt_secret("Password: ")?,
        service: console.prompt("Service: ")?,
    })
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

pub(crate) fn render_user(user: &User) -> String {
    let deleted = user
        .deleted_at
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "-".into());
    format!(
        "\n  Record retrieved:\n    \
         ID: {}\n    \
         Token: {}\n    \
         Username: {}\n    \
         User ID: {}\n    \
         Service: {}\n    \
         Created: {}\n    \
         Deleted: {}\n\n",
        user.id,
        user.token,
        user.user_name,
        user.user_id,
        user.service,
        user.created_at.to_rfc3339(),
        deleted,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse("a"), Some(Command::AddUser));
        assert_eq!(Command::parse("u"), Some(Command::UpdateUser));
        assert_eq!(Command::parse("r"), Some(Command::RemoveUser));
        assert_eq!(Command::parse("g"), Some(Command::GenerateToken));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("A"), None);
        assert_eq!(Command::parse("add"), None);
    }

    #[test]
    fn only_y_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
    }
}
