//! The interactive menu loop.

use tracing::{debug, error};
use xerophi_auth::TokenIssuer;
use xerophi_core::repository::UserRepository;

use crate::commands::{self, Command};
use crate::console::Console;
use crate::context::AdminContext;
use crate::error::AdminError;

pub const MENU: &str = r"
    +-=============================-+
    |                               |
    |         Xerophi Admin         |
    |                               |
    +-------------------------------+
    | Option |      Information     |
    +-------------------------------+
    |   a    | Adds a new user      |
    |   u    | Updates user's info  |
    |   r    | Removes a user       |
    |   g    | Generates a token    |
    |   q    | Quit                 |
    +-=============================-+
";

pub const PROMPT: &str = "λ | ";

pub const CONTINUE: &str = "Press enter to continue...\n";

/// Read commands until `q` (or end of input) and dispatch them.
///
/// Handler failures are logged and the loop continues; only console
/// I/O errors end the loop early.
pub async fn run_menu<R, T, C>(ctx: &AdminContext<R, T>, console: &mut C) -> Result<(), AdminError>
where
    R: UserRepository,
    T: TokenIssuer,
    C: Console,
{
    loop {
        console.clear()?;
        console.write(MENU)?;
        console.write(PROMPT)?;

        let Some(line) = console.read_line()? else {
            debug!("Console input closed");
            break;
        };
        let input = line.trim();
        console.write("\n")?;

        let command = match Command::parse(input) {
            Some(Command::Quit) => break,
            Some(command) => command,
            None => {
                console.write(&format!("Invalid option \"{input}\".\n"))?;
                continue;
            }
        };

        match commands::execute(command, ctx, console).await {
            Ok(outcome) => debug!(%command, ?outcome, "Command finished"),
            Err(AdminError::Io(err)) => return Err(AdminError::Io(err)),
            Err(err) => {
                error!(%command, error = %err, "Command failed");
                console.write(&format!("Failed: {err}\n"))?;
            }
        }

        console.write(CONTINUE)?;
        console.read_line()?;
    }

    Ok(())
}
