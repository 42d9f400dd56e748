//! Line-oriented console used by the menu loop and the command handlers.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};

pub trait Console {
    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Read one line without echoing it.
    fn read_secret(&mut self) -> io::Result<Option<String>> {
        self.read_line()
    }

    fn write(&mut self, text: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    /// Print `label` and read one trimmed field. End of input reads as
    /// an empty field.
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.write(label)?;
        Ok(self
            .read_line()?
            .map(|line| line.trim().to_string())
            .unwrap_or_default())
    }

    fn prompt_secret(&mut self, label: &str) -> io::Result<String> {
        self.write(label)?;
        Ok(self
            .read_secret()?
            .map(|line| line.trim().to_string())
            .unwrap_or_default())
    }
}

/// Console bound to the process's stdin/stdout.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn read_secret(&mut self) -> io::Result<Option<String>> {
        if !io::stdin().is_terminal() {
            return self.read_line();
        }

        let _raw = RawModeGuard::enter()?;
        let mut out = io::stdout();

        let mut buf = String::new();
        loop {
            let Event::Key(KeyEvent {
                code, modifiers, ..
            }) = event::read()?
            else {
                continue;
            };

            match code {
                KeyCode::Enter => {
                    execute!(out, Print("\r\n"))?;
                    break;
                }
                KeyCode::Backspace => {
                    if buf.pop().is_some() {
                        execute!(out, cursor::MoveLeft(1), Print(" "), cursor::MoveLeft(1))?;
                    }
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    execute!(out, Print("\r\n"))?;
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
                }
                KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) && buf.is_empty() => {
                    execute!(out, Print("\r\n"))?;
                    return Ok(None);
                }
                KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    buf.push(ch);
                    execute!(out, Print("*"))?;
                }
                _ => {}
            }
        }

        Ok(Some(buf))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        if !out.is_terminal() {
            return Ok(());
        }
        execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

/// Console fed from a fixed list of input lines, capturing everything
/// written to it. Clearing the screen is recorded as a form feed.
///
/// Testing aid for driving the menu and the command handlers without a
/// terminal. The binary never constructs it.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.output.push('\x0c');
        Ok(())
    }
}
