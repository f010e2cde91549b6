//! Interactive converter session.
//!
//! A line-oriented front end over [`ConverterState`]. Plain lines are appended
//! to the input; lines starting with `:` are commands. Copy confirmations
//! expire through a [`NoticeTimer`] while the session waits for input.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::{AppError, CopyField, Delimiter, Direction, Language, Result};
use crate::infrastructure::{Clipboard, PreferenceStore};

use super::copy::copy_field;
use super::formatter::format_screen;
use super::i18n::{Catalog, TextProvider};
use super::language::persist_language;
use super::notice::NoticeTimer;
use super::state::{ConverterState, NoticeToken};

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a line to the input.
    Line(String),
    Convert,
    Clear(ClearTarget),
    Copy(CopyField),
    Delimiter(Delimiter),
    Mode(Direction),
    Lang(Language),
    Show,
    Help,
    Quit,
}

/// What `:clear` empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Input,
    Output,
    All,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        // `::text` escapes a literal leading colon.
        if let Some(literal) = line.strip_prefix("::") {
            return Ok(Self::Line(format!(":{literal}")));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Self::Line(line.to_string()));
        };

        let (name, arg) = command
            .split_once(' ')
            .unwrap_or((command, ""));
        // Keep a lone space argument intact for `:delim  ` (space delimiter).
        let arg_trimmed = arg.trim();

        match name.trim().to_lowercase().as_str() {
            "convert" | "c" => Ok(Self::Convert),
            "clear" => match arg_trimmed.to_lowercase().as_str() {
                "" | "all" => Ok(Self::Clear(ClearTarget::All)),
                "input" | "in" => Ok(Self::Clear(ClearTarget::Input)),
                "output" | "out" => Ok(Self::Clear(ClearTarget::Output)),
                other => Err(format!("Unknown field: {other}. Use: input, output, all")),
            },
            "copy" => {
                if arg_trimmed.is_empty() {
                    Ok(Self::Copy(CopyField::Output))
                } else {
                    arg_trimmed.parse().map(Self::Copy)
                }
            }
            "delim" | "d" => {
                let value = if arg_trimmed.is_empty() && !arg.is_empty() {
                    " "
                } else {
                    arg_trimmed
                };
                value.parse().map(Self::Delimiter)
            }
            "mode" | "m" => arg_trimmed.parse().map(Self::Mode),
            "lang" => arg_trimmed.parse().map(Self::Lang),
            "show" | "s" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command: :{other}. Type :help")),
        }
    }
}

/// Interactive session over one converter state.
pub struct Session<'a> {
    state: ConverterState,
    catalog: Catalog,
    clipboard: &'a dyn Clipboard,
    preferences: &'a dyn PreferenceStore,
    timer: NoticeTimer,
    notice_delay: Duration,
}

impl<'a> Session<'a> {
    /// Create a session. Returns the receiver for notice expiries, which the
    /// caller polls alongside input (see [`Session::run`]).
    #[must_use]
    pub fn new(
        state: ConverterState,
        clipboard: &'a dyn Clipboard,
        preferences: &'a dyn PreferenceStore,
        notice_delay: Duration,
    ) -> (Self, tokio::sync::mpsc::UnboundedReceiver<NoticeToken>) {
        let (timer, expiries) = NoticeTimer::new();
        let catalog = Catalog::new(state.language);
        let session = Self {
            state,
            catalog,
            clipboard,
            preferences,
            timer,
            notice_delay,
        };
        (session, expiries)
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ConverterState {
        &self.state
    }

    fn apply(&mut self, action: impl FnOnce(ConverterState) -> ConverterState) {
        let state = std::mem::take(&mut self.state);
        self.state = action(state);
    }

    /// Applies a notice expiry.
    pub fn expire(&mut self, token: NoticeToken) {
        self.apply(|s| s.expire_notice(token));
    }

    /// Handles one input line. Returns `false` when the session should end.
    ///
    /// Must be called from within a tokio runtime, since copies schedule a timer.
    ///
    /// # Errors
    /// Returns error only if writing to `out` fails.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<bool> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                write_line(out, &message.red().to_string())?;
                return Ok(true);
            }
        };

        tracing::debug!(?command, "Session command");

        match command {
            Command::Line(text) => self.apply(|s| s.push_line(&text)),
            Command::Convert => {
                self.apply(ConverterState::convert);
                let output = if self.state.output.is_empty() {
                    self.catalog.text("placeholder_output").dimmed().to_string()
                } else {
                    self.state.output.clone()
                };
                write_line(out, &output)?;
            }
            Command::Clear(target) => self.apply(|s| match target {
                ClearTarget::Input => s.clear_input(),
                ClearTarget::Output => s.clear_output(),
                ClearTarget::All => s.clear_all(),
            }),
            Command::Copy(field) => self.copy(field, out)?,
            Command::Delimiter(delimiter) => {
                self.apply(|s| s.with_delimiter(delimiter));
                write_line(out, &self.catalog.text(delimiter.label_key()))?;
            }
            Command::Mode(direction) => {
                self.apply(|s| s.with_direction(direction));
                write_line(out, &self.catalog.text(direction.tab_key()).cyan().to_string())?;
            }
            Command::Lang(language) => self.change_language(language, out)?,
            Command::Show => write_line(out, &format_screen(&self.state, &self.catalog))?,
            Command::Help => write_line(out, &self.catalog.text("help"))?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn copy(&mut self, field: CopyField, out: &mut dyn Write) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, result) = copy_field(state, field, self.clipboard);
        self.state = state;

        match result {
            Ok(Some(token)) => {
                self.timer.schedule(token, self.notice_delay);
                let name = self.catalog.text(field.label_key());
                let message = self.catalog.text_with("copied", &[("field", name.as_str())]);
                write_line(out, &format!("{} {}", "✓".green().bold(), message.green()))
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::debug!(error = %e, "Copy failed");
                write_line(out, &self.catalog.text("copy_failed").red().bold().to_string())
            }
        }
    }

    fn change_language(&mut self, language: Language, out: &mut dyn Write) -> Result<()> {
        self.apply(|s| s.with_language(language));
        self.catalog = Catalog::new(language);

        if let Err(e) = persist_language(self.preferences, language) {
            write_line(out, &format!("{} {e}", "Error:".red().bold()))?;
        }

        write_line(
            out,
            &self
                .catalog
                .text_with("language_set", &[("lang", language.label())]),
        )
    }

    /// Runs the session on stdin/stdout until `:quit` or end of input.
    ///
    /// # Errors
    /// Returns error if reading stdin or writing stdout fails.
    pub async fn run(
        mut self,
        mut expiries: tokio::sync::mpsc::UnboundedReceiver<NoticeToken>,
    ) -> Result<ConverterState> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = std::io::stdout();

        write_line(&mut stdout, &format_screen(&self.state, &self.catalog))?;
        write_line(&mut stdout, &self.catalog.text("help").dimmed().to_string())?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let line = line.map_err(|e| AppError::io("Failed to read input", e))?;
                    let Some(line) = line else { break };
                    if !self.handle_line(&line, &mut stdout)? {
                        break;
                    }
                }
                Some(token) = expiries.recv() => self.expire(token),
            }
        }

        tracing::info!(input_bytes = self.state().input.len(), "Session ended");
        self.timer.cancel();
        Ok(self.state)
    }
}

fn write_line(out: &mut dyn Write, text: &str) -> Result<()> {
    writeln!(out, "{text}").map_err(|e| AppError::io("Failed to write output", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemoryClipboard, MemoryPreferenceStore};

    fn run_lines(session: &mut Session<'_>, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            session.handle_line(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("hello".parse::<Command>(), Ok(Command::Line("hello".into())));
        assert_eq!("::x".parse::<Command>(), Ok(Command::Line(":x".into())));
        assert_eq!(":convert".parse::<Command>(), Ok(Command::Convert));
        assert_eq!(":clear".parse::<Command>(), Ok(Command::Clear(ClearTarget::All)));
        assert_eq!(":clear input".parse::<Command>(), Ok(Command::Clear(ClearTarget::Input)));
        assert_eq!(":copy".parse::<Command>(), Ok(Command::Copy(CopyField::Output)));
        assert_eq!(":delim pipe".parse::<Command>(), Ok(Command::Delimiter(Delimiter::Pipe)));
        assert_eq!(":delim  ".parse::<Command>(), Ok(Command::Delimiter(Delimiter::Space)));
        assert_eq!(":mode split".parse::<Command>(), Ok(Command::Mode(Direction::JoinedToList)));
        assert_eq!(":lang ua".parse::<Command>(), Ok(Command::Lang(Language::Uk)));
        assert!(":bogus".parse::<Command>().is_err());
        assert!(":delim tab".parse::<Command>().is_err());
    }

    #[tokio::test]
    async fn test_lines_then_convert() {
        colored::control::set_override(false);
        let clipboard = MemoryClipboard::default();
        let prefs = MemoryPreferenceStore::default();
        let (mut session, _rx) = Session::new(
            ConverterState::default(),
            &clipboard,
            &prefs,
            Duration::from_millis(10),
        );

        let out = run_lines(&mut session, &["a", " b ", "", "c", ":delim ;", ":convert"]);

        assert_eq!(session.state().output, "a;b;c");
        assert!(out.ends_with("a;b;c\n"));
    }

    #[tokio::test]
    async fn test_copy_notice_expires() {
        colored::control::set_override(false);
        let clipboard = MemoryClipboard::default();
        let prefs = MemoryPreferenceStore::default();
        let (mut session, mut rx) = Session::new(
            ConverterState::default().with_input("x\ny"),
            &clipboard,
            &prefs,
            Duration::from_millis(5),
        );

        let out = run_lines(&mut session, &[":convert", ":copy output"]);
        assert!(out.contains("Output copied!"));
        assert_eq!(clipboard.contents().as_deref(), Some("x,y"));
        assert!(session.state().notice.is_some());

        let token = rx.recv().await.unwrap();
        session.expire(token);
        assert!(session.state().notice.is_none());
    }

    #[tokio::test]
    async fn test_copy_failure_reports_and_continues() {
        colored::control::set_override(false);
        let clipboard = MemoryClipboard::failing();
        let prefs = MemoryPreferenceStore::default();
        let (mut session, _rx) = Session::new(
            ConverterState::default().with_input("x"),
            &clipboard,
            &prefs,
            Duration::from_millis(5),
        );

        let out = run_lines(&mut session, &[":copy input"]);
        assert!(out.contains("Failed to copy"));
        assert!(session.state().notice.is_none());
    }

    #[tokio::test]
    async fn test_language_change_is_persisted() {
        colored::control::set_override(false);
        let clipboard = MemoryClipboard::default();
        let prefs = MemoryPreferenceStore::default();
        let (mut session, _rx) = Session::new(
            ConverterState::default(),
            &clipboard,
            &prefs,
            Duration::from_millis(5),
        );

        let out = run_lines(&mut session, &[":lang uk"]);

        assert_eq!(session.state().language, Language::Uk);
        assert_eq!(prefs.get("lang").unwrap().as_deref(), Some("uk"));
        assert!(out.contains("Мову змінено на UA"));
    }

    #[tokio::test]
    async fn test_quit_stops() {
        let clipboard = MemoryClipboard::default();
        let prefs = MemoryPreferenceStore::default();
        let (mut session, _rx) = Session::new(
            ConverterState::default(),
            &clipboard,
            &prefs,
            Duration::from_millis(5),
        );
        let mut out = Vec::new();
        assert!(!session.handle_line(":quit", &mut out).unwrap());
    }
}
