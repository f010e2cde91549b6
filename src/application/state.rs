//! UI state and the actions that transform it.
//!
//! Every action takes the state by value and returns the next state, so a
//! front end holds exactly one `ConverterState` and tests can drive it without
//! any terminal or timer.

use crate::domain::{CopyField, Delimiter, Direction, Language};

use super::converter;

/// Identifies one copy confirmation. Only the newest token can expire it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeToken(u64);

/// Transient "copied" confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    pub field: CopyField,
    pub token: NoticeToken,
}

/// Everything the converter UI shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterState {
    pub input: String,
    pub output: String,
    pub delimiter: Delimiter,
    pub direction: Direction,
    pub language: Language,
    pub notice: Option<CopyNotice>,
    next_token: u64,
}

impl ConverterState {
    /// Fresh state with the given startup selections.
    #[must_use]
    pub fn new(delimiter: Delimiter, direction: Direction, language: Language) -> Self {
        Self {
            delimiter,
            direction,
            language,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Appends one line to the input, separated by a newline.
    #[must_use]
    pub fn push_line(mut self, line: &str) -> Self {
        if !self.input.is_empty() {
            self.input.push('\n');
        }
        self.input.push_str(line);
        self
    }

    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Switches tab. Field contents are kept.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Recomputes the output from the current input, delimiter, and direction.
    #[must_use]
    pub fn convert(mut self) -> Self {
        self.output = converter::convert(self.direction, &self.input, self.delimiter);
        self
    }

    #[must_use]
    pub fn clear_input(mut self) -> Self {
        self.input.clear();
        self
    }

    #[must_use]
    pub fn clear_output(mut self) -> Self {
        self.output.clear();
        self
    }

    #[must_use]
    pub fn clear_all(self) -> Self {
        self.clear_input().clear_output()
    }

    /// Text held by a field.
    #[must_use]
    pub fn text_of(&self, field: CopyField) -> &str {
        match field {
            CopyField::Input => &self.input,
            CopyField::Output => &self.output,
        }
    }

    /// Records a successful copy and returns the token that can expire it.
    ///
    /// Any earlier notice is replaced; its token no longer matches.
    #[must_use]
    pub fn copied(mut self, field: CopyField) -> (Self, NoticeToken) {
        let token = NoticeToken(self.next_token);
        self.next_token += 1;
        self.notice = Some(CopyNotice { field, token });
        (self, token)
    }

    /// Clears the notice if `token` still identifies it.
    #[must_use]
    pub fn expire_notice(mut self, token: NoticeToken) -> Self {
        if self.notice.as_ref().is_some_and(|n| n.token == token) {
            self.notice = None;
        } else {
            tracing::trace!(?token, "Ignoring stale notice expiry");
        }
        self
    }
}
