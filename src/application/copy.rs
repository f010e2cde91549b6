//! Copy-to-clipboard action.

use crate::domain::{CopyField, Result};
use crate::infrastructure::Clipboard;

use super::state::{ConverterState, NoticeToken};

/// Copies one field to the clipboard.
///
/// The state always comes back. The result holds `None` when the field is
/// empty and nothing was written, or the token of the new notice. On a
/// clipboard error the returned state is unchanged.
pub fn copy_field(
    state: ConverterState,
    field: CopyField,
    clipboard: &dyn Clipboard,
) -> (ConverterState, Result<Option<NoticeToken>>) {
    let text = state.text_of(field);
    if text.is_empty() {
        return (state, Ok(None));
    }

    if let Err(e) = clipboard.write_text(text) {
        tracing::warn!(?field, error = %e, "Clipboard write failed");
        return (state, Err(e));
    }
    tracing::debug!(?field, bytes = text.len(), "Copied to clipboard");

    let (state, token) = state.copied(field);
    (state, Ok(Some(token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppError;
    use crate::infrastructure::MemoryClipboard;

    #[test]
    fn test_copy_sets_notice_and_writes() {
        let clipboard = MemoryClipboard::default();
        let state = ConverterState::default().with_input("a\nb").convert();

        let (state, token) = copy_field(state, CopyField::Output, &clipboard);

        assert!(token.unwrap().is_some());
        assert_eq!(clipboard.contents().as_deref(), Some("a,b"));
        assert_eq!(
            state.notice.as_ref().map(|n| n.field),
            Some(CopyField::Output)
        );
    }

    #[test]
    fn test_copy_empty_field_is_noop() {
        let clipboard = MemoryClipboard::default();
        let (state, token) =
            copy_field(ConverterState::default(), CopyField::Output, &clipboard);

        assert!(token.unwrap().is_none());
        assert!(state.notice.is_none());
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn test_copy_failure_is_clipboard_error() {
        let clipboard = MemoryClipboard::failing();
        let before = ConverterState::default().with_input("x");

        let (after, result) = copy_field(before.clone(), CopyField::Input, &clipboard);
        assert!(matches!(result, Err(AppError::Clipboard { .. })));
        assert_eq!(after, before);
    }
}
