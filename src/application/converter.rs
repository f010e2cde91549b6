//! List/joined conversion.
//!
//! Both directions share one normalization rule: trim every piece and drop the
//! pieces that end up empty. Order and duplicates are preserved. Nothing here
//! can fail; degenerate input simply produces empty output.

use crate::domain::{Delimiter, Direction};

/// Splits multi-line text into trimmed, non-empty items.
///
/// Runs of `\n` and `\r\n` are treated as a single boundary.
pub fn normalize(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    // A leftover `\r` from CRLF is whitespace and goes away with the trim.
    raw.split('\n')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Splits joined text on the literal delimiter into trimmed, non-empty items.
///
/// With [`Delimiter::Space`] every single space is a boundary, not whitespace
/// runs; the empty pieces between consecutive spaces are then dropped.
pub fn split_items(raw: &str, delimiter: Delimiter) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(delimiter.as_char())
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Converts a newline-separated list into one delimiter-joined string.
pub fn list_to_joined(raw: &str, delimiter: Delimiter) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut buf = [0u8; 4];
    let sep: &str = delimiter.as_char().encode_utf8(&mut buf);
    normalize(raw).join(sep)
}

/// Converts a delimiter-joined string into a newline-separated list.
pub fn joined_to_list(raw: &str, delimiter: Delimiter) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    split_items(raw, delimiter).join("\n")
}

/// Runs the conversion for the given direction.
pub fn convert(direction: Direction, raw: &str, delimiter: Delimiter) -> String {
    match direction {
        Direction::ListToJoined => list_to_joined(raw, delimiter),
        Direction::JoinedToList => joined_to_list(raw, delimiter),
    }
}

/// The item sequence behind a conversion, for structured output.
pub fn items_of(direction: Direction, raw: &str, delimiter: Delimiter) -> Vec<String> {
    match direction {
        Direction::ListToJoined => normalize(raw),
        Direction::JoinedToList => split_items(raw, delimiter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_list_to_joined_example() {
        assert_eq!(list_to_joined("a\n b \n\nc", Delimiter::Comma), "a,b,c");
    }

    #[test]
    fn test_joined_to_list_example() {
        assert_eq!(joined_to_list("a, b ,,c", Delimiter::Comma), "a\nb\nc");
    }

    #[test]
    fn test_whitespace_only_input_is_empty_output() {
        for d in Delimiter::ALL {
            assert_eq!(list_to_joined("  \n  ", d), "");
            assert_eq!(joined_to_list("  \n  ", d), "");
            assert_eq!(list_to_joined("", d), "");
            assert_eq!(joined_to_list("", d), "");
        }
    }

    #[test]
    fn test_space_delimiter_splits_every_space() {
        assert_eq!(joined_to_list("a b  c", Delimiter::Space), "a\nb\nc");
    }

    #[test]
    fn test_crlf_and_lf_are_equivalent() {
        assert_eq!(normalize("a\r\nb\r\n\r\nc\n"), vec!["a", "b", "c"]);
        assert_eq!(list_to_joined("x\r\ny", Delimiter::Pipe), "x|y");
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        assert_eq!(
            list_to_joined("b\na\nb", Delimiter::Semicolon),
            "b;a;b"
        );
    }

    #[test]
    fn test_space_join_keeps_inner_spaces() {
        assert_eq!(list_to_joined("new york\nparis", Delimiter::Space), "new york paris");
    }

    #[test]
    fn test_convert_dispatches_on_direction() {
        assert_eq!(convert(Direction::ListToJoined, "1\n2", Delimiter::Pipe), "1|2");
        assert_eq!(convert(Direction::JoinedToList, "1|2", Delimiter::Pipe), "1\n2");
        assert_eq!(
            items_of(Direction::JoinedToList, "1|2", Delimiter::Pipe),
            vec!["1", "2"]
        );
    }

    fn delimiter_strategy() -> impl Strategy<Value = Delimiter> {
        prop::sample::select(Delimiter::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn normalize_never_yields_empty_items(raw in "[a-c \t\r\n]{0,40}") {
            for item in normalize(&raw) {
                prop_assert!(!item.is_empty());
                prop_assert_eq!(item.trim(), item.as_str());
            }
        }

        #[test]
        fn normalize_preserves_order(items in prop::collection::vec("[a-z]{1,6}", 0..10)) {
            let raw = items.join("\n \n");
            prop_assert_eq!(normalize(&raw), items);
        }

        #[test]
        fn round_trip_restores_normalized_items(
            items in prop::collection::vec("[a-z0-9]{1,6}( [a-z0-9]{1,6})?", 0..10),
            d in delimiter_strategy(),
        ) {
            // Items must not contain the delimiter itself.
            let items: Vec<String> = items
                .into_iter()
                .map(|i| i.replace(d.as_char(), ""))
                .filter(|i| !i.is_empty())
                .collect();
            let raw = items.join("\r\n\n");

            let joined = list_to_joined(&raw, d);
            prop_assert_eq!(joined_to_list(&joined, d), normalize(&raw).join("\n"));
        }

        #[test]
        fn normalize_is_idempotent(raw in "[a-c \r\n]{0,40}") {
            let once = normalize(&raw);
            let twice = normalize(&once.join("\n"));
            prop_assert_eq!(once, twice);
        }
    }
}
