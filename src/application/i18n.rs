//! Localized UI text.
//!
//! Strings are looked up by key in the active language's table, falling back
//! to English, then to the key itself. `{name}` placeholders are substituted
//! once; unknown placeholders are left as written.

use crate::domain::Language;

/// Source of localized strings.
pub trait TextProvider {
    /// Localized text for `key`.
    fn text(&self, key: &str) -> String;

    /// Localized text for `key` with `{name}` placeholders filled from `args`.
    fn text_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.text(key), args)
    }
}

const EN: &[(&str, &str)] = &[
    ("title", "List ⇄ String Converter"),
    ("select_delimiter", "Select delimiter"),
    ("paste_label", "Paste your list (one item per line):"),
    ("result_label", "Result:"),
    ("placeholder_input", "apple\nbanana\ncherry"),
    ("placeholder_output", "The result will appear here"),
    ("convert", "Convert"),
    ("clear", "Clear"),
    ("copy", "Copy"),
    ("clear_all", "Clear all"),
    ("copied", "{field} copied!"),
    ("copy_failed", "Failed to copy 😞"),
    ("delimiters.comma", "Comma (,)"),
    ("delimiters.semicolon", "Semicolon (;)"),
    ("delimiters.pipe", "Pipe (|)"),
    ("delimiters.space", "Space ( )"),
    ("tabs.list_to_joined", "List → String"),
    ("tabs.joined_to_list", "String → List"),
    ("fields.input", "Input"),
    ("fields.output", "Output"),
    ("footer", "Made with care"),
    ("language_set", "Language set to {lang}"),
    (
        "help",
        ":convert  :clear [input|output|all]  :copy [input|output]  :delim <comma|semicolon|pipe|space>  :mode <join|split>  :lang <en|uk>  :show  :quit",
    ),
];

const UK: &[(&str, &str)] = &[
    ("title", "Конвертер список ⇄ рядок"),
    ("select_delimiter", "Оберіть роздільник"),
    ("paste_label", "Вставте список (по одному елементу в рядку):"),
    ("result_label", "Результат:"),
    ("placeholder_input", "яблуко\nбанан\nвишня"),
    ("placeholder_output", "Тут з'явиться результат"),
    ("convert", "Конвертувати"),
    ("clear", "Очистити"),
    ("copy", "Копіювати"),
    ("clear_all", "Очистити все"),
    ("copied", "{field} скопійовано!"),
    ("copy_failed", "Не вдалося скопіювати 😞"),
    ("delimiters.comma", "Кома (,)"),
    ("delimiters.semicolon", "Крапка з комою (;)"),
    ("delimiters.pipe", "Вертикальна риска (|)"),
    ("delimiters.space", "Пробіл ( )"),
    ("tabs.list_to_joined", "Список → Рядок"),
    ("tabs.joined_to_list", "Рядок → Список"),
    ("fields.input", "Вхідні дані"),
    ("fields.output", "Результат"),
    ("footer", "Зроблено з турботою"),
    ("language_set", "Мову змінено на {lang}"),
];

/// Built-in English/Ukrainian string tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    const fn table(language: Language) -> &'static [(&'static str, &'static str)] {
        match language {
            Language::En => EN,
            Language::Uk => UK,
        }
    }

    fn lookup(language: Language, key: &str) -> Option<&'static str> {
        Self::table(language)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl TextProvider for Catalog {
    fn text(&self, key: &str) -> String {
        Self::lookup(self.language, key)
            .or_else(|| Self::lookup(Language::En, key))
            .map_or_else(
                || {
                    tracing::debug!(key, language = %self.language, "Missing translation");
                    key.to_string()
                },
                ToOwned::to_owned,
            )
    }
}

/// Replaces `{name}` with the matching value from `args`.
///
/// Substituted values are not scanned again.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(Catalog::new(Language::En).text("convert"), "Convert");
        assert_eq!(Catalog::new(Language::Uk).text("convert"), "Конвертувати");
    }

    #[test]
    fn test_falls_back_to_english_then_key() {
        let uk = Catalog::new(Language::Uk);
        assert!(uk.text("help").starts_with(":convert"));
        assert_eq!(uk.text("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_copied_message_takes_field() {
        let en = Catalog::new(Language::En);
        assert_eq!(en.text_with("copied", &[("field", "Output")]), "Output copied!");
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("{a} and {b}", &[("a", "x")]), "x and {b}");
        assert_eq!(interpolate("no placeholders", &[("a", "x")]), "no placeholders");
        assert_eq!(interpolate("open {brace", &[]), "open {brace");
    }

    #[test]
    fn test_interpolate_is_not_recursive() {
        assert_eq!(interpolate("{a}", &[("a", "{a}")]), "{a}");
    }

    #[test]
    fn test_every_english_key_has_ukrainian_text_except_help() {
        for (key, _) in EN {
            if *key == "help" {
                continue;
            }
            assert!(Catalog::lookup(Language::Uk, key).is_some(), "missing uk: {key}");
        }
    }
}
